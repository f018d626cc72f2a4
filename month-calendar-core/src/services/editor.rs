//! 约会编辑器状态机
//!
//! `Hidden → Shown(target) → Hidden`。编辑器只管文本与光标，
//! 提交时由 `CalendarWidget` 负责写入仓库。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::DateId;

/// 约会文本最大字符数
pub const MAX_APPOINTMENT_LEN: usize = 200;

/// 提交空文本时编辑器的去向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptySubmit {
    /// 保持打开，什么都不做
    #[default]
    KeepOpen,
    /// 关闭编辑器，不保存
    Close,
}

/// 提交结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 已保存（文本已去除首尾空白）
    Saved { id: DateId, text: String },
    /// 文本为空，未写入仓库
    IgnoredEmpty { closed: bool },
    /// 编辑器未打开
    NotEditing,
}

/// 打开中的编辑表单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorForm {
    /// 目标格子的存储键
    pub target: DateId,
    /// 目标日期
    pub date: NaiveDate,
    text: String,
    /// 光标位置（按字符计）
    cursor: usize,
}

impl EditorForm {
    /// 创建表单，光标放在末尾
    ///
    /// 预填文本原样保留，长度上限只约束新输入。
    pub fn new(target: DateId, date: NaiveDate, text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            target,
            date,
            text,
            cursor,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 去除首尾空白后是否为空
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// 在光标处插入字符，超长或控制字符忽略
    pub fn insert(&mut self, c: char) {
        if c.is_control() || self.text.chars().count() >= MAX_APPOINTMENT_LEN {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// 删除光标前一个字符
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }

    /// 删除光标后一个字符
    pub fn delete(&mut self) {
        if self.cursor >= self.text.chars().count() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }
}

/// 编辑器状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Hidden,
    Shown(EditorForm),
}

impl EditorState {
    pub fn is_open(&self) -> bool {
        matches!(self, EditorState::Shown(_))
    }

    pub fn form(&self) -> Option<&EditorForm> {
        match self {
            EditorState::Shown(form) => Some(form),
            EditorState::Hidden => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut EditorForm> {
        match self {
            EditorState::Shown(form) => Some(form),
            EditorState::Hidden => None,
        }
    }

    /// 打开编辑器（已打开时替换目标）
    pub fn show(&mut self, form: EditorForm) {
        *self = EditorState::Shown(form);
    }

    /// 关闭编辑器
    pub fn close(&mut self) {
        *self = EditorState::Hidden;
    }

    /// 编辑器是否正指向某一天
    pub fn targets(&self, id: &DateId) -> bool {
        self.form().is_some_and(|form| form.target == *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(text: &str) -> EditorForm {
        EditorForm::new(
            DateId::from_millis(0),
            NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            text,
        )
    }

    #[test]
    fn new_form_places_cursor_at_end() {
        let f = form("lunch");
        assert_eq!(f.cursor(), 5);
    }

    #[test]
    fn insert_at_cursor() {
        let mut f = form("lunh");
        f.move_left();
        f.insert('c');
        assert_eq!(f.text(), "lunch");
        assert_eq!(f.cursor(), 4);
    }

    #[test]
    fn backspace_and_delete_handle_multibyte_chars() {
        let mut f = form("café");
        f.backspace();
        assert_eq!(f.text(), "caf");
        f.move_home();
        f.delete();
        assert_eq!(f.text(), "af");
        assert_eq!(f.cursor(), 0);
    }

    #[test]
    fn editing_at_boundaries_is_a_no_op() {
        let mut f = form("");
        f.backspace();
        f.delete();
        f.move_left();
        f.move_right();
        assert_eq!(f.text(), "");
        assert_eq!(f.cursor(), 0);
    }

    #[test]
    fn control_chars_are_ignored() {
        let mut f = form("a");
        f.insert('\n');
        f.insert('\t');
        assert_eq!(f.text(), "a");
    }

    #[test]
    fn input_is_capped() {
        let mut f = form(&"x".repeat(MAX_APPOINTMENT_LEN - 1));
        f.insert('y');
        f.insert('z');
        assert_eq!(f.text().chars().count(), MAX_APPOINTMENT_LEN);
        assert!(f.text().ends_with('y'));
    }

    #[test]
    fn long_prefill_is_kept_intact() {
        let long = "x".repeat(MAX_APPOINTMENT_LEN + 10);
        let mut f = form(&long);
        assert_eq!(f.text(), long);
        assert_eq!(f.cursor(), MAX_APPOINTMENT_LEN + 10);

        f.insert('y');
        assert_eq!(f.text(), long);
        f.backspace();
        assert_eq!(f.text().chars().count(), MAX_APPOINTMENT_LEN + 9);
    }

    #[test]
    fn whitespace_only_is_blank() {
        assert!(form("   ").is_blank());
        assert!(!form(" a ").is_blank());
    }

    #[test]
    fn state_transitions() {
        let mut state = EditorState::default();
        assert!(!state.is_open());
        state.show(form("x"));
        assert!(state.is_open());
        assert!(state.targets(&DateId::from_millis(0)));
        assert!(!state.targets(&DateId::from_millis(1)));
        state.close();
        assert_eq!(state, EditorState::Hidden);
    }

    #[test]
    fn empty_submit_policy_serde_names() {
        assert_eq!(serde_json::to_string(&EmptySubmit::KeepOpen).unwrap(), "\"keep_open\"");
        let close: EmptySubmit = serde_json::from_str("\"close\"").unwrap();
        assert_eq!(close, EmptySubmit::Close);
    }
}
