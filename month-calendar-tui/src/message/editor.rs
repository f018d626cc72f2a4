//! 编辑器消息

/// 编辑器消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMessage {
    /// 输入字符
    Input(char),
    /// 删除光标前的字符（Backspace）
    Backspace,
    /// 删除光标后的字符（Delete）
    Delete,
    /// 光标左移
    CursorLeft,
    /// 光标右移
    CursorRight,
    /// 光标移到开头
    CursorHome,
    /// 光标移到末尾
    CursorEnd,
    /// 提交
    Submit,
    /// 取消
    Cancel,
}
