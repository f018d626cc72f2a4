//! 日历组件
//!
//! 每个宿主构造一个实例，持有当前月份、今天、编辑器状态与约会仓库。
//! 所有变更都通过这里的方法完成，渲染结果由 [`CalendarWidget::view`] 重新计算。

use chrono::NaiveDate;

use crate::error::CalendarResult;
use crate::services::editor::{EditorForm, EditorState, EmptySubmit, SubmitOutcome};
use crate::services::grid;
use crate::traits::{AppointmentStore, Clock, SystemClock};
use crate::types::{ActiveMonth, DateId, MonthView, WeekStart};

/// 组件选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetOptions {
    pub week_start: WeekStart,
    pub empty_submit: EmptySubmit,
}

/// 月历组件
pub struct CalendarWidget<S, C = SystemClock> {
    store: S,
    clock: C,
    options: WidgetOptions,
    active: ActiveMonth,
    today: NaiveDate,
    editor: EditorState,
}

impl<S: AppointmentStore, C: Clock> CalendarWidget<S, C> {
    /// 创建组件，显示今天所在的月份
    pub fn new(store: S, clock: C, options: WidgetOptions) -> Self {
        let today = clock.today();
        Self {
            store,
            clock,
            options,
            active: ActiveMonth::containing(today),
            today,
            editor: EditorState::Hidden,
        }
    }

    pub fn active_month(&self) -> ActiveMonth {
        self.active
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    /// 打开中的编辑表单（用于输入）
    pub fn editor_form_mut(&mut self) -> Option<&mut EditorForm> {
        self.editor.form_mut()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ========== 导航 ==========

    /// 上一个月
    pub fn go_to_previous_month(&mut self) -> CalendarResult<()> {
        self.active = self.active.previous()?;
        self.editor.close();
        log::debug!("Navigated to {}", self.active);
        Ok(())
    }

    /// 下一个月
    pub fn go_to_next_month(&mut self) -> CalendarResult<()> {
        self.active = self.active.next()?;
        self.editor.close();
        log::debug!("Navigated to {}", self.active);
        Ok(())
    }

    /// 回到今天所在的月份（同时刷新“今天”）
    pub fn go_to_today(&mut self) {
        self.today = self.clock.today();
        self.active = ActiveMonth::containing(self.today);
        self.editor.close();
        log::debug!("Navigated to today ({})", self.today);
    }

    // ========== 渲染 ==========

    /// 计算当前月视图
    pub fn view(&self) -> CalendarResult<MonthView> {
        grid::render_month(self.active, self.today, &self.store, self.options.week_start)
    }

    // ========== 约会 ==========

    /// 某天的约会
    pub fn appointment(&self, date: NaiveDate) -> CalendarResult<Option<String>> {
        self.store.get(&DateId::from_date(date)?)
    }

    /// 在某天打开编辑器，已有约会时预填其文本
    pub fn open_editor(&mut self, date: NaiveDate) -> CalendarResult<()> {
        let id = DateId::from_date(date)?;
        let text = self.store.get(&id)?.unwrap_or_default();
        self.editor.show(EditorForm::new(id, date, text));
        Ok(())
    }

    /// 关闭编辑器，不保存
    pub fn cancel_editor(&mut self) {
        self.editor.close();
    }

    /// 提交编辑器
    ///
    /// 空文本从不写入仓库；编辑器是否关闭取决于 [`EmptySubmit`]。
    pub fn submit_editor(&mut self) -> CalendarResult<SubmitOutcome> {
        let Some(form) = self.editor.form() else {
            return Ok(SubmitOutcome::NotEditing);
        };

        if form.is_blank() {
            let closed = self.options.empty_submit == EmptySubmit::Close;
            if closed {
                self.editor.close();
            }
            return Ok(SubmitOutcome::IgnoredEmpty { closed });
        }

        let id = form.target;
        let text = form.text().trim().to_string();
        self.store.set(&id, &text)?;
        self.editor.close();
        log::info!("Saved appointment for {id}");

        Ok(SubmitOutcome::Saved { id, text })
    }

    /// 直接删除某天的约会（不经过编辑器）
    ///
    /// 编辑器若正指向这一天则一并关闭。
    pub fn delete_appointment(&mut self, date: NaiveDate) -> CalendarResult<bool> {
        let id = DateId::from_date(date)?;
        let removed = self.store.delete(&id)?;
        if self.editor.targets(&id) {
            self.editor.close();
        }
        if removed {
            log::info!("Deleted appointment for {id}");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::editor::MAX_APPOINTMENT_LEN;
    use crate::storage::{InMemoryAppointmentStore, JsonFileAppointmentStore};
    use crate::traits::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn widget() -> CalendarWidget<InMemoryAppointmentStore, FixedClock> {
        CalendarWidget::new(
            InMemoryAppointmentStore::new(),
            FixedClock(date(2026, 10, 17)),
            WidgetOptions::default(),
        )
    }

    fn type_text<S: AppointmentStore, C: Clock>(w: &mut CalendarWidget<S, C>, text: &str) {
        let form = w.editor_form_mut().unwrap();
        form.move_end();
        while form.cursor() > 0 {
            form.backspace();
        }
        for c in text.chars() {
            form.insert(c);
        }
    }

    #[test]
    fn starts_on_current_month() {
        let w = widget();
        assert_eq!(w.active_month(), ActiveMonth::new(2026, 10).unwrap());
        assert_eq!(w.view().unwrap().label, "Oct 2026");
    }

    #[test]
    fn next_then_previous_returns_to_same_view() {
        let mut w = widget();
        let before = w.view().unwrap();
        w.go_to_next_month().unwrap();
        assert_eq!(w.view().unwrap().label, "Nov 2026");
        w.go_to_previous_month().unwrap();
        assert_eq!(w.view().unwrap(), before);
    }

    #[test]
    fn navigation_crosses_year_boundaries() {
        let mut w = widget();
        for _ in 0..3 {
            w.go_to_next_month().unwrap();
        }
        assert_eq!(w.view().unwrap().label, "Jan 2027");
        for _ in 0..13 {
            w.go_to_previous_month().unwrap();
        }
        assert_eq!(w.view().unwrap().label, "Dec 2025");
    }

    #[test]
    fn today_resets_month() {
        let mut w = widget();
        w.go_to_previous_month().unwrap();
        w.go_to_previous_month().unwrap();
        w.go_to_today();
        assert_eq!(w.active_month(), ActiveMonth::new(2026, 10).unwrap());
        assert!(w.view().unwrap().today_cell().is_some());
    }

    #[test]
    fn today_marker_disappears_when_far_away() {
        let mut w = widget();
        w.go_to_next_month().unwrap();
        w.go_to_next_month().unwrap();
        assert!(w.view().unwrap().today_cell().is_none());
    }

    #[test]
    fn submit_upserts_and_rerender_shows_text() {
        let mut w = widget();
        let day = date(2026, 10, 20);
        w.open_editor(day).unwrap();
        type_text(&mut w, "  dentist  ");
        let outcome = w.submit_editor().unwrap();

        assert!(matches!(outcome, SubmitOutcome::Saved { ref text, .. } if text == "dentist"));
        assert!(!w.editor().is_open());
        let view = w.view().unwrap();
        let idx = view.index_of(day).unwrap();
        assert_eq!(view.cells[idx].appointment.as_deref(), Some("dentist"));
    }

    #[test]
    fn single_edit_changes_exactly_one_cell() {
        let mut w = widget();
        let before = w.view().unwrap();
        w.open_editor(date(2026, 10, 5)).unwrap();
        type_text(&mut w, "gym");
        w.submit_editor().unwrap();
        let after = w.view().unwrap();
        assert_eq!(before.diff(&after), vec![before.index_of(date(2026, 10, 5)).unwrap()]);
    }

    #[test]
    fn opening_existing_appointment_prefills_text() {
        let mut w = widget();
        let day = date(2026, 10, 20);
        w.open_editor(day).unwrap();
        type_text(&mut w, "dentist");
        w.submit_editor().unwrap();

        w.open_editor(day).unwrap();
        assert_eq!(w.editor().form().unwrap().text(), "dentist");
        type_text(&mut w, "doctor");
        w.submit_editor().unwrap();
        assert_eq!(w.appointment(day).unwrap().as_deref(), Some("doctor"));
    }

    #[test]
    fn opening_empty_cell_prefills_nothing() {
        let mut w = widget();
        w.open_editor(date(2026, 10, 1)).unwrap();
        assert_eq!(w.editor().form().unwrap().text(), "");
    }

    #[test]
    fn empty_submit_keeps_editor_open_by_default() {
        let mut w = widget();
        w.open_editor(date(2026, 10, 20)).unwrap();
        type_text(&mut w, "   ");
        let outcome = w.submit_editor().unwrap();
        assert_eq!(outcome, SubmitOutcome::IgnoredEmpty { closed: false });
        assert!(w.editor().is_open());
        assert!(w.store().is_empty());
    }

    #[test]
    fn empty_submit_can_close_editor() {
        let mut w = CalendarWidget::new(
            InMemoryAppointmentStore::new(),
            FixedClock(date(2026, 10, 17)),
            WidgetOptions {
                empty_submit: EmptySubmit::Close,
                ..WidgetOptions::default()
            },
        );
        w.open_editor(date(2026, 10, 20)).unwrap();
        let outcome = w.submit_editor().unwrap();
        assert_eq!(outcome, SubmitOutcome::IgnoredEmpty { closed: true });
        assert!(!w.editor().is_open());
    }

    #[test]
    fn empty_submit_never_overwrites_existing_text() {
        let mut w = widget();
        let day = date(2026, 10, 20);
        w.open_editor(day).unwrap();
        type_text(&mut w, "dentist");
        w.submit_editor().unwrap();

        w.open_editor(day).unwrap();
        type_text(&mut w, "");
        w.submit_editor().unwrap();
        assert_eq!(w.appointment(day).unwrap().as_deref(), Some("dentist"));
    }

    #[test]
    fn submit_without_editor_is_reported() {
        let mut w = widget();
        assert_eq!(w.submit_editor().unwrap(), SubmitOutcome::NotEditing);
    }

    #[test]
    fn resubmitting_long_stored_text_keeps_it_whole() {
        let day = date(2026, 10, 20);
        let long = "y".repeat(MAX_APPOINTMENT_LEN + 50);
        let mut store = InMemoryAppointmentStore::new();
        store.set(&DateId::from_date(day).unwrap(), &long).unwrap();
        let mut w = CalendarWidget::new(store, FixedClock(date(2026, 10, 17)), WidgetOptions::default());

        w.open_editor(day).unwrap();
        w.submit_editor().unwrap();
        assert_eq!(w.appointment(day).unwrap(), Some(long));
    }

    #[test]
    fn cancel_discards_text() {
        let mut w = widget();
        let day = date(2026, 10, 20);
        w.open_editor(day).unwrap();
        type_text(&mut w, "dentist");
        w.cancel_editor();
        assert!(!w.editor().is_open());
        assert!(w.appointment(day).unwrap().is_none());
    }

    #[test]
    fn delete_removes_from_store_and_view() {
        let mut w = widget();
        let day = date(2026, 10, 20);
        w.open_editor(day).unwrap();
        type_text(&mut w, "dentist");
        w.submit_editor().unwrap();

        assert!(w.delete_appointment(day).unwrap());
        assert!(w.appointment(day).unwrap().is_none());
        let view = w.view().unwrap();
        assert!(view.cells.iter().all(|c| c.appointment.is_none()));
        assert!(!w.delete_appointment(day).unwrap());
    }

    #[test]
    fn delete_closes_editor_on_same_day_only() {
        let mut w = widget();
        w.open_editor(date(2026, 10, 20)).unwrap();
        w.delete_appointment(date(2026, 10, 21)).unwrap();
        assert!(w.editor().is_open());
        w.delete_appointment(date(2026, 10, 20)).unwrap();
        assert!(!w.editor().is_open());
    }

    #[test]
    fn navigation_closes_editor() {
        let mut w = widget();
        w.open_editor(date(2026, 10, 20)).unwrap();
        w.go_to_next_month().unwrap();
        assert!(!w.editor().is_open());
    }

    #[test]
    fn appointments_survive_a_new_widget_over_same_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.json");
        let day = date(2026, 10, 20);

        let mut first = CalendarWidget::new(
            JsonFileAppointmentStore::open(&path).unwrap(),
            FixedClock(date(2026, 10, 17)),
            WidgetOptions::default(),
        );
        first.open_editor(day).unwrap();
        type_text(&mut first, "dentist");
        first.submit_editor().unwrap();
        drop(first);

        let second = CalendarWidget::new(
            JsonFileAppointmentStore::open(&path).unwrap(),
            FixedClock(date(2026, 10, 17)),
            WidgetOptions::default(),
        );
        assert_eq!(second.appointment(day).unwrap().as_deref(), Some("dentist"));
    }
}
