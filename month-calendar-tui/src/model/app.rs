//! 应用主状态结构

use chrono::NaiveDate;
use month_calendar_core::{
    AppointmentStore, CalendarError, CalendarResult, CalendarWidget, Clock, MonthView,
    CELLS_PER_VIEW,
};
use ratatui::layout::Rect;

use super::ModalState;

/// TUI 使用的组件类型（仓库与时钟都在启动时注入）
pub type Widget = CalendarWidget<Box<dyn AppointmentStore>, Box<dyn Clock>>;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 月历组件
    pub calendar: Widget,

    /// 当前月视图
    pub month: MonthView,

    /// 选中的格子下标
    pub selected: usize,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 弹窗状态
    pub modal: ModalState,

    /// 最近一次绘制的终端区域
    pub viewport: Rect,
}

impl App {
    /// 创建新的应用实例
    pub fn new(calendar: Widget) -> CalendarResult<Self> {
        let month = calendar.view()?;
        let mut app = Self {
            should_quit: false,
            calendar,
            month,
            selected: 0,
            status_message: None,
            modal: ModalState::new(),
            viewport: Rect::default(),
        };
        app.select_default();
        Ok(app)
    }

    /// 选中格子对应的日期
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.month.cells.get(self.selected).map(|cell| cell.date)
    }

    /// 选中某个格子（越界时夹到边缘）
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(CELLS_PER_VIEW - 1);
    }

    /// 按偏移移动选中格子
    pub fn move_selection(&mut self, delta: isize) {
        self.select(self.selected.saturating_add_signed(delta));
    }

    /// 选中今天（若在本月）或本月 1 日
    pub fn select_default(&mut self) {
        let today = self.calendar.today();
        let active = self.calendar.active_month();
        let target = if active.contains(today) {
            today
        } else {
            active.first_day()
        };
        if let Some(index) = self.month.index_of(target) {
            self.selected = index;
        }
    }

    /// 重新渲染月视图
    pub fn refresh(&mut self) {
        match self.calendar.view() {
            Ok(view) => {
                let changed = self.month.diff(&view);
                log::debug!("Rendered {}: {} cell(s) changed", view.label, changed.len());
                self.month = view;
            }
            Err(e) => self.report_error(&e),
        }
    }

    /// 记录错误并显示在状态栏
    pub fn report_error(&mut self, error: &CalendarError) {
        if error.is_expected() {
            log::warn!("{error}");
        } else {
            log::error!("{error}");
        }
        self.set_status(format!("Error: {error}"));
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
