//! 测试辅助

use chrono::NaiveDate;
use month_calendar_core::{
    AppointmentStore, CalendarError, CalendarResult, CalendarWidget, Clock, DateId, FixedClock,
    InMemoryAppointmentStore, WidgetOptions,
};

use crate::model::App;

/// 固定在 2026-10-17 的内存应用
pub fn test_app() -> App {
    test_app_with(Box::new(InMemoryAppointmentStore::new()))
}

/// 固定在 2026-10-17、使用指定仓库的应用
pub fn test_app_with(store: Box<dyn AppointmentStore>) -> App {
    let clock: Box<dyn Clock> = Box::new(FixedClock(
        NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date"),
    ));
    let calendar = CalendarWidget::new(store, clock, WidgetOptions::default());
    App::new(calendar).expect("view renders")
}

/// 读取正常、写入总是失败的仓库
pub struct FailingStore;

impl AppointmentStore for FailingStore {
    fn get(&self, _id: &DateId) -> CalendarResult<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _id: &DateId, _text: &str) -> CalendarResult<()> {
        Err(CalendarError::Storage("disk full".to_string()))
    }

    fn delete(&mut self, _id: &DateId) -> CalendarResult<bool> {
        Err(CalendarError::Storage("disk full".to_string()))
    }
}
