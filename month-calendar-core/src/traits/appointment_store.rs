//! 约会持久化抽象 Trait

use crate::error::CalendarResult;
use crate::types::DateId;

/// 约会仓库 Trait
///
/// 每个日期最多一条约会，值为纯文本。
///
/// 平台实现:
/// - TUI: `JsonFileAppointmentStore` (JSON 文件)
/// - 测试 / 临时会话: `InMemoryAppointmentStore`
pub trait AppointmentStore {
    /// 获取某天的约会
    ///
    /// # Returns
    /// * `Some(text)` - 找到约会
    /// * `None` - 该天没有约会
    fn get(&self, id: &DateId) -> CalendarResult<Option<String>>;

    /// 保存或覆盖某天的约会
    fn set(&mut self, id: &DateId, text: &str) -> CalendarResult<()>;

    /// 删除某天的约会
    ///
    /// # Returns
    /// * `true` - 确实删除了一条约会
    /// * `false` - 该天本来就没有约会
    fn delete(&mut self, id: &DateId) -> CalendarResult<bool>;
}

impl<S: AppointmentStore + ?Sized> AppointmentStore for Box<S> {
    fn get(&self, id: &DateId) -> CalendarResult<Option<String>> {
        (**self).get(id)
    }

    fn set(&mut self, id: &DateId, text: &str) -> CalendarResult<()> {
        (**self).set(id, text)
    }

    fn delete(&mut self, id: &DateId) -> CalendarResult<bool> {
        (**self).delete(id)
    }
}
