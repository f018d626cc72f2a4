//! 内存约会仓库

use std::collections::HashMap;

use crate::error::CalendarResult;
use crate::traits::AppointmentStore;
use crate::types::DateId;

/// 内存约会仓库
///
/// 数据存储在内存中（重启后丢失）
#[derive(Debug, Default, Clone)]
pub struct InMemoryAppointmentStore {
    entries: HashMap<DateId, String>,
}

impl InMemoryAppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AppointmentStore for InMemoryAppointmentStore {
    fn get(&self, id: &DateId) -> CalendarResult<Option<String>> {
        Ok(self.entries.get(id).cloned())
    }

    fn set(&mut self, id: &DateId, text: &str) -> CalendarResult<()> {
        self.entries.insert(*id, text.to_string());
        Ok(())
    }

    fn delete(&mut self, id: &DateId) -> CalendarResult<bool> {
        Ok(self.entries.remove(id).is_some())
    }
}
