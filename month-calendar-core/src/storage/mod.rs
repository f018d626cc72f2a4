//! 约会仓库实现

mod json_file;
mod memory;

pub use json_file::JsonFileAppointmentStore;
pub use memory::InMemoryAppointmentStore;
