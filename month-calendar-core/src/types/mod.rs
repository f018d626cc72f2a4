//! 类型定义模块

mod date_id;
mod month;
mod view;

pub use date_id::DateId;
pub use month::{ActiveMonth, WeekStart};
pub use view::{DateCell, MonthView, CELLS_PER_VIEW, DAYS_PER_WEEK, WEEKS_PER_VIEW};
