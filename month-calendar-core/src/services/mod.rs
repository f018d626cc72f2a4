//! 业务逻辑服务层

pub mod editor;
pub mod grid;
mod widget;

pub use editor::{EditorForm, EditorState, EmptySubmit, SubmitOutcome, MAX_APPOINTMENT_LEN};
pub use grid::{first_visible_date, render_month, render_month_in};
pub use widget::{CalendarWidget, WidgetOptions};
