//! Month Calendar Core Library
//!
//! Provides the platform-independent logic of the month calendar widget:
//! - Date identifiers and month arithmetic (`types`)
//! - The 6×7 grid view-model, rendered as a pure function (`services::grid`)
//! - The appointment editor state machine (`services::editor`)
//! - The `CalendarWidget` component object tying them together
//!
//! Persistence is abstracted through the `AppointmentStore` trait, so the same
//! widget runs over a JSON file in the terminal front-end and over memory in tests.

pub mod error;
pub mod services;
pub mod storage;
pub mod traits;
pub mod types;

// Re-export common types
pub use error::{CalendarError, CalendarResult};
pub use services::{CalendarWidget, EmptySubmit, SubmitOutcome, WidgetOptions};
pub use storage::{InMemoryAppointmentStore, JsonFileAppointmentStore};
pub use traits::{AppointmentStore, Clock, FixedClock, SystemClock};
pub use types::{
    ActiveMonth, DateCell, DateId, MonthView, WeekStart, CELLS_PER_VIEW, DAYS_PER_WEEK,
    WEEKS_PER_VIEW,
};
