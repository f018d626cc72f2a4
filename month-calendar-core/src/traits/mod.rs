//! Storage and environment abstraction trait definition

mod appointment_store;
mod clock;

pub use appointment_store::AppointmentStore;
pub use clock::{Clock, FixedClock, SystemClock};
