//! Job domain: identifier, status, state machine, and error taxonomy.

mod error;
mod state;
mod status;
mod types;

pub use error::JobError;
pub use state::{JobState, Transition};
pub use status::JobStatus;
pub use types::{JobId, StatusUpdate};
