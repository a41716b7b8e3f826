//! The daily task pipeline.

mod daily;

pub use daily::{run_once, AqiProvider, RunOutcome, StatusPublisher, TaskError};
