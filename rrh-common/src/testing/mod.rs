//! Test support shared by the workspace crates.

mod log;
mod mock_backend;

pub use log::init_test_logging;
pub use mock_backend::{RecordedRollback, RecordingBackend};
