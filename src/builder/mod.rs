pub mod processor;
pub mod types;

pub use processor::process_files;
pub use types::{FileStatus, RunSummary};
