pub mod error;
pub mod report;

pub use error::{CheckError, ErrorKind, Result};
pub use report::{MAX_SAMPLE_ROWS, ReportKind, ViolationReport};
