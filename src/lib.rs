pub mod args;
pub mod error;
pub mod report;
pub mod reporter;
pub mod stats;
pub mod straggler;
pub mod utils;

pub use args::Args;
pub use error::ReportError;
pub use report::{DomainCounts, Report};
pub use reporter::run_report;
pub use stats::RunStats;
pub use straggler::{find_stragglers, Queue, Straggler, THRESHOLD};
