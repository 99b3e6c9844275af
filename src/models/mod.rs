pub mod daily_log;
pub mod duty_status;
pub mod segment;

pub use daily_log::{DailyLog, LogTotals};
pub use duty_status::{CanonicalRow, ColorToken};
pub use segment::Segment;
