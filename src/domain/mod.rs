//! Domain logic - build days, date formats and version strings, independent of I/O

pub mod build_day;
pub mod date_format;
pub mod suffix;
pub mod version;

pub use build_day::{epoch, BuildDay};
pub use date_format::{parse_build_date, DateFormat};
pub use suffix::VersionSuffix;
pub use version::{VersionShape, VersionString};
