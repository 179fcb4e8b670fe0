pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::http::HttpBranchSource;
pub use adapters::sink::{FileSink, MemorySink, StdoutSink};
pub use core::table::BadgeTable;
pub use domain::model::{BadgeTemplate, BranchList, BranchRecord};
pub use utils::error::{BadgeError, Result};
