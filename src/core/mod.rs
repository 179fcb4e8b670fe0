pub mod ordering;
pub mod render;
pub mod table;

pub use crate::domain::model::{BadgeTemplate, BranchList, BranchRecord, TableRow};
pub use crate::domain::ports::{BranchSource, ConfigProvider, MarkupSink};
pub use crate::utils::error::Result;
