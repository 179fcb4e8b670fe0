#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/repos/guillaumeblanc/ozz-animation/branches";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_TARGET: &str = "dashboard_table";
pub const DEFAULT_SUCCESS_STATUS: u16 = 200;
pub const DEFAULT_USER_AGENT: &str = concat!("badge-table/", env!("CARGO_PKG_VERSION"));
