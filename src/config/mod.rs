#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

pub const DEFAULT_WEB_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";
pub const DEFAULT_PINTEREST_ENDPOINT: &str = "https://api.pinterest.com/v5/pins/search";
pub const DEFAULT_RESULT_LIMIT: usize = 10;

pub const OUTPUT_FORMATS: &[&str] = &["json", "csv"];
