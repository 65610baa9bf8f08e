pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{RunConfig, TomlConfig};
pub use self::core::{etl::PuzzleEngine, report::render};
pub use domain::model::{Answer, Day, MalformedPolicy, OutputFormat, Part, Report};
pub use utils::error::{PuzzleError, Result};
