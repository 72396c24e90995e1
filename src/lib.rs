pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, LeadFiles};

pub use core::{etl::EtlEngine, pipeline::LeadPipeline};
pub use utils::error::{LeadError, Result};
