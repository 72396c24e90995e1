pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const INPUT_FILE: &str = "bucharest-results.json";
pub const OUTPUT_ALL: &str = "bucharest-leads-all.csv";
pub const OUTPUT_TIER1: &str = "bucharest-leads-tier1.csv";
pub const OUTPUT_TIER2: &str = "bucharest-leads-tier2.csv";

/// 輸入與三個輸出檔名，預設值為固定常數
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadFiles {
    pub input: String,
    pub output_all: String,
    pub output_tier1: String,
    pub output_tier2: String,
}

impl Default for LeadFiles {
    fn default() -> Self {
        Self {
            input: INPUT_FILE.to_string(),
            output_all: OUTPUT_ALL.to_string(),
            output_tier1: OUTPUT_TIER1.to_string(),
            output_tier2: OUTPUT_TIER2.to_string(),
        }
    }
}

impl ConfigProvider for LeadFiles {
    fn input_file(&self) -> &str {
        &self.input
    }

    fn output_all(&self) -> &str {
        &self.output_all
    }

    fn output_tier1(&self) -> &str {
        &self.output_tier1
    }

    fn output_tier2(&self) -> &str {
        &self.output_tier2
    }
}

impl Validate for LeadFiles {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output_all", &self.output_all)?;
        validate_path("output_tier1", &self.output_tier1)?;
        validate_path("output_tier2", &self.output_tier2)?;

        validate_distinct_paths(&[
            ("input", self.input.as_str()),
            ("output_all", self.output_all.as_str()),
            ("output_tier1", self.output_tier1.as_str()),
            ("output_tier2", self.output_tier2.as_str()),
        ])
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "lead-filter")]
#[command(about = "Filter scraped business listings into ranked sales leads")]
pub struct CliConfig {
    /// Directory containing the results file; exports are written next to it
    #[arg(long, default_value = ".")]
    pub base_dir: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn files(&self) -> LeadFiles {
        LeadFiles::default()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("base_dir", &self.base_dir)?;
        self.files().validate()
    }
}
