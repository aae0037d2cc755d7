#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::format::DisplayFormat;
use crate::core::render::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
#[cfg(feature = "cli")]
use clap::{ArgGroup, Parser};

pub const MIN_UTC_OFFSET_HOURS: i32 = -12;
pub const MAX_UTC_OFFSET_HOURS: i32 = 14;

/// Effective settings after merging the config file and command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub display: DisplayFormat,
    pub output: OutputFormat,
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_display(&self.display)
    }
}

pub(crate) fn validate_display(display: &DisplayFormat) -> Result<()> {
    validate_non_empty_string("display.currency_suffix", &display.currency_suffix)?;
    validate_range(
        "display.utc_offset_hours",
        display.utc_offset_hours,
        MIN_UTC_OFFSET_HOURS,
        MAX_UTC_OFFSET_HOURS,
    )
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "tier-split")]
#[command(about = "Preview per-person amounts of a tiered bill split")]
#[command(group(ArgGroup::new("input").required(true).args(["form", "form_file"])))]
pub struct CliConfig {
    /// URL-encoded form submission, e.g. "totalAmount=10000&tierCount=2&tier_1_count=2"
    #[arg(long)]
    pub form: Option<String>,

    /// File holding a URL-encoded form submission
    #[arg(long)]
    pub form_file: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format, overrides the config file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Display time zone as hours from UTC, overrides the config file
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset: Option<i32>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}
