pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::form::UrlEncodedForm;
pub use config::{toml_config::TomlConfig, Settings};
pub use crate::core::{
    allocation::{calc_tier_amounts, summarize},
    form::parse_event_form_data,
    format::{format_currency, format_event_date, held_at_to_input_value, DisplayFormat},
    preview::{EventPreview, PreviewEngine},
    render::{render, OutputFormat},
};
pub use domain::model::{
    AllocationSummary, EventFormInput, HeldAt, HeldAtInput, TierAllocation, TierConfig,
};
pub use domain::ports::FormSource;
pub use utils::error::{Result, SplitError};
