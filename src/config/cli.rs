use crate::adapters::form::UrlEncodedForm;
use crate::config::toml_config::TomlConfig;
use crate::config::{CliConfig, Settings};
use crate::utils::error::{Result, SplitError};
use crate::utils::validation::Validate;
use std::fs;

impl CliConfig {
    /// 讀取表單內容：`--form` 優先，其次 `--form-file`
    pub fn load_form(&self) -> Result<UrlEncodedForm> {
        if let Some(body) = &self.form {
            return Ok(UrlEncodedForm::parse(body));
        }

        match &self.form_file {
            Some(path) => {
                tracing::debug!("Reading form submission from {}", path);
                let body = fs::read_to_string(path)?;
                Ok(UrlEncodedForm::parse(&body))
            }
            None => Err(SplitError::MissingConfigError {
                field: "form".to_string(),
            }),
        }
    }

    /// Loads the config file (if any), applies flag overrides and validates.
    pub fn settings(&self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => TomlConfig::default(),
        };

        let mut settings = file_config.into_settings()?;

        // 命令列設定覆蓋設定檔
        if let Some(format) = self.format {
            settings.output = format;
        }
        if let Some(offset) = self.utc_offset {
            tracing::info!("🔧 UTC offset overridden to: {}h", offset);
            settings.display.utc_offset_hours = offset;
        }

        settings.validate()?;
        Ok(settings)
    }
}
