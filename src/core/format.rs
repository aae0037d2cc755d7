use crate::domain::model::{HeldAt, HeldAtInput};
use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY_SUFFIX: &str = "円";
pub const DEFAULT_GROUPING_SEPARATOR: &str = ",";
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

/// Display conventions for amounts and event dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayFormat {
    pub currency_suffix: String,
    pub grouping_separator: String,
    pub utc_offset_hours: i32,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            currency_suffix: DEFAULT_CURRENCY_SUFFIX.to_string(),
            grouping_separator: DEFAULT_GROUPING_SEPARATOR.to_string(),
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}

impl DisplayFormat {
    /// `1234567` → `"1,234,567円"`. Never fails.
    pub fn format_currency(&self, amount: i64) -> String {
        let digits = amount.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.grouping_separator);
            }
            grouped.push(digit);
        }

        let sign = if amount < 0 { "-" } else { "" };
        format!("{}{}{}", sign, grouped, self.currency_suffix)
    }

    /// `YYYY/MM/DD` in the display time zone, `""` when absent or invalid.
    pub fn format_event_date(&self, held_at: Option<&HeldAtInput>) -> String {
        self.render_date(held_at, "%Y/%m/%d")
    }

    /// `YYYY-MM-DD` for a native date input, `""` when absent or invalid.
    pub fn held_at_to_input_value(&self, held_at: Option<&HeldAtInput>) -> String {
        self.render_date(held_at, "%Y-%m-%d")
    }

    pub fn format_held_at(&self, held_at: HeldAt) -> String {
        self.render_date(Some(&HeldAtInput::from(held_at)), "%Y/%m/%d")
    }

    fn render_date(&self, held_at: Option<&HeldAtInput>, pattern: &str) -> String {
        held_at
            .and_then(HeldAtInput::resolve)
            .and_then(HeldAt::to_datetime)
            .map(|datetime| {
                datetime
                    .with_timezone(&self.offset())
                    .format(pattern)
                    .to_string()
            })
            .unwrap_or_default()
    }

    fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours.saturating_mul(3600)).unwrap_or_else(|| {
            tracing::warn!(
                "UTC offset {}h out of range, falling back to UTC",
                self.utc_offset_hours
            );
            Utc.fix()
        })
    }
}

pub fn format_currency(amount: i64) -> String {
    DisplayFormat::default().format_currency(amount)
}

pub fn format_event_date(held_at: Option<&HeldAtInput>) -> String {
    DisplayFormat::default().format_event_date(held_at)
}

pub fn held_at_to_input_value(held_at: Option<&HeldAtInput>) -> String {
    DisplayFormat::default().held_at_to_input_value(held_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "0円");
        assert_eq!(format_currency(999), "999円");
        assert_eq!(format_currency(1000), "1,000円");
        assert_eq!(format_currency(1234567), "1,234,567円");
        assert_eq!(format_currency(-1500), "-1,500円");
        assert_eq!(format_currency(i64::MIN), "-9,223,372,036,854,775,808円");
    }

    #[test]
    fn test_custom_currency_format() {
        let format = DisplayFormat {
            currency_suffix: " JPY".to_string(),
            grouping_separator: ".".to_string(),
            utc_offset_hours: 0,
        };
        assert_eq!(format.format_currency(1234567), "1.234.567 JPY");
    }

    #[test]
    fn test_format_event_date_absent_or_invalid() {
        assert_eq!(format_event_date(None), "");
        assert_eq!(format_event_date(Some(&HeldAtInput::iso(""))), "");
        assert_eq!(format_event_date(Some(&HeldAtInput::iso("not-a-date"))), "");
        assert_eq!(held_at_to_input_value(None), "");
        assert_eq!(held_at_to_input_value(Some(&HeldAtInput::iso("not-a-date"))), "");
    }

    #[test]
    fn test_format_event_date_from_both_shapes() {
        let iso = HeldAtInput::iso("2024-05-01T12:00:00Z");
        assert_eq!(format_event_date(Some(&iso)), "2024/05/01");
        assert_eq!(held_at_to_input_value(Some(&iso)), "2024-05-01");

        // 2024-05-01T00:00:00Z
        let seconds = HeldAtInput::seconds(1_714_521_600);
        assert_eq!(format_event_date(Some(&seconds)), "2024/05/01");
    }

    #[test]
    fn test_display_time_zone_shifts_the_day() {
        // 2024-04-30T20:00:00Z 在日本時間已經是 5/1
        let late_evening = HeldAtInput::iso("2024-04-30T20:00:00Z");
        assert_eq!(format_event_date(Some(&late_evening)), "2024/05/01");

        let utc = DisplayFormat {
            utc_offset_hours: 0,
            ..DisplayFormat::default()
        };
        assert_eq!(utc.format_event_date(Some(&late_evening)), "2024/04/30");
    }

    #[test]
    fn test_out_of_range_offset_falls_back_to_utc() {
        let broken = DisplayFormat {
            utc_offset_hours: 48,
            ..DisplayFormat::default()
        };
        let held_at = HeldAt { seconds: 1_714_521_600 };
        assert_eq!(broken.format_held_at(held_at), "2024/05/01");
    }
}
