use crate::domain::model::{EventFormInput, HeldAt, TierConfig};
use crate::domain::ports::FormSource;

pub const FIELD_TITLE: &str = "title";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_TOTAL_AMOUNT: &str = "totalAmount";
pub const FIELD_TIER_COUNT: &str = "tierCount";
pub const FIELD_HELD_AT: &str = "heldAt";

const DEFAULT_TOTAL_AMOUNT: i64 = 0;
const DEFAULT_TIER_COUNT: i64 = 1;
const DEFAULT_TIER_HEADCOUNT: i64 = 0;

/// Upper bound on tiers read from a single submission.
pub const MAX_TIERS: i64 = 1000;

pub fn tier_count_field(tier: i64) -> String {
    format!("tier_{}_count", tier)
}

/// Builds an [`EventFormInput`] from a raw submission.
///
/// Never fails: the submission has already passed schema validation, so
/// missing, blank or non-numeric fields fall back to their defaults
/// (`""`, `totalAmount = 0`, `tierCount = 1`, per-tier counts `0`).
pub fn parse_event_form_data<F: FormSource + ?Sized>(form: &F) -> EventFormInput {
    let title = form.get(FIELD_TITLE).unwrap_or_default().to_string();
    let description = form.get(FIELD_DESCRIPTION).unwrap_or_default().to_string();
    let total_amount = number_or(form.get(FIELD_TOTAL_AMOUNT), DEFAULT_TOTAL_AMOUNT);
    let tier_count = number_or(form.get(FIELD_TIER_COUNT), DEFAULT_TIER_COUNT);
    let held_at = form.get(FIELD_HELD_AT).and_then(HeldAt::parse_iso);

    if tier_count > MAX_TIERS {
        tracing::warn!(
            "⚠️ tierCount {} exceeds {}, only the first {} tiers are read",
            tier_count,
            MAX_TIERS,
            MAX_TIERS
        );
    }

    let tiers = (1..=tier_count.min(MAX_TIERS))
        .map(|i| {
            let count = number_or(form.get(&tier_count_field(i)), DEFAULT_TIER_HEADCOUNT);
            TierConfig {
                tier: u32::try_from(i).unwrap_or(u32::MAX),
                count: u32::try_from(count.max(0)).unwrap_or(u32::MAX),
            }
        })
        .collect();

    tracing::debug!(
        "Parsed event form: total={}, tiers={}, held_at={:?}",
        total_amount,
        tier_count,
        held_at
    );

    EventFormInput {
        title,
        description,
        total_amount,
        tier_count,
        held_at,
        tiers,
    }
}

/// 寬鬆的數字轉換：可有前後空白、小數、指數；小數部分無條件捨去。
/// 空白、非數字或非有限值一律回傳預設值。
fn number_or(raw: Option<&str>, default: i64) -> i64 {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return default;
    };

    if let Ok(n) = raw.parse::<i64>() {
        return n;
    }

    match raw.parse::<f64>() {
        // `as` 對超出範圍的值會飽和
        Ok(n) if n.is_finite() => n.trunc() as i64,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn form(fields: &[(&str, &str)]) -> HashMap<String, String> {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_tier_counts_with_other_fields_missing() {
        let data = form(&[
            ("tierCount", "3"),
            ("tier_1_count", "2"),
            ("tier_2_count", "0"),
            ("tier_3_count", "1"),
        ]);

        let input = parse_event_form_data(&data);

        assert_eq!(
            input.tiers,
            vec![TierConfig::new(1, 2), TierConfig::new(2, 0), TierConfig::new(3, 1)]
        );
        assert_eq!(input.title, "");
        assert_eq!(input.description, "");
        assert_eq!(input.total_amount, 0);
        assert_eq!(input.held_at, None);
    }

    #[test]
    fn test_empty_form_uses_defaults() {
        let input = parse_event_form_data(&form(&[]));

        assert_eq!(input.total_amount, 0);
        assert_eq!(input.tier_count, 1);
        assert_eq!(input.tiers, vec![TierConfig::new(1, 0)]);
    }

    #[test]
    fn test_non_numeric_values_fall_back() {
        let data = form(&[
            ("totalAmount", "lots"),
            ("tierCount", "two"),
            ("tier_1_count", "NaN"),
        ]);

        let input = parse_event_form_data(&data);

        assert_eq!(input.total_amount, 0);
        assert_eq!(input.tier_count, 1);
        assert_eq!(input.tiers, vec![TierConfig::new(1, 0)]);
    }

    #[test]
    fn test_lenient_number_coercion() {
        assert_eq!(number_or(Some(" 12000 "), 0), 12000);
        assert_eq!(number_or(Some("1e4"), 0), 10000);
        assert_eq!(number_or(Some("2.9"), 1), 2);
        assert_eq!(number_or(Some("-3"), 0), -3);
        assert_eq!(number_or(Some(""), 7), 7);
        assert_eq!(number_or(Some("inf"), 7), 7);
        assert_eq!(number_or(None, 7), 7);
    }

    #[test]
    fn test_full_submission() {
        let data = form(&[
            ("title", "歓迎会"),
            ("description", "新メンバー歓迎"),
            ("totalAmount", "30000"),
            ("tierCount", "2"),
            ("heldAt", "2024-05-01"),
            ("tier_1_count", "4"),
            ("tier_2_count", "2"),
        ]);

        let input = parse_event_form_data(&data);

        assert_eq!(input.title, "歓迎会");
        assert_eq!(input.total_amount, 30000);
        assert_eq!(input.held_at, Some(HeldAt { seconds: 1_714_521_600 }));
        assert_eq!(input.tiers, vec![TierConfig::new(1, 4), TierConfig::new(2, 2)]);
    }

    #[test]
    fn test_invalid_held_at_is_dropped() {
        let input = parse_event_form_data(&form(&[("heldAt", "someday")]));
        assert_eq!(input.held_at, None);
    }

    #[test]
    fn test_non_positive_tier_count_yields_no_tiers() {
        let input = parse_event_form_data(&form(&[("tierCount", "0")]));
        assert_eq!(input.tier_count, 0);
        assert!(input.tiers.is_empty());

        let negative = parse_event_form_data(&form(&[("tierCount", "-2")]));
        assert!(negative.tiers.is_empty());
    }

    #[test]
    fn test_tier_count_is_capped() {
        let input = parse_event_form_data(&form(&[("tierCount", "1e18")]));
        assert_eq!(input.tier_count, 1_000_000_000_000_000_000);
        assert_eq!(input.tiers.len(), MAX_TIERS as usize);
    }

    #[test]
    fn test_negative_headcount_clamps_to_zero() {
        let input = parse_event_form_data(&form(&[("tier_1_count", "-4")]));
        assert_eq!(input.tiers, vec![TierConfig::new(1, 0)]);
    }

    #[test]
    fn test_pairs_form_source() {
        let pairs = vec![
            ("tierCount".to_string(), "1".to_string()),
            ("tier_1_count".to_string(), "5".to_string()),
        ];
        let input = parse_event_form_data(&pairs);
        assert_eq!(input.tiers, vec![TierConfig::new(1, 5)]);
    }
}
