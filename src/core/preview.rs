use crate::core::allocation::summarize;
use crate::core::form::parse_event_form_data;
use crate::core::format::DisplayFormat;
use crate::domain::model::{AllocationSummary, EventFormInput, HeldAtInput};
use crate::domain::ports::FormSource;
use serde::Serialize;

/// Live preview of an event form: parsed input, allocation and display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPreview {
    pub input: EventFormInput,
    pub summary: AllocationSummary,
    pub display: PreviewDisplay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewDisplay {
    pub total_amount: String,
    pub held_at: String,
    pub held_at_input: String,
    pub collected: String,
    pub drift: String,
    pub tiers: Vec<TierDisplay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierDisplay {
    pub tier: u32,
    pub count: u32,
    pub amount: String,
    pub subtotal: String,
}

#[derive(Debug, Clone, Default)]
pub struct PreviewEngine {
    format: DisplayFormat,
}

impl PreviewEngine {
    pub fn new(format: DisplayFormat) -> Self {
        Self { format }
    }

    pub fn display_format(&self) -> &DisplayFormat {
        &self.format
    }

    pub fn preview<F: FormSource + ?Sized>(&self, form: &F) -> EventPreview {
        self.preview_input(parse_event_form_data(form))
    }

    /// Recomputes everything from scratch; no state is kept between calls.
    pub fn preview_input(&self, input: EventFormInput) -> EventPreview {
        let summary = summarize(input.total_amount, &input.tiers);

        tracing::debug!(
            "Preview for '{}': {} people across {} tiers, collected {}",
            input.title,
            summary.total_people,
            summary.allocations.len(),
            summary.collected
        );

        let held_at = input.held_at.map(HeldAtInput::from);
        let display = PreviewDisplay {
            total_amount: self.format.format_currency(input.total_amount),
            held_at: self.format.format_event_date(held_at.as_ref()),
            held_at_input: self.format.held_at_to_input_value(held_at.as_ref()),
            collected: self.format.format_currency(summary.collected),
            drift: self.format.format_currency(summary.drift),
            tiers: summary
                .allocations
                .iter()
                .map(|allocation| TierDisplay {
                    tier: allocation.tier,
                    count: allocation.count,
                    amount: self.format.format_currency(allocation.amount),
                    subtotal: self.format.format_currency(allocation.subtotal()),
                })
                .collect(),
        };

        EventPreview {
            input,
            summary,
            display,
        }
    }
}
