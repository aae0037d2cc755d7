pub mod allocation;
pub mod form;
pub mod format;
pub mod preview;
pub mod render;

pub use crate::domain::model::{AllocationSummary, EventFormInput, TierAllocation, TierConfig};
pub use crate::domain::ports::FormSource;
pub use crate::utils::error::Result;
