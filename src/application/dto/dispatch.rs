use serde::{Deserialize, Serialize};

/// Aggregate result of one newsletter dispatch run. Per-recipient detail
/// lives in the delivery log only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DispatchOutcome {
    NoRecipients,
    Completed { sent: u32, failed: u32 },
}
