use serde::{Deserialize, Serialize};

/// A production batch as reported by the inventory source
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub batch: String,
    pub remaining: u32,
    pub total: u32,
}

/// Relates to a [`BatchRecord`], but carries the derived fields the chart plots
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedBatch {
    pub batch: String,
    pub remaining: u32,
    pub total: u32,
    pub sold: u32,
    pub remaining_percentage: u8,
    pub sold_percentage: u8,
}
