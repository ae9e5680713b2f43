use thiserror::Error;

use crate::{BatchRecord, EnrichedBatch};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidBatch {
    #[error("batch {batch} has a total of zero")]
    ZeroTotal { batch: String },
    #[error("batch {batch} reports {remaining} remaining out of only {total}")]
    RemainingExceedsTotal {
        batch: String,
        remaining: u32,
        total: u32,
    },
}

/// Derives the sold count and the complementary percentage pair for every
/// batch. Output order matches input order and nothing is filtered.
///
/// The remaining percentage rounds half-away-from-zero; the sold percentage
/// is its complement, so the pair always sums to 100.
pub fn enrich(records: &[BatchRecord]) -> Result<Vec<EnrichedBatch>, InvalidBatch> {
    records.iter().map(enrich_one).collect()
}

fn enrich_one(record: &BatchRecord) -> Result<EnrichedBatch, InvalidBatch> {
    if record.total == 0 {
        return Err(InvalidBatch::ZeroTotal {
            batch: record.batch.clone(),
        });
    }
    if record.remaining > record.total {
        return Err(InvalidBatch::RemainingExceedsTotal {
            batch: record.batch.clone(),
            remaining: record.remaining,
            total: record.total,
        });
    }
    let remaining_percentage =
        (record.remaining as f64 / record.total as f64 * 100.0).round() as u8;
    Ok(EnrichedBatch {
        batch: record.batch.clone(),
        remaining: record.remaining,
        total: record.total,
        sold: record.total - record.remaining,
        remaining_percentage,
        sold_percentage: 100 - remaining_percentage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(batch: &str, remaining: u32, total: u32) -> BatchRecord {
        BatchRecord {
            batch: batch.to_string(),
            remaining,
            total,
        }
    }

    #[test]
    fn test_partially_sold_batch() {
        let enriched = enrich(&[record("Batch 17", 25, 75)]).unwrap();
        assert_eq!(enriched.len(), 1);
        assert_eq!(enriched[0].sold, 50);
        assert_eq!(enriched[0].remaining_percentage, 33);
        assert_eq!(enriched[0].sold_percentage, 67);
    }

    #[test]
    fn test_untouched_batch() {
        let enriched = enrich(&[record("Batch 19", 80, 80)]).unwrap();
        assert_eq!(enriched[0].sold, 0);
        assert_eq!(enriched[0].remaining_percentage, 100);
        assert_eq!(enriched[0].sold_percentage, 0);
    }

    #[test]
    fn test_sold_out_batch() {
        let enriched = enrich(&[record("Batch 12", 0, 60)]).unwrap();
        assert_eq!(enriched[0].sold, 60);
        assert_eq!(enriched[0].remaining_percentage, 0);
        assert_eq!(enriched[0].sold_percentage, 100);
    }

    #[test]
    fn test_percentages_always_sum_to_100() {
        let records: Vec<_> = (0..=50).map(|i| record(&format!("Batch {i}"), i, 50)).collect();
        let enriched = enrich(&records).unwrap();
        assert_eq!(enriched.len(), records.len());
        for batch in &enriched {
            assert_eq!(batch.remaining_percentage as u32 + batch.sold_percentage as u32, 100);
            assert_eq!(batch.sold, batch.total - batch.remaining);
        }
    }

    #[test]
    fn test_order_preserved_and_deterministic() {
        let records = vec![
            record("Batch 20", 100, 100),
            record("Batch 17", 25, 75),
            record("Batch 18", 75, 75),
        ];
        let first = enrich(&records).unwrap();
        let labels: Vec<_> = first.iter().map(|b| b.batch.as_str()).collect();
        assert_eq!(labels, ["Batch 20", "Batch 17", "Batch 18"]);
        assert_eq!(first, enrich(&records).unwrap());
    }

    #[test]
    fn test_zero_total_is_rejected() {
        let err = enrich(&[record("Batch 0", 0, 0)]).unwrap_err();
        assert_eq!(
            err,
            InvalidBatch::ZeroTotal {
                batch: "Batch 0".to_string()
            }
        );
    }

    #[test]
    fn test_remaining_over_total_is_rejected() {
        let err = enrich(&[record("Batch 1", 90, 80)]).unwrap_err();
        assert_eq!(
            err,
            InvalidBatch::RemainingExceedsTotal {
                batch: "Batch 1".to_string(),
                remaining: 90,
                total: 80,
            }
        );
    }

    #[test]
    fn test_bad_record_fails_the_whole_call() {
        let records = vec![record("Batch 17", 25, 75), record("Batch 18", 80, 75)];
        assert!(enrich(&records).is_err());
    }

    #[test]
    fn test_records_round_trip_through_json() {
        let records = vec![record("Batch 17", 25, 75)];
        let json = serde_json::to_string(&records).unwrap();
        let parsed: Vec<BatchRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records);
    }
}
