mod batch;
mod enrich;

pub use batch::{BatchRecord, EnrichedBatch};
pub use enrich::{enrich, InvalidBatch};
