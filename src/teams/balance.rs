use tracing::debug;

use crate::error::{CoreError, CoreResult};
use super::types::Bucket;

/// Splits scored participants into `bucket_count` buckets with totals as
/// close to each other as the greedy heuristic allows.
///
/// Participants are taken highest score first; equal scores keep their input
/// order. Each one goes to the bucket with the lowest running total, the lowest
/// index winning ties. Totals accumulate in assignment order. Buckets are
/// returned in index order and may be empty when there are fewer participants
/// than buckets.
pub fn partition(scored: &[(String, f64)], bucket_count: usize) -> CoreResult<Vec<Bucket>> {
    if bucket_count < 1 {
        return Err(CoreError::InvalidBucketCount(bucket_count));
    }

    // Stable sort, so equal scores stay in input order
    let mut order: Vec<&(String, f64)> = scored.iter().collect();
    order.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut buckets = vec![Bucket::default(); bucket_count];
    for (name, score) in order {
        let idx = lightest_bucket(&buckets);
        buckets[idx].members.push(name.clone());
        buckets[idx].total += *score;
        debug!(participant = %name, score, bucket = idx, total = buckets[idx].total, "assigned");
    }

    Ok(buckets)
}

/// Index of the bucket with the smallest total; first one wins ties
fn lightest_bucket(buckets: &[Bucket]) -> usize {
    let mut best = 0;
    for (idx, bucket) in buckets.iter().enumerate().skip(1) {
        if bucket.total < buckets[best].total {
            best = idx;
        }
    }
    best
}
