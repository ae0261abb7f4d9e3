use serde::{Serialize, Deserialize};

/// One output team: members in assignment order and their summed score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub members: Vec<String>,
    pub total: f64,
}

/// Result of splitting a selection, buckets in index order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub buckets: Vec<Bucket>,
}

impl Assignment {
    /// Sum of bucket totals, added in bucket order
    pub fn total(&self) -> f64 {
        self.buckets.iter().map(|b| b.total).sum()
    }

    /// Difference between the strongest and weakest bucket
    pub fn spread(&self) -> f64 {
        let max = self.buckets.iter().map(|b| b.total).fold(f64::NEG_INFINITY, f64::max);
        let min = self.buckets.iter().map(|b| b.total).fold(f64::INFINITY, f64::min);
        if self.buckets.is_empty() {
            0.0
        } else {
            max - min
        }
    }

    pub fn member_count(&self) -> usize {
        self.buckets.iter().map(|b| b.members.len()).sum()
    }
}
