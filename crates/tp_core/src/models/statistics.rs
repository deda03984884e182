use serde::{Deserialize, Serialize};

/// Counter bucket for one scope (whole match, or a single set).
///
/// All counters start at zero; `first_serve_percentage` is derived from
/// `first_serve_in` / `first_serve_attempts` and recomputed whenever the
/// attempt count changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatBucket {
    pub aces: u32,
    pub double_faults: u32,
    pub winners: u32,
    pub unforced_errors: u32,
    pub first_serve_attempts: u32,
    pub first_serve_in: u32,
    pub first_serve_percentage: u32,
    pub points_won: u32,
}

impl StatBucket {
    /// Recompute the derived first-serve percentage, rounded to the nearest
    /// whole percent. Left untouched while no attempts are recorded.
    pub fn recompute_first_serve_percentage(&mut self) {
        if self.first_serve_attempts > 0 {
            let ratio = self.first_serve_in as f64 / self.first_serve_attempts as f64;
            self.first_serve_percentage = (ratio * 100.0).round() as u32;
        }
    }
}

/// Per-player statistics: one cumulative bucket plus one bucket per set,
/// ordered by set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub overall: StatBucket,
    pub sets: Vec<StatBucket>,
}

impl Statistics {
    /// Bucket for the given 0-based set index, created on demand along with
    /// any missing earlier buckets.
    pub fn set_bucket_mut(&mut self, set_index: usize) -> &mut StatBucket {
        while self.sets.len() <= set_index {
            self.sets.push(StatBucket::default());
        }
        &mut self.sets[set_index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_bucket_created_on_demand() {
        let mut stats = Statistics::default();
        assert!(stats.sets.is_empty());

        stats.set_bucket_mut(2).aces += 1;
        assert_eq!(stats.sets.len(), 3);
        assert_eq!(stats.sets[0], StatBucket::default());
        assert_eq!(stats.sets[2].aces, 1);
    }

    #[test]
    fn test_first_serve_percentage_rounds() {
        let mut bucket = StatBucket { first_serve_in: 2, first_serve_attempts: 3, ..Default::default() };
        bucket.recompute_first_serve_percentage();
        assert_eq!(bucket.first_serve_percentage, 67);
    }

    #[test]
    fn test_first_serve_percentage_untouched_without_attempts() {
        let mut bucket = StatBucket { first_serve_percentage: 68, ..Default::default() };
        bucket.recompute_first_serve_percentage();
        assert_eq!(bucket.first_serve_percentage, 68);
    }

    #[test]
    fn test_missing_counters_deserialize_to_zero() {
        let bucket: StatBucket = serde_json::from_str(r#"{"aces": 5}"#).unwrap();
        assert_eq!(bucket.aces, 5);
        assert_eq!(bucket.points_won, 0);
        assert_eq!(bucket.first_serve_attempts, 0);
    }
}
