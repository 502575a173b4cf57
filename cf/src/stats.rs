//! Usage statistics
//!
//! Process-lifetime counters for successful boosts. Nothing is persisted;
//! a restart starts from zero.

use std::collections::BTreeMap;
use std::sync::RwLock;

use serde::Serialize;
use tracing::{debug, warn};

use crate::categorize::Category;

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UsageStats {
    pub total_processed: u64,
    pub categories: BTreeMap<Category, u64>,
    /// Seconds per successful boost, in arrival order
    pub processing_times: Vec<f64>,
}

impl UsageStats {
    /// Mean of recorded durations, 0.0 when nothing has been recorded
    pub fn avg_processing_time(&self) -> f64 {
        if self.processing_times.is_empty() {
            0.0
        } else {
            self.processing_times.iter().sum::<f64>() / self.processing_times.len() as f64
        }
    }

    /// Categories ordered by count, most frequent first
    pub fn popular_categories(&self) -> Vec<(Category, u64)> {
        let mut ranked: Vec<_> = self.categories.iter().map(|(c, n)| (*c, *n)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }
}

/// Shared aggregator injected into the request handler
///
/// Safe to call from any number of handler tasks at once.
#[derive(Debug, Default)]
pub struct UsageTracker {
    inner: RwLock<UsageStats>,
}

impl UsageTracker {
    pub fn new() -> Self {
        debug!("UsageTracker::new: called");
        Self::default()
    }

    /// Record one successful boost
    pub fn record(&self, category: Category, seconds: f64) {
        debug!(%category, seconds, "UsageTracker::record: called");
        match self.inner.write() {
            Ok(mut stats) => {
                stats.total_processed += 1;
                *stats.categories.entry(category).or_default() += 1;
                stats.processing_times.push(seconds);
            }
            Err(_) => warn!(%category, "record: stats lock poisoned, dropping sample"),
        }
    }

    pub fn snapshot(&self) -> UsageStats {
        self.inner.read().map(|s| s.clone()).unwrap_or_else(|_| {
            warn!("snapshot: stats lock poisoned, returning empty stats");
            UsageStats::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_empty_snapshot() {
        let tracker = UsageTracker::new();
        let stats = tracker.snapshot();
        assert_eq!(stats.total_processed, 0);
        assert!(stats.categories.is_empty());
        assert_eq!(stats.avg_processing_time(), 0.0);
    }

    #[test]
    fn test_counts_match_recorded_distribution() {
        let tracker = UsageTracker::new();
        tracker.record(Category::Technology, 1.0);
        tracker.record(Category::Business, 2.0);
        tracker.record(Category::Technology, 3.0);
        tracker.record(Category::General, 6.0);

        let stats = tracker.snapshot();
        assert_eq!(stats.total_processed, 4);
        assert_eq!(stats.categories.get(&Category::Technology), Some(&2));
        assert_eq!(stats.categories.get(&Category::Business), Some(&1));
        assert_eq!(stats.categories.get(&Category::General), Some(&1));
        assert_eq!(stats.categories.get(&Category::Creative), None);
        assert_eq!(stats.processing_times, vec![1.0, 2.0, 3.0, 6.0]);
        assert!((stats.avg_processing_time() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_popular_categories_ranked() {
        let tracker = UsageTracker::new();
        tracker.record(Category::Creative, 1.0);
        tracker.record(Category::SocialImpact, 1.0);
        tracker.record(Category::SocialImpact, 1.0);
        tracker.record(Category::Business, 1.0);

        let ranked = tracker.snapshot().popular_categories();
        assert_eq!(
            ranked,
            vec![
                (Category::SocialImpact, 2),
                (Category::Business, 1),
                (Category::Creative, 1),
            ]
        );
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let tracker = UsageTracker::new();
        tracker.record(Category::Business, 1.5);
        let before = tracker.snapshot();
        tracker.record(Category::Business, 2.5);

        assert_eq!(before.total_processed, 1);
        assert_eq!(tracker.snapshot().total_processed, 2);
    }

    #[test]
    fn test_concurrent_records_are_not_lost() {
        let tracker = Arc::new(UsageTracker::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let tracker = tracker.clone();
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        let category = if i % 2 == 0 { Category::Technology } else { Category::Creative };
                        tracker.record(category, 0.5);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let stats = tracker.snapshot();
        assert_eq!(stats.total_processed, 2000);
        assert_eq!(stats.categories.get(&Category::Technology), Some(&1000));
        assert_eq!(stats.categories.get(&Category::Creative), Some(&1000));
        assert_eq!(stats.processing_times.len(), 2000);
    }
}
