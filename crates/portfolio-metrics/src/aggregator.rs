use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use crate::types::{InteractionRecord, InteractionStats, UNKNOWN_MODE};

/// Round a latency to two decimal places, as reported and persisted.
pub fn round_seconds(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}

pub fn summarize(records: &[InteractionRecord], date: NaiveDate) -> InteractionStats {
    let total = records.len();
    let successful = records.iter().filter(|r| r.is_success()).count();

    let unique_sessions = records
        .iter()
        .filter_map(|r| r.session_id.as_deref())
        .filter(|id| !id.is_empty())
        .collect::<HashSet<_>>()
        .len();

    let average = if total == 0 {
        0.0
    } else {
        records.iter().map(|r| r.response_time_seconds).sum::<f64>() / total as f64
    };

    let mut mode_usage = BTreeMap::new();
    for record in records {
        let mode = record.mode.as_deref().unwrap_or(UNKNOWN_MODE);
        *mode_usage.entry(mode.to_string()).or_insert(0) += 1;
    }

    InteractionStats {
        total_interactions: total,
        successful,
        errors: total - successful,
        unique_sessions,
        average_response_time_seconds: round_seconds(average),
        mode_usage,
        today: date.format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn empty_log_has_zeroed_stats() {
        let stats = summarize(&[], date());
        assert_eq!(stats.total_interactions, 0);
        assert_eq!(stats.successful, 0);
        assert_eq!(stats.errors, 0);
        assert_eq!(stats.unique_sessions, 0);
        assert_eq!(stats.average_response_time_seconds, 0.0);
        assert!(stats.mode_usage.is_empty());
        assert_eq!(stats.today, "2026-03-14");
    }

    #[test]
    fn counts_successes_errors_and_sessions() {
        let records = vec![
            InteractionRecord::success("q1", "a1", 1.0, Some("s1".into()), Some("quick".into()), "m"),
            InteractionRecord::success("q2", "a2", 2.0, Some("s1".into()), Some("story".into()), "m"),
            InteractionRecord::failure("q3", "boom", 3.0, Some("s2".into()), Some("quick".into()), "m"),
            InteractionRecord::failure("q4", "boom", 0.5, None, None, "m"),
        ];

        let stats = summarize(&records, date());
        assert_eq!(stats.total_interactions, 4);
        assert_eq!(stats.successful, 2);
        assert_eq!(stats.errors, 2);
        assert_eq!(stats.unique_sessions, 2);
        assert_eq!(stats.average_response_time_seconds, 1.63);
        assert_eq!(stats.mode_usage.get("quick"), Some(&2));
        assert_eq!(stats.mode_usage.get("story"), Some(&1));
        assert_eq!(stats.mode_usage.get(UNKNOWN_MODE), Some(&1));
    }

    #[test]
    fn round_seconds_keeps_two_decimals() {
        assert_eq!(round_seconds(1.23456), 1.23);
        assert_eq!(round_seconds(0.005), 0.01);
        assert_eq!(round_seconds(2.0), 2.0);
    }
}
