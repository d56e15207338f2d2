use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::model::{PuzzleStats, SolvedHistory};

pub fn compute_stats(history: &SolvedHistory) -> PuzzleStats {
    let days = history.solved_days();
    PuzzleStats {
        total_solved: days.len(),
        current_streak: current_streak(&days),
    }
}

/// Counts back one day at a time from the most recent solved day until the first gap.
pub fn current_streak(days: &BTreeSet<NaiveDate>) -> usize {
    let Some(&anchor) = days.last() else {
        return 0;
    };

    let mut streak = 1;
    let mut cursor = anchor;
    while let Some(prev) = cursor.pred_opt() {
        if !days.contains(&prev) {
            break;
        }
        streak += 1;
        cursor = prev;
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SolvedRecord, VocabularyEntry};
    use chrono::{Local, TimeZone, Utc};

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    #[test]
    fn test_empty_history() {
        let stats = compute_stats(&SolvedHistory::new());
        assert_eq!(stats, PuzzleStats { total_solved: 0, current_streak: 0 });
    }

    #[test]
    fn test_single_day() {
        let days: BTreeSet<_> = [day(6, 9)].into_iter().collect();
        assert_eq!(current_streak(&days), 1);
    }

    #[test]
    fn test_streak_stops_at_gap() {
        // D, D-1, D-2 solved; D-3 missing; D-4 solved.
        let days: BTreeSet<_> = [day(6, 10), day(6, 9), day(6, 8), day(6, 6)]
            .into_iter()
            .collect();
        assert_eq!(current_streak(&days), 3);
    }

    #[test]
    fn test_streak_crosses_month_boundary() {
        let days: BTreeSet<_> = [day(2, 27), day(2, 28), day(3, 1)].into_iter().collect();
        assert_eq!(current_streak(&days), 3);
    }

    #[test]
    fn test_stats_from_history() {
        let record = |d: u32| {
            let date = Local.with_ymd_and_hms(2026, 7, d, 12, 0, 0).unwrap().with_timezone(&Utc);
            SolvedRecord::new(date, VocabularyEntry::new("α".into(), "a".into(), "α".into()))
        };
        let history = SolvedHistory::from_records(vec![record(1), record(3), record(4)]);

        let stats = compute_stats(&history);
        assert_eq!(stats.total_solved, 3);
        assert_eq!(stats.current_streak, 2);
    }
}
