use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::entry::VocabularyEntry;
use crate::time::local_day;

/// Seconds between the Unix epoch and 2001-01-01T00:00:00Z.
const REFERENCE_EPOCH_OFFSET_SECS: f64 = 978_307_200.0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolvedRecord {
    #[serde(deserialize_with = "deserialize_stored_date")]
    pub date: DateTime<Utc>,
    pub word: VocabularyEntry,
}

impl SolvedRecord {
    pub fn new(date: DateTime<Utc>, word: VocabularyEntry) -> Self {
        Self { date, word }
    }

    pub fn local_day(&self) -> NaiveDate {
        local_day(self.date)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDate {
    Rfc3339(DateTime<Utc>),
    // Older single-record blobs stored seconds since 2001-01-01 UTC.
    ReferenceSeconds(f64),
}

fn deserialize_stored_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match StoredDate::deserialize(deserializer)? {
        StoredDate::Rfc3339(date) => Ok(date),
        StoredDate::ReferenceSeconds(secs) => {
            let millis = ((secs + REFERENCE_EPOCH_OFFSET_SECS) * 1000.0).round() as i64;
            DateTime::from_timestamp_millis(millis)
                .ok_or_else(|| serde::de::Error::custom(format!("date out of range: {}", secs)))
        }
    }
}

/// Solved records, at most one per local calendar day, kept in ascending date order.
///
/// Stored blobs go through `from_records`, so duplicates for a day collapse to the later entry.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(from = "Vec<SolvedRecord>", into = "Vec<SolvedRecord>")]
pub struct SolvedHistory {
    records: Vec<SolvedRecord>,
}

impl SolvedHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<SolvedRecord>) -> Self {
        let mut history = Self::new();
        for record in records {
            history.upsert(record);
        }
        history
    }

    /// Inserts `record`, replacing whatever was stored for the same local day.
    pub fn upsert(&mut self, record: SolvedRecord) {
        let day = record.local_day();
        self.records.retain(|r| r.local_day() != day);
        let pos = self.records.partition_point(|r| r.date <= record.date);
        self.records.insert(pos, record);
    }

    pub fn record_for_day(&self, day: NaiveDate) -> Option<&SolvedRecord> {
        self.records.iter().find(|r| r.local_day() == day)
    }

    pub fn solved_days(&self) -> BTreeSet<NaiveDate> {
        self.records.iter().map(SolvedRecord::local_day).collect()
    }

    pub fn records(&self) -> &[SolvedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<SolvedRecord>> for SolvedHistory {
    fn from(records: Vec<SolvedRecord>) -> Self {
        Self::from_records(records)
    }
}

impl From<SolvedHistory> for Vec<SolvedRecord> {
    fn from(history: SolvedHistory) -> Self {
        history.records
    }
}

/// The day's word and whether it was already solved.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPuzzleState {
    pub word: VocabularyEntry,
    pub solved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn word(gr: &str) -> VocabularyEntry {
        VocabularyEntry::new(gr.to_string(), "x".to_string(), gr.to_string())
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(y, m, d, h, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_upsert_same_day_keeps_one_record() {
        let mut history = SolvedHistory::new();
        history.upsert(SolvedRecord::new(at(2026, 5, 2, 8), word("ένα")));
        history.upsert(SolvedRecord::new(at(2026, 5, 2, 20), word("δύο")));

        assert_eq!(history.len(), 1);
        assert_eq!(history.records()[0].word.greek_trimmed(), "δύο");
    }

    #[test]
    fn test_records_stay_sorted() {
        let history = SolvedHistory::from_records(vec![
            SolvedRecord::new(at(2026, 5, 3, 8), word("γ")),
            SolvedRecord::new(at(2026, 5, 1, 8), word("α")),
            SolvedRecord::new(at(2026, 5, 2, 8), word("β")),
        ]);

        let order: Vec<&str> = history
            .records()
            .iter()
            .map(|r| r.word.greek_trimmed())
            .collect();
        assert_eq!(order, vec!["α", "β", "γ"]);
    }

    #[test]
    fn test_record_for_day() {
        let history = SolvedHistory::from_records(vec![SolvedRecord::new(at(2026, 5, 2, 12), word("β"))]);
        let day = NaiveDate::from_ymd_opt(2026, 5, 2).unwrap();
        assert!(history.record_for_day(day).is_some());
        assert!(history.record_for_day(day.succ_opt().unwrap()).is_none());
    }

    #[test]
    fn test_decode_reference_seconds_date() {
        // 2001-01-02T00:00:00Z
        let json = r#"{"date":86400.0,"word":{"gr":"σπίτι","en":"house","fullGr":"το σπίτι"}}"#;
        let record: SolvedRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.date.to_rfc3339(), "2001-01-02T00:00:00+00:00");
    }

    #[test]
    fn test_decode_history_collapses_duplicate_days() {
        let stored = vec![
            SolvedRecord::new(at(2026, 5, 3, 9), word("γ")),
            SolvedRecord::new(at(2026, 5, 2, 8), word("α")),
            SolvedRecord::new(at(2026, 5, 2, 20), word("β")),
        ];
        let json = serde_json::to_string(&stored).unwrap();
        let history: SolvedHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history.len(), 2);
        let day = NaiveDate::from_ymd_opt(2026, 5, 2).unwrap();
        assert_eq!(history.record_for_day(day).unwrap().word.greek_trimmed(), "β");
        assert_eq!(history.records()[1].word.greek_trimmed(), "γ");
        assert_eq!(serde_json::to_string(&history).unwrap().matches("\"date\"").count(), 2);
    }

    #[test]
    fn test_decode_rfc3339_date() {
        let json = r#"{"date":"2026-05-02T10:00:00Z","word":{"gr":"σπίτι","en":"house","fullGr":"το σπίτι"}}"#;
        let record: SolvedRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.date, DateTime::parse_from_rfc3339("2026-05-02T10:00:00Z").unwrap());
    }
}
