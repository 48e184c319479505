//! Team statistics record.
//!
//! One `StatRecord` is a single team's weekly snapshot. The quality score is
//! not stored: it is always derived from the bug counts, so the persisted
//! fields are the only source of truth.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Longest accepted team name, in characters.
pub const MAX_TEAM_LEN: usize = 10;

/// Date layout used in the backing file and for new entries.
pub const DATE_FORMAT: &str = "%Y/%m/%d";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StatRecord {
    pub version: i64,
    pub date: String,
    pub team: String,
    pub member_count: i64,
    pub cycle_time: i64,
    pub lead_time: i64,
    pub bugs_reported: i64,
    pub bugs_squashed: i64,
    pub deploy_count: i64,
    pub value_score: f64,
    #[serde(rename = "ReportURL")]
    pub report_url: String,
}

impl StatRecord {
    /// Bugs reported per bug squashed, or the negated report count when
    /// nothing was squashed.
    pub fn quality_score(&self) -> f64 {
        if self.bugs_squashed > 0 {
            self.bugs_reported as f64 / self.bugs_squashed as f64
        } else {
            self.bugs_reported.saturating_neg() as f64
        }
    }

    /// Check the append rules in their fixed order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.team.is_empty() {
            return Err(ValidationError::TeamEmpty);
        }
        if self.team.chars().count() > MAX_TEAM_LEN {
            return Err(ValidationError::TeamTooLong);
        }
        if self.member_count < 1 {
            return Err(ValidationError::MemberCount);
        }
        if self.cycle_time < 1 {
            return Err(ValidationError::CycleTime);
        }
        if self.lead_time < 1 {
            return Err(ValidationError::LeadTime);
        }
        if self.bugs_reported < 0 {
            return Err(ValidationError::BugsReported);
        }
        if self.bugs_squashed < 0 {
            return Err(ValidationError::BugsSquashed);
        }
        if [&self.team, &self.date, &self.report_url]
            .into_iter()
            .any(|s| has_separator(s))
        {
            return Err(ValidationError::FieldSeparator);
        }
        if !self.value_score.is_finite() {
            return Err(ValidationError::ValueScore);
        }
        Ok(())
    }

    /// Round the value score to the two decimals the file keeps, so the
    /// in-memory copy matches what a reload would produce.
    /// Scores too large to scale by 100 carry no cents and are kept as is.
    pub fn normalized(mut self) -> Self {
        let cents = self.value_score * 100.0;
        if cents.is_finite() {
            self.value_score = cents.round() / 100.0;
        }
        self
    }

    /// Parsed report date. `None` for dates that do not follow `YYYY/MM/DD`.
    pub fn date_key(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// JSON/template view carrying the derived quality score.
    pub fn view(&self) -> RecordView<'_> {
        RecordView {
            record: self,
            quality_score: self.quality_score(),
        }
    }
}

/// Serialized form of a record as exposed by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordView<'a> {
    #[serde(flatten)]
    pub record: &'a StatRecord,
    pub quality_score: f64,
}

pub(crate) fn has_separator(s: &str) -> bool {
    s.contains(|c| matches!(c, ',' | '\r' | '\n'))
}

fn newest_first(a: &StatRecord, b: &StatRecord) -> Ordering {
    // None sorts below any date, so undated records end up last.
    b.date_key().cmp(&a.date_key())
}

/// Stable sort, newest date first.
pub fn sort_newest_first(records: &mut [StatRecord]) {
    records.sort_by(newest_first);
}

/// Index at which `record` keeps a newest-first sequence ordered. Records
/// sharing its date stay behind it.
pub fn newest_first_position(records: &[StatRecord], record: &StatRecord) -> usize {
    let key = record.date_key();
    records.partition_point(|r| r.date_key() > key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(date: &str, team: &str) -> StatRecord {
        StatRecord {
            date: date.into(),
            team: team.into(),
            ..Default::default()
        }
    }

    #[test]
    fn sort_puts_undated_last() {
        let mut v = vec![
            dated("garbage", "c"),
            dated("2024/01/02", "a"),
            dated("2024/03/01", "b"),
        ];
        sort_newest_first(&mut v);
        let teams: Vec<_> = v.iter().map(|r| r.team.as_str()).collect();
        assert_eq!(teams, ["b", "a", "c"]);
    }

    #[test]
    fn insert_position_goes_ahead_of_same_day() {
        let v = vec![
            dated("2024/03/01", "b"),
            dated("2024/02/01", "a"),
            dated("2024/02/01", "z"),
        ];
        assert_eq!(newest_first_position(&v, &dated("2024/02/01", "n")), 1);
        assert_eq!(newest_first_position(&v, &dated("2025/01/01", "n")), 0);
        assert_eq!(newest_first_position(&v, &dated("", "n")), 3);
    }

    #[test]
    fn normalized_rounds_to_cents() {
        let r = StatRecord {
            value_score: 8.567,
            ..Default::default()
        }
        .normalized();
        assert_eq!(r.value_score, 8.57);
    }

    #[test]
    fn normalized_keeps_huge_scores_finite() {
        for score in [1e307, f64::MAX, -f64::MAX] {
            let r = StatRecord {
                value_score: score,
                ..Default::default()
            }
            .normalized();
            assert_eq!(r.value_score, score);
        }
    }
}
