use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::audience::Audience;

/// How long after its open instant a window still counts as newly opened.
/// The cron trigger must fire at least this often or openings are missed.
pub const DRAFT_WINDOW_MINUTES: i64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: Uuid,
    pub match_date: NaiveDate,
    pub start_time: NaiveTime,
    pub location: String,
    pub max_players: u32,
    pub earlybird_open_at: DateTime<Utc>,
    pub general_open_at: DateTime<Utc>,
}

impl MatchRecord {
    /// Audience segments whose RSVP window opened within the last
    /// [`DRAFT_WINDOW_MINUTES`] relative to `now`. Both bounds inclusive.
    /// All instants are UTC; no timezone conversion happens here.
    pub fn newly_opened_windows(&self, now: DateTime<Utc>) -> Vec<Audience> {
        let mut opened = Vec::new();
        if Self::within_window(self.earlybird_open_at, now) {
            opened.push(Audience::Earlybird);
        }
        if Self::within_window(self.general_open_at, now) {
            opened.push(Audience::General);
        }
        opened
    }

    fn within_window(open_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        open_at <= now && now <= open_at + Duration::minutes(DRAFT_WINDOW_MINUTES)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn match_factory(
        earlybird_open_at: DateTime<Utc>,
        general_open_at: DateTime<Utc>,
    ) -> MatchRecord {
        MatchRecord {
            id: Uuid::new_v4(),
            match_date: NaiveDate::from_ymd_opt(2024, 6, 8).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            location: "Marymoor Park".to_string(),
            max_players: 22,
            earlybird_open_at,
            general_open_at,
        }
    }

    fn instant(hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 3, hour, min, sec).unwrap()
    }

    #[test]
    fn includes_window_at_exact_open_instant() {
        let open = instant(17, 0, 0);
        let record = match_factory(open, instant(20, 0, 0));
        assert_eq!(record.newly_opened_windows(open), vec![Audience::Earlybird]);
    }

    #[test]
    fn includes_window_at_exact_upper_bound() {
        let open = instant(17, 0, 0);
        let record = match_factory(open, instant(20, 0, 0));
        let now = open + Duration::minutes(DRAFT_WINDOW_MINUTES);
        assert_eq!(record.newly_opened_windows(now), vec![Audience::Earlybird]);
    }

    #[test]
    fn excludes_window_one_second_past_upper_bound() {
        let open = instant(17, 0, 0);
        let record = match_factory(open, instant(20, 0, 0));
        let now = open + Duration::minutes(DRAFT_WINDOW_MINUTES) + Duration::seconds(1);
        assert!(record.newly_opened_windows(now).is_empty());
    }

    #[test]
    fn excludes_window_before_open_instant() {
        let open = instant(17, 0, 0);
        let record = match_factory(open, instant(20, 0, 0));
        let now = open - Duration::seconds(1);
        assert!(record.newly_opened_windows(now).is_empty());
    }

    #[test]
    fn both_windows_open_in_same_run() {
        let record = match_factory(instant(17, 0, 0), instant(17, 2, 0));
        let now = instant(17, 3, 0);
        assert_eq!(
            record.newly_opened_windows(now),
            vec![Audience::Earlybird, Audience::General]
        );
    }

    #[test]
    fn segments_are_independent() {
        let record = match_factory(instant(17, 0, 0), instant(18, 0, 0));
        assert_eq!(
            record.newly_opened_windows(instant(18, 1, 0)),
            vec![Audience::General]
        );
    }
}
