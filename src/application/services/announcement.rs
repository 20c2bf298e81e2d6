use crate::domain::models::{Audience, MatchRecord};

/// Renders announcement texts for a match's RSVP windows. Pure string
/// building; same (match, audience) input always yields the same output.
pub struct AnnouncementComposer {
    app_base_url: String,
}

impl AnnouncementComposer {
    pub fn new(app_base_url: String) -> Self {
        Self { app_base_url }
    }

    pub fn compose(&self, record: &MatchRecord, audience: Audience) -> String {
        let date = record.match_date.format("%Y-%m-%d (%a)");
        let time = record.start_time.format("%H:%M");
        let rsvp_link = self.rsvp_link(record, audience);

        match audience {
            Audience::Earlybird => format!(
                "🏏 Weekend Cricket RSVP (Early Bird)\n\
                 📅 {date} • ⏰ {time}\n\
                 📍 {location}\n\
                 ✅ RSVP here: {rsvp_link}\n\
                 Early-bird window is open now.",
                location = record.location,
            ),
            Audience::General => format!(
                "🏏 Weekend Cricket RSVP Open\n\
                 📅 {date} • ⏰ {time}\n\
                 📍 {location}\n\
                 ✅ RSVP here: {rsvp_link}\n\
                 Spots: {spots} • First come first serve.",
                location = record.location,
                spots = record.max_players,
            ),
        }
    }

    fn rsvp_link(&self, record: &MatchRecord, audience: Audience) -> String {
        format!(
            "{}/#rsvp?match_id={}&aud={}",
            self.app_base_url,
            record.id,
            audience.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
    use uuid::Uuid;

    use super::*;

    fn match_factory() -> MatchRecord {
        MatchRecord {
            id: Uuid::new_v4(),
            match_date: NaiveDate::from_ymd_opt(2024, 6, 8).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 30, 45).unwrap(),
            location: "Marymoor Park".to_string(),
            max_players: 22,
            earlybird_open_at: Utc.with_ymd_and_hms(2024, 6, 3, 17, 0, 0).unwrap(),
            general_open_at: Utc.with_ymd_and_hms(2024, 6, 5, 17, 0, 0).unwrap(),
        }
    }

    #[test]
    fn same_input_yields_identical_output() {
        let composer = AnnouncementComposer::new("https://cricket.example.com".to_string());
        let record = match_factory();
        assert_eq!(
            composer.compose(&record, Audience::General),
            composer.compose(&record, Audience::General)
        );
    }

    #[test]
    fn general_message_carries_capacity() {
        let composer = AnnouncementComposer::new("https://cricket.example.com".to_string());
        let record = match_factory();
        let message = composer.compose(&record, Audience::General);
        assert!(message.contains("Spots: 22"));
        assert!(message.contains("First come first serve"));
    }

    #[test]
    fn earlybird_message_omits_capacity() {
        let composer = AnnouncementComposer::new("https://cricket.example.com".to_string());
        let record = match_factory();
        let message = composer.compose(&record, Audience::Earlybird);
        assert!(!message.contains("Spots:"));
        assert!(message.contains("Early-bird window is open now."));
    }

    #[test]
    fn start_time_is_truncated_to_minutes() {
        let composer = AnnouncementComposer::new("https://cricket.example.com".to_string());
        let message = composer.compose(&match_factory(), Audience::General);
        assert!(message.contains("⏰ 09:30\n"));
    }

    #[test]
    fn rsvp_link_is_parameterized_by_match_and_audience() {
        let composer = AnnouncementComposer::new("https://cricket.example.com".to_string());
        let record = match_factory();
        let message = composer.compose(&record, Audience::Earlybird);
        assert!(message.contains(&format!(
            "https://cricket.example.com/#rsvp?match_id={}&aud=earlybird",
            record.id
        )));
    }
}
