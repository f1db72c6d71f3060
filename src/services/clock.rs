//! Clock-string rendering for fractional-hour segment boundaries.
//!
//! Segment boundaries are exact fractional hours internally and render as
//! "HH:MM", with "24:00" as the end-of-day sentinel. Rendering floors the
//! hour and rounds the minute; a minute that rounds to 60 carries into the
//! next hour, so equal floats always render to equal strings and adjacent
//! segments never show a visible gap or overlap.

/// Render a fractional hour-of-day as "HH:MM"
pub fn format_hours(hours: f64) -> String {
    let total_minutes = ((hours * 60.0).round() as i64).clamp(0, 24 * 60);
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Parse "HH:MM" back into fractional hours. Accepts "24:00".
pub fn parse_hours(s: &str) -> Option<f64> {
    let (h, m) = s.split_once(':')?;
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    if m >= 60 || h > 24 || (h == 24 && m != 0) {
        return None;
    }
    Some(f64::from(h) + f64::from(m) / 60.0)
}

/// Serde adapter for fractional-hour fields rendered as clock strings.
///
/// Use as `#[serde(with = "clock::serde_hhmm")]`.
pub mod serde_hhmm {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(hours: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_hours(*hours))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_hours(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid clock string: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_hours() {
        assert_eq!(format_hours(0.0), "00:00");
        assert_eq!(format_hours(10.0), "10:00");
        assert_eq!(format_hours(24.0), "24:00");
    }

    #[test]
    fn test_fractional_hours_round_to_minute() {
        assert_eq!(format_hours(19.5), "19:30");
        // 1 mile at 60 mph = 1 minute of driving
        assert_eq!(format_hours(11.0 + 1.0 / 60.0), "11:01");
        // Half a minute rounds away from zero
        assert_eq!(format_hours(10.0 + 0.5 / 60.0), "10:01");
    }

    #[test]
    fn test_minute_sixty_carries_into_hour() {
        assert_eq!(format_hours(10.9999), "11:00");
        assert_eq!(format_hours(23.9999), "24:00");
    }

    #[test]
    fn test_equal_floats_render_equal_strings() {
        let boundary = 13.0 + 37.0 / 60.0 + 1e-12;
        assert_eq!(format_hours(boundary), format_hours(boundary));
    }

    #[test]
    fn test_parse_round_trips_exact_minutes() {
        for s in ["00:00", "10:30", "19:31", "23:59", "24:00"] {
            let hours = parse_hours(s).unwrap();
            assert_eq!(format_hours(hours), s);
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_hours("24:01").is_none());
        assert!(parse_hours("10:60").is_none());
        assert!(parse_hours("25:00").is_none());
        assert!(parse_hours("1030").is_none());
        assert!(parse_hours("aa:bb").is_none());
    }
}
