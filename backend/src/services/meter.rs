//! Metered parking enforcement.

use crate::models::{CivilInstant, MeterSchedule};

/// Whether a meter described by `rate_description` is being enforced at `now`.
///
/// A missing or unreadable description uses the default Mon-Sat 8am-10pm
/// window; see [`MeterSchedule::resolve`].
pub fn is_enforced(rate_description: Option<&str>, now: &CivilInstant) -> bool {
    let (schedule, _) = MeterSchedule::resolve(rate_description);
    schedule.is_active(now)
}

/// Human-readable hours for the same schedule [`is_enforced`] evaluates.
pub fn schedule_text(rate_description: Option<&str>) -> String {
    let (schedule, _) = MeterSchedule::resolve(rate_description);
    schedule.describe()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CIVIL_TIMEZONE;

    fn at(month: u32, day: u32, hour: u32, minute: u32) -> CivilInstant {
        CivilInstant::from_local(CIVIL_TIMEZONE, 2024, month, day, hour, minute).unwrap()
    }

    // 2024-05-05 is a Sunday; 05-06 Monday ... 05-11 Saturday.
    fn on_weekday(day_of_week: u32, hour: u32) -> CivilInstant {
        at(5, 5 + day_of_week, hour, 0)
    }

    #[test]
    fn test_default_schedule_truth_table() {
        for day in 0..7 {
            for hour in 0..24 {
                let now = on_weekday(day, hour);
                assert_eq!(now.day_of_week(), day);
                let expected = (1..=6).contains(&day) && (8..22).contains(&hour);
                assert_eq!(
                    is_enforced(None, &now),
                    expected,
                    "day {} hour {}",
                    day,
                    hour
                );
            }
        }
    }

    #[test]
    fn test_always_enforced_24_7() {
        for day in 0..7 {
            for hour in 0..24 {
                assert!(is_enforced(Some("24/7"), &on_weekday(day, hour)));
            }
        }
    }

    #[test]
    fn test_weekday_business_hours() {
        let desc = Some("Mon-Fri 9AM-5PM");
        assert!(!is_enforced(desc, &on_weekday(6, 10)));
        assert!(is_enforced(desc, &on_weekday(3, 9)));
        assert!(!is_enforced(desc, &on_weekday(3, 17)));
        assert!(is_enforced(desc, &at(5, 8, 16, 59)));
    }

    #[test]
    fn test_sunday_outside_mon_sat_but_text_unchanged() {
        let desc = Some("Mon-Sat 8AM-10PM");
        let sunday = on_weekday(0, 10);
        assert!(!is_enforced(desc, &sunday));
        assert_eq!(schedule_text(desc), "Mon–Sat 8am–10pm");
    }

    #[test]
    fn test_default_boundary_at_eight() {
        assert!(!is_enforced(None, &at(5, 6, 7, 59)));
        assert!(is_enforced(None, &at(5, 6, 8, 0)));
    }

    #[test]
    fn test_unparseable_description_uses_default_window() {
        let desc = Some("Pay at kiosk");
        assert!(!is_enforced(desc, &on_weekday(0, 12)));
        assert!(is_enforced(desc, &on_weekday(2, 12)));
        assert!(!is_enforced(desc, &on_weekday(2, 22)));
        assert_eq!(schedule_text(desc), "Mon–Sat 8am–10pm");
    }

    #[test]
    fn test_mon_sun_includes_sunday() {
        let desc = Some("MON-SUN 7AM-9PM");
        assert!(is_enforced(desc, &on_weekday(0, 7)));
        assert!(!is_enforced(desc, &on_weekday(0, 21)));
        assert_eq!(schedule_text(desc), "Mon–Sun 7am–9pm");
    }

    #[test]
    fn test_schedule_text_variants() {
        assert_eq!(schedule_text(None), "Mon–Sat 8am–10pm");
        assert_eq!(schedule_text(Some("24/7")), "24/7");
        assert_eq!(schedule_text(Some("Mon-Fri 12AM-12PM")), "Mon–Fri 12am–12pm");
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let now = on_weekday(4, 13);
        let desc = Some("Mon-Fri 9AM-5PM");
        assert_eq!(is_enforced(desc, &now), is_enforced(desc, &now));
        assert_eq!(schedule_text(desc), schedule_text(desc));
    }
}
