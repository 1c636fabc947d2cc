//! Residential permit zone enforcement hours.

use crate::models::{CivilInstant, DayRange, EnforcementWindow};

/// Permit zones are enforced Monday through Friday, 6am to 6pm.
pub const PERMIT_ZONE_WINDOW: EnforcementWindow = EnforcementWindow::new(DayRange::MonFri, 6, 18);

/// Only the time question; zone membership of an address is feed data.
pub fn is_permit_zone_active(now: &CivilInstant) -> bool {
    PERMIT_ZONE_WINDOW.contains(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CIVIL_TIMEZONE;

    fn at(month: u32, day: u32, hour: u32) -> CivilInstant {
        CivilInstant::from_local(CIVIL_TIMEZONE, 2024, month, day, hour, 0).unwrap()
    }

    #[test]
    fn test_wednesday_noon_active() {
        assert!(is_permit_zone_active(&at(1, 17, 12)));
    }

    #[test]
    fn test_saturday_noon_inactive() {
        assert!(!is_permit_zone_active(&at(1, 20, 12)));
    }

    #[test]
    fn test_wednesday_evening_inactive() {
        assert!(!is_permit_zone_active(&at(1, 17, 20)));
    }

    #[test]
    fn test_hour_edges() {
        assert!(!is_permit_zone_active(&at(1, 17, 5)));
        assert!(is_permit_zone_active(&at(1, 17, 6)));
        assert!(is_permit_zone_active(&at(1, 17, 17)));
        assert!(!is_permit_zone_active(&at(1, 17, 18)));
    }

    #[test]
    fn test_sunday_inactive() {
        assert!(!is_permit_zone_active(&at(1, 21, 12)));
    }

    #[test]
    fn test_window_text() {
        assert_eq!(PERMIT_ZONE_WINDOW.describe(), "Mon–Fri 6am–6pm");
    }
}
