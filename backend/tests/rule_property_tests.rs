//! Properties that hold for every instant, checked with proptest.

mod support;

use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;

use autopilot_parking::models::CivilInstant;
use autopilot_parking::services::{
    assess, assess_batch, classify, is_enforced, is_permit_zone_active, is_winter_ban_active,
    LocationConditions, MeterConditions, ParkabilityVerdict, UrgencyTier,
};

use support::chicago;

/// Any wall-clock minute in 2023-2025, skipping the 2am hour so DST gaps
/// never come up.
fn any_instant() -> impl Strategy<Value = CivilInstant> {
    (0u64..1096, 0u32..24, 0u32..60)
        .prop_filter("skip DST transition hour", |(_, hour, _)| *hour != 2)
        .prop_map(|(day, hour, minute)| {
            let date = NaiveDate::from_ymd_opt(2023, 1, 1)
                .unwrap()
                .checked_add_days(Days::new(day))
                .unwrap();
            chicago(date.year(), date.month(), date.day(), hour, minute)
        })
}

proptest! {
    #[test]
    fn prop_always_meter_is_enforced(now in any_instant()) {
        prop_assert!(is_enforced(Some("Pay 24/7"), &now));
    }

    #[test]
    fn prop_unreadable_meter_matches_default(now in any_instant(), junk in "[a-z ]{0,20}") {
        prop_assert_eq!(is_enforced(Some(&junk), &now), is_enforced(None, &now));
    }

    #[test]
    fn prop_no_meter_enforcement_on_sunday(now in any_instant()) {
        if now.day_of_week() == 0 {
            prop_assert!(!is_enforced(None, &now));
        }
    }

    #[test]
    fn prop_winter_ban_only_overnight_dec_to_mar(now in any_instant()) {
        if is_winter_ban_active(&now) {
            prop_assert!((3..7).contains(&now.hour()));
            prop_assert!([11, 0, 1, 2].contains(&now.month0()));
        }
    }

    #[test]
    fn prop_permit_zone_never_on_weekend(now in any_instant()) {
        let weekend = matches!(now.day_of_week(), 0 | 6);
        if weekend {
            prop_assert!(!is_permit_zone_active(&now));
        }
    }

    #[test]
    fn prop_cleaning_today_always_restricts(now in any_instant()) {
        let conditions = LocationConditions {
            next_cleaning: Some(now.date()),
            meter: Some(MeterConditions { rate_description: Some("24/7".to_string()) }),
            ..Default::default()
        };
        prop_assert_eq!(classify(Some(now.date()), &now), UrgencyTier::Today);
        prop_assert_eq!(assess(&conditions, &now).verdict, ParkabilityVerdict::Restricted);
    }

    #[test]
    fn prop_batch_matches_individual(now in any_instant(), ahead in 0u64..10) {
        let locations = vec![
            LocationConditions {
                next_cleaning: now.date().checked_add_days(Days::new(ahead)),
                ..Default::default()
            },
            LocationConditions { permit_zone: true, ..Default::default() },
            LocationConditions { winter_ban_route: true, ..Default::default() },
            LocationConditions::default(),
        ];
        let batch = assess_batch(&locations, &now);
        for (conditions, assessment) in locations.iter().zip(&batch) {
            prop_assert_eq!(assessment, &assess(conditions, &now));
        }
    }

    #[test]
    fn prop_priority_matches_verdict(now in any_instant(), permit in any::<bool>(), meter in any::<bool>()) {
        let conditions = LocationConditions {
            permit_zone: permit,
            meter: meter.then(MeterConditions::default),
            ..Default::default()
        };
        let assessment = assess(&conditions, &now);
        prop_assert_eq!(assessment.priority, assessment.verdict.priority());
        prop_assert_eq!(assessment.color.as_str(), assessment.verdict.color());
    }
}
