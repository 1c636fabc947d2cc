//! Public API surface for feed data.
//!
//! Record shapes follow the city open-data feeds the map consumes. They are
//! owned upstream, so every field the rules do not need is kept loose
//! (`Option`, raw `serde_json::Value` for geometry).

pub use crate::services::parkability::{
    LocationConditions, MeterConditions, ParkabilityAssessment, ParkabilityVerdict,
};
pub use crate::services::street_cleaning::{CleaningOutlook, UrgencyTier};

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::services::street_cleaning::parse_cleaning_date;

/// Location identifier in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationId(pub String);

impl LocationId {
    pub fn new(value: impl Into<String>) -> Self {
        LocationId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One ward/section street-cleaning zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreetCleaningRecord {
    pub ward: String,
    pub section: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<serde_json::Value>,
    #[serde(default, rename = "nextCleaningDateISO")]
    pub next_cleaning_date_iso: Option<String>,
}

impl StreetCleaningRecord {
    pub fn next_cleaning_date(&self) -> Result<Option<chrono::NaiveDate>, InputError> {
        match self.next_cleaning_date_iso.as_deref() {
            Some(value) => parse_cleaning_date(value),
            None => Ok(None),
        }
    }
}

/// A street segment on the winter overnight ban or 2-inch snow ban route list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnowRouteRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<serde_json::Value>,
    pub on_street: String,
    #[serde(default)]
    pub from_street: String,
    #[serde(default)]
    pub to_street: String,
}

/// A single parking meter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterRecord {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub rate: Option<String>,
    #[serde(default)]
    pub rate_description: Option<String>,
    #[serde(default)]
    pub time_limit_hours: Option<f64>,
    /// Central loop zone meter.
    #[serde(default)]
    pub is_clz: bool,
}

/// A residential permit zone block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitZoneRecord {
    pub zone: String,
    pub street: String,
    #[serde(default)]
    pub address_range: Option<String>,
    #[serde(default)]
    pub odd_even: Option<String>,
}

/// The feed records that apply to one named location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub id: LocationId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub street_cleaning: Option<StreetCleaningRecord>,
    #[serde(default)]
    pub winter_ban_route: Option<SnowRouteRecord>,
    #[serde(default)]
    pub snow_route: Option<SnowRouteRecord>,
    #[serde(default)]
    pub meter: Option<MeterRecord>,
    #[serde(default)]
    pub permit_zone: Option<PermitZoneRecord>,
    /// Whether the 2-inch snow ban is currently triggered city-wide.
    #[serde(default)]
    pub snow_ban_active: bool,
}

impl LocationRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: LocationId::new(id),
            name: String::new(),
            street_cleaning: None,
            winter_ban_route: None,
            snow_route: None,
            meter: None,
            permit_zone: None,
            snow_ban_active: false,
        }
    }

    /// Reduce the feed records to the inputs of the parkability rules.
    pub fn conditions(&self) -> Result<LocationConditions, InputError> {
        let next_cleaning = match &self.street_cleaning {
            Some(record) => record.next_cleaning_date()?,
            None => None,
        };
        Ok(LocationConditions {
            next_cleaning,
            meter: self.meter.as_ref().map(|m| MeterConditions {
                rate_description: m.rate_description.clone(),
            }),
            winter_ban_route: self.winter_ban_route.is_some(),
            permit_zone: self.permit_zone.is_some(),
            snow_route: self.snow_route.is_some(),
            snow_ban_active: self.snow_ban_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_meter_record_from_feed_json() {
        let json = r#"{
            "latitude": 41.88,
            "longitude": -87.63,
            "rate": "$4.75",
            "rateDescription": "Mon-Sat 8AM-10PM",
            "timeLimitHours": 2,
            "isClz": true
        }"#;
        let record: MeterRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.rate_description.as_deref(), Some("Mon-Sat 8AM-10PM"));
        assert_eq!(record.time_limit_hours, Some(2.0));
        assert!(record.is_clz);
    }

    #[test]
    fn test_cleaning_record_reads_iso_field() {
        let json = r#"{"ward": "43", "section": "2", "nextCleaningDateISO": "2024-10-21"}"#;
        let record: StreetCleaningRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.next_cleaning_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 10, 21)
        );
    }

    #[test]
    fn test_location_conditions_from_records() {
        let mut record = LocationRecord::new("clark-and-fullerton");
        record.street_cleaning = Some(StreetCleaningRecord {
            ward: "43".into(),
            section: "2".into(),
            geometry: None,
            next_cleaning_date_iso: Some("2024-10-21T00:00:00".into()),
        });
        record.permit_zone = Some(PermitZoneRecord {
            zone: "143".into(),
            street: "N Clark St".into(),
            address_range: Some("2400-2500".into()),
            odd_even: None,
        });

        let conditions = record.conditions().unwrap();
        assert_eq!(conditions.next_cleaning, NaiveDate::from_ymd_opt(2024, 10, 21));
        assert!(conditions.permit_zone);
        assert!(!conditions.winter_ban_route);
        assert!(conditions.meter.is_none());
    }

    #[test]
    fn test_location_conditions_rejects_bad_date() {
        let mut record = LocationRecord::new("bad");
        record.street_cleaning = Some(StreetCleaningRecord {
            ward: "1".into(),
            section: "1".into(),
            geometry: None,
            next_cleaning_date_iso: Some("soon".into()),
        });
        assert!(record.conditions().is_err());
    }

    #[test]
    fn test_location_record_minimal_json() {
        let record: LocationRecord = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert_eq!(record.id.as_str(), "x");
        assert_eq!(record.conditions().unwrap(), LocationConditions::default());
    }
}
