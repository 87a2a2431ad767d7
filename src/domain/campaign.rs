// src/domain/campaign.rs

use crate::domain::pricing::PricingMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A campaign exactly as the data source delivers it.
/// Nothing here is derived; see [`Campaign`] for the classified form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub region: Option<String>,

    /// Nominal scheduled date of the campaign.
    #[serde(with = "created_on")]
    pub created_on: DateTime<Utc>,

    /// Tier label -> price. Absent in the asset is the same as empty.
    #[serde(default)]
    pub price: Option<PricingMap>,

    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub csv: Option<String>,
    #[serde(default)]
    pub report: Option<String>,
}

/// Which of the three lists a campaign belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Upcoming,
    Live,
    Past,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Upcoming, Bucket::Live, Bucket::Past];

    /// The sign rule. Zero is the only value that maps to `Live`.
    pub fn for_diff(diff: i64) -> Self {
        match diff {
            d if d < 0 => Bucket::Past,
            0 => Bucket::Live,
            _ => Bucket::Upcoming,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Bucket::Upcoming => "upcoming",
            Bucket::Live => "live",
            Bucket::Past => "past",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(Bucket::Upcoming),
            "live" => Ok(Bucket::Live),
            "past" => Ok(Bucket::Past),
            other => Err(format!("unknown campaign bucket '{other}'")),
        }
    }
}

/// A record after classification. Only the classifier builds these,
/// so `time_diff` and `kind` are always set and always agree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(flatten)]
    pub record: CampaignRecord,
    pub time_diff: i64,
    #[serde(rename = "type")]
    pub kind: Bucket,
}

impl Campaign {
    pub(crate) fn new(record: CampaignRecord, time_diff: i64) -> Self {
        Self {
            record,
            time_diff,
            kind: Bucket::for_diff(time_diff),
        }
    }

    pub fn into_record(self) -> CampaignRecord {
        self.record
    }
}

/// `createdOn` comes in as epoch millis in the asset, but hand-written data
/// tends to use RFC 3339 or a bare calendar date. Always written back as millis.
mod created_on {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_i64(value.timestamp_millis())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<DateTime<Utc>, D::Error> {
        de.deserialize_any(CreatedOnVisitor)
    }

    struct CreatedOnVisitor;

    impl<'de> Visitor<'de> for CreatedOnVisitor {
        type Value = DateTime<Utc>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("epoch milliseconds, an RFC 3339 timestamp, or a YYYY-MM-DD date")
        }

        fn visit_i64<E: de::Error>(self, ms: i64) -> Result<Self::Value, E> {
            Utc.timestamp_millis_opt(ms)
                .single()
                .ok_or_else(|| E::custom(format!("timestamp out of range: {ms}")))
        }

        fn visit_u64<E: de::Error>(self, ms: u64) -> Result<Self::Value, E> {
            let ms = i64::try_from(ms).map_err(|_| E::custom("timestamp out of range"))?;
            self.visit_i64(ms)
        }

        fn visit_f64<E: de::Error>(self, ms: f64) -> Result<Self::Value, E> {
            if !ms.is_finite() {
                return Err(E::custom("timestamp is not a finite number"));
            }
            self.visit_i64(ms.trunc() as i64)
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Ok(dt.with_timezone(&Utc));
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
                .ok_or_else(|| E::custom(format!("unparseable createdOn '{s}'")))
        }
    }
}
