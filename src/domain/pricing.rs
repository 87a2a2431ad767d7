// src/domain/pricing.rs

use serde::de::{MapAccess, Visitor};
use serde::ser::{SerializeMap, SerializeTuple};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A price as it appears in the asset: usually a number, sometimes text ("on request").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Amount(serde_json::Number),
    Text(String),
}

impl fmt::Display for PriceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceValue::Amount(n) => write!(f, "{n}"),
            PriceValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PriceValue {
    fn from(n: i64) -> Self {
        PriceValue::Amount(n.into())
    }
}

impl From<&str> for PriceValue {
    fn from(s: &str) -> Self {
        PriceValue::Text(s.to_string())
    }
}

/// Tier label -> price, iterated in the order the entries were inserted
/// (for parsed data: the order they appear in the source object).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingMap {
    entries: Vec<(String, PriceValue)>,
}

impl PricingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. An overwritten label keeps its original position.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<PriceValue>) {
        let label = label.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((label, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PriceValue)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v))
    }
}

impl<L: Into<String>, V: Into<PriceValue>> FromIterator<(L, V)> for PricingMap {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let mut map = PricingMap::new();
        for (label, value) in iter {
            map.insert(label, value);
        }
        map
    }
}

impl Serialize for PricingMap {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        let mut map = ser.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PricingMap {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct PricingVisitor;

        impl<'de> Visitor<'de> for PricingVisitor {
            type Value = PricingMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of tier label -> price")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = PricingMap::new();
                while let Some((label, value)) = access.next_entry::<String, PriceValue>()? {
                    map.insert(label, value);
                }
                Ok(map)
            }
        }

        de.deserialize_map(PricingVisitor)
    }
}

/// One line of the pricing table. Serializes as `[label, value]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRow {
    pub label: String,
    pub value: PriceValue,
}

impl Serialize for PricingRow {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        let mut pair = ser.serialize_tuple(2)?;
        pair.serialize_element(&self.label)?;
        pair.serialize_element(&self.value)?;
        pair.end()
    }
}

/// Reshape a pricing map into table rows, one per tier, in map order.
/// A campaign without pricing gets no rows rather than an error.
pub fn to_rows(pricing: Option<&PricingMap>) -> Vec<PricingRow> {
    pricing
        .map(|map| {
            map.iter()
                .map(|(label, value)| PricingRow {
                    label: label.to_string(),
                    value: value.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}
