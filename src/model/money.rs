//! Serde helpers for minor-unit money amounts.
//!
//! Amounts are written as strings so clients never lose precision on large values. Either a
//! JSON number or a numeric string is accepted on input.

use serde::{de, Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Amount {
    Number(i64),
    Text(String),
}

impl Amount {
    fn into_minor_units<E: de::Error>(self) -> Result<i64, E> {
        match self {
            Amount::Number(value) => Ok(value),
            Amount::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("invalid amount: {:?}", text))),
        }
    }
}

pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Amount::deserialize(deserializer)?.into_minor_units()
}

pub mod option {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Amount;

    pub fn serialize<S: Serializer>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.collect_str(value),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i64>, D::Error> {
        Option::<Amount>::deserialize(deserializer)?
            .map(Amount::into_minor_units)
            .transpose()
    }
}
