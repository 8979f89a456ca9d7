//! Tolerant `deserialize_with` helpers for client-supplied scalars.
//!
//! Browser forms send numbers as strings (`"6"`) and free-text fields as
//! numbers (`1877`). These helpers accept either spelling and reject
//! anything else, so a bad shape still fails at the extractor boundary.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Optional text that may arrive as a JSON string or number.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|value| match value {
        Scalar::Int(i) => i.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Text(s) => s,
    }))
}

/// Optional integer that may arrive as a JSON number or an integer string.
pub fn int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let Some(value) = Option::<Scalar>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let wide = match value {
        Scalar::Int(i) => i,
        Scalar::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => f as i64,
        Scalar::Float(f) => {
            return Err(D::Error::custom(format!("expected an integer, got {f}")));
        }
        Scalar::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected an integer, got {s:?}")))?,
    };

    T::try_from(wide)
        .map(Some)
        .map_err(|_| D::Error::custom(format!("integer {wide} out of range")))
}

/// Required integer with the same leniency as [`int`]; `null` is rejected.
pub fn required_int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    int(deserializer)?.ok_or_else(|| D::Error::custom("expected an integer, got null"))
}
