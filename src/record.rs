//! Serde model of one dataset line.

use serde::{Deserialize, Deserializer};

/// One business record. Only `latitude` and `longitude` drive filtering;
/// the remaining fields exist so that real dataset lines decode cleanly.
///
/// Missing fields fall back to their defaults, explicit nulls decode as
/// defaults, and unknown fields are ignored, so partial records still decode.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Business {
    #[serde(deserialize_with = "null_to_default")]
    pub business_id: String,
    #[serde(deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(deserialize_with = "null_to_default")]
    pub address: String,
    #[serde(deserialize_with = "null_to_default")]
    pub city: String,
    #[serde(deserialize_with = "null_to_default")]
    pub state: String,
    #[serde(deserialize_with = "null_to_default")]
    pub postal_code: String,
    #[serde(deserialize_with = "null_to_default")]
    pub latitude: f64,
    #[serde(deserialize_with = "null_to_default")]
    pub longitude: f64,
    #[serde(deserialize_with = "null_to_default")]
    pub stars: f64,
    #[serde(deserialize_with = "null_to_default")]
    pub review_count: i64,
    #[serde(deserialize_with = "null_to_default")]
    pub is_open: i64,
    pub attributes: Option<Attributes>,
    pub categories: Option<String>,
    pub hours: Option<Hours>,
}

/// Real dataset lines carry explicit nulls in scalar columns. Decode a null
/// as the field's default, the same as if the field were missing.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Attribute flags as the dataset ships them: stringly typed, often absent.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Attributes {
    pub business_accepts_credit_cards: Option<String>,
    pub bike_parking: Option<String>,
    pub good_for_kids: Option<String>,
    pub business_parking: Option<String>,
    pub by_appointment_only: Option<String>,
    pub restaurants_price_range2: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Hours {
    pub monday: Option<String>,
    pub tuesday: Option<String>,
    pub wednesday: Option<String>,
    pub thursday: Option<String>,
    pub friday: Option<String>,
    pub saturday: Option<String>,
    pub sunday: Option<String>,
}
