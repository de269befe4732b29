//! Bounding box parsing and containment.

use std::str::FromStr;
use thiserror::Error;

/// Bound names in input order, used to report which value failed to parse.
const BOUND_NAMES: [&str; 4] = ["lat_min", "lat_max", "lng_min", "lng_max"];

#[derive(Error, Debug)]
pub enum BboxError {
    #[error("Bounding box needs exactly 4 values, got {0}")]
    InvalidLength(usize),
    #[error("Invalid {name} value: {value}")]
    InvalidNumber { name: &'static str, value: String },
}

/// A closed rectangle in latitude/longitude space.
///
/// Bounds are taken as given: nothing requires min <= max, and an inverted
/// box simply contains no point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl BoundingBox {
    pub fn new(lat_min: f64, lat_max: f64, lng_min: f64, lng_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lng_min,
            lng_max,
        }
    }

    /// Builds a box from exactly four decimal fields in the order
    /// `lat_min, lat_max, lng_min, lng_max`.
    pub fn from_fields(fields: &[&str]) -> Result<Self, BboxError> {
        if fields.len() != 4 {
            return Err(BboxError::InvalidLength(fields.len()));
        }

        let mut bounds = [0.0f64; 4];
        for (i, field) in fields.iter().enumerate() {
            bounds[i] = field.parse::<f64>().map_err(|_| BboxError::InvalidNumber {
                name: BOUND_NAMES[i],
                value: (*field).to_string(),
            })?;
        }

        Ok(Self::new(bounds[0], bounds[1], bounds[2], bounds[3]))
    }

    /// Closed-interval containment on both axes.
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        self.lat_min <= lat && lat <= self.lat_max && self.lng_min <= lng && lng <= self.lng_max
    }
}

impl FromStr for BoundingBox {
    type Err = BboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').collect();
        Self::from_fields(&fields)
    }
}
