use serde::{Deserialize, Serialize};

/// Physical dimensions of a shipment, in the units the CDEK API expects
/// (kilograms and centimeters). No conversion is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParcelSize {
    pub weight: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl ParcelSize {
    pub fn new(weight: f64, length: f64, width: f64, height: f64) -> Self {
        Self {
            weight,
            length,
            width,
            height,
        }
    }
}

/// One priced delivery option from the calculator response. Field names
/// follow the wire format of the `/calculator/tarifflist` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TariffQuote {
    pub tariff_code: i32,
    pub tariff_name: String,
    pub tariff_description: String,
    pub delivery_mode: i32,
    pub delivery_sum: f64,
    pub period_min: i32,
    pub period_max: i32,
}
