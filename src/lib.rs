pub mod config;
pub mod core;
pub mod domain;
pub mod hello;
pub mod utils;

pub use config::{ClientConfig, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};
pub use core::client::PriceCalculator;
pub use domain::model::{ParcelSize, TariffQuote};
pub use utils::error::{CdekError, Result};
