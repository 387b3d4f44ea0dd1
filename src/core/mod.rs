pub mod client;

pub use crate::core::client::PriceCalculator;
