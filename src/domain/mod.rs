// Domain layer: wire-format models only. No I/O beyond serde.

pub mod model;

pub use crate::domain::model::{ParcelSize, TariffQuote};
