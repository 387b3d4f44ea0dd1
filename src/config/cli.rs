use clap::Parser;

use crate::config::ClientConfig;
use crate::domain::model::ParcelSize;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "cdek-tariff")]
#[command(about = "Calculate CDEK delivery prices for a parcel")]
pub struct CliConfig {
    #[arg(long, env = "CDEK_ACCOUNT")]
    pub account: String,

    #[arg(long, env = "CDEK_SECURE")]
    pub secure: String,

    #[arg(long, help = "Use the sandbox environment")]
    pub test: bool,

    #[arg(long, help = "Override the calculator base URL")]
    pub base_url: Option<String>,

    #[arg(long, help = "Parcel weight in kilograms")]
    pub weight: f64,

    #[arg(long, help = "Parcel length in centimeters")]
    pub length: f64,

    #[arg(long, help = "Parcel width in centimeters")]
    pub width: f64,

    #[arg(long, help = "Parcel height in centimeters")]
    pub height: f64,

    #[arg(long, default_value = "")]
    pub addr_from: String,

    #[arg(long, default_value = "")]
    pub addr_to: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.account.clone(), self.secure.clone(), self.test);
        match &self.base_url {
            Some(base_url) => config.with_base_url(base_url.clone()),
            None => config,
        }
    }

    pub fn parcel_size(&self) -> ParcelSize {
        ParcelSize::new(self.weight, self.length, self.width, self.height)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("account", &self.account)?;
        validate_non_empty_string("secure", &self.secure)?;
        if let Some(base_url) = &self.base_url {
            validate_url("base_url", base_url)?;
        }
        validate_positive_number("weight", self.weight)?;
        validate_positive_number("length", self.length)?;
        validate_positive_number("width", self.width)?;
        validate_positive_number("height", self.height)?;
        Ok(())
    }
}
