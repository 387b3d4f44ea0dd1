use reqwest::{Client, StatusCode};

use crate::config::ClientConfig;
use crate::domain::model::{ParcelSize, TariffQuote};
use crate::utils::error::{CdekError, Result};

// The calculator route is currently fixed: Moscow (44) to Marfino (441),
// tariffs 1 and 10, door-to-door mode. The address strings accepted by
// `calculate` are not resolved to location codes.
const SENDER_CITY_ID: &str = "44";
const RECEIVER_CITY_ID: &str = "441";
const TARIFF_LIST: &str = "1,10";
const MODE_ID: &str = "2";

/// Client for the CDEK `/calculator/tarifflist` endpoint.
///
/// Holds no mutable state between calls, so one instance can be shared
/// across tasks; the inner `reqwest::Client` pools connections internally.
#[derive(Debug, Clone)]
pub struct PriceCalculator {
    config: ClientConfig,
    client: Client,
}

impl PriceCalculator {
    /// Configured client pointing at the sandbox when `test` is set,
    /// production otherwise. No network call is made here.
    pub fn new(account: impl Into<String>, secure: impl Into<String>, test: bool) -> Self {
        Self {
            config: ClientConfig::new(account, secure, test),
            client: Client::new(),
        }
    }

    /// Client with an explicit config (base-URL override, optional timeout).
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Request one priced quote per tariff for the given parcel.
    ///
    /// Issues exactly one POST and surfaces the first failure directly:
    /// transport faults, a non-200 status, or an undecodable body. The
    /// address strings are accepted for signature compatibility but not
    /// transmitted; the route is fixed (see module constants).
    pub async fn calculate(
        &self,
        _addr_from: &str,
        _addr_to: &str,
        size: ParcelSize,
    ) -> Result<Vec<TariffQuote>> {
        let url = format!("{}/calculator/tarifflist", self.config.base_url);
        let params = self.form_params(&size);

        tracing::debug!("Requesting tariff list from {}", url);
        let response = self.client.post(&url).form(&params).send().await?;
        tracing::debug!("Tariff list response status: {}", response.status());

        if response.status() != StatusCode::OK {
            return Err(CdekError::CalculationFailed {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        let quotes: Vec<TariffQuote> = serde_json::from_str(&body)?;
        Ok(quotes)
    }

    /// Form fields in wire order. Weight is formatted to 3 decimal places,
    /// the linear dimensions to 2; `test=1` is appended only in sandbox mode.
    fn form_params(&self, size: &ParcelSize) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("authLogin", self.config.account.clone()),
            ("secure", self.config.secure.clone()),
            ("senderCityId", SENDER_CITY_ID.to_string()),
            ("receiverCityId", RECEIVER_CITY_ID.to_string()),
            ("tariffList", TARIFF_LIST.to_string()),
            ("modeId", MODE_ID.to_string()),
            ("goodsWeight", format!("{:.3}", size.weight)),
            ("goodsLength", format!("{:.2}", size.length)),
            ("goodsWidth", format!("{:.2}", size.width)),
            ("goodsHeight", format!("{:.2}", size.height)),
        ];

        if self.config.test {
            params.push(("test", "1".to_string()));
        }

        params
    }
}
