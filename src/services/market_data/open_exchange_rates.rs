use anyhow::anyhow;
use chrono::{DateTime, Local};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    services::shared::env::get_env_variable,
    util::constants::{OXR_HOST, OXR_LATEST_PATH},
};

#[derive(Deserialize, Debug)]
pub struct OxrResponse {
    pub rates: OxrRates,
}

/// The rates tracked by the watch display. Open Exchange Rates returns far
/// more currencies in `latest.json`; everything outside this set is ignored.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub struct OxrRates {
    pub bsd: f64,
    pub btc: f64,
    pub btn: f64,
    pub eur: f64,
    pub pen: f64,
    pub rub: f64,
    pub std: f64,
}

#[derive(Debug, Clone)]
pub struct RateSnapshot {
    pub rates: OxrRates,
    pub acquired_at: DateTime<Local>,
}

impl RateSnapshot {
    /// Display order is fixed, not alphabetical by accident of serde.
    pub fn entries(&self) -> [(&'static str, f64); 7] {
        [
            ("BSD", self.rates.bsd),
            ("BTC", self.rates.btc),
            ("BTN", self.rates.btn),
            ("EUR", self.rates.eur),
            ("PEN", self.rates.pen),
            ("RUB", self.rates.rub),
            ("STD", self.rates.std),
        ]
    }
}

pub async fn fetch_latest_rates() -> anyhow::Result<RateSnapshot> {
    let app_id = get_env_variable("OXR_APP_ID")
        .ok_or_else(|| anyhow!("OXR_APP_ID is not set in your environment variables"))?;

    let client = Client::new();
    let res = client
        .get(format!(
            "https://{}{}?app_id={}",
            OXR_HOST, OXR_LATEST_PATH, app_id
        ))
        .send()
        .await?;

    let body = res.text().await?;
    debug!("received {} bytes from {}", body.len(), OXR_HOST);

    parse_latest_rates(&body)
}

/// A missing or non-numeric rate is an error; a partial snapshot is never
/// built.
pub fn parse_latest_rates(body: &str) -> anyhow::Result<RateSnapshot> {
    let response = serde_json::from_str::<OxrResponse>(body)?;
    Ok(RateSnapshot {
        rates: response.rates,
        acquired_at: Local::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BODY: &str = r#"{"rates":{"BSD":1.0,"BTC":0.000015,"BTN":83.1,"EUR":0.92,"PEN":3.75,"RUB":92.4,"STD":22281.0}}"#;

    #[test]
    fn parses_all_seven_rates() {
        let snapshot = parse_latest_rates(SAMPLE_BODY).unwrap();
        assert_eq!(snapshot.rates.bsd, 1.0);
        assert_eq!(snapshot.rates.btc, 0.000015);
        assert_eq!(snapshot.rates.btn, 83.1);
        assert_eq!(snapshot.rates.eur, 0.92);
        assert_eq!(snapshot.rates.pen, 3.75);
        assert_eq!(snapshot.rates.rub, 92.4);
        assert_eq!(snapshot.rates.std, 22281.0);
    }

    #[test]
    fn ignores_fields_outside_the_tracked_set() {
        let body = r#"{
            "disclaimer": "Usage subject to terms",
            "base": "USD",
            "timestamp": 1735689600,
            "rates": {
                "AED": 3.67,
                "BSD": 1.0,
                "BTC": 0.000015,
                "BTN": 83.1,
                "EUR": 0.92,
                "PEN": 3.75,
                "RUB": 92.4,
                "STD": 22281.0,
                "ZWL": 322.0
            }
        }"#;
        let snapshot = parse_latest_rates(body).unwrap();
        assert_eq!(snapshot.rates.eur, 0.92);
    }

    #[test]
    fn fails_when_a_rate_is_missing() {
        let body = r#"{"rates":{"BSD":1.0,"BTC":0.000015,"BTN":83.1,"EUR":0.92,"RUB":92.4,"STD":22281.0}}"#;
        assert!(parse_latest_rates(body).is_err());
    }

    #[test]
    fn fails_when_a_rate_is_not_numeric() {
        let body = r#"{"rates":{"BSD":1.0,"BTC":"0.000015","BTN":83.1,"EUR":0.92,"PEN":3.75,"RUB":92.4,"STD":22281.0}}"#;
        assert!(parse_latest_rates(body).is_err());
    }

    #[test]
    fn fails_when_rates_object_is_absent() {
        assert!(parse_latest_rates(r#"{"base":"USD"}"#).is_err());
        assert!(parse_latest_rates("not json at all").is_err());
    }

    #[test]
    fn entries_preserve_display_order() {
        let snapshot = parse_latest_rates(SAMPLE_BODY).unwrap();
        let codes: Vec<&str> = snapshot.entries().iter().map(|(code, _)| *code).collect();
        assert_eq!(codes, ["BSD", "BTC", "BTN", "EUR", "PEN", "RUB", "STD"]);
    }
}
