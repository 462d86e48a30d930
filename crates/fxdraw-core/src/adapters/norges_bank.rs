//! Norges Bank daily exchange-rate source.
//!
//! Queries the bank's public SDMX-JSON API for one day of fixings across the
//! full currency set and reduces the response to a [`RateTable`]. The
//! response layout is positional: series keys are dimension-index tuples
//! (`FREQ:QUOTE_CUR:BASE_CUR:TENOR`), and the QUOTE_CUR component indexes
//! into the code list published under
//! `data.structure.dimensions.series[1].values`. Observations are aligned to
//! codes through that index, never through JSON member order.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{CanonicalRates, RateDate, RateTable, CURRENCIES};
use crate::error::RateError;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::rate_source::RateSource;

const DEFAULT_BASE_URL: &str = "https://data.norges-bank.no/api/data";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Index of the quote currency dimension in the EXR dataflow, both in the
/// structure's series dimension list and in each series key tuple.
const QUOTE_CUR_DIMENSION: usize = 1;

/// Observation index within a single-day window.
const FIRST_OBSERVATION: &str = "0";

/// Rate source backed by the Norges Bank SDMX-JSON API.
pub struct NorgesBankSource {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: u64,
}

impl NorgesBankSource {
    pub fn new() -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Business-day fixings for every code in [`CURRENCIES`], quoted against
    /// NOK, for the single day `date`.
    pub async fn daily_rates(&self, date: RateDate) -> Result<RateTable, RateError> {
        let url = self.rates_url(date);
        debug!(%url, "requesting daily rates");

        let request = HttpRequest::get(&url).with_timeout_ms(self.timeout_ms);
        let response =
            self.http_client
                .execute(request)
                .await
                .map_err(|e| RateError::Unavailable {
                    date: date.format_iso(),
                    reason: e.message().to_owned(),
                })?;

        if !response.is_success() {
            warn!(status = response.status, "rate endpoint returned failure status");
            return Err(RateError::Unavailable {
                date: date.format_iso(),
                reason: format!("status {}", response.status),
            });
        }

        let table = parse_daily_rates(date, &response.body)?;
        debug!(observations = table.len(), "parsed daily rate table");
        Ok(table)
    }

    fn rates_url(&self, date: RateDate) -> String {
        let date = date.format_iso();
        format!(
            "{}/EXR/B.{}.NOK.SP?format=sdmx-json&startPeriod={date}&endPeriod={date}&locale=no",
            self.base_url,
            CURRENCIES.join("+"),
        )
    }
}

impl Default for NorgesBankSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RateSource for NorgesBankSource {
    fn canonical_rates<'a>(
        &'a self,
        date: RateDate,
    ) -> Pin<Box<dyn Future<Output = Result<CanonicalRates, RateError>> + Send + 'a>> {
        Box::pin(async move { Ok(self.daily_rates(date).await?.canonical()) })
    }
}

#[derive(Debug, Deserialize)]
struct SdmxEnvelope {
    data: SdmxData,
}

#[derive(Debug, Deserialize)]
struct SdmxData {
    #[serde(rename = "dataSets", default)]
    data_sets: Vec<SdmxDataSet>,
    structure: SdmxStructure,
}

#[derive(Debug, Deserialize)]
struct SdmxDataSet {
    #[serde(default)]
    series: HashMap<String, SdmxSeries>,
}

#[derive(Debug, Deserialize)]
struct SdmxSeries {
    observations: HashMap<String, Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct SdmxStructure {
    dimensions: SdmxDimensions,
}

#[derive(Debug, Deserialize)]
struct SdmxDimensions {
    series: Vec<SdmxDimension>,
}

#[derive(Debug, Deserialize)]
struct SdmxDimension {
    #[serde(default)]
    values: Vec<SdmxDimensionValue>,
}

#[derive(Debug, Deserialize)]
struct SdmxDimensionValue {
    id: String,
}

fn parse_daily_rates(date: RateDate, body: &str) -> Result<RateTable, RateError> {
    let envelope: SdmxEnvelope =
        serde_json::from_str(body).map_err(|e| malformed(date, e.to_string()))?;

    let dimension_count = envelope.data.structure.dimensions.series.len();
    let codes = quote_currency_codes(&envelope)
        .ok_or_else(|| malformed(date, "missing quote currency dimension"))?;

    if codes.len() != CURRENCIES.len() {
        return Err(RateError::CodeCount {
            date: date.format_iso(),
            actual: codes.len(),
            expected: CURRENCIES.len(),
        });
    }

    let data_set = envelope
        .data
        .data_sets
        .first()
        .ok_or_else(|| malformed(date, "response carries no data sets"))?;

    if data_set.series.len() != CURRENCIES.len() {
        return Err(RateError::ValueCount {
            date: date.format_iso(),
            actual: data_set.series.len(),
            expected: CURRENCIES.len(),
        });
    }

    let mut pairs = Vec::with_capacity(codes.len());
    for (key, series) in &data_set.series {
        let index = quote_currency_index(key, dimension_count)
            .ok_or_else(|| malformed(date, format!("series key '{key}' is not a dimension tuple")))?;
        let code = codes
            .get(index)
            .ok_or_else(|| malformed(date, format!("series key '{key}' points past the currency list")))?;
        let value = first_observation(series)
            .ok_or_else(|| malformed(date, format!("series '{key}' has no usable observation")))?;
        pairs.push((code.clone(), value.to_owned()));
    }

    RateTable::from_pairs(pairs)
}

fn malformed(date: RateDate, detail: impl Into<String>) -> RateError {
    RateError::MalformedResponse {
        date: date.format_iso(),
        detail: detail.into(),
    }
}

fn quote_currency_codes(envelope: &SdmxEnvelope) -> Option<Vec<String>> {
    let dimension = envelope
        .data
        .structure
        .dimensions
        .series
        .get(QUOTE_CUR_DIMENSION)?;
    Some(dimension.values.iter().map(|v| v.id.clone()).collect())
}

/// Position of a series in the quote currency dimension, read from its key
/// tuple. Rejects keys whose arity does not match the dimension list.
fn quote_currency_index(key: &str, dimension_count: usize) -> Option<usize> {
    let parts: Vec<&str> = key.split(':').collect();
    if parts.len() != dimension_count {
        return None;
    }
    parts.get(QUOTE_CUR_DIMENSION)?.parse().ok()
}

/// First cell of the day's observation for one series. Attribute tails after
/// the value are ignored; a non-string cell yields `None`.
fn first_observation(series: &SdmxSeries) -> Option<&str> {
    series.observations.get(FIRST_OBSERVATION)?.first()?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RateErrorKind;
    use crate::http_client::{HttpError, HttpResponse};
    use serde_json::json;

    /// Transport double that replays a fixed outcome.
    struct StaticHttpClient {
        outcome: Result<HttpResponse, HttpError>,
    }

    impl StaticHttpClient {
        fn responding(response: HttpResponse) -> Arc<Self> {
            Arc::new(Self {
                outcome: Ok(response),
            })
        }

        fn failing(error: HttpError) -> Arc<Self> {
            Arc::new(Self {
                outcome: Err(error),
            })
        }
    }

    impl HttpClient for StaticHttpClient {
        fn execute<'a>(
            &'a self,
            _request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
            let outcome = self.outcome.clone();
            Box::pin(async move { outcome })
        }
    }

    fn sdmx_body(codes: &[&str], values: &[&str]) -> String {
        sdmx_body_with_keys(
            codes,
            &values
                .iter()
                .enumerate()
                .map(|(index, value)| (format!("0:{index}:0:0"), (*value).to_string()))
                .collect::<Vec<_>>(),
        )
    }

    fn sdmx_body_with_keys(codes: &[&str], keyed_values: &[(String, String)]) -> String {
        let mut series = serde_json::Map::new();
        for (key, value) in keyed_values {
            series.insert(
                key.clone(),
                json!({ "observations": { "0": [value] } }),
            );
        }
        let code_values: Vec<_> = codes.iter().map(|code| json!({ "id": code })).collect();
        json!({
            "data": {
                "dataSets": [{ "series": series }],
                "structure": { "dimensions": { "series": [
                    { "id": "FREQ", "values": [{ "id": "B" }] },
                    { "id": "QUOTE_CUR", "values": code_values },
                    { "id": "BASE_CUR", "values": [{ "id": "NOK" }] },
                    { "id": "TENOR", "values": [{ "id": "SP" }] },
                ] } }
            }
        })
        .to_string()
    }

    fn full_codes() -> Vec<&'static str> {
        CURRENCIES.to_vec()
    }

    fn full_values() -> Vec<String> {
        (0..CURRENCIES.len()).map(|i| format!("{i}.5")).collect()
    }

    fn date() -> RateDate {
        RateDate::parse("2026-01-30").expect("valid date")
    }

    fn source_with_body(body: String) -> NorgesBankSource {
        NorgesBankSource::with_http_client(StaticHttpClient::responding(HttpResponse::ok_json(
            body,
        )))
    }

    #[test]
    fn url_requests_all_codes_for_a_single_day() {
        let source = NorgesBankSource::new();
        let url = source.rates_url(date());

        assert_eq!(
            url,
            format!(
                "https://data.norges-bank.no/api/data/EXR/B.{}.NOK.SP\
                 ?format=sdmx-json&startPeriod=2026-01-30&endPeriod=2026-01-30&locale=no",
                CURRENCIES.join("+")
            )
        );
    }

    #[tokio::test]
    async fn parses_a_full_fixing_day() {
        let values = full_values();
        let value_refs: Vec<&str> = values.iter().map(String::as_str).collect();
        let source = source_with_body(sdmx_body(&full_codes(), &value_refs));

        let table = source.daily_rates(date()).await.expect("full day parses");

        assert_eq!(table.len(), CURRENCIES.len());
        assert_eq!(table.get("AUD"), Some("0.5"));
        assert_eq!(table.get("ZAR"), Some("36.5"));
    }

    #[tokio::test]
    async fn alignment_follows_series_keys_not_dimension_order() {
        // Codes arrive in provider order, not alphabetical order. Each series
        // key still names its own position in the code list.
        let mut codes = full_codes();
        codes.reverse();
        let keyed: Vec<(String, String)> = (0..codes.len())
            .map(|index| (format!("0:{index}:0:0"), format!("{index}.0")))
            .collect();
        let source = source_with_body(sdmx_body_with_keys(&codes, &keyed));

        let table = source.daily_rates(date()).await.expect("must parse");

        // ZAR is first in the reversed code list, so it pairs with index 0.
        assert_eq!(table.get("ZAR"), Some("0.0"));
        assert_eq!(table.get("AUD"), Some("36.0"));
    }

    #[tokio::test]
    async fn short_code_list_fails_the_code_count_gate() {
        let codes = &full_codes()[..36];
        let values = full_values();
        let value_refs: Vec<&str> = values.iter().map(String::as_str).collect();
        let source = source_with_body(sdmx_body(codes, &value_refs));

        let err = source.daily_rates(date()).await.expect_err("must fail");

        assert_eq!(
            err,
            RateError::CodeCount {
                date: String::from("2026-01-30"),
                actual: 36,
                expected: 37,
            }
        );
    }

    #[tokio::test]
    async fn short_series_list_fails_the_value_count_gate() {
        let values = full_values();
        let value_refs: Vec<&str> = values.iter().map(String::as_str).collect();
        let source = source_with_body(sdmx_body(&full_codes(), &value_refs[..36]));

        let err = source.daily_rates(date()).await.expect_err("must fail");

        assert_eq!(
            err,
            RateError::ValueCount {
                date: String::from("2026-01-30"),
                actual: 36,
                expected: 37,
            }
        );
    }

    #[tokio::test]
    async fn failure_status_is_reported_as_unavailable() {
        let source = NorgesBankSource::with_http_client(StaticHttpClient::responding(
            HttpResponse {
                status: 500,
                body: String::from("upstream broke"),
            },
        ));

        let err = source.daily_rates(date()).await.expect_err("must fail");

        assert_eq!(err.kind(), RateErrorKind::Unavailable);
        assert!(err.to_string().contains("status 500"));
    }

    #[tokio::test]
    async fn transport_failure_is_reported_as_unavailable() {
        let source = NorgesBankSource::with_http_client(StaticHttpClient::failing(
            HttpError::new("request timeout: deadline elapsed"),
        ));

        let err = source.daily_rates(date()).await.expect_err("must fail");

        assert_eq!(err.kind(), RateErrorKind::Unavailable);
        assert!(err.to_string().contains("request timeout"));
    }

    #[tokio::test]
    async fn unparseable_body_is_a_malformed_response() {
        let source = source_with_body(String::from("<html>not sdmx</html>"));

        let err = source.daily_rates(date()).await.expect_err("must fail");

        assert!(matches!(err, RateError::MalformedResponse { .. }));
        assert_eq!(err.kind(), RateErrorKind::Integrity);
    }

    #[tokio::test]
    async fn malformed_series_key_is_rejected() {
        let mut keyed: Vec<(String, String)> = (0..CURRENCIES.len())
            .map(|index| (format!("0:{index}:0:0"), format!("{index}.0")))
            .collect();
        keyed[5] = (String::from("0:x:0:0"), String::from("5.0"));
        let source = source_with_body(sdmx_body_with_keys(&full_codes(), &keyed));

        let err = source.daily_rates(date()).await.expect_err("must fail");

        assert!(matches!(err, RateError::MalformedResponse { .. }));
        assert!(err.to_string().contains("0:x:0:0"));
    }

    #[tokio::test]
    async fn duplicate_series_position_is_rejected() {
        let mut keyed: Vec<(String, String)> = (0..CURRENCIES.len())
            .map(|index| (format!("0:{index}:0:0"), format!("{index}.0")))
            .collect();
        // Two series claim position 0 (AUD); position 1 is never observed.
        keyed[1] = (String::from("0:0:1:0"), String::from("1.0"));
        let source = source_with_body(sdmx_body_with_keys(&full_codes(), &keyed));

        let err = source.daily_rates(date()).await.expect_err("must fail");

        assert_eq!(
            err,
            RateError::DuplicateCode {
                code: String::from("AUD")
            }
        );
    }

    #[tokio::test]
    async fn numeric_observation_cell_is_rejected() {
        let mut series = serde_json::Map::new();
        for index in 0..CURRENCIES.len() {
            let cell = if index == 3 {
                json!({ "observations": { "0": [9.75] } })
            } else {
                json!({ "observations": { "0": [format!("{index}.0")] } })
            };
            series.insert(format!("0:{index}:0:0"), cell);
        }
        let code_values: Vec<_> = CURRENCIES.iter().map(|code| json!({ "id": code })).collect();
        let body = json!({
            "data": {
                "dataSets": [{ "series": series }],
                "structure": { "dimensions": { "series": [
                    { "id": "FREQ", "values": [{ "id": "B" }] },
                    { "id": "QUOTE_CUR", "values": code_values },
                    { "id": "BASE_CUR", "values": [{ "id": "NOK" }] },
                    { "id": "TENOR", "values": [{ "id": "SP" }] },
                ] } }
            }
        })
        .to_string();
        let source = source_with_body(body);

        let err = source.daily_rates(date()).await.expect_err("must fail");

        assert!(matches!(err, RateError::MalformedResponse { .. }));
        assert!(err.to_string().contains("no usable observation"));
    }

    #[tokio::test]
    async fn attribute_tail_after_the_value_is_ignored() {
        let mut series = serde_json::Map::new();
        for index in 0..CURRENCIES.len() {
            series.insert(
                format!("0:{index}:0:0"),
                json!({ "observations": { "0": [format!("{index}.25"), 0, null] } }),
            );
        }
        let code_values: Vec<_> = CURRENCIES.iter().map(|code| json!({ "id": code })).collect();
        let body = json!({
            "data": {
                "dataSets": [{ "series": series }],
                "structure": { "dimensions": { "series": [
                    { "id": "FREQ", "values": [{ "id": "B" }] },
                    { "id": "QUOTE_CUR", "values": code_values },
                    { "id": "BASE_CUR", "values": [{ "id": "NOK" }] },
                    { "id": "TENOR", "values": [{ "id": "SP" }] },
                ] } }
            }
        })
        .to_string();
        let source = source_with_body(body);

        let table = source.daily_rates(date()).await.expect("must parse");
        assert_eq!(table.get("AUD"), Some("0.25"));
    }

    #[tokio::test]
    async fn canonical_rates_reduce_the_parsed_table() {
        let values = full_values();
        let value_refs: Vec<&str> = values.iter().map(String::as_str).collect();
        let source = source_with_body(sdmx_body(&full_codes(), &value_refs));

        let canonical = source
            .canonical_rates(date())
            .await
            .expect("must canonicalize");

        // 37 values of the form "N.5"; dots stripped, ascending code order
        // equals index order here because CURRENCIES is sorted.
        let expected: String = (0..CURRENCIES.len()).map(|i| format!("{i}5")).collect();
        assert_eq!(canonical.as_str(), expected);
    }
}
