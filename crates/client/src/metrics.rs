//! Growth dashboard data

use procurex_core::{ConsoleError, ConsoleResult};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::http::ApiClient;

pub const YEAR_OPTIONS_PATH: &str = "/api/year-options";
pub const MONTHLY_METRICS_PATH: &str = "/api/monthly-metrics";

/// One month of aggregated revenue and spend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlyEntry {
    #[serde(deserialize_with = "text_or_number")]
    pub month: String,
    #[serde(default, deserialize_with = "amount")]
    pub revenue_amount: f64,
    #[serde(default, deserialize_with = "amount")]
    pub spent_amount: f64,
}

/// Read-only metrics endpoints
#[derive(Debug, Clone)]
pub struct MetricsClient {
    api: ApiClient,
}

impl MetricsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Years that have metrics, in server order
    pub async fn year_options(&self) -> ConsoleResult<Vec<i32>> {
        let value = self.api.get(YEAR_OPTIONS_PATH).await?;
        let Value::Array(items) = value else {
            return Err(ConsoleError::Decode("expected an array of years".to_string()));
        };
        items
            .iter()
            .map(|item| {
                item.as_i64()
                    .and_then(|y| i32::try_from(y).ok())
                    .or_else(|| item.as_str().and_then(|s| s.trim().parse().ok()))
                    .ok_or_else(|| ConsoleError::Decode(format!("'{item}' is not a year")))
            })
            .collect()
    }

    /// Monthly totals for one year, in server order
    pub async fn monthly_metrics(&self, year: i32) -> ConsoleResult<Vec<MonthlyEntry>> {
        let path = format!("{MONTHLY_METRICS_PATH}?year={year}");
        let value = self.api.get(&path).await?;
        Ok(serde_json::from_value(value)?)
    }
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("invalid month {other}"))),
    }
}

/// Postgres numerics arrive as strings; nulls count as zero
fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0.0),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("amount out of range")),
        Value::String(s) if s.trim().is_empty() => Ok(0.0),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount '{s}'"))),
        other => Err(serde::de::Error::custom(format!("invalid amount {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_entry_accepts_strings_and_numbers() {
        let entries: Vec<MonthlyEntry> = serde_json::from_value(json!([
            {"month": "January", "revenue_amount": "1200.50", "spent_amount": 300},
            {"month": 2, "revenue_amount": null},
        ]))
        .unwrap();

        assert_eq!(
            entries,
            vec![
                MonthlyEntry {
                    month: "January".into(),
                    revenue_amount: 1200.5,
                    spent_amount: 300.0
                },
                MonthlyEntry {
                    month: "2".into(),
                    revenue_amount: 0.0,
                    spent_amount: 0.0
                },
            ]
        );
    }

    #[test]
    fn test_entry_rejects_garbage_amount() {
        let parsed: Result<MonthlyEntry, _> =
            serde_json::from_value(json!({"month": "May", "revenue_amount": "lots"}));
        assert!(parsed.is_err());
    }

    #[tokio::test]
    async fn test_year_options_and_metrics() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", YEAR_OPTIONS_PATH)
            .with_status(200)
            .with_body(r#"[2024, "2023"]"#)
            .create_async()
            .await;
        server
            .mock("GET", mockito::Matcher::Regex("^/api/monthly-metrics".into()))
            .match_query(mockito::Matcher::UrlEncoded("year".into(), "2024".into()))
            .with_status(200)
            .with_body(r#"[{"month":"March","revenue_amount":10,"spent_amount":4}]"#)
            .create_async()
            .await;

        let metrics = MetricsClient::new(ApiClient::new(&server.url()).unwrap());
        assert_eq!(metrics.year_options().await.unwrap(), vec![2024, 2023]);

        let rows = metrics.monthly_metrics(2024).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].month, "March");
    }
}
