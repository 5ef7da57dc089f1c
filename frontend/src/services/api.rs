use gloo::net::http::Request;
use shared::{ErrorBody, NewTransaction, StatisticsPayload, Transaction};

/// API client for the tracker backend.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client talking to the page's own origin.
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch the full transaction list.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, String> {
        let url = format!("{}/api/transactions", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if !response.ok() {
                    return Err(format!("Server error {}", response.status()));
                }
                match response.json::<Vec<Transaction>>().await {
                    Ok(data) => Ok(data),
                    Err(e) => Err(format!("Failed to parse transactions: {}", e)),
                }
            }
            Err(e) => Err(format!("Failed to fetch transactions: {}", e)),
        }
    }

    /// Create a transaction. On a non-2xx response the server's error
    /// body becomes the error message.
    pub async fn create_transaction(&self, request: NewTransaction) -> Result<(), String> {
        let url = format!("{}/api/transactions", self.base_url);

        match Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let body = response.json::<ErrorBody>().await.unwrap_or_default();
                    Err(body.into_message("Server error"))
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Delete a transaction. Any HTTP response counts as success; only a
    /// transport failure is reported. A delete the server rejected still
    /// looks successful here, and the caller's re-fetch is what settles
    /// the visible state.
    pub async fn delete_transaction(&self, id: i64) -> Result<(), String> {
        let url = format!("{}/api/transactions/{}", self.base_url, id);

        match Request::delete(&url).send().await {
            Ok(_) => Ok(()),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Fetch the statistics aggregation for a month ("YYYY-MM").
    pub async fn get_statistics(&self, month: &str) -> Result<StatisticsPayload, String> {
        let url = format!("{}/api/statistics/{}", self.base_url, month);

        match Request::get(&url).send().await {
            Ok(response) => {
                if !response.ok() {
                    return Err(format!("Server error {}", response.status()));
                }
                match response.json::<StatisticsPayload>().await {
                    Ok(data) => Ok(data),
                    Err(e) => Err(format!("Failed to parse statistics: {}", e)),
                }
            }
            Err(e) => Err(format!("Failed to fetch statistics: {}", e)),
        }
    }

    /// Target of the CSV download: scoped to a month when one is
    /// selected, everything otherwise.
    pub fn csv_export_url(&self, month: Option<&str>) -> String {
        match month {
            Some(month) if !month.is_empty() => {
                format!("{}/download/csv?month={}", self.base_url, month)
            }
            _ => format!("{}/download/csv", self.base_url),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_export_url_with_month() {
        let client = ApiClient::new();
        assert_eq!(
            client.csv_export_url(Some("2024-03")),
            "/download/csv?month=2024-03"
        );
    }

    #[test]
    fn csv_export_url_without_month_means_all() {
        let client = ApiClient::new();
        assert_eq!(client.csv_export_url(None), "/download/csv");
        assert_eq!(client.csv_export_url(Some("")), "/download/csv");
    }

    #[test]
    fn csv_export_url_respects_base_url() {
        let client = ApiClient::with_base_url("http://localhost:5000".to_string());
        assert_eq!(
            client.csv_export_url(Some("2024-03")),
            "http://localhost:5000/download/csv?month=2024-03"
        );
    }
}
