use serde::{Deserialize, Serialize};
use std::fmt;

/// A single income or expense record as served by the backend.
///
/// The client keeps a read-through cache of these; the cache is discarded
/// and replaced wholesale after every mutation, never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Server-assigned, unique.
    pub id: i64,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    /// "YYYY-MM-DD"
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub date: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

impl Totals {
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expense: f64,
}

/// Server-computed aggregation for a selected month. Read-only to the
/// client and recomputed per month; the `daily` and `monthly` sequences
/// keep the server's ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsPayload {
    pub totals: Totals,
    pub categories: Vec<CategoryTotal>,
    pub daily: Vec<DailyPoint>,
    pub monthly: Vec<MonthlyPoint>,
}

/// JSON body the backend sends with non-2xx responses. Either field may
/// be present; `error` wins when both are.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self, fallback: &str) -> String {
        self.error
            .or(self.message)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Subsequence of `transactions` whose date has `month` ("YYYY-MM") as a
/// prefix, in the original order.
pub fn filter_by_month(transactions: &[Transaction], month: &str) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.date.starts_with(month))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: i64, date: &str) -> Transaction {
        Transaction {
            id,
            description: format!("tx {id}"),
            amount: 10.0,
            kind: TransactionType::Expense,
            category: "Food".to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn filter_by_month_keeps_only_matching_prefix() {
        let transactions = vec![
            tx(1, "2024-03-05"),
            tx(2, "2024-04-01"),
            tx(3, "2024-03-31"),
        ];

        let filtered = filter_by_month(&transactions, "2024-03");
        let ids: Vec<i64> = filtered.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn filter_by_month_preserves_fetch_order() {
        let transactions = vec![
            tx(9, "2024-03-20"),
            tx(2, "2024-03-01"),
            tx(5, "2024-03-10"),
        ];

        let ids: Vec<i64> = filter_by_month(&transactions, "2024-03")
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![9, 2, 5]);
    }

    #[test]
    fn filter_by_month_no_matches_is_empty() {
        let transactions = vec![tx(1, "2024-03-05")];
        assert!(filter_by_month(&transactions, "2023-12").is_empty());
    }

    #[test]
    fn filter_does_not_confuse_month_with_day() {
        // "2024-1" would match both January and the 10th-12th months if
        // matching were done on anything other than the string prefix.
        let transactions = vec![tx(1, "2024-12-05"), tx(2, "2024-01-05")];
        let ids: Vec<i64> = filter_by_month(&transactions, "2024-12")
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn balance_is_income_minus_expense() {
        let totals = Totals {
            income: 1500.50,
            expense: 320.25,
        };
        assert!((totals.balance() - 1180.25).abs() < 1e-9);
    }

    #[test]
    fn transaction_type_uses_lowercase_wire_names() {
        let tx: Transaction = serde_json::from_str(
            r#"{"id":7,"description":"Coffee","amount":4.5,"type":"expense","category":"Food","date":"2024-03-05"}"#,
        )
        .unwrap();
        assert_eq!(tx.kind, TransactionType::Expense);

        let body = NewTransaction {
            description: "Salary".to_string(),
            amount: 1000.0,
            kind: TransactionType::Income,
            category: "Income".to_string(),
            date: "2024-03-01".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""type":"income""#));
    }

    #[test]
    fn statistics_payload_deserializes_server_shape() {
        let payload: StatisticsPayload = serde_json::from_str(
            r#"{
                "totals": {"income": 100.0, "expense": 40.0},
                "categories": [{"name": "Food", "value": 25.0}],
                "daily": [{"date": "2024-03-05", "amount": 25.0}],
                "monthly": [{"month": "2024-03", "income": 100.0, "expense": 40.0}]
            }"#,
        )
        .unwrap();
        assert_eq!(payload.categories.len(), 1);
        assert!((payload.totals.balance() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn error_body_prefers_error_over_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":"Invalid amount","message":"ignored"}"#).unwrap();
        assert_eq!(body.into_message("Server error"), "Invalid amount");

        let body: ErrorBody = serde_json::from_str(r#"{"message":"boom"}"#).unwrap();
        assert_eq!(body.into_message("Server error"), "boom");

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.into_message("Server error"), "Server error");
    }
}
