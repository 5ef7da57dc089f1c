use shared::{Transaction, TransactionType};

pub const CURRENCY: &str = "₹";

/// "₹123.40": two decimals, currency prefix.
pub fn currency(value: f64) -> String {
    format!("{}{:.2}", CURRENCY, value)
}

/// Signed list amount: income shows as "+₹…", expense as "-₹…".
pub fn signed_amount(transaction: &Transaction) -> String {
    match transaction.kind {
        TransactionType::Income => format!("+{}", currency(transaction.amount)),
        TransactionType::Expense => format!("-{}", currency(transaction.amount)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(kind: TransactionType, amount: f64) -> Transaction {
        Transaction {
            id: 1,
            description: "Coffee".to_string(),
            amount,
            kind,
            category: "Food".to_string(),
            date: "2024-03-05".to_string(),
        }
    }

    #[test]
    fn currency_rounds_to_two_decimals() {
        assert_eq!(currency(4.5), "₹4.50");
        assert_eq!(currency(1180.255), "₹1180.26");
        assert_eq!(currency(0.0), "₹0.00");
    }

    #[test]
    fn signed_amount_follows_transaction_type() {
        assert_eq!(signed_amount(&tx(TransactionType::Income, 100.0)), "+₹100.00");
        assert_eq!(signed_amount(&tx(TransactionType::Expense, 4.5)), "-₹4.50");
    }
}
