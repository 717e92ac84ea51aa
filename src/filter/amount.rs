use crate::filter::TransactionFilter;
use crate::types::Transaction;
use rust_decimal::Decimal;

/// Keeps transactions whose amount equals the filter amount
///
/// Comparison is numeric, so `50` matches `50.00`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountFilter {
    amount: Decimal,
}

impl AmountFilter {
    pub fn new(amount: Decimal) -> Self {
        AmountFilter { amount }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

impl TransactionFilter for AmountFilter {
    fn matches(&self, transaction: &Transaction) -> bool {
        transaction.amount() == self.amount
    }
}
