use crate::filter::TransactionFilter;
use crate::types::Transaction;

/// Keeps transactions whose category equals the filter category
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    category: String,
}

impl CategoryFilter {
    pub fn new(category: impl Into<String>) -> Self {
        CategoryFilter {
            category: category.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl TransactionFilter for CategoryFilter {
    fn matches(&self, transaction: &Transaction) -> bool {
        transaction.category() == self.category
    }
}
