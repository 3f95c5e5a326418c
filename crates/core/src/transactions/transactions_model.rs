//! Transaction domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A monetary record owned by a user, optionally tagged to a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i32,
    pub amount: f64,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub user_id: i32,
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTransaction {
    pub amount: f64,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub user_id: i32,
    pub category_id: Option<i32>,
}

/// Optional filters for listing transactions. Set filters are combined with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    pub user_id: Option<i32>,
    pub category_id: Option<i32>,
}

/// In-memory counterpart of the repository query, used by the service mocks.
#[cfg(test)]
impl TransactionFilter {
    /// Returns true when `transaction` satisfies every set filter.
    ///
    /// A category filter never matches an uncategorized transaction.
    pub(crate) fn matches(&self, transaction: &Transaction) -> bool {
        self.user_id.map_or(true, |uid| transaction.user_id == uid)
            && self
                .category_id
                .map_or(true, |cid| transaction.category_id == Some(cid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(user_id: i32, category_id: Option<i32>) -> Transaction {
        Transaction {
            id: 1,
            amount: 42.0,
            description: Some("Coffee beans".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            created_at: NaiveDate::from_ymd_opt(2024, 2, 10)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            user_id,
            category_id,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = TransactionFilter::default();
        assert!(filter.matches(&transaction(1, None)));
        assert!(filter.matches(&transaction(2, Some(3))));
    }

    #[test]
    fn test_category_filter_skips_uncategorized() {
        let filter = TransactionFilter {
            user_id: None,
            category_id: Some(3),
        };
        assert!(filter.matches(&transaction(1, Some(3))));
        assert!(!filter.matches(&transaction(1, Some(4))));
        assert!(!filter.matches(&transaction(1, None)));
    }

    #[test]
    fn test_filters_combine() {
        let filter = TransactionFilter {
            user_id: Some(1),
            category_id: Some(3),
        };
        assert!(filter.matches(&transaction(1, Some(3))));
        assert!(!filter.matches(&transaction(2, Some(3))));
    }

    #[test]
    fn test_uncategorized_serializes_null() {
        let json = serde_json::to_value(transaction(1, None)).unwrap();
        assert!(json["category_id"].is_null());
        assert_eq!(json["date"], "2024-02-10");
    }
}
