//! # Validation Module
//!
//! Input validation for customers, transactions, and reward queries.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (axum)                                        │
//! │  └── JSON shape only; every field deserializes as Option<_>            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Fail-fast: the first broken rule is reported                      │
//! │  └── Drafts in, strict types out (CustomerDraft → NewCustomer)         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK (amount > 0) constraints                         │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rule Order
//! Clients match on the first error message, so the order of checks is part
//! of the contract:
//!
//! | Validator                | Checks, in order                              |
//! |--------------------------|-----------------------------------------------|
//! | `validate_customer`      | present → name → transaction list → each item |
//! | `validate_transaction`   | date → amount                                 |
//! | `validate_reward_query`  | customer id → both dates → date order         |
//!
//! ## Usage
//! ```rust
//! use rewards_core::validation::validate_reward_request;
//!
//! let query = validate_reward_request(Some(1), Some("2024-01-01"), Some("2024-12-31")).unwrap();
//! assert_eq!(query.customer_id, 1);
//!
//! let err = validate_reward_request(Some(0), None, None).unwrap_err();
//! assert_eq!(err.to_string(), "Customer ID must be a positive number.");
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::types::{CustomerDraft, NewCustomer, NewTransaction, RewardQuery, TransactionDraft};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Wire format of reward window dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Customer Validators
// =============================================================================

/// Validates a customer and all of its transactions.
///
/// ## Rules
/// 1. The customer must be present
/// 2. The name must contain something other than whitespace
/// 3. The transaction list must be present and non-empty
/// 4. Every transaction must pass [`validate_transaction`], checked in list
///    order; the first bad one is reported
///
/// ## Example
/// ```rust
/// use rewards_core::types::CustomerDraft;
/// use rewards_core::validation::validate_customer;
///
/// let draft = CustomerDraft {
///     customer_name: Some("   ".to_string()),
///     transactions: Some(vec![]),
/// };
/// let err = validate_customer(Some(&draft)).unwrap_err();
/// assert_eq!(err.to_string(), "Customer name cannot be null or blank.");
/// ```
pub fn validate_customer(customer: Option<&CustomerDraft>) -> ValidationResult<NewCustomer> {
    let customer = customer.ok_or(ValidationError::CustomerMissing)?;

    let name = match customer.customer_name.as_deref() {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(ValidationError::NameBlank),
    };

    let drafts = match customer.transactions.as_deref() {
        Some(drafts) if !drafts.is_empty() => drafts,
        _ => return Err(ValidationError::TransactionsEmpty),
    };

    let transactions = drafts
        .iter()
        .map(validate_transaction)
        .collect::<ValidationResult<Vec<_>>>()?;

    Ok(NewCustomer {
        name: name.to_string(),
        transactions,
    })
}

/// Validates a single transaction.
///
/// ## Rules
/// - Date must be present (checked first)
/// - Amount must be present and greater than zero
pub fn validate_transaction(transaction: &TransactionDraft) -> ValidationResult<NewTransaction> {
    let date = transaction.date.ok_or(ValidationError::DateMissing)?;

    let amount = match transaction.amount {
        Some(amount) if amount.is_positive() => amount,
        _ => return Err(ValidationError::AmountNotPositive),
    };

    Ok(NewTransaction { amount, date })
}

// =============================================================================
// Reward Query Validators
// =============================================================================

/// Validates a reward query whose dates are already parsed.
///
/// ## Rules
/// 1. Customer ID must be present and positive
/// 2. Start and end date must both be present
/// 3. Start date must not be after end date (equal is allowed)
pub fn validate_reward_query(
    customer_id: Option<i64>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> ValidationResult<RewardQuery> {
    let customer_id = validate_customer_id(customer_id)?;

    let (start_date, end_date) = match (start_date, end_date) {
        (Some(start), Some(end)) => (start, end),
        _ => return Err(ValidationError::DatesMissing),
    };

    if start_date > end_date {
        return Err(ValidationError::DateRangeInverted);
    }

    Ok(RewardQuery {
        customer_id,
        start_date,
        end_date,
    })
}

/// Validates a reward query with raw `yyyy-MM-dd` date text.
///
/// The customer ID is checked before the dates are parsed, so a bad ID is
/// reported regardless of what the dates contain. Blank date text counts as
/// missing.
pub fn validate_reward_request(
    customer_id: Option<i64>,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> ValidationResult<RewardQuery> {
    validate_customer_id(customer_id)?;

    let start_date = parse_date("startDate", start_date)?;
    let end_date = parse_date("endDate", end_date)?;

    validate_reward_query(customer_id, start_date, end_date)
}

/// Validates a customer ID.
///
/// ## Rules
/// - Must be present
/// - Must be positive (> 0)
pub fn validate_customer_id(customer_id: Option<i64>) -> ValidationResult<i64> {
    match customer_id {
        Some(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::CustomerIdNotPositive),
    }
}

fn parse_date(field: &str, value: Option<&str>) -> ValidationResult<Option<NaiveDate>> {
    let Some(text) = value.map(str::trim).filter(|text| !text.is_empty()) else {
        return Ok(None);
    };

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ValidationError::InvalidDateFormat {
            field: field.to_string(),
            value: text.to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn money(text: &str) -> Money {
        text.parse().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn good_transaction() -> TransactionDraft {
        TransactionDraft {
            amount: Some(money("120.00")),
            date: Some(date(2024, 4, 15)),
        }
    }

    fn good_customer() -> CustomerDraft {
        CustomerDraft {
            customer_name: Some("Sam".to_string()),
            transactions: Some(vec![good_transaction()]),
        }
    }

    #[test]
    fn test_validate_customer_accepts_good_input() {
        let customer = validate_customer(Some(&good_customer())).unwrap();
        assert_eq!(customer.name, "Sam");
        assert_eq!(customer.transactions.len(), 1);
        assert_eq!(customer.transactions[0].amount, money("120"));
    }

    #[test]
    fn test_validate_customer_missing() {
        assert_eq!(
            validate_customer(None).unwrap_err(),
            ValidationError::CustomerMissing
        );
    }

    #[test]
    fn test_validate_customer_name() {
        for name in [None, Some(""), Some("   "), Some("\t\n")] {
            let draft = CustomerDraft {
                customer_name: name.map(str::to_string),
                ..good_customer()
            };
            assert_eq!(
                validate_customer(Some(&draft)).unwrap_err(),
                ValidationError::NameBlank,
                "name {name:?}"
            );
        }
    }

    #[test]
    fn test_validate_customer_transactions_empty() {
        let mut draft = good_customer();
        draft.transactions = Some(vec![]);
        assert_eq!(
            validate_customer(Some(&draft)).unwrap_err(),
            ValidationError::TransactionsEmpty
        );

        draft.transactions = None;
        assert_eq!(
            validate_customer(Some(&draft)).unwrap_err(),
            ValidationError::TransactionsEmpty
        );
    }

    #[test]
    fn test_blank_name_reported_before_empty_list() {
        let draft = CustomerDraft {
            customer_name: Some(" ".to_string()),
            transactions: Some(vec![]),
        };
        let err = validate_customer(Some(&draft)).unwrap_err();
        assert_eq!(err.to_string(), "Customer name cannot be null or blank.");
    }

    #[test]
    fn test_first_bad_transaction_wins() {
        let draft = CustomerDraft {
            customer_name: Some("Sam".to_string()),
            transactions: Some(vec![
                good_transaction(),
                TransactionDraft {
                    amount: Some(Money::zero()),
                    date: Some(date(2024, 1, 1)),
                },
                TransactionDraft {
                    amount: Some(money("1.00")),
                    date: None,
                },
            ]),
        };
        assert_eq!(
            validate_customer(Some(&draft)).unwrap_err(),
            ValidationError::AmountNotPositive
        );
    }

    #[test]
    fn test_validate_transaction() {
        assert!(validate_transaction(&good_transaction()).is_ok());

        let negative = TransactionDraft {
            amount: Some(money("-0.01")),
            ..good_transaction()
        };
        assert_eq!(
            validate_transaction(&negative).unwrap_err(),
            ValidationError::AmountNotPositive
        );

        let no_amount = TransactionDraft {
            amount: None,
            ..good_transaction()
        };
        assert_eq!(
            validate_transaction(&no_amount).unwrap_err(),
            ValidationError::AmountNotPositive
        );
    }

    #[test]
    fn test_sub_cent_amount_is_positive() {
        let tiny = TransactionDraft {
            amount: Some(money("0.004")),
            ..good_transaction()
        };
        let validated = validate_transaction(&tiny).unwrap();
        assert_eq!(validated.amount, money("0.004"));

        let zero = TransactionDraft {
            amount: Some(money("0.000")),
            ..good_transaction()
        };
        assert_eq!(
            validate_transaction(&zero).unwrap_err(),
            ValidationError::AmountNotPositive
        );
    }

    #[test]
    fn test_transaction_date_checked_before_amount() {
        let draft = TransactionDraft {
            amount: Some(Money::zero()),
            date: None,
        };
        assert_eq!(
            validate_transaction(&draft).unwrap_err(),
            ValidationError::DateMissing
        );
    }

    #[test]
    fn test_validate_reward_query() {
        let query =
            validate_reward_query(Some(5), Some(date(2024, 1, 1)), Some(date(2024, 12, 31)))
                .unwrap();
        assert_eq!(query.customer_id, 5);
        assert_eq!(query.start_date, date(2024, 1, 1));

        // single-day window
        let day = Some(date(2024, 3, 3));
        assert!(validate_reward_query(Some(5), day, day).is_ok());
    }

    #[test]
    fn test_reward_query_rule_order() {
        // bad id wins over everything else
        let err = validate_reward_query(Some(0), Some(date(2024, 12, 31)), Some(date(2024, 1, 1)))
            .unwrap_err();
        assert_eq!(err.to_string(), "Customer ID must be a positive number.");
        assert_eq!(
            validate_reward_query(None, None, None).unwrap_err(),
            ValidationError::CustomerIdNotPositive
        );
        assert_eq!(
            validate_reward_query(Some(-3), None, None).unwrap_err(),
            ValidationError::CustomerIdNotPositive
        );

        // missing dates before ordering
        assert_eq!(
            validate_reward_query(Some(1), None, Some(date(2024, 1, 1))).unwrap_err(),
            ValidationError::DatesMissing
        );

        let err = validate_reward_query(Some(1), Some(date(2024, 12, 31)), Some(date(2024, 1, 1)))
            .unwrap_err();
        assert_eq!(err.to_string(), "Start date cannot be after end date.");
    }

    #[test]
    fn test_validate_reward_request_parses_dates() {
        let query =
            validate_reward_request(Some(1), Some("2024-01-01"), Some(" 2024-12-31 ")).unwrap();
        assert_eq!(query.end_date, date(2024, 12, 31));

        let err =
            validate_reward_request(Some(1), Some("2024-13-01"), Some("2024-12-31")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidDateFormat {
                field: "startDate".to_string(),
                value: "2024-13-01".to_string(),
            }
        );

        assert_eq!(
            validate_reward_request(Some(1), Some(""), Some("2024-12-31")).unwrap_err(),
            ValidationError::DatesMissing
        );
    }

    #[test]
    fn test_validate_reward_request_checks_id_before_parsing() {
        let err =
            validate_reward_request(Some(0), Some("garbage"), Some("2024-01-01")).unwrap_err();
        assert_eq!(err, ValidationError::CustomerIdNotPositive);
    }
}
