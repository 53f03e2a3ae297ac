//! Transaction record model and API request/response types.
//!
//! This module defines:
//! - `Transaction`: the immutable, persisted outcome of one operation
//! - `NewTransaction`: an unsaved record plus its factory constructors
//! - Request types for deposit, withdraw, and transfer operations
//! - `TransactionResponse`: response body returned to clients

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of monetary movement a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "transaction_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Transfer,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Transfer => "transfer",
        };
        f.write_str(name)
    }
}

/// Final outcome of an operation. Records are insert-only: a record is
/// created with its outcome already decided and is never updated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "transaction_outcome", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransactionOutcome {
    Success,
    Failed,
}

/// A persisted transaction record.
///
/// # Database Table
///
/// Maps to the `transactions` table. Amounts are stored as `NUMERIC`
/// (never floats) and are strictly positive by CHECK constraint.
/// `from_account_id` is NULL for deposits, `to_account_id` is NULL for
/// withdrawals, and both are set for transfers.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the store on insert
    pub id: Uuid,

    /// Type of operation (deposit, withdrawal, transfer)
    pub kind: TransactionKind,

    /// Whether the operation succeeded or failed
    pub outcome: TransactionOutcome,

    /// Source account (withdrawal and transfer)
    pub from_account_id: Option<String>,

    /// Destination account (deposit and transfer)
    pub to_account_id: Option<String>,

    /// Requested amount; recorded even when the operation failed
    pub amount: BigDecimal,

    /// When the outcome was determined
    pub created_at: DateTime<Utc>,

    /// Success narration or classified failure cause; never empty
    pub message: String,
}

/// A transaction record that has not been persisted yet.
///
/// Built by the strategies via [`NewTransaction::success`] and
/// [`NewTransaction::failure`]; the store assigns the id on save.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub outcome: TransactionOutcome,
    pub from_account_id: Option<String>,
    pub to_account_id: Option<String>,
    pub amount: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub message: String,
}

impl NewTransaction {
    /// Build a successful record. `created_at` is stamped here, at the
    /// moment the outcome is determined.
    pub fn success(
        kind: TransactionKind,
        from_account_id: Option<String>,
        to_account_id: Option<String>,
        amount: BigDecimal,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            outcome: TransactionOutcome::Success,
            from_account_id,
            to_account_id,
            amount,
            created_at: Utc::now(),
            message: message.into(),
        }
    }

    /// Build a failed record carrying the failure cause as its message.
    pub fn failure(
        kind: TransactionKind,
        from_account_id: Option<String>,
        to_account_id: Option<String>,
        amount: BigDecimal,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            outcome: TransactionOutcome::Failed,
            from_account_id,
            to_account_id,
            amount,
            created_at: Utc::now(),
            message: message.into(),
        }
    }
}

/// Request to deposit money into an account.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_id": "A1",
///   "amount": 100.00
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct DepositRequest {
    /// Account to credit
    pub account_id: String,

    /// Amount to add (must be strictly positive)
    pub amount: BigDecimal,
}

/// Request to withdraw money from an account.
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawRequest {
    /// Account to debit
    pub account_id: String,

    /// Amount to remove (must be strictly positive)
    pub amount: BigDecimal,
}

/// Request to transfer money between two accounts.
///
/// # JSON Example
///
/// ```json
/// {
///   "from_account_id": "A1",
///   "to_account_id": "A2",
///   "amount": 500.00
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TransferRequest {
    /// Account to transfer from (will decrease)
    pub from_account_id: String,

    /// Account to transfer to (will increase)
    pub to_account_id: String,

    /// Amount to move (must be strictly positive)
    pub amount: BigDecimal,
}

/// An inbound operation request, tagged by kind so the dispatcher can
/// route it to the matching strategy.
#[derive(Debug, Clone)]
pub enum OperationRequest {
    Deposit(DepositRequest),
    Withdraw(WithdrawRequest),
    Transfer(TransferRequest),
}

impl OperationRequest {
    /// The transaction kind this request maps to.
    pub fn kind(&self) -> TransactionKind {
        match self {
            OperationRequest::Deposit(_) => TransactionKind::Deposit,
            OperationRequest::Withdraw(_) => TransactionKind::Withdrawal,
            OperationRequest::Transfer(_) => TransactionKind::Transfer,
        }
    }
}

/// Response returned for transaction operations and history lookups.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub outcome: TransactionOutcome,
    pub from_account_id: Option<String>,
    pub to_account_id: Option<String>,
    pub amount: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub message: String,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: transaction.id,
            kind: transaction.kind,
            outcome: transaction.outcome,
            from_account_id: transaction.from_account_id,
            to_account_id: transaction.to_account_id,
            amount: transaction.amount,
            created_at: transaction.created_at,
            message: transaction.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_factory_sets_outcome_and_amount() {
        let record = NewTransaction::success(
            TransactionKind::Deposit,
            None,
            Some("A1".to_string()),
            BigDecimal::from(100),
            "deposit applied",
        );

        assert_eq!(record.outcome, TransactionOutcome::Success);
        assert_eq!(record.kind, TransactionKind::Deposit);
        assert_eq!(record.from_account_id, None);
        assert_eq!(record.to_account_id.as_deref(), Some("A1"));
        assert_eq!(record.amount, BigDecimal::from(100));
        assert!(!record.message.is_empty());
    }

    #[test]
    fn failure_factory_keeps_requested_amount() {
        let record = NewTransaction::failure(
            TransactionKind::Transfer,
            Some("A1".to_string()),
            Some("A2".to_string()),
            BigDecimal::from(500),
            "insufficient balance in the source account",
        );

        assert_eq!(record.outcome, TransactionOutcome::Failed);
        assert_eq!(record.amount, BigDecimal::from(500));
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Withdrawal).unwrap();
        assert_eq!(json, "\"withdrawal\"");
    }
}
