//! Per-operation execution strategies.
//!
//! Each strategy owns the full protocol for one operation kind: remote
//! calls against the account service, the success/failure decision, and
//! persistence of exactly one transaction record per invocation. A
//! strategy never lets a remote failure escape as an error; once the
//! remote-call stage is reached, it always resolves to a record.

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::transaction::{OperationRequest, Transaction, TransactionKind};

pub mod deposit;
pub mod transfer;
pub mod withdraw;

pub use deposit::DepositStrategy;
pub use transfer::TransferStrategy;
pub use withdraw::WithdrawStrategy;

/// Fixed record messages shared by the strategies.
pub mod messages {
    pub const DEPOSIT_SUCCESS: &str = "deposit applied";
    pub const WITHDRAW_SUCCESS: &str = "withdrawal applied";
    pub const TRANSFER_SUCCESS: &str = "transfer applied";
    pub const SAME_ACCOUNT_TRANSFER: &str = "cannot transfer to the same account";
    pub const INSUFFICIENT_BALANCE: &str = "insufficient balance in the source account";
}

/// Execution protocol for one operation kind.
#[async_trait]
pub trait TransactionStrategy: Send + Sync {
    /// The operation kind this strategy handles.
    fn kind(&self) -> TransactionKind;

    /// Run the operation and persist its record.
    ///
    /// Returns an error only for conditions outside the operation itself
    /// (a store failure, or a request routed to the wrong strategy);
    /// remote account-service failures become failed records.
    async fn execute(&self, request: &OperationRequest) -> Result<Transaction, AppError>;
}
