//! Withdraw strategy: debit the source account.

use std::sync::Arc;

use async_trait::async_trait;

use crate::clients::account::AccountClient;
use crate::error::AppError;
use crate::models::transaction::{NewTransaction, OperationRequest, Transaction, TransactionKind};
use crate::services::strategies::{TransactionStrategy, messages};
use crate::store::TransactionStore;

/// Debits the source account once and records the outcome.
pub struct WithdrawStrategy {
    client: Arc<dyn AccountClient>,
    store: Arc<dyn TransactionStore>,
}

impl WithdrawStrategy {
    pub fn new(client: Arc<dyn AccountClient>, store: Arc<dyn TransactionStore>) -> Self {
        Self { client, store }
    }
}

#[async_trait]
impl TransactionStrategy for WithdrawStrategy {
    fn kind(&self) -> TransactionKind {
        TransactionKind::Withdrawal
    }

    async fn execute(&self, request: &OperationRequest) -> Result<Transaction, AppError> {
        let OperationRequest::Withdraw(req) = request else {
            return Err(AppError::UnsupportedOperation(request.kind()));
        };

        let record = match self.client.debit(&req.account_id, &req.amount).await {
            Ok(()) => NewTransaction::success(
                TransactionKind::Withdrawal,
                Some(req.account_id.clone()),
                None,
                req.amount.clone(),
                messages::WITHDRAW_SUCCESS,
            ),
            Err(err) => {
                tracing::error!(account_id = %req.account_id, error = %err, "withdrawal failed");
                NewTransaction::failure(
                    TransactionKind::Withdrawal,
                    Some(req.account_id.clone()),
                    None,
                    req.amount.clone(),
                    err.to_string(),
                )
            }
        };

        self.store.save(record).await
    }
}
