//! Deposit strategy: credit the destination account.

use std::sync::Arc;

use async_trait::async_trait;

use crate::clients::account::AccountClient;
use crate::error::AppError;
use crate::models::transaction::{NewTransaction, OperationRequest, Transaction, TransactionKind};
use crate::services::strategies::{TransactionStrategy, messages};
use crate::store::TransactionStore;

/// Credits the destination account once and records the outcome.
pub struct DepositStrategy {
    client: Arc<dyn AccountClient>,
    store: Arc<dyn TransactionStore>,
}

impl DepositStrategy {
    pub fn new(client: Arc<dyn AccountClient>, store: Arc<dyn TransactionStore>) -> Self {
        Self { client, store }
    }
}

#[async_trait]
impl TransactionStrategy for DepositStrategy {
    fn kind(&self) -> TransactionKind {
        TransactionKind::Deposit
    }

    async fn execute(&self, request: &OperationRequest) -> Result<Transaction, AppError> {
        let OperationRequest::Deposit(req) = request else {
            return Err(AppError::UnsupportedOperation(request.kind()));
        };

        let record = match self.client.credit(&req.account_id, &req.amount).await {
            Ok(()) => NewTransaction::success(
                TransactionKind::Deposit,
                None,
                Some(req.account_id.clone()),
                req.amount.clone(),
                messages::DEPOSIT_SUCCESS,
            ),
            Err(err) => {
                tracing::error!(account_id = %req.account_id, error = %err, "deposit failed");
                NewTransaction::failure(
                    TransactionKind::Deposit,
                    None,
                    Some(req.account_id.clone()),
                    req.amount.clone(),
                    err.to_string(),
                )
            }
        };

        self.store.save(record).await
    }
}
