//! Transfer strategy: debit the source, then credit the destination.
//!
//! This is the only multi-step operation. The protocol:
//!
//! 1. Same-account guard — fail fast, zero remote calls.
//! 2. Fetch both account snapshots concurrently; either fetch failing
//!    fails the whole operation before any mutating call.
//! 3. Advisory balance pre-check against the source snapshot. The remote
//!    service remains the source of truth and may still reject the debit;
//!    this check only saves a round-trip and yields a clearer message.
//! 4. Debit, then credit, strictly in that order.
//! 5. If the credit fails after a successful debit, attempt one
//!    best-effort compensating credit back to the source. The operation
//!    is recorded as failed either way; a failed compensation is only
//!    logged and leaves the ledger to out-of-band reconciliation.
//!
//! There is no two-phase commit here and no retry of any remote call.

use std::sync::Arc;

use async_trait::async_trait;

use crate::clients::account::AccountClient;
use crate::error::AppError;
use crate::models::transaction::{
    NewTransaction, OperationRequest, Transaction, TransactionKind, TransferRequest,
};
use crate::services::strategies::{TransactionStrategy, messages};
use crate::store::TransactionStore;

pub struct TransferStrategy {
    client: Arc<dyn AccountClient>,
    store: Arc<dyn TransactionStore>,
}

impl TransferStrategy {
    pub fn new(client: Arc<dyn AccountClient>, store: Arc<dyn TransactionStore>) -> Self {
        Self { client, store }
    }

    async fn fail(
        &self,
        req: &TransferRequest,
        message: impl Into<String>,
    ) -> Result<Transaction, AppError> {
        self.store
            .save(NewTransaction::failure(
                TransactionKind::Transfer,
                Some(req.from_account_id.clone()),
                Some(req.to_account_id.clone()),
                req.amount.clone(),
                message,
            ))
            .await
    }

    async fn succeed(&self, req: &TransferRequest) -> Result<Transaction, AppError> {
        self.store
            .save(NewTransaction::success(
                TransactionKind::Transfer,
                Some(req.from_account_id.clone()),
                Some(req.to_account_id.clone()),
                req.amount.clone(),
                messages::TRANSFER_SUCCESS,
            ))
            .await
    }
}

#[async_trait]
impl TransactionStrategy for TransferStrategy {
    fn kind(&self) -> TransactionKind {
        TransactionKind::Transfer
    }

    async fn execute(&self, request: &OperationRequest) -> Result<Transaction, AppError> {
        let OperationRequest::Transfer(req) = request else {
            return Err(AppError::UnsupportedOperation(request.kind()));
        };

        if req.from_account_id == req.to_account_id {
            return self.fail(req, messages::SAME_ACCOUNT_TRANSFER).await;
        }

        // Join, not a race: both fetches complete before we proceed, and
        // no mutating call is made unless both succeeded.
        let (source, destination) = tokio::join!(
            self.client.fetch_account(&req.from_account_id),
            self.client.fetch_account(&req.to_account_id),
        );

        let source = match (source, destination) {
            (Ok(snapshot), Ok(_)) => snapshot,
            (Err(err), _) | (_, Err(err)) => {
                tracing::error!(
                    from = %req.from_account_id,
                    to = %req.to_account_id,
                    error = %err,
                    "transfer pre-check failed"
                );
                return self.fail(req, err.to_string()).await;
            }
        };

        if source.balance < req.amount {
            return self.fail(req, messages::INSUFFICIENT_BALANCE).await;
        }

        if let Err(err) = self
            .client
            .debit(&req.from_account_id, &req.amount)
            .await
        {
            tracing::error!(
                from = %req.from_account_id,
                error = %err,
                "transfer debit failed"
            );
            return self.fail(req, err.to_string()).await;
        }

        match self.client.credit(&req.to_account_id, &req.amount).await {
            Ok(()) => self.succeed(req).await,
            Err(err) => {
                tracing::error!(
                    from = %req.from_account_id,
                    to = %req.to_account_id,
                    error = %err,
                    "transfer credit failed after debit, compensating source"
                );

                // Best-effort: one attempt, no retry. The original failure
                // is what the record carries either way.
                match self.client.credit(&req.from_account_id, &req.amount).await {
                    Ok(()) => tracing::warn!(
                        from = %req.from_account_id,
                        "compensating credit applied"
                    ),
                    Err(comp_err) => tracing::error!(
                        from = %req.from_account_id,
                        error = %comp_err,
                        "compensating credit failed, ledger needs reconciliation"
                    ),
                }

                self.fail(req, err.to_string()).await
            }
        }
    }
}
