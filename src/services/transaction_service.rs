//! Transaction service: strategy dispatch and history queries.
//!
//! The registry maps each operation kind to its strategy. It is built
//! once at startup and read-only afterwards; a lookup miss means the
//! service was wired incorrectly and surfaces as a hard error, never as
//! a failed record.

use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::account::AccountClient;
use crate::error::AppError;
use crate::models::transaction::{
    DepositRequest, OperationRequest, Transaction, TransactionKind, TransferRequest,
    WithdrawRequest,
};
use crate::services::strategies::{
    DepositStrategy, TransactionStrategy, TransferStrategy, WithdrawStrategy,
};
use crate::store::TransactionStore;

/// Entry point of the orchestration core.
pub struct TransactionService {
    strategies: HashMap<TransactionKind, Arc<dyn TransactionStrategy>>,
    store: Arc<dyn TransactionStore>,
}

impl TransactionService {
    /// Build the service with all three strategies registered.
    pub fn new(client: Arc<dyn AccountClient>, store: Arc<dyn TransactionStore>) -> Self {
        let all: [Arc<dyn TransactionStrategy>; 3] = [
            Arc::new(DepositStrategy::new(client.clone(), store.clone())),
            Arc::new(WithdrawStrategy::new(client.clone(), store.clone())),
            Arc::new(TransferStrategy::new(client, store.clone())),
        ];

        let mut strategies = HashMap::new();
        for strategy in all {
            strategies.insert(strategy.kind(), strategy);
        }

        Self { strategies, store }
    }

    /// Build the service with an explicit registry. Lets tests exercise
    /// the unsupported-kind path.
    #[cfg(test)]
    pub(crate) fn with_strategies(
        strategies: HashMap<TransactionKind, Arc<dyn TransactionStrategy>>,
        store: Arc<dyn TransactionStore>,
    ) -> Self {
        Self { strategies, store }
    }

    fn strategy_for(&self, kind: TransactionKind) -> Result<&dyn TransactionStrategy, AppError> {
        self.strategies
            .get(&kind)
            .map(|s| s.as_ref())
            .ok_or(AppError::UnsupportedOperation(kind))
    }

    async fn execute(&self, request: OperationRequest) -> Result<Transaction, AppError> {
        self.strategy_for(request.kind())?.execute(&request).await
    }

    pub async fn deposit(&self, request: DepositRequest) -> Result<Transaction, AppError> {
        self.execute(OperationRequest::Deposit(request)).await
    }

    pub async fn withdraw(&self, request: WithdrawRequest) -> Result<Transaction, AppError> {
        self.execute(OperationRequest::Withdraw(request)).await
    }

    pub async fn transfer(&self, request: TransferRequest) -> Result<Transaction, AppError> {
        self.execute(OperationRequest::Transfer(request)).await
    }

    /// Records where the account appears as source or destination.
    pub async fn history(&self, account_id: &str) -> Result<Vec<Transaction>, AppError> {
        self.store.find_by_account(account_id).await
    }
}
