//! Shared test doubles for the orchestration core.
//!
//! `MockAccountClient` scripts per-account failures and records every
//! call, so tests can assert which remote operations ran and in what
//! order. `InMemoryTransactionStore` counts saves to verify the
//! one-record-per-invocation invariant.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::clients::account::{AccountClient, AccountClientError, AccountSnapshot};
use crate::error::AppError;
use crate::models::transaction::{NewTransaction, Transaction};
use crate::store::TransactionStore;

/// Scriptable [`AccountClient`] that records every call.
#[derive(Default)]
pub struct MockAccountClient {
    accounts: HashMap<String, BigDecimal>,
    fetch_failures: HashMap<String, AccountClientError>,
    credit_failures: HashMap<String, AccountClientError>,
    debit_failures: HashMap<String, AccountClientError>,
    credit_log: Mutex<Vec<(String, BigDecimal)>>,
    debit_log: Mutex<Vec<(String, BigDecimal)>>,
    fetch_log: Mutex<Vec<String>>,
}

impl MockAccountClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `fetch_account` return a snapshot with this balance.
    pub fn with_account(mut self, account_id: &str, balance: BigDecimal) -> Self {
        self.accounts.insert(account_id.to_string(), balance);
        self
    }

    pub fn fail_fetch(mut self, account_id: &str, err: AccountClientError) -> Self {
        self.fetch_failures.insert(account_id.to_string(), err);
        self
    }

    pub fn fail_credit(mut self, account_id: &str, err: AccountClientError) -> Self {
        self.credit_failures.insert(account_id.to_string(), err);
        self
    }

    pub fn fail_debit(mut self, account_id: &str, err: AccountClientError) -> Self {
        self.debit_failures.insert(account_id.to_string(), err);
        self
    }

    /// Credit calls in invocation order.
    pub fn credit_calls(&self) -> Vec<(String, BigDecimal)> {
        self.credit_log.lock().unwrap().clone()
    }

    /// Debit calls in invocation order.
    pub fn debit_calls(&self) -> Vec<(String, BigDecimal)> {
        self.debit_log.lock().unwrap().clone()
    }

    /// Snapshot fetches in invocation order.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_log.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountClient for MockAccountClient {
    async fn credit(
        &self,
        account_id: &str,
        amount: &BigDecimal,
    ) -> Result<(), AccountClientError> {
        self.credit_log
            .lock()
            .unwrap()
            .push((account_id.to_string(), amount.clone()));
        match self.credit_failures.get(account_id) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn debit(&self, account_id: &str, amount: &BigDecimal) -> Result<(), AccountClientError> {
        self.debit_log
            .lock()
            .unwrap()
            .push((account_id.to_string(), amount.clone()));
        match self.debit_failures.get(account_id) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn fetch_account(
        &self,
        account_id: &str,
    ) -> Result<AccountSnapshot, AccountClientError> {
        self.fetch_log.lock().unwrap().push(account_id.to_string());
        if let Some(err) = self.fetch_failures.get(account_id) {
            return Err(err.clone());
        }
        match self.accounts.get(account_id) {
            Some(balance) => Ok(AccountSnapshot {
                id: account_id.to_string(),
                balance: balance.clone(),
            }),
            None => Err(AccountClientError::Rejected {
                status: 404,
                body: format!("account {account_id} not found"),
            }),
        }
    }
}

/// In-memory [`TransactionStore`] that assigns ids and keeps every saved
/// record for inspection.
#[derive(Default)]
pub struct InMemoryTransactionStore {
    records: Mutex<Vec<Transaction>>,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn saved(&self) -> Vec<Transaction> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn save(&self, record: NewTransaction) -> Result<Transaction, AppError> {
        let transaction = Transaction {
            id: Uuid::new_v4(),
            kind: record.kind,
            outcome: record.outcome,
            from_account_id: record.from_account_id,
            to_account_id: record.to_account_id,
            amount: record.amount,
            created_at: record.created_at,
            message: record.message,
        };
        self.records.lock().unwrap().push(transaction.clone());
        Ok(transaction)
    }

    async fn find_by_account(&self, account_id: &str) -> Result<Vec<Transaction>, AppError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|t| {
                t.from_account_id.as_deref() == Some(account_id)
                    || t.to_account_id.as_deref() == Some(account_id)
            })
            .cloned()
            .collect())
    }
}
