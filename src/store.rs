//! Transaction store: persistence port and Postgres implementation.
//!
//! Records are insert-only. The store assigns ids; nothing here updates
//! or deletes rows.

use async_trait::async_trait;

use crate::db::DbPool;
use crate::error::AppError;
use crate::models::transaction::{NewTransaction, Transaction};

/// Port for persisting and querying transaction records.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Persist a record and return it with its store-assigned id.
    async fn save(&self, record: NewTransaction) -> Result<Transaction, AppError>;

    /// All records where the account appears as source or destination.
    ///
    /// Ordering is newest-first as a convenience; callers must not rely
    /// on it.
    async fn find_by_account(&self, account_id: &str) -> Result<Vec<Transaction>, AppError>;
}

/// Postgres-backed [`TransactionStore`].
#[derive(Clone)]
pub struct PgTransactionStore {
    pool: DbPool,
}

impl PgTransactionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionStore for PgTransactionStore {
    async fn save(&self, record: NewTransaction) -> Result<Transaction, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (
                kind,
                outcome,
                from_account_id,
                to_account_id,
                amount,
                created_at,
                message
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(record.kind)
        .bind(record.outcome)
        .bind(record.from_account_id)
        .bind(record.to_account_id)
        .bind(record.amount)
        .bind(record.created_at)
        .bind(record.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(transaction)
    }

    async fn find_by_account(&self, account_id: &str) -> Result<Vec<Transaction>, AppError> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT * FROM transactions
            WHERE from_account_id = $1 OR to_account_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }
}
