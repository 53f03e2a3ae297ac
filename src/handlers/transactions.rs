//! Transaction HTTP handlers.
//!
//! This module implements the transaction API endpoints:
//! - POST /api/v1/transactions/deposit - Credit an account
//! - POST /api/v1/transactions/withdraw - Debit an account
//! - POST /api/v1/transactions/transfer - Move money between accounts
//! - GET /api/v1/transactions/history/{account_id} - Per-account history
//!
//! The strictly-positive-amount precondition is enforced here, before a
//! request reaches the core. A failed operation is still HTTP 200: the
//! outcome lives in the record, not in the status code.

use axum::{
    Json,
    extract::{Path, State},
};
use bigdecimal::{BigDecimal, Zero};

use crate::{
    AppState,
    error::AppError,
    models::transaction::{
        DepositRequest, TransactionResponse, TransferRequest, WithdrawRequest,
    },
};

fn ensure_positive(amount: &BigDecimal) -> Result<(), AppError> {
    if *amount <= BigDecimal::zero() {
        return Err(AppError::InvalidRequest(
            "amount must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Deposit money into an account.
///
/// # Request Body
///
/// ```json
/// {
///   "account_id": "A1",
///   "amount": 100.00
/// }
/// ```
pub async fn deposit(
    State(state): State<AppState>,
    Json(request): Json<DepositRequest>,
) -> Result<Json<TransactionResponse>, AppError> {
    ensure_positive(&request.amount)?;

    let transaction = state.service.deposit(request).await?;
    Ok(Json(transaction.into()))
}

/// Withdraw money from an account.
pub async fn withdraw(
    State(state): State<AppState>,
    Json(request): Json<WithdrawRequest>,
) -> Result<Json<TransactionResponse>, AppError> {
    ensure_positive(&request.amount)?;

    let transaction = state.service.withdraw(request).await?;
    Ok(Json(transaction.into()))
}

/// Transfer money between two accounts.
///
/// Same-account and insufficient-balance conditions are not rejected
/// here; the transfer strategy records them as failed transactions.
pub async fn transfer(
    State(state): State<AppState>,
    Json(request): Json<TransferRequest>,
) -> Result<Json<TransactionResponse>, AppError> {
    ensure_positive(&request.amount)?;

    let transaction = state.service.transfer(request).await?;
    Ok(Json(transaction.into()))
}

/// List all transactions touching an account, as source or destination.
pub async fn history(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<Vec<TransactionResponse>>, AppError> {
    let transactions = state.service.history(&account_id).await?;
    Ok(Json(transactions.into_iter().map(Into::into).collect()))
}
