//! Client for the external account-ledger service.
//!
//! The account service is the sole owner of balance state. This module
//! defines the port the strategies depend on (`AccountClient`), the
//! failure classification every remote error is reduced to
//! (`AccountClientError`), and the reqwest-based implementation
//! (`HttpAccountClient`).
//!
//! # Failure Classification
//!
//! Every remote failure falls into exactly one of three buckets:
//!
//! - `Rejected`: the service answered with an error status (conflict,
//!   bad request, ...). The status and response body are preserved.
//! - `Unreachable`: the request never got an answer (timeout, connection
//!   refused).
//! - `Unexpected`: anything else; the raw error text is kept.
//!
//! None of these is retried here; the strategies convert them into
//! failed transaction records.

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use serde::Deserialize;

/// Classified failure from the account service.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountClientError {
    /// The service explicitly rejected the call with an error status.
    #[error("account service rejected the request: {status} - {body}")]
    Rejected { status: u16, body: String },

    /// The service could not be reached (timeout, connection refused).
    #[error("account service unreachable: {0}")]
    Unreachable(String),

    /// Any other error; the message is the raw error text.
    #[error("{0}")]
    Unexpected(String),
}

/// Balance snapshot of one remote account.
///
/// Transient: read only to evaluate the transfer pre-check, never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountSnapshot {
    pub id: String,
    pub balance: BigDecimal,
}

/// Port for remote balance reads and mutations.
///
/// All calls are single-attempt; retry policy, if any, belongs to the
/// caller of this service, not to the transaction core.
#[async_trait]
pub trait AccountClient: Send + Sync {
    /// Add `amount` to the account's balance.
    async fn credit(&self, account_id: &str, amount: &BigDecimal)
        -> Result<(), AccountClientError>;

    /// Remove `amount` from the account's balance.
    async fn debit(&self, account_id: &str, amount: &BigDecimal) -> Result<(), AccountClientError>;

    /// Read the account's current balance snapshot.
    async fn fetch_account(&self, account_id: &str)
        -> Result<AccountSnapshot, AccountClientError>;
}

/// HTTP implementation of [`AccountClient`] against the account service's
/// internal API.
#[derive(Clone)]
pub struct HttpAccountClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAccountClient {
    /// Build a client for the given base URL.
    ///
    /// The timeout applies to every call and is how this service enforces
    /// the transport-failure classification for hung requests.
    pub fn new(base_url: String, timeout: std::time::Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Timeouts and connect failures mean the service was unreachable;
    /// everything else reqwest reports is unexpected.
    fn classify(err: reqwest::Error) -> AccountClientError {
        if err.is_timeout() || err.is_connect() {
            AccountClientError::Unreachable(err.to_string())
        } else {
            AccountClientError::Unexpected(err.to_string())
        }
    }

    /// Turn a non-2xx response into `Rejected`, preserving status and body.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, AccountClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(AccountClientError::Rejected {
            status: status.as_u16(),
            body,
        })
    }

    async fn post_mutation(
        &self,
        account_id: &str,
        op: &str,
        amount: &BigDecimal,
    ) -> Result<(), AccountClientError> {
        let url = format!("{}/accounts/internal/{}/{}", self.base_url, account_id, op);
        let response = self
            .client
            .post(&url)
            .query(&[("amount", amount.to_string())])
            .send()
            .await
            .map_err(Self::classify)?;

        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl AccountClient for HttpAccountClient {
    async fn credit(
        &self,
        account_id: &str,
        amount: &BigDecimal,
    ) -> Result<(), AccountClientError> {
        self.post_mutation(account_id, "deposit", amount).await
    }

    async fn debit(&self, account_id: &str, amount: &BigDecimal) -> Result<(), AccountClientError> {
        self.post_mutation(account_id, "withdraw", amount).await
    }

    async fn fetch_account(
        &self,
        account_id: &str,
    ) -> Result<AccountSnapshot, AccountClientError> {
        let url = format!("{}/accounts/{}", self.base_url, account_id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(Self::classify)?;

        let response = Self::ensure_success(response).await?;
        response
            .json::<AccountSnapshot>()
            .await
            .map_err(|e| AccountClientError::Unexpected(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client(base_url: String) -> HttpAccountClient {
        HttpAccountClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn fetch_account_parses_snapshot() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/accounts/A1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": "A1", "balance": "250.75"}"#)
            .create_async()
            .await;

        let snapshot = client(server.url()).fetch_account("A1").await.unwrap();
        assert_eq!(snapshot.id, "A1");
        assert_eq!(snapshot.balance, "250.75".parse::<BigDecimal>().unwrap());
    }

    #[tokio::test]
    async fn credit_posts_to_internal_deposit_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/accounts/internal/A1/deposit")
            .match_query(mockito::Matcher::UrlEncoded(
                "amount".into(),
                "100".into(),
            ))
            .with_status(200)
            .create_async()
            .await;

        let result = client(server.url())
            .credit("A1", &BigDecimal::from(100))
            .await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejection_preserves_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/accounts/internal/A1/withdraw")
            .match_query(mockito::Matcher::Any)
            .with_status(409)
            .with_body("insufficient funds")
            .create_async()
            .await;

        let err = client(server.url())
            .debit("A1", &BigDecimal::from(50))
            .await
            .unwrap_err();

        match &err {
            AccountClientError::Rejected { status, body } => {
                assert_eq!(*status, 409);
                assert_eq!(body, "insufficient funds");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains("409"));
        assert!(message.contains("insufficient funds"));
    }

    #[tokio::test]
    async fn connection_refused_is_unreachable() {
        // Port 9 is discard; nothing listens there in the test environment.
        let err = client("http://127.0.0.1:9".to_string())
            .credit("A1", &BigDecimal::from(10))
            .await
            .unwrap_err();

        assert!(matches!(err, AccountClientError::Unreachable(_)));
        assert!(err.to_string().contains("unreachable"));
    }
}
