use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::config::UpstreamConfig;
use crate::domain::book::{Book, BookInput};
use crate::domain::clients::{BookClient, ClientError, ClientResult};

/// HTTP implementation of [`BookClient`] backed by the upstream REST API
///
/// Holds one pooled reqwest client built with the configured timeout.
/// Calls share connections but no other state; each operation is a
/// single outbound request with no retries.
pub struct UpstreamBookClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl UpstreamBookClient {
    /// Creates a client for the configured upstream
    pub fn new(config: UpstreamConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to build HTTP client");

        Self { http, config }
    }

    /// Issues a GET expected to yield a list of books
    ///
    /// List endpoints are not expected to 404: anything other than a
    /// decodable 2xx is an unknown failure.
    async fn fetch_books(&self, url: String) -> ClientResult<Vec<Book>> {
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| send_failure(&url, &e))?;

        let status = response.status();
        if status.is_success() {
            decode(&url, response).await
        } else {
            Err(unexpected_status(&url, status))
        }
    }

    /// Classifies a response for an id-addressed operation
    async fn book_or_not_found(
        &self,
        url: &str,
        id: i64,
        response: reqwest::Response,
    ) -> ClientResult<Book> {
        let status = response.status();
        if status.is_success() {
            decode(url, response).await
        } else if status == StatusCode::NOT_FOUND {
            Err(ClientError::NotFound(id))
        } else {
            Err(unexpected_status(url, status))
        }
    }
}

#[async_trait]
impl BookClient for UpstreamBookClient {
    async fn find_all(&self) -> ClientResult<Vec<Book>> {
        self.fetch_books(self.config.find_all_url()).await
    }

    async fn find_by_title(&self, title: &str) -> ClientResult<Vec<Book>> {
        self.fetch_books(self.config.find_by_title_url(title)).await
    }

    async fn find_by_author(&self, author: &str) -> ClientResult<Vec<Book>> {
        self.fetch_books(self.config.find_by_author_url(author))
            .await
    }

    async fn find_by_id(&self, id: i64) -> ClientResult<Book> {
        let url = self.config.find_by_id_url(id);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| send_failure(&url, &e))?;

        self.book_or_not_found(&url, id, response).await
    }

    async fn create(&self, input: BookInput) -> ClientResult<Book> {
        input
            .validate()
            .map_err(|errors| ClientError::InvalidInput { errors })?;

        let url = self.config.create_url();
        let response = self
            .http
            .post(&url)
            .json(&input)
            .send()
            .await
            .map_err(|e| send_failure(&url, &e))?;

        // Create has no not-found mapping; any error status is unknown.
        let status = response.status();
        if status.is_success() {
            decode(&url, response).await
        } else {
            Err(unexpected_status(&url, status))
        }
    }

    async fn update(&self, id: i64, input: BookInput) -> ClientResult<Book> {
        input
            .validate()
            .map_err(|errors| ClientError::InvalidInput { errors })?;

        let url = self.config.update_url(id);
        let response = self
            .http
            .put(&url)
            .json(&input)
            .send()
            .await
            .map_err(|e| send_failure(&url, &e))?;

        self.book_or_not_found(&url, id, response).await
    }

    async fn delete(&self, id: i64) -> ClientResult<Book> {
        let url = self.config.delete_url(id);
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| send_failure(&url, &e))?;

        self.book_or_not_found(&url, id, response).await
    }
}

fn send_failure(url: &str, err: &reqwest::Error) -> ClientError {
    tracing::warn!(url = %url, error = %err, "upstream call failed");
    ClientError::Unknown
}

fn unexpected_status(url: &str, status: StatusCode) -> ClientError {
    tracing::warn!(url = %url, status = %status, "unexpected upstream status");
    ClientError::Unknown
}

async fn decode<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> ClientResult<T> {
    response.json::<T>().await.map_err(|e| {
        tracing::warn!(url = %url, error = %e, "failed to decode upstream response");
        ClientError::Unknown
    })
}
