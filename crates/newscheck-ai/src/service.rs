//! Capability interface for the external text-generation service.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("service refused to process the request")]
    Refusal,
    #[error("service call timed out after {0:?}")]
    Timeout(Duration),
    #[error("{0}")]
    Other(String),
}

/// One deterministic generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjudicationRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// A remote function that turns a request into raw response text.
///
/// Implementations may fail for any reason; callers absorb the failure.
#[async_trait]
pub trait AdjudicationService: Send + Sync {
    async fn decide(&self, request: &AdjudicationRequest) -> Result<String, ServiceError>;
}

#[async_trait]
impl<S: AdjudicationService + ?Sized> AdjudicationService for Arc<S> {
    async fn decide(&self, request: &AdjudicationRequest) -> Result<String, ServiceError> {
        (**self).decide(request).await
    }
}

#[async_trait]
impl<S: AdjudicationService + ?Sized> AdjudicationService for Box<S> {
    async fn decide(&self, request: &AdjudicationRequest) -> Result<String, ServiceError> {
        (**self).decide(request).await
    }
}
