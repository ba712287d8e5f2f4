//! Path parameter extractors
//!
//! Type-safe extraction of record ids from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use skillswap_core::{SwapId, UserId};

use crate::response::ApiError;

/// Extract path parameters, rejecting with the API error body
#[derive(Debug, Clone)]
pub struct PathParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for PathParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(PathParams(inner))
    }
}

/// Path parameters with swap_id
#[derive(Debug, serde::Deserialize)]
pub struct SwapIdPath {
    pub swap_id: String,
}

impl SwapIdPath {
    /// Parse swap_id as a positive id
    pub fn swap_id(&self) -> Result<SwapId, ApiError> {
        self.swap_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid swap_id format"))
    }
}

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as a positive id
    pub fn user_id(&self) -> Result<UserId, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}
