//! Query string extractor that reports failures through [`AppError`].

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Deserialized query string.
///
/// Same as axum's `Query`, except that a bad value (`?limit=abc`, `?skip=-1`)
/// becomes [`AppError::Validation`] with the usual JSON error body.
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        Ok(QueryParams(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    use crate::types::ListParams;

    async fn extract(uri: &str) -> Result<ListParams, AppError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        QueryParams::<ListParams>::from_request_parts(&mut parts, &())
            .await
            .map(|QueryParams(params)| params)
    }

    #[tokio::test]
    async fn test_valid_query_parsed() {
        let params = extract("/users?skip=2&limit=5").await.unwrap();
        assert_eq!(params.skip(), 2);
        assert_eq!(params.limit(), 5);
    }

    #[tokio::test]
    async fn test_bad_value_is_validation_error() {
        assert!(matches!(
            extract("/users?limit=abc").await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            extract("/users?skip=-1").await,
            Err(AppError::Validation(_))
        ));
    }
}
