use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use roster_core::RequestSchema;

use crate::errors::{ApiError, ServerError};

/// JSON body checked against `T`'s schema before the handler runs.
///
/// Unlike `axum::Json`, every failure to produce a `T` (empty body, bad syntax,
/// wrong shape) is answered with 422 and the full list of problems. The
/// `Content-Type` header is not inspected. Body size is not capped by the router.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: RequestSchema + Send,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::body_rejected(rejection.status(), rejection.body_text())
            })?;

        let value = T::from_body(&body).map_err(ApiError::from)?;
        Ok(Self(value))
    }
}
