//! Request extractors

use axum::extract::{FromRequest, Request};
use axum::Json;
use roster_domain::RosterError;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor whose rejection stays in the API's error contract.
///
/// axum's stock `Json` rejection answers with 422 and a plain-text body;
/// clients of this service expect 400 and the `{success, error}` shape for
/// any unusable body, malformed syntax and missing fields alike.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(RosterError::BadRequest(rejection.body_text()).into()),
        }
    }
}
