//! Form bodies where a missing or non-form content type reads as an empty form.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{rejection::FormRejection, FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;

/// Like `Form<T>`, but without a form content type the request yields `T::default()`,
/// leaving presence checks to validation. Other rejections keep their status
/// (e.g. 413 when the body exceeds the size cap).
#[derive(Debug)]
pub struct FormOrEmpty<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for FormOrEmpty<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(FormOrEmpty(value)),
            Err(FormRejection::InvalidFormContentType(_)) => Ok(FormOrEmpty(T::default())),
            Err(rejection) => Err(AppError::Rejected {
                status: rejection.status(),
                message: rejection.body_text(),
            }),
        }
    }
}
