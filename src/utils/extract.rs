use axum::extract::FromRequest;

use crate::utils::error::AppError;

/// `Json` extractor whose rejections render as the failure envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
