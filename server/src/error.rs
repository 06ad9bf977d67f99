use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde::Serialize;
use std::fmt::{Debug, Formatter};

/// Returned from `main`; `Result`'s `Termination` prints it through `Debug`.
pub struct StackTrace(Report<KernelError>);

impl Debug for StackTrace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

#[derive(Debug)]
pub enum ErrorStatus {
    Kernel(Report<KernelError>),
    BadRequest(JsonRejection),
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus::Kernel(e)
    }
}

impl From<JsonRejection> for ErrorStatus {
    fn from(e: JsonRejection) -> Self {
        ErrorStatus::BadRequest(e)
    }
}

#[derive(Debug, Serialize)]
struct ErrorMessage {
    message: &'static str,
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ErrorStatus::Kernel(report) => match report.current_context() {
                KernelError::NotFound => {
                    tracing::debug!("{report:?}");
                    (StatusCode::NOT_FOUND, "book not found")
                }
                KernelError::Internal => {
                    tracing::error!("{report:?}");
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
                }
            },
            ErrorStatus::BadRequest(rejection) => {
                tracing::debug!(%rejection, "Rejected request body");
                (StatusCode::BAD_REQUEST, "bad request")
            }
        };
        (status, Json(ErrorMessage { message })).into_response()
    }
}
