use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use stocksync_core::storage::{
    repository_error_to_status_code, PageParamsError, RepositoryError,
};

use crate::usecase::UseCaseError;

pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(usecase_error) = self.0.downcast_ref::<UseCaseError>() {
            match usecase_error {
                UseCaseError::Validation(_) => StatusCode::BAD_REQUEST,
                UseCaseError::Store(repo_error) => status_from_repository_error(repo_error),
            }
        } else if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            status_from_repository_error(repo_error)
        } else if self.0.downcast_ref::<PageParamsError>().is_some() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status_code, self.0.to_string()).into_response()
    }
}

fn status_from_repository_error(error: &RepositoryError) -> StatusCode {
    let code = repository_error_to_status_code(error);
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
