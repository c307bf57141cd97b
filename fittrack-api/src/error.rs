use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

use fittrack_calculator::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Please select a muscle group")]
    MissingMuscle,
    #[error("Please enter a food item")]
    MissingFood,
    #[error("Failed to fetch exercises. Please try again.")]
    ExerciseLookup(#[source] fittrack_client::Error),
    #[error("Failed to analyze nutrition. Please try again.")]
    NutritionLookup(#[source] fittrack_client::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MissingMuscle | ApiError::MissingFood => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ExerciseLookup(_) | ApiError::NutritionLookup(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
