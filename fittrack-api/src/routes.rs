use actix_web::{get, post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use log::{error, info};
use serde::{Deserialize, Serialize};

use fittrack_calculator::CalculatorForm;
use fittrack_client::Client;
use fittrack_model::catalog::{Exercise, NutritionFacts};

use crate::error::ApiError;

const MAX_EXERCISE_RESULTS: usize = 10;

#[derive(Debug, Deserialize)]
pub struct ExerciseForm {
    #[serde(default)]
    pub muscle: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NutritionForm {
    #[serde(default)]
    pub food: Option<String>,
}

#[derive(Serialize)]
struct ExercisesResponse {
    exercises: Vec<Exercise>,
}

#[derive(Serialize)]
struct NutritionResponse {
    items: Vec<NutritionFacts>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
struct NotFoundBody {
    error: &'static str,
}

#[post("/calculator")]
pub async fn calculator(form: web::Form<CalculatorForm>) -> Result<HttpResponse, ApiError> {
    let input = form.validate()?;
    info!("Computing calorie and macro targets");
    Ok(HttpResponse::Ok().json(fittrack_calculator::compute(&input)))
}

#[post("/exercises")]
pub async fn exercises(
    client: web::Data<dyn Client>,
    form: web::Form<ExerciseForm>,
) -> Result<HttpResponse, ApiError> {
    let muscle = form
        .muscle
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingMuscle)?;

    info!("Searching exercises for muscle group {}", muscle);
    let mut exercises = client.search_exercises(muscle).await.map_err(|e| {
        error!("Exercise lookup failed: {}", e);
        ApiError::ExerciseLookup(e)
    })?;
    exercises.truncate(MAX_EXERCISE_RESULTS);

    Ok(HttpResponse::Ok().json(ExercisesResponse { exercises }))
}

#[post("/nutrition")]
pub async fn nutrition(
    client: web::Data<dyn Client>,
    form: web::Form<NutritionForm>,
) -> Result<HttpResponse, ApiError> {
    let food = form
        .food
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingFood)?;

    info!("Looking up nutrition facts for {}", food);
    let items = client.lookup_nutrition(food).await.map_err(|e| {
        error!("Nutrition lookup failed: {}", e);
        ApiError::NutritionLookup(e)
    })?;

    Ok(HttpResponse::Ok().json(NutritionResponse { items }))
}

#[get("/health")]
pub async fn health() -> impl Responder {
    web::Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
    })
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(NotFoundBody { error: "not found" })
}
