use std::collections::HashSet;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::{
    db::{Question, Repository},
    quiz::pick_unseen,
    server::{
        app::AppState, deserializers::IntOrText, error::OrApiError, extractors::JsonBody, ApiError,
    },
    telemetry::QUIZ_QUESTIONS_SERVED,
};

use super::ApiResponse;

#[derive(Deserialize)]
struct QuizRequest {
    #[serde(default)]
    previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    quiz_category: Option<QuizCategory>,
}

// `type` is sent as well but only the id selects the pool. The number 0 means
// "All"; the string "0" is looked up like any other category.
#[derive(Deserialize)]
struct QuizCategory {
    id: IntOrText,
}

#[derive(Serialize)]
struct NextQuestion {
    success: bool,
    question: Question,
}

async fn next_question(
    State(repository): State<Repository>,
    body: JsonBody,
) -> ApiResponse<Json<NextQuestion>> {
    let request: QuizRequest = body
        .parse()
        .ok_or(ApiError::NotFound)?
        .map_err(|e| {
            tracing::debug!(error = %e, "malformed quiz request");
            ApiError::BadRequest
        })?;
    let (Some(previous), Some(category)) = (request.previous_questions, request.quiz_category)
    else {
        return Err(ApiError::BadRequest);
    };

    let category = match category.id {
        IntOrText::Int(0) => None,
        id => Some(id.into_text()),
    };
    let pool = match &category {
        None => repository.questions().await,
        Some(category) => repository.questions_in_category(category).await,
    }
    .or_api(ApiError::Internal)?;

    let previous: HashSet<i64> = previous.into_iter().collect();
    let question =
        pick_unseen(pool, &previous, &mut rand::thread_rng()).ok_or(ApiError::NotFound)?;

    let label = category.unwrap_or_else(|| "all".to_owned());
    QUIZ_QUESTIONS_SERVED.with_label_values(&[label.as_str()]).inc();
    tracing::debug!(id = question.id, category = %label, seen = previous.len(), "quiz question picked");

    Ok(Json(NextQuestion {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}
