use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::{
    db::Repository,
    quiz::paginate,
    server::{app::AppState, error::OrApiError, ApiError},
};

use super::{category_map, ApiResponse, CategoryMap, PageQuery, QuestionsPage};

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: CategoryMap,
}

async fn get_categories(State(repository): State<Repository>) -> ApiResponse<Json<CategoriesResponse>> {
    let categories = repository.categories().await.or_api(ApiError::BadRequest)?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

async fn questions_for_category(
    State(repository): State<Repository>,
    Path(id): Path<String>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResponse<Json<QuestionsPage>> {
    let id: i64 = id.parse().map_err(|_| ApiError::NotFound)?;
    let questions = repository
        .questions_in_category(&id.to_string())
        .await
        .or_api(ApiError::NotFound)?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    // a page past the end is still a valid listing of this category
    let current = paginate(&questions, page);
    let category = repository.category(id).await.or_api(ApiError::NotFound)?;

    Ok(Json(QuestionsPage {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
        categories: None,
        current_category: category.kind,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(questions_for_category))
        .with_state(state)
}
