use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;

use crate::{
    config::SearchSettings,
    db::{NewQuestion, Repository, SearchTerm},
    quiz::paginate,
    server::{
        app::AppState, deserializers::IntOrText, error::OrApiError, extractors::JsonBody,
        ApiError,
    },
    telemetry::{QUESTIONS_CREATED, QUESTIONS_DELETED},
};

use super::{category_map, ApiResponse, Message, PageQuery, QuestionsPage};

#[derive(Deserialize)]
struct QuestionForm {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    difficulty: Option<i64>,
    #[serde(default)]
    category: Option<IntOrText>,
}

impl QuestionForm {
    /// Every field has to be present and non-empty; a difficulty or category of 0
    /// counts as missing.
    fn validate(self) -> Option<NewQuestion> {
        Some(NewQuestion {
            question: self.question.filter(|q| !q.is_empty())?,
            answer: self.answer.filter(|a| !a.is_empty())?,
            difficulty: self.difficulty.filter(|d| *d != 0)?,
            category: self.category.and_then(IntOrText::into_truthy_text)?,
        })
    }
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm", default)]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct Created {
    success: bool,
    message: &'static str,
    created: i64,
}

async fn questions_page(
    State(repository): State<Repository>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResponse<Json<QuestionsPage>> {
    let questions = repository.questions().await.or_api(ApiError::Internal)?;
    let categories = repository.categories().await.or_api(ApiError::Internal)?;

    let current = paginate(&questions, page);
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(QuestionsPage {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
        categories: Some(category_map(categories)),
        current_category: String::new(),
    }))
}

async fn create_question(
    State(repository): State<Repository>,
    body: JsonBody,
) -> ApiResponse<(StatusCode, Json<Created>)> {
    let form: QuestionForm = body
        .parse()
        .ok_or(ApiError::Unprocessable)?
        .map_err(|e| {
            tracing::debug!(error = %e, "malformed question");
            ApiError::Unprocessable
        })?;
    let new_question = form.validate().ok_or(ApiError::Unprocessable)?;

    let id = repository
        .create_question(new_question)
        .await
        .or_api(ApiError::Unprocessable)?;
    QUESTIONS_CREATED.inc();
    tracing::info!(id, "question created");

    Ok((
        StatusCode::CREATED,
        Json(Created {
            success: true,
            message: "Question was created",
            created: id,
        }),
    ))
}

async fn delete_question(
    State(repository): State<Repository>,
    Path(id): Path<String>,
) -> ApiResponse<Json<Message>> {
    let id: i64 = id.parse().map_err(|_| ApiError::NotFound)?;
    let question = repository
        .question(id)
        .await
        .or_api(ApiError::Unprocessable)?;
    repository
        .delete_question(question.id)
        .await
        .or_api(ApiError::Unprocessable)?;
    QUESTIONS_DELETED.inc();
    tracing::info!(id, question = %question.question, "question deleted");

    Ok(Json(Message {
        success: true,
        message: "Question was deleted",
    }))
}

async fn search_questions(
    State(repository): State<Repository>,
    State(search): State<SearchSettings>,
    Query(PageQuery { page }): Query<PageQuery>,
    body: JsonBody,
) -> ApiResponse<Json<QuestionsPage>> {
    let term = match body.parse::<SearchBody>() {
        Some(Ok(SearchBody {
            search_term: Some(term),
        })) if !term.is_empty() => term,
        _ => return Err(ApiError::Unprocessable),
    };

    let questions = repository
        .search_questions(&SearchTerm::new(term, search.trailing_space))
        .await
        .or_api(ApiError::NotFound)?;
    let current = paginate(&questions, page);
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(QuestionsPage {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
        categories: None,
        current_category: String::new(),
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(questions_page).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/searchs", post(search_questions))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn form(value: serde_json::Value) -> Option<NewQuestion> {
        serde_json::from_value::<QuestionForm>(value)
            .unwrap()
            .validate()
    }

    #[test]
    fn complete_form_is_accepted() {
        let q = form(json!({
            "question": "What is the largest lake in Africa?",
            "answer": "Lake Victoria",
            "difficulty": "2",
            "category": 3
        }))
        .unwrap();
        assert_eq!(q.difficulty, 2);
        assert_eq!(q.category, "3");
    }

    #[test]
    fn falsy_fields_are_rejected() {
        let base = json!({
            "question": "Q",
            "answer": "A",
            "difficulty": 1,
            "category": "1"
        });
        for (field, value) in [
            ("question", json!("")),
            ("answer", json!(null)),
            ("difficulty", json!(0)),
            ("category", json!("")),
            ("category", json!(0)),
        ] {
            let mut body = base.clone();
            body[field] = value;
            assert!(form(body).is_none(), "{field} should be required");
        }
        assert!(form(json!({ "question": "Q", "answer": "A", "difficulty": 1 })).is_none());
    }
}
