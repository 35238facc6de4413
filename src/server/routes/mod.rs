mod categories;
mod questions;
mod quizzes;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::db::{Category, Question};
use crate::server::deserializers::{deserialize_page, first_page};
use crate::server::ApiError;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

pub type ApiResponse<T> = Result<T, ApiError>;

/// Category id to display name, serialized as `{"1": "Science", ...}`.
pub type CategoryMap = BTreeMap<i64, String>;

fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default = "first_page", deserialize_with = "deserialize_page")]
    page: i64,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<CategoryMap>,
    current_category: String,
}

#[derive(Serialize)]
struct Message {
    success: bool,
    message: &'static str,
}
