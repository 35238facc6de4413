use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::queries::{categories, questions};
use super::{Category, NewQuestion, Question, SearchTerm, StoreResult};

pub type Repository = Arc<dyn QuestionRepository>;

/// Storage seen by the HTTP handlers. Lists come back ordered by id.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn categories(&self) -> StoreResult<Vec<Category>>;

    async fn category(&self, id: i64) -> StoreResult<Category>;

    async fn questions(&self) -> StoreResult<Vec<Question>>;

    /// Questions whose `category` text equals `category` exactly.
    async fn questions_in_category(&self, category: &str) -> StoreResult<Vec<Question>>;

    async fn search_questions(&self, term: &SearchTerm) -> StoreResult<Vec<Question>>;

    async fn question(&self, id: i64) -> StoreResult<Question>;

    async fn create_question(&self, question: NewQuestion) -> StoreResult<i64>;

    /// `StoreError::NotFound` when the id is unknown.
    async fn delete_question(&self, id: i64) -> StoreResult<()>;
}

#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for SqliteRepository {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        Ok(categories::get_all_categories(&self.pool).await?)
    }

    async fn category(&self, id: i64) -> StoreResult<Category> {
        Ok(categories::get_category(&self.pool, id).await?)
    }

    async fn questions(&self) -> StoreResult<Vec<Question>> {
        Ok(questions::get_all_questions(&self.pool).await?)
    }

    async fn questions_in_category(&self, category: &str) -> StoreResult<Vec<Question>> {
        Ok(questions::get_questions_for_category(&self.pool, category).await?)
    }

    async fn search_questions(&self, term: &SearchTerm) -> StoreResult<Vec<Question>> {
        Ok(questions::search_questions(&self.pool, term).await?)
    }

    async fn question(&self, id: i64) -> StoreResult<Question> {
        Ok(questions::get_question_by_id(&self.pool, id).await?)
    }

    async fn create_question(&self, question: NewQuestion) -> StoreResult<i64> {
        Ok(questions::create_question(&self.pool, &question).await?)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<()> {
        Ok(questions::delete_question(&self.pool, id).await?)
    }
}
