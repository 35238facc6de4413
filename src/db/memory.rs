use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{
    Category, NewQuestion, Question, QuestionRepository, SearchTerm, StoreError, StoreResult,
};

/// Repository kept entirely in process memory. Ids are never reused after a
/// delete, matching the `AUTOINCREMENT` table.
#[derive(Default)]
pub struct InMemoryRepository {
    inner: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    last_id: i64,
}

impl InMemoryRepository {
    pub fn new(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let last_id = questions.iter().map(|q| q.id).max().unwrap_or(0);
        Self {
            inner: RwLock::new(Tables {
                categories: categories.into_iter().map(|c| (c.id, c)).collect(),
                questions: questions.into_iter().map(|q| (q.id, q)).collect(),
                last_id,
            }),
        }
    }

    async fn filtered(&self, predicate: impl Fn(&Question) -> bool) -> Vec<Question> {
        self.inner
            .read()
            .await
            .questions
            .values()
            .filter(|q| predicate(*q))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.inner.read().await.categories.values().cloned().collect())
    }

    async fn category(&self, id: i64) -> StoreResult<Category> {
        self.inner
            .read()
            .await
            .categories
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn questions(&self) -> StoreResult<Vec<Question>> {
        Ok(self.filtered(|_| true).await)
    }

    async fn questions_in_category(&self, category: &str) -> StoreResult<Vec<Question>> {
        Ok(self.filtered(|q| q.category == category).await)
    }

    async fn search_questions(&self, term: &SearchTerm) -> StoreResult<Vec<Question>> {
        Ok(self.filtered(|q| term.matches(&q.question)).await)
    }

    async fn question(&self, id: i64) -> StoreResult<Question> {
        self.inner
            .read()
            .await
            .questions
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create_question(&self, question: NewQuestion) -> StoreResult<i64> {
        let mut tables = self.inner.write().await;
        tables.last_id += 1;
        let id = tables.last_id;
        tables.questions.insert(
            id,
            Question {
                id,
                question: question.question,
                answer: question.answer,
                category: question.category,
                difficulty: question.difficulty,
            },
        );
        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<()> {
        self.inner
            .write()
            .await
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> InMemoryRepository {
        InMemoryRepository::new(
            vec![Category {
                id: 1,
                kind: "Science".to_owned(),
            }],
            vec![Question {
                id: 4,
                question: "What is the heaviest organ in the human body?".to_owned(),
                answer: "The Liver".to_owned(),
                category: "1".to_owned(),
                difficulty: 4,
            }],
        )
    }

    fn new_question() -> NewQuestion {
        NewQuestion {
            question: "Who discovered penicillin?".to_owned(),
            answer: "Alexander Fleming".to_owned(),
            category: "1".to_owned(),
            difficulty: 3,
        }
    }

    #[tokio::test]
    async fn created_ids_continue_after_seed_data() {
        let repo = repository();
        let id = repo.create_question(new_question()).await.unwrap();
        assert_eq!(id, 5);
        assert_eq!(repo.question(5).await.unwrap().answer, "Alexander Fleming");
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let repo = repository();
        let id = repo.create_question(new_question()).await.unwrap();
        repo.delete_question(id).await.unwrap();
        let next = repo.create_question(new_question()).await.unwrap();
        assert_eq!(next, id + 1);
    }

    #[tokio::test]
    async fn deleting_unknown_id_is_not_found() {
        let repo = repository();
        assert!(matches!(
            repo.delete_question(100).await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn category_filter_compares_text() {
        let repo = repository();
        assert_eq!(repo.questions_in_category("1").await.unwrap().len(), 1);
        assert!(repo.questions_in_category("01").await.unwrap().is_empty());
    }
}
