#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;
use trivia_api::config::SearchSettings;
use trivia_api::db::{self, Category, InMemoryRepository, Question, SqliteRepository};
use trivia_api::server::{router, AppState};

pub fn categories() -> Vec<Category> {
    [
        (1, "Science"),
        (2, "Art"),
        (3, "Geography"),
        (4, "History"),
        (5, "Entertainment"),
        (6, "Sports"),
        (7, "Music"),
    ]
    .into_iter()
    .map(|(id, kind)| Category {
        id,
        kind: kind.to_owned(),
    })
    .collect()
}

pub fn questions() -> Vec<Question> {
    [
        (1, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", "4", 2),
        (2, "What boxer's original name is Cassius Clay?", "Muhammad Ali", "4", 1),
        (3, "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", "5", 4),
        (4, "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", "5", 4),
        (5, "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", "5", 3),
        (6, "Which is the only team to play in every soccer World Cup tournament?", "Brazil", "6", 3),
        (7, "Which country won the first ever soccer World Cup in 1930?", "Uruguay", "6", 4),
        (8, "Who invented Peanut Butter?", "George Washington Carver", "4", 2),
        (9, "What is the largest lake in Africa?", "Lake Victoria", "3", 2),
        (10, "In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", "3", 3),
        (11, "The Taj Mahal is located in which Indian city?", "Agra", "3", 2),
        (12, "Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", "2", 1),
        (13, "La Giaconda is better known as what?", "Mona Lisa", "2", 3),
        (14, "What is the heaviest organ in the human body?", "The Liver", "1", 4),
        (15, "Who discovered penicillin?", "Alexander Fleming", "1", 3),
        (16, "Hematology is a branch of medicine involving the study of what?", "Blood", "1", 4),
    ]
    .into_iter()
    .map(|(id, question, answer, category, difficulty)| Question {
        id,
        question: question.to_owned(),
        answer: answer.to_owned(),
        category: category.to_owned(),
        difficulty,
    })
    .collect()
}

pub fn memory_repository() -> InMemoryRepository {
    InMemoryRepository::new(categories(), questions())
}

pub fn memory_app() -> Router {
    router(AppState::new(
        Arc::new(memory_repository()),
        SearchSettings::default(),
    ))
}

pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    db::run_migrations(&pool)
        .await
        .expect("migrations should apply");
    pool
}

pub async fn seeded_pool() -> SqlitePool {
    let pool = create_test_pool().await;
    db::queries::categories::import_categories(&pool, categories())
        .await
        .expect("categories should import");
    db::queries::questions::import_questions(&pool, questions())
        .await
        .expect("questions should import");
    pool
}

pub fn sqlite_app(pool: SqlitePool) -> Router {
    router(AppState::new(
        Arc::new(SqliteRepository::new(pool)),
        SearchSettings::default(),
    ))
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            req = req.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(req.body(body).expect("request build should succeed"))
        .await
        .expect("router should respond");

    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response should be json")
    };
    (status, json)
}

pub fn ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .expect("questions should be an array")
        .iter()
        .map(|q| q["id"].as_i64().expect("id should be a number"))
        .collect()
}
