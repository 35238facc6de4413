use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::db::Question;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// The window of `items` shown on `page` (1-based). Pages below 1 or past the
/// end give an empty slice.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|p| usize::try_from(p).ok())
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

/// Picks uniformly among the questions in `pool` that are not in `previous`.
/// `None` once every question has been seen.
pub fn pick_unseen<R: Rng + ?Sized>(
    pool: Vec<Question>,
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Option<Question> {
    let candidates: Vec<Question> = pool
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();
    candidates.choose(rng).cloned()
}
