/*!
 * The dao module holds every query the application runs against the database
 */
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePool;

use crate::models::{Choice, Question};

pub async fn latest_published(
    pool: &SqlitePool,
    now: DateTime<Utc>,
    limit: i64,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        "SELECT id, text, pub_date FROM questions WHERE pub_date <= ?1 ORDER BY pub_date DESC LIMIT ?2",
    )
    .bind(now)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/**
 * Look up a question, but only if it has already been published at `now`
 */
pub async fn published_question(
    pool: &SqlitePool,
    id: i64,
    now: DateTime<Utc>,
) -> sqlx::Result<Option<Question>> {
    sqlx::query_as::<_, Question>(
        "SELECT id, text, pub_date FROM questions WHERE id = ?1 AND pub_date <= ?2",
    )
    .bind(id)
    .bind(now)
    .fetch_optional(pool)
    .await
}

pub async fn question(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Question>> {
    sqlx::query_as::<_, Question>("SELECT id, text, pub_date FROM questions WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn choices_for(pool: &SqlitePool, question_id: i64) -> sqlx::Result<Vec<Choice>> {
    sqlx::query_as::<_, Choice>(
        "SELECT id, question_id, text, votes FROM choices WHERE question_id = ?1 ORDER BY id ASC",
    )
    .bind(question_id)
    .fetch_all(pool)
    .await
}

/**
 * Add a single vote to the choice, provided it belongs to the question.
 *
 * Returns false when no such choice exists for that question, in which case nothing changed
 */
pub async fn record_vote(pool: &SqlitePool, question_id: i64, choice_id: i64) -> sqlx::Result<bool> {
    let result =
        sqlx::query("UPDATE choices SET votes = votes + 1 WHERE id = ?1 AND question_id = ?2")
            .bind(choice_id)
            .bind(question_id)
            .execute(pool)
            .await?;
    Ok(result.rows_affected() == 1)
}

pub async fn create_question(
    pool: &SqlitePool,
    text: &str,
    pub_date: DateTime<Utc>,
) -> sqlx::Result<Question> {
    let result = sqlx::query("INSERT INTO questions (text, pub_date) VALUES (?1, ?2)")
        .bind(text)
        .bind(pub_date)
        .execute(pool)
        .await?;

    Ok(Question {
        id: result.last_insert_rowid(),
        text: text.to_string(),
        pub_date,
    })
}

pub async fn create_choice(pool: &SqlitePool, question_id: i64, text: &str) -> sqlx::Result<Choice> {
    let result = sqlx::query("INSERT INTO choices (question_id, text) VALUES (?1, ?2)")
        .bind(question_id)
        .bind(text)
        .execute(pool)
        .await?;

    Ok(Choice {
        id: result.last_insert_rowid(),
        question_id,
        text: text.to_string(),
        votes: 0,
    })
}

/**
 * Remove a question, its choices go with it
 */
pub async fn delete_question(pool: &SqlitePool, id: i64) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() == 1)
}
