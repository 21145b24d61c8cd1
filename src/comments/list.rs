use axum::{debug_handler, extract::{Path, State}, Json};
use sqlx::SqlitePool;

use crate::{db::Comment, AppResult};

#[debug_handler]
pub(crate) async fn comments(State(db_pool): State<SqlitePool>) -> AppResult<Json<Vec<Comment>>> {
    let comments = sqlx::query_as("SELECT * FROM comments ORDER BY id")
        .fetch_all(&db_pool)
        .await?;

    Ok(Json(comments))
}

#[debug_handler]
pub(crate) async fn comments_by_author_and_post(
    Path((author_id, post_id)): Path<(i64, i64)>,
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<Vec<Comment>>> {
    let comments = sqlx::query_as("SELECT * FROM comments WHERE post_id=? AND author_id=? ORDER BY id")
        .bind(post_id)
        .bind(author_id)
        .fetch_all(&db_pool)
        .await?;

    Ok(Json(comments))
}

#[debug_handler]
pub(crate) async fn comments_by_post(
    Path(post_id): Path<i64>,
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<Vec<Comment>>> {
    let comments = sqlx::query_as("SELECT * FROM comments WHERE post_id=? ORDER BY id")
        .bind(post_id)
        .fetch_all(&db_pool)
        .await?;

    Ok(Json(comments))
}

// Filters on post_id, same as /commentByPost.
#[debug_handler]
pub(crate) async fn comments_by_author(
    Path(author_id): Path<i64>,
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<Vec<Comment>>> {
    let comments = sqlx::query_as("SELECT * FROM comments WHERE post_id=? ORDER BY id")
        .bind(author_id)
        .fetch_all(&db_pool)
        .await?;

    Ok(Json(comments))
}
