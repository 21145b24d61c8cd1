use axum::{debug_handler, extract::{Path, State}, Json};
use sqlx::SqlitePool;

use crate::{db::{Post, TypingFlag}, AppResult};

/// Anything but the literal `true` clears the flag.
#[debug_handler]
pub(crate) async fn set_writing(
    Path((id, truth)): Path<(i64, String)>,
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<Post>> {
    let typing = truth == "true";
    let post: Post = sqlx::query_as("UPDATE posts SET typing=? WHERE id=? RETURNING *")
        .bind(typing)
        .bind(id)
        .fetch_one(&db_pool)
        .await?;

    tracing::debug!("post #{id} typing={typing}");
    Ok(Json(post))
}

#[debug_handler]
pub(crate) async fn writing(
    Path(id): Path<i64>,
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<Option<TypingFlag>>> {
    let flag = sqlx::query_as("SELECT typing FROM posts WHERE id=?")
        .bind(id)
        .fetch_optional(&db_pool)
        .await?;

    Ok(Json(flag))
}
