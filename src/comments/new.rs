use axum::{debug_handler, extract::State, response::{IntoResponse, Response}, Json};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{db::{self, Comment}, res, AppResult};

/// `id` is the post being commented on.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewCommentQuery {
    id: i64,
    content: String,
    author_email: Option<String>,
}

#[debug_handler]
pub(crate) async fn new_comment(
    State(db_pool): State<SqlitePool>,
    Json(NewCommentQuery { id, content, author_email }): Json<NewCommentQuery>,
) -> AppResult<Response> {
    let Some(author_email) = author_email else {
        return Ok(res::user_missing());
    };
    let Some(author) = db::user_by_email(&db_pool, &author_email).await? else {
        tracing::debug!("no user {author_email}, comment on post #{id} not created");
        return Ok(res::user_missing());
    };

    // an unknown post id fails on the foreign key
    let comment: Comment = sqlx::query_as("INSERT INTO comments (content,author_id,post_id) VALUES (?,?,?) RETURNING *")
        .bind(&content)
        .bind(author.id)
        .bind(id)
        .fetch_one(&db_pool)
        .await?;

    tracing::info!("comment #{} on post #{id} by {author_email}", comment.id);
    Ok(Json(comment).into_response())
}
