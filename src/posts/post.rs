use axum::{debug_handler, extract::{Path, State}, response::{IntoResponse, Response}, Json};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{db::{self, Post, PostDetail}, res, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewPostQuery {
    title: String,
    content: Option<String>,
    author_email: Option<String>,
}

#[debug_handler]
pub(crate) async fn new_post(
    State(db_pool): State<SqlitePool>,
    Json(NewPostQuery { title, content, author_email }): Json<NewPostQuery>,
) -> AppResult<Response> {
    let Some(author_email) = author_email else {
        return Ok(res::user_missing());
    };
    let Some(author) = db::user_by_email(&db_pool, &author_email).await? else {
        tracing::debug!("no user {author_email}, post not created");
        return Ok(res::user_missing());
    };

    let post: Post = sqlx::query_as("INSERT INTO posts (title,content,published,author_id) VALUES (?,?,FALSE,?) RETURNING *")
        .bind(&title)
        .bind(&content)
        .bind(author.id)
        .fetch_one(&db_pool)
        .await?;

    tracing::info!("post #{} created by {author_email}", post.id);
    Ok(Json(post).into_response())
}

/// `null` when the post does not exist.
#[debug_handler]
pub(crate) async fn post(
    Path(id): Path<i64>,
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<Option<PostDetail>>> {
    Ok(Json(db::post_detail(&db_pool, id).await?))
}

#[debug_handler]
pub(crate) async fn delete_post(
    Path(id): Path<i64>,
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<Post>> {
    let post: Post = sqlx::query_as("DELETE FROM posts WHERE id=? RETURNING *")
        .bind(id)
        .fetch_one(&db_pool)
        .await?;

    tracing::info!("post #{id} deleted");
    Ok(Json(post))
}

#[debug_handler]
pub(crate) async fn publish(
    Path(id): Path<i64>,
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<Post>> {
    let post: Post = sqlx::query_as("UPDATE posts SET published=TRUE WHERE id=? RETURNING *")
        .bind(id)
        .fetch_one(&db_pool)
        .await?;

    tracing::info!("post #{id} published");
    Ok(Json(post))
}
