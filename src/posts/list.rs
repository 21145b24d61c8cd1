use axum::{debug_handler, extract::{Query, State}, Json};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{db::{self, Post, PostWithAuthor}, AppResult};

#[derive(Deserialize)]
pub(crate) struct FilterQuery {
    #[serde(rename = "searchString")]
    search_string: Option<String>,
}

#[debug_handler]
pub(crate) async fn drafts(State(db_pool): State<SqlitePool>) -> AppResult<Json<Vec<PostWithAuthor>>> {
    Ok(Json(db::posts_by_published(&db_pool, false).await?))
}

#[debug_handler]
pub(crate) async fn feed(State(db_pool): State<SqlitePool>) -> AppResult<Json<Vec<PostWithAuthor>>> {
    Ok(Json(db::posts_by_published(&db_pool, true).await?))
}

/// Case-sensitive substring match on title or content. `instr` rather than
/// `LIKE`, which folds ASCII case in SQLite.
#[debug_handler]
pub(crate) async fn filter_posts(
    State(db_pool): State<SqlitePool>,
    Query(FilterQuery { search_string }): Query<FilterQuery>,
) -> AppResult<Json<Vec<Post>>> {
    let posts: Vec<Post> = match search_string {
        Some(search_string) => {
            sqlx::query_as("SELECT * FROM posts WHERE instr(title,?1)>0 OR instr(content,?1)>0 ORDER BY id")
                .bind(search_string)
                .fetch_all(&db_pool)
                .await?
        }
        None => {
            sqlx::query_as("SELECT * FROM posts ORDER BY id")
                .fetch_all(&db_pool)
                .await?
        }
    };

    Ok(Json(posts))
}
