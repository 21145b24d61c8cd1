use axum::{debug_handler, extract::State, routing::post, Json, Router};
use serde_json::Value;
use sqlx::SqlitePool;

use crate::{db::User, AppResult, AppState, GetField};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user", post(new_user))
}

/// Takes whatever object the client sends; `email` must be a string,
/// `name` may be absent or null. Other fields are ignored.
#[debug_handler]
pub(crate) async fn new_user(
    State(db_pool): State<SqlitePool>,
    Json(body): Json<Value>,
) -> AppResult<Json<User>> {
    let email = body.get_str_field("email")?;
    let name = body.get_opt_str_field("name")?;

    let user: User = sqlx::query_as("INSERT INTO users (email,name) VALUES (?,?) RETURNING *")
        .bind(&email)
        .bind(&name)
        .fetch_one(&db_pool)
        .await?;

    tracing::info!("adding user #{} <{email}>", user.id);
    Ok(Json(user))
}
