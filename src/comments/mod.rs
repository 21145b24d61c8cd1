mod list;
mod new;

use axum::{routing::{get, post}, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/comments", get(list::comments))
        .route("/comment", post(new::new_comment))
        .route("/comment/{author_id}/{post_id}", get(list::comments_by_author_and_post))
        .route("/commentByPost/{post_id}", get(list::comments_by_post))
        .route("/commentByAuthor/{author_id}", get(list::comments_by_author))
}
