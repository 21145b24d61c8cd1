mod forms;
mod index;
mod post;

use axum::{routing::get, Router};

use crate::{res, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::feed_page))
        .route("/drafts", get(index::drafts_page))
        .route("/p/{id}", get(post::post_page))
        .route("/create", get(forms::create_page))
        .route("/signup", get(forms::signup_page))
        .route("/style.css", get(res::stylesheet))
}
