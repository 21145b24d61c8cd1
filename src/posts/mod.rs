mod list;
mod post;
mod writing;

use axum::{routing::{self, get, put}, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/drafts", get(list::drafts))
        .route("/feed", get(list::feed))
        .route("/filterPosts", get(list::filter_posts))

        .route("/post", routing::post(post::new_post))
        .route("/post/{id}", get(post::post).delete(post::delete_post))
        .route("/publish/{id}", put(post::publish))

        .route("/writing/{id}", get(writing::writing))
        .route("/writing/{id}/{truth}", put(writing::set_writing))
}
