use axum::response::Html;

use crate::include_res;

pub(crate) async fn create_page() -> Html<&'static str> {
    Html(include_res!(str, "/pages/create.html"))
}

pub(crate) async fn signup_page() -> Html<&'static str> {
    Html(include_res!(str, "/pages/signup.html"))
}
