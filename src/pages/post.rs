use axum::{debug_handler, extract::{Path, State}, response::{Html, IntoResponse, Response}};
use sqlx::SqlitePool;

use crate::{db::{self, CommentWithAuthor}, include_res, presence::POLL_INTERVAL, res, AppResult, Markdown};

#[debug_handler]
pub(crate) async fn post_page(
    Path(id): Path<i64>,
    State(db_pool): State<SqlitePool>,
) -> AppResult<Response> {
    let Some(detail) = db::post_detail(&db_pool, id).await? else {
        return Ok(res::sorry("post"));
    };
    let post = detail.post;

    let mut title = res::escape(&post.title);
    if !post.published {
        title += " (Draft)";
    }

    let author_name = detail.author
        .as_ref()
        .and_then(|author| author.name.as_deref())
        .unwrap_or("Unknown author");

    let publish_button = if post.published {
        ""
    } else {
        include_res!(str, "/pages/publish_button.html")
    };

    let mut comments = String::new();
    for CommentWithAuthor { comment, author } in &detail.comments {
        comments += &res::fill(include_res!(str, "/pages/comment.html"), &[
            ("author", res::escape(author.name.as_deref().unwrap_or("Unknown commentor")).as_str()),
            ("content", Markdown(&comment.content).to_html().as_str()),
        ]);
    }

    let body = res::fill(include_res!(str, "/pages/post.html"), &[
        ("publish_button", publish_button),
        ("poll_ms", POLL_INTERVAL.as_millis().to_string().as_str()),
        ("typing", post.typing.to_string().as_str()),
        ("id", post.id.to_string().as_str()),
        ("title", title.as_str()),
        ("author", res::escape(author_name).as_str()),
        ("content", Markdown(post.content.as_deref().unwrap_or_default()).to_html().as_str()),
        ("comments", comments.as_str()),
    ]);

    Ok(Html(body).into_response())
}
