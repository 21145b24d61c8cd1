use axum::{debug_handler, extract::State, response::Html};
use sqlx::SqlitePool;

use crate::{db::{self, PostWithAuthor}, include_res, res, AppResult, Markdown};

#[debug_handler]
pub(crate) async fn feed_page(State(db_pool): State<SqlitePool>) -> AppResult<Html<String>> {
    let posts = db::posts_by_published(&db_pool, true).await?;
    Ok(Html(list_page("Public Feed", &posts)))
}

#[debug_handler]
pub(crate) async fn drafts_page(State(db_pool): State<SqlitePool>) -> AppResult<Html<String>> {
    let posts = db::posts_by_published(&db_pool, false).await?;
    Ok(Html(list_page("My Drafts", &posts)))
}

fn list_page(heading: &str, posts: &[PostWithAuthor]) -> String {
    let mut post_items = String::new();
    for PostWithAuthor { post, author } in posts {
        let author_name = author
            .as_ref()
            .and_then(|author| author.name.as_deref())
            .unwrap_or("Unknown author");

        post_items += &res::fill(include_res!(str, "/pages/post_item.html"), &[
            ("id", post.id.to_string().as_str()),
            ("title", res::escape(&post.title).as_str()),
            ("author", res::escape(author_name).as_str()),
            ("content", Markdown(post.content.as_deref().unwrap_or_default()).to_html().as_str()),
        ]);
    }

    res::fill(include_res!(str, "/pages/list.html"), &[
        ("heading", heading),
        ("post_items", post_items.as_str()),
    ])
}
