pub mod appresult;
pub mod comments;
pub mod config;
pub mod db;
pub mod pages;
pub mod posts;
pub mod presence;
pub mod res;
pub mod users;

use anyhow::anyhow;
use axum::{extract::FromRef, Router};
use serde_json::Value;
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use appresult::{AppError, AppResult};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

/// The whole service: JSON API at the root, rendered pages under `/ui`.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .merge(posts::router())
        .merge(comments::router())
        .merge(users::router())
        .nest("/ui", pages::router())

        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub trait GetField {
    fn get_str_field(&self, field: &str) -> AppResult<String>;
    fn get_opt_str_field(&self, field: &str) -> AppResult<Option<String>>;
}

impl GetField for serde_json::Value {
    fn get_str_field(&self, field: &str) -> AppResult<String> {
        Ok(
            self.get(field)
            .ok_or(anyhow!("expected {field} in {self}"))?
            .as_str()
            .ok_or(anyhow!("expected {field} in {self} to be string"))?
            .to_owned()
        )
    }

    fn get_opt_str_field(&self, field: &str) -> AppResult<Option<String>> {
        match self.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(AppError(anyhow!("expected {field} in {self} to be string or null"))),
        }
    }
}

pub struct Markdown<T>(pub T);

impl<T> Markdown<T>
where
    T: AsRef<str>
{
    pub fn to_html(&self) -> String {
        use pulldown_cmark::{Event, Options, Parser, Tag};

        // raw html in posts is shown as text
        let parser = Parser::new_ext(self.0.as_ref(), Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES)
            .map(|event| match event {
                Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
                Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
                    link_type,
                    dest_url: safe_dest(dest_url),
                    title,
                    id,
                }),
                Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
                    link_type,
                    dest_url: safe_dest(dest_url),
                    title,
                    id,
                }),
                _ => event,
            });

        let mut html_output = String::new();
        pulldown_cmark::html::push_html(&mut html_output, parser);
        html_output
    }
}

const LINK_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Relative destinations and the schemes in [`LINK_SCHEMES`] pass; anything
/// else becomes `#`. Browsers drop tabs and newlines inside a scheme, so
/// those are ignored when reading it.
fn safe_dest(dest_url: pulldown_cmark::CowStr<'_>) -> pulldown_cmark::CowStr<'_> {
    let cleaned: String = dest_url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();

    let scheme = cleaned
        .split_once(':')
        .map(|(scheme, _)| scheme)
        .filter(|scheme| !scheme.contains(['/', '?', '#']));

    match scheme {
        Some(scheme) if !LINK_SCHEMES.iter().any(|allowed| scheme.eq_ignore_ascii_case(allowed)) => {
            pulldown_cmark::CowStr::Borrowed("#")
        }
        _ => dest_url,
    }
}
