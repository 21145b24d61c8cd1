use axum::{http::{header, StatusCode}, response::{Html, IntoResponse, Response}, Json};

#[macro_export]
macro_rules! include_res {
    (bytes, $p:expr) => {
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

pub const USER_MISSING: &str = "user does not exist";

/// The one failure the API models: the author email matched nobody.
pub fn user_missing() -> Response {
    (StatusCode::NOT_FOUND, Json(USER_MISSING)).into_response()
}

pub fn sorry(what: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(
            fill(include_res!(str, "/pages/sorry.html"), &[("what", what)])
        ),
    )
        .into_response()
}

pub async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        include_res!(str, "/style.css"),
    )
}

/// Fills `{key}` placeholders in one pass over `template`. Spliced values
/// are never rescanned; unknown `{...}` runs (script blocks) are kept as is.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut filled = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        filled.push_str(&rest[..start]);
        rest = &rest[start..];

        let value = rest.find('}').and_then(|end| {
            let key = &rest[1..end];
            values.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (end, *value))
        });

        match value {
            Some((end, value)) => {
                filled.push_str(value);
                rest = &rest[end + 1..];
            }
            None => {
                filled.push('{');
                rest = &rest[1..];
            }
        }
    }

    filled.push_str(rest);
    filled
}

/// Minimal escaping for text spliced into templates.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_missing_is_json_string_404() {
        let response = user_missing();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[test]
    fn fill_does_not_rescan_spliced_values() {
        let filled = fill(
            "<h2>{title}</h2><p>{author}</p>{comments}",
            &[("title", "See {author} and {comments}"), ("author", "Ann"), ("comments", "<div>c</div>")],
        );
        assert_eq!(filled, "<h2>See {author} and {comments}</h2><p>Ann</p><div>c</div>");
    }

    #[test]
    fn fill_keeps_unknown_braces() {
        let filled = fill("if (x) { go(`/p/${postId}`); } {id}", &[("id", "7")]);
        assert_eq!(filled, "if (x) { go(`/p/${postId}`); } 7");
    }

    #[test]
    fn escape_handles_markup() {
        assert_eq!(escape("<a href=\"x\">&</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }
}
