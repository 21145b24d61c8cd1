use serde::{Deserialize, Serialize};
use sqlx::{migrate::Migrator, sqlite::SqlitePoolOptions, FromRow, SqlitePool};

pub static MIGRATOR: Migrator = sqlx::migrate!();

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,

    // unique: email
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    pub typing: bool,
    pub author_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub author_id: i64,
    pub post_id: i64,
}

/// Body of `GET /writing/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TypingFlag {
    pub typing: bool,
}

/// A post as listed in the feed and drafts: the row plus its author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostWithAuthor {
    #[serde(flatten)]
    pub post: Post,
    pub author: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorName {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentWithAuthor {
    #[serde(flatten)]
    pub comment: Comment,
    pub author: AuthorName,
}

/// Everything the post page needs in one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub author: Option<User>,
    pub comments: Vec<CommentWithAuthor>,
}

pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let db_pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    MIGRATOR.run(&db_pool).await?;
    tracing::debug!("migrations applied to {database_url}");

    Ok(db_pool)
}

pub async fn user_by_email(db_pool: &SqlitePool, email: &str) -> sqlx::Result<Option<User>> {
    sqlx::query_as("SELECT * FROM users WHERE email=?")
        .bind(email)
        .fetch_optional(db_pool)
        .await
}

pub async fn user_by_id(db_pool: &SqlitePool, id: i64) -> sqlx::Result<Option<User>> {
    sqlx::query_as("SELECT * FROM users WHERE id=?")
        .bind(id)
        .fetch_optional(db_pool)
        .await
}

pub async fn with_authors(db_pool: &SqlitePool, posts: Vec<Post>) -> sqlx::Result<Vec<PostWithAuthor>> {
    let mut listed = Vec::with_capacity(posts.len());
    for post in posts {
        let author = match post.author_id {
            Some(author_id) => user_by_id(db_pool, author_id).await?,
            None => None,
        };
        listed.push(PostWithAuthor { post, author });
    }

    Ok(listed)
}

pub async fn posts_by_published(db_pool: &SqlitePool, published: bool) -> sqlx::Result<Vec<PostWithAuthor>> {
    let posts: Vec<Post> = sqlx::query_as("SELECT * FROM posts WHERE published=? ORDER BY id")
        .bind(published)
        .fetch_all(db_pool)
        .await?;

    with_authors(db_pool, posts).await
}

pub async fn post_detail(db_pool: &SqlitePool, id: i64) -> sqlx::Result<Option<PostDetail>> {
    let Some(post): Option<Post> = sqlx::query_as("SELECT * FROM posts WHERE id=?")
        .bind(id)
        .fetch_optional(db_pool)
        .await?
    else {
        return Ok(None);
    };

    let author = match post.author_id {
        Some(author_id) => user_by_id(db_pool, author_id).await?,
        None => None,
    };

    let rows: Vec<(i64, String, i64, i64, Option<String>)> = sqlx::query_as(
        "SELECT comments.id,comments.content,comments.author_id,comments.post_id,users.name \
         FROM comments JOIN users ON users.id=comments.author_id \
         WHERE comments.post_id=? ORDER BY comments.id",
    )
    .bind(id)
    .fetch_all(db_pool)
    .await?;

    let comments = rows
        .into_iter()
        .map(|(id, content, author_id, post_id, name)| CommentWithAuthor {
            comment: Comment { id, content, author_id, post_id },
            author: AuthorName { name },
        })
        .collect();

    Ok(Some(PostDetail { post, author, comments }))
}
