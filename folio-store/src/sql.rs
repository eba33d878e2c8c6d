use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use folio_shared::errors::AppResult;

use crate::schema::{comment, follows, media, post, profile, user};

/// Table layout for the whole store. Every owning foreign key cascades on
/// delete, so removing a user or post never leaves orphaned children.
pub const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS "user" (
        id INTEGER NOT NULL PRIMARY KEY,
        user_name VARCHAR(50) NOT NULL UNIQUE,
        email VARCHAR(250) NOT NULL UNIQUE,
        password VARCHAR(128) NOT NULL,
        created_at TIMESTAMP NOT NULL,
        is_active BOOLEAN NOT NULL DEFAULT 1,
        last_login TIMESTAMP
    );

    CREATE TABLE IF NOT EXISTS profile (
        id INTEGER NOT NULL PRIMARY KEY,
        name VARCHAR(120) NOT NULL,
        biography TEXT,
        facebook VARCHAR(255),
        avatar VARCHAR(255),
        user_id INTEGER NOT NULL UNIQUE,
        FOREIGN KEY(user_id) REFERENCES "user"(id) ON DELETE CASCADE
    );

    CREATE TABLE IF NOT EXISTS post (
        id INTEGER NOT NULL PRIMARY KEY,
        caption VARCHAR(220),
        location VARCHAR(255),
        content_text TEXT,
        published_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        user_id INTEGER NOT NULL,
        FOREIGN KEY(user_id) REFERENCES "user"(id) ON DELETE CASCADE
    );

    CREATE TABLE IF NOT EXISTS media (
        id INTEGER NOT NULL PRIMARY KEY,
        type VARCHAR(120) NOT NULL,
        url VARCHAR(512) NOT NULL,
        post_id INTEGER NOT NULL,
        FOREIGN KEY(post_id) REFERENCES post(id) ON DELETE CASCADE
    );

    CREATE TABLE IF NOT EXISTS comment (
        id INTEGER NOT NULL PRIMARY KEY,
        comment_text TEXT NOT NULL,
        created_at TIMESTAMP NOT NULL,
        user_id INTEGER NOT NULL,
        post_id INTEGER NOT NULL,
        FOREIGN KEY(user_id) REFERENCES "user"(id) ON DELETE CASCADE,
        FOREIGN KEY(post_id) REFERENCES post(id) ON DELETE CASCADE
    );

    CREATE TABLE IF NOT EXISTS follows (
        follower_id INTEGER NOT NULL,
        followed_id INTEGER NOT NULL,
        created_at TIMESTAMP NOT NULL,
        PRIMARY KEY(follower_id, followed_id),
        FOREIGN KEY(follower_id) REFERENCES "user"(id) ON DELETE CASCADE,
        FOREIGN KEY(followed_id) REFERENCES "user"(id) ON DELETE CASCADE
    );

    CREATE INDEX IF NOT EXISTS idx_post_user_id ON post(user_id);
    CREATE INDEX IF NOT EXISTS idx_media_post_id ON media(post_id);
    CREATE INDEX IF NOT EXISTS idx_comment_post_id ON comment(post_id);
    CREATE INDEX IF NOT EXISTS idx_comment_user_id ON comment(user_id);
    CREATE INDEX IF NOT EXISTS idx_follows_followed_id ON follows(followed_id);
"#;

pub fn apply_schema(conn: &mut SqliteConnection) -> QueryResult<()> {
    conn.batch_execute(SCHEMA)?;
    tracing::debug!("schema applied");
    Ok(())
}

/// Row count per table, in declaration order.
pub fn table_counts(conn: &mut SqliteConnection) -> AppResult<Vec<(&'static str, i64)>> {
    Ok(vec![
        ("user", user::table.count().get_result(conn)?),
        ("profile", profile::table.count().get_result(conn)?),
        ("post", post::table.count().get_result(conn)?),
        ("media", media::table.count().get_result(conn)?),
        ("comment", comment::table.count().get_result(conn)?),
        ("follows", follows::table.count().get_result(conn)?),
    ])
}
