use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use validator::Validate;

use folio_shared::errors::{AppError, AppResult};
use folio_shared::types::{Paginated, PaginationParams};

use crate::models::{NewPost, Post, User};
use crate::schema::post;

use super::{now, user_service};

/// Inserts a post, stamping `published_at` with the current time when the
/// caller left it empty.
pub fn create_post(conn: &mut SqliteConnection, mut new_post: NewPost) -> AppResult<Post> {
    new_post.validate()?;
    new_post.published_at.get_or_insert_with(now);

    let created = diesel::insert_into(post::table)
        .values(&new_post)
        .returning(Post::as_returning())
        .get_result(conn)?;

    tracing::info!(post_id = created.id, user_id = created.user_id, "post created");
    Ok(created)
}

pub fn find_post(conn: &mut SqliteConnection, id: i32) -> AppResult<Post> {
    post::table
        .find(id)
        .select(Post::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| AppError::not_found(format!("post {id} not found")))
}

/// A user's posts, newest first.
pub fn posts_by_user(
    conn: &mut SqliteConnection,
    user_id: i32,
    params: &PaginationParams,
) -> AppResult<Paginated<Post>> {
    let total: i64 = post::table
        .filter(post::user_id.eq(user_id))
        .count()
        .get_result(conn)?;

    let items = post::table
        .filter(post::user_id.eq(user_id))
        .order((post::published_at.desc(), post::id.desc()))
        .limit(params.limit())
        .offset(params.offset())
        .select(Post::as_select())
        .load(conn)?;

    Ok(Paginated::new(items, total as u64, params))
}

pub fn post_author(conn: &mut SqliteConnection, post: &Post) -> AppResult<User> {
    user_service::find_user(conn, post.user_id)
}

/// Removes the post with its media and comments.
pub fn delete_post(conn: &mut SqliteConnection, id: i32) -> AppResult<bool> {
    let deleted = diesel::delete(post::table.find(id)).execute(conn)?;
    if deleted > 0 {
        tracing::info!(post_id = id, "post deleted");
    }
    Ok(deleted > 0)
}
