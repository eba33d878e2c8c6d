use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use validator::Validate;

use folio_shared::errors::AppResult;

use crate::models::{Comment, NewComment, Post, User};
use crate::schema::comment;

use super::{post_service, require, user_service};

pub fn create_comment(conn: &mut SqliteConnection, new_comment: NewComment) -> AppResult<Comment> {
    require("comment_text", &new_comment.comment_text)?;
    new_comment.validate()?;

    let created = diesel::insert_into(comment::table)
        .values(&new_comment)
        .returning(Comment::as_returning())
        .get_result(conn)?;

    tracing::info!(
        comment_id = created.id,
        post_id = created.post_id,
        user_id = created.user_id,
        "comment created"
    );
    Ok(created)
}

/// Comments on a post, oldest first.
pub fn comments_for_post(conn: &mut SqliteConnection, post_id: i32) -> AppResult<Vec<Comment>> {
    Ok(comment::table
        .filter(comment::post_id.eq(post_id))
        .order((comment::created_at.asc(), comment::id.asc()))
        .select(Comment::as_select())
        .load(conn)?)
}

/// Comments written by a user, newest first.
pub fn comments_by_user(conn: &mut SqliteConnection, user_id: i32) -> AppResult<Vec<Comment>> {
    Ok(comment::table
        .filter(comment::user_id.eq(user_id))
        .order((comment::created_at.desc(), comment::id.desc()))
        .select(Comment::as_select())
        .load(conn)?)
}

pub fn comment_author(conn: &mut SqliteConnection, comment: &Comment) -> AppResult<User> {
    user_service::find_user(conn, comment.user_id)
}

pub fn comment_post(conn: &mut SqliteConnection, comment: &Comment) -> AppResult<Post> {
    post_service::find_post(conn, comment.post_id)
}

pub fn delete_comment(conn: &mut SqliteConnection, id: i32) -> AppResult<bool> {
    let deleted = diesel::delete(comment::table.find(id)).execute(conn)?;
    Ok(deleted > 0)
}
