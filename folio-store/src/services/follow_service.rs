use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use folio_shared::errors::AppResult;

use crate::models::{Follow, User};
use crate::schema::{follows, user};

use super::now;

// `follows` is the only record of the graph: both directions below are
// queries over it, read in opposite senses.

/// Records that `follower_id` follows `followed_id`, stamped now.
pub fn follow(conn: &mut SqliteConnection, follower_id: i32, followed_id: i32) -> AppResult<Follow> {
    follow_at(conn, follower_id, followed_id, now())
}

/// Same as [`follow`] with an explicit creation time. Repeating an existing
/// edge violates the composite primary key.
pub fn follow_at(
    conn: &mut SqliteConnection,
    follower_id: i32,
    followed_id: i32,
    created_at: NaiveDateTime,
) -> AppResult<Follow> {
    let edge = Follow {
        follower_id,
        followed_id,
        created_at,
    };

    let created = diesel::insert_into(follows::table)
        .values(&edge)
        .returning(Follow::as_returning())
        .get_result(conn)?;

    tracing::info!(follower_id, followed_id, "follow created");
    Ok(created)
}

pub fn unfollow(conn: &mut SqliteConnection, follower_id: i32, followed_id: i32) -> AppResult<bool> {
    let deleted = diesel::delete(follows::table.find((follower_id, followed_id))).execute(conn)?;
    if deleted > 0 {
        tracing::info!(follower_id, followed_id, "follow removed");
    }
    Ok(deleted > 0)
}

pub fn is_following(conn: &mut SqliteConnection, follower_id: i32, followed_id: i32) -> AppResult<bool> {
    let count: i64 = follows::table
        .find((follower_id, followed_id))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Users that `user_id` follows, most recently followed first.
pub fn following(conn: &mut SqliteConnection, user_id: i32) -> AppResult<Vec<User>> {
    Ok(follows::table
        .inner_join(user::table.on(user::id.eq(follows::followed_id)))
        .filter(follows::follower_id.eq(user_id))
        .order((follows::created_at.desc(), user::id.desc()))
        .select(User::as_select())
        .load(conn)?)
}

/// Users following `user_id`, most recent follower first.
pub fn followers(conn: &mut SqliteConnection, user_id: i32) -> AppResult<Vec<User>> {
    Ok(follows::table
        .inner_join(user::table.on(user::id.eq(follows::follower_id)))
        .filter(follows::followed_id.eq(user_id))
        .order((follows::created_at.desc(), user::id.desc()))
        .select(User::as_select())
        .load(conn)?)
}

pub fn following_count(conn: &mut SqliteConnection, user_id: i32) -> AppResult<i64> {
    Ok(follows::table
        .filter(follows::follower_id.eq(user_id))
        .count()
        .get_result(conn)?)
}

pub fn follower_count(conn: &mut SqliteConnection, user_id: i32) -> AppResult<i64> {
    Ok(follows::table
        .filter(follows::followed_id.eq(user_id))
        .count()
        .get_result(conn)?)
}
