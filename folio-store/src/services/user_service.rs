use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use validator::Validate;

use folio_shared::errors::{AppError, AppResult};

use crate::models::{NewUser, UpdateUser, User};
use crate::schema::user;

use super::require;

/// Inserts a user. `is_active` defaults to `true` when unset.
pub fn create_user(conn: &mut SqliteConnection, mut new_user: NewUser) -> AppResult<User> {
    require("user_name", &new_user.user_name)?;
    require("email", &new_user.email)?;
    require("password", &new_user.password)?;
    new_user.validate()?;

    new_user.is_active.get_or_insert(true);

    let created = diesel::insert_into(user::table)
        .values(&new_user)
        .returning(User::as_returning())
        .get_result(conn)?;

    tracing::info!(user_id = created.id, user_name = %created.user_name, "user created");
    Ok(created)
}

pub fn find_user(conn: &mut SqliteConnection, id: i32) -> AppResult<User> {
    user::table
        .find(id)
        .select(User::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| AppError::not_found(format!("user {id} not found")))
}

pub fn find_by_user_name(conn: &mut SqliteConnection, user_name: &str) -> AppResult<Option<User>> {
    Ok(user::table
        .filter(user::user_name.eq(user_name))
        .select(User::as_select())
        .first(conn)
        .optional()?)
}

pub fn find_by_email(conn: &mut SqliteConnection, email: &str) -> AppResult<Option<User>> {
    Ok(user::table
        .filter(user::email.eq(email))
        .select(User::as_select())
        .first(conn)
        .optional()?)
}

pub fn record_login(conn: &mut SqliteConnection, id: i32, at: NaiveDateTime) -> AppResult<User> {
    let updated = diesel::update(user::table.find(id))
        .set(user::last_login.eq(Some(at)))
        .returning(User::as_returning())
        .get_result(conn)
        .optional()?
        .ok_or_else(|| AppError::not_found(format!("user {id} not found")))?;

    tracing::debug!(user_id = id, last_login = %at, "login recorded");
    Ok(updated)
}

pub fn set_active(conn: &mut SqliteConnection, id: i32, active: bool) -> AppResult<User> {
    let updated = diesel::update(user::table.find(id))
        .set(user::is_active.eq(active))
        .returning(User::as_returning())
        .get_result(conn)
        .optional()?
        .ok_or_else(|| AppError::not_found(format!("user {id} not found")))?;

    tracing::info!(user_id = id, is_active = active, "user activity changed");
    Ok(updated)
}

pub fn update_user(conn: &mut SqliteConnection, id: i32, changes: UpdateUser) -> AppResult<User> {
    if let Some(email) = &changes.email {
        require("email", email)?;
    }
    changes.validate()?;

    if changes.is_empty() {
        return find_user(conn, id);
    }

    let updated = diesel::update(user::table.find(id))
        .set(&changes)
        .returning(User::as_returning())
        .get_result(conn)
        .optional()?
        .ok_or_else(|| AppError::not_found(format!("user {id} not found")))?;

    tracing::info!(user_id = id, "user updated");
    Ok(updated)
}

/// Removes the user together with their profile, posts, comments and
/// follow edges. Returns `false` if no such user existed.
pub fn delete_user(conn: &mut SqliteConnection, id: i32) -> AppResult<bool> {
    let deleted = diesel::delete(user::table.find(id)).execute(conn)?;
    if deleted > 0 {
        tracing::info!(user_id = id, "user deleted");
    }
    Ok(deleted > 0)
}
