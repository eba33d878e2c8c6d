use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use validator::Validate;

use folio_shared::errors::{AppError, AppResult};

use crate::models::{NewProfile, Profile, UpdateProfile, User};
use crate::schema::profile;

use super::{require, user_service};

/// Attaches a profile to a user. A second profile for the same user is
/// rejected by the unique `user_id` column.
pub fn create_profile(conn: &mut SqliteConnection, new_profile: NewProfile) -> AppResult<Profile> {
    require("name", &new_profile.name)?;
    new_profile.validate()?;

    let created = diesel::insert_into(profile::table)
        .values(&new_profile)
        .returning(Profile::as_returning())
        .get_result(conn)?;

    tracing::info!(
        profile_id = created.id,
        user_id = created.user_id,
        "profile created"
    );
    Ok(created)
}

pub fn profile_for_user(conn: &mut SqliteConnection, user_id: i32) -> AppResult<Option<Profile>> {
    Ok(profile::table
        .filter(profile::user_id.eq(user_id))
        .select(Profile::as_select())
        .first(conn)
        .optional()?)
}

pub fn update_profile(
    conn: &mut SqliteConnection,
    user_id: i32,
    changes: UpdateProfile,
) -> AppResult<Profile> {
    if let Some(name) = &changes.name {
        require("name", name)?;
    }
    changes.validate()?;

    if changes.is_empty() {
        return profile_for_user(conn, user_id)?
            .ok_or_else(|| AppError::not_found(format!("user {user_id} has no profile")));
    }

    let updated = diesel::update(profile::table.filter(profile::user_id.eq(user_id)))
        .set(&changes)
        .returning(Profile::as_returning())
        .get_result(conn)
        .optional()?
        .ok_or_else(|| AppError::not_found(format!("user {user_id} has no profile")))?;

    tracing::info!(profile_id = updated.id, user_id, "profile updated");
    Ok(updated)
}

pub fn profile_owner(conn: &mut SqliteConnection, profile: &Profile) -> AppResult<User> {
    user_service::find_user(conn, profile.user_id)
}
