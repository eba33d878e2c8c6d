use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use validator::Validate;

use folio_shared::errors::AppResult;

use crate::models::{Media, NewMedia, Post};
use crate::schema::media;

use super::{post_service, require};

pub fn attach_media(conn: &mut SqliteConnection, new_media: NewMedia) -> AppResult<Media> {
    require("type", &new_media.media_type)?;
    require("url", &new_media.url)?;
    new_media.validate()?;

    let created = diesel::insert_into(media::table)
        .values(&new_media)
        .returning(Media::as_returning())
        .get_result(conn)?;

    tracing::info!(
        media_id = created.id,
        post_id = created.post_id,
        media_type = %created.media_type,
        "media attached"
    );
    Ok(created)
}

/// Attachments of a post in the order they were added.
pub fn media_for_post(conn: &mut SqliteConnection, post_id: i32) -> AppResult<Vec<Media>> {
    Ok(media::table
        .filter(media::post_id.eq(post_id))
        .order(media::id.asc())
        .select(Media::as_select())
        .load(conn)?)
}

pub fn media_post(conn: &mut SqliteConnection, media: &Media) -> AppResult<Post> {
    post_service::find_post(conn, media.post_id)
}

pub fn delete_media(conn: &mut SqliteConnection, id: i32) -> AppResult<bool> {
    let deleted = diesel::delete(media::table.find(id)).execute(conn)?;
    Ok(deleted > 0)
}
