use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::{comment, follows, media, post, profile, user};

// --- User ---

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = user)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: NaiveDateTime,
    pub is_active: bool,
    pub last_login: Option<NaiveDateTime>,
}

/// `password` is stored as given; callers hash it first.
#[derive(Debug, Clone, Insertable, Validate, Deserialize)]
#[diesel(table_name = user)]
pub struct NewUser {
    #[validate(length(max = 50))]
    pub user_name: String,
    #[validate(length(max = 250))]
    pub email: String,
    #[validate(length(max = 128))]
    pub password: String,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl NewUser {
    pub fn new(
        user_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            email: email.into(),
            password: password.into(),
            created_at,
            is_active: None,
        }
    }
}

#[derive(Debug, Clone, Default, AsChangeset, Validate, Deserialize)]
#[diesel(table_name = user)]
pub struct UpdateUser {
    #[validate(length(max = 250))]
    pub email: Option<String>,
    pub is_active: Option<bool>,
    pub last_login: Option<NaiveDateTime>,
}

impl UpdateUser {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.is_active.is_none() && self.last_login.is_none()
    }
}

// --- Profile ---

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = profile)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub biography: Option<String>,
    pub facebook: Option<String>,
    pub avatar: Option<String>,
    pub user_id: i32,
}

#[derive(Debug, Clone, Insertable, Validate, Deserialize)]
#[diesel(table_name = profile)]
pub struct NewProfile {
    pub user_id: i32,
    #[validate(length(max = 120))]
    pub name: String,
    pub biography: Option<String>,
    #[validate(length(max = 255))]
    pub facebook: Option<String>,
    #[validate(length(max = 255))]
    pub avatar: Option<String>,
}

impl NewProfile {
    pub fn new(user_id: i32, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
            biography: None,
            facebook: None,
            avatar: None,
        }
    }
}

#[derive(Debug, Clone, Default, AsChangeset, Validate, Deserialize)]
#[diesel(table_name = profile)]
pub struct UpdateProfile {
    #[validate(length(max = 120))]
    pub name: Option<String>,
    pub biography: Option<String>,
    #[validate(length(max = 255))]
    pub facebook: Option<String>,
    #[validate(length(max = 255))]
    pub avatar: Option<String>,
}

impl UpdateProfile {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.biography.is_none()
            && self.facebook.is_none()
            && self.avatar.is_none()
    }
}

// --- Post ---

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = post)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Post {
    pub id: i32,
    pub caption: Option<String>,
    pub location: Option<String>,
    pub content_text: Option<String>,
    pub published_at: NaiveDateTime,
    pub user_id: i32,
}

/// Leave `published_at` empty to stamp the post with its insertion time.
#[derive(Debug, Clone, Default, Insertable, Validate, Deserialize)]
#[diesel(table_name = post)]
pub struct NewPost {
    pub user_id: i32,
    #[validate(length(max = 220))]
    pub caption: Option<String>,
    #[validate(length(max = 255))]
    pub location: Option<String>,
    pub content_text: Option<String>,
    #[serde(default)]
    pub published_at: Option<NaiveDateTime>,
}

impl NewPost {
    pub fn new(user_id: i32) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }
}

// --- Media ---

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = media)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Media {
    pub id: i32,
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: String,
    pub post_id: i32,
}

#[derive(Debug, Clone, Insertable, Validate, Deserialize)]
#[diesel(table_name = media)]
pub struct NewMedia {
    pub post_id: i32,
    #[serde(rename = "type")]
    #[validate(length(max = 120))]
    pub media_type: String,
    #[validate(length(max = 512))]
    pub url: String,
}

impl NewMedia {
    pub fn new(post_id: i32, media_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            post_id,
            media_type: media_type.into(),
            url: url.into(),
        }
    }
}

// --- Comment ---

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = comment)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Comment {
    pub id: i32,
    pub comment_text: String,
    pub created_at: NaiveDateTime,
    pub user_id: i32,
    pub post_id: i32,
}

/// `comment_text` is unbounded TEXT, so no width rule applies.
#[derive(Debug, Clone, Insertable, Validate, Deserialize)]
#[diesel(table_name = comment)]
pub struct NewComment {
    pub user_id: i32,
    pub post_id: i32,
    pub comment_text: String,
    pub created_at: NaiveDateTime,
}

impl NewComment {
    pub fn new(user_id: i32, post_id: i32, comment_text: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            user_id,
            post_id,
            comment_text: comment_text.into(),
            created_at,
        }
    }
}

// --- Follow ---

/// A directed edge: `follower_id` follows `followed_id`.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, Serialize)]
#[diesel(table_name = follows)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Follow {
    pub follower_id: i32,
    pub followed_id: i32,
    pub created_at: NaiveDateTime,
}
