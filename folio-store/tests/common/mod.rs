#![allow(dead_code)]

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use folio_shared::clients::db::configure_connection;
use folio_store::models::{NewPost, NewUser, Post, User};
use folio_store::services::{post_service, user_service};
use folio_store::sql::apply_schema;

pub fn connection() -> SqliteConnection {
    let mut conn = SqliteConnection::establish(":memory:").expect("open in-memory database");
    configure_connection(&mut conn, Duration::from_secs(1)).expect("configure connection");
    apply_schema(&mut conn).expect("apply schema");
    conn
}

pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("valid timestamp")
}

pub fn new_user(name: &str) -> NewUser {
    NewUser::new(name, format!("{name}@example.com"), "argon2-hash", at(9, 0))
}

pub fn user(conn: &mut SqliteConnection, name: &str) -> User {
    user_service::create_user(conn, new_user(name)).expect("create user")
}

pub fn post(conn: &mut SqliteConnection, author: &User) -> Post {
    post_service::create_post(conn, NewPost::new(author.id)).expect("create post")
}
