mod common;

use folio_shared::ErrorCode;
use folio_store::models::{NewComment, NewMedia, NewProfile};
use folio_store::services::{
    comment_service, follow_service, media_service, post_service, profile_service, user_service,
};
use folio_store::sql;

use common::{at, connection, post, user};

#[test]
fn deleting_a_user_removes_everything_they_own() {
    let mut conn = connection();
    let alice = user(&mut conn, "alice");
    let bob = user(&mut conn, "bob");

    profile_service::create_profile(&mut conn, NewProfile::new(alice.id, "Alice")).unwrap();
    let alices_post = post(&mut conn, &alice);
    let bobs_post = post(&mut conn, &bob);
    media_service::attach_media(&mut conn, NewMedia::new(alices_post.id, "image", "https://x/a.jpg")).unwrap();
    comment_service::create_comment(&mut conn, NewComment::new(bob.id, alices_post.id, "hi", at(9, 5))).unwrap();
    comment_service::create_comment(&mut conn, NewComment::new(alice.id, bobs_post.id, "yo", at(9, 6))).unwrap();
    follow_service::follow(&mut conn, alice.id, bob.id).unwrap();
    follow_service::follow(&mut conn, bob.id, alice.id).unwrap();

    assert!(user_service::delete_user(&mut conn, alice.id).unwrap());

    let counts = sql::table_counts(&mut conn).unwrap();
    assert_eq!(
        counts,
        vec![
            ("user", 1),
            ("profile", 0),
            ("post", 1),
            ("media", 0),
            ("comment", 0),
            ("follows", 0),
        ]
    );
    assert_eq!(post_service::find_post(&mut conn, bobs_post.id).unwrap(), bobs_post);
    assert!(follow_service::following(&mut conn, bob.id).unwrap().is_empty());

    let err = user_service::find_user(&mut conn, alice.id).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert!(!user_service::delete_user(&mut conn, alice.id).unwrap());
}

#[test]
fn deleting_a_post_removes_its_media_and_comments() {
    let mut conn = connection();
    let alice = user(&mut conn, "alice");
    let created = post(&mut conn, &alice);
    media_service::attach_media(&mut conn, NewMedia::new(created.id, "video", "https://x/v.mp4")).unwrap();
    comment_service::create_comment(&mut conn, NewComment::new(alice.id, created.id, "first", at(9, 1))).unwrap();

    assert!(post_service::delete_post(&mut conn, created.id).unwrap());

    assert!(media_service::media_for_post(&mut conn, created.id).unwrap().is_empty());
    assert!(comment_service::comments_for_post(&mut conn, created.id).unwrap().is_empty());
    assert_eq!(user_service::find_user(&mut conn, alice.id).unwrap(), alice);
}

#[test]
fn schema_can_be_applied_twice() {
    let mut conn = connection();
    user(&mut conn, "alice");
    sql::apply_schema(&mut conn).unwrap();
    assert_eq!(sql::table_counts(&mut conn).unwrap()[0], ("user", 1));
}
