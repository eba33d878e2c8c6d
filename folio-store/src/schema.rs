// Mirrors the DDL in `sql.rs`.

diesel::table! {
    user (id) {
        id -> Integer,
        #[max_length = 50]
        user_name -> Text,
        #[max_length = 250]
        email -> Text,
        #[max_length = 128]
        password -> Text,
        created_at -> Timestamp,
        is_active -> Bool,
        last_login -> Nullable<Timestamp>,
    }
}

diesel::table! {
    profile (id) {
        id -> Integer,
        #[max_length = 120]
        name -> Text,
        biography -> Nullable<Text>,
        #[max_length = 255]
        facebook -> Nullable<Text>,
        #[max_length = 255]
        avatar -> Nullable<Text>,
        user_id -> Integer,
    }
}

diesel::table! {
    post (id) {
        id -> Integer,
        #[max_length = 220]
        caption -> Nullable<Text>,
        #[max_length = 255]
        location -> Nullable<Text>,
        content_text -> Nullable<Text>,
        published_at -> Timestamp,
        user_id -> Integer,
    }
}

diesel::table! {
    media (id) {
        id -> Integer,
        #[sql_name = "type"]
        #[max_length = 120]
        media_type -> Text,
        #[max_length = 512]
        url -> Text,
        post_id -> Integer,
    }
}

diesel::table! {
    comment (id) {
        id -> Integer,
        comment_text -> Text,
        created_at -> Timestamp,
        user_id -> Integer,
        post_id -> Integer,
    }
}

diesel::table! {
    follows (follower_id, followed_id) {
        follower_id -> Integer,
        followed_id -> Integer,
        created_at -> Timestamp,
    }
}

diesel::joinable!(profile -> user (user_id));
diesel::joinable!(post -> user (user_id));
diesel::joinable!(media -> post (post_id));
diesel::joinable!(comment -> user (user_id));
diesel::joinable!(comment -> post (post_id));

diesel::allow_tables_to_appear_in_same_query!(
    user,
    profile,
    post,
    media,
    comment,
    follows,
);
