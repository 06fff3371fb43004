use bloglist::{
    blogs::repo::{BlogRepo, BlogUpdate, DEFAULT_AUTHOR, NewBlog},
    notes::repo::{NewNote, NoteRepo, NoteUpdate},
    store::{PgStore, Store, StoreError},
    users::repo::{NewUser, UserRepo},
};
use sqlx::PgPool;
use uuid::Uuid;

fn new_blog(title: &str, likes: Option<i64>) -> NewBlog {
    NewBlog {
        title: title.to_string(),
        author: None,
        url: format!("https://blogs.test/{title}"),
        likes,
    }
}

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        name: Some("Matti Luukkainen".to_string()),
        password_hash: "argon2-hash".to_string(),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn insert_fills_blog_defaults(pool: PgPool) {
    let store = PgStore::from_pool(pool);

    let blog = store
        .insert_blog(new_blog("defaults", None))
        .await
        .expect("failed to insert blog");

    assert_eq!(blog.author, DEFAULT_AUTHOR);
    assert_eq!(blog.likes, 0);
    assert_eq!(blog.version, 0);

    let found = store
        .find_blog(&blog.id.to_string())
        .await
        .expect("failed to find blog");
    assert_eq!(found, Some(blog));
}

#[sqlx::test(migrations = "./migrations")]
async fn blogs_are_listed_in_insertion_order(pool: PgPool) {
    let store = PgStore::from_pool(pool);

    for title in ["first", "second", "third"] {
        store
            .insert_blog(new_blog(title, Some(1)))
            .await
            .expect("failed to insert blog");
    }

    let titles: Vec<String> = store
        .list_blogs()
        .await
        .expect("failed to list blogs")
        .into_iter()
        .map(|blog| blog.title)
        .collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn partial_update_keeps_omitted_fields(pool: PgPool) {
    let store = PgStore::from_pool(pool);
    let blog = store
        .insert_blog(new_blog("partial", Some(3)))
        .await
        .expect("failed to insert blog");

    let updated = store
        .update_blog(
            &blog.id.to_string(),
            BlogUpdate {
                likes: Some(42),
                ..Default::default()
            },
        )
        .await
        .expect("failed to update blog")
        .expect("blog should exist");

    assert_eq!(updated.likes, 42);
    assert_eq!(updated.title, blog.title);
    assert_eq!(updated.url, blog.url);
    assert_eq!(updated.author, blog.author);
    assert_eq!(updated.version, blog.version + 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_ids_update_nothing_and_delete_quietly(pool: PgPool) {
    let store = PgStore::from_pool(pool);
    let unknown = Uuid::new_v4().to_string();

    let updated = store
        .update_blog(
            &unknown,
            BlogUpdate {
                likes: Some(1),
                ..Default::default()
            },
        )
        .await
        .expect("failed to update blog");
    assert_eq!(updated, None);

    let updated = store
        .update_note(&unknown, NoteUpdate::default())
        .await
        .expect("failed to update note");
    assert!(updated.is_none());

    store
        .delete_blog(&unknown)
        .await
        .expect("deleting an unknown blog should succeed");
    assert!(store.find_blog(&unknown).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn malformed_ids_are_rejected_before_querying(pool: PgPool) {
    let store = PgStore::from_pool(pool);

    assert!(matches!(
        store.find_blog("5a422aa71b54a676234d17f8").await,
        Err(StoreError::MalformedId(_))
    ));
    assert!(matches!(
        store.delete_blog("not-an-id").await,
        Err(StoreError::MalformedId(_))
    ));
    assert!(matches!(
        store.find_note("42").await,
        Err(StoreError::MalformedId(_))
    ));
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_username_is_a_duplicate_error(pool: PgPool) {
    let store = PgStore::from_pool(pool);

    store
        .insert_user(new_user("mluukkai"))
        .await
        .expect("failed to insert user");
    let err = store
        .insert_user(new_user("mluukkai"))
        .await
        .expect_err("second insert should fail");

    assert!(matches!(err, StoreError::Duplicate(_)), "got {err:?}");
    assert_eq!(store.list_users().await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn constraint_violations_are_validation_errors(pool: PgPool) {
    let check = sqlx::query("INSERT INTO blogs (id, title, url) VALUES ($1, '', 'u')")
        .bind(Uuid::new_v4())
        .execute(&pool)
        .await
        .expect_err("empty title should violate the check");
    assert!(matches!(
        StoreError::from(check),
        StoreError::Validation(_)
    ));

    let not_null = sqlx::query("INSERT INTO blogs (id, title) VALUES ($1, 't')")
        .bind(Uuid::new_v4())
        .execute(&pool)
        .await
        .expect_err("missing url should violate not null");
    assert!(matches!(
        StoreError::from(not_null),
        StoreError::Validation(_)
    ));
}

#[sqlx::test(migrations = "./migrations")]
async fn note_keeps_its_creator_and_updates_partially(pool: PgPool) {
    let store = PgStore::from_pool(pool);
    let user = store
        .insert_user(new_user("hellas"))
        .await
        .expect("failed to insert user");

    let note = store
        .insert_note(NewNote {
            content: "HTML is easy".to_string(),
            important: None,
            user_id: Some(user.id),
        })
        .await
        .expect("failed to insert note");
    assert!(!note.important);
    assert_eq!(note.user_id, Some(user.id));

    let updated = store
        .update_note(
            &note.id.to_string(),
            NoteUpdate {
                important: Some(true),
                ..Default::default()
            },
        )
        .await
        .expect("failed to update note")
        .expect("note should exist");
    assert!(updated.important);
    assert_eq!(updated.content, "HTML is easy");
    assert_eq!(updated.user_id, Some(user.id));
}

#[sqlx::test(migrations = "./migrations")]
async fn ping_reaches_the_database(pool: PgPool) {
    let store = PgStore::from_pool(pool);
    store.ping().await.expect("ping failed");
}
