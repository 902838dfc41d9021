// tests/article_lifecycle.rs
use blog_admin::application::{
    commands::articles::{CreateArticleCommand, UpdateArticleCommand, UpdateArticleStatusCommand},
    error::ApplicationError,
};
use blog_admin::domain::article::ArticleStatus;
use blog_admin::domain::errors::DomainError;
use chrono::{DateTime, Duration, Utc};

mod support;

use support::{TestApp, fixed_now};

const AUTHOR: &str = "65f1a2b3c4d5e6f708091a00";

fn command(title: &str, status: Option<&str>) -> CreateArticleCommand {
    CreateArticleCommand {
        title: title.into(),
        content: "body".into(),
        author_id: AUTHOR.into(),
        category_id: None,
        status: status.map(str::to_string),
        published_at: None,
    }
}

async fn create(app: &TestApp, command: CreateArticleCommand) -> String {
    let created = app
        .services
        .article_commands
        .create_article(command)
        .await
        .unwrap();
    assert!(!created.already_exists(), "unexpected dedup hit: {created:?}");
    created.id
}

async fn set_status(app: &TestApp, id: &str, status: &str) -> u64 {
    app.services
        .article_commands
        .update_article_status(UpdateArticleStatusCommand {
            id: id.into(),
            status: Some(status.into()),
        })
        .await
        .unwrap()
        .modified_count
}

#[tokio::test]
async fn create_without_status_is_a_draft_without_publish_date() {
    let app = TestApp::new();
    let id = create(&app, command("Plain", None)).await;

    let stored = app.store.article(&id).unwrap();
    assert_eq!(stored.status, ArticleStatus::Draft);
    assert!(stored.published_at.is_none());
    assert_eq!(stored.created_at, fixed_now());
    assert_eq!(stored.updated_at, fixed_now());
}

#[tokio::test]
async fn create_published_without_date_stamps_now() {
    let app = TestApp::new();
    let id = create(&app, command("Live", Some("Опубликовано"))).await;

    let stored = app.store.article(&id).unwrap();
    assert_eq!(stored.published_at, Some(fixed_now()));
}

#[tokio::test]
async fn create_published_keeps_supplied_date() {
    let app = TestApp::new();
    let at: DateTime<Utc> = "2023-06-01T10:00:00Z".parse().unwrap();
    let mut cmd = command("Backdated", Some("Опубликовано"));
    cmd.published_at = Some(at);
    let id = create(&app, cmd).await;

    assert_eq!(app.store.article(&id).unwrap().published_at, Some(at));
}

#[tokio::test]
async fn non_published_create_drops_supplied_publish_date() {
    let app = TestApp::new();
    for (title, status) in [("Draft", "Черновик"), ("Pending", "На модерации")] {
        let mut cmd = command(title, Some(status));
        cmd.published_at = Some(fixed_now() - Duration::days(3));
        let id = create(&app, cmd).await;
        assert!(app.store.article(&id).unwrap().published_at.is_none());
    }
}

#[tokio::test]
async fn unknown_status_is_rejected_before_any_write() {
    let app = TestApp::new();
    let err = app
        .services
        .article_commands
        .create_article(command("Odd", Some("archived")))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
    assert_eq!(app.store.article_count(), 0);
}

#[tokio::test]
async fn duplicate_title_for_same_author_returns_existing_id() {
    let app = TestApp::new();
    let first = create(&app, command("Same", None)).await;

    let second = app
        .services
        .article_commands
        .create_article(command("Same", Some("Опубликовано")))
        .await
        .unwrap();

    assert_eq!(second.id, first);
    assert_eq!(
        second.error.as_deref(),
        Some("Article with this title by this author already exists")
    );
    assert_eq!(app.store.article_count(), 1);
}

#[tokio::test]
async fn publish_then_unpublish_round_trip() {
    let app = TestApp::new();
    let id = create(&app, command("Round trip", Some("Черновик"))).await;

    app.clock.advance(Duration::hours(1));
    assert_eq!(set_status(&app, &id, "Опубликовано").await, 1);
    let published = app.store.article(&id).unwrap();
    assert_eq!(published.published_at, Some(fixed_now() + Duration::hours(1)));
    assert_eq!(published.updated_at, fixed_now() + Duration::hours(1));

    // Re-publishing keeps the original publish date.
    app.clock.advance(Duration::hours(1));
    set_status(&app, &id, "Опубликовано").await;
    let republished = app.store.article(&id).unwrap();
    assert_eq!(republished.published_at, published.published_at);
    assert_eq!(republished.updated_at, fixed_now() + Duration::hours(2));

    set_status(&app, &id, "Черновик").await;
    let draft = app.store.article(&id).unwrap();
    assert_eq!(draft.status, ArticleStatus::Draft);
    assert!(draft.published_at.is_none());
}

#[tokio::test]
async fn moving_to_moderation_clears_publish_date() {
    let app = TestApp::new();
    let id = create(&app, command("Review", Some("Опубликовано"))).await;

    set_status(&app, &id, "На модерации").await;

    let stored = app.store.article(&id).unwrap();
    assert_eq!(stored.status, ArticleStatus::InModeration);
    assert!(stored.published_at.is_none());
}

#[tokio::test]
async fn partial_update_without_status_writes_nothing() {
    let app = TestApp::new();
    let id = create(&app, command("Untouched", None)).await;
    app.clock.advance(Duration::minutes(5));

    let result = app
        .services
        .article_commands
        .update_article_status(UpdateArticleStatusCommand {
            id: id.clone(),
            status: None,
        })
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.modified_count, 0);
    assert_eq!(app.store.article(&id).unwrap().updated_at, fixed_now());
}

#[tokio::test]
async fn updates_on_missing_or_malformed_ids_are_not_found() {
    let app = TestApp::new();
    for id in ["65f1a2b3c4d5e6f708091aff", "not-an-id"] {
        let err = app
            .services
            .article_commands
            .update_article_status(UpdateArticleStatusCommand {
                id: id.into(),
                status: Some("Опубликовано".into()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)), "{id}: {err:?}");

        let err = app
            .services
            .article_commands
            .update_article(UpdateArticleCommand {
                id: id.into(),
                title: Some("x".into()),
                ..UpdateArticleCommand::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)), "{id}: {err:?}");
    }
}

#[tokio::test]
async fn full_update_touches_only_supplied_fields() {
    let app = TestApp::new();
    let mut cmd = command("Original", Some("Опубликовано"));
    cmd.category_id = Some("65f1a2b3c4d5e6f708091a0c".into());
    let id = create(&app, cmd).await;
    app.clock.advance(Duration::minutes(10));

    let result = app
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: id.clone(),
            title: Some("Renamed".into()),
            ..UpdateArticleCommand::default()
        })
        .await
        .unwrap();
    assert_eq!(result.modified_count, 1);

    let stored = app.store.article(&id).unwrap();
    assert_eq!(stored.title.as_str(), "Renamed");
    assert_eq!(stored.content, "body");
    assert_eq!(stored.status, ArticleStatus::Published);
    assert_eq!(stored.published_at, Some(fixed_now()));
    assert_eq!(
        stored.category_id.as_ref().map(|c| c.as_str()),
        Some("65f1a2b3c4d5e6f708091a0c")
    );
    assert_eq!(stored.updated_at, fixed_now() + Duration::minutes(10));
}

#[tokio::test]
async fn full_update_with_empty_category_uncategorizes() {
    let app = TestApp::new();
    let mut cmd = command("Filed", None);
    cmd.category_id = Some("65f1a2b3c4d5e6f708091a0c".into());
    let id = create(&app, cmd).await;

    app.services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: id.clone(),
            category_id: Some(String::new()),
            ..UpdateArticleCommand::default()
        })
        .await
        .unwrap();

    assert!(app.store.article(&id).unwrap().category_id.is_none());
}

#[tokio::test]
async fn full_update_status_change_follows_lifecycle() {
    let app = TestApp::new();
    let id = create(&app, command("Full path", None)).await;

    app.services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: id.clone(),
            status: Some("Опубликовано".into()),
            ..UpdateArticleCommand::default()
        })
        .await
        .unwrap();
    assert!(app.store.article(&id).unwrap().published_at.is_some());

    app.services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: id.clone(),
            content: Some("rewritten".into()),
            status: Some("Черновик".into()),
            ..UpdateArticleCommand::default()
        })
        .await
        .unwrap();
    let stored = app.store.article(&id).unwrap();
    assert!(stored.published_at.is_none());
    assert_eq!(stored.content, "rewritten");
}

#[tokio::test]
async fn full_update_rejects_blank_title() {
    let app = TestApp::new();
    let id = create(&app, command("Keep me", None)).await;

    let err = app
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: id.clone(),
            title: Some("   ".into()),
            ..UpdateArticleCommand::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
    assert_eq!(app.store.article(&id).unwrap().title.as_str(), "Keep me");
}
