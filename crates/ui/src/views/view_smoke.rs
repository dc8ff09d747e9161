use mastery_core::model::TopicId;
use services::TopicService;
use storage::PROGRESS_KEY;
use storage::repository::InMemoryRepository;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_repo};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_lessons_and_empty_tracker() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.rebuild().await;
    let html = harness.render();

    assert!(html.contains("Basic Concepts"), "missing lesson card in {html}");
    assert!(html.contains("0 of 28 topics completed"), "missing summary in {html}");
    assert!(html.contains("0%"), "missing percentage in {html}");
    assert!(!html.contains("Reset Progress"), "reset shown without progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_reflects_stored_progress() {
    let repo = InMemoryRepository::new();
    repo.insert_raw(PROGRESS_KEY, r#"["components-props","state-events"]"#)
        .expect("seed record");

    let mut harness = setup_view_harness_with_repo(ViewKind::Home, repo).await;
    harness.rebuild().await;
    let html = harness.render();

    assert!(html.contains("2 of 28 topics completed"), "missing summary in {html}");
    assert!(html.contains("width: 7%"), "missing bar width in {html}");
    assert!(html.contains("Reset Progress"), "missing reset in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_shows_halfway_banner() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    let ids: Vec<TopicId> = harness
        .progress
        .catalog()
        .topics()
        .iter()
        .take(14)
        .map(|topic| topic.id().clone())
        .collect();
    for id in &ids {
        harness.progress.toggle(id).await;
    }

    harness.rebuild().await;
    let html = harness.render();
    assert!(html.contains("50%"), "missing percentage in {html}");
    assert!(html.contains("Halfway There! Keep Going!"), "missing milestone in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_marks_route_topics_current() {
    let mut harness = setup_view_harness(ViewKind::Lesson("context-demo")).await;
    harness.rebuild().await;
    let html = harness.render();

    let covered = TopicService::builtin().topics_for_route("/context-demo").len();
    assert!(covered > 0);
    assert!(html.contains("Topics on this page"), "missing covered list in {html}");
    assert_eq!(html.matches("topic-row--current").count(), covered, "{html}");
    assert_eq!(html.matches("badge--current").count(), covered, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_lesson_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::Lesson("does-not-exist")).await;
    harness.rebuild().await;
    let html = harness.render();

    assert!(html.contains("Nothing lives at /does-not-exist."), "{html}");
    assert!(!html.contains("progress-card"), "{html}");
    assert!(harness.repo.raw(PROGRESS_KEY).expect("raw read").is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn not_found_view_renders_path() {
    let mut harness = setup_view_harness(ViewKind::NotFound("some/where")).await;
    harness.rebuild().await;
    let html = harness.render();
    assert!(html.contains("Nothing lives at /some/where."), "{html}");
}
