use doc_issue_sync::{
    synchronize, MemoryTracker, RetryPolicy, RunnerError, SyncConfig, TitleStyle, TrackerRequest,
};

fn config() -> SyncConfig {
    SyncConfig {
        owner: "acme".to_string(),
        repo: "handbook".to_string(),
        branch: "translation".to_string(),
        directories: vec!["docs/Guide".to_string(), "docs/Reference".to_string()],
        labels: vec!["translation".to_string()],
        ..SyncConfig::default()
    }
}

fn handbook() -> MemoryTracker {
    MemoryTracker::new()
        .with_file("docs/Guide/TheBasics.md", "翻译估计用时：⭐️⭐️\n# The Basics")
        .with_file("docs/Guide/Closures.md", "# Closures")
        .with_file("docs/Guide/images/diagram.png", "")
        .with_file("docs/Reference/LexicalStructure.md", "翻译估计用时：⭐️⭐️⭐️⭐️")
        .with_file("docs/Reference/notes.txt", "")
}

fn created_titles(tracker: &MemoryTracker) -> Vec<String> {
    tracker
        .created()
        .into_iter()
        .map(|draft| draft.title)
        .collect()
}

#[tokio::test]
async fn creates_issues_in_directory_then_file_order() {
    let tracker = handbook();

    let summary = synchronize(&tracker, &config(), false).await.unwrap();

    assert_eq!(
        created_titles(&tracker),
        vec![
            "Guide / closures.md",
            "Guide / thebasics.md",
            "Reference / lexicalstructure.md",
        ]
    );
    assert_eq!(summary.directories_scanned, 2);
    assert_eq!(summary.documents_found, 3);
    assert_eq!(summary.issues_created, 3);
    assert!(!summary.has_failures());
}

#[tokio::test]
async fn second_run_creates_nothing() {
    let tracker = handbook();

    synchronize(&tracker, &config(), false).await.unwrap();
    let second = synchronize(&tracker, &config(), false).await.unwrap();

    assert_eq!(second.existing_issues, 3);
    assert_eq!(second.issues_created, 0);
    assert_eq!(second.issues_skipped, 3);
    assert_eq!(tracker.created().len(), 3);
}

#[tokio::test]
async fn hyphenated_titles_carry_estimates_and_stay_idempotent() {
    let tracker = handbook();
    let config = SyncConfig {
        title_style: TitleStyle::Hyphenated,
        ..config()
    };

    synchronize(&tracker, &config, false).await.unwrap();
    let second = synchronize(&tracker, &config, false).await.unwrap();

    assert_eq!(
        created_titles(&tracker),
        vec![
            "Guide / closures.md",
            "Guide / the-basics.md ⭐️⭐️",
            "Reference / lexical-structure.md ⭐️⭐️⭐️⭐️",
        ]
    );
    assert_eq!(second.issues_created, 0);
}

#[tokio::test]
async fn existing_issue_is_not_recreated() {
    let tracker = MemoryTracker::new()
        .with_issue("Foo / bar-baz.md")
        .with_file("docs/Foo/bar-baz.md", "");
    let config = SyncConfig {
        directories: vec!["docs/Foo".to_string()],
        ..config()
    };

    let summary = synchronize(&tracker, &config, false).await.unwrap();

    assert_eq!(summary.issues_skipped, 1);
    assert!(!tracker
        .requests()
        .iter()
        .any(|request| matches!(request, TrackerRequest::CreateIssue { .. })));
}

#[tokio::test]
async fn body_links_to_file_at_branch() {
    let tracker = MemoryTracker::new().with_file("Foo/bar-baz.md", "");
    let config = SyncConfig {
        directories: vec!["Foo".to_string()],
        ..config()
    };

    synchronize(&tracker, &config, false).await.unwrap();

    let created = tracker.created();
    assert_eq!(created[0].title, "Foo / bar-baz.md");
    assert!(created[0]
        .body
        .contains("https://github.com/acme/handbook/blob/translation/Foo/bar-baz.md"));
}

#[tokio::test]
async fn dry_run_creates_nothing() {
    let tracker = handbook();

    let summary = synchronize(&tracker, &config(), true).await.unwrap();

    assert!(summary.dry_run);
    assert_eq!(summary.issues_planned, 3);
    assert!(tracker.created().is_empty());
}

#[tokio::test]
async fn unreachable_directory_does_not_stop_run() {
    let tracker = handbook().failing_directory("docs/Guide");

    let summary = synchronize(&tracker, &config(), false).await.unwrap();

    assert_eq!(summary.directories_scanned, 2);
    assert_eq!(
        created_titles(&tracker),
        vec!["Reference / lexicalstructure.md"]
    );
}

#[tokio::test]
async fn inventory_failure_is_fatal() {
    let tracker = handbook().failing_inventory();

    let result = synchronize(&tracker, &config(), false).await;

    assert!(matches!(result, Err(RunnerError::Inventory(_))));
    assert!(tracker.created().is_empty());
}

#[tokio::test]
async fn failed_submission_aborts_run_by_default() {
    let tracker = handbook().failing_creates(usize::MAX);
    let config = SyncConfig {
        retry: RetryPolicy::None,
        ..config()
    };

    let result = synchronize(&tracker, &config, false).await;

    assert!(matches!(result, Err(RunnerError::Issue(_))));
    let creates = tracker
        .requests()
        .into_iter()
        .filter(|request| matches!(request, TrackerRequest::CreateIssue { .. }))
        .count();
    assert_eq!(creates, 1);
}

#[tokio::test]
async fn failed_submission_is_recorded_when_continuing() {
    let tracker = handbook().failing_creates(1);
    let config = SyncConfig {
        retry: RetryPolicy::None,
        continue_on_failure: true,
        ..config()
    };

    let summary = synchronize(&tracker, &config, false).await.unwrap();

    assert_eq!(summary.issues_failed, 1);
    assert_eq!(summary.issues_created, 2);
    assert!(summary.has_failures());
    assert_eq!(
        created_titles(&tracker),
        vec!["Guide / thebasics.md", "Reference / lexicalstructure.md"]
    );
}
