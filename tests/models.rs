use github_repo_search::models::{
    format_stars, DropdownVisibility, PinId, PinnedList, RepositoryRecord,
};
use github_repo_search::types::{GitHubRepo, RepoSearchResponse};
use serde_json::json;

#[test]
fn test_search_response_deserialization() {
    let json = json!({
        "total_count": 254013,
        "incomplete_results": false,
        "items": [
            {
                "id": 10270250,
                "name": "react",
                "full_name": "facebook/react",
                "owner": { "login": "facebook", "id": 69631, "type": "Organization" },
                "html_url": "https://github.com/facebook/react",
                "stargazers_count": 228000,
                "language": "JavaScript"
            }
        ]
    });

    let response: RepoSearchResponse = serde_json::from_value(json).expect("Failed to deserialize");

    assert_eq!(response.total_count, 254013);
    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].name, "react");
    assert_eq!(response.items[0].owner.login, "facebook");
    assert_eq!(response.items[0].stargazers_count, 228000);
}

#[test]
fn test_search_response_without_total_count() {
    let json = json!({ "items": [] });

    let response: RepoSearchResponse = serde_json::from_value(json).expect("Failed to deserialize");
    assert_eq!(response.total_count, 0);
    assert!(response.items.is_empty());
}

#[test]
fn test_repo_missing_owner_is_rejected() {
    let json = json!({ "name": "react", "stargazers_count": 1 });

    let result: Result<GitHubRepo, _> = serde_json::from_value(json);
    assert!(result.is_err());
}

#[test]
fn test_record_from_github_repo() {
    let repo: GitHubRepo = serde_json::from_value(json!({
        "name": "tokio",
        "owner": { "login": "tokio-rs" },
        "stargazers_count": 27000
    }))
    .expect("Failed to deserialize");

    let record = RepositoryRecord::from(repo);
    assert_eq!(record, RepositoryRecord::new("tokio", "tokio-rs", 27000));
}

#[test]
fn test_format_stars() {
    assert_eq!(format_stars(0), "0");
    assert_eq!(format_stars(999), "999");
    assert_eq!(format_stars(1000), "1,000");
    assert_eq!(format_stars(228000), "228,000");
    assert_eq!(format_stars(1234567), "1,234,567");
}

#[test]
fn test_pinned_list_ids_are_unique() {
    let mut pinned = PinnedList::new();
    let record = RepositoryRecord::new("react", "facebook", 1);

    let first = pinned.push(record.clone()).id;
    let second = pinned.push(record.clone()).id;
    assert_ne!(first, second);

    // ids are not reused after a removal
    assert!(pinned.remove(second).is_some());
    let third = pinned.push(record).id;
    assert_ne!(third, second);
    assert_eq!(pinned.len(), 2);
}

#[test]
fn test_pinned_list_remove_only_target() {
    let mut pinned = PinnedList::new();
    let a = pinned.push(RepositoryRecord::new("a", "o", 1)).id;
    let b = pinned.push(RepositoryRecord::new("b", "o", 2)).id;
    let c = pinned.push(RepositoryRecord::new("c", "o", 3)).id;

    let removed = pinned.remove(b).expect("Entry should exist");
    assert_eq!(removed.record.name, "b");

    let remaining: Vec<PinId> = pinned.iter().map(|entry| entry.id).collect();
    assert_eq!(remaining, vec![a, c]);
    assert!(pinned.get(b).is_none());
    assert!(pinned.remove(b).is_none());
}

#[test]
fn test_pin_id_display() {
    assert_eq!(PinId(7).to_string(), "pin-7");
}

#[test]
fn test_dropdown_visibility_defaults_to_hidden() {
    assert_eq!(DropdownVisibility::default(), DropdownVisibility::Hidden);
    assert!(!DropdownVisibility::Hidden.is_visible());
    assert!(DropdownVisibility::Visible.is_visible());
}
