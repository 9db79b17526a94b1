//! Unit tests for identity parsing and the in-memory directory.

use crate::identity::{
    adapters::memory::InMemoryUserDirectory,
    domain::{UserId, UserProfile, WorkspaceId},
    ports::UserDirectory,
};
use rstest::rstest;

#[rstest]
#[case("not-a-uuid")]
#[case("")]
#[case("12345")]
fn user_id_rejects_malformed_input(#[case] raw: &str) {
    let result = raw.parse::<UserId>();
    assert!(result.is_err(), "expected '{raw}' to be rejected");
}

#[rstest]
fn user_id_parses_with_surrounding_whitespace() {
    let id = UserId::new();
    let parsed = format!("  {id} ").parse::<UserId>().expect("valid user id");
    assert_eq!(parsed, id);
}

#[rstest]
fn workspace_id_error_names_the_identifier_kind() {
    let err = "nope".parse::<WorkspaceId>().expect_err("invalid workspace id");
    assert_eq!(err.kind, "workspace");
    assert_eq!(err.to_string(), "invalid workspace identifier: 'nope'");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn directory_omits_unknown_identifiers() {
    let directory = InMemoryUserDirectory::new();
    let known = UserId::new();
    directory
        .insert(UserProfile::new(known, "Ada").with_email("ada@example.com"))
        .expect("insert profile");

    let found = directory
        .find_many(&[known, UserId::new()])
        .await
        .expect("lookup should succeed");

    assert_eq!(found.len(), 1);
    assert_eq!(found.first().map(|p| p.id), Some(known));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removed_profile_is_no_longer_resolved() {
    let directory = InMemoryUserDirectory::new();
    let user = UserId::new();
    directory
        .insert(UserProfile::new(user, "Grace"))
        .expect("insert profile");
    directory.remove(user).expect("remove profile");

    let found = directory.find_many(&[user]).await.expect("lookup");
    assert!(found.is_empty());
}
