//! Tests for activity types, cursors and page limits.

use crate::activity::domain::{
    ActivityCursor, ActivityDomainError, ActivityEntity, ActivityEvent, ActivityType, PageLimit,
};
use crate::test_support::instant;
use rstest::rstest;

#[rstest]
#[case(None, 30)]
#[case(Some(0), 1)]
#[case(Some(-4), 1)]
#[case(Some(1), 1)]
#[case(Some(55), 55)]
#[case(Some(100), 100)]
#[case(Some(1_000), 100)]
#[case(Some(i64::MAX), PageLimit::MAX)]
#[case(Some(i64::MIN), PageLimit::MIN)]
fn page_limit_is_clamped(#[case] requested: Option<i64>, #[case] expected: usize) {
    let limit = PageLimit::clamp(requested);
    assert_eq!(limit.get(), expected);
    assert_eq!(limit.fetch_size(), expected + 1);
}

#[rstest]
#[case("2025-03-10T03:00:00.250Z", "2025-03-10T03:00:00.250Z")]
#[case("2025-03-09T21:00:00.250-06:00", "2025-03-10T03:00:00.250Z")]
fn cursor_parses_iso_instants(#[case] raw: &str, #[case] rendered: &str) {
    let cursor = ActivityCursor::parse(raw).expect("valid cursor");
    assert_eq!(cursor.instant(), instant(rendered));
    assert_eq!(cursor.to_string(), rendered);
}

#[rstest]
#[case("yesterday")]
#[case("2025-03-10")]
#[case("2025-03-10 03:00:00")]
fn malformed_cursor_is_rejected(#[case] raw: &str) {
    assert_eq!(
        ActivityCursor::parse(raw),
        Err(ActivityDomainError::InvalidCursor(raw.to_owned()))
    );
}

#[rstest]
fn activity_types_round_trip_through_storage_strings() {
    for kind in ActivityType::ALL {
        assert_eq!(ActivityType::try_from(kind.as_str()), Ok(kind));
    }
    assert!(ActivityType::try_from("task_exploded").is_err());
}

#[rstest]
#[case(ActivityType::TaskToggled, ActivityEntity::Task)]
#[case(ActivityType::TasksBulkDeleted, ActivityEntity::Task)]
#[case(ActivityType::WorkspaceJoined, ActivityEntity::Workspace)]
#[case(ActivityType::MemberRemoved, ActivityEntity::Member)]
fn activity_type_implies_entity(#[case] kind: ActivityType, #[case] entity: ActivityEntity) {
    assert_eq!(kind.entity(), entity);
}

#[rstest]
fn activity_type_serializes_snake_case() {
    let json = serde_json::to_value(ActivityType::TasksBulkCompleted).expect("serialize type");
    assert_eq!(json, "tasks_bulk_completed");
}

#[rstest]
#[case("2025-03-10T03:00:00.250Z", None, "2025-03-10T03:00:00.250Z")]
#[case("2025-03-10T03:00:00.250Z", Some("2025-03-10T03:00:00.100Z"), "2025-03-10T03:00:00.250Z")]
#[case("2025-03-10T03:00:00.250Z", Some("2025-03-10T03:00:00.250Z"), "2025-03-10T03:00:00.251Z")]
#[case("2025-03-10T03:00:00.250Z", Some("2025-03-10T03:00:01.000Z"), "2025-03-10T03:00:01.001Z")]
#[case("2025-03-10T03:00:00.250900Z", None, "2025-03-10T03:00:00.250Z")]
fn store_instant_follows_the_newest_event(
    #[case] requested: &str,
    #[case] latest: Option<&str>,
    #[case] expected: &str,
) {
    assert_eq!(
        ActivityEvent::next_created_at(instant(requested), latest.map(instant)),
        instant(expected)
    );
}
