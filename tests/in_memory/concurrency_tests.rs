//! Racing writers against the in-memory reference store.

use std::sync::Arc;

use crate::in_memory::helpers::organization_id;
use missive::message::{
    adapters::memory::InMemoryMessageRepository,
    domain::OrganizationId,
    services::{CreateMessageRequest, MessageRuleEngine, OutcomeKind},
};
use mockable::DefaultClock;
use rstest::rstest;

/// Concurrent creates with one title admit exactly one record: the store's
/// title index catches whichever writer loses the race past the engine's
/// uniqueness lookup.
#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_with_one_title_admit_one(organization_id: OrganizationId) {
    let engine = Arc::new(MessageRuleEngine::new(
        Arc::new(InMemoryMessageRepository::new()),
        Arc::new(DefaultClock),
    ));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let worker = Arc::clone(&engine);
        handles.push(tokio::spawn(async move {
            worker
                .create_message(
                    organization_id,
                    CreateMessageRequest::new("Launch Plan", "Draft content body text"),
                )
                .await
        }));
    }

    let mut kinds = Vec::new();
    for handle in handles {
        let outcome = handle
            .await
            .expect("task should not panic")
            .expect("create should not fail");
        kinds.push(outcome.kind());
    }
    let listed = engine
        .list_messages(organization_id)
        .await
        .expect("listing should succeed");

    let created = kinds.iter().filter(|kind| **kind == OutcomeKind::Created).count();
    let conflicts = kinds.iter().filter(|kind| **kind == OutcomeKind::Conflict).count();
    assert_eq!(created, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(listed.len(), 1);
}
