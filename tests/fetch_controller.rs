mod common;

use common::{react_and_redux, story, target, ScriptedSource};
use hn_search::fetch::{FetchController, FetchError};
use hn_search::store::StoryStore;
use hn_search::story::StoryId;
use hn_search::ui::stories::StoriesIntent;

#[tokio::test]
async fn trigger_marks_loading_before_returning() {
    let source = ScriptedSource::new();
    let _responder = source.expect(&target("react"));
    let store = StoryStore::new();
    let fetch = FetchController::new(source.clone(), store.clone());

    let _handle = fetch.trigger(target("react"));

    // No await yet: the spawned request has not run.
    let state = store.snapshot();
    assert!(state.is_loading());
    assert!(!state.is_error());
    assert!(source.requests().is_empty());
}

#[tokio::test]
async fn success_replaces_items_and_clears_loading() {
    let source = ScriptedSource::new();
    let responder = source.expect(&target("react"));
    let store = StoryStore::new();
    let fetch = FetchController::new(source.clone(), store.clone());

    let handle = fetch.trigger(target("react"));
    responder.send(Ok(react_and_redux())).unwrap();
    handle.await.unwrap();

    let state = store.snapshot();
    assert_eq!(state.len(), 2);
    assert_eq!(state.items()[0].id, StoryId::from(0));
    assert_eq!(state.items()[1].id, StoryId::from(1));
    assert!(!state.is_loading());
    assert!(!state.is_error());
    assert_eq!(source.requests(), vec![target("react").to_string()]);
}

#[tokio::test]
async fn failure_keeps_previous_items() {
    let source = ScriptedSource::new();
    let store = StoryStore::new();
    store.dispatch(StoriesIntent::FetchSucceeded {
        stories: react_and_redux(),
    });
    let previous = store.snapshot().items().to_vec();

    let responder = source.expect(&target("react"));
    let fetch = FetchController::new(source.clone(), store.clone());
    let handle = fetch.trigger(target("react"));
    responder
        .send(Err(FetchError::Status {
            target: target("react").to_string(),
            status: 503,
        }))
        .unwrap();
    handle.await.unwrap();

    let state = store.snapshot();
    assert_eq!(state.items(), previous.as_slice());
    assert!(!state.is_loading());
    assert!(state.is_error());
}

#[tokio::test]
async fn every_failure_kind_collapses_to_error_flag() {
    let source = ScriptedSource::new();
    let store = StoryStore::new();
    let fetch = FetchController::new(source.clone(), store.clone());

    let malformed = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let failures = vec![
        FetchError::Status {
            target: String::new(),
            status: 404,
        },
        FetchError::Malformed {
            target: String::new(),
            source: malformed,
        },
        FetchError::Other("boom".to_string()),
    ];

    for failure in failures {
        let responder = source.expect(&target("react"));
        let handle = fetch.trigger(target("react"));
        responder.send(Err(failure)).unwrap();
        handle.await.unwrap();

        let state = store.snapshot();
        assert!(state.is_error());
        assert!(!state.is_loading());
    }
}

#[tokio::test]
async fn one_request_per_trigger_and_no_retry() {
    let source = ScriptedSource::new();
    let store = StoryStore::new();
    let fetch = FetchController::new(source.clone(), store.clone());

    // No responder registered: the request fails straight away.
    fetch.trigger(target("react")).await.unwrap();

    assert_eq!(source.requests().len(), 1);
    assert!(store.snapshot().is_error());
}

#[tokio::test]
async fn overlapping_triggers_last_resolution_wins() {
    let source = ScriptedSource::new();
    let first = source.expect(&target("react"));
    let second = source.expect(&target("redux"));
    let store = StoryStore::new();
    let fetch = FetchController::new(source.clone(), store.clone());

    let first_handle = fetch.trigger(target("react"));
    let second_handle = fetch.trigger(target("redux"));

    // The later request resolves first.
    second.send(Ok(vec![story(2, "redux")])).unwrap();
    second_handle.await.unwrap();
    let state = store.snapshot();
    assert_eq!(state.items()[0].id, StoryId::from(2));
    // The first request is still in flight, yet loading is already cleared.
    assert!(!state.is_loading());

    first.send(Ok(vec![story(1, "react")])).unwrap();
    first_handle.await.unwrap();

    // Nothing is cancelled: the stale response lands last and wins.
    let state = store.snapshot();
    assert_eq!(state.len(), 1);
    assert_eq!(state.items()[0].id, StoryId::from(1));
    assert!(!state.is_loading());
    assert!(!state.is_error());
}

#[tokio::test]
async fn dropped_handle_still_applies_outcome() {
    let source = ScriptedSource::new();
    let responder = source.expect(&target("react"));
    let store = StoryStore::new();
    let mut states = store.subscribe();
    let fetch = FetchController::new(source.clone(), store.clone());

    drop(fetch.trigger(target("react")));
    responder.send(Ok(react_and_redux())).unwrap();

    let state = common::wait_until_settled(&mut states).await;
    assert_eq!(state.len(), 2);
}
