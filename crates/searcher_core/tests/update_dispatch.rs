use std::sync::Once;

use searcher_core::{update, DispatchStatus, Effect, Msg, SearchState, TorRecord};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(widget_logging::initialize_for_tests);
}

fn record(name: &str) -> TorRecord {
    let mut record = TorRecord::new();
    record.insert(
        "name".to_string(),
        serde_json::Value::String(name.to_string()),
    );
    record
}

fn completed_ok(query: &str, names: &[&str]) -> Msg {
    Msg::SearchCompleted {
        query: query.to_string(),
        result: Ok(names.iter().map(|name| record(name)).collect()),
    }
}

fn completed_err(query: &str) -> Msg {
    Msg::SearchCompleted {
        query: query.to_string(),
        result: Err("connection refused".to_string()),
    }
}

fn edit(state: SearchState, query: &str) -> (SearchState, Vec<Effect>) {
    update(state, Msg::QueryEdited(query.to_string()))
}

#[test]
fn first_nonempty_query_dispatches() {
    init_logging();
    let state = SearchState::new();

    let (state, effects) = edit(state, "ubuntu");

    assert_eq!(
        effects,
        vec![Effect::FetchQuery {
            query: "ubuntu".to_string(),
        }]
    );
    assert_eq!(state.status(), DispatchStatus::InFlight);
    assert_eq!(state.pending_query(), Some("ubuntu"));
    assert_eq!(state.last_query(), None);
}

#[test]
fn empty_query_is_never_dispatched() {
    init_logging();
    let state = SearchState::new();

    // First call with an empty box (browser restoring a cached blank form).
    let (state, effects) = edit(state, "");
    assert!(effects.is_empty());
    assert_eq!(state.status(), DispatchStatus::Idle);
    assert_eq!(state.pending_query(), None);

    // Clearing the box after a completed search is a no-op too.
    let (state, _) = edit(state, "ubuntu");
    let (state, _) = update(state, completed_ok("ubuntu", &["ubuntu-22"]));
    let (state, effects) = edit(state, "");
    assert!(effects.is_empty());
    assert_eq!(state.status(), DispatchStatus::Idle);
}

#[test]
fn repeat_query_suppressed_after_success() {
    init_logging();
    let state = SearchState::new();
    let (state, _) = edit(state, "ubuntu");
    let (state, _) = update(state, completed_ok("ubuntu", &["ubuntu-22"]));

    // Form submit resends the unchanged box value.
    let (state, effects) = update(state, Msg::QuerySubmitted("ubuntu".to_string()));

    assert!(effects.is_empty());
    assert_eq!(state.status(), DispatchStatus::Idle);
    assert_eq!(state.pending_query(), None);
}

#[test]
fn coalesces_rapid_input_to_latest() {
    init_logging();
    let state = SearchState::new();

    // "u" dispatches immediately; "ub" and "ubu" land while it is in flight.
    let (state, effects) = edit(state, "u");
    let mut fetched: Vec<String> = fetch_queries(&effects);
    let (state, effects) = edit(state, "ub");
    assert!(effects.is_empty());
    let (state, effects) = edit(state, "ubu");
    assert!(effects.is_empty());
    assert_eq!(state.pending_query(), Some("ubu"));

    let (state, effects) = update(state, completed_ok("u", &[]));
    fetched.extend(fetch_queries(&effects));
    let (state, effects) = update(state, completed_ok("ubu", &[]));
    fetched.extend(fetch_queries(&effects));

    // Exactly two fetches: the first keystroke and the final value.
    assert_eq!(fetched, vec!["u".to_string(), "ubu".to_string()]);
    assert_eq!(state.status(), DispatchStatus::Idle);
    assert_eq!(state.pending_query(), None);
    assert_eq!(state.last_query(), Some("ubu"));
}

#[test]
fn input_while_in_flight_keeps_only_latest_pending() {
    init_logging();
    let state = SearchState::new();
    let (state, _) = edit(state, "u");

    let (state, effects) = edit(state, "ub");
    assert!(effects.is_empty());
    assert_eq!(state.pending_query(), Some("ub"));

    let (state, effects) = edit(state, "ubun");
    assert!(effects.is_empty());
    assert_eq!(state.pending_query(), Some("ubun"));
    assert_eq!(state.status(), DispatchStatus::InFlight);
}

#[test]
fn completion_renders_and_records_last_query() {
    init_logging();
    let state = SearchState::new();
    let (state, _) = edit(state, "ubuntu");

    let (state, effects) = update(state, completed_ok("ubuntu", &["ubuntu-22"]));

    assert_eq!(
        effects,
        vec![Effect::RenderResults {
            results: vec![record("ubuntu-22")],
        }]
    );
    assert_eq!(state.status(), DispatchStatus::Idle);
    assert_eq!(state.last_query(), Some("ubuntu"));
    assert_eq!(state.pending_query(), None);
}

#[test]
fn failed_fetch_resets_state_and_allows_retry() {
    init_logging();
    let state = SearchState::new();
    let (state, _) = edit(state, "ubuntu");

    let (state, effects) = update(state, completed_err("ubuntu"));

    // Swallowed: no render, no automatic refetch.
    assert!(effects.is_empty());
    assert_eq!(state.status(), DispatchStatus::Idle);
    assert_eq!(state.last_query(), None);
    assert_eq!(state.pending_query(), None);

    // The same query is not suppressed as a duplicate afterwards.
    let (state, effects) = update(state, Msg::QuerySubmitted("ubuntu".to_string()));
    assert_eq!(
        effects,
        vec![Effect::FetchQuery {
            query: "ubuntu".to_string(),
        }]
    );
    assert_eq!(state.status(), DispatchStatus::InFlight);
}

#[test]
fn clearing_box_mid_flight_drops_queued_query() {
    init_logging();
    let state = SearchState::new();
    let (state, _) = edit(state, "u");
    let (state, _) = edit(state, "ub");
    let (state, effects) = edit(state, "");
    assert!(effects.is_empty());

    let (state, effects) = update(state, completed_ok("u", &["u-thing"]));

    // Only the render of the in-flight result; nothing left to drain.
    assert_eq!(effects.len(), 1);
    assert!(matches!(effects[0], Effect::RenderResults { .. }));
    assert_eq!(state.status(), DispatchStatus::Idle);
    assert_eq!(state.pending_query(), None);
}

#[test]
fn drain_suppresses_pending_equal_to_last_success() {
    init_logging();
    let state = SearchState::new();
    let (state, _) = edit(state, "arch");
    let (state, _) = update(state, completed_ok("arch", &[]));

    // "debian" goes in flight, then the user types "arch" back.
    let (state, _) = edit(state, "debian");
    let (state, _) = edit(state, "arch");

    // "debian" fails, so last_query is still "arch": the queued repeat is
    // suppressed instead of refetched.
    let (state, effects) = update(state, completed_err("debian"));
    assert!(effects.is_empty());
    assert_eq!(state.status(), DispatchStatus::Idle);
    assert_eq!(state.pending_query(), None);
    assert_eq!(state.last_query(), Some("arch"));
}

#[test]
fn noop_changes_nothing() {
    init_logging();
    let state = SearchState::new();
    let before = state.clone();

    let (state, effects) = update(state, Msg::NoOp);

    assert_eq!(state, before);
    assert!(effects.is_empty());
}

fn fetch_queries(effects: &[Effect]) -> Vec<String> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::FetchQuery { query } => Some(query.clone()),
            _ => None,
        })
        .collect()
}
