use crate::{DispatchStatus, Effect, Msg, SearchState, TorRecord};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SearchState, msg: Msg) -> (SearchState, Vec<Effect>) {
    let effects = match msg {
        // Keystrokes and form submits both carry the current box value and
        // run the same decision.
        Msg::QueryEdited(query) | Msg::QuerySubmitted(query) => {
            state.pending_query = Some(query);
            dispatch_pending(&mut state)
        }
        Msg::SearchCompleted { query, result } => on_completed(&mut state, query, result),
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Decision step shared by input handling and the post-completion drain.
///
/// Suppression (empty query, or query equal to the last completed one)
/// clears the pending slot but never touches `status`: resetting it while a
/// fetch is outstanding would allow a second concurrent fetch.
fn dispatch_pending(state: &mut SearchState) -> Vec<Effect> {
    let Some(pending) = state.pending_query.as_deref() else {
        return Vec::new();
    };

    if pending.is_empty() || state.last_query.as_deref() == Some(pending) {
        state.pending_query = None;
        return Vec::new();
    }

    match state.status {
        // The completion handler will observe the updated pending query.
        DispatchStatus::InFlight => Vec::new(),
        DispatchStatus::Idle => {
            state.status = DispatchStatus::InFlight;
            vec![Effect::FetchQuery {
                query: pending.to_string(),
            }]
        }
    }
}

fn on_completed(
    state: &mut SearchState,
    query: String,
    result: Result<Vec<TorRecord>, String>,
) -> Vec<Effect> {
    state.status = DispatchStatus::Idle;

    let mut effects = Vec::new();
    match result {
        Ok(results) => {
            state.last_query = Some(query.clone());
            effects.push(Effect::RenderResults { results });
        }
        Err(_message) => {
            // The platform layer logs the failure. `last_query` is left
            // untouched so the same query is not suppressed on retry.
        }
    }

    if state.pending_query.as_deref() == Some(query.as_str()) {
        state.pending_query = None;
    }

    // Drain: at most one follow-up fetch per completion, so the latest
    // keystroke's query is eventually sent without unbounded recursion.
    effects.extend(dispatch_pending(state));
    effects
}
