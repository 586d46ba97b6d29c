//! Terminal message pump: stdin lines in, rendered result rows out.

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use searcher_core::{tor_field_map, update, DispatchStatus, Msg, SearchState, TOR_RECORD_FIELDS};
use searcher_engine::{EngineHandle, SearchSettings};
use widget_logging::widget_info;

use crate::effects::EffectRunner;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn run(settings: SearchSettings) -> anyhow::Result<()> {
    // A table/schema drift is a programmer error; fail before any search.
    tor_field_map()
        .validate_schema(TOR_RECORD_FIELDS)
        .context("field table does not match the record schema")?;

    let engine = EngineHandle::new(settings)?;
    let mut runner = EffectRunner::new(engine);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    spawn_stdin_reader(msg_tx);

    let mut state = SearchState::new();
    widget_info!("searcher ready; type a query and press enter");

    let mut stdin_open = true;
    loop {
        let mut inbox: Vec<Msg> = Vec::new();
        loop {
            match msg_rx.try_recv() {
                Ok(msg) => inbox.push(msg),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    stdin_open = false;
                    break;
                }
            }
        }
        inbox.extend(runner.poll_completions());

        for msg in inbox {
            let (next, effects) = update(std::mem::take(&mut state), msg);
            state = next;
            runner.execute(&state, effects);
        }

        // Exit once stdin is closed and the last fetch has drained.
        if !stdin_open && state.status() == DispatchStatus::Idle {
            return Ok(());
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Each submitted line plays the role of the search form's submit event.
fn spawn_stdin_reader(msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if msg_tx
                .send(Msg::QuerySubmitted(line.trim().to_string()))
                .is_err()
            {
                break;
            }
        }
    });
}
