//! UI module.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod app;
mod errors;
mod state;
mod terminal;

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use app::App;
use crossterm::event::{Event, KeyEventKind};
use futures::channel::mpsc;
use ghsearch_config::Config;
use ghsearch_core::pipeline::{QueryPipeline, UiStateCell};
use ghsearch_ghapi_interface::ApiService;
use terminal::TerminalWrapper;

use self::errors::Result;
pub use errors::UiError;

/// Run TUI interface.
pub async fn run_tui(config: Arc<Config>, api_service: Arc<dyn ApiService>) -> Result<()> {
    let mut terminal = TerminalWrapper::new()?;

    let (input_tx, input_rx) = mpsc::unbounded();
    let cell = UiStateCell::new();
    let mut states = cell.subscribe();
    let handle = QueryPipeline::new(config, api_service).spawn(input_rx, cell);

    let mut app = App::new("GitHub User Search", input_tx);

    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        if states.has_changed().unwrap_or(false) {
            let state = states.borrow_and_update().clone();
            app.on_state(state);
        }

        terminal.draw(|f| {
            app.draw(f);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        // Polling blocks, keep it off the runtime workers
        let event = tokio::task::spawn_blocking(move || -> std::io::Result<Option<Event>> {
            if crossterm::event::poll(timeout)? {
                crossterm::event::read().map(Some)
            } else {
                Ok(None)
            }
        })
        .await??;

        if let Some(Event::Key(key)) = event {
            if key.kind == KeyEventKind::Press {
                app.on_key(key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    handle.unsubscribe().await;

    Ok(())
}
