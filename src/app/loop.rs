use crate::app::{
    action::Action, features::clipboard::CommandRuntime, input::map_event_to_action, reducer,
    state::AppState, ui,
};
use crate::domain::clipboard::ClipboardFacade;

use anyhow::Result;
use crossterm::event::{self, Event, MouseButton, MouseEventKind};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);
const EVENT_BUFFER: usize = 100;

/// Runs the app against the real terminal until the user quits.
pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    clipboard: Arc<dyn ClipboardFacade>,
) -> Result<()> {
    run_loop_with_events(terminal, app_state, clipboard, spawn_terminal_reader()).await
}

type TerminalEvent = Result<Event, std::io::Error>;

/// Forwards crossterm events from a blocking thread. A read error is sent once
/// and ends the reader.
fn spawn_terminal_reader() -> mpsc::Receiver<TerminalEvent> {
    let (tx, rx) = mpsc::channel(EVENT_BUFFER);
    tokio::task::spawn_blocking(move || loop {
        let event = event::read();
        let failed = event.is_err();
        if tx.blocking_send(event).is_err() || failed {
            break;
        }
    });
    rx
}

/// Remembers a left click so the next one can be recognised as a double click.
fn note_click(app_state: &mut AppState, event: &Event) {
    if let Event::Mouse(mouse) = event {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            app_state.last_click_time = Some(Instant::now());
            app_state.last_click_pos = Some((mouse.column, mouse.row));
        }
    }
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    clipboard: Arc<dyn ClipboardFacade>,
    mut event_rx: mpsc::Receiver<TerminalEvent>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(EVENT_BUFFER);
    let mut runtime = CommandRuntime::new(clipboard, action_tx);
    let mut ticker = interval(TICK_RATE);
    tracing::debug!(tick_ms = TICK_RATE.as_millis() as u64, "event loop started");

    while !app_state.should_quit {
        terminal.draw(|f| ui::draw(f, &mut app_state))?;

        let action = tokio::select! {
            _ = ticker.tick() => Some(Action::Tick),
            Some(event) = event_rx.recv() => {
                let event = event?;
                let action = map_event_to_action(event.clone(), &app_state, terminal.size()?);
                // Recorded after mapping so the current click is compared with the previous one
                note_click(&mut app_state, &event);
                action
            }
            Some(result) = action_rx.recv() => Some(result),
        };

        let Some(action) = action else { continue };
        if let Some(command) = reducer::update(&mut app_state, action) {
            runtime.handle(command);
        }
    }

    tracing::debug!(frames = app_state.frame_count, "event loop finished");
    Ok(())
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
