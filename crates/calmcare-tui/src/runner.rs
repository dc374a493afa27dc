//! Main TUI runner - terminal lifecycle and event loop

use calmcare_app::config::Settings;
use calmcare_app::handler;
use calmcare_app::message::Message;
use calmcare_app::signals;
use calmcare_app::AppState;
use calmcare_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the TUI until the user quits or a signal arrives
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let tick_rate = settings.behavior.tick_rate();
    let mut state = AppState::new(settings);
    let mut term = terminal::init()?;

    // Signal handler feeds Message::Quit into the loop
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    let signal_task = signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx, tick_rate);

    signal_task.abort();
    let restored = terminal::restore();
    info!("CalmCare exiting after {} page mounts", state.mounts);

    // A loop error wins over a restore error
    result.and(restored)
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    tick_rate: std::time::Duration,
) -> Result<()> {
    while !state.should_quit() {
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }
        if state.should_quit() {
            break;
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll(tick_rate)? {
            process_message(state, message);
        }
    }
    Ok(())
}

/// Run a message and its follow-ups through the update function
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = handler::update(state, m).message;
    }
}
