use crate::config::Config;
use crate::session::SearchSession;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::stories::StoriesState;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc;
use std::time::Duration;
use tokio::sync::watch;

/// Run the terminal UI until the user quits.
///
/// Fetches run on a tokio runtime owned by this function; the draw loop
/// itself stays on the calling thread.
pub fn run(config: &Config) -> io::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let _enter = runtime.enter();

    let session = SearchSession::from_config(config);
    let states = session.subscribe();
    let mut app = App::new(session);

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    forward_state_changes(states, events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick | AppEvent::Resize | AppEvent::StateChanged) => {}
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Terminal UI closed");
    Ok(())
}

/// Wake the draw loop whenever the store publishes a new state.
fn forward_state_changes(mut states: watch::Receiver<StoriesState>, tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        while states.changed().await.is_ok() {
            if tx.send(AppEvent::StateChanged).is_err() {
                break;
            }
        }
    });
}
