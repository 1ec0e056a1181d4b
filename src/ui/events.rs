use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize,
    /// The results view changed (fetch progress or removal).
    StateChanged,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the terminal input thread.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                let forwarded = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                        Ok(Event::Resize(..)) => event_tx.send(AppEvent::Resize),
                        Ok(_) => Ok(()),
                        Err(err) => {
                            tracing::error!(error = %err, "Terminal read failed");
                            break;
                        }
                    },
                    Ok(false) => Ok(()),
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal poll failed");
                        break;
                    }
                };
                if forwarded.is_err() {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
