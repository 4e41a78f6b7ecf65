use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

#[cfg(unix)]
const TERMINATION_SIGNALS: &[i32] = &[
    signal_hook::consts::SIGTERM,
    signal_hook::consts::SIGHUP,
];
#[cfg(not(unix))]
const TERMINATION_SIGNALS: &[i32] = &[signal_hook::consts::SIGTERM];

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    /// OS asked us to exit (SIGTERM, SIGHUP).
    Shutdown,
}

/// Pumps terminal input on a background thread.
///
/// The thread only forwards events; all state changes happen on the thread
/// that calls [`EventHandler::next`]. [`EventHandler::stop`] (or drop) joins
/// it, so nothing reads the terminal once the UI starts tearing down.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            let shutdown_flag = Arc::new(AtomicBool::new(false));
            let mut registered = Vec::new();
            for &signal in TERMINATION_SIGNALS {
                match signal_hook::flag::register(signal, Arc::clone(&shutdown_flag)) {
                    Ok(id) => registered.push(id),
                    Err(err) => {
                        tracing::warn!("Failed to register handler for signal {}: {}", signal, err)
                    }
                }
            }

            let mut last_tick = Instant::now();
            loop {
                if thread_stop.load(Ordering::SeqCst) {
                    break;
                }

                if shutdown_flag.swap(false, Ordering::Relaxed)
                    && tx.send(AppEvent::Shutdown).is_err()
                {
                    break;
                }

                // Short poll so signals are noticed between key presses.
                let timeout =
                    tick_rate.saturating_sub(last_tick.elapsed()).min(Duration::from_millis(50));

                let forwarded = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                        Ok(Event::Mouse(mouse)) => Some(AppEvent::Mouse(mouse)),
                        Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                        Ok(_) => None,
                        Err(err) => {
                            tracing::error!("Terminal read failed: {}", err);
                            break;
                        }
                    },
                    Ok(false) => None,
                    Err(err) => {
                        tracing::error!("Terminal poll failed: {}", err);
                        break;
                    }
                };

                if let Some(app_event) = forwarded {
                    if tx.send(app_event).is_err() {
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }

            for id in registered {
                signal_hook::low_level::unregister(id);
            }
        });

        Self {
            rx,
            stop,
            handle: Some(handle),
        }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Stop the input thread and wait for it. Idempotent.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("Input thread panicked");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop();
    }
}
