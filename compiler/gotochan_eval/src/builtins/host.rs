//! Host capability for built-ins that touch the outside world.
//!
//! - `StdHost`: the process console and clock
//! - `BufferHost`: captured output and a scripted keyboard, for tests and
//!   embedding

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crossbeam::channel::{self, Receiver};
use parking_lot::Mutex;
use tracing::warn;

/// Console, keyboard and clock access for the standard built-ins.
pub trait Host {
    /// Write text without a trailing newline.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Clear the console.
    fn clear(&mut self) -> io::Result<()>;

    /// Block until a key arrives. `None` once input is exhausted.
    fn read_key(&mut self) -> Option<char>;

    /// Whether a key is waiting to be read.
    fn key_available(&mut self) -> bool;

    fn sleep(&mut self, duration: Duration);

    /// Wall-clock time since the Unix epoch.
    fn now(&self) -> Duration;
}

/// Host backed by stdout, stdin and the system clock.
///
/// Stdin is read on a background thread that forwards characters over a
/// channel, so `key_available` can poll without blocking. The thread is
/// started on first use.
#[derive(Debug, Default)]
pub struct StdHost {
    keys: Option<Receiver<char>>,
}

impl StdHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn keys(&mut self) -> &Receiver<char> {
        self.keys.get_or_insert_with(spawn_key_reader)
    }
}

fn spawn_key_reader() -> Receiver<char> {
    let (tx, rx) = channel::unbounded();
    let spawned = thread::Builder::new()
        .name("gotochan-stdin".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            let mut line = String::new();
            loop {
                line.clear();
                match stdin.lock().read_line(&mut line) {
                    Ok(0) | Err(_) => return,
                    Ok(_) => {
                        for key in line.chars() {
                            if tx.send(key).is_err() {
                                return;
                            }
                        }
                    }
                }
            }
        });
    if let Err(err) = spawned {
        // The sender was dropped with the closure, so reads see end of input.
        warn!(%err, "failed to start stdin reader");
    }
    rx
}

impl Host for StdHost {
    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        self.write("\x1b[2J\x1b[H")
    }

    fn read_key(&mut self) -> Option<char> {
        self.keys().recv().ok()
    }

    fn key_available(&mut self) -> bool {
        !self.keys().is_empty()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }

    fn now(&self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
    }
}

/// Host that records everything in memory.
///
/// Clones share state: keep one clone to inspect what a run wrote while the
/// interpreter owns the other. Sleeping advances the fake clock instead of
/// blocking.
#[derive(Clone, Debug, Default)]
pub struct BufferHost {
    state: Arc<Mutex<BufferState>>,
}

#[derive(Debug, Default)]
struct BufferState {
    output: String,
    keys: VecDeque<char>,
    sleeps: Vec<Duration>,
    clears: usize,
    clock: Duration,
}

impl BufferHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `keys` for `read_key`.
    #[must_use]
    pub fn with_keys(self, keys: &str) -> Self {
        self.push_keys(keys);
        self
    }

    /// Start the clock at `now`.
    #[must_use]
    pub fn with_clock(self, now: Duration) -> Self {
        self.state.lock().clock = now;
        self
    }

    pub fn push_keys(&self, keys: &str) {
        self.state.lock().keys.extend(keys.chars());
    }

    /// Everything written so far.
    pub fn output(&self) -> String {
        self.state.lock().output.clone()
    }

    /// Every requested sleep, in order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.state.lock().sleeps.clone()
    }

    /// How many times the console was cleared.
    pub fn clears(&self) -> usize {
        self.state.lock().clears
    }
}

impl Host for BufferHost {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.state.lock().output.push_str(text);
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.state.lock().clears += 1;
        Ok(())
    }

    fn read_key(&mut self) -> Option<char> {
        self.state.lock().keys.pop_front()
    }

    fn key_available(&mut self) -> bool {
        !self.state.lock().keys.is_empty()
    }

    fn sleep(&mut self, duration: Duration) {
        let mut state = self.state.lock();
        state.sleeps.push(duration);
        state.clock += duration;
    }

    fn now(&self) -> Duration {
        self.state.lock().clock
    }
}
