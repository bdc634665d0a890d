#![allow(dead_code)]

pub mod flaky_server;

use paperfetch_core::fetcher::{ByteStream, FetchError, Fetcher};
use paperfetch_core::retry::Sleeper;
use std::io::{self, Cursor, Read};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Fetcher that fails the first `failures` calls, then returns the id as bytes.
pub struct FailingThenOk {
    failures: u32,
    calls: AtomicU32,
}

impl FailingThenOk {
    pub fn new(failures: u32) -> Self {
        Self {
            failures,
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Fetcher for FailingThenOk {
    fn fetch(&self, id: &str) -> Result<ByteStream, FetchError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if n <= self.failures {
            return Err(FetchError::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                format!("{} attempt {}", id, n),
            )));
        }
        Ok(Box::new(Cursor::new(id.as_bytes().to_vec())))
    }
}

/// Records requested delays instead of sleeping.
#[derive(Default)]
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }

    pub fn total(&self) -> Duration {
        self.delays().into_iter().sum()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, delay: Duration) {
        self.delays.lock().unwrap().push(delay);
    }
}

pub fn read_all(mut stream: ByteStream) -> Vec<u8> {
    let mut out = Vec::new();
    stream.read_to_end(&mut out).unwrap();
    out
}
