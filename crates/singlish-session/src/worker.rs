use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::Convert;

struct Work {
    generation: u64,
    input: String,
}

/// A finished background conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerResult {
    pub generation: u64,
    pub input: String,
    pub output: String,
}

/// Runs conversions on a dedicated thread, surfacing only the result for the
/// newest submitted input.
pub struct ConversionWorker {
    work_tx: Option<mpsc::Sender<Work>>,
    result_rx: Mutex<mpsc::Receiver<WorkerResult>>,
    generation: Arc<AtomicU64>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ConversionWorker {
    pub fn spawn<C: Convert>(converter: C) -> io::Result<Self> {
        let generation = Arc::new(AtomicU64::new(0));
        let (work_tx, work_rx) = mpsc::channel::<Work>();
        let (result_tx, result_rx) = mpsc::channel::<WorkerResult>();

        let handle = {
            let generation = Arc::clone(&generation);
            thread::Builder::new()
                .name("singlish-convert".into())
                .spawn(move || conversion_worker(work_rx, result_tx, generation, converter))?
        };

        Ok(Self {
            work_tx: Some(work_tx),
            result_rx: Mutex::new(result_rx),
            generation,
            handle: Some(handle),
        })
    }

    /// Queue `input` for conversion. Everything submitted earlier is stale.
    pub fn submit(&self, input: impl Into<String>) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(tx) = &self.work_tx {
            let _ = tx.send(Work {
                generation,
                input: input.into(),
            });
        }
        generation
    }

    /// Mark all queued and running work as stale.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Result for the current generation, if it is ready.
    pub fn try_recv(&self) -> Option<WorkerResult> {
        let rx = self.result_rx.lock().ok()?;
        while let Ok(result) = rx.try_recv() {
            if self.is_current(&result) {
                return Some(result);
            }
        }
        None
    }

    /// Wait up to `timeout` for the result of the current generation.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<WorkerResult> {
        let deadline = Instant::now() + timeout;
        let rx = self.result_rx.lock().ok()?;
        loop {
            let remaining = deadline.checked_duration_since(Instant::now())?;
            let result = rx.recv_timeout(remaining).ok()?;
            if self.is_current(&result) {
                return Some(result);
            }
        }
    }

    fn is_current(&self, result: &WorkerResult) -> bool {
        let current = self.current_generation();
        if result.generation == current {
            true
        } else {
            trace!(result = result.generation, current, "dropping stale result");
            false
        }
    }
}

impl Drop for ConversionWorker {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop.
        self.work_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn conversion_worker<C: Convert>(
    rx: mpsc::Receiver<Work>,
    tx: mpsc::Sender<WorkerResult>,
    generation: Arc<AtomicU64>,
    converter: C,
) {
    while let Ok(work) = rx.recv() {
        // Drain to latest
        let mut latest = work;
        while let Ok(newer) = rx.try_recv() {
            latest = newer;
        }

        if latest.generation != generation.load(Ordering::SeqCst) {
            continue;
        }

        let output = converter.convert(&latest.input);

        if latest.generation != generation.load(Ordering::SeqCst) {
            debug!(generation = latest.generation, "input changed during conversion");
            continue;
        }

        let _ = tx.send(WorkerResult {
            generation: latest.generation,
            input: latest.input,
            output,
        });
    }
}
