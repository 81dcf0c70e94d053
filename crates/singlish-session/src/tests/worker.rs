use std::sync::{mpsc, Mutex};
use std::time::Duration;

use super::Upper;
use crate::{Convert, ConversionWorker};

const WAIT: Duration = Duration::from_secs(5);

/// Reports each input it starts on, then blocks until released.
struct Gated {
    started: Mutex<mpsc::Sender<String>>,
    release: Mutex<mpsc::Receiver<()>>,
}

impl Convert for Gated {
    fn convert(&self, input: &str) -> String {
        if let Ok(tx) = self.started.lock() {
            let _ = tx.send(input.to_string());
        }
        if let Ok(rx) = self.release.lock() {
            let _ = rx.recv();
        }
        input.to_uppercase()
    }
}

fn gated() -> (Gated, mpsc::Receiver<String>, mpsc::Sender<()>) {
    let (started_tx, started_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let gated = Gated {
        started: Mutex::new(started_tx),
        release: Mutex::new(release_rx),
    };
    (gated, started_rx, release_tx)
}

#[test]
fn test_single_submit() {
    let worker = ConversionWorker::spawn(Upper).unwrap();
    let generation = worker.submit("mama");
    assert_eq!(generation, 1);

    let result = worker.recv_timeout(WAIT).unwrap();
    assert_eq!(result.generation, 1);
    assert_eq!(result.input, "mama");
    assert_eq!(result.output, "MAMA");
    assert!(worker.try_recv().is_none());
}

#[test]
fn test_input_changed_during_conversion() {
    let (converter, started, release) = gated();
    let worker = ConversionWorker::spawn(converter).unwrap();

    worker.submit("a");
    assert_eq!(started.recv_timeout(WAIT).unwrap(), "a");
    // "a" is still converting when "ab" arrives
    worker.submit("ab");
    release.send(()).unwrap();

    assert_eq!(started.recv_timeout(WAIT).unwrap(), "ab");
    release.send(()).unwrap();

    let result = worker.recv_timeout(WAIT).unwrap();
    assert_eq!(result.input, "ab");
    assert_eq!(result.output, "AB");
    assert_eq!(result.generation, 2);
    assert!(worker.try_recv().is_none());
}

#[test]
fn test_queued_inputs_skip_to_latest() {
    let (converter, started, release) = gated();
    let worker = ConversionWorker::spawn(converter).unwrap();

    worker.submit("m");
    assert_eq!(started.recv_timeout(WAIT).unwrap(), "m");
    worker.submit("ma");
    worker.submit("mam");
    worker.submit("mama");
    release.send(()).unwrap();

    // The worker drains "ma" and "mam" without converting them.
    assert_eq!(started.recv_timeout(WAIT).unwrap(), "mama");
    release.send(()).unwrap();

    let result = worker.recv_timeout(WAIT).unwrap();
    assert_eq!(result.output, "MAMA");
    assert_eq!(result.generation, 4);
}

#[test]
fn test_invalidate_discards_running_work() {
    let (converter, started, release) = gated();
    let worker = ConversionWorker::spawn(converter).unwrap();

    worker.submit("a");
    assert_eq!(started.recv_timeout(WAIT).unwrap(), "a");
    worker.invalidate();
    release.send(()).unwrap();

    assert!(worker.recv_timeout(Duration::from_millis(200)).is_none());
    assert_eq!(worker.current_generation(), 2);
}

#[test]
fn test_engine_worker() {
    let worker = ConversionWorker::spawn(singlish_core::Engine::global()).unwrap();
    worker.submit("mama gedhara");
    worker.submit("mama gedhara yanavaa.");
    let result = worker.recv_timeout(WAIT).unwrap();
    assert_eq!(result.output, "මම ගෙදර යනවා.");
}

#[test]
fn test_drop_joins_worker() {
    let worker = ConversionWorker::spawn(Upper).unwrap();
    worker.submit("a");
    drop(worker);
}
