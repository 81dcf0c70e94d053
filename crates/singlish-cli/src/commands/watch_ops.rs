use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use singlish_core::settings::settings;
use singlish_core::Engine;
use singlish_session::{ConversionWorker, WorkerResult};

const POLL: Duration = Duration::from_millis(20);

/// Treat each stdin line as the full current input and print results as the
/// background worker produces them. Results for lines superseded before they
/// finished converting are never printed.
pub fn watch_cmd() {
    let worker = die!(
        ConversionWorker::spawn(Engine::global()),
        "Error starting conversion worker: {}"
    );
    let lines = spawn_line_reader();
    let mut pending = false;

    loop {
        match lines.recv_timeout(POLL) {
            Ok(line) => {
                worker.submit(line);
                pending = true;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        if let Some(result) = worker.try_recv() {
            print_result(&result);
            pending = false;
        }
    }

    if pending {
        match worker.recv_timeout(settings().session.result_timeout()) {
            Some(result) => print_result(&result),
            None => eprintln!("Timed out waiting for the last conversion"),
        }
    }
}

fn spawn_line_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn print_result(result: &WorkerResult) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "[{}] {}", result.generation, result.output);
    let _ = out.flush();
}
