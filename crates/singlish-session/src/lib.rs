//! Incremental conversion for text that changes as the user types.
//!
//! `IncrementalConverter` re-runs the conversion on every input change and
//! publishes a result only if no newer input arrived in the meantime.
//! `ConversionWorker` does the same on a background thread so a host UI never
//! blocks on conversion.

mod types;
mod worker;

#[cfg(test)]
mod tests;

use tracing::{debug, trace};

use singlish_core::Engine;

pub use types::{ConversionState, ConverterState, Job, Publish};
pub use worker::{ConversionWorker, WorkerResult};

/// Anything that turns an input string into its converted output.
pub trait Convert: Send + 'static {
    fn convert(&self, input: &str) -> String;
}

impl Convert for Engine<'static> {
    fn convert(&self, input: &str) -> String {
        Engine::convert(self, input)
    }
}

/// Per-session conversion state machine with last-input-wins publishing.
pub struct IncrementalConverter<C = Engine<'static>> {
    converter: C,
    state: ConverterState,
    conversion: ConversionState,
}

impl IncrementalConverter<Engine<'static>> {
    /// Converter over the global engine.
    pub fn new() -> Self {
        Self::with_converter(Engine::global())
    }
}

impl Default for IncrementalConverter<Engine<'static>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Convert> IncrementalConverter<C> {
    pub fn with_converter(converter: C) -> Self {
        Self {
            converter,
            state: ConverterState::Idle,
            conversion: ConversionState::default(),
        }
    }

    /// Start converting `input`. Any job issued earlier becomes stale.
    pub fn begin(&mut self, input: &str) -> Job {
        self.conversion.generation += 1;
        let generation = self.conversion.generation;
        self.state = ConverterState::Converting { generation };
        trace!(generation, "conversion started");
        Job::new(generation, input.to_string())
    }

    /// Run the conversion for `job` without touching session state.
    pub fn convert_job(&self, job: &Job) -> String {
        self.converter.convert(job.input())
    }

    /// Publish `output` for `job` if it is still the newest job.
    pub fn finish(&mut self, job: Job, output: String) -> Publish {
        if job.generation() != self.conversion.generation {
            debug!(
                job = job.generation(),
                current = self.conversion.generation,
                "stale conversion discarded"
            );
            return Publish::Stale;
        }
        self.conversion.last_input = job.into_input();
        self.conversion.last_output = output;
        self.state = ConverterState::Idle;
        Publish::Published
    }

    /// Handle an input change synchronously and return the new output.
    ///
    /// Unchanged input keeps the published output without converting again.
    pub fn on_input(&mut self, input: &str) -> &str {
        let unchanged = self.state == ConverterState::Idle
            && self.conversion.generation > 0
            && self.conversion.last_input == input;
        if !unchanged {
            let job = self.begin(input);
            let output = self.convert_job(&job);
            self.finish(job, output);
        }
        &self.conversion.last_output
    }

    pub fn output(&self) -> &str {
        &self.conversion.last_output
    }

    pub fn state(&self) -> ConverterState {
        self.state
    }

    pub fn conversion(&self) -> &ConversionState {
        &self.conversion
    }

    pub fn generation(&self) -> u64 {
        self.conversion.generation
    }
}
