/// Whether a conversion is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterState {
    Idle,
    Converting { generation: u64 },
}

/// The last published conversion of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionState {
    pub last_input: String,
    pub last_output: String,
    /// Bumped on every input change; only the newest generation may publish.
    pub generation: u64,
}

/// Ticket for one conversion, issued by `begin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    generation: u64,
    input: String,
}

impl Job {
    pub(crate) fn new(generation: u64, input: String) -> Self {
        Self { generation, input }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn into_input(self) -> String {
        self.input
    }
}

/// Outcome of `finish`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Publish {
    Published,
    /// A newer input arrived first; the result was discarded.
    Stale,
}
