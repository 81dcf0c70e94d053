//! Singlish-to-Sinhala transliteration engine.
//!
//! Converts romanized colloquial Sinhala into Sinhala script. The pipeline is
//! tokenizer → pass-through pre-check → suffix handler → phonetic matcher →
//! output composer; see [`converter::Engine`].

pub mod composer;
pub mod converter;
pub mod matcher;
pub mod morphology;
pub mod passthrough;
pub mod rules;
pub mod settings;
pub mod tokenizer;
pub mod unicode;

pub use composer::Segment;
pub use converter::{convert, convert_segments, Engine};
