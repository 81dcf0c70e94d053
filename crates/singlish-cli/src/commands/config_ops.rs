use std::fs;
use std::path::Path;

use singlish_core::morphology::{self, Lexicon};
use singlish_core::rules::{self, RuleTrie};
use singlish_core::settings;

use super::{ConfigError, ConfigKind};

pub fn default_toml(kind: ConfigKind) -> &'static str {
    match kind {
        ConfigKind::Rules => rules::default_toml(),
        ConfigKind::Lexicon => morphology::default_toml(),
        ConfigKind::Settings => settings::default_toml(),
    }
}

/// Parse `content` as `kind` and describe what it holds.
pub fn check(kind: ConfigKind, content: &str) -> Result<String, ConfigError> {
    let summary = match kind {
        ConfigKind::Rules => {
            let entries = rules::parse_rules_toml(content)?;
            format!("{} rules", entries.len())
        }
        ConfigKind::Lexicon => {
            let lexicon = Lexicon::from_toml(content)?;
            format!(
                "{} words, {} roots, {} foreign terms",
                lexicon.word_count(),
                lexicon.root_count(),
                lexicon.foreign_count()
            )
        }
        ConfigKind::Settings => {
            let s = settings::parse_settings_toml(content)?;
            format!(
                "engine.max_word_chars={}, engine.numerals={:?}, engine.max_suffix_chain={}, session.result_timeout_ms={}",
                s.engine.max_word_chars,
                s.engine.numerals,
                s.engine.max_suffix_chain,
                s.session.result_timeout_ms
            )
        }
    };
    Ok(summary)
}

/// Replace the embedded default for `kind` with `content`. Must run before
/// the first conversion.
pub fn install(kind: ConfigKind, content: String) -> Result<(), ConfigError> {
    match kind {
        ConfigKind::Rules => RuleTrie::init_custom(content)?,
        ConfigKind::Lexicon => Lexicon::init_custom(content)?,
        ConfigKind::Settings => settings::init_custom(content)?,
    }
    Ok(())
}

pub fn export_cmd(kind: ConfigKind) {
    print!("{}", default_toml(kind));
}

pub fn validate_cmd(kind: ConfigKind, file: Option<&str>) {
    let content = match file {
        Some(file) => die!(fs::read_to_string(file), "Error reading {file}: {}"),
        None => default_toml(kind).to_string(),
    };
    let summary = die!(check(kind, &content), "Error: {}");
    println!("OK: {summary}");
}

pub fn install_file(kind: ConfigKind, path: &Path) {
    let content = die!(
        fs::read_to_string(path),
        "Error reading {}: {}",
        path.display()
    );
    die!(install(kind, content), "Error: {}");
    tracing::debug!(?kind, path = %path.display(), "custom configuration installed");
}
