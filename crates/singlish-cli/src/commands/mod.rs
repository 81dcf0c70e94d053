use clap::ValueEnum;

use singlish_core::morphology::LexiconError;
use singlish_core::rules::RuleConfigError;
use singlish_core::settings::SettingsError;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod convert_ops;
pub mod watch_ops;

/// The three replaceable configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigKind {
    Rules,
    Lexicon,
    Settings,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("rules: {0}")]
    Rules(#[from] RuleConfigError),
    #[error("lexicon: {0}")]
    Lexicon(#[from] LexiconError),
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),
}
