use std::path::PathBuf;

use clap::{Parser, Subcommand};

use singlish_cli::commands::{config_ops, convert_ops, watch_ops, ConfigKind};
use singlish_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "sintool", about = "Singlish to Sinhala transliteration")]
struct Cli {
    /// Custom rule table TOML
    #[arg(long, global = true)]
    rules: Option<PathBuf>,
    /// Custom lexicon TOML
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Write JSON trace logs to this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text (reads stdin when no text is given)
    Convert {
        text: Option<String>,
    },
    /// Show how each token was converted
    Explain {
        text: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Convert each stdin line as the input changes
    Watch,
    /// Export or validate configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the embedded default TOML
    Export {
        #[arg(value_enum)]
        kind: ConfigKind,
    },
    /// Validate a TOML file (the embedded default when no file is given)
    Validate {
        #[arg(value_enum)]
        kind: ConfigKind,
        file: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_dir.as_deref());

    for (kind, path) in [
        (ConfigKind::Rules, &cli.rules),
        (ConfigKind::Lexicon, &cli.lexicon),
        (ConfigKind::Settings, &cli.settings),
    ] {
        if let Some(path) = path {
            config_ops::install_file(kind, path);
        }
    }

    match cli.command {
        Command::Convert { text } => convert_ops::convert_cmd(&convert_ops::input_text(text)),
        Command::Explain { text, json } => {
            convert_ops::explain_cmd(&convert_ops::input_text(text), json)
        }
        Command::Watch => watch_ops::watch_cmd(),
        Command::Config { action } => match action {
            ConfigAction::Export { kind } => config_ops::export_cmd(kind),
            ConfigAction::Validate { kind, file } => {
                config_ops::validate_cmd(kind, file.as_deref())
            }
        },
    }
}
