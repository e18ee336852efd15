//! Four-character word guessing game - CLI
//!
//! Full-screen TUI, line-based console game, HTTP server and a few helper
//! commands around the same game engine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sizi_wordle::{
    commands::{compare_words, run_simple},
    config::{GameConfig, ServerConfig},
    game::{GameService, MemorySessionStore},
    output::{print_compare_result, print_word_bank},
    transliterate::{PinyinTransliterator, TableTransliterator, TransliteratorKind},
    wordlists::{WordBank, WordListSource},
};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sizi_wordle",
    about = "Guess the four-character word from character, pinyin and tone feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default), 'classic', 'casual', or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: WordListSource,

    /// Attempts per game (default: 6, or 15 when serving)
    #[arg(short = 'm', long, global = true)]
    max_attempts: Option<NonZeroU32>,

    /// Pinyin table file ('<character> <pinyin>' per line) instead of the built-in data
    #[arg(short = 't', long, global = true)]
    pinyin_table: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Serve the game over HTTP
    Serve {
        #[command(flatten)]
        server: ServerConfig,
    },

    /// Score one guess against a chosen target
    Compare {
        /// The target word
        target: String,

        /// The guessed word
        guess: String,
    },

    /// List the words of the active word list
    Words,
}

impl Commands {
    /// Log filter used when `RUST_LOG` is not set
    const fn default_log_filter(&self) -> &'static str {
        match self {
            Self::Play => "off",
            Self::Serve { .. } => "info",
            Self::Simple | Self::Compare { .. } | Self::Words => "warn",
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Choose the transliterator based on the --pinyin-table flag
fn load_transliterator(table: Option<&Path>) -> Result<TransliteratorKind> {
    match table {
        None => Ok(TransliteratorKind::Pinyin(PinyinTransliterator)),
        Some(path) => {
            let table = TableTransliterator::load_from_file(path)
                .with_context(|| format!("failed to load pinyin table {}", path.display()))?;
            info!(path = %path.display(), entries = table.len(), "loaded pinyin table");
            Ok(TransliteratorKind::Table(table))
        }
    }
}

fn load_bank(source: &WordListSource) -> Result<WordBank> {
    let bank = source
        .load()
        .with_context(|| format!("failed to load word list {source:?}"))?;
    info!(words = bank.len(), "loaded word list");
    Ok(bank)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(command.default_log_filter());

    let transliterator = load_transliterator(cli.pinyin_table.as_deref())?;

    match command {
        Commands::Play => {
            let config = cli.max_attempts.map_or_else(GameConfig::default, GameConfig::new);
            let service = build_service(&cli.wordlist, transliterator, config)?;
            run_play_command(service)
        }
        Commands::Simple => {
            let config = cli.max_attempts.map_or_else(GameConfig::default, GameConfig::new);
            let service = build_service(&cli.wordlist, transliterator, config)?;
            run_simple(&service)
        }
        Commands::Serve { server } => {
            let config = cli.max_attempts.map_or_else(GameConfig::web, GameConfig::new);
            let service = build_service(&cli.wordlist, transliterator, config)?;
            run_serve_command(service, &server)
        }
        Commands::Compare { target, guess } => {
            let result = compare_words(&target, &guess, &transliterator)
                .context("failed to compare words")?;
            print_compare_result(&result);
            Ok(())
        }
        Commands::Words => {
            print_word_bank(&load_bank(&cli.wordlist)?);
            Ok(())
        }
    }
}

fn build_service(
    source: &WordListSource,
    transliterator: TransliteratorKind,
    config: GameConfig,
) -> Result<GameService<MemorySessionStore, TransliteratorKind>> {
    Ok(GameService::new(
        MemorySessionStore::new(),
        load_bank(source)?,
        transliterator,
        config,
    ))
}

fn run_serve_command(
    service: GameService<MemorySessionStore, TransliteratorKind>,
    server: &ServerConfig,
) -> Result<()> {
    let address = format!("{}:{}", server.host, server.port);
    actix_web::rt::System::new()
        .block_on(sizi_wordle::server::run(service, server))
        .with_context(|| format!("server on {address} failed"))
}

fn run_play_command(service: GameService<MemorySessionStore, TransliteratorKind>) -> Result<()> {
    use sizi_wordle::interactive::{App, run_tui};

    let app = App::new(service)?;
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_accepts_short_port_with_global_flags() {
        let cli = Cli::try_parse_from(["sizi_wordle", "serve", "-p", "8080", "-t", "table.txt"])
            .unwrap();

        assert_eq!(cli.pinyin_table.as_deref(), Some(Path::new("table.txt")));
        match cli.command {
            Some(Commands::Serve { server }) => assert_eq!(server.port, 8080),
            _ => panic!("expected the serve command"),
        }
    }
}
