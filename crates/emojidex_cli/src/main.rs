//! Command-line front end for the emoji dictionary.
//!
//! # Responsibility
//! - Map subcommands onto `EmojiBook` mutations and print results.
//! - Own all terminal output and exit codes; core never prints.
//!
//! # Invariants
//! - Positions on the command line are 1-based display positions.
//! - A failed save is reported as a warning; the command still succeeds.
//! - A closed stdout (e.g. `emojidex list | head`) ends the command quietly.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use emojidex_core::{
    classify_symbol, init_logging, AppConfig, ConfigOverrides, EmojiBook, EmojiDraft, EmojiRecord,
    EmojiStore, JsonFileStore, MutationOutcome, SymbolVerdict,
};
use log::info;
use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Parser)]
#[command(name = "emojidex", version, about = "Keep a personal dictionary of emoji")]
struct Cli {
    /// Dictionary file [env: EMOJIDEX_DATA_PATH]
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Directory for log files [env: EMOJIDEX_LOG_DIR]
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error [env: EMOJIDEX_LOG_LEVEL]
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(flatten)]
    Book(BookCommand),
    /// Check whether TEXT is exactly one emoji
    Check { text: String },
    /// Print the dictionary file location
    Path,
}

// Subcommands that open the dictionary file.
#[derive(Debug, Subcommand)]
enum BookCommand {
    /// List all emojis in display order
    List,
    /// Show every field of one emoji
    Show { position: usize },
    /// Add an emoji at the end of the list
    Add {
        symbol: String,
        name: String,
        description: String,
        usage: String,
    },
    /// Edit the fields of one emoji
    Edit {
        position: usize,
        #[arg(long)]
        symbol: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        usage: Option<String>,
    },
    /// Delete one emoji
    Remove { position: usize },
    /// Move an emoji to another position
    Move { from: usize, to: usize },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Book(command) => command.name(),
            Self::Check { .. } => "check",
            Self::Path => "path",
        }
    }
}

impl BookCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Show { .. } => "show",
            Self::Add { .. } => "add",
            Self::Edit { .. } => "edit",
            Self::Remove { .. } => "remove",
            Self::Move { .. } => "move",
        }
    }
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            data_path: self.data.clone(),
            log_dir: self.log_dir.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) if is_broken_pipe(&err) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = AppConfig::from_env().merged_with(&cli.overrides());
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
    info!(
        "event=cli_command module=cli status=start command={} data_path={}",
        cli.command.name(),
        config.data_path.display()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Check { text } => Ok(exit_code(check(text, &mut out)?)),
        Command::Path => {
            writeln!(out, "{}", config.data_path.display())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Book(command) => {
            let mut book = EmojiBook::open(JsonFileStore::new(&config.data_path));
            execute(command, &mut book, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn execute<S: EmojiStore>(
    command: &BookCommand,
    book: &mut EmojiBook<S>,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        BookCommand::List => print_table(book.records(), out)?,
        BookCommand::Show { position } => {
            let index = to_index(*position)?;
            let id = book.id_at(index)?;
            let record = &book.records()[index];
            writeln!(out, "id:          {id}")?;
            writeln!(out, "symbol:      {}", record.symbol)?;
            writeln!(out, "name:        {}", record.name)?;
            writeln!(out, "description: {}", record.description)?;
            writeln!(out, "usage:       {}", record.usage)?;
        }
        BookCommand::Add {
            symbol,
            name,
            description,
            usage,
        } => {
            let record = EmojiDraft::new(symbol, name, description, usage)
                .into_record()
                .context("cannot add emoji")?;
            let outcome = book.append(record);
            report_unsaved(&outcome);
            writeln!(out, "Added {} {} at position {}", symbol, name, book.len())?;
        }
        BookCommand::Edit {
            position,
            symbol,
            name,
            description,
            usage,
        } => {
            let index = to_index(*position)?;
            let id = book.id_at(index)?;
            let mut draft = EmojiDraft::from(&book.records()[index]);
            apply_field(&mut draft.symbol, symbol);
            apply_field(&mut draft.name, name);
            apply_field(&mut draft.description, description);
            apply_field(&mut draft.usage, usage);
            draft.validate().context("cannot save edit")?;

            let outcome = book.replace(id, draft)?;
            report_unsaved(&outcome);
            let record = &book.records()[index];
            writeln!(
                out,
                "Updated {} {} at position {}",
                record.symbol, record.name, position
            )?;
        }
        BookCommand::Remove { position } => {
            let id = book.id_at(to_index(*position)?)?;
            let outcome = book.remove(id)?;
            report_unsaved(&outcome);
            writeln!(out, "Removed {} {}", outcome.value.symbol, outcome.value.name)?;
        }
        BookCommand::Move { from, to } => {
            let outcome = book.move_record(to_index(*from)?, to_index(*to)?)?;
            report_unsaved(&outcome);
            writeln!(out, "Moved position {from} to {to}")?;
        }
    }
    Ok(())
}

/// Prints the verdict for `text` and returns whether it is a single emoji.
fn check(text: &str, out: &mut impl Write) -> io::Result<bool> {
    let verdict = classify_symbol(text);
    match verdict {
        SymbolVerdict::SingleEmoji => writeln!(out, "yes: a single emoji")?,
        SymbolVerdict::Empty => writeln!(out, "no: input is empty")?,
        SymbolVerdict::MultipleCharacters(count) => {
            writeln!(out, "no: {count} characters, expected exactly one")?
        }
        SymbolVerdict::NotEmoji => writeln!(out, "no: not an emoji")?,
    }
    Ok(verdict.is_single_emoji())
}

fn exit_code(accepted: bool) -> ExitCode {
    if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == ErrorKind::BrokenPipe)
    })
}

fn to_index(position: usize) -> Result<usize> {
    if position == 0 {
        bail!("positions start at 1");
    }
    Ok(position - 1)
}

fn apply_field(field: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        field.clone_from(value);
    }
}

fn report_unsaved<T>(outcome: &MutationOutcome<T>) {
    if let Some(err) = outcome.save_error() {
        eprintln!("warning: change kept for this run but not saved: {err}");
    }
}

fn print_table(records: &[EmojiRecord], out: &mut impl Write) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "(no emojis)");
    }

    let name_width = records
        .iter()
        .map(|record| record.name.width())
        .max()
        .unwrap_or(0);
    let number_width = records.len().to_string().len();
    for (index, record) in records.iter().enumerate() {
        writeln!(
            out,
            "{:>number_width$}  {}  {}  {}",
            index + 1,
            pad(&record.symbol, 2),
            pad(&record.name, name_width),
            record.usage
        )?;
    }
    Ok(())
}

/// Pads `text` with spaces to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}
