//! sqaull — docs highlighting from the terminal
//!
//! # Usage
//!
//! ```bash
//! # Highlight a query-builder string
//! sqaull "main:users slay:* sus:age>18"
//!
//! # Highlight SQL as HTML spans
//! sqaull "SELECT * FROM users" --mode sql --format html
//!
//! # Show a playground example with its SQL
//! sqaull show "Basic Query" --syntax classic
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use sqaull::prelude::*;
use sqaull::{catalog, config, slang};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sqaull")]
#[command(author = "sqaull contributors")]
#[command(version)]
#[command(about = "💀 Highlight sqaull queries and their SQL", long_about = None)]
#[command(after_help = "EXAMPLES:
    sqaull 'main:users slay:name,email sus:age>18'
    sqaull 'SELECT * FROM users WHERE id = $1' --mode sql --format html
    sqaull show sorting --syntax classic")]
struct Cli {
    /// Text to highlight
    source: Option<String>,

    /// Highlighting mode
    #[arg(short, long, value_enum, default_value = "dsl", global = true)]
    mode: CliMode,

    /// Output format
    #[arg(short, long, value_enum, default_value = "ansi", global = true)]
    format: OutputFormat,

    /// Merge adjacent untagged fragments (json output)
    #[arg(long, global = true)]
    merge: bool,

    /// Preferences file
    #[arg(long, env = "SQAULL_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliMode {
    Dsl,
    Sql,
    Template,
    TerminalSql,
}

impl From<CliMode> for Mode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Dsl => Mode::Dsl,
            CliMode::Sql => Mode::Sql,
            CliMode::Template => Mode::Template,
            CliMode::TerminalSql => Mode::TerminalSql,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ansi,
    Html,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliSyntax {
    Classic,
    #[value(name = "genalpha", alias = "gen-alpha")]
    GenAlpha,
}

impl From<CliSyntax> for SyntaxMode {
    fn from(syntax: CliSyntax) -> Self {
        match syntax {
            CliSyntax::Classic => SyntaxMode::Classic,
            CliSyntax::GenAlpha => SyntaxMode::GenAlpha,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeAction {
    Dark,
    Light,
    Toggle,
}

#[derive(Subcommand)]
enum Commands {
    /// List the playground examples
    Examples,
    /// Highlight a playground example and its SQL
    Show {
        /// Example name, e.g. "Basic Query"
        name: String,
        /// Spelling to show (defaults to the saved preference)
        #[arg(short, long)]
        syntax: Option<CliSyntax>,
        /// Show classic and Gen Alpha side by side (html output)
        #[arg(long)]
        both: bool,
    },
    /// Replay the landing-page terminal examples
    Terminal,
    /// Show the Gen Alpha slang reference
    Slang {
        /// Only show the entry for this keyword
        keyword: Option<String>,
    },
    /// Show or change the saved theme
    Theme { action: Option<ThemeAction> },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sqaull=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let prefs = config::load(cli.config.as_deref())?;

    match &cli.command {
        Some(Commands::Examples) => list_examples(cli.format),
        Some(Commands::Show { name, syntax, both }) => {
            let syntax = syntax.map(SyntaxMode::from).unwrap_or(prefs.syntax);
            show_example(name, Preferences { syntax, ..prefs }, cli.format, *both)
        }
        Some(Commands::Terminal) => {
            replay_terminal(&prefs);
            Ok(())
        }
        Some(Commands::Slang { keyword }) => show_slang(keyword.as_deref()),
        Some(Commands::Theme { action }) => set_theme(cli, prefs, *action),
        None => {
            if let Some(source) = &cli.source {
                highlight(source, cli, &prefs)
            } else {
                println!("{}", "💀 sqaull — SQL that hits different".cyan().bold());
                println!();
                println!("Usage: sqaull <SOURCE> [OPTIONS]");
                println!();
                println!("Try: sqaull --help");
                Ok(())
            }
        }
    }
}

fn highlight(source: &str, cli: &Cli, prefs: &Preferences) -> Result<()> {
    let mode = Mode::from(cli.mode);
    tracing::debug!("Highlighting {} bytes as {}", source.len(), mode);

    match cli.format {
        OutputFormat::Ansi => {
            println!("{}", AnsiRenderer::new(prefs.theme).highlight(source, mode))
        }
        OutputFormat::Html => println!("{}", HtmlRenderer.highlight(source, mode)),
        OutputFormat::Json => {
            let mut fragments = tag(source, mode);
            if cli.merge {
                fragments = merge_plain(source, &fragments);
            }
            println!("{}", serde_json::to_string_pretty(&fragments)?);
        }
    }
    Ok(())
}

fn list_examples(format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(catalog::playground())?);
        return Ok(());
    }

    println!("{}", "💀 Playground Examples".cyan().bold());
    println!();
    for ex in catalog::playground() {
        println!("  {} {}", ex.emoji, ex.name.white().bold());
        println!("    {} {}", "classic:".dimmed(), ex.classic);
        println!("    {} {}", "gen alpha:".dimmed(), ex.gen_alpha);
    }
    Ok(())
}

fn show_example(name: &str, prefs: Preferences, format: OutputFormat, both: bool) -> Result<()> {
    let ex = catalog::find_playground(name)?;
    let source = ex.source(prefs.syntax);

    match format {
        OutputFormat::Html => {
            let mut block = CodeBlock::from(ex);
            if both {
                block = block.side_by_side();
            }
            println!("{}", HtmlRenderer.code_block(&block, &prefs));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(ex)?),
        OutputFormat::Ansi => {
            let ansi = AnsiRenderer::new(prefs.theme);
            println!(
                "{} {} {}",
                ex.emoji,
                ex.name.white().bold(),
                format!("[{}]", prefs.syntax.label()).dimmed()
            );
            println!();
            println!("  {}", ansi.highlight(source, Mode::Dsl));
            println!();
            println!("{}", "SQL Output:".green().bold());
            println!("  {}", ansi.highlight(ex.sql, Mode::Sql));
        }
    }
    Ok(())
}

fn replay_terminal(prefs: &Preferences) {
    let ansi = AnsiRenderer::new(prefs.theme);
    for ex in catalog::terminal() {
        println!("{} {}", "▸".cyan(), ex.label.white().bold());
        println!("  {}", ansi.highlight(ex.template, Mode::Template));
        println!("  {} {}", "→".green(), ansi.highlight(ex.sql, Mode::TerminalSql));
        println!();
    }
}

fn show_slang(keyword: Option<&str>) -> Result<()> {
    let entries: Vec<&slang::SlangEntry> = match keyword {
        Some(k) => match slang::lookup(k) {
            Some(entry) => vec![entry],
            None => anyhow::bail!("'{}' is not a sqaull keyword", k),
        },
        None => slang::reference().iter().collect(),
    };

    println!("{}", "💀 Gen Alpha Slang Reference".cyan().bold());
    println!();
    println!(
        "{:10} {:8} {:14} {}",
        "Gen Alpha".white().bold(),
        "OG".white().bold(),
        "SQL".white().bold(),
        "Vibe".white().bold()
    );
    println!("{}", "─".repeat(70).dimmed());

    for e in entries {
        println!(
            "{:10} {:8} {:14} {}",
            e.gen_alpha.cyan().bold(),
            e.classic.yellow(),
            e.sql.white(),
            e.vibe.dimmed()
        );
    }
    Ok(())
}

fn set_theme(cli: &Cli, prefs: Preferences, action: Option<ThemeAction>) -> Result<()> {
    let Some(action) = action else {
        println!("{}", prefs.theme);
        return Ok(());
    };

    let theme = match action {
        ThemeAction::Dark => Theme::Dark,
        ThemeAction::Light => Theme::Light,
        ThemeAction::Toggle => prefs.theme.toggle(),
    };

    let path = config::resolve_path(cli.config.as_deref())
        .ok_or_else(|| anyhow::anyhow!("No config directory; pass --config"))?;
    config::save_to(&path, &Preferences { theme, ..prefs })?;
    println!("{} Theme set to {}", "✓".green(), theme.to_string().cyan());
    Ok(())
}
