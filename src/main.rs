use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressFinish, ProgressIterator, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, Level};

use verse_tools::modernize::{Modernizer, PatternRegistry, PASSES};
use verse_tools::reader::{AsyncVerseReader, ReaderConfig};
use verse_tools::stats::RunStats;
use verse_tools::tokenize::{Locale, StopwordSet, TieBreak, TokenIndexer, TokenizeConfig, VerseTokens, DEFAULT_LOCALE};
use verse_tools::writer::{format_modernized_csv, format_token_csv, write_output};
use verse_tools::VerseRecord;

#[derive(Parser, Debug)]
#[command(name = "verse-tools")]
#[command(about = "Modernize archaic verse text or build a ranked token index from a verse CSV")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log at debug level
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress console progress bars
    #[arg(long, global = true)]
    no_progress: bool,

    /// Write run statistics as JSON to this path
    #[arg(long, global = true)]
    stats_out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct IoArgs {
    /// Two-column id,text CSV to read
    #[arg(short, long)]
    input: PathBuf,

    /// CSV file to write
    #[arg(short, long)]
    output: PathBuf,

    /// Input has a header row to skip
    #[arg(short = 'H', long)]
    headers: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rewrite archaic words and phrases to contemporary equivalents
    Modernize {
        #[command(flatten)]
        io: IoArgs,

        /// TOML substitution tables replacing the built-in ones
        #[arg(long)]
        rules: Option<PathBuf>,
    },
    /// Build a token -> verse ids index ranked by verse count
    Tokenize {
        #[command(flatten)]
        io: IoArgs,

        /// Locale tag used for case folding
        #[arg(short, long, default_value = DEFAULT_LOCALE)]
        locale: Locale,

        /// TOML stopword list replacing the built-in one
        #[arg(long)]
        stopwords: Option<PathBuf>,

        /// Order of tokens sharing a verse count: first-seen or lexical
        #[arg(long, default_value_t = TieBreak::FirstSeen)]
        tie_break: TieBreak,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .json()
        .init();

    info!(?cli, "Parsed CLI arguments");
    let start_time = Instant::now();

    let stats = match &cli.command {
        Command::Modernize { io, rules } => {
            run_modernize(io, rules.as_deref(), cli.no_progress, start_time).await?
        }
        Command::Tokenize {
            io,
            locale,
            stopwords,
            tie_break,
        } => {
            let config = TokenizeConfig {
                locale: locale.clone(),
                tie_break: *tie_break,
            };
            run_tokenize(io, config, stopwords.as_deref(), cli.no_progress, start_time).await?
        }
    };

    println!("verse-tools v{} - {} complete", env!("CARGO_PKG_VERSION"), stats.command);
    println!("  Verses read: {}", stats.verses_read);
    println!("  Rows written: {}", stats.rows_written);
    println!("  Done in {}ms", stats.duration_ms);

    if let Some(ref stats_out) = cli.stats_out {
        stats
            .write_json(stats_out)
            .await
            .with_context(|| format!("Failed to write stats to {}", stats_out.display()))?;
        info!("Run statistics written to {}", stats_out.display());
    }

    Ok(())
}

async fn run_modernize(
    io: &IoArgs,
    rules: Option<&Path>,
    no_progress: bool,
    start_time: Instant,
) -> Result<RunStats> {
    // Compile every pattern before touching the corpus
    let registry = match rules {
        Some(path) => PatternRegistry::load(path)
            .await
            .with_context(|| format!("Failed to load rules from {}", path.display()))?,
        None => PatternRegistry::embedded().context("Built-in rules are invalid")?,
    };

    let verses = read_corpus(io).await?;
    let verses_read = verses.len() as u64;

    let records = Modernizer::new(&registry).modernize_with(verses, |pass, pass_input| {
        let bar = progress_bar(pass_input.len(), &format!("pass {pass}/{PASSES}"), no_progress);
        pass_input.progress_with(bar)
    });
    info!("Completed {} modernization passes", PASSES);

    let rows_written = records.iter().filter(|r| r.has_id()).count() as u64;
    write_output(&io.output, &format_modernized_csv(&records))
        .await
        .with_context(|| format!("Failed to write {}", io.output.display()))?;

    Ok(RunStats::new("modernize", &io.input, &io.output, verses_read, rows_written, elapsed_ms(start_time)))
}

async fn run_tokenize(
    io: &IoArgs,
    config: TokenizeConfig,
    stopwords: Option<&Path>,
    no_progress: bool,
    start_time: Instant,
) -> Result<RunStats> {
    let stopwords = match stopwords {
        Some(path) => StopwordSet::read(path, &config.locale)
            .await
            .with_context(|| format!("Failed to load stopwords from {}", path.display()))?,
        None => StopwordSet::embedded(&config.locale).context("Built-in stopwords are invalid")?,
    };

    let verses = read_corpus(io).await?;
    let verses_read = verses.len() as u64;

    let indexer = TokenIndexer::new(config, &stopwords);
    let bar = progress_bar(verses.len(), "tokenizing", no_progress);
    let tokenized: Vec<VerseTokens> = verses
        .iter()
        .progress_with(bar.clone())
        .map(|verse| indexer.tokenize_verse(verse))
        .collect();
    bar.finish_and_clear();

    let entries = indexer.index_and_rank(&tokenized);
    info!("Writing {} tokens to {}", entries.len(), io.output.display());
    write_output(&io.output, &format_token_csv(&entries))
        .await
        .with_context(|| format!("Failed to write {}", io.output.display()))?;

    let rows_written = entries.len() as u64;
    Ok(RunStats::new("tokenize", &io.input, &io.output, verses_read, rows_written, elapsed_ms(start_time)))
}

async fn read_corpus(io: &IoArgs) -> Result<Vec<VerseRecord>> {
    if !io.input.is_file() {
        anyhow::bail!("Input file does not exist: {}", io.input.display());
    }

    let reader = AsyncVerseReader::new(ReaderConfig {
        has_headers: io.headers,
        ..Default::default()
    });
    let (verses, stats) = reader
        .read_verses(&io.input)
        .await
        .with_context(|| format!("Failed to read corpus {}", io.input.display()))?;
    info!("Found {} verses in {}", stats.verses_read, stats.file_path);
    Ok(verses)
}

fn elapsed_ms(start_time: Instant) -> u64 {
    start_time.elapsed().as_millis() as u64
}

fn progress_bar(len: usize, message: &str, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("{msg:>12} [{bar:40}] {pos}/{len} verses ({eta})") {
        bar.set_style(style.progress_chars("=> "));
    }
    bar.set_message(message.to_string());
    bar.with_finish(ProgressFinish::AndClear)
}
