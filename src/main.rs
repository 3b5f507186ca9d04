//! Wordle Ranker CLI
//!
//! Command-line front end for ranking guesses, painting feedback and
//! filtering word lists.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{error, info, warn};
use wordle_ranker::heuristic::rank_by_letter_frequency;
use wordle_ranker::wordlist::retain_legal;
use wordle_ranker::{
    filter_word_list, load_word_list, Feedback, FilterMode, GuessPool, Metric, Ranking,
    ReferenceList, SampleStrategy, SearchConfig, SearchEngine, Word, WordPools,
};

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Rank Wordle guesses by how much they shrink the candidate list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log more detail (repeat for trace output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score every guess by its average remaining-candidate count
    Rank(RankArgs),
    /// Show the feedback a guess receives against a hidden word
    Paint { hidden: String, guess: String },
    /// List the legal words consistent with a guess and its feedback
    Filter {
        /// Newline-delimited list of legal guesses
        #[arg(long)]
        legal: PathBuf,
        guess: String,
        /// Feedback such as CERRR (also accepts GYXXX or 21000)
        feedback: String,
    },
    /// Approximate ordering by letter frequency
    Heuristic {
        #[arg(long)]
        legal: PathBuf,
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

#[derive(Args, Debug)]
struct RankArgs {
    /// Newline-delimited list of legal guesses
    #[arg(long)]
    legal: PathBuf,

    /// Newline-delimited list of plausible hidden words
    #[arg(long)]
    common: PathBuf,

    /// Sample this many hidden words instead of using every common word
    #[arg(long)]
    sample: Option<usize>,

    /// Seed for the hidden-word sample
    #[arg(long, requires = "sample")]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = GuessArg::Legal)]
    guesses: GuessArg,

    #[arg(long, value_enum, default_value_t = ReferenceArg::Common)]
    reference: ReferenceArg,

    /// Use the presence-only filter (guesses and reference must have no repeated letters)
    #[arg(long)]
    nrl_filter: bool,

    #[arg(long, value_enum, default_value_t = MetricArg::Mean)]
    metric: MetricArg,

    /// A move already played, as GUESS:FEEDBACK (e.g. LARES:RREER)
    #[arg(long, value_parser = parse_move)]
    after: Vec<(Word, Feedback)>,

    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Worker threads (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum GuessArg {
    Legal,
    Nrl,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ReferenceArg {
    Common,
    Legal,
    Nrl,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum MetricArg {
    Mean,
    Worst,
}

fn parse_move(s: &str) -> Result<(Word, Feedback), String> {
    let (guess, feedback) = s
        .split_once(':')
        .ok_or_else(|| format!("expected GUESS:FEEDBACK, got {s}"))?;
    let guess = Word::parse(guess).map_err(|e| e.to_string())?;
    let feedback =
        Feedback::parse(feedback).ok_or_else(|| format!("invalid feedback: {feedback}"))?;
    Ok((guess, feedback))
}

fn parse_feedback(s: &str) -> Result<Feedback, String> {
    Feedback::parse(s).ok_or_else(|| format!("invalid feedback: {s} (use C/E/R, 5 characters)"))
}

impl RankArgs {
    fn config(&self) -> SearchConfig {
        let sample = match self.sample {
            Some(size) => {
                let seed = self.seed.unwrap_or_else(rand::random);
                info!("sampling {size} hidden words with seed {seed}");
                SampleStrategy::Random { size, seed }
            }
            None => SampleStrategy::Full,
        };

        SearchConfig {
            sample,
            guesses: match self.guesses {
                GuessArg::Legal => GuessPool::Legal,
                GuessArg::Nrl => GuessPool::NoRepeatedLetters,
            },
            reference: match self.reference {
                ReferenceArg::Common => ReferenceList::Common,
                ReferenceArg::Legal => ReferenceList::Legal,
                ReferenceArg::Nrl => ReferenceList::NoRepeatedLetters,
            },
            filter: if self.nrl_filter {
                FilterMode::NoRepeatedLetters
            } else {
                FilterMode::General
            },
            metric: match self.metric {
                MetricArg::Mean => Metric::Mean,
                MetricArg::Worst => Metric::WorstCase,
            },
        }
    }
}

fn run_rank(args: &RankArgs) -> CliResult {
    let legal = load_word_list(&args.legal)?;
    let common = retain_legal(&load_word_list(&args.common)?, &legal);
    info!("{} legal words, {} common words", legal.len(), common.len());

    let mut pools = WordPools::new(legal, common);
    for (guess, feedback) in &args.after {
        pools = pools.after_move(guess, feedback)?;
        info!(
            "after {guess} {feedback}: {} legal candidates, {} common remain",
            pools.candidates().len(),
            pools.common().len()
        );
    }

    let config = args.config();
    let engine = SearchEngine::from_config(&pools, &config)?;

    let start = Instant::now();
    let ranking = match args.threads {
        Some(n) => rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()?
            .install(|| engine.rank(config.metric)),
        None => engine.rank(config.metric),
    };
    info!("ranked {} guesses in {:.2?}", ranking.len(), start.elapsed());

    print_ranking(&ranking, args.top);
    Ok(())
}

fn print_ranking(ranking: &Ranking, n: usize) {
    let top = ranking.top(n);
    if top.is_empty() {
        println!("No guesses to rank.");
        return;
    }

    println!("{:>4} {:>8} {:>10} {:>7} {:>8}", "#", "Guess", "Average", "Worst", "Flagged");
    println!("{}", "-".repeat(41));
    for (i, score) in top.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>10.2} {:>7} {:>8}",
            i + 1,
            score.guess,
            score.average,
            score.worst,
            score.anomalies.len()
        );
    }

    let flagged = ranking.scores.iter().filter(|s| s.is_tainted()).count();
    if flagged > 0 {
        warn!("{flagged} guesses have flagged samples (see the Flagged column)");
    }
}

fn run_paint(hidden: &str, guess: &str) -> CliResult {
    let hidden = Word::parse(hidden)?;
    let guess = Word::parse(guess)?;
    let feedback = Feedback::calculate(&guess, &hidden);
    println!("{guess} → {feedback} {}", feedback.to_emoji_string());
    Ok(())
}

fn run_filter(legal: &Path, guess: &str, feedback: &str) -> CliResult {
    let words = load_word_list(legal)?;
    let guess = Word::parse(guess)?;
    let feedback = parse_feedback(feedback)?;

    let remaining = filter_word_list(&words, &guess, &feedback);
    if remaining.is_empty() {
        println!("No remaining candidates.");
        return Ok(());
    }

    println!("Remaining candidates: {}", remaining.len());
    for (i, word) in remaining.iter().enumerate() {
        if i > 0 && i % 10 == 0 {
            println!();
        }
        print!("{word:>7}");
    }
    println!();
    Ok(())
}

fn run_heuristic(legal: &Path, top: usize) -> CliResult {
    let words = load_word_list(legal)?;
    println!("Letter-frequency ordering (approximate, not reducing power):");
    for (i, (word, score)) in rank_by_letter_frequency(&words).iter().take(top).enumerate() {
        println!("{:>4} {:>8} {:>6}", i + 1, word, score);
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Command::Rank(args) => run_rank(args),
        Command::Paint { hidden, guess } => run_paint(hidden, guess),
        Command::Filter {
            legal,
            guess,
            feedback,
        } => run_filter(legal, guess, feedback),
        Command::Heuristic { legal, top } => run_heuristic(legal, *top),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
