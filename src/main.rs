// Clippy allows
#![allow(clippy::too_many_arguments)]

//! MINT: Multiset INtersection Toolkit
//!
//! Usage: mint <COMMAND> [OPTIONS]

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use mint_intersect::classify::{classify_with_ceiling, in_bounded_range, MAX_CEILING};
use mint_intersect::commands::{BenchCommand, GenerateCommand};
use mint_intersect::engine::{IntersectEngine, Mode};
use mint_intersect::error::MintError;
use mint_intersect::output::ListWriter;
use mint_intersect::parse::parse_sequence_counted;
use mint_intersect::select::select_method;
use mint_intersect::stream::{FileChunkSource, ReaderChunkSource};

#[derive(Parser)]
#[command(name = "mint")]
#[command(version)]
#[command(about = "MINT: Multiset INtersection Toolkit - fast multiset intersection over integer sequences", long_about = None)]
struct Cli {
    /// Number of threads to use (default: number of CPUs)
    #[arg(long, short = 't', global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the multiset intersection of two integer sequences
    Intersect {
        /// First sequence as inline text, e.g. "[1, 2, 2, 3]"
        #[arg(short = 'a', long = "seq-a")]
        seq_a: Option<String>,

        /// Read the first sequence from a file (use - for stdin)
        #[arg(long = "a-file")]
        a_file: Option<PathBuf>,

        /// Second sequence as inline text
        #[arg(short = 'b', long = "seq-b")]
        seq_b: Option<String>,

        /// Read the second sequence from a file (use - for stdin)
        #[arg(long = "b-file")]
        b_file: Option<PathBuf>,

        /// Intersection method
        #[arg(short = 'm', long, default_value = "auto", value_parser = ["auto", "counting", "hash-map", "two-pointer"])]
        method: String,

        /// Upper bound accepted by the counting method (values 0..=ceiling)
        #[arg(long, default_value = "1000", value_parser = clap::value_parser!(i64).range(0..=MAX_CEILING))]
        ceiling: i64,

        /// Stream the second sequence in fixed-size chunks (requires --b-file)
        #[arg(long)]
        streaming: bool,

        /// Values per chunk in streaming mode
        #[arg(long, default_value = "4096")]
        chunk_size: usize,

        /// Report only the number of matched values
        #[arg(short = 'c', long)]
        count: bool,

        /// Values per output line (default: whole result on one line)
        #[arg(long)]
        per_line: Option<usize>,

        /// Output file (default: stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Print the selected method and its rationale to stderr
        #[arg(long)]
        explain: bool,

        /// Print run statistics to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Classify two sequences and report the method auto-selection picks
    Classify {
        /// First sequence as inline text
        #[arg(short = 'a', long = "seq-a")]
        seq_a: Option<String>,

        /// Read the first sequence from a file (use - for stdin)
        #[arg(long = "a-file")]
        a_file: Option<PathBuf>,

        /// Second sequence as inline text
        #[arg(short = 'b', long = "seq-b")]
        seq_b: Option<String>,

        /// Read the second sequence from a file (use - for stdin)
        #[arg(long = "b-file")]
        b_file: Option<PathBuf>,

        /// Upper bound accepted by the counting method (values 0..=ceiling)
        #[arg(long, default_value = "1000", value_parser = clap::value_parser!(i64).range(0..=MAX_CEILING))]
        ceiling: i64,
    },

    /// Benchmark the intersection methods on synthetic data
    Bench {
        /// Length of the first generated sequence
        #[arg(long, default_value = "20000")]
        size_a: usize,

        /// Length of the second generated sequence
        #[arg(long, default_value = "25000")]
        size_b: usize,

        /// Values are drawn uniformly from 0..=max-value
        #[arg(long, default_value = "1000")]
        max_value: i64,

        /// Generate sorted inputs (times the presorted two-pointer path)
        #[arg(long)]
        sorted: bool,

        /// Random seed for reproducibility
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Timing trials per method; the best time is reported
        #[arg(long, default_value = "3")]
        trials: usize,

        /// Upper bound accepted by the counting method (values 0..=ceiling)
        #[arg(long, default_value = "1000", value_parser = clap::value_parser!(i64).range(0..=MAX_CEILING))]
        ceiling: i64,
    },

    /// Generate synthetic integer datasets for benchmarking
    #[command(alias = "create")]
    Generate {
        /// Number of values to generate
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Values are drawn uniformly from 0..=max-value
        #[arg(long, default_value = "1000")]
        max_value: i64,

        /// Sort the output ascending
        #[arg(long)]
        sorted: bool,

        /// Random seed for reproducibility
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Values per output line
        #[arg(long, default_value = "1")]
        per_line: usize,

        /// Output file (default: stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Print generation statistics to stderr
        #[arg(long)]
        stats: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Configure thread pool if --threads specified
    if let Some(n) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .expect("Failed to initialize thread pool");
    }

    let result = match cli.command {
        Commands::Intersect {
            seq_a,
            a_file,
            seq_b,
            b_file,
            method,
            ceiling,
            streaming,
            chunk_size,
            count,
            per_line,
            output,
            explain,
            stats,
        } => run_intersect(
            seq_a, a_file, seq_b, b_file, method, ceiling, streaming, chunk_size, count, per_line,
            output, explain, stats,
        ),

        Commands::Classify {
            seq_a,
            a_file,
            seq_b,
            b_file,
            ceiling,
        } => run_classify(seq_a, a_file, seq_b, b_file, ceiling),

        Commands::Bench {
            size_a,
            size_b,
            max_value,
            sorted,
            seed,
            trials,
            ceiling,
        } => run_bench(size_a, size_b, max_value, sorted, seed, trials, ceiling),

        Commands::Generate {
            count,
            max_value,
            sorted,
            seed,
            per_line,
            output,
            stats,
        } => run_generate(count, max_value, sorted, seed, per_line, output, stats),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Resolve a sequence given inline or as a file path (use - for stdin).
fn resolve_sequence_text(
    inline: Option<String>,
    file: Option<&Path>,
    label: &str,
) -> Result<String, MintError> {
    match (inline, file) {
        (Some(_), Some(_)) => Err(MintError::PreconditionViolation {
            message: format!(
                "sequence {} given both inline and as a file; pass one or the other",
                label
            ),
        }),
        (Some(text), None) => Ok(text),
        (None, Some(path)) => {
            if path.to_string_lossy() == "-" {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            } else {
                Ok(fs::read_to_string(path)?)
            }
        }
        (None, None) => Err(MintError::PreconditionViolation {
            message: format!(
                "no sequence {}; pass -{} or --{}-file",
                label,
                label.to_lowercase(),
                label.to_lowercase()
            ),
        }),
    }
}

/// Parse a sequence and warn on stderr about dropped noise tokens.
fn parse_with_warning(text: &str, label: &str) -> Vec<i64> {
    let (values, dropped) = parse_sequence_counted(text);
    if dropped > 0 {
        eprintln!(
            "Warning: dropped {} non-integer token(s) from sequence {}",
            dropped, label
        );
    }
    values
}

/// Warn when a sequence falls outside the nominal bounds the selection
/// heuristics were tuned for. Never blocks.
fn warn_nominal_bounds(values: &[i64], ceiling: i64, label: &str) {
    if values.is_empty() || values.len() > 1000 {
        eprintln!(
            "Warning: sequence {} has length {} (nominal range 1..=1000)",
            label,
            values.len()
        );
    }
    if !in_bounded_range(values, ceiling) {
        eprintln!(
            "Warning: sequence {} has values outside [0, {}]; counting is not applicable",
            label, ceiling
        );
    }
}

/// Render the matched values (or just their count) through the list writer.
fn write_result<W: Write>(
    output: &mut W,
    values: &[i64],
    count: bool,
    per_line: Option<usize>,
) -> Result<(), MintError> {
    let mut writer = ListWriter::new(output);
    if count {
        writer.write_int(values.len())?;
        writer.write_newline()?;
    } else {
        match per_line {
            Some(n) => writer.write_grouped(values, n)?,
            None => writer.write_values(values, b' ')?,
        }
    }
    writer.flush()?;
    Ok(())
}

fn run_intersect(
    seq_a: Option<String>,
    a_file: Option<PathBuf>,
    seq_b: Option<String>,
    b_file: Option<PathBuf>,
    method: String,
    ceiling: i64,
    streaming: bool,
    chunk_size: usize,
    count: bool,
    per_line: Option<usize>,
    output: Option<PathBuf>,
    explain: bool,
    stats: bool,
) -> Result<(), MintError> {
    let start = Instant::now();

    // clap restricts method to the known tokens
    let mode = Mode::from_str(&method).unwrap_or(Mode::Auto);
    let engine = IntersectEngine::with_ceiling(ceiling);

    let a_text = resolve_sequence_text(seq_a, a_file.as_deref(), "A")?;
    let a_values = parse_with_warning(&a_text, "A");

    let result = if streaming {
        if seq_b.is_some() {
            return Err(MintError::PreconditionViolation {
                message: "streaming reads the second sequence from a file; pass --b-file instead of -b"
                    .to_string(),
            });
        }
        let path = b_file.ok_or_else(|| MintError::PreconditionViolation {
            message: "streaming reads the second sequence from a file; pass --b-file".to_string(),
        })?;

        if path.to_string_lossy() == "-" {
            let stdin = io::stdin();
            let mut source = ReaderChunkSource::new(stdin.lock(), chunk_size);
            engine.run_streaming(&a_values, &mut source, mode)?
        } else {
            let mut source = FileChunkSource::open(&path, chunk_size)?;
            engine.run_streaming(&a_values, &mut source, mode)?
        }
    } else {
        let b_text = resolve_sequence_text(seq_b, b_file.as_deref(), "B")?;
        let b_values = parse_with_warning(&b_text, "B");
        engine.run(&a_values, &b_values, mode)?
    };

    if explain {
        eprintln!("{}", result.explanation);
    }

    if let Some(path) = output {
        let mut file = fs::File::create(path)?;
        write_result(&mut file, &result.values, count, per_line)?;
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_result(&mut handle, &result.values, count, per_line)?;
    }

    if stats {
        eprintln!(
            "Intersect stats: {} values matched via {} ({:.1}s)",
            result.values.len(),
            result.method,
            start.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

fn run_classify(
    seq_a: Option<String>,
    a_file: Option<PathBuf>,
    seq_b: Option<String>,
    b_file: Option<PathBuf>,
    ceiling: i64,
) -> Result<(), MintError> {
    let a_text = resolve_sequence_text(seq_a, a_file.as_deref(), "A")?;
    let b_text = resolve_sequence_text(seq_b, b_file.as_deref(), "B")?;

    let a_values = parse_with_warning(&a_text, "A");
    let b_values = parse_with_warning(&b_text, "B");

    warn_nominal_bounds(&a_values, ceiling, "A");
    warn_nominal_bounds(&b_values, ceiling, "B");

    let classification = classify_with_ceiling(&a_values, &b_values, ceiling);
    let choice = select_method(&classification);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    writeln!(
        handle,
        "len_a\tlen_b\tnon_decreasing\tbounded\tmethod\trationale"
    )?;
    writeln!(
        handle,
        "{}\t{}\t{}\t{}\t{}\t{}",
        a_values.len(),
        b_values.len(),
        classification.both_non_decreasing,
        classification.both_in_bounded_range,
        choice.method,
        choice.rationale
    )?;

    Ok(())
}

fn run_bench(
    size_a: usize,
    size_b: usize,
    max_value: i64,
    sorted: bool,
    seed: u64,
    trials: usize,
    ceiling: i64,
) -> Result<(), MintError> {
    let mut cmd = BenchCommand::new()
        .with_sizes(size_a, size_b)
        .with_max_value(max_value)
        .with_sorted(sorted)
        .with_seed(seed)
        .with_trials(trials);
    cmd.ceiling = ceiling;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let result = cmd.run(&mut handle)?;
    eprintln!("Bench stats: {}", result);

    Ok(())
}

fn run_generate(
    count: usize,
    max_value: i64,
    sorted: bool,
    seed: u64,
    per_line: usize,
    output: Option<PathBuf>,
    stats: bool,
) -> Result<(), MintError> {
    let cmd = GenerateCommand::new(count)
        .with_max_value(max_value)
        .with_sorted(sorted)
        .with_seed(seed)
        .with_per_line(per_line);

    let result = if let Some(path) = output {
        let mut file = fs::File::create(path)?;
        cmd.run(&mut file)?
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        cmd.run(&mut handle)?
    };

    if stats {
        eprintln!("Generate stats: {}", result);
    }

    Ok(())
}
