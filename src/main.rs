use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sfx::output::{self, PatternReport, SubstringReport};
use sfx::utils::{self, AppConfig, InputText};
use sfx::{SuffixTree, SuffixTreeBuilder};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sfx")]
#[command(about = "Linear-time suffix tree substring index")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Fold ASCII case in texts and patterns
    #[arg(short = 'i', long, global = true)]
    ignore_case: bool,

    /// Drop line breaks from input files before indexing
    #[arg(long, global = true)]
    strip_newlines: bool,

    /// Treat INPUT and OTHER as literal texts instead of file paths
    #[arg(long, global = true)]
    literal: bool,

    /// When to use colors
    #[arg(long, global = true, value_enum, default_value_t = ColorWhen::Auto)]
    color: ColorWhen,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorWhen {
    Auto,
    Never,
}

#[derive(Subcommand)]
enum Commands {
    /// Show suffix tree statistics
    Stats {
        /// Text to index
        input: String,
    },
    /// Check whether a pattern occurs (exit status 1 if not)
    Contains {
        /// Text to index
        input: String,
        /// Pattern to look for
        pattern: String,
    },
    /// Count occurrences of patterns
    Count {
        /// Text to index
        input: String,
        /// Patterns to count
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// List start positions of patterns
    Find {
        /// Text to index
        input: String,
        /// Patterns to find
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// Print the longest repeated substring
    Lrs {
        /// Text to index
        input: String,
    },
    /// List right-maximal repeats, longest first
    Repeats {
        /// Text to index
        input: String,
        /// Minimum repeat length
        #[arg(short, long, default_value_t = 2)]
        min_len: usize,
        /// Maximum number of repeats to print
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
    /// Print the longest substring shared with a second text
    Lcs {
        /// Text to index
        input: String,
        /// Second text
        other: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SFX_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("sfx: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = AppConfig::load()?;
    if cli.ignore_case {
        config.tree.case_insensitive = true;
    }
    let color = matches!(cli.color, ColorWhen::Auto);

    match &cli.command {
        Commands::Stats { input } => {
            let tree = build_tree(&cli, &config, input)?;
            let stats = tree.stats();
            if cli.json {
                output::print_json(&stats)?;
            } else {
                output::write_stats(&mut output::stdout(color), &stats)?;
            }
        }

        Commands::Contains { input, pattern } => {
            let tree = build_tree(&cli, &config, input)?;
            let found = tree.contains(pattern)?;
            if cli.json {
                output::print_json(&serde_json::json!({ "pattern": pattern, "found": found }))?;
            } else {
                println!("{}", found);
            }
            if !found {
                return Ok(ExitCode::from(1));
            }
        }

        Commands::Count { input, patterns } => {
            let tree = build_tree(&cli, &config, input)?;
            let counts = tree.count_batch(patterns)?;
            let reports: Vec<PatternReport> = patterns
                .iter()
                .zip(counts)
                .map(|(pattern, count)| PatternReport {
                    pattern: pattern.clone(),
                    count,
                    positions: None,
                })
                .collect();

            if cli.json {
                output::print_json(&reports)?;
            } else {
                output::write_counts(&mut output::stdout(color), &reports)?;
            }
        }

        Commands::Find { input, patterns } => {
            let tree = build_tree(&cli, &config, input)?;
            let found = tree.find_all_batch(patterns)?;
            let reports: Vec<PatternReport> = patterns
                .iter()
                .zip(found)
                .map(|(pattern, mut positions)| {
                    if config.sort_positions {
                        positions.sort_unstable();
                    }
                    PatternReport {
                        pattern: pattern.clone(),
                        count: positions.len(),
                        positions: Some(positions),
                    }
                })
                .collect();

            if cli.json {
                output::print_json(&reports)?;
            } else {
                output::write_positions(&mut output::stdout(color), &reports)?;
            }
        }

        Commands::Lrs { input } => {
            let tree = build_tree(&cli, &config, input)?;
            let report = SubstringReport::from_repeat(tree.text(), tree.longest_repeat());
            if cli.json {
                output::print_json(&report)?;
            } else {
                output::write_substring(&mut output::stdout(color), &report)?;
            }
        }

        Commands::Repeats { input, min_len, limit } => {
            let tree = build_tree(&cli, &config, input)?;
            let mut repeats = tree.repeated_substrings(*min_len);
            repeats.truncate(*limit);
            if cli.json {
                output::print_json(&repeats)?;
            } else {
                output::write_repeats(&mut output::stdout(color), tree.text(), &repeats)?;
            }
        }

        Commands::Lcs { input, other } => {
            let tree = build_tree(&cli, &config, input)?;
            let other = read_input(&cli, other)?;
            let common = tree.longest_common_match(&other)?;
            let report = SubstringReport::from_common(tree.text(), common);
            if cli.json {
                output::print_json(&report)?;
            } else {
                output::write_substring(&mut output::stdout(color), &report)?;
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Resolve an INPUT argument to bytes
fn read_input(cli: &Cli, input: &str) -> Result<InputText> {
    if cli.literal {
        return Ok(input.as_bytes().to_vec().into());
    }
    utils::load_text(&PathBuf::from(input), cli.strip_newlines)
}

fn build_tree(cli: &Cli, config: &AppConfig, input: &str) -> Result<SuffixTree> {
    let text = read_input(cli, input)?;

    let mut builder = SuffixTreeBuilder::new(config.tree.clone());
    if config.wants_progress(text.len()) && !cli.json {
        builder = builder.with_progress(utils::progress::build_progress_bar(text.len() as u64));
    }

    let tree = builder
        .build(&text)
        .with_context(|| format!("Failed to index {}", if cli.literal { "literal text" } else { input }))?;
    tracing::info!(text_len = tree.len(), nodes = tree.node_count(), "index ready");
    Ok(tree)
}
