use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use markov_gen_core::io::{read_file_tokens, read_tokens};
use markov_gen_core::model::chain_config::{ChainConfig, time_seed};
use markov_gen_core::model::generator::Generator;

/// Markov chain text generator.
///
/// Reads whitespace-separated words, learns which word follows each run of
/// `prefix-length` words, then prints a random walk over that chain.
#[derive(Debug, Parser)]
#[command(name = "markov-gen", version, about)]
struct Cli {
	/// Number of words in each prefix
	#[arg(short, long, default_value_t = 2)]
	prefix_length: usize,

	/// Number of words to output
	#[arg(short, long = "words", default_value_t = 100)]
	words: usize,

	/// Seed of the random generator (default: derived from the clock)
	#[arg(short, long)]
	seed: Option<u64>,

	/// Input file (default: stdin)
	#[arg(short, long, value_name = "FILE")]
	input: Option<PathBuf>,

	/// Start the walk on this prefix, e.g. "the cat"
	#[arg(long, value_name = "PREFIX")]
	start: Option<String>,

	/// Suppress log output
	#[arg(short, long)]
	quiet: bool,

	/// Increase verbosity
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

impl Cli {
	/// Initialize logging based on verbosity level
	fn init_logging(&self) {
		if self.quiet {
			return;
		}
		let log_level = match self.verbose {
			0 => "warn",
			1 => "info",
			2 => "debug",
			_ => "trace",
		};
		env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
	}

	fn config(&self) -> ChainConfig {
		let mut config = ChainConfig::default()
			.with_prefix_length(self.prefix_length)
			.with_word_count(self.words)
			.with_seed(self.seed.unwrap_or_else(time_seed));
		if let Some(start) = &self.start {
			config = config.with_start(start);
		}
		config
	}
}

fn run(cli: &Cli) -> Result<()> {
	let config = cli.config();
	info!("seed {}", config.seed);
	debug!("configuration: {:?}", config);

	let tokens = match &cli.input {
		Some(path) => read_file_tokens(path)
			.with_context(|| format!("Failed to read file: {}", path.display()))?,
		None => read_tokens(io::stdin().lock()).context("Failed to read stdin")?,
	};
	info!("read {} tokens", tokens.len());

	let generator = Generator::from_config(tokens, &config)?;
	let words = generator.generate(&config)?;

	let mut stdout = io::stdout().lock();
	writeln!(stdout, "{}", words.join(" "))?;
	stdout.flush()?;
	Ok(())
}

fn main() {
	let cli = Cli::parse();
	cli.init_logging();

	if let Err(e) = run(&cli) {
		eprintln!("fatal error: {e:#}");
		process::exit(1);
	}
}
