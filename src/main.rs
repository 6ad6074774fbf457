use clap::Parser;
use colored::Colorize;
use hashcrack::cli::{render_banner, render_report};
use hashcrack::config::{DEFAULT_GEN_FILE, DEFAULT_MAX_CANDIDATES};
use hashcrack::{
    crack, install_interrupt_handler, parse_key_terms, CancelToken, CrackConfig, HashFamily,
    Result,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::prelude::*;

/// Version info from build.rs
const VERSION: &str = env!("HASHCRACK_VERSION");
const BUILD: &str = env!("HASHCRACK_BUILD");
const PROFILE: &str = env!("HASHCRACK_PROFILE");
const GIT_HASH: &str = env!("HASHCRACK_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "hashcrack")]
#[command(about = "Generate password candidates from key terms and crack md5/sha256 digests", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// The type of hash (sha256 or md5)
    #[arg(long = "type", default_value = "sha256", value_parser = parse_hash)]
    hash: HashFamily,

    /// The key terms to be used in the generated passwords (separated by ',')
    #[arg(long)]
    terms: Option<String>,

    /// File where generated passwords are dumped
    #[arg(long = "gen-file", default_value = DEFAULT_GEN_FILE)]
    gen_file: PathBuf,

    /// File to pre-load passwords from (e.g. an old gen-file)
    #[arg(long = "use")]
    use_file: Option<PathBuf>,

    /// The hash to crack. Without it, passwords are only generated
    #[arg(long = "in")]
    input_hash: Option<String>,

    /// Maximum number of passwords to generate
    #[arg(long, default_value_t = DEFAULT_MAX_CANDIDATES)]
    max: u64,

    /// Log pipeline progress
    #[arg(short, long)]
    verbose: bool,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn parse_hash(s: &str) -> std::result::Result<HashFamily, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::Layer::default()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> Result<u8> {
    let token = CancelToken::new();
    install_interrupt_handler(&token)?;

    let config = CrackConfig::new(
        cli.hash,
        parse_key_terms(cli.terms.as_deref().unwrap_or_default()),
        cli.gen_file,
        cli.use_file,
        cli.input_hash,
        cli.max,
    )?;

    if !cli.json {
        print!("{}", render_banner(&config));
    }

    let report = crack(&config, &token)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }

    Ok(report.exit_code())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("hashcrack {}", get_version());
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).bright_red());
            ExitCode::FAILURE
        }
    }
}
