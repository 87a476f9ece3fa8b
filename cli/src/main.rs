mod duration;
mod encode;
mod guess;
mod time_to_guess;

use std::io::{self, IsTerminal};

use anyhow::{bail, Context, Result};
use clap::{value_parser, ArgAction, Args, Parser, Subcommand, ValueEnum};
use pwcrack_core::{Complexity, Digest, DEFAULT_MAX_PASSWORD_LENGTH, DEFAULT_PERFORMANCE};
use tracing::Level;

use encode::encode;
use guess::guess;
use time_to_guess::time_to_guess;

/// All the password complexities supported.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ComplexityArg {
    /// Digits only
    Numbers,
    /// Lowercase letters only
    Letters,
    /// Lowercase letters and digits
    #[value(name = "letters_numbers")]
    LettersNumbers,
}

impl From<ComplexityArg> for Complexity {
    fn from(arg: ComplexityArg) -> Self {
        match arg {
            ComplexityArg::Numbers => Complexity::Numbers,
            ComplexityArg::Letters => Complexity::Letters,
            ComplexityArg::LettersNumbers => Complexity::LettersNumbers,
        }
    }
}

/// Password complexity demonstration.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    commands: Commands,

    /// Log more details to stderr. Can be repeated.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    Encode(Encode),
    Guess(Guess),
    #[command(alias = "time_to_guess")]
    TimeToGuess(TimeToGuess),
}

/// Encode a password.
#[derive(Args)]
pub struct Encode {
    /// The password to encode. Prompted for if not given.
    password: Option<String>,
}

/// Guess an encoded password by brute force.
#[derive(Args)]
pub struct Guess {
    /// The password complexity.
    #[arg(value_enum, required_unless_present = "charset", conflicts_with = "charset")]
    complexity: Option<ComplexityArg>,

    /// Use these characters instead of the ones of a complexity.
    #[arg(short, long, value_parser = check_charset)]
    charset: Option<String>,

    /// The maximum number of characters to guess.
    #[arg(short = 'l', long, alias = "max_length", default_value_t = DEFAULT_MAX_PASSWORD_LENGTH)]
    max_length: u32,

    /// The encoded password, in hexadecimal. Prompted for if not given.
    #[arg(short, long, value_parser = check_digest)]
    digest: Option<Digest>,

    /// Do not display the progress.
    #[arg(short, long)]
    quiet: bool,
}

/// Estimate the time needed to guess a password.
#[derive(Args)]
pub struct TimeToGuess {
    /// The password complexity.
    #[arg(value_enum)]
    complexity: ComplexityArg,

    /// The maximum number of characters to guess.
    #[arg(value_parser = value_parser!(u32))]
    length: u32,

    /// The expected number of passwords hashed per second.
    #[arg(short, long, default_value_t = DEFAULT_PERFORMANCE)]
    performance: f64,
}

/// Checks if the charset is made of ASCII characters.
fn check_charset(charset: &str) -> Result<String> {
    if !charset.is_ascii() {
        bail!("The charset can only contain ASCII characters");
    }

    Ok(charset.to_owned())
}

/// Checks if the digest is valid hexadecimal.
fn check_digest(digest: &str) -> Result<Digest> {
    hex::decode(digest.trim()).context("The digest is not valid hexadecimal")?;
    Ok(digest.parse()?)
}

/// Reads a line from the operator.
/// Uses an interactive prompt when attached to a terminal, stdin otherwise.
fn prompt(message: &str, secret: bool) -> Result<String> {
    if !io::stdin().is_terminal() {
        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .context("Unable to read from stdin")?;

        return Ok(line.trim_end_matches(['\r', '\n']).to_owned());
    }

    let answer = if secret {
        inquire::Password::new(message)
            .without_confirmation()
            .prompt()
    } else {
        inquire::Text::new(message).prompt()
    };

    answer.context("Unable to read the answer")
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.commands {
        Commands::Encode(enc) => encode(enc)?,
        Commands::Guess(gss) => guess(gss)?,
        Commands::TimeToGuess(ttg) => time_to_guess(ttg)?,
    }

    Ok(())
}
