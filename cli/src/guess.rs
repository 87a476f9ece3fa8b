use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use pwcrack_core::{BruteForce, BruteForceCtxBuilder, Complexity, Digest, Event, EventSink};

use crate::{check_digest, prompt, Guess};

/// Displays a progress bar for each password length tried.
struct Progress {
    quiet: bool,
    bar: Option<ProgressBar>,
}

impl Progress {
    fn new(quiet: bool) -> Self {
        Self { quiet, bar: None }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}

impl EventSink for Progress {
    fn send(&mut self, event: Event<'_>) {
        match event {
            Event::Length { length, candidates } => {
                self.finish();

                if self.quiet {
                    return;
                }

                println!("Attempting to guess password of length {length}");

                // fall back to a spinner when the count doesn't fit in a u64
                let bar = match candidates.and_then(|c| u64::try_from(c).ok()) {
                    Some(len) => ProgressBar::new(len).with_style(
                        ProgressStyle::default_bar()
                            .template("Checked [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec} passwords/s)")
                            .unwrap_or_else(|_| ProgressStyle::default_bar())
                            .progress_chars("#>-"),
                    ),
                    None => ProgressBar::new_spinner(),
                };

                self.bar = Some(bar);
            }

            Event::Attempt { .. } => {
                if let Some(bar) = &self.bar {
                    bar.inc(1);
                }
            }
        }
    }
}

pub fn guess(gss: Guess) -> Result<()> {
    let builder = BruteForceCtxBuilder::new().max_password_length(gss.max_length);
    let builder = match (&gss.charset, gss.complexity) {
        (Some(charset), _) => builder.charset(charset.as_bytes()),
        (None, Some(complexity)) => builder.complexity(Complexity::from(complexity)),
        (None, None) => builder,
    };
    let ctx = builder.build().context("Invalid brute-force configuration")?;

    let target: Digest = match gss.digest {
        Some(digest) => digest,
        None => check_digest(&prompt("Enter encoded password:", false)?)?,
    };

    let mut progress = Progress::new(gss.quiet);
    let outcome = BruteForce::new(target, ctx).guess_with_events(&mut progress);
    progress.finish();

    match outcome.password() {
        Some(password) => println!("Guessed password: {password}"),
        None => println!("Could not guess password"),
    }

    Ok(())
}
