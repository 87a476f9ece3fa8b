use anyhow::{Context, Result};
use pwcrack_core::{Complexity, Estimate};

use crate::{duration::format_guess_time, TimeToGuess};

pub fn time_to_guess(ttg: TimeToGuess) -> Result<()> {
    let complexity = Complexity::from(ttg.complexity);

    let estimate = Estimate::new(complexity.charset().len(), ttg.length, ttg.performance)
        .context("Unable to estimate the time to guess")?;

    println!("Number of potential passwords: {}", estimate.combinations);
    println!("Expected passwords/s: {}", estimate.performance);
    println!(
        "Approximate time to guess: {}",
        format_guess_time(estimate.seconds)
    );

    Ok(())
}
