use anyhow::Result;

use crate::{prompt, Encode};

pub fn encode(enc: Encode) -> Result<()> {
    let password = match enc.password {
        Some(password) => password,
        None => prompt("Enter password:", true)?,
    };

    println!("Encoded password: {}", pwcrack_core::encode(&password));

    Ok(())
}
