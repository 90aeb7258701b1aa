//! Line-based prompt helpers for the interactive session

use std::io::{self, Write};

use crate::error::{FinaError, FinaResult};
use crate::models::Money;

/// Print a prompt and read one line
///
/// Returns `None` on end of input (Ctrl+D or a drained pipe), which the
/// session treats as a request to exit.
pub fn prompt_line(prompt: &str) -> FinaResult<Option<String>> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| FinaError::Io(e.to_string()))?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| FinaError::Io(e.to_string()))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Prompt for a required non-empty string
pub fn prompt_required(prompt: &str) -> FinaResult<Option<String>> {
    loop {
        match prompt_line(prompt)? {
            None => return Ok(None),
            Some(value) if value.is_empty() => {
                println!("Esse campo não pode ficar vazio.");
            }
            Some(value) => return Ok(Some(value)),
        }
    }
}

/// Prompt for a non-negative money amount, re-asking on bad input
///
/// An empty answer falls back to `default`.
pub fn prompt_money(prompt: &str, default: Money) -> FinaResult<Option<Money>> {
    loop {
        match prompt_line(prompt)? {
            None => return Ok(None),
            Some(value) if value.is_empty() => return Ok(Some(default)),
            Some(value) => match Money::parse(&value) {
                Ok(amount) if !amount.is_negative() => return Ok(Some(amount)),
                Ok(_) => println!("O valor não pode ser negativo."),
                Err(_) => println!("Valor inválido. Use por exemplo: 80 ou 80,50"),
            },
        }
    }
}
