use crate::domain::ports::Console;
use crate::utils::error::{PwgenError, Result};
use crate::utils::validation::parse_digits;

fn read_answer<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<String> {
    match console.prompt(prompt)? {
        Some(line) => Ok(line.trim().to_string()),
        None => Err(PwgenError::InputClosed {
            prompt: prompt.trim_end().to_string(),
        }),
    }
}

/// Asks until the answer is a digit literal `>= min_value`.
pub fn ask_int<C: Console + ?Sized>(console: &mut C, prompt: &str, min_value: usize) -> Result<usize> {
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        let raw = read_answer(console, prompt)?;

        let Some(value) = parse_digits(&raw) else {
            tracing::debug!("Rejected non-numeric answer (attempt {})", attempts);
            console.print_line("-> Please enter a valid number.")?;
            continue;
        };

        if value < min_value {
            tracing::debug!("Rejected {} below minimum {} (attempt {})", value, min_value, attempts);
            console.print_line(&format!("-> Please enter a number >= {}.", min_value))?;
            continue;
        }

        return Ok(value);
    }
}

/// Asks a `(y/n)` question until the answer is y, yes, n or no.
pub fn ask_yes_no<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<bool> {
    let full_prompt = format!("{} (y/n): ", prompt);
    loop {
        let choice = read_answer(console, &full_prompt)?.to_lowercase();
        match choice.as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => {
                tracing::debug!("Rejected yes/no answer for '{}'", prompt);
                console.print_line("-> Please answer with 'y' or 'n'.")?;
            }
        }
    }
}
