use crate::core::generator::generate_batch;
use crate::core::pool::build_pool;
use crate::core::prompt::ask_int;
use crate::domain::model::{GenerationRequest, Outcome, MIN_PASSWORD_COUNT, MIN_PASSWORD_LENGTH};
use crate::domain::ports::Console;
use crate::utils::error::Result;
use rand::{CryptoRng, Rng};

const BANNER_WIDTH: usize = 40;

/// One interactive run: banner, questions, generation and output.
pub struct Session<C: Console, R: Rng + CryptoRng> {
    console: C,
    rng: R,
}

impl<C: Console, R: Rng + CryptoRng> Session<C, R> {
    pub fn new(console: C, rng: R) -> Self {
        Self { console, rng }
    }

    pub fn run(&mut self) -> Result<Outcome> {
        self.print_banner()?;

        let length = ask_int(&mut self.console, "Enter password length: ", MIN_PASSWORD_LENGTH)?;
        let count = ask_int(
            &mut self.console,
            "How many passwords to generate?: ",
            MIN_PASSWORD_COUNT,
        )?;

        let Some(pool) = build_pool(&mut self.console)? else {
            return Ok(Outcome::NoPool);
        };

        let request = GenerationRequest::new(length, count, pool)?;
        tracing::info!(
            "Generating {} password(s), length {}, pool size {}",
            request.count,
            request.length,
            request.pool.len()
        );

        let passwords = generate_batch(&request, &mut self.rng);

        self.console.print_line("")?;
        self.console.print_line("Generated password(s):")?;
        self.console.print_line("")?;
        for (index, password) in passwords.iter().enumerate() {
            self.console.print_line(&format!("{:>2}. {}", index + 1, password))?;
        }
        self.console.print_line("")?;
        self.console.print_line("Done. Keep your passwords safe.")?;
        self.console.print_line("")?;

        Ok(Outcome::Generated(passwords))
    }

    pub fn into_console(self) -> C {
        self.console
    }

    fn print_banner(&mut self) -> Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        self.console.print_line(&rule)?;
        self.console.print_line("      PASSWORD GENERATOR")?;
        self.console.print_line(&rule)?;
        Ok(())
    }
}
