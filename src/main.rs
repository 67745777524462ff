use clap::Parser;
use pwgen_cli::utils::logger;
use pwgen_cli::{CliConfig, Outcome, Session, StdConsole};
use rand::rngs::OsRng;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let mut session = Session::new(StdConsole::stdio(), OsRng);

    match session.run() {
        Ok(Outcome::Generated(passwords)) => {
            tracing::info!("Generated {} password(s)", passwords.len());
        }
        Ok(Outcome::NoPool) => {
            tracing::info!("Nothing generated: no character classes selected");
        }
        Err(e) => {
            tracing::error!("Password generation aborted: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}
