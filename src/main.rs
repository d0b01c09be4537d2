use std::io;
use std::process::ExitCode;

use fernbea::engine::Protocol;
use fernbea::uci::{ProtocolError, UciSession};
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries protocol traffic only.
    if let Err(e) = SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
    {
        eprintln!("logger setup failed: {e}");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = UciSession::new();

    match session.run(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(ProtocolError::EndOfInput) => {
            info!("input closed before quit");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
