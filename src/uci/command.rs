/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    Uci,
    IsReady,
    UciNewGame,
    Position(Vec<String>),
    Go(Vec<String>),
    SetOption(Vec<String>),
    Stop,
    Quit,
    /// Recognized but without effect (`ponderhit`, `eval`, `flip`, `debug`)
    Ignored(String),
    Unknown(String),
}

impl UciCommand {
    /// Keyword that introduced the command.
    #[must_use]
    pub fn keyword(&self) -> &str {
        match self {
            UciCommand::Uci => "uci",
            UciCommand::IsReady => "isready",
            UciCommand::UciNewGame => "ucinewgame",
            UciCommand::Position(_) => "position",
            UciCommand::Go(_) => "go",
            UciCommand::SetOption(_) => "setoption",
            UciCommand::Stop => "stop",
            UciCommand::Quit => "quit",
            UciCommand::Ignored(word) => word,
            UciCommand::Unknown(line) => line.split_whitespace().next().unwrap_or(""),
        }
    }
}

/// Parse one line. Blank lines yield `None`.
pub fn parse_uci_command(line: &str) -> Option<UciCommand> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let first = *parts.first()?;

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<String>>();

    let cmd = match first {
        "uci" => UciCommand::Uci,
        "isready" => UciCommand::IsReady,
        "ucinewgame" => UciCommand::UciNewGame,
        "position" => UciCommand::Position(owned_parts()),
        "go" => UciCommand::Go(owned_parts()),
        "setoption" => UciCommand::SetOption(owned_parts()),
        "stop" => UciCommand::Stop,
        "quit" => UciCommand::Quit,
        "ponderhit" | "eval" | "flip" | "debug" => UciCommand::Ignored(first.to_string()),
        _ => UciCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
