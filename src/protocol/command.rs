//! Command names and line tokenization.

use std::fmt;

/// A recognized protocol command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    Game,
    Show,
    Play,
    Legal,
    Genmove,
    Winner,
    Exit,
}

impl Command {
    /// Commands listed by `help`, in order. `help` does not list itself.
    pub const LISTED: [Command; 7] = [
        Command::Game,
        Command::Show,
        Command::Play,
        Command::Legal,
        Command::Genmove,
        Command::Winner,
        Command::Exit,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Game => "game",
            Command::Show => "show",
            Command::Play => "play",
            Command::Legal => "legal",
            Command::Genmove => "genmove",
            Command::Winner => "winner",
            Command::Exit => "exit",
        }
    }

    /// Look up a command by its (already lowercased) name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Command> {
        match name {
            "help" => Some(Command::Help),
            "game" => Some(Command::Game),
            "show" => Some(Command::Show),
            "play" => Some(Command::Play),
            "legal" => Some(Command::Legal),
            "genmove" => Some(Command::Genmove),
            "winner" => Some(Command::Winner),
            "exit" => Some(Command::Exit),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One input line, normalized and split into tokens.
///
/// The line is lowercased and trimmed; tokens are separated by any run of
/// whitespace, so empty tokens never appear.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLine {
    /// The normalized line, used when reporting failures.
    pub text: String,
    /// First token, or empty for a blank line.
    pub name: String,
    pub args: Vec<String>,
}

impl CommandLine {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let text = line.trim().to_lowercase();
        let mut tokens = text.split_whitespace().map(str::to_string);
        let name = tokens.next().unwrap_or_default();
        let args = tokens.collect();
        Self { text, name, args }
    }

    /// The command this line names, if it is a known one.
    #[must_use]
    pub fn command(&self) -> Option<Command> {
        Command::from_name(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let line = CommandLine::parse("  PLAY 1   2 0 \n");
        assert_eq!(line.text, "play 1   2 0");
        assert_eq!(line.name, "play");
        assert_eq!(line.args, vec!["1", "2", "0"]);
        assert_eq!(line.command(), Some(Command::Play));
    }

    #[test]
    fn test_blank_line_is_unknown() {
        let line = CommandLine::parse("   ");
        assert_eq!(line.name, "");
        assert!(line.args.is_empty());
        assert_eq!(line.command(), None);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(CommandLine::parse("undo").command(), None);
    }

    #[test]
    fn test_names_round_trip() {
        for command in Command::LISTED.into_iter().chain([Command::Help]) {
            assert_eq!(Command::from_name(command.name()), Some(command));
        }
    }
}
