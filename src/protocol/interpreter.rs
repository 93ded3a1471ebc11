//! Read-eval-print loop over the text protocol.
//!
//! ## Cycle
//!
//! Each input line is fully handled before the next one is read:
//!
//! 1. normalize and tokenize the line
//! 2. `exit` ends the loop with a success footer
//! 3. look up the command; unknown names fail with a protocol error
//! 4. run the handler against the current game
//! 5. print the handler's lines, then the footer
//!
//! ## Channels
//!
//! Responses and footers go to `out`. Diagnostics for failed commands go to
//! `err`, written before the footer. Nothing a command does ends the session
//! except `exit` or the end of input.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use super::command::{Command, CommandLine};
use super::response::{Footer, Response};
use crate::core::{BoardConfig, GameRng, GameState};
use crate::error::CommandError;

/// Whether the loop should keep reading after a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Protocol front end owning at most one game.
#[derive(Debug)]
pub struct Interpreter {
    game: Option<GameState>,
    rng: GameRng,
}

impl Interpreter {
    /// Create an interpreter with no game in progress.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { game: None, rng }
    }

    /// The game in progress, if any.
    #[must_use]
    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    /// Process lines until `exit` or end of input.
    ///
    /// Lines are decoded lossily, so bytes that are not UTF-8 reach the
    /// dispatcher as replacement characters instead of ending the session.
    pub fn run<R, W, E>(&mut self, mut input: R, out: &mut W, err: &mut E) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            if self.process_line(line, out, err)? == Flow::Exit {
                return Ok(());
            }
        }
        debug!("input closed");
        Ok(())
    }

    /// Handle one line, writing its output and footer.
    pub fn process_line<W: Write, E: Write>(
        &mut self,
        line: &str,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<Flow> {
        let parsed = CommandLine::parse(line);

        let Some(command) = parsed.command() else {
            warn!(command = %parsed.name, "unknown command");
            writeln!(err, "? Unknown command.")?;
            writeln!(err, "Type 'help' to list known commands.")?;
            err.flush()?;
            Footer::Failure.write_to(out)?;
            out.flush()?;
            return Ok(Flow::Continue);
        };

        if command == Command::Exit {
            debug!("exit requested");
            Footer::Success.write_to(out)?;
            out.flush()?;
            return Ok(Flow::Exit);
        }

        debug!(%command, args = ?parsed.args, "dispatching");
        let footer = match self.execute(command, &parsed.args) {
            Ok(response) => {
                response.write_to(out)?;
                Footer::Success
            }
            Err(e @ CommandError::IllegalMove { .. }) => {
                warn!(line = %parsed.text, error = %e, "move rejected");
                Footer::IllegalMove(e.to_string())
            }
            Err(e) => {
                warn!(line = %parsed.text, error = %e, "command failed");
                writeln!(err, "Command '{}' failed with exception:", parsed.text)?;
                writeln!(err, "{e}")?;
                err.flush()?;
                Footer::Failure
            }
        };
        footer.write_to(out)?;
        out.flush()?;
        Ok(Flow::Continue)
    }

    /// Run one command against the current game.
    pub fn execute(&mut self, command: Command, args: &[String]) -> Result<Response, CommandError> {
        match command {
            Command::Help => Ok(self.help()),
            Command::Game => self.new_game(args),
            Command::Show => self.show(),
            Command::Play => self.play(args),
            Command::Legal => self.legal(args),
            Command::Genmove => self.genmove(),
            Command::Winner => self.winner(),
            Command::Exit => Ok(Response::empty()),
        }
    }

    fn help(&self) -> Response {
        Response::lines(Command::LISTED.iter().map(|c| c.name()))
    }

    fn new_game(&mut self, args: &[String]) -> Result<Response, CommandError> {
        let [width, height] = args else {
            return Err(CommandError::Arity {
                command: "game",
                expected: 2,
                usage: "width and height",
            });
        };
        let width = parse_int(width)?;
        let height = parse_int(height)?;
        let config = BoardConfig::new(width, height)?;

        info!(width, height, "new game");
        self.game = Some(GameState::new(config));
        Ok(Response::empty())
    }

    fn show(&self) -> Result<Response, CommandError> {
        let game = self.active_game()?;
        Ok(Response::lines(game.board().rendered_rows()))
    }

    fn play(&mut self, args: &[String]) -> Result<Response, CommandError> {
        let game = self.game.as_mut().ok_or(CommandError::NoGame)?;
        let [x, y, digit] = args else {
            return Err(CommandError::IllegalMove {
                args: args.join(" "),
                reason: "wrong number of arguments".to_string(),
            });
        };

        let player = game
            .play(x, y, digit)
            .map_err(|reason| CommandError::IllegalMove {
                args: args.join(" "),
                reason: reason.to_string(),
            })?;
        debug!(%player, x = %x, y = %y, digit = %digit, "move applied");
        Ok(Response::empty())
    }

    fn legal(&self, args: &[String]) -> Result<Response, CommandError> {
        let game = self.active_game()?;
        let [x, y, digit] = args else {
            return Err(CommandError::Arity {
                command: "legal",
                expected: 3,
                usage: "x y digit",
            });
        };

        let answer = if game.is_valid_move(x, y, digit).is_ok() {
            "yes"
        } else {
            "no"
        };
        Ok(Response::line(answer))
    }

    fn genmove(&mut self) -> Result<Response, CommandError> {
        let game = self.game.as_mut().ok_or(CommandError::NoGame)?;
        let legal = game.legal_moves();

        let Some(&mv) = self.rng.choose(&legal) else {
            info!("no legal moves, resigning");
            return Ok(Response::line("resign"));
        };

        let player = game.make_move(mv)?;
        info!(%player, %mv, candidates = legal.len(), "generated move");
        Ok(Response::line(mv.to_string()))
    }

    fn winner(&self) -> Result<Response, CommandError> {
        let game = self.active_game()?;
        Ok(Response::line(
            game.winner()
                .map_or_else(|| "unfinished".to_string(), |p| p.to_string()),
        ))
    }

    fn active_game(&self) -> Result<&GameState, CommandError> {
        self.game.as_ref().ok_or(CommandError::NoGame)
    }
}

fn parse_int(token: &str) -> Result<i64, CommandError> {
    token
        .parse()
        .map_err(|_| CommandError::InvalidInteger(token.to_string()))
}
