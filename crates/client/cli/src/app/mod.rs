//! Glue code tying the battle session and the terminal together.

use std::io::{BufRead, Write};

use anyhow::Result;
use skirmish_core::{BattleSession, GameError, InputOutcome, SessionError};

use crate::input::{Command, HELP, parse_command};
use crate::presentation::{describe_event, render_board, render_roster, status_line};

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Line-oriented front end over a [`BattleSession`].
pub struct CliApp<R, W> {
    session: BattleSession,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CliApp<R, W> {
    pub fn new(session: BattleSession, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    pub fn session(&self) -> &BattleSession {
        &self.session
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.draw()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("input closed");
                return Ok(());
            }

            if self.handle(parse_command(&line))? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Applies one command and prints its result.
    pub fn handle(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Quit => return Ok(Flow::Exit),
            Command::Tile(position) => {
                let result = self.session.submit_input(position);
                self.report(result)?;
            }
            Command::EndTurn => {
                let result = self.session.end_turn();
                self.report(result)?;
            }
            Command::Restart => {
                self.session.restart()?;
                writeln!(self.output, "battle restarted")?;
                self.draw()?;
            }
            Command::Show => {
                self.draw()?;
                write!(self.output, "{}", render_roster(&self.session))?;
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::None => {}
            Command::Unknown(text) => {
                writeln!(self.output, "unrecognised input `{text}`, type `help`")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, result: Result<InputOutcome, SessionError>) -> Result<()> {
        match result {
            Ok(outcome) if outcome.is_noop() => Ok(()),
            Ok(outcome) => {
                for event in &outcome.events {
                    writeln!(self.output, "{}", describe_event(&self.session, event))?;
                }
                self.draw()
            }
            Err(err @ SessionError::GameOver { outcome }) => {
                tracing::debug!(
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "input rejected"
                );
                writeln!(self.output, "the battle is over ({outcome}), type `reset` or `quit`")?;
                Ok(())
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        write!(self.output, "{}", render_board(&self.session))?;
        writeln!(self.output, "{}", status_line(&self.session))?;
        Ok(())
    }
}
