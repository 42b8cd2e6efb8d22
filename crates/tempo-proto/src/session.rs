//! The request/answer loop.

use std::io::{BufRead, Write};
use std::time::Duration;

use tempo_core::{Color, Move};
use tempo_engine::{Searcher, allocate_time};
use tracing::{debug, info, warn};

use crate::command::{Request, parse_request};
use crate::error::ProtocolError;

/// Answer written when no move can be given.
const NO_MOVE: &str = "error";

/// One game's worth of requests over a line-oriented reader and writer.
///
/// Every position the engine moves into is recorded in the searcher's game
/// history so that repetitions span the whole session.
pub struct Session<R, W> {
    input: R,
    output: W,
    searcher: Searcher,
    total: Duration,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_searcher(input, output, Searcher::default())
    }

    pub fn with_searcher(input: R, output: W, searcher: Searcher) -> Self {
        Self {
            input,
            output,
            searcher,
            total: Duration::ZERO,
        }
    }

    /// Serve requests until the input ends.
    ///
    /// Malformed requests are answered with `error` and the session goes on.
    /// Only I/O failures end it early.
    pub fn run(&mut self) -> Result<(), ProtocolError> {
        loop {
            let Some(fen_line) = self.next_line()? else {
                break;
            };
            let Some(time_line) = self.next_line()? else {
                warn!(fen = %fen_line, "input ended before the time line");
                break;
            };
            debug!(fen = %fen_line, time = %time_line, "received request");

            match parse_request(&fen_line, &time_line) {
                Ok(request) => {
                    self.answer(request)?;
                }
                Err(e) => {
                    warn!(error = %e, "malformed request");
                    self.reply(NO_MOVE)?;
                }
            }
        }

        info!(total_ms = self.total.as_millis() as u64, "session closed");
        Ok(())
    }

    /// Search one request, print the move, and record the resulting position.
    pub fn answer(&mut self, request: Request) -> Result<Option<Move>, ProtocolError> {
        let Request {
            mut position,
            remaining,
        } = request;
        let budget = allocate_time(remaining);
        let report = self.searcher.search_with_budget(&mut position, budget);
        self.total += report.elapsed;

        // The report scores the position for the side that moved; flip it so
        // the log always reads from White's side.
        let mover = position.side_to_move();
        let white_eval = match mover {
            Color::White => report.score,
            Color::Black => -report.score,
        };

        match report.best_move {
            Some(mv) => {
                self.reply(&mv.to_uci())?;
                position.make_move(mv);
                self.searcher.record_position(&position);
            }
            None => self.reply(NO_MOVE)?,
        }

        info!(
            depth = report.depth,
            eval = white_eval,
            pv = %format_pv(&report.pv),
            nodes = report.nodes,
            time_ms = report.elapsed.as_millis() as u64,
            total_ms = self.total.as_millis() as u64,
            budget_ms = budget.as_millis() as u64,
            "search finished"
        );

        Ok(report.best_move)
    }

    /// Searcher holding the session's game history.
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Consume the session and return the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Next non-blank line, trimmed, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>, ProtocolError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
    }

    fn reply(&mut self, text: &str) -> Result<(), ProtocolError> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }
}

/// Space-separated coordinate moves.
fn format_pv(pv: &[Move]) -> String {
    pv.iter().map(|mv| mv.to_uci()).collect::<Vec<_>>().join(" ")
}
