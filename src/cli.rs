#![cfg(feature = "std")]

//! Console front end: banner, prompt loop and closing summary.
//!
//! All terminal traffic goes through the [`Console`] trait so the loop can be
//! driven by scripted input in tests.

use std::io::{self, BufRead, Write};

use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::common::GameError;
use crate::game::{GamePhase, GameSession, Summary};

/// Prompt shown before each guess.
pub const PROMPT: &str = "Enter a guess";

/// Line-oriented terminal used by [`run_cli`].
pub trait Console {
    /// Show `prompt` and read one line; `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Print one line of output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// [`Console`] over any buffered reader and writer.
pub struct IoConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Recover the writer, e.g. to inspect a captured transcript.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }
}

/// The process terminal.
pub type StdConsole = IoConsole<io::StdinLock<'static>, io::Stdout>;

impl IoConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        IoConsole::new(io::stdin().lock(), io::stdout())
    }
}

/// Strip the line terminator and lowercase. Nothing else is validated.
pub fn normalize_guess(raw: &str) -> String {
    raw.trim_end_matches(['\r', '\n']).to_lowercase()
}

/// RNG for a game: fixed when `seed` is given, OS-seeded otherwise.
pub fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

/// Play a set-up session on `console` until every startup sinks.
///
/// Returns the summary, or `None` if input ran out first. With `reveal` the
/// startup positions are printed before the first prompt.
pub fn run_cli<C: Console>(
    session: &mut GameSession,
    console: &mut C,
    reveal: bool,
) -> anyhow::Result<Option<Summary>> {
    if session.phase() != GamePhase::Playing {
        return Err(GameError::NotPlaying.into());
    }
    for line in session.banner() {
        console.write_line(&line)?;
    }
    if reveal {
        for startup in session.startups() {
            let cells: Vec<&str> = startup.cells().iter().map(|c| c.as_str()).collect();
            console.write_line(&format!("{}: {}", startup.name(), cells.join(" ")))?;
        }
    }

    while session.phase() == GamePhase::Playing {
        let Some(raw) = console.read_line(PROMPT)? else {
            info!(
                "input closed after {} guesses, abandoning game",
                session.guess_count()
            );
            return Ok(None);
        };
        let guess = normalize_guess(&raw);
        let result = session.check_guess(&guess)?;
        console.write_line(result.as_str())?;
    }

    let summary = session.summary()?;
    for line in summary.lines() {
        console.write_line(&line)?;
    }
    Ok(Some(summary))
}
