/// Terminal view over an `EditSession`.
///
/// Reads one command per line, forwards it to the session and prints the
/// resulting label state. Editing errors are reported and the loop continues.
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use label_pad_config::EditorConfig;
use label_pad_core::{EditSession, SessionState};

use crate::command::{Command, HELP};

/// How rendered state is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct App {
    session: EditSession,
    /// Used when `size` gets a non-integer argument.
    default_font_size: i64,
    format: OutputFormat,
}

impl App {
    /// # Errors
    ///
    /// Returns an error if the config cannot seed a valid session.
    pub fn new(config: &EditorConfig, format: OutputFormat) -> Result<Self> {
        let session =
            EditSession::from_config(config).context("Invalid editor configuration")?;
        Ok(Self {
            session,
            default_font_size: i64::from(config.initial_font_size),
            format,
        })
    }

    #[cfg(test)]
    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Processes `input` until EOF or `quit`.
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures on the streams themselves.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: R,
        out: &mut W,
        err: &mut E,
    ) -> Result<()> {
        self.render(&self.session.state(), out)?;
        for (idx, line) in input.lines().enumerate() {
            let line = line.context("Failed to read input")?;
            let cmd = match Command::parse(&line) {
                Ok(Some(cmd)) => cmd,
                Ok(None) => continue,
                Err(e) => {
                    tracing::debug!(line = idx + 1, "Rejected input: {e:#}");
                    writeln!(err, "error: {e:#}")?;
                    continue;
                }
            };
            if self.handle(cmd, out, err)? == Flow::Quit {
                break;
            }
        }
        out.flush()?;
        Ok(())
    }

    fn handle<W: Write, E: Write>(
        &mut self,
        cmd: Command,
        out: &mut W,
        err: &mut E,
    ) -> Result<Flow> {
        let result = match cmd {
            Command::Text(text) => Ok(self.session.set_text(text)),
            Command::Color(hex) => self.session.set_color(&hex),
            Command::Size(points) => {
                let points = points.unwrap_or_else(|| {
                    tracing::info!("Font size is not an integer, using {}", self.default_font_size);
                    self.default_font_size
                });
                self.session.set_font_size(points)
            }
            Command::Font(family) => self.session.set_font_family(&family),
            Command::Move { x, y } => self.session.set_position(x, y),
            Command::Undo => Ok(self.session.undo()),
            Command::Redo => Ok(self.session.redo()),
            Command::Clear => Ok(self.session.clear_history()),
            Command::Show => Ok(self.session.state()),
            Command::History => {
                self.render_history(out)?;
                return Ok(Flow::Continue);
            }
            Command::Fonts => {
                for family in self.session.allowed_fonts() {
                    writeln!(out, "{family}")?;
                }
                return Ok(Flow::Continue);
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        };

        match result {
            Ok(state) => self.render(&state, out)?,
            Err(e) => writeln!(err, "error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn render<W: Write>(&self, state: &SessionState, out: &mut W) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string(state).context("Failed to serialize state")?;
                writeln!(out, "{json}")?;
            }
            OutputFormat::Text => {
                let history = self.session.history();
                writeln!(
                    out,
                    "[{}/{}] {} undo:{} redo:{}",
                    history.cursor() + 1,
                    history.len(),
                    describe(&state.snapshot),
                    on_off(state.can_undo),
                    on_off(state.can_redo),
                )?;
            }
        }
        Ok(())
    }

    fn render_history<W: Write>(&self, out: &mut W) -> Result<()> {
        let history = self.session.history();
        for (i, snapshot) in history.entries().iter().enumerate() {
            let marker = if i == history.cursor() { '>' } else { ' ' };
            writeln!(out, "{marker} {i:>3} {}", describe(snapshot))?;
        }
        Ok(())
    }
}

fn describe(snapshot: &label_pad_core::history::Snapshot) -> String {
    let style = snapshot.style();
    let pos = snapshot.position();
    format!(
        "{:?} {} {} {} @ ({}, {})",
        snapshot.content(),
        style.color(),
        style.font_size(),
        style.font_family(),
        pos.x(),
        pos.y()
    )
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
