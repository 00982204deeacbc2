/// Line-oriented command syntax of the terminal front end.
use anyhow::{bail, Context, Result};

/// One user action, parsed from a single input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Text(String),
    Color(String),
    /// `None` when the argument was not an integer; the caller picks a default.
    Size(Option<i64>),
    Font(String),
    Move { x: f64, y: f64 },
    Undo,
    Redo,
    Show,
    History,
    Fonts,
    Clear,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  text <text>      replace the label text (rest of line, may be empty)
  color <#RRGGBB>  set the text color
  size <points>    set the font size
  font <family>    set the font family
  move <x> <y>     move the label anchor
  undo | redo      step through history
  show             print the current label
  history          list every history entry
  fonts            list allowed font families
  clear            forget undo/redo history
  help             show this help
  quit             exit";

impl Command {
    /// Parses one line. Blank lines and `#` comments yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands or missing/malformed arguments.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let (name, rest) = match trimmed.split_once(' ') {
            Some((name, rest)) => (name, rest),
            None => (trimmed, ""),
        };

        let cmd = match name.to_ascii_lowercase().as_str() {
            // Text keeps inner and trailing spaces verbatim.
            "text" => Self::Text(rest.to_string()),
            "color" | "colour" => Self::Color(required(name, rest)?.to_string()),
            "size" => Self::Size(required(name, rest)?.parse::<i64>().ok()),
            "font" => Self::Font(required(name, rest)?.to_string()),
            "move" => {
                let mut parts = rest.split_whitespace();
                let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
                    bail!("usage: move <x> <y>");
                };
                let x = x
                    .parse::<f64>()
                    .with_context(|| format!("invalid x coordinate {x:?}"))?;
                let y = y
                    .parse::<f64>()
                    .with_context(|| format!("invalid y coordinate {y:?}"))?;
                Self::Move { x, y }
            }
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            "show" => Self::Show,
            "history" => Self::History,
            "fonts" => Self::Fonts,
            "clear" => Self::Clear,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command {other:?} (try `help`)"),
        };
        Ok(Some(cmd))
    }
}

fn required<'a>(name: &str, rest: &'a str) -> Result<&'a str> {
    let arg = rest.trim();
    if arg.is_empty() {
        bail!("`{name}` needs an argument");
    }
    Ok(arg)
}
