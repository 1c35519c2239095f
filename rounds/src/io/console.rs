//! Operator console abstraction.
//!
//! The [`Console`] trait decouples the menus and round builder from the real
//! terminal. Tests use a scripted console that replays canned input lines.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, anyhow};

/// Line-oriented, blocking operator interaction.
pub trait Console {
    /// Show `prompt` and read one line without its line terminator.
    ///
    /// Closed input is an error so that re-prompt loops always terminate.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Print `text` followed by a newline.
    fn say(&mut self, text: &str);

    /// Clear the screen. Best-effort, so it cannot fail.
    fn clear(&mut self);
}

/// Console on the process's stdin/stdout.
pub struct StdConsole {
    clear_screen: bool,
}

impl StdConsole {
    pub fn new(clear_screen: bool) -> Self {
        Self { clear_screen }
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{} ", prompt).context("write prompt")?;
        stdout.flush().context("flush stdout")?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("read stdin")?;
        if read == 0 {
            return Err(anyhow!("input closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, text: &str) {
        println!("{}", text);
    }

    fn clear(&mut self) {
        if self.clear_screen {
            // ANSI: erase display, cursor home.
            print!("\x1B[2J\x1B[1;1H");
            // Best-effort: a failed flush only leaves stale text on screen.
            let _ = io::stdout().flush();
        }
    }
}
