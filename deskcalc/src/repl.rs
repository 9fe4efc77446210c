//! Line-oriented input adapter.
//!
//! A line-buffered terminal cannot deliver Escape or Backspace, so the
//! words `clear`, `del` and `quit` stand in for those keys; every other
//! line is fed to the engine character by character. An empty line acts as
//! Enter. The adapter serializes events; the engine never sees two inputs
//! at once.

use libcalc_core::{CalculatorEngine, DisplayFrame, Key, KeyResult};

/// What a line of input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Keys were fed to the engine; `ignored` counts characters that had
    /// no calculator meaning.
    Fed { ignored: usize },
    /// The session should end.
    Quit,
}

/// Interactive calculator session over line input.
pub struct Repl {
    engine: CalculatorEngine,
}

impl Repl {
    /// Create a session with a fresh engine.
    pub fn new() -> Self {
        Self {
            engine: CalculatorEngine::new(),
        }
    }

    /// The engine driven by this session.
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// The current display projection.
    pub fn frame(&self) -> DisplayFrame {
        self.engine.display()
    }

    /// Feed one line of user input.
    pub fn feed_line(&mut self, line: &str) -> LineOutcome {
        let trimmed = line.trim();
        match trimmed {
            "quit" | "exit" => return LineOutcome::Quit,
            "clear" => {
                self.engine.process_key(Key::Escape);
                return LineOutcome::Fed { ignored: 0 };
            }
            "del" => {
                self.engine.process_key(Key::Backspace);
                return LineOutcome::Fed { ignored: 0 };
            }
            "" => {
                self.engine.process_key(Key::Enter);
                return LineOutcome::Fed { ignored: 0 };
            }
            _ => {}
        }

        let mut ignored = 0;
        for ch in trimmed.chars() {
            if ch.is_whitespace() {
                continue;
            }
            if self.engine.process_key(Key::Char(ch)) == KeyResult::NotHandled {
                ignored += 1;
            }
        }
        LineOutcome::Fed { ignored }
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}
