//! Line-by-line typewriter reveal for one output entry.
//!
//! `Idle -> Typing(line) -> ... -> Done`. Each [`Typewriter::tick`] reveals up
//! to `budget` characters of the current line; finishing a line moves to the
//! next one. Nothing here owns a timer: the caller drives ticks and simply
//! stops calling when the view goes away.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingState {
    Idle,
    Typing { line: usize },
    Done,
}

/// Transition reported by `start` and `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Started,
    Progress,
    LineComplete(usize),
    Done,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    lines: Vec<String>,
    state: TypingState,
    /// Characters revealed on the current line.
    chars: usize,
}

impl Typewriter {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            state: TypingState::Idle,
            chars: 0,
        }
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == TypingState::Done
    }

    /// Leave `Idle`. An empty entry goes straight to `Done`.
    pub fn start(&mut self) -> Signal {
        if self.state != TypingState::Idle {
            return if self.is_done() {
                Signal::Done
            } else {
                Signal::Progress
            };
        }
        if self.lines.is_empty() {
            self.state = TypingState::Done;
            return Signal::Done;
        }
        self.state = TypingState::Typing { line: 0 };
        self.chars = 0;
        Signal::Started
    }

    pub fn tick(&mut self, budget: usize) -> Signal {
        let TypingState::Typing { line } = self.state else {
            return match self.state {
                TypingState::Done => Signal::Done,
                _ => self.start(),
            };
        };

        let len = self.lines[line].chars().count();
        self.chars = (self.chars + budget.max(1)).min(len);
        if self.chars < len {
            return Signal::Progress;
        }

        self.chars = 0;
        if line + 1 >= self.lines.len() {
            self.state = TypingState::Done;
            Signal::Done
        } else {
            self.state = TypingState::Typing { line: line + 1 };
            Signal::LineComplete(line)
        }
    }

    /// Jump to `Done`, revealing everything.
    pub fn finish(&mut self) {
        self.state = TypingState::Done;
        self.chars = 0;
    }

    /// Snapshot of what is visible: completed lines plus the partial line.
    pub fn revealed(&self) -> Vec<String> {
        match self.state {
            TypingState::Idle => Vec::new(),
            TypingState::Done => self.lines.clone(),
            TypingState::Typing { line } => {
                let mut out: Vec<String> = self.lines[..line].to_vec();
                out.push(self.lines[line].chars().take(self.chars).collect());
                out
            }
        }
    }
}
