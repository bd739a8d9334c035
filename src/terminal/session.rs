//! Terminal session history and output sequencing.
//!
//! History is append-only; the only other mutation is `clear`. Output entries
//! are revealed strictly one after another: an entry starts typing only once
//! the previous one is done, and `is_executing` stays true from the first
//! start until the queue drains.

use std::collections::VecDeque;

use uuid::Uuid;

use crate::{flog_debug, flog_trace};

use super::commands::StyleHint;
use super::typewriter::{Signal, Typewriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEntry {
    Input {
        id: EntryId,
        text: String,
    },
    Output {
        id: EntryId,
        lines: Vec<String>,
        style: Option<StyleHint>,
    },
}

impl HistoryEntry {
    pub fn id(&self) -> EntryId {
        match self {
            HistoryEntry::Input { id, .. } | HistoryEntry::Output { id, .. } => *id,
        }
    }
}

/// What the renderer should draw for one entry right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibleEntry {
    Input(String),
    Output {
        lines: Vec<String>,
        style: Option<StyleHint>,
        typing: bool,
    },
}

#[derive(Debug, Default)]
pub struct Session {
    history: Vec<HistoryEntry>,
    pub current_input: String,
    is_executing: bool,
    active: Option<(EntryId, Typewriter)>,
    pending: VecDeque<EntryId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// True while any output entry is queued or typing; input is not offered.
    pub fn is_executing(&self) -> bool {
        self.is_executing
    }

    pub fn push_input(&mut self, text: String) -> EntryId {
        let id = EntryId::new();
        self.history.push(HistoryEntry::Input { id, text });
        id
    }

    /// Append an output entry and queue it for sequencing.
    pub fn push_output(&mut self, lines: Vec<String>, style: Option<StyleHint>) -> EntryId {
        let id = EntryId::new();
        flog_trace!("Session::push_output id={} lines={}", id.short(), lines.len());
        self.history.push(HistoryEntry::Output { id, lines, style });
        self.pending.push_back(id);
        self.advance_queue();
        id
    }

    pub fn clear(&mut self) {
        flog_debug!("Session::clear entries={}", self.history.len());
        self.history.clear();
        self.pending.clear();
        self.active = None;
        self.is_executing = false;
    }

    /// Advance the active entry. Returns true if anything visible changed.
    pub fn tick(&mut self, budget: usize) -> bool {
        let Some((id, typewriter)) = self.active.as_mut() else {
            return false;
        };
        if let Signal::Done = typewriter.tick(budget) {
            flog_trace!("Session: entry {} done", id.short());
            self.active = None;
            self.advance_queue();
        }
        true
    }

    /// Reveal everything immediately and drain the queue.
    pub fn finish_all(&mut self) {
        if let Some((_, typewriter)) = self.active.as_mut() {
            typewriter.finish();
        }
        self.active = None;
        self.pending.clear();
        self.is_executing = false;
    }

    fn advance_queue(&mut self) {
        while self.active.is_none() {
            let Some(id) = self.pending.pop_front() else {
                break;
            };
            let Some(lines) = self.output_lines(id) else {
                continue;
            };
            let mut typewriter = Typewriter::new(lines.to_vec());
            match typewriter.start() {
                Signal::Started => {
                    flog_trace!("Session: entry {} started", id.short());
                    self.active = Some((id, typewriter));
                }
                _ => flog_trace!("Session: entry {} empty, done", id.short()),
            }
        }
        self.is_executing = self.active.is_some();
    }

    fn output_lines(&self, id: EntryId) -> Option<&[String]> {
        self.history.iter().rev().find_map(|entry| match entry {
            HistoryEntry::Output { id: eid, lines, .. } if *eid == id => Some(lines.as_slice()),
            _ => None,
        })
    }

    /// Render snapshot. Queued entries are not shown until they start.
    pub fn visible(&self) -> Vec<VisibleEntry> {
        self.history
            .iter()
            .filter_map(|entry| match entry {
                HistoryEntry::Input { text, .. } => Some(VisibleEntry::Input(text.clone())),
                HistoryEntry::Output { id, lines, style } => {
                    if self.pending.contains(id) {
                        return None;
                    }
                    match &self.active {
                        Some((active_id, typewriter)) if active_id == id => {
                            Some(VisibleEntry::Output {
                                lines: typewriter.revealed(),
                                style: *style,
                                typing: true,
                            })
                        }
                        _ => Some(VisibleEntry::Output {
                            lines: lines.clone(),
                            style: *style,
                            typing: false,
                        }),
                    }
                }
            })
            .collect()
    }
}
