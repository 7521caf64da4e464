//! Linear move history with move-number labels and a navigation cursor.
//!
//! This is a pure domain module with no GPUI dependencies. Navigation never
//! touches the board directly: every request goes through a caller-supplied
//! closure that loads the position and answers whether it accepted it.

use serde::{Deserialize, Serialize};

use crate::domain::Cell;
use crate::domain::notation::fullmove_number;

/// A committed move as shown in the history
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Notation with figurines
    pub notation: String,
    /// Position after the move
    pub fen: String,
    pub from: Cell,
    pub to: Cell,
    pub mover_was_black: bool,
}

impl MoveRecord {
    /// The synthetic record standing for the start position: only the FEN is
    /// set, the cells are sentinels.
    pub fn start_position(fen: impl Into<String>) -> Self {
        Self {
            notation: String::new(),
            fen: fen.into(),
            from: Cell::NONE,
            to: Cell::NONE,
            mover_was_black: false,
        }
    }
}

/// One element of the displayed history
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryEntry {
    /// A clickable move; the index points into the move records
    MoveButton(usize),
    /// A "12." move-number marker
    MoveNumber(u32),
}

/// Current selection. `None` stands for the start position.
///
/// `highlighted_entry` only ever points at a `MoveButton` entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Cursor {
    pub highlighted_entry: Option<usize>,
    pub selected_move: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    Start,
    Move(usize),
}

#[derive(Clone, Debug)]
pub struct History {
    records: Vec<MoveRecord>,
    entries: Vec<HistoryEntry>,
    /// Entry index of each record's button, parallel to `records`
    button_entries: Vec<usize>,
    cursor: Cursor,
    start_fen: String,
    move_number: u32,
}

impl History {
    pub fn new(start_fen: impl Into<String>) -> Self {
        let mut history = Self {
            records: Vec::new(),
            entries: Vec::new(),
            button_entries: Vec::new(),
            cursor: Cursor::default(),
            start_fen: String::new(),
            move_number: 1,
        };
        history.reset(start_fen);
        history
    }

    /// Drop every move and start over from `start_fen`.
    pub fn reset(&mut self, start_fen: impl Into<String>) {
        self.start_fen = start_fen.into();
        self.records.clear();
        self.entries.clear();
        self.button_entries.clear();
        self.cursor = Cursor::default();
        self.move_number = fullmove_number(&self.start_fen);
        self.entries.push(HistoryEntry::MoveNumber(self.move_number));
    }

    /// Append a committed move. A black move closes the pair, so the next
    /// move-number label follows it right away. Returns the record index.
    pub fn append_move(&mut self, record: MoveRecord) -> usize {
        let index = self.records.len();
        let mover_was_black = record.mover_was_black;
        self.records.push(record);
        self.button_entries.push(self.entries.len());
        self.entries.push(HistoryEntry::MoveButton(index));

        if mover_was_black {
            self.move_number = self.move_number.saturating_add(1);
            self.entries.push(HistoryEntry::MoveNumber(self.move_number));
        }
        index
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_highlighted(&self, entry_index: usize) -> bool {
        self.cursor.highlighted_entry == Some(entry_index)
    }

    /// Text shown for a display entry
    pub fn label(&self, entry: HistoryEntry) -> String {
        match entry {
            HistoryEntry::MoveButton(index) => self
                .records
                .get(index)
                .map(|r| r.notation.clone())
                .unwrap_or_default(),
            HistoryEntry::MoveNumber(n) => format!("{n}."),
        }
    }

    fn request<F>(&mut self, target: Target, request: F) -> bool
    where
        F: FnOnce(&MoveRecord) -> bool,
    {
        let accepted = match target {
            Target::Start => request(&MoveRecord::start_position(self.start_fen.as_str())),
            Target::Move(index) => match self.records.get(index) {
                Some(record) => request(record),
                None => return false,
            },
        };

        if accepted {
            self.cursor = match target {
                Target::Start => Cursor::default(),
                Target::Move(index) => Cursor {
                    highlighted_entry: Some(self.button_entries[index]),
                    selected_move: Some(index),
                },
            };
        }
        accepted
    }

    /// Ask to show the position after move `index`.
    pub fn request_selection<F>(&mut self, index: usize, request: F) -> bool
    where
        F: FnOnce(&MoveRecord) -> bool,
    {
        self.request(Target::Move(index), request)
    }

    /// Ask to show the start position.
    pub fn request_first<F>(&mut self, request: F) -> bool
    where
        F: FnOnce(&MoveRecord) -> bool,
    {
        self.request(Target::Start, request)
    }

    /// Step back one move; from the first move (or the start) this asks for
    /// the start position.
    pub fn request_previous<F>(&mut self, request: F) -> bool
    where
        F: FnOnce(&MoveRecord) -> bool,
    {
        match self.cursor.selected_move {
            Some(index) if index > 0 => self.request(Target::Move(index - 1), request),
            _ => self.request(Target::Start, request),
        }
    }

    /// Step forward one move. No-op at the last move or on an empty history.
    pub fn request_next<F>(&mut self, request: F) -> bool
    where
        F: FnOnce(&MoveRecord) -> bool,
    {
        let next = self.cursor.selected_move.map_or(0, |index| index + 1);
        if next >= self.records.len() {
            return false;
        }
        self.request(Target::Move(next), request)
    }

    /// Jump to the final move. No-op on an empty history.
    pub fn request_last<F>(&mut self, request: F) -> bool
    where
        F: FnOnce(&MoveRecord) -> bool,
    {
        match self.records.len() {
            0 => false,
            len => self.request(Target::Move(len - 1), request),
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(String::new())
    }
}
