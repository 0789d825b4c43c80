//! Guarded index arithmetic shared by every paginated view

use serde::Serialize;

/// A position within a non-empty sequence of pages
///
/// The index never leaves `0..count`. Moves past either end are no-ops;
/// there is no wrap-around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pager {
    index: usize,
    count: usize,
}

impl Pager {
    /// A pager at the first page, or `None` for an empty sequence
    pub fn new(count: usize) -> Option<Self> {
        (count > 0).then_some(Self { index: 0, count })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn can_go_next(&self) -> bool {
        self.index < self.count - 1
    }

    pub fn can_go_previous(&self) -> bool {
        self.index > 0
    }

    /// Advance one page; returns whether the index moved
    pub fn go_next(&mut self) -> bool {
        if self.can_go_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Step back one page; returns whether the index moved
    pub fn go_previous(&mut self) -> bool {
        if self.can_go_previous() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Walk toward `target` one guarded step at a time
    ///
    /// Targets past the end stop at the last page.
    pub fn go_to_index(&mut self, target: usize) {
        while self.index < target && self.go_next() {}
        while self.index > target && self.go_previous() {}
    }

    /// Page counter text, 1-based
    pub fn indicator(&self) -> String {
        format!("{} / {}", self.index + 1, self.count)
    }
}
