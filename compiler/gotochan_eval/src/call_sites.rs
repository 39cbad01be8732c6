//! Call-site table for `backto`.

use rustc_hash::FxHashMap;

/// Per-label memory of the most recent goto that named it.
///
/// There is no stack: a second `goto f` overwrites the first, so `backto f`
/// always returns to the latest caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallSites {
    lines: FxHashMap<String, usize>,
}

impl CallSites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `line` as the latest goto naming `label`.
    pub fn record(&mut self, label: &str, line: usize) {
        match self.lines.get_mut(label) {
            Some(existing) => *existing = line,
            None => {
                self.lines.insert(label.to_string(), line);
            }
        }
    }

    /// The latest line that jumped to `label`.
    pub fn get(&self, label: &str) -> Option<usize> {
        self.lines.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
