#[derive(Debug, Clone)]
pub struct UndoEntry<S> {
    pub label: String,
    pub snapshot: S,
}

/// Snapshot based undo history. Each entry holds the state from before a labelled edit.
#[derive(Debug, Clone)]
pub struct UndoStack<S> {
    past: Vec<UndoEntry<S>>,
    future: Vec<UndoEntry<S>>,
    pending: Option<UndoEntry<S>>,
}

impl<S> Default for UndoStack<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> UndoStack<S> {
    pub fn new() -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            pending: None,
        }
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
        self.pending = None;
    }

    pub fn push(&mut self, label: impl Into<String>, snapshot: S) {
        let label = label.into();
        tracing::debug!(label = %label, "undo recorded");
        self.past.push(UndoEntry { label, snapshot });
        self.future.clear();
    }

    /// Records `snapshot` for an edit. While the pointer is held the first snapshot of the
    /// gesture is kept pending so a whole drag becomes a single entry.
    pub fn record(&mut self, label: impl Into<String>, snapshot: S, pointer_down: bool) {
        let label = label.into();
        if pointer_down {
            match &self.pending {
                Some(pending) if pending.label == label => {}
                _ => {
                    self.flush_pending();
                    self.pending = Some(UndoEntry { label, snapshot });
                }
            }
        } else {
            self.flush_pending();
            self.push(label, snapshot);
        }
    }

    pub fn flush_pending(&mut self) {
        if let Some(entry) = self.pending.take() {
            self.push(entry.label, entry.snapshot);
        }
    }

    pub fn undo(&mut self, current: S) -> Option<UndoEntry<S>> {
        self.flush_pending();
        let prev = self.past.pop()?;
        self.future.push(UndoEntry {
            label: prev.label.clone(),
            snapshot: current,
        });
        Some(prev)
    }

    pub fn redo(&mut self, current: S) -> Option<UndoEntry<S>> {
        self.pending = None;
        let next = self.future.pop()?;
        self.past.push(UndoEntry {
            label: next.label.clone(),
            snapshot: current,
        });
        Some(next)
    }

    pub fn undo_label(&self) -> Option<&str> {
        self.pending
            .as_ref()
            .or(self.past.last())
            .map(|entry| entry.label.as_str())
    }

    pub fn redo_label(&self) -> Option<&str> {
        self.future.last().map(|entry| entry.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.past.len() + usize::from(self.pending.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
