//! Edit-mode state machine for profile sections
//!
//! The profile card edits education, experience, and skills as independent
//! sections, each cycling view ⇄ edit ⇄ save. [`SectionEditor`] makes those
//! transitions explicit: the draft is initialized from the last committed
//! value on entering edit mode, cancel restores it, and a failed save keeps
//! the draft so the user can retry.

/// The mode of one editable section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionMode {
    /// Showing the committed value.
    #[default]
    Viewing,
    /// A draft is open for edits.
    Editing,
    /// The draft has been handed to a backend call.
    Saving,
}

/// One editable section of the profile (e.g. the education list).
///
/// Transitions:
///
/// | From      | Action           | To        |
/// |-----------|------------------|-----------|
/// | `Viewing` | `begin_edit`     | `Editing` |
/// | `Editing` | `cancel`         | `Viewing` (draft discarded) |
/// | `Editing` | `begin_save`     | `Saving` (draft submitted)  |
/// | `Saving`  | `save_succeeded` | `Viewing` (draft committed) |
/// | `Saving`  | `save_failed`    | `Editing` (draft kept)      |
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionEditor<T: Clone> {
    committed: Vec<T>,
    draft: Vec<T>,
    mode: SectionMode,
}

impl<T: Clone> SectionEditor<T> {
    /// Creates a section showing the given committed value.
    pub fn new(committed: Vec<T>) -> Self {
        Self {
            committed,
            draft: Vec::new(),
            mode: SectionMode::Viewing,
        }
    }

    /// The current mode.
    pub fn mode(&self) -> SectionMode {
        self.mode
    }

    /// The last committed value.
    pub fn committed(&self) -> &[T] {
        &self.committed
    }

    /// Opens a draft initialized from the committed value. No-op outside
    /// `Viewing`.
    pub fn begin_edit(&mut self) {
        if self.mode == SectionMode::Viewing {
            self.draft = self.committed.clone();
            self.mode = SectionMode::Editing;
        }
    }

    /// The open draft, if editing.
    pub fn draft(&self) -> Option<&[T]> {
        match self.mode {
            SectionMode::Editing | SectionMode::Saving => Some(&self.draft),
            SectionMode::Viewing => None,
        }
    }

    /// Mutable access to the draft while editing.
    pub fn draft_mut(&mut self) -> Option<&mut Vec<T>> {
        match self.mode {
            SectionMode::Editing => Some(&mut self.draft),
            _ => None,
        }
    }

    /// Discards the draft and shows the committed value again. No-op outside
    /// `Editing`.
    pub fn cancel(&mut self) {
        if self.mode == SectionMode::Editing {
            self.draft.clear();
            self.mode = SectionMode::Viewing;
        }
    }

    /// Hands the draft to the caller for submission and enters `Saving`.
    /// Returns `None` outside `Editing`.
    pub fn begin_save(&mut self) -> Option<Vec<T>> {
        if self.mode != SectionMode::Editing {
            return None;
        }
        self.mode = SectionMode::Saving;
        Some(self.draft.clone())
    }

    /// Commits the draft after the backend accepted it.
    pub fn save_succeeded(&mut self) {
        if self.mode == SectionMode::Saving {
            self.committed = std::mem::take(&mut self.draft);
            self.mode = SectionMode::Viewing;
        }
    }

    /// Returns to `Editing` with the draft intact so the user can retry.
    pub fn save_failed(&mut self) {
        if self.mode == SectionMode::Saving {
            self.mode = SectionMode::Editing;
        }
    }

    /// Replaces the committed value after a refetch. Only applied while
    /// viewing; an open draft is never clobbered by background data.
    pub fn refresh_committed(&mut self, committed: Vec<T>) {
        if self.mode == SectionMode::Viewing {
            self.committed = committed;
        }
    }
}
