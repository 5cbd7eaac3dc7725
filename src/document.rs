use crate::codec::{self, CodecError};
use crate::edit::Edit;
use crate::grid::PixelGrid;

/// Dimensions of a new, untitled document.
const UNTITLED_WIDTH: u32 = 16;
const UNTITLED_HEIGHT: u32 = 16;

/// Whether unsaved edits exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
    Clean,
    Dirty,
}

/// One open pixel-art document: the backing bytes it was loaded from, the
/// grid those bytes decode to with `edits` replayed on top, and the
/// bookkeeping for undo/redo and dirty state.
///
/// The document exclusively owns its grid and edit lists; rendering surfaces
/// only read snapshots and send edit intents back through the provider.
#[derive(Debug, Clone)]
pub struct PixelDocument {
    uri: String,
    base: Vec<u8>,
    grid: PixelGrid,
    edits: Vec<Edit>,
    saved_edits: Vec<Edit>,
    undone: Vec<Edit>,
}

impl PixelDocument {
    /// Opens a document from its backing bytes. Empty bytes mean a new,
    /// untitled document and produce a transparent default-sized grid.
    pub fn from_bytes(uri: impl Into<String>, bytes: Vec<u8>) -> Result<Self, CodecError> {
        let grid = if bytes.is_empty() {
            PixelGrid::new(UNTITLED_WIDTH, UNTITLED_HEIGHT)?
        } else {
            codec::decode_png(&bytes)?
        };
        Ok(Self {
            uri: uri.into(),
            base: bytes,
            grid,
            edits: Vec::new(),
            saved_edits: Vec::new(),
            undone: Vec::new(),
        })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn is_untitled(&self) -> bool {
        self.uri.starts_with("untitled:")
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// The bytes the grid was last loaded from (file content or backup).
    pub fn bytes(&self) -> &[u8] {
        &self.base
    }

    /// Edits applied since the document was opened or last reverted.
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// Snapshot of `edits` at the moment of the last successful save.
    pub fn saved_edits(&self) -> &[Edit] {
        &self.saved_edits
    }

    pub fn state(&self) -> DocumentState {
        if self.edits == self.saved_edits {
            DocumentState::Clean
        } else {
            DocumentState::Dirty
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.state() == DocumentState::Dirty
    }

    pub fn can_undo(&self) -> bool {
        !self.edits.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Applies one edit. Any pending redo is invalidated.
    pub fn apply_edit(&mut self, edit: Edit) {
        self.grid.apply(&edit);
        self.edits.push(edit);
        self.undone.clear();
    }

    /// Removes the most recent edit, rebuilding the grid by replaying the
    /// remaining edits over a fresh import of the backing bytes. Returns
    /// `false` when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool, CodecError> {
        let Some(edit) = self.edits.pop() else {
            return Ok(false);
        };
        self.undone.push(edit);
        self.rebuild()?;
        Ok(true)
    }

    /// Re-applies the most recently undone edit. Returns `false` when no
    /// undone edit is pending.
    pub fn redo(&mut self) -> bool {
        let Some(edit) = self.undone.pop() else {
            return false;
        };
        self.grid.apply(&edit);
        self.edits.push(edit);
        true
    }

    /// Marks the current edit list as persisted. Called once the bytes have
    /// been written out successfully.
    pub fn mark_saved(&mut self) {
        self.saved_edits = self.edits.clone();
    }

    /// Replaces the backing bytes with freshly read ones and rolls the edit
    /// list back to the last-saved snapshot. A revert starts a new timeline:
    /// the redo stack is dropped.
    pub fn revert(&mut self, bytes: Vec<u8>) -> Result<(), CodecError> {
        self.base = bytes;
        self.edits = self.saved_edits.clone();
        self.undone.clear();
        self.rebuild()
    }

    fn base_grid(&self) -> Result<PixelGrid, CodecError> {
        if self.base.is_empty() {
            Ok(PixelGrid::new(self.grid.width(), self.grid.height())?)
        } else {
            codec::decode_png(&self.base)
        }
    }

    fn rebuild(&mut self) -> Result<(), CodecError> {
        let mut grid = self.base_grid()?;
        for edit in &self.edits {
            grid.apply(edit);
        }
        self.grid = grid;
        Ok(())
    }
}
