use parking_lot::Mutex;

use crate::edit::Edit;

/// Notifications the host consumes to drive its dirty indicator and to
/// re-render views.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEvent {
    /// One edit was applied; the host may offer undo/redo for it.
    Edited {
        uri: String,
        label: &'static str,
        edit: Edit,
    },
    /// The document content changed wholesale (undo, redo or revert).
    /// `content` carries the new backing bytes after a revert.
    ContentChanged {
        uri: String,
        content: Option<Vec<u8>>,
        edits: Vec<Edit>,
    },
}

/// Implemented by host-side listeners.
pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &DocumentEvent);
}

/// A simple event bus broadcasting document events to registered handlers.
pub struct EventBus {
    handlers: Mutex<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.lock().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: Mutex::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events.
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.lock().push(handler);
    }

    /// Emit an event to all registered handlers.
    pub fn emit(&self, event: DocumentEvent) {
        for handler in self.handlers.lock().iter_mut() {
            handler.handle_event(&event);
        }
    }
}
