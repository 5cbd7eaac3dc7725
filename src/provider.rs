//! Host-facing document lifecycle: open, save, revert and backup, plus the
//! registry of rendering surfaces and the correlation-id protocol used to
//! pull encoded bytes back out of them.

use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::channel::{mpsc, oneshot};
use parking_lot::Mutex;
use thiserror::Error;

use crate::cancel::CancellationToken;
use crate::codec::{self, CodecError};
use crate::document::PixelDocument;
use crate::event::{DocumentEvent, EventBus, EventHandler};
use crate::protocol::{DocUpdate, HostMessage, SurfaceMessage};
use crate::storage::Storage;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// A save or backup needed bytes but no surface is attached for the uri.
    #[error("no rendering surface attached for {0}")]
    NoActiveSurface(String),

    /// The surface detached before answering a byte request.
    #[error("rendering surface closed before responding")]
    SurfaceClosed,

    #[error("failed to read {uri}: {source}")]
    Read { uri: String, source: io::Error },

    #[error("failed to write {uri}: {source}")]
    Write { uri: String, source: io::Error },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Identifies one attached rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

struct SurfaceEntry {
    id: SurfaceId,
    key: String, // document uri
    sender: mpsc::UnboundedSender<HostMessage>,
}

struct PendingRequest {
    surface: SurfaceId,
    resolve: oneshot::Sender<String>,
}

/// A completed backup copy. Holds what is needed to delete the copy again
/// once the host no longer wants it.
pub struct Backup<S: Storage> {
    id: String,
    storage: Arc<S>,
}

impl<S: Storage> Backup<S> {
    /// The identifier the host hands back through [`PixelEditorProvider::open`]
    /// when resuming from this backup: the destination uri itself.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Removes the backup copy. Best-effort: a backup that is already gone
    /// is not an error worth surfacing.
    pub fn delete(self) {
        if let Err(err) = self.storage.delete(&self.id) {
            log::warn!("failed to delete backup {}: {err}", self.id);
        }
    }
}

/// The document provider: implements the host's lifecycle callbacks over a
/// [`Storage`] backend and a set of attached rendering surfaces.
pub struct PixelEditorProvider<S: Storage> {
    storage: Arc<S>,
    surfaces: Mutex<Vec<SurfaceEntry>>,
    next_surface: AtomicU64,
    next_request: AtomicU64,
    pending: Mutex<HashMap<u64, PendingRequest>>,
    events: EventBus,
}

impl<S: Storage> PixelEditorProvider<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage: Arc::new(storage),
            surfaces: Mutex::new(Vec::new()),
            next_surface: AtomicU64::new(1),
            next_request: AtomicU64::new(1),
            pending: Mutex::new(HashMap::new()),
            events: EventBus::new(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Subscribe to document change notifications.
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    /// Opens the document at `uri`, or resumes from `backup_id` when the
    /// host is recovering from a crash. `untitled:` uris start empty.
    pub fn open(
        &self,
        uri: &str,
        backup_id: Option<&str>,
    ) -> Result<PixelDocument, ProviderError> {
        let source = backup_id.unwrap_or(uri);
        let bytes = self.read_source(source)?;
        log::info!("opened {uri} ({} bytes)", bytes.len());
        Ok(PixelDocument::from_bytes(uri, bytes)?)
    }

    /// Attaches a rendering surface for `uri`. The returned receiver is the
    /// surface's end of the host → surface message stream.
    pub fn attach_surface(
        &self,
        uri: &str,
    ) -> (SurfaceId, mpsc::UnboundedReceiver<HostMessage>) {
        let id = SurfaceId(self.next_surface.fetch_add(1, Ordering::SeqCst));
        let (sender, receiver) = mpsc::unbounded();
        self.surfaces.lock().push(SurfaceEntry {
            id,
            key: uri.to_string(),
            sender,
        });
        (id, receiver)
    }

    /// Detaches a surface, failing any byte request still waiting on it so
    /// the pending map never keeps entries for a surface that is gone.
    pub fn detach_surface(&self, id: SurfaceId) {
        self.surfaces.lock().retain(|entry| entry.id != id);
        // Dropping the resolvers wakes the waiters with SurfaceClosed.
        self.pending.lock().retain(|_, request| request.surface != id);
    }

    /// Dispatches one message arriving from surface `surface` for `doc`.
    ///
    /// `Response` messages need no document access; transports that keep
    /// documents elsewhere can route them straight to [`Self::resolve_response`].
    pub fn handle_message(
        &self,
        doc: &mut PixelDocument,
        surface: SurfaceId,
        msg: SurfaceMessage,
    ) {
        match msg {
            SurfaceMessage::Ready => {
                let reply = if doc.is_untitled() {
                    HostMessage::New
                } else {
                    HostMessage::Init {
                        data_uri: codec::to_data_uri(doc.bytes()),
                        edits: doc.edits().to_vec(),
                    }
                };
                self.send_to(surface, reply);
            }
            SurfaceMessage::Edit { edit } => {
                doc.apply_edit(edit.clone());
                self.events.emit(DocumentEvent::Edited {
                    uri: doc.uri().to_string(),
                    label: "Stroke",
                    edit,
                });
            }
            SurfaceMessage::Response { request_id, body } => {
                self.resolve_response(request_id, body);
            }
        }
    }

    /// Resolves one correlated byte response. Unknown ids are ignored: the
    /// request may already have been dropped when its surface detached.
    pub fn resolve_response(&self, request_id: u64, body: String) {
        if let Some(request) = self.pending.lock().remove(&request_id) {
            let _ = request.resolve.send(body);
        }
    }

    /// Saves `doc` in place. On success (and only then) the document is
    /// marked clean; a cancelled save leaves it dirty.
    pub async fn save(
        &self,
        doc: &mut PixelDocument,
        cancel: &CancellationToken,
    ) -> Result<(), ProviderError> {
        let uri = doc.uri().to_string();
        self.save_as(doc, &uri, cancel).await?;
        if cancel.is_cancelled() {
            return Ok(());
        }
        doc.mark_saved();
        Ok(())
    }

    /// Writes the document's current bytes to `dest` without touching the
    /// dirty-state bookkeeping (used for save-as and backups).
    pub async fn save_as(
        &self,
        doc: &PixelDocument,
        dest: &str,
        cancel: &CancellationToken,
    ) -> Result<(), ProviderError> {
        let data_uri = self.fetch_bytes(doc.uri()).await?;
        // The fetch is the only await; a cancellation signalled while it was
        // in flight must be honored before the destructive write.
        if cancel.is_cancelled() {
            log::info!("save of {dest} cancelled before write");
            return Ok(());
        }
        let bytes = codec::from_data_uri(&data_uri)?;
        self.storage
            .write(dest, &bytes)
            .map_err(|source| ProviderError::Write {
                uri: dest.to_string(),
                source,
            })?;
        log::info!("wrote {} bytes to {dest}", bytes.len());
        Ok(())
    }

    /// Re-reads the backing bytes and rolls the document back to its
    /// last-saved state, then pushes the result to every attached surface.
    pub async fn revert(
        &self,
        doc: &mut PixelDocument,
        cancel: &CancellationToken,
    ) -> Result<(), ProviderError> {
        let bytes = self.read_source(doc.uri())?;
        if cancel.is_cancelled() {
            return Ok(());
        }
        doc.revert(bytes)?;
        self.broadcast_update(doc);
        self.events.emit(DocumentEvent::ContentChanged {
            uri: doc.uri().to_string(),
            content: Some(doc.bytes().to_vec()),
            edits: doc.edits().to_vec(),
        });
        Ok(())
    }

    /// Copies the document to `dest` for crash recovery and returns the
    /// handle used to resume from, or discard, the copy.
    pub async fn backup(
        &self,
        doc: &PixelDocument,
        dest: &str,
        cancel: &CancellationToken,
    ) -> Result<Backup<S>, ProviderError> {
        self.save_as(doc, dest, cancel).await?;
        Ok(Backup {
            id: dest.to_string(),
            storage: Arc::clone(&self.storage),
        })
    }

    /// Undoes the most recent edit and pushes the new state to surfaces.
    pub fn undo(&self, doc: &mut PixelDocument) -> Result<bool, ProviderError> {
        let undone = doc.undo()?;
        if undone {
            self.after_history_change(doc);
        }
        Ok(undone)
    }

    /// Re-applies the most recently undone edit, if any.
    pub fn redo(&self, doc: &mut PixelDocument) -> bool {
        let redone = doc.redo();
        if redone {
            self.after_history_change(doc);
        }
        redone
    }

    fn read_source(&self, uri: &str) -> Result<Vec<u8>, ProviderError> {
        if uri.starts_with("untitled:") {
            return Ok(Vec::new());
        }
        self.storage.read(uri).map_err(|source| ProviderError::Read {
            uri: uri.to_string(),
            source,
        })
    }

    /// Requests the current encoded bytes from the first surface attached
    /// for `key` and awaits the correlated response.
    async fn fetch_bytes(&self, key: &str) -> Result<String, ProviderError> {
        let request_id = self.next_request.fetch_add(1, Ordering::SeqCst);
        let (resolve, response) = oneshot::channel();

        {
            let surfaces = self.surfaces.lock();
            let entry = surfaces
                .iter()
                .find(|entry| entry.key == key)
                .ok_or_else(|| ProviderError::NoActiveSurface(key.to_string()))?;
            self.pending.lock().insert(
                request_id,
                PendingRequest {
                    surface: entry.id,
                    resolve,
                },
            );
            if entry
                .sender
                .unbounded_send(HostMessage::GetBytes { request_id })
                .is_err()
            {
                self.pending.lock().remove(&request_id);
                return Err(ProviderError::SurfaceClosed);
            }
        }

        response.await.map_err(|_| ProviderError::SurfaceClosed)
    }

    fn after_history_change(&self, doc: &PixelDocument) {
        self.broadcast_update(doc);
        self.events.emit(DocumentEvent::ContentChanged {
            uri: doc.uri().to_string(),
            content: None,
            edits: doc.edits().to_vec(),
        });
    }

    /// Sends the document snapshot to every surface attached for its uri.
    fn broadcast_update(&self, doc: &PixelDocument) {
        let update = HostMessage::Update {
            doc: DocUpdate {
                data_uri: codec::to_data_uri(doc.bytes()),
                edits: doc.edits().to_vec(),
            },
        };
        let surfaces = self.surfaces.lock();
        for entry in surfaces.iter().filter(|entry| entry.key == doc.uri()) {
            if entry.sender.unbounded_send(update.clone()).is_err() {
                log::warn!("surface {:?} dropped its channel", entry.id);
            }
        }
    }

    fn send_to(&self, surface: SurfaceId, msg: HostMessage) {
        let surfaces = self.surfaces.lock();
        if let Some(entry) = surfaces.iter().find(|entry| entry.id == surface) {
            if entry.sender.unbounded_send(msg).is_err() {
                log::warn!("surface {:?} dropped its channel", entry.id);
            }
        }
    }
}
