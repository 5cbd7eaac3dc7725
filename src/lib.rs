#![warn(clippy::all, rust_2018_idioms)]

pub mod cancel;
pub mod canvas;
pub mod codec;
pub mod color;
pub mod document;
pub mod edit;
pub mod event;
pub mod fill;
pub mod grid;
pub mod protocol;
pub mod provider;
pub mod shapes;
pub mod storage;

pub use cancel::CancellationToken;
pub use canvas::{CanvasSession, DEFAULT_PALETTE, Tool};
pub use color::Color;
pub use document::{DocumentState, PixelDocument};
pub use edit::{Edit, Point, Stroke};
pub use event::{DocumentEvent, EventBus, EventHandler};
pub use fill::flood_fill;
pub use grid::{GridError, PixelGrid};
pub use provider::{Backup, PixelEditorProvider, ProviderError, SurfaceId};
pub use storage::{FileStorage, MemoryStorage, Storage};
