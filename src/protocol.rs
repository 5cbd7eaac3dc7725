//! Messages crossing the document to rendering-surface boundary.
//!
//! Both directions travel as JSON; tags and field names follow the
//! surface's camelCase convention.

use serde::{Deserialize, Serialize};

use crate::edit::Edit;

/// Surface → document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SurfaceMessage {
    /// The surface finished loading and wants its initial content.
    Ready,
    /// The user performed one edit on the surface.
    Edit { edit: Edit },
    /// Reply to a [`HostMessage::GetBytes`] request.
    #[serde(rename_all = "camelCase")]
    Response { request_id: u64, body: String },
}

/// Document → surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostMessage {
    /// Initial content for an existing document.
    #[serde(rename_all = "camelCase")]
    Init { data_uri: String, edits: Vec<Edit> },
    /// Initial state for a new, untitled document.
    New,
    /// The document changed outside the surface (undo, redo or revert).
    Update { doc: DocUpdate },
    /// Request for the surface's current bytes, correlated by `request_id`.
    #[serde(rename_all = "camelCase")]
    GetBytes { request_id: u64 },
}

/// Snapshot pushed with [`HostMessage::Update`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocUpdate {
    pub data_uri: String,
    pub edits: Vec<Edit>,
}
