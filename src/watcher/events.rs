//! Conversion of notify events into host events for the watched document.

use advpl_extractors::SourceDocument;
use anyhow::Result;
use notify::{Event, EventKind};
use std::path::Path;
use tracing::debug;

use crate::session::{HostEvent, decode_source, document_uri};
use crate::watcher::types::{FileChangeEvent, FileChangeType};

/// The change `event` makes to `target`, if it touches it at all
pub fn classify(event: &Event, target: &Path) -> Option<FileChangeEvent> {
    let change_type = match event.kind {
        EventKind::Create(_) => FileChangeType::Created,
        EventKind::Modify(_) => FileChangeType::Modified,
        EventKind::Remove(_) => FileChangeType::Deleted,
        _ => {
            debug!("Ignoring event kind: {:?}", event.kind);
            return None;
        }
    };

    event
        .paths
        .iter()
        .find(|path| path.as_path() == target)
        .map(|path| FileChangeEvent {
            path: path.clone(),
            change_type,
        })
}

/// Turn a change into the host event that re-extracts the document
///
/// Editors often save by delete-then-create, so a removal is only reported
/// as a close when the file is really gone by the time we look.
pub async fn to_host_event(change: &FileChangeEvent) -> Result<HostEvent> {
    let uri = document_uri(&change.path);

    if change.change_type == FileChangeType::Deleted
        && !tokio::fs::try_exists(&change.path).await.unwrap_or(false)
    {
        return Ok(HostEvent::DocumentClosed(uri));
    }

    let bytes = tokio::fs::read(&change.path).await?;
    Ok(HostEvent::TextChanged(SourceDocument::new(
        uri,
        decode_source(&bytes),
    )))
}
