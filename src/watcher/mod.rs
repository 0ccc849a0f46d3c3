//! Document watcher
//!
//! Feeds an [`OutlineSession`](crate::session::OutlineSession) from disk:
//!
//! 1. **File System Events** → notify reports changes in the document's directory
//! 2. **Event Mapping** → a background task keeps the ones touching the document,
//!    snapshots it, and sends a [`HostEvent`] down a channel
//!
//! The directory is watched rather than the file because many editors save by
//! replacing the file, which would silently end a watch on the file itself.

pub mod events;
pub mod types;

use anyhow::{Context, Result};
use notify::Watcher;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::session::HostEvent;

pub use types::{FileChangeEvent, FileChangeType};

pub struct DocumentWatcher {
    watcher: Option<notify::RecommendedWatcher>,
    path: PathBuf,
}

impl DocumentWatcher {
    pub fn new(path: &Path) -> Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Cannot watch {}", path.display()))?;
        Ok(Self {
            watcher: None,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Start watching; host events arrive on the returned receiver
    pub fn start_watching(&mut self) -> Result<mpsc::UnboundedReceiver<HostEvent>> {
        let directory = self
            .path
            .parent()
            .context("Watched document has no parent directory")?
            .to_path_buf();
        info!("Starting document watcher for: {}", self.path.display());

        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel::<notify::Result<notify::Event>>();

        let mut watcher = notify::recommended_watcher(move |res| {
            if let Err(e) = raw_tx.send(res) {
                error!("Failed to send file event: {}", e);
            }
        })?;
        watcher
            .watch(&directory, notify::RecursiveMode::NonRecursive)
            .context("Failed to start watching document directory")?;
        self.watcher = Some(watcher);

        let (tx, rx) = mpsc::unbounded_channel();
        let target = self.path.clone();

        tokio::spawn(async move {
            // notify reports several events per save; forward each snapshot once
            let mut last_text: Option<String> = None;

            while let Some(event_result) = raw_rx.recv().await {
                let event = match event_result {
                    Ok(event) => event,
                    Err(e) => {
                        warn!("File watcher error: {}", e);
                        continue;
                    }
                };

                let Some(change) = events::classify(&event, &target) else {
                    continue;
                };

                let host_event = match events::to_host_event(&change).await {
                    Ok(host_event) => host_event,
                    Err(e) => {
                        warn!("Failed to snapshot {}: {}", change.path.display(), e);
                        continue;
                    }
                };

                match &host_event {
                    HostEvent::TextChanged(document) => {
                        if last_text.as_deref() == Some(document.text()) {
                            debug!("Skipping unchanged snapshot of {}", document.uri());
                            continue;
                        }
                        last_text = Some(document.text().to_string());
                    }
                    _ => last_text = None,
                }

                if tx.send(host_event).is_err() {
                    debug!("Receiver dropped, stopping document watcher task");
                    break;
                }
            }
        });

        Ok(rx)
    }

    /// Stop the watcher; the event channel closes once the task drains
    pub fn stop(&mut self) {
        if let Some(watcher) = self.watcher.take() {
            drop(watcher);
            info!("Document watcher stopped");
        }
    }
}
