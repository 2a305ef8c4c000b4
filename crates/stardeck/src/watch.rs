//! Hot reload for file-backed decks: a debounced watcher nudges the UI when
//! the catalog file changes on disk.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use crossbeam_channel::Receiver;
use eframe::egui;
use notify_debouncer_mini::notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{DebounceEventResult, Debouncer, new_debouncer};

const DEBOUNCE: Duration = Duration::from_millis(300);

pub struct DeckWatcher {
    // Held for its Drop; dropping stops the watch thread
    _debouncer: Debouncer<RecommendedWatcher>,
    rx: Receiver<()>,
}

impl DeckWatcher {
    pub fn new(path: &Path, ctx: egui::Context) -> Result<Self> {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut debouncer = new_debouncer(DEBOUNCE, move |result: DebounceEventResult| {
            if result.is_ok() {
                let _ = tx.send(());
                ctx.request_repaint();
            }
        })
        .context("Failed to create file watcher")?;
        debouncer
            .watcher()
            .watch(path, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch {}", path.display()))?;
        Ok(Self {
            _debouncer: debouncer,
            rx,
        })
    }

    /// True if the watched file changed since the last call. Drains the
    /// queue so a burst of events triggers a single reload.
    pub fn changed(&self) -> bool {
        let mut changed = false;
        while self.rx.try_recv().is_ok() {
            changed = true;
        }
        changed
    }
}
