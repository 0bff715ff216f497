//! Event dispatch — routes host events onto tracker operations.
//!
//! A pure routing table over [`RawEvent`]: lifecycle events map to
//! their fixed navigation commands, selection changes delegate to the
//! tracker's transition logic, and `Init`/`Other` fall through. The
//! host owns the event loop; `dispatch` is the single synchronous entry
//! point and never propagates an error — everything downstream is
//! absorbed by the tracker.

use crate::catalog::EmulatorCatalog;
use crate::channel::MessageSink;
use crate::events::RawEvent;
use crate::tracker::{SelectionState, SelectionTracker};

/// Owns the tracker and the catalog it queries.
pub struct Dispatcher<S: MessageSink, C: EmulatorCatalog> {
    tracker: SelectionTracker<S>,
    catalog: C,
}

impl<S: MessageSink, C: EmulatorCatalog> Dispatcher<S, C> {
    pub fn new(sink: S, catalog: C) -> Self {
        Self {
            tracker: SelectionTracker::new(sink),
            catalog,
        }
    }

    pub fn state(&self) -> &SelectionState {
        self.tracker.state()
    }

    /// Route one event. Infallible by contract: control always returns
    /// to the caller ready for the next event.
    pub async fn dispatch(&mut self, event: RawEvent) {
        match event {
            RawEvent::Init | RawEvent::Other => {}
            RawEvent::StartupComplete => self.tracker.startup_complete().await,
            RawEvent::ShutdownBegin => self.tracker.shutdown_begin().await,
            RawEvent::GameStarting => self.tracker.game_starting().await,
            RawEvent::GameExited => self.tracker.game_exited().await,
            RawEvent::SelectionChanged { platform, games } => {
                self.tracker
                    .selection_changed(platform.as_deref(), games.as_deref(), &self.catalog)
                    .await
            }
        }
    }
}
