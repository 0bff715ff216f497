//! Selection tracker — the focus state machine behind every emission.
//!
//! Holds the (platform, game, emulator) tuple for the process lifetime
//! and turns noisy selection notifications into meaningful transitions:
//! re-selecting the held game is a no-op, a real change emits a `MOVE`
//! navigation command followed by the paired selection command.
//!
//! Game focus strictly dominates platform focus per cycle — a platform
//! message only goes out when zero games are selected. All emission is
//! best-effort: send failures are logged at debug and dropped, never
//! surfaced, so the host's event thread is never stalled by a missing
//! receiver beyond the sender's connect timeout.

use crate::catalog::EmulatorCatalog;
use crate::channel::MessageSink;
use crate::events::GameDescriptor;
use crate::normalize::normalize;
use crate::wire::{self, NavCommand};

/// Scope sentinel for platform-level focus with no game selected.
pub const PLATFORM_SENTINEL: &str = "platforms";

/// The held focus tuple. Mutated only by the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    /// Canonical platform name, or [`PLATFORM_SENTINEL`] for the
    /// platform-level view.
    pub current_platform: String,
    /// Canonical game identifier; empty when nothing is selected.
    pub current_game: String,
    /// Emulator display title of the selected game; empty when unknown.
    pub current_emulator: String,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            current_platform: PLATFORM_SENTINEL.to_string(),
            current_game: String::new(),
            current_emulator: String::new(),
        }
    }
}

/// Owns [`SelectionState`] and emits transitions through a sink.
pub struct SelectionTracker<S: MessageSink> {
    state: SelectionState,
    sink: S,
}

impl<S: MessageSink> SelectionTracker<S> {
    pub fn new(sink: S) -> Self {
        Self {
            state: SelectionState::default(),
            sink,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Handle a selection-change notification.
    ///
    /// A non-empty game list wins: the first entry is normalized and,
    /// if it differs from the held game, adopted together with its
    /// emulator title. Otherwise a changed platform is adopted. When
    /// the host reports a changed platform while still attaching an
    /// (empty) game list, the held game is re-emitted under the new
    /// platform instead of the platform marquee — the selector and the
    /// game list disagree about focus and the game list is trusted.
    pub async fn selection_changed(
        &mut self,
        platform: Option<&str>,
        games: Option<&[GameDescriptor]>,
        catalog: &impl EmulatorCatalog,
    ) {
        if let Some(first) = games.and_then(<[_]>::first) {
            let candidate = normalize(&first.application_path);
            if candidate == self.state.current_game {
                return;
            }
            let emulator = catalog
                .emulator_title(&first.emulator_id)
                .unwrap_or_default();
            tracing::debug!(game = %candidate, emulator = %emulator, "game focus changed");
            self.state.current_game = candidate;
            self.state.current_emulator = emulator;
            self.emit_selection(&self.state.current_emulator, &self.state.current_game)
                .await;
            return;
        }

        let Some(platform) = platform else { return };
        if platform == self.state.current_platform {
            return;
        }
        tracing::debug!(platform, "platform focus changed");
        self.state.current_platform = platform.to_string();
        if games.is_some() {
            self.emit_selection(&self.state.current_platform, &self.state.current_game)
                .await;
        } else {
            self.emit_selection(PLATFORM_SENTINEL, &self.state.current_platform)
                .await;
        }
    }

    /// A game is launching: signal the launch display. Focus state is
    /// untouched so [`game_exited`](Self::game_exited) can restore it.
    pub async fn game_starting(&self) {
        self.emit_navigation(NavCommand::Launch).await;
    }

    /// The running game exited: restore the held selection verbatim.
    /// Uses state only — the frontend is not re-queried.
    pub async fn game_exited(&self) {
        let scope = if self.state.current_emulator.is_empty() {
            &self.state.current_platform
        } else {
            &self.state.current_emulator
        };
        self.emit_selection(scope, &self.state.current_game).await;
    }

    pub async fn startup_complete(&self) {
        self.emit_navigation(NavCommand::Startup).await;
    }

    /// Either host shutdown variant: go dark. State is untouched.
    pub async fn shutdown_begin(&self) {
        self.emit_navigation(NavCommand::Blank).await;
    }

    async fn emit_navigation(&self, cmd: NavCommand) {
        if let Err(e) = self.sink.send(&wire::navigation(cmd)).await {
            tracing::debug!(command = %cmd, error = %e, "navigation send failed");
        }
    }

    /// Selection messages always ride behind a `MOVE` — the receiver
    /// depends on that ordering.
    async fn emit_selection(&self, scope: &str, item: &str) {
        self.emit_navigation(NavCommand::Move).await;
        if let Err(e) = self.sink.send(&wire::selection(scope, item)).await {
            tracing::debug!(scope, item, error = %e, "selection send failed");
        }
    }
}
