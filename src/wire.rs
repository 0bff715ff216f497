//! Wire message builders — the two command shapes the receiver accepts.
//!
//! The protocol is plain UTF-8 text, one message per connection, no
//! terminator: the receiver frames by connection close. Two shapes exist:
//!
//! - `MENU_NAVIGATION=<CMD>` — display-mode change, no content.
//! - `MENU_ROM=<scope>,<item>` — the scope (platform name, emulator
//!   title, or the literal `platforms`) and item currently in focus.
//!
//! Every selection message must be immediately preceded by a `MOVE`
//! navigation message; the receiver relies on that ordering to tell
//! "about to change display" from "here is new content". The tracker
//! enforces the pairing.

use std::fmt;

use crate::normalize::base_name;

/// The closed vocabulary of navigation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Frontend finished starting — show the attract/startup display.
    Startup,
    /// Frontend is shutting down — go dark.
    Blank,
    /// A game is launching — show the launch display.
    Launch,
    /// Focus is about to change — next message carries the new content.
    Move,
}

impl fmt::Display for NavCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Startup => "STARTUP",
            Self::Blank => "BLANK",
            Self::Launch => "LAUNCH",
            Self::Move => "MOVE",
        })
    }
}

/// Build a navigation command payload.
pub fn navigation(cmd: NavCommand) -> String {
    format!("MENU_NAVIGATION={cmd}")
}

/// Build a selection command payload.
///
/// `item` gets a base-name strip on the way through. Callers normally
/// pass an already-canonical name, in which case the strip is a no-op.
pub fn selection(scope: &str, item: &str) -> String {
    format!("MENU_ROM={scope},{}", base_name(item))
}
