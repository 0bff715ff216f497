//! Event model — the host frontend's lifecycle notifications.
//!
//! The host raises a closed set of named events. [`HostEvent`] is the
//! wire form read off the event feed (one JSON object per line);
//! [`RawEvent`] is the routed form the dispatcher consumes. Both host
//! shutdown variants collapse into a single [`RawEvent::ShutdownBegin`],
//! and names outside the known set become [`RawEvent::Other`] so a host
//! upgrade can never break the bridge.

use serde::Deserialize;

/// One entry of the host's "currently selected games" list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameDescriptor {
    /// Path of the game's application/ROM file. Raw — normalization
    /// happens in the tracker.
    pub application_path: String,
    /// Opaque id of the emulator configured for this game.
    pub emulator_id: String,
}

/// A host event as routed to the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEvent {
    Init,
    StartupComplete,
    ShutdownBegin,
    GameStarting,
    GameExited,
    SelectionChanged {
        /// Currently selected platform, when the platform selector has
        /// one.
        platform: Option<String>,
        /// Currently selected games. `None` means the host reported no
        /// list at all; `Some(vec![])` means it reported an empty one.
        /// The tracker's contradiction guard distinguishes the two.
        games: Option<Vec<GameDescriptor>>,
    },
    Other,
}

/// Wire form of a host event, one JSON object per feed line.
///
/// `platform` and `games` are only meaningful for `SelectionChanged`;
/// other events carry just the name.
#[derive(Debug, Deserialize)]
pub struct HostEvent {
    pub event: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub games: Option<Vec<GameDescriptor>>,
}

impl From<HostEvent> for RawEvent {
    fn from(host: HostEvent) -> Self {
        match host.event.as_str() {
            "PluginInitialized" => RawEvent::Init,
            "LaunchBoxStartupCompleted" => RawEvent::StartupComplete,
            "LaunchBoxShutdownBeginning" | "BigBoxShutdownBeginning" => RawEvent::ShutdownBegin,
            "GameStarting" => RawEvent::GameStarting,
            "GameExited" => RawEvent::GameExited,
            "SelectionChanged" => RawEvent::SelectionChanged {
                platform: host.platform,
                games: host.games,
            },
            _ => RawEvent::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> RawEvent {
        serde_json::from_str::<HostEvent>(line).unwrap().into()
    }

    #[test]
    fn lifecycle_names_route() {
        assert_eq!(parse(r#"{"event":"PluginInitialized"}"#), RawEvent::Init);
        assert_eq!(
            parse(r#"{"event":"LaunchBoxStartupCompleted"}"#),
            RawEvent::StartupComplete
        );
        assert_eq!(parse(r#"{"event":"GameStarting"}"#), RawEvent::GameStarting);
        assert_eq!(parse(r#"{"event":"GameExited"}"#), RawEvent::GameExited);
    }

    #[test]
    fn both_shutdown_variants_collapse() {
        assert_eq!(
            parse(r#"{"event":"LaunchBoxShutdownBeginning"}"#),
            RawEvent::ShutdownBegin
        );
        assert_eq!(
            parse(r#"{"event":"BigBoxShutdownBeginning"}"#),
            RawEvent::ShutdownBegin
        );
    }

    #[test]
    fn unknown_name_is_other() {
        assert_eq!(parse(r#"{"event":"SomeFutureEvent"}"#), RawEvent::Other);
    }

    #[test]
    fn selection_carries_payload() {
        let event = parse(
            r#"{"event":"SelectionChanged","platform":"Arcade","games":[{"application_path":"/roms/qbert.zip","emulator_id":"mame-01"}]}"#,
        );
        assert_eq!(
            event,
            RawEvent::SelectionChanged {
                platform: Some("Arcade".into()),
                games: Some(vec![GameDescriptor {
                    application_path: "/roms/qbert.zip".into(),
                    emulator_id: "mame-01".into(),
                }]),
            }
        );
    }

    #[test]
    fn selection_distinguishes_absent_from_empty_games() {
        let absent = parse(r#"{"event":"SelectionChanged","platform":"Arcade"}"#);
        let empty = parse(r#"{"event":"SelectionChanged","platform":"Arcade","games":[]}"#);
        assert_eq!(
            absent,
            RawEvent::SelectionChanged {
                platform: Some("Arcade".into()),
                games: None,
            }
        );
        assert_eq!(
            empty,
            RawEvent::SelectionChanged {
                platform: Some("Arcade".into()),
                games: Some(vec![]),
            }
        );
    }
}
