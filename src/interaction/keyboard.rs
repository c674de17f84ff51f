use serde::{Deserialize, Serialize};

/// Keys the timeline reacts to; everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineKey {
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
}

impl TimelineKey {
    /// Maps a DOM-style key name (`KeyboardEvent.key`/`code`) to a key.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "Left" => Some(Self::ArrowLeft),
            "ArrowRight" | "Right" => Some(Self::ArrowRight),
            "Enter" | "NumpadEnter" => Some(Self::Enter),
            "Space" | " " | "Spacebar" => Some(Self::Space),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Move the playhead by a signed offset in ms, then snap.
    StepBy(i64),
    TogglePlayback,
}

impl KeyCommand {
    #[must_use]
    pub fn for_key(key: TimelineKey, step_ms: i64) -> Self {
        let step_ms = step_ms.max(1);
        match key {
            TimelineKey::ArrowLeft => Self::StepBy(-step_ms),
            TimelineKey::ArrowRight => Self::StepBy(step_ms),
            TimelineKey::Enter | TimelineKey::Space => Self::TogglePlayback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyCommand, TimelineKey};

    #[test]
    fn arrows_step_and_enter_toggles() {
        let left = TimelineKey::from_code("ArrowLeft").expect("left");
        assert_eq!(KeyCommand::for_key(left, 5_000), KeyCommand::StepBy(-5_000));
        let space = TimelineKey::from_code(" ").expect("space");
        assert_eq!(KeyCommand::for_key(space, 5_000), KeyCommand::TogglePlayback);
        assert_eq!(TimelineKey::from_code("KeyA"), None);
    }
}
