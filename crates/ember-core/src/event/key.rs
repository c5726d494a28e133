// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Keyboard input events.

use crate::event::{Event, EventState};
use std::fmt;

/// Platform-independent key code, as reported by the window layer.
pub type KeyCode = u32;

/// A key went down. Auto-repeats of a held key arrive as further presses with a
/// growing repeat count.
#[derive(Debug, Clone, Default, Event)]
#[event(kind = KeyPressed, category(INPUT, KEYBOARD), custom_display)]
pub struct KeyPressedEvent {
    key_code: KeyCode,
    repeat_count: u32,
    state: EventState,
}

impl KeyPressedEvent {
    /// Creates the event. `repeat_count` is 0 for the initial press.
    pub fn new(key_code: KeyCode, repeat_count: u32) -> Self {
        Self {
            key_code,
            repeat_count,
            state: EventState::new(),
        }
    }

    /// The key that went down.
    pub fn key_code(&self) -> KeyCode {
        self.key_code
    }

    /// How many auto-repeats preceded this press.
    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    /// Returns `true` for auto-repeat presses.
    pub fn is_repeat(&self) -> bool {
        self.repeat_count > 0
    }
}

impl fmt::Display for KeyPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KeyPressedEvent: {} ({} repeats)",
            self.key_code, self.repeat_count
        )
    }
}

/// A key went up.
#[derive(Debug, Clone, Default, Event)]
#[event(kind = KeyReleased, category(INPUT, KEYBOARD), custom_display)]
pub struct KeyReleasedEvent {
    key_code: KeyCode,
    state: EventState,
}

impl KeyReleasedEvent {
    /// Creates the event.
    pub fn new(key_code: KeyCode) -> Self {
        Self {
            key_code,
            state: EventState::new(),
        }
    }

    /// The key that went up.
    pub fn key_code(&self) -> KeyCode {
        self.key_code
    }
}

impl fmt::Display for KeyReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyReleasedEvent: {}", self.key_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventCategory, EventType, StaticEvent};

    #[test]
    fn key_events_are_input_and_keyboard() {
        let expected = EventCategory::INPUT | EventCategory::KEYBOARD;
        assert_eq!(KeyPressedEvent::CATEGORY, expected);
        assert_eq!(KeyReleasedEvent::new(1).category_flags(), expected);

        let pressed = KeyPressedEvent::new(65, 0);
        assert!(pressed.is_in_category(EventCategory::INPUT));
        assert!(pressed.is_in_category(EventCategory::KEYBOARD));
        assert!(!pressed.is_in_category(EventCategory::MOUSE));
        assert!(!pressed.is_in_category(EventCategory::APPLICATION));
    }

    #[test]
    fn key_payloads() {
        let pressed = KeyPressedEvent::new(65, 2);
        assert_eq!(pressed.key_code(), 65);
        assert_eq!(pressed.repeat_count(), 2);
        assert!(pressed.is_repeat());
        assert!(!KeyPressedEvent::new(65, 0).is_repeat());
        assert_eq!(pressed.to_string(), "KeyPressedEvent: 65 (2 repeats)");

        let released = KeyReleasedEvent::new(65);
        assert_eq!(released.to_string(), "KeyReleasedEvent: 65");
        assert_eq!(released.name(), "KeyReleased");
        assert_eq!(released.event_type(), EventType::KeyReleased);
    }
}
