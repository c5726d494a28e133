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

//! Static identity of events: the [`EventType`] tag and the [`EventCategory`] flags.

use crate::ember_bitflags;
use std::fmt;

/// The closed set of event kinds the engine knows about.
///
/// Every concrete event reports exactly one of these through
/// [`Event::event_type`](crate::event::Event::event_type). The value never changes
/// after the event is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum EventType {
    /// Sentinel for "no event". No concrete event reports it.
    #[default]
    None = 0,
    /// The user asked the window to close.
    WindowClose,
    /// The window's inner area changed size.
    WindowResize,
    /// The window gained keyboard focus.
    WindowFocus,
    /// The window lost keyboard focus.
    WindowLostFocus,
    /// The window moved on the desktop.
    WindowMoved,
    /// A fixed-rate application tick.
    AppTick,
    /// The application update stage ran.
    AppUpdate,
    /// The application render stage ran.
    AppRender,
    /// A keyboard key went down (or auto-repeated).
    KeyPressed,
    /// A keyboard key went up.
    KeyReleased,
    /// A mouse button went down.
    MouseButtonPressed,
    /// A mouse button went up.
    MouseButtonReleased,
    /// The cursor moved.
    MouseMoved,
    /// The mouse wheel or trackpad scrolled.
    MouseScrolled,
}

impl EventType {
    /// Every event type, in declaration order, `None` included.
    pub const ALL: [EventType; 15] = [
        EventType::None,
        EventType::WindowClose,
        EventType::WindowResize,
        EventType::WindowFocus,
        EventType::WindowLostFocus,
        EventType::WindowMoved,
        EventType::AppTick,
        EventType::AppUpdate,
        EventType::AppRender,
        EventType::KeyPressed,
        EventType::KeyReleased,
        EventType::MouseButtonPressed,
        EventType::MouseButtonReleased,
        EventType::MouseMoved,
        EventType::MouseScrolled,
    ];

    /// The variant's declared name, e.g. `"WindowResize"`.
    pub const fn name(self) -> &'static str {
        match self {
            EventType::None => "None",
            EventType::WindowClose => "WindowClose",
            EventType::WindowResize => "WindowResize",
            EventType::WindowFocus => "WindowFocus",
            EventType::WindowLostFocus => "WindowLostFocus",
            EventType::WindowMoved => "WindowMoved",
            EventType::AppTick => "AppTick",
            EventType::AppUpdate => "AppUpdate",
            EventType::AppRender => "AppRender",
            EventType::KeyPressed => "KeyPressed",
            EventType::KeyReleased => "KeyReleased",
            EventType::MouseButtonPressed => "MouseButtonPressed",
            EventType::MouseButtonReleased => "MouseButtonReleased",
            EventType::MouseMoved => "MouseMoved",
            EventType::MouseScrolled => "MouseScrolled",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

ember_bitflags! {
    /// Overlapping classifications an event can belong to.
    ///
    /// A single event may sit in several categories at once: a cursor move is both
    /// [`INPUT`](Self::INPUT) and [`MOUSE`](Self::MOUSE). Layers use these flags to
    /// filter what they want to see before bothering with a typed dispatch.
    pub struct EventCategory: u32 {
        /// Window and application lifecycle events.
        const APPLICATION = 1 << 0;
        /// Anything produced by an input device.
        const INPUT = 1 << 1;
        /// Keyboard input.
        const KEYBOARD = 1 << 2;
        /// Mouse input (motion, wheel and buttons).
        const MOUSE = 1 << 3;
        /// Mouse button input.
        const MOUSE_BUTTON = 1 << 4;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_variants() {
        assert_eq!(EventType::WindowResize.name(), "WindowResize");
        assert_eq!(EventType::MouseButtonReleased.to_string(), "MouseButtonReleased");
        assert_eq!(EventType::default(), EventType::None);
        for event_type in EventType::ALL {
            assert_eq!(format!("{event_type:?}"), event_type.name());
        }
    }

    #[test]
    fn tags_are_distinct_and_ordered() {
        for (index, event_type) in EventType::ALL.iter().enumerate() {
            assert_eq!(*event_type as u8 as usize, index);
        }
    }

    #[test]
    fn category_bits_follow_layout() {
        assert_eq!(EventCategory::APPLICATION.bits(), 1);
        assert_eq!(EventCategory::INPUT.bits(), 2);
        assert_eq!(EventCategory::KEYBOARD.bits(), 4);
        assert_eq!(EventCategory::MOUSE.bits(), 8);
        assert_eq!(EventCategory::MOUSE_BUTTON.bits(), 16);
    }

    #[test]
    fn category_lookup_by_name() {
        assert_eq!(
            EventCategory::from_name("MouseButton"),
            Some(EventCategory::MOUSE_BUTTON)
        );
        assert_eq!(
            EventCategory::from_name("application"),
            Some(EventCategory::APPLICATION)
        );
        assert_eq!(EventCategory::from_name("Gamepad"), None);
    }

    #[test]
    fn category_debug_lists_flags() {
        let flags = EventCategory::INPUT | EventCategory::MOUSE;
        assert_eq!(format!("{flags:?}"), "EventCategory { INPUT | MOUSE }");
    }
}
