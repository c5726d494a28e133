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

//! Window and application lifecycle events.

use crate::event::{Event, EventState};
use std::fmt;

/// The user asked the window to close.
#[derive(Debug, Clone, Default, Event)]
#[event(kind = WindowClose, category(APPLICATION))]
pub struct WindowCloseEvent {
    state: EventState,
}

impl WindowCloseEvent {
    /// Creates the event.
    pub fn new() -> Self {
        Self::default()
    }
}

/// The window's inner area changed size. A 0x0 size means the window was minimized.
#[derive(Debug, Clone, Default, Event)]
#[event(kind = WindowResize, category(APPLICATION), custom_display)]
pub struct WindowResizeEvent {
    width: u32,
    height: u32,
    state: EventState,
}

impl WindowResizeEvent {
    /// Creates the event for the new inner size, in physical pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            state: EventState::new(),
        }
    }

    /// New width in physical pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// New height in physical pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for WindowResizeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowResizeEvent: {}, {}", self.width, self.height)
    }
}

/// The window gained focus.
#[derive(Debug, Clone, Default, Event)]
#[event(kind = WindowFocus, category(APPLICATION))]
pub struct WindowFocusEvent {
    state: EventState,
}

impl WindowFocusEvent {
    /// Creates the event.
    pub fn new() -> Self {
        Self::default()
    }
}

/// The window lost focus.
#[derive(Debug, Clone, Default, Event)]
#[event(kind = WindowLostFocus, category(APPLICATION))]
pub struct WindowLostFocusEvent {
    state: EventState,
}

impl WindowLostFocusEvent {
    /// Creates the event.
    pub fn new() -> Self {
        Self::default()
    }
}

/// The window moved; the position is its top-left corner in desktop coordinates.
#[derive(Debug, Clone, Default, Event)]
#[event(kind = WindowMoved, category(APPLICATION), custom_display)]
pub struct WindowMovedEvent {
    x: i32,
    y: i32,
    state: EventState,
}

impl WindowMovedEvent {
    /// Creates the event for the new window position.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            state: EventState::new(),
        }
    }

    /// New horizontal position.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// New vertical position.
    pub fn y(&self) -> i32 {
        self.y
    }
}

impl fmt::Display for WindowMovedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowMovedEvent: {}, {}", self.x, self.y)
    }
}

/// Raised once per frame before the update stage.
#[derive(Debug, Clone, Default, Event)]
#[event(kind = AppTick, category(APPLICATION))]
pub struct AppTickEvent {
    state: EventState,
}

impl AppTickEvent {
    /// Creates the event.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Raised once per frame after the application updated.
#[derive(Debug, Clone, Default, Event)]
#[event(kind = AppUpdate, category(APPLICATION))]
pub struct AppUpdateEvent {
    state: EventState,
}

impl AppUpdateEvent {
    /// Creates the event.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Raised once per frame after the application rendered.
#[derive(Debug, Clone, Default, Event)]
#[event(kind = AppRender, category(APPLICATION))]
pub struct AppRenderEvent {
    state: EventState,
}

impl AppRenderEvent {
    /// Creates the event.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventCategory, EventType, StaticEvent};

    #[test]
    fn lifecycle_events_report_their_tags() {
        assert_eq!(WindowCloseEvent::new().event_type(), EventType::WindowClose);
        assert_eq!(WindowFocusEvent::new().event_type(), EventType::WindowFocus);
        assert_eq!(
            WindowLostFocusEvent::new().event_type(),
            EventType::WindowLostFocus
        );
        assert_eq!(AppTickEvent::new().event_type(), EventType::AppTick);
        assert_eq!(AppUpdateEvent::new().event_type(), EventType::AppUpdate);
        assert_eq!(AppRenderEvent::new().event_type(), EventType::AppRender);
        assert_eq!(WindowResizeEvent::STATIC_TYPE, EventType::WindowResize);
        assert_eq!(WindowMovedEvent::STATIC_TYPE, EventType::WindowMoved);
    }

    #[test]
    fn lifecycle_events_are_application_only() {
        let event = WindowCloseEvent::new();
        assert_eq!(event.category_flags(), EventCategory::APPLICATION);
        assert!(event.is_in_category(EventCategory::APPLICATION));
        assert!(!event.is_in_category(EventCategory::INPUT));
        assert!(!event.is_in_category(EventCategory::MOUSE));
    }

    #[test]
    fn default_display_is_the_name() {
        assert_eq!(WindowCloseEvent::new().to_string(), "WindowClose");
        assert_eq!(AppRenderEvent::new().to_string(), "AppRender");
    }

    #[test]
    fn payload_display_does_not_change_identity() {
        let resize = WindowResizeEvent::new(1280, 720);
        assert_eq!(resize.to_string(), "WindowResizeEvent: 1280, 720");
        assert_eq!(resize.name(), "WindowResize");
        assert_eq!(resize.event_type(), EventType::WindowResize);
        assert!(resize.is_in_category(EventCategory::APPLICATION));
        assert!(!resize.is_in_category(EventCategory::KEYBOARD));

        let moved = WindowMovedEvent::new(-20, 40);
        assert_eq!(moved.to_string(), "WindowMovedEvent: -20, 40");
        assert_eq!((moved.x(), moved.y()), (-20, 40));
    }

    #[test]
    fn new_events_are_unhandled() {
        assert!(!WindowResizeEvent::new(1, 1).is_handled());
        assert!(!AppTickEvent::new().is_handled());
    }
}
