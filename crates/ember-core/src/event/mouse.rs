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

//! Mouse input events.

use crate::event::{Event, EventState};
use std::fmt;

/// A mouse button, independent of the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The left mouse button.
    Left,
    /// The right mouse button.
    Right,
    /// The middle mouse button.
    Middle,
    /// The back mouse button (typically on the side).
    Back,
    /// The forward mouse button (typically on the side).
    Forward,
    /// Another mouse button, identified by a numeric code.
    Other(u16),
}

/// The cursor moved to a new position inside the window.
#[derive(Debug, Clone, Default, Event)]
#[event(kind = MouseMoved, category(INPUT, MOUSE), custom_display)]
pub struct MouseMovedEvent {
    x: f32,
    y: f32,
    state: EventState,
}

impl MouseMovedEvent {
    /// Creates the event for the new cursor position.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            state: EventState::new(),
        }
    }

    /// Horizontal cursor position.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Vertical cursor position.
    pub fn y(&self) -> f32 {
        self.y
    }
}

impl fmt::Display for MouseMovedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseMovedEvent: {}, {}", self.x, self.y)
    }
}

/// The wheel (or trackpad) scrolled.
#[derive(Debug, Clone, Default, Event)]
#[event(kind = MouseScrolled, category(INPUT, MOUSE), custom_display)]
pub struct MouseScrolledEvent {
    x_offset: f32,
    y_offset: f32,
    state: EventState,
}

impl MouseScrolledEvent {
    /// Creates the event from the scroll deltas.
    pub fn new(x_offset: f32, y_offset: f32) -> Self {
        Self {
            x_offset,
            y_offset,
            state: EventState::new(),
        }
    }

    /// Horizontal scroll delta.
    pub fn x_offset(&self) -> f32 {
        self.x_offset
    }

    /// Vertical scroll delta.
    pub fn y_offset(&self) -> f32 {
        self.y_offset
    }
}

impl fmt::Display for MouseScrolledEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseScrolledEvent: {}, {}", self.x_offset, self.y_offset)
    }
}

/// A mouse button went down.
#[derive(Debug, Clone, Event)]
#[event(kind = MouseButtonPressed, category(INPUT, MOUSE, MOUSE_BUTTON), custom_display)]
pub struct MouseButtonPressedEvent {
    button: MouseButton,
    state: EventState,
}

impl MouseButtonPressedEvent {
    /// Creates the event.
    pub fn new(button: MouseButton) -> Self {
        Self {
            button,
            state: EventState::new(),
        }
    }

    /// The button that went down.
    pub fn button(&self) -> MouseButton {
        self.button
    }
}

impl fmt::Display for MouseButtonPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseButtonPressedEvent: {:?}", self.button)
    }
}

/// A mouse button went up.
#[derive(Debug, Clone, Event)]
#[event(kind = MouseButtonReleased, category(INPUT, MOUSE, MOUSE_BUTTON), custom_display)]
pub struct MouseButtonReleasedEvent {
    button: MouseButton,
    state: EventState,
}

impl MouseButtonReleasedEvent {
    /// Creates the event.
    pub fn new(button: MouseButton) -> Self {
        Self {
            button,
            state: EventState::new(),
        }
    }

    /// The button that went up.
    pub fn button(&self) -> MouseButton {
        self.button
    }
}

impl fmt::Display for MouseButtonReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseButtonReleasedEvent: {:?}", self.button)
    }
}
