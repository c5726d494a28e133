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

//! The engine's event taxonomy and its synchronous, type-safe dispatch.
//!
//! An event is created by the layer that observed it (window, input, run loop),
//! routed on the spot, and dropped. Nothing is buffered: by the time the raiser
//! regains control every interested handler has run, and the event's handled flag
//! tells the raiser whether to keep propagating it.
//!
//! * [`EventType`] and [`EventCategory`] give every event a fixed identity.
//! * [`Event`] is the capability set shared by all events; `#[derive(Event)]`
//!   implements it from a `#[event(kind = .., category(..))]` attribute.
//! * [`EventDispatcher`] narrows a `&mut dyn Event` to a concrete type behind a tag
//!   check and hands it to a typed handler.

mod application;
mod dispatcher;
mod key;
mod mouse;
mod traits;
mod types;

pub use self::application::{
    AppRenderEvent, AppTickEvent, AppUpdateEvent, WindowCloseEvent, WindowFocusEvent,
    WindowLostFocusEvent, WindowMovedEvent, WindowResizeEvent,
};
pub use self::dispatcher::EventDispatcher;
pub use self::key::{KeyCode, KeyPressedEvent, KeyReleasedEvent};
pub use self::mouse::{
    MouseButton, MouseButtonPressedEvent, MouseButtonReleasedEvent, MouseMovedEvent,
    MouseScrolledEvent,
};
pub use self::traits::{Event, EventState, StaticEvent};
pub use self::types::{EventCategory, EventType};

// Names the derive-generated code needs but users should not touch.
#[doc(hidden)]
pub mod __private {
    pub use super::traits::DispatchToken;
}

/// Derives [`Event`] and [`StaticEvent`] for a struct holding an [`EventState`].
pub use ember_macros::Event;
