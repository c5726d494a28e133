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

//! The capability set shared by every event.

use super::types::{EventCategory, EventType};
use std::any::Any;
use std::fmt;

/// The mutable part of an event: whether some handler consumed it.
///
/// Every concrete event embeds one of these. It can be read by anyone, but only the
/// [`EventDispatcher`](super::EventDispatcher) writes it, as the result of a handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventState {
    handled: bool,
}

impl EventState {
    /// A fresh, unhandled state.
    pub const fn new() -> Self {
        Self { handled: false }
    }

    /// Returns `true` if the last matching handler reported the event as consumed.
    pub const fn is_handled(&self) -> bool {
        self.handled
    }

    pub(crate) fn set_handled(&mut self, handled: bool) {
        self.handled = handled;
    }
}

/// Proof that a write to an [`EventState`] comes from this crate.
///
/// Derived `Event` impls name it in their `state_mut` signature; only the dispatcher
/// can create one.
#[doc(hidden)]
pub struct DispatchToken(());

impl DispatchToken {
    pub(crate) const fn new() -> Self {
        Self(())
    }
}

/// Something that happened, as seen by the engine.
///
/// Implement it with `#[derive(Event)]` rather than by hand: the derive ties the
/// reported [`EventType`] to the concrete Rust type, which is what makes
/// [`EventDispatcher::dispatch`](super::EventDispatcher::dispatch) sound.
///
/// `ToString` comes from the [`Display`](fmt::Display) supertrait. The derived
/// `Display` prints [`name`](Event::name); events carrying a payload usually opt out
/// with `#[event(custom_display)]` and print it.
pub trait Event: fmt::Display + Any {
    /// The event's fixed type tag.
    fn event_type(&self) -> EventType;

    /// Debug-facing name, equal to the type tag's name.
    fn name(&self) -> &'static str;

    /// The categories this event belongs to.
    fn category_flags(&self) -> EventCategory;

    /// Read access to the handled state.
    fn state(&self) -> &EventState;

    /// Write access for the dispatcher.
    ///
    /// The token can only be built inside this crate, so other crates cannot call this
    /// and the handled flag stays under the dispatcher's control:
    ///
    /// ```compile_fail
    /// use ember_core::event::{Event, EventState, KeyPressedEvent};
    ///
    /// let mut event = KeyPressedEvent::new(65, 0);
    /// *event.state_mut() = EventState::new();
    /// ```
    ///
    /// ```compile_fail
    /// use ember_core::event::__private::DispatchToken;
    /// use ember_core::event::{Event, EventState, KeyPressedEvent};
    ///
    /// let mut event = KeyPressedEvent::new(65, 0);
    /// *event.state_mut(&DispatchToken(())) = EventState::new();
    /// ```
    #[doc(hidden)]
    fn state_mut(&mut self, token: &DispatchToken) -> &mut EventState;

    /// Type-erased view used for the checked narrowing during dispatch.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Returns `true` if the event shares at least one flag with `category`.
    fn is_in_category(&self, category: EventCategory) -> bool {
        self.category_flags().intersects(category)
    }

    /// Returns `true` if a handler consumed the event.
    fn is_handled(&self) -> bool {
        self.state().is_handled()
    }
}

/// Compile-time identity of a concrete event type.
///
/// This is what a typed dispatch compares the runtime tag against.
pub trait StaticEvent: Event + Sized {
    /// The tag every instance of this type reports.
    const STATIC_TYPE: EventType;

    /// The categories every instance of this type belongs to.
    const CATEGORY: EventCategory;
}
