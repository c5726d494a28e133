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

//! Type-guarded, synchronous delivery of one event to typed handlers.

use super::traits::{DispatchToken, Event, StaticEvent};
use std::any;

/// Routes a single type-erased event to handlers written against concrete event types.
///
/// A dispatcher borrows the event for as long as it lives and owns nothing else, so it
/// can never outlive the event it routes. The usual pattern is one dispatcher per
/// `on_event` call and one [`dispatch`](Self::dispatch) per event type of interest:
///
/// ```
/// use ember_core::event::{Event, EventDispatcher, KeyPressedEvent, MouseMovedEvent};
///
/// let mut event = KeyPressedEvent::new(65, 0);
/// let mut dispatcher = EventDispatcher::new(&mut event);
///
/// assert!(!dispatcher.dispatch::<MouseMovedEvent, _>(|_| true));
/// assert!(dispatcher.dispatch::<KeyPressedEvent, _>(|key| key.key_code() == 65));
/// assert!(event.is_handled());
/// ```
///
/// Delivery is immediate: nothing is queued, and the handler runs on the caller's stack
/// before `dispatch` returns.
pub struct EventDispatcher<'a> {
    event: &'a mut dyn Event,
}

impl<'a> EventDispatcher<'a> {
    /// Binds a dispatcher to `event`.
    pub fn new(event: &'a mut dyn Event) -> Self {
        Self { event }
    }

    /// Runs `handler` if the bound event is a `T`.
    ///
    /// When the runtime tag differs from `T::STATIC_TYPE` nothing happens and `false` is
    /// returned; the handled flag is left alone. On a match, `handler` gets the event as
    /// `&mut T`, its result becomes the event's handled flag, and `true` is returned.
    ///
    /// The return value says whether a delivery happened, not whether the event was
    /// consumed: a handler may look at the event and return `false`. Dispatching the same
    /// type twice runs the handler twice and keeps the second result.
    pub fn dispatch<T, F>(&mut self, handler: F) -> bool
    where
        T: StaticEvent,
        F: FnOnce(&mut T) -> bool,
    {
        let event_type = self.event.event_type();
        if event_type != T::STATIC_TYPE {
            return false;
        }

        let name = self.event.name();
        let Some(typed) = self.event.as_any_mut().downcast_mut::<T>() else {
            // Two types claim the same tag. Never reinterpret, treat it as "not for me".
            log::error!(
                "Event '{name}' reports type {event_type} but is not a {}; dispatch skipped.",
                any::type_name::<T>()
            );
            return false;
        };

        let handled = handler(typed);
        log::trace!("Dispatched '{name}' (handled: {handled}).");
        self.event
            .state_mut(&DispatchToken::new())
            .set_handled(handled);
        true
    }

    /// The bound event, for category checks or logging between dispatches.
    pub fn event(&self) -> &dyn Event {
        &*self.event
    }

    /// Returns the bound event's handled flag.
    pub fn is_handled(&self) -> bool {
        self.event.is_handled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{
        AppTickEvent, EventCategory, KeyPressedEvent, MouseMovedEvent, MouseScrolledEvent,
        WindowResizeEvent,
    };
    use std::cell::Cell;

    #[test]
    fn matching_type_runs_handler_and_records_result() {
        let mut event = KeyPressedEvent::new(32, 0);
        let calls = Cell::new(0);

        let dispatched = EventDispatcher::new(&mut event).dispatch::<KeyPressedEvent, _>(|e| {
            calls.set(calls.get() + 1);
            assert_eq!(e.key_code(), 32);
            true
        });

        assert!(dispatched);
        assert_eq!(calls.get(), 1);
        assert!(event.is_handled());
    }

    #[test]
    fn mismatched_type_is_a_no_op() {
        let mut event = KeyPressedEvent::new(32, 0);
        let called = Cell::new(false);

        let mut dispatcher = EventDispatcher::new(&mut event);
        let dispatched = dispatcher.dispatch::<MouseMovedEvent, _>(|_| {
            called.set(true);
            true
        });

        assert!(!dispatched);
        assert!(!called.get());
        assert!(!dispatcher.is_handled());
    }

    #[test]
    fn handler_may_decline_without_failing_dispatch() {
        let mut event = AppTickEvent::new();
        let mut dispatcher = EventDispatcher::new(&mut event);

        assert!(dispatcher.dispatch::<AppTickEvent, _>(|_| false));
        assert!(!dispatcher.is_handled());
    }

    #[test]
    fn repeated_dispatch_overwrites_handled() {
        let mut event = MouseScrolledEvent::new(0.0, 1.0);
        let calls = Cell::new(0);
        let mut dispatcher = EventDispatcher::new(&mut event);

        assert!(dispatcher.dispatch::<MouseScrolledEvent, _>(|_| {
            calls.set(calls.get() + 1);
            true
        }));
        assert!(dispatcher.is_handled());

        assert!(dispatcher.dispatch::<MouseScrolledEvent, _>(|_| {
            calls.set(calls.get() + 1);
            false
        }));
        assert_eq!(calls.get(), 2);
        assert!(!dispatcher.is_handled());
    }

    #[test]
    fn handler_can_read_payload_through_typed_reference() {
        let mut event = WindowResizeEvent::new(1280, 720);
        let mut seen = None;

        EventDispatcher::new(&mut event).dispatch::<WindowResizeEvent, _>(|e| {
            seen = Some((e.width(), e.height()));
            false
        });

        assert_eq!(seen, Some((1280, 720)));
    }

    #[test]
    fn dispatcher_exposes_bound_event() {
        let mut event = MouseMovedEvent::new(4.0, 2.0);
        let dispatcher = EventDispatcher::new(&mut event);

        assert_eq!(dispatcher.event().name(), "MouseMoved");
        assert!(dispatcher.event().is_in_category(EventCategory::MOUSE));
    }
}
