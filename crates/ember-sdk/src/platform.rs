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

//! The platform side of the run loop: where raw window and input events come from.

use ember_core::Event;
use std::collections::BTreeMap;

/// A producer of platform events (window system, input devices).
///
/// The engine asks for events one at a time and raises each one before asking for the
/// next, so a source never needs to hold more than the event it is handing out.
pub trait EventSource {
    /// Called at the start of every frame, before polling. Real backends pump the OS
    /// message loop here.
    fn begin_frame(&mut self, _frame: u64) {}

    /// Returns the next event of the current frame, or `None` once the frame's input is
    /// exhausted.
    fn poll_event(&mut self) -> Option<Box<dyn Event>>;
}

/// A headless platform that replays a fixed script of events, keyed by frame number.
///
/// Used by the sandbox and the tests in place of a real window.
#[derive(Default)]
pub struct ScriptedEventSource {
    script: BTreeMap<u64, Vec<Box<dyn Event>>>,
    current: std::vec::IntoIter<Box<dyn Event>>,
}

impl ScriptedEventSource {
    /// An empty script: every frame has no platform input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `event` for `frame`, after any event already scheduled for that frame.
    #[must_use]
    pub fn at_frame<E: Event>(mut self, frame: u64, event: E) -> Self {
        self.push(frame, Box::new(event));
        self
    }

    /// Schedules a boxed event for `frame`.
    pub fn push(&mut self, frame: u64, event: Box<dyn Event>) {
        self.script.entry(frame).or_default().push(event);
    }

    /// Number of events not yet handed out, current frame included.
    pub fn remaining(&self) -> usize {
        self.current.len() + self.script.values().map(Vec::len).sum::<usize>()
    }
}

impl EventSource for ScriptedEventSource {
    fn begin_frame(&mut self, frame: u64) {
        // Events scheduled for frames that were skipped are dropped with them.
        self.script = self.script.split_off(&frame);
        self.current = self.script.remove(&frame).unwrap_or_default().into_iter();
    }

    fn poll_event(&mut self) -> Option<Box<dyn Event>> {
        self.current.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::event::{KeyPressedEvent, WindowCloseEvent, WindowFocusEvent};
    use ember_core::EventType;

    fn drain(source: &mut ScriptedEventSource) -> Vec<EventType> {
        std::iter::from_fn(|| source.poll_event())
            .map(|event| event.event_type())
            .collect()
    }

    #[test]
    fn events_come_out_on_their_frame_in_order() {
        let mut source = ScriptedEventSource::new()
            .at_frame(1, KeyPressedEvent::new(65, 0))
            .at_frame(1, WindowFocusEvent::new())
            .at_frame(2, WindowCloseEvent::new());
        assert_eq!(source.remaining(), 3);

        source.begin_frame(0);
        assert!(drain(&mut source).is_empty());

        source.begin_frame(1);
        assert_eq!(
            drain(&mut source),
            vec![EventType::KeyPressed, EventType::WindowFocus]
        );

        source.begin_frame(2);
        assert_eq!(drain(&mut source), vec![EventType::WindowClose]);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn skipped_frames_are_discarded() {
        let mut source = ScriptedEventSource::new()
            .at_frame(0, WindowFocusEvent::new())
            .at_frame(5, WindowCloseEvent::new());

        source.begin_frame(3);
        assert!(source.poll_event().is_none());
        assert_eq!(source.remaining(), 1);
    }
}
