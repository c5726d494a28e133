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

//! The contract between the engine and the client application.

use ember_core::Event;

/// A client application driven by the [`Engine`](crate::Engine).
///
/// The engine calls these hooks from its run loop, on its own thread, one at a time.
pub trait Application: 'static {
    /// A display name used in logs.
    fn name(&self) -> &str {
        "Ember Application"
    }

    /// Called synchronously for every event the engine raises, before the engine's own
    /// handling. Mark an event handled (through an
    /// [`EventDispatcher`](ember_core::EventDispatcher)) to stop the engine from acting
    /// on it; a handled close request keeps the window open.
    fn on_event(&mut self, event: &mut dyn Event);

    /// Called once per frame for game logic.
    fn on_update(&mut self) {}

    /// Called once per frame, after the update, unless the window is minimized.
    fn on_render(&mut self) {}
}
