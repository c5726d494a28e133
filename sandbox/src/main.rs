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

use anyhow::Result;
use ember_sdk::prelude::*;

/// A small client that logs input and counts what it consumed.
#[derive(Default)]
struct SandboxApp {
    keys_consumed: u32,
    clicks: u32,
    frames: u64,
}

impl SandboxApp {
    fn on_key_pressed(&mut self, event: &KeyPressedEvent) -> bool {
        log::info!("{event}");
        if event.is_repeat() {
            // Let held keys through to whoever sits below.
            return false;
        }
        self.keys_consumed += 1;
        true
    }

    fn on_mouse_button(&mut self, event: &MouseButtonPressedEvent) -> bool {
        log::info!("{event}");
        self.clicks += 1;
        event.button() == MouseButton::Left
    }
}

impl Application for SandboxApp {
    fn name(&self) -> &str {
        "Sandbox"
    }

    fn on_event(&mut self, event: &mut dyn Event) {
        if event.is_in_category(EventCategory::INPUT) {
            log::debug!("Input: {event}");
        }

        let mut dispatcher = EventDispatcher::new(event);
        dispatcher.dispatch::<KeyPressedEvent, _>(|e| self.on_key_pressed(e));
        dispatcher.dispatch::<MouseButtonPressedEvent, _>(|e| self.on_mouse_button(e));
        dispatcher.dispatch::<WindowResizeEvent, _>(|e| {
            log::info!("{e}");
            false
        });
    }

    fn on_update(&mut self) {
        self.frames += 1;
    }
}

impl Drop for SandboxApp {
    fn drop(&mut self) {
        log::info!(
            "Sandbox closing after {} frames: {} keys consumed, {} clicks.",
            self.frames,
            self.keys_consumed,
            self.clicks
        );
    }
}

/// Stands in for a window: a short, fixed session of input followed by a close.
fn demo_session() -> ScriptedEventSource {
    ScriptedEventSource::new()
        .at_frame(0, WindowResizeEvent::new(1280, 720))
        .at_frame(2, WindowFocusEvent::new())
        .at_frame(3, KeyPressedEvent::new(87, 0))
        .at_frame(4, KeyPressedEvent::new(87, 1))
        .at_frame(5, KeyReleasedEvent::new(87))
        .at_frame(6, MouseMovedEvent::new(640.0, 360.0))
        .at_frame(7, MouseButtonPressedEvent::new(MouseButton::Left))
        .at_frame(8, MouseScrolledEvent::new(0.0, -1.0))
        .at_frame(9, MouseButtonReleasedEvent::new(MouseButton::Left))
        .at_frame(10, WindowLostFocusEvent::new())
        .at_frame(12, WindowCloseEvent::new())
}

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig {
            title: "Sandbox".to_string(),
            max_frames: Some(120),
            ..Default::default()
        },
    };

    let summary = ember_sdk::run(config, demo_session(), |_| SandboxApp::default())?;
    log::info!(
        "Sandbox finished: {} frames, {} events raised, {} handled.",
        summary.frames,
        summary.events_raised,
        summary.events_handled
    );
    Ok(())
}
