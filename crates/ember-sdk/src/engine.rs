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

//! The engine run loop: polls the platform, raises events, drives the application.

use crate::application::Application;
use crate::config::{ConfigError, EngineConfig};
use crate::platform::EventSource;
use anyhow::{ensure, Result};
use ember_core::event::{
    AppRenderEvent, AppTickEvent, AppUpdateEvent, WindowCloseEvent, WindowResizeEvent,
};
use ember_core::{Event, EventCategory, EventDispatcher, EventType};

/// Counters describing a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames executed, including the one in which the window closed.
    pub frames: u64,
    /// Events raised (platform events and per-frame application events).
    pub events_raised: u64,
    /// Events kept from the application by the configured category filter.
    pub events_filtered: u64,
    /// Events that ended up handled, by the application or by the engine.
    pub events_handled: u64,
    /// Close requests the application handled, keeping the window open.
    pub close_vetoes: u64,
}

/// Owns the application and the platform, and runs the frame loop.
///
/// Events are raised synchronously: each one is routed to the application and then to
/// the engine's own handlers before the next is polled. Nothing is buffered.
pub struct Engine<A: Application, S: EventSource> {
    app: A,
    source: S,
    config: EngineConfig,
    filter: Option<EventCategory>,
    window_size: (u32, u32),
    running: bool,
    finished: bool,
    summary: RunSummary,
}

impl<A: Application, S: EventSource> Engine<A, S> {
    /// Creates an engine. Fails if the configured event filter names an unknown category.
    pub fn new(app: A, source: S, config: EngineConfig) -> Result<Self, ConfigError> {
        let filter = config.category_filter()?;
        log::debug!(
            "Engine created for '{}' (event filter: {:?}).",
            app.name(),
            filter
        );
        Ok(Self {
            app,
            source,
            window_size: (config.width, config.height),
            config,
            filter,
            running: false,
            finished: false,
            summary: RunSummary::default(),
        })
    }

    /// Runs frames until the window closes or `max_frames` is reached.
    ///
    /// An engine runs once; calling `run` again is an error.
    pub fn run(&mut self) -> Result<RunSummary> {
        ensure!(
            !self.finished,
            "Engine for '{}' has already run",
            self.config.title
        );

        log::info!(
            "Starting '{}' ({}x{})...",
            self.config.title,
            self.window_size.0,
            self.window_size.1
        );
        self.running = true;

        while self.running {
            if let Some(max_frames) = self.config.max_frames {
                if self.summary.frames >= max_frames {
                    log::info!("Frame limit of {max_frames} reached, stopping.");
                    break;
                }
            }
            self.run_frame();
            self.summary.frames += 1;
        }

        self.running = false;
        self.finished = true;
        log::info!(
            "'{}' stopped after {} frames ({} events raised, {} handled).",
            self.config.title,
            self.summary.frames,
            self.summary.events_raised,
            self.summary.events_handled
        );
        Ok(self.summary)
    }

    /// Raises one event.
    ///
    /// Window bookkeeping always runs first, so the engine tracks the window size even
    /// when the application consumes the resize. The application then sees the event
    /// (if the category filter lets it through), and the engine's close handler runs
    /// unless the application consumed the event.
    ///
    /// Returns the event's final handled flag.
    pub fn raise(&mut self, event: &mut dyn Event) -> bool {
        self.summary.events_raised += 1;

        // Never consumes, so the application starts from an unhandled event.
        EventDispatcher::new(event)
            .dispatch::<WindowResizeEvent, _>(|e| self.on_window_resize(e));

        let forward = self
            .filter
            .map_or(true, |filter| event.is_in_category(filter));

        if forward {
            log::debug!("{event}");
            self.app.on_event(event);

            if event.is_handled() {
                self.summary.events_handled += 1;
                if event.event_type() == EventType::WindowClose {
                    self.summary.close_vetoes += 1;
                    log::info!("Close request handled by '{}', staying open.", self.app.name());
                }
                return true;
            }
        } else {
            self.summary.events_filtered += 1;
            log::trace!("{event} not forwarded to '{}'.", self.app.name());
        }

        let mut dispatcher = EventDispatcher::new(event);
        dispatcher.dispatch::<WindowCloseEvent, _>(|_| self.on_window_close());

        let handled = dispatcher.is_handled();
        if handled {
            self.summary.events_handled += 1;
        }
        handled
    }

    fn run_frame(&mut self) {
        self.source.begin_frame(self.summary.frames);
        while let Some(mut event) = self.source.poll_event() {
            self.raise(&mut *event);
        }

        if !self.running {
            return;
        }

        self.raise(&mut AppTickEvent::new());
        self.app.on_update();
        self.raise(&mut AppUpdateEvent::new());

        if !self.is_minimized() {
            self.app.on_render();
            self.raise(&mut AppRenderEvent::new());
        }
    }

    fn on_window_close(&mut self) -> bool {
        log::info!("Shutdown requested, leaving the run loop...");
        self.running = false;
        true
    }

    fn on_window_resize(&mut self, event: &WindowResizeEvent) -> bool {
        log::info!("Window resized to: {}x{}", event.width(), event.height());
        self.window_size = (event.width(), event.height());
        // Layers further down may also care about the new size.
        false
    }

    /// Returns `true` while the run loop is active.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The last known window size.
    pub fn window_size(&self) -> (u32, u32) {
        self.window_size
    }

    /// Returns `true` when the window has a zero-sized inner area.
    pub fn is_minimized(&self) -> bool {
        self.window_size.0 == 0 || self.window_size.1 == 0
    }

    /// The client application.
    pub fn application(&self) -> &A {
        &self.app
    }

    /// The configuration the engine was created with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Counters for the run so far.
    pub fn summary(&self) -> RunSummary {
        self.summary
    }
}
