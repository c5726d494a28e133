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

//! The public-facing SDK for the Ember engine.
//!
//! A client defines an [`Application`], picks an [`EventSource`] for its platform and
//! hands both to [`run`], which sets up logging, builds the [`Engine`] and drives the
//! frame loop until the window closes.

use anyhow::Result;

mod application;
mod config;
mod engine;
mod platform;

pub use application::Application;
pub use config::{ConfigError, EngineConfig};
pub use engine::{Engine, RunSummary};
pub use platform::{EventSource, ScriptedEventSource};

/// Re-exports of everything a client usually needs.
pub mod prelude {
    pub use crate::{Application, EngineConfig, EventSource, ScriptedEventSource};
    pub use ember_core::event::*;
}

/// Initializes the global logger from `RUST_LOG`, falling back to `default_filter`.
///
/// Returns `false` if a logger was already installed, in which case nothing changes.
pub fn init_logging(default_filter: &str) -> bool {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or(default_filter))
        .try_init()
        .is_ok()
}

/// The engine entry point.
///
/// Initializes logging, builds the client application with `create_application`, and
/// runs it against `source` until the window closes (or `max_frames` is reached).
pub fn run<A, S, F>(config: EngineConfig, source: S, create_application: F) -> Result<RunSummary>
where
    A: Application,
    S: EventSource,
    F: FnOnce(&EngineConfig) -> A,
{
    if init_logging(&config.log_filter) {
        log::warn!("Initialised Log!");
    }

    let app = create_application(&config);
    log::info!("Ember SDK: starting '{}'...", app.name());

    let mut engine = Engine::new(app, source, config)?;
    engine.run()
}
