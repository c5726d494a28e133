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

//! # Ember Core
//!
//! Event notification for the Ember engine: a closed taxonomy of window,
//! application and input events, category filtering, and typed dispatch.

#![warn(missing_docs)]

// Lets `#[derive(Event)]` emit `::ember_core` paths that also resolve inside this crate.
extern crate self as ember_core;

pub mod event;
pub mod utils;

pub use event::{Event, EventCategory, EventDispatcher, EventState, EventType, StaticEvent};
