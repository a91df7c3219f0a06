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

//! # Aegis Relay
//!
//! Decouples log-record producers from sink latency. On activation the
//! relay moves every sink installed on the host's [`LoggerRegistry`]
//! (aegis-core) behind a queue: producers enqueue without blocking, and a
//! dedicated listener thread forwards each record, in enqueue order, to
//! the migrated sinks, applying each sink's own filter.
//!
//! [`LoggerRegistry`]: aegis_core::logging::LoggerRegistry

#![warn(missing_docs)]

pub mod config;
pub mod relay;
pub mod sink;

pub use self::config::RelayConfig;
pub use self::relay::LogRelay;
pub use self::sink::QueueSink;
