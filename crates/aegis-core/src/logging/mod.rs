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

//! The "common language" of log delivery.
//!
//! This module defines the record value that travels between producers and
//! sinks, the [`LogSink`] handler contract, and the [`LoggerRegistry`] that
//! owns the host's top-level handler chain. Higher-level crates provide the
//! machinery that moves records around; everything here is the contract they
//! share.

pub mod record;
pub mod registry;
pub mod sink;

pub use self::record::LogRecord;
pub use self::registry::LoggerRegistry;
pub use self::sink::LogSink;
