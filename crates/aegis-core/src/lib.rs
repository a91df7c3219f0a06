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

//! # Aegis Core
//!
//! Foundational crate containing traits, core types, and interface contracts
//! shared by the log delivery and fault-isolation layers: the owned log
//! record, the sink and registry contracts, and the host execution-model
//! types (callback capability tag, cancellation signal, origin attribution).

#![warn(missing_docs)]

pub mod logging;
pub mod task;

pub use logging::{LogRecord, LogSink, LoggerRegistry};
pub use task::{Callback, Cancelled, Origin};
