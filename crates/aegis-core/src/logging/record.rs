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

//! The immutable log record value exchanged between producers and sinks.

use std::time::SystemTime;

/// A single, owned log record.
///
/// A record is created once on the producing thread and then travels as an
/// immutable value to whichever sink chain consumes it. The message text is
/// rendered at creation time, since `fmt::Arguments` cannot leave the call
/// stack; layout, timestamp formatting, and I/O stay with the consuming sink.
#[derive(Debug, Clone)]
pub struct LogRecord {
    target: String,
    level: log::Level,
    message: String,
    module_path: Option<String>,
    file: Option<String>,
    line: Option<u32>,
    timestamp: SystemTime,
}

impl LogRecord {
    /// Creates a new record with the given logger target, severity, and
    /// rendered message. The timestamp is taken at creation.
    pub fn new(target: impl Into<String>, level: log::Level, message: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            level,
            message: message.into(),
            module_path: None,
            file: None,
            line: None,
            timestamp: SystemTime::now(),
        }
    }

    /// Attaches the source location of the logging call, returning the record.
    pub fn with_location(
        mut self,
        module_path: Option<&str>,
        file: Option<&str>,
        line: Option<u32>,
    ) -> Self {
        self.module_path = module_path.map(str::to_owned);
        self.file = file.map(str::to_owned);
        self.line = line;
        self
    }

    /// Captures an owned record from a borrowed `log` facade record.
    pub fn from_facade(record: &log::Record<'_>) -> Self {
        Self::new(record.target(), record.level(), record.args().to_string()).with_location(
            record.module_path(),
            record.file(),
            record.line(),
        )
    }

    /// The name of the logger the record was emitted through.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The severity level of the record.
    pub fn level(&self) -> log::Level {
        self.level
    }

    /// The rendered message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The module path of the logging call site, if known.
    pub fn module_path(&self) -> Option<&str> {
        self.module_path.as_deref()
    }

    /// The source file of the logging call site, if known.
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// The source line of the logging call site, if known.
    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// The wall-clock time the record was created.
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }
}
