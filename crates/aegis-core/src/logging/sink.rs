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

//! The handler contract for log record destinations.

use crate::logging::record::LogRecord;
use std::fmt::Debug;

/// A destination for log records.
///
/// Concrete sinks (console writers, files, network shippers, queues) live in
/// higher-level crates or in the surrounding application. Dispatchers call
/// [`handle`](LogSink::handle), which applies the sink's own filter before
/// emitting: a record refused by [`enabled`](LogSink::enabled) never reaches
/// [`emit`](LogSink::emit).
pub trait LogSink: Send + Sync + Debug + 'static {
    /// Returns `true` if this sink wants the record.
    /// This default implementation accepts everything.
    fn enabled(&self, record: &LogRecord) -> bool {
        let _ = record;
        true
    }

    /// Writes the record out. Called only for records accepted by `enabled`.
    fn emit(&self, record: &LogRecord);

    /// Flushes any buffered output. Default: no-op.
    fn flush(&self) {}

    /// Filters and, when accepted, emits the record.
    ///
    /// Returns whether the record was accepted.
    fn handle(&self, record: &LogRecord) -> bool {
        let accepted = self.enabled(record);
        if accepted {
            self.emit(record);
        }
        accepted
    }
}
