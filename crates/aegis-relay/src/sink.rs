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

//! The producer-side queue handler.

use aegis_core::logging::{LogRecord, LogSink};

/// One message on the relay queue.
#[derive(Debug)]
pub(crate) enum RelayEvent {
    /// A record to forward to the migrated sinks.
    Record(LogRecord),
    /// Stop the listener after draining everything enqueued before this.
    Shutdown,
}

/// The sink installed on the host's registry while the relay is active.
///
/// Its [`handle`](LogSink::handle) path is the relay's latency guarantee:
/// a cheap synchronous severity check, then a non-blocking enqueue. It
/// performs no sink I/O and takes no lock shared with the listener thread.
#[derive(Debug)]
pub struct QueueSink {
    sender: flume::Sender<RelayEvent>,
    max_level: log::LevelFilter,
}

impl QueueSink {
    pub(crate) fn new(sender: flume::Sender<RelayEvent>, max_level: log::LevelFilter) -> Self {
        Self { sender, max_level }
    }
}

impl LogSink for QueueSink {
    fn enabled(&self, record: &LogRecord) -> bool {
        record.level() <= self.max_level
    }

    fn emit(&self, record: &LogRecord) {
        // try_send never blocks. Failure means the listener is gone (relay
        // closed) or a bounded queue is full; late records are discarded.
        let _ = self.sender.try_send(RelayEvent::Record(record.clone()));
    }
}
