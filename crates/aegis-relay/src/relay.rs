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

//! The queue-backed log delivery service.

use crate::config::RelayConfig;
use crate::sink::{QueueSink, RelayEvent};
use aegis_core::logging::{LogSink, LoggerRegistry};
use std::sync::Arc;
use std::thread;

/// Moves log delivery off the producing threads and onto a dedicated
/// listener thread.
///
/// On activation, every sink installed on the host's [`LoggerRegistry`] is
/// migrated into the relay's sink set and replaced by a single [`QueueSink`].
/// From then on, logging anywhere in the process enqueues; the listener
/// pulls records off the queue in order and forwards each one to every
/// migrated sink, applying the same per-sink filters the original chain
/// would have.
///
/// The relay is `Inactive` until [`activate`](LogRelay::activate), `Active`
/// until [`close`](LogRelay::close), then `Closed` for good; there is no
/// way back to `Active`. Activating twice on the same registry installs two
/// queue sinks and is a caller error.
#[derive(Debug)]
pub struct LogRelay {
    sender: flume::Sender<RelayEvent>,
    listener: Option<thread::JoinHandle<()>>,
}

impl LogRelay {
    /// Activates the relay on the given registry with default configuration.
    pub fn activate(registry: &LoggerRegistry) -> Self {
        Self::activate_with(RelayConfig::default(), registry)
    }

    /// Activates the relay with the given configuration: migrates the
    /// registry's sinks behind the queue and starts the listener thread.
    pub fn activate_with(config: RelayConfig, registry: &LoggerRegistry) -> Self {
        let (sender, receiver) = match config.queue_bound {
            Some(bound) => flume::bounded(bound),
            None => flume::unbounded(),
        };

        let queue_sink = Arc::new(QueueSink::new(sender.clone(), config.max_level));
        let sinks = registry.swap_sinks(queue_sink);
        let migrated = sinks.len();

        let listener = thread::Builder::new()
            .name(config.thread_name.clone())
            .spawn(move || listen(receiver, sinks))
            .expect("failed to spawn the relay listener thread");

        log::debug!("Log relay active; {migrated} sink(s) migrated behind the queue.");

        Self {
            sender,
            listener: Some(listener),
        }
    }

    /// Returns `true` while the listener thread is running.
    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }

    /// Stops the listener: everything enqueued before the call is still
    /// delivered and the sinks are flushed before the thread exits.
    ///
    /// Closing an already-closed relay is a no-op.
    pub fn close(&mut self) {
        if let Some(listener) = self.listener.take() {
            let _ = self.sender.send(RelayEvent::Shutdown);
            let _ = listener.join();
        }
    }
}

impl Drop for LogRelay {
    fn drop(&mut self) {
        self.close();
    }
}

/// Listener loop: forwards records in queue order until the shutdown
/// sentinel, then flushes every sink.
fn listen(receiver: flume::Receiver<RelayEvent>, sinks: Vec<Arc<dyn LogSink>>) {
    for event in receiver.iter() {
        match event {
            RelayEvent::Record(record) => {
                for sink in &sinks {
                    sink.handle(&record);
                }
            }
            RelayEvent::Shutdown => break,
        }
    }
    for sink in &sinks {
        sink.flush();
    }
}
