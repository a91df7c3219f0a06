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

//! The host's top-level log handler chain.

use crate::logging::record::LogRecord;
use crate::logging::sink::LogSink;
use std::sync::{Arc, Mutex};

/// The ordered collection of top-level [`LogSink`]s owned by the host.
///
/// The registry is clone-shareable: clones operate on the same underlying
/// chain, so any subsystem holding a handle observes sink changes made by
/// another. Records dispatched through the registry are offered to every
/// sink, each applying its own filter.
#[derive(Debug, Clone, Default)]
pub struct LoggerRegistry {
    sinks: Arc<Mutex<Vec<Arc<dyn LogSink>>>>,
}

impl LoggerRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self {
            sinks: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Appends a sink to the end of the chain.
    pub fn add_sink(&self, sink: Arc<dyn LogSink>) {
        self.sinks.lock().unwrap().push(sink);
    }

    /// Replaces the whole chain with a single sink, returning the sinks that
    /// were previously installed.
    ///
    /// The exchange happens under one lock acquisition, so no concurrent
    /// dispatch can observe an empty chain mid-swap.
    pub fn swap_sinks(&self, replacement: Arc<dyn LogSink>) -> Vec<Arc<dyn LogSink>> {
        std::mem::replace(&mut *self.sinks.lock().unwrap(), vec![replacement])
    }

    /// Returns the number of installed sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.lock().unwrap().len()
    }

    /// Returns `true` if no sinks are installed.
    pub fn is_empty(&self) -> bool {
        self.sinks.lock().unwrap().is_empty()
    }

    /// Offers the record to every sink in the chain, each applying its own
    /// filter.
    ///
    /// The chain is snapshotted first and sinks emit outside the lock; a sink
    /// that itself logs would otherwise deadlock the chain.
    pub fn dispatch(&self, record: &LogRecord) {
        let sinks: Vec<_> = self.sinks.lock().unwrap().clone();
        for sink in &sinks {
            sink.handle(record);
        }
    }

    /// Flushes every installed sink.
    pub fn flush_all(&self) {
        let sinks: Vec<_> = self.sinks.lock().unwrap().clone();
        for sink in &sinks {
            sink.flush();
        }
    }

    /// Installs this registry as the process-global `log` facade logger, so
    /// every `log::...!` call in the process dispatches through it.
    ///
    /// Fails if a global logger is already installed. Called once during host
    /// startup.
    pub fn install_global(self, max_level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
        log::set_max_level(max_level);
        log::set_boxed_logger(Box::new(FacadeBridge { registry: self }))
    }
}

/// Adapter installed as the global `log::Log`, turning borrowed facade
/// records into owned [`LogRecord`]s dispatched through the registry.
#[derive(Debug)]
struct FacadeBridge {
    registry: LoggerRegistry,
}

impl log::Log for FacadeBridge {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        // Per-sink filtering happens in dispatch; the facade-level max level
        // is the only global gate.
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        self.registry.dispatch(&LogRecord::from_facade(record));
    }

    fn flush(&self) {
        self.registry.flush_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CaptureSink {
        messages: Mutex<Vec<String>>,
        flushes: AtomicUsize,
        min_level: Option<log::Level>,
    }

    impl LogSink for CaptureSink {
        fn enabled(&self, record: &LogRecord) -> bool {
            match self.min_level {
                Some(min) => record.level() <= min,
                None => true,
            }
        }

        fn emit(&self, record: &LogRecord) {
            self.messages
                .lock()
                .unwrap()
                .push(record.message().to_owned());
        }

        fn flush(&self) {
            self.flushes.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn registry_starts_empty() {
        let registry = LoggerRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.sink_count(), 0);
    }

    #[test]
    fn dispatch_reaches_every_sink() {
        let registry = LoggerRegistry::new();
        let first = Arc::new(CaptureSink::default());
        let second = Arc::new(CaptureSink::default());
        registry.add_sink(first.clone());
        registry.add_sink(second.clone());

        registry.dispatch(&LogRecord::new("app", log::Level::Info, "fan out"));

        assert_eq!(first.messages.lock().unwrap().as_slice(), ["fan out"]);
        assert_eq!(second.messages.lock().unwrap().as_slice(), ["fan out"]);
    }

    #[test]
    fn dispatch_respects_per_sink_filters() {
        let registry = LoggerRegistry::new();
        let strict = Arc::new(CaptureSink {
            min_level: Some(log::Level::Error),
            ..Default::default()
        });
        let lax = Arc::new(CaptureSink::default());
        registry.add_sink(strict.clone());
        registry.add_sink(lax.clone());

        registry.dispatch(&LogRecord::new("app", log::Level::Info, "routine"));

        assert!(strict.messages.lock().unwrap().is_empty());
        assert_eq!(lax.messages.lock().unwrap().as_slice(), ["routine"]);
    }

    #[test]
    fn swap_returns_previous_chain() {
        let registry = LoggerRegistry::new();
        let first = Arc::new(CaptureSink::default());
        let second = Arc::new(CaptureSink::default());
        registry.add_sink(first);
        registry.add_sink(second);

        let replacement = Arc::new(CaptureSink::default());
        let previous = registry.swap_sinks(replacement.clone());

        assert_eq!(previous.len(), 2);
        assert_eq!(registry.sink_count(), 1);

        registry.dispatch(&LogRecord::new("app", log::Level::Info, "rerouted"));
        assert_eq!(replacement.messages.lock().unwrap().as_slice(), ["rerouted"]);
    }

    #[test]
    fn clones_share_the_chain() {
        let registry = LoggerRegistry::new();
        let handle = registry.clone();
        handle.add_sink(Arc::new(CaptureSink::default()));

        assert_eq!(registry.sink_count(), 1);
    }

    #[test]
    fn flush_all_reaches_every_sink() {
        let registry = LoggerRegistry::new();
        let sink = Arc::new(CaptureSink::default());
        registry.add_sink(sink.clone());

        registry.flush_all();
        assert_eq!(sink.flushes.load(Ordering::SeqCst), 1);
    }
}
