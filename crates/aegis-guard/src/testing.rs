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

//! Test support: captures everything this crate emits through the global
//! `log` facade.
//!
//! The facade's global logger can only be installed once per process, so a
//! single shared registry is installed lazily and each test swaps its own
//! fresh capture sink in. A gate mutex serializes tests that capture, since
//! they all observe the same global chain.

use aegis_core::logging::{LogRecord, LogSink, LoggerRegistry};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

/// Collects every record dispatched to it.
#[derive(Debug, Default)]
pub struct CaptureSink {
    records: Mutex<Vec<LogRecord>>,
}

impl CaptureSink {
    /// All captured records, in arrival order.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Only the error-level records.
    pub fn error_records(&self) -> Vec<LogRecord> {
        self.records()
            .into_iter()
            .filter(|record| record.level() == log::Level::Error)
            .collect()
    }
}

impl LogSink for CaptureSink {
    fn emit(&self, record: &LogRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}

static GATE: Mutex<()> = Mutex::new(());
static REGISTRY: OnceLock<LoggerRegistry> = OnceLock::new();

/// Routes the global `log` facade into a fresh capture sink.
///
/// Holds out concurrent capturing tests until the returned guard drops.
pub fn capture() -> (MutexGuard<'static, ()>, Arc<CaptureSink>) {
    let gate = GATE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let registry = REGISTRY.get_or_init(|| {
        let registry = LoggerRegistry::new();
        registry
            .clone()
            .install_global(log::LevelFilter::Trace)
            .expect("another global logger is already installed");
        registry
    });

    let sink = Arc::new(CaptureSink::default());
    registry.swap_sinks(sink.clone());
    (gate, sink)
}
