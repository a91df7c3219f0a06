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

//! Full-path test: a wrapped failure travels through the global `log`
//! facade, over the relay queue, and into a migrated sink.

use aegis_core::logging::{LogRecord, LogSink, LoggerRegistry};
use aegis_guard::catch_sync;
use aegis_relay::LogRelay;
use anyhow::anyhow;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct CaptureSink {
    records: Mutex<Vec<LogRecord>>,
}

impl CaptureSink {
    fn error_records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|record| record.level() == log::Level::Error)
            .cloned()
            .collect()
    }
}

impl LogSink for CaptureSink {
    fn emit(&self, record: &LogRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}

#[test]
fn wrapped_failure_reaches_a_migrated_sink() {
    let registry = LoggerRegistry::new();
    let sink = Arc::new(CaptureSink::default());
    registry.add_sink(sink.clone());

    registry
        .clone()
        .install_global(log::LevelFilter::Trace)
        .expect("no other logger installed in this test process");

    let mut relay = LogRelay::activate(&registry);

    // Only the queue sink remains on the registry; the capture sink now
    // receives records from the relay's listener thread.
    assert_eq!(registry.sink_count(), 1);

    let wrapped = catch_sync(
        aegis_core::origin!(),
        |zone: &&str| -> anyhow::Result<()> { Err(anyhow!("no heater in {zone}")) },
        |zone: &&str| format!("climate update for {zone} failed"),
    );
    assert!(wrapped.call("attic").is_ok());

    // Draining on close makes delivery deterministic.
    relay.close();

    let errors = sink.error_records();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].target(), "end_to_end");
    assert_eq!(
        errors[0].message(),
        "climate update for attic failed\nno heater in attic"
    );
}
