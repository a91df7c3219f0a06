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

// Aegis sandbox
// Wires the relay and the failure wrappers into a miniature host: console
// logging happens on the relay's listener thread, and deliberately failing
// tasks show up as error records instead of crashing anything.

use aegis_core::logging::{LogRecord, LogSink, LoggerRegistry};
use aegis_core::task::Callback;
use aegis_guard::{catch_async, catch_callback, catch_future, catch_sync};
use aegis_relay::LogRelay;
use anyhow::{anyhow, Result};
use std::sync::Arc;

/// Routes relayed records into an `env_logger` instance, which does the
/// actual formatting and console I/O on the listener thread.
#[derive(Debug)]
struct ConsoleSink {
    logger: env_logger::Logger,
}

impl LogSink for ConsoleSink {
    fn enabled(&self, record: &LogRecord) -> bool {
        log::Log::enabled(
            &self.logger,
            &log::Metadata::builder()
                .level(record.level())
                .target(record.target())
                .build(),
        )
    }

    fn emit(&self, record: &LogRecord) {
        log::Log::log(
            &self.logger,
            &log::Record::builder()
                .args(format_args!("{}", record.message()))
                .level(record.level())
                .target(record.target())
                .module_path(record.module_path())
                .file(record.file())
                .line(record.line())
                .build(),
        );
    }

    fn flush(&self) {
        log::Log::flush(&self.logger);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let registry = LoggerRegistry::new();
    let console = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .build();
    registry.add_sink(Arc::new(ConsoleSink { logger: console }));
    registry.clone().install_global(log::LevelFilter::Trace)?;

    let mut relay = LogRelay::activate(&registry);
    log::info!("host started; log delivery is now off-thread");

    // A plain synchronous job that fails: logged, absorbed, host continues.
    let prune = catch_sync(
        aegis_core::origin!(),
        |keep: &u32| -> Result<()> { Err(anyhow!("history store is locked (keep={keep})")) },
        |keep: &u32| format!("history prune (keep={keep} days) failed"),
    );
    prune.call(30)?;

    // A callback-tagged state update stays callback-tagged after wrapping.
    let toggle = catch_callback(
        aegis_core::origin!(),
        Callback::new(|on: &bool| -> Result<()> {
            log::info!("porch light set to {on}");
            Ok(())
        }),
        |on: &bool| format!("porch light toggle ({on}) failed"),
    );
    toggle.call(true)?;

    // A suspendable job, awaited exactly like the original would be.
    let refresh = catch_async(
        aegis_core::origin!(),
        |source: String| async move {
            if source == "cloud" {
                Err(anyhow!("cloud API returned 503"))
            } else {
                Ok(())
            }
        },
        |source: &String| format!("forecast refresh from {source} failed"),
    );
    refresh.call("cloud".to_string()).await?;

    // An ad-hoc future wrapped after creation keeps its output on success.
    let warmup = catch_future("cache-warmup", async { Ok::<_, anyhow::Error>(128usize) });
    if let Some(entries) = warmup.await? {
        log::info!("cache warmed with {entries} entries");
    }

    log::info!("demo complete; draining the relay");
    relay.close();
    Ok(())
}
