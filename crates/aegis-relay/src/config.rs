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

//! Configuration for the log relay.

/// Configuration for [`LogRelay`](crate::relay::LogRelay).
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Maximum number of queued records. `None` keeps the queue unbounded;
    /// with a bound, records arriving while the queue is full are discarded.
    pub queue_bound: Option<usize>,
    /// Producer-side severity gate: records more verbose than this are
    /// refused before they reach the queue.
    pub max_level: log::LevelFilter,
    /// Name given to the listener thread.
    pub thread_name: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            queue_bound: None,
            max_level: log::LevelFilter::Trace,
            thread_name: "aegis-log-relay".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RelayConfig::default();
        assert!(config.queue_bound.is_none());
        assert_eq!(config.max_level, log::LevelFilter::Trace);
        assert_eq!(config.thread_name, "aegis-log-relay");
    }
}
