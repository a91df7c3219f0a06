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

//! Failure context assembly and emission.

use crate::catch::WrapKind;
use aegis_core::task::Origin;

/// Everything known about an absorbed failure, assembled at failure time.
///
/// A report is emitted as exactly one error-level record: the friendly
/// context message on the first line and the error trace (the error plus
/// its `source()` chain) below it. The record goes out under the origin's
/// module path, so the failure is attributed to the subsystem that
/// scheduled the work rather than to this crate.
#[derive(Debug, Clone)]
pub struct FailureReport {
    kind: WrapKind,
    origin: Origin,
    friendly: String,
    trace: String,
}

impl FailureReport {
    /// Builds a report from the failure's context message and error.
    pub fn new(
        kind: WrapKind,
        origin: Origin,
        friendly: impl Into<String>,
        err: &anyhow::Error,
    ) -> Self {
        Self {
            kind,
            origin,
            friendly: friendly.into(),
            trace: render_chain(err),
        }
    }

    /// The execution shape the failure was caught in.
    pub fn kind(&self) -> WrapKind {
        self.kind
    }

    /// Where the wrapped work was scheduled from.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// The caller-supplied context message.
    pub fn friendly(&self) -> &str {
        &self.friendly
    }

    /// The rendered error trace, one cause per line.
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// Logs the report as a single error-level record under the origin's
    /// module path, falling back to this module's own path when the origin
    /// carries no module attribution.
    pub fn emit(&self) {
        let target = self.origin.module_path().unwrap_or(module_path!());
        log::error!(target: target, "{}\n{}", self.friendly, self.trace);
    }
}

/// Renders an error and its `source()` chain, one cause per line.
fn render_chain(err: &anyhow::Error) -> String {
    let mut rendered = err.to_string();
    for cause in err.chain().skip(1) {
        rendered.push_str("\ncaused by: ");
        rendered.push_str(&cause.to_string());
    }
    rendered
}
