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

//! Failure isolation for futures that already exist.

use crate::catch::WrapKind;
use crate::report::FailureReport;
use aegis_core::task::{Cancelled, Origin};
use std::future::Future;
use std::panic::Location;

/// Wraps a live, not-yet-awaited future so a failure is logged and absorbed
/// instead of surfacing to whoever awaits it.
///
/// The wrap site is captured eagerly: a scheduled future often fails long
/// after, and far away from, the place that created it, so the report
/// names where it was scheduled. Success yields `Some` of the original
/// output, an absorbed failure yields `None`, and the cancellation signal
/// propagates unmodified.
#[track_caller]
pub fn catch_future<Fut, T>(
    name: impl Into<String>,
    target: Fut,
) -> impl Future<Output = Result<Option<T>, Cancelled>>
where
    Fut: Future<Output = anyhow::Result<T>>,
{
    let caller = Location::caller();
    let origin = Origin::at(caller.file(), caller.line());
    let name = name.into();

    async move {
        match target.await {
            Ok(value) => Ok(Some(value)),
            Err(err) => match err.downcast::<Cancelled>() {
                Ok(signal) => Err(signal),
                Err(err) => {
                    let friendly = format!(
                        "Task '{name}' failed; scheduled at {file}:{line}",
                        file = caller.file(),
                        line = caller.line(),
                    );
                    FailureReport::new(WrapKind::Async, origin, friendly, &err).emit();
                    Ok(None)
                }
            },
        }
    }
}
