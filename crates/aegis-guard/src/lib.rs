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

//! # Aegis Guard
//!
//! Uniform "catch, log, continue" isolation for scheduled work. Wrapping a
//! function of any of the host's three execution shapes (plain synchronous,
//! callback-tagged, or suspendable) yields a same-shape function that runs
//! the original, absorbs any failure after logging it once with a
//! caller-supplied context message, and lets the scheduler's cancellation
//! signal pass through untouched. Failures inside wrapped work surface only
//! as error-level log records; they never reach the host's scheduler.

#![warn(missing_docs)]

pub mod catch;
pub mod future;
pub mod report;

pub use self::catch::{
    catch_async, catch_callback, catch_sync, CaughtAsync, CaughtCallback, CaughtSync, WrapKind,
};
pub use self::future::catch_future;
pub use self::report::FailureReport;

#[cfg(test)]
pub(crate) mod testing;
