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

//! Catch-and-log wrappers for the three execution shapes.
//!
//! One factory per shape ([`catch_sync`], [`catch_callback`],
//! [`catch_async`]), each fixing the shape at construction and returning a
//! same-shape wrapper. The wrappers share one failure policy: run the
//! original, log a failure exactly once with the caller's context message,
//! absorb it, and let [`Cancelled`] pass through unmodified.

use crate::report::FailureReport;
use aegis_core::task::{Callback, Cancelled, Origin};
use std::fmt;
use std::future::Future;

/// The execution shape of a wrapped function, fixed once at wrap time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapKind {
    /// A plain synchronous call.
    Sync,
    /// A callback-tagged call: runs on the scheduler thread, never suspends.
    Callback,
    /// A suspendable call: must be awaited.
    Async,
}

impl fmt::Display for WrapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WrapKind::Sync => write!(f, "sync"),
            WrapKind::Callback => write!(f, "callback"),
            WrapKind::Async => write!(f, "async"),
        }
    }
}

/// Absorbs a finished call's outcome.
///
/// Failures are reported once and swallowed; the cancellation signal is the
/// single exclusion and passes through untouched. The context message is
/// only computed when there is a failure to report.
pub(crate) fn absorb<T>(
    kind: WrapKind,
    origin: &Origin,
    friendly: impl FnOnce() -> String,
    result: anyhow::Result<T>,
) -> Result<(), Cancelled> {
    match result {
        Ok(_) => Ok(()),
        Err(err) => match err.downcast::<Cancelled>() {
            Ok(signal) => Err(signal),
            Err(err) => {
                FailureReport::new(kind, *origin, friendly(), &err).emit();
                Ok(())
            }
        },
    }
}

/// Wraps a plain synchronous function for failure isolation.
///
/// `format_err` receives the same arguments as the call and produces the
/// human-readable description of what failed; it runs only on failure.
pub fn catch_sync<F, M>(origin: Origin, func: F, format_err: M) -> CaughtSync<F, M> {
    CaughtSync {
        origin,
        func,
        format_err,
    }
}

/// Wraps a callback-tagged function, preserving the tag: the result is
/// itself callback-safe and stays on the scheduler thread.
pub fn catch_callback<F, M>(
    origin: Origin,
    func: Callback<F>,
    format_err: M,
) -> Callback<CaughtCallback<F, M>> {
    Callback::new(CaughtCallback {
        origin,
        func: func.into_inner(),
        format_err,
    })
}

/// Wraps a suspendable function: the wrapped call is a future and must be
/// awaited, exactly like the original.
pub fn catch_async<F, M>(origin: Origin, func: F, format_err: M) -> CaughtAsync<F, M> {
    CaughtAsync {
        origin,
        func,
        format_err,
    }
}

/// A plain synchronous function under failure isolation.
///
/// Invoking it never fails and never returns the original's value; the
/// contract is side-effect execution. The only early exit is the
/// cancellation signal, which is handed back to the scheduler unchanged.
#[derive(Debug, Clone)]
pub struct CaughtSync<F, M> {
    origin: Origin,
    func: F,
    format_err: M,
}

impl<F, M> CaughtSync<F, M> {
    /// The shape fixed at wrap time.
    pub fn kind(&self) -> WrapKind {
        WrapKind::Sync
    }

    /// Runs the wrapped function with `args`.
    pub fn call<A, T>(&self, args: A) -> Result<(), Cancelled>
    where
        F: Fn(&A) -> anyhow::Result<T>,
        M: Fn(&A) -> String,
    {
        let result = (self.func)(&args);
        absorb(self.kind(), &self.origin, || (self.format_err)(&args), result)
    }
}

/// A callback-tagged function under failure isolation.
///
/// Reached through the [`Callback`] tag returned by [`catch_callback`]; the
/// call itself never suspends, matching the tag's contract.
#[derive(Debug, Clone)]
pub struct CaughtCallback<F, M> {
    origin: Origin,
    func: F,
    format_err: M,
}

impl<F, M> CaughtCallback<F, M> {
    /// The shape fixed at wrap time.
    pub fn kind(&self) -> WrapKind {
        WrapKind::Callback
    }

    /// Runs the wrapped callback with `args`.
    pub fn call<A, T>(&self, args: A) -> Result<(), Cancelled>
    where
        F: Fn(&A) -> anyhow::Result<T>,
        M: Fn(&A) -> String,
    {
        let result = (self.func)(&args);
        absorb(self.kind(), &self.origin, || (self.format_err)(&args), result)
    }
}

/// A suspendable function under failure isolation.
///
/// [`call`](CaughtAsync::call) suspends wherever the wrapped future does and
/// nowhere else; the wrapper adds no await points of its own.
#[derive(Debug, Clone)]
pub struct CaughtAsync<F, M> {
    origin: Origin,
    func: F,
    format_err: M,
}

impl<F, M> CaughtAsync<F, M> {
    /// The shape fixed at wrap time.
    pub fn kind(&self) -> WrapKind {
        WrapKind::Async
    }

    /// Runs the wrapped future with `args`.
    ///
    /// `args` are cloned so the context-message producer can still observe
    /// them if the future, which consumes its arguments, fails.
    pub async fn call<A, Fut, T>(&self, args: A) -> Result<(), Cancelled>
    where
        A: Clone,
        F: Fn(A) -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
        M: Fn(&A) -> String,
    {
        let result = (self.func)(args.clone()).await;
        absorb(self.kind(), &self.origin, || (self.format_err)(&args), result)
    }
}
