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

//! The host scheduler's cooperative-cancellation signal.

use std::fmt;

/// The cooperative-cancellation signal of the host scheduler.
///
/// `Cancelled` is control flow, not a failure: layers that absorb errors
/// must pass it through unmodified so the scheduler's cancellation protocol
/// keeps working. It travels inside an `anyhow::Error` and is recognized by
/// downcast.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cancelled {
    reason: Option<String>,
}

impl Cancelled {
    /// Creates a cancellation signal with no stated reason.
    pub fn new() -> Self {
        Self { reason: None }
    }

    /// Creates a cancellation signal carrying a reason for diagnostics.
    pub fn with_reason(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }

    /// The stated reason, if any.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "task cancelled: {reason}"),
            None => write!(f, "task cancelled"),
        }
    }
}

impl std::error::Error for Cancelled {}

/// Returns `true` if the error carries the cooperative-cancellation signal.
pub fn is_cancellation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<Cancelled>().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_display() {
        assert_eq!(format!("{}", Cancelled::new()), "task cancelled");
        assert_eq!(
            format!("{}", Cancelled::with_reason("host shutdown")),
            "task cancelled: host shutdown"
        );
    }

    #[test]
    fn cancellation_is_recognized_through_anyhow() {
        let err = anyhow::Error::new(Cancelled::new());
        assert!(is_cancellation(&err));

        let other = anyhow::anyhow!("disk full");
        assert!(!is_cancellation(&other));
    }

    #[test]
    fn cancellation_downcast_recovers_the_signal() {
        let err = anyhow::Error::new(Cancelled::with_reason("timeout"));
        let signal = err.downcast::<Cancelled>().expect("should downcast");
        assert_eq!(signal.reason(), Some("timeout"));
    }
}
