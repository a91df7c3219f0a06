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

//! Explicit attribution of scheduled work to its source.

use std::fmt;

/// Identifies the module and source position a unit of work came from.
///
/// Failure reports are logged under the origin's module path so operators
/// can trace an error back to the subsystem that scheduled the work, without
/// any runtime stack inspection. Capture one with the [`origin!`](crate::origin!)
/// macro at the call site; [`Origin::unknown`] leaves attribution to the
/// reporting layer's fixed fallback name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    module_path: Option<&'static str>,
    file: Option<&'static str>,
    line: Option<u32>,
}

impl Origin {
    /// Creates an origin from a module path and source position.
    pub const fn new(module_path: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            module_path: Some(module_path),
            file: Some(file),
            line: Some(line),
        }
    }

    /// Creates an origin from a bare source position, with no module
    /// attribution.
    pub const fn at(file: &'static str, line: u32) -> Self {
        Self {
            module_path: None,
            file: Some(file),
            line: Some(line),
        }
    }

    /// An origin with no attribution information at all.
    pub const fn unknown() -> Self {
        Self {
            module_path: None,
            file: None,
            line: None,
        }
    }

    /// The module path of the originating call site, if known.
    pub const fn module_path(&self) -> Option<&'static str> {
        self.module_path
    }

    /// The `file:line` source position, if known.
    pub fn location(&self) -> Option<String> {
        match (self.file, self.line) {
            (Some(file), Some(line)) => Some(format!("{file}:{line}")),
            (Some(file), None) => Some(file.to_owned()),
            _ => None,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.module_path, self.location()) {
            (Some(module), Some(location)) => write!(f, "{module} ({location})"),
            (Some(module), None) => write!(f, "{module}"),
            (None, Some(location)) => write!(f, "{location}"),
            (None, None) => write!(f, "<unknown>"),
        }
    }
}

/// Captures an [`Origin`] naming the calling module and source line.
#[macro_export]
macro_rules! origin {
    () => {
        $crate::task::Origin::new(
            ::core::module_path!(),
            ::core::file!(),
            ::core::line!(),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_captures_the_calling_module() {
        let origin = crate::origin!();
        assert_eq!(
            origin.module_path(),
            Some("aegis_core::task::origin::tests")
        );
        assert!(origin.location().unwrap().contains("origin.rs"));
    }

    #[test]
    fn unknown_has_no_attribution() {
        let origin = Origin::unknown();
        assert!(origin.module_path().is_none());
        assert!(origin.location().is_none());
        assert_eq!(format!("{origin}"), "<unknown>");
    }

    #[test]
    fn display_formats() {
        assert_eq!(
            format!("{}", Origin::new("app::timers", "src/timers.rs", 30)),
            "app::timers (src/timers.rs:30)"
        );
        assert_eq!(format!("{}", Origin::at("src/timers.rs", 7)), "src/timers.rs:7");
    }
}
