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

//! Contracts of the host's execution model.
//!
//! The host scheduler runs three shapes of work: suspendable futures,
//! callback-tagged functions guaranteed never to suspend, and plain
//! synchronous calls. This module carries the types that make those shapes
//! and their control-flow signals visible to the rest of the layer: the
//! [`Callback`] capability tag, the [`Cancelled`] signal, and the [`Origin`]
//! attribution value.

pub mod callback;
pub mod cancel;
pub mod origin;

pub use self::callback::Callback;
pub use self::cancel::{is_cancellation, Cancelled};
pub use self::origin::Origin;
