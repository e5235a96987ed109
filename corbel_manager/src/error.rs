// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recoverable registry errors.

use thiserror::Error;

/// Why a registry operation was refused.
///
/// Every refusal is also logged at `warn` level at the call site, and the
/// operation degrades to a no-op: nothing in the registry propagates
/// failure, so callers that do not care may ignore the `Result`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum RegistryError {
    /// The trigger widget already has a popover; the prior registration is
    /// left undisturbed.
    #[error("trigger widget is already registered")]
    AlreadyRegistered,
    /// The trigger widget has no registration.
    #[error("trigger widget is not registered")]
    UnknownTrigger,
    /// The popover id no longer refers to a live popover.
    #[error("popover id is stale")]
    StalePopover,
}
