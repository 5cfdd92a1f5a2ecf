// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement errors.

/// The surface was asked to position itself without anything to position
/// against.
///
/// This is a caller bug, not a transient condition: supply an anchor, an
/// absolute position, or hoist the surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// No anchor rectangle, no absolute position, and the surface is not
    /// hoisted.
    #[error("menu surface has no anchor and no absolute position to place against")]
    MissingReference,
}
