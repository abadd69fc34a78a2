// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised when the provider or its consumers are wired up incorrectly.

/// Failure to find a required ambient value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InteractionError {
    /// [`use_interaction`](crate::provider::use_interaction) was called in a
    /// scope without an [`InteractionProvider`](crate::provider::InteractionProvider).
    #[error("use_interaction must be used within an InteractionProvider")]
    MissingProvider,
    /// [`InteractionProvider::mount`](crate::provider::InteractionProvider::mount)
    /// was called in a scope without a scene.
    #[error("InteractionProvider must be used within a scene provider")]
    MissingScene,
}
