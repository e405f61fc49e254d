// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! TLS bundle synchronization logic.

pub mod archive;
pub mod engine;
pub mod targets;

pub use engine::{sync_tls_bundle, SkipReason, SyncOutcome};
pub use targets::TargetState;
