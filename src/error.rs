// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MirrorError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    /// A target name resolves to a secret that carries no fingerprint label
    /// and therefore was not produced by this operator. Overwriting it would
    /// clobber a foreign secret, so the reconciliation is aborted instead.
    #[error("target secret '{name}' exists but has no '{label}' label")]
    UnmanagedTarget { name: String, label: &'static str },

    #[error("failed to write target secret '{name}': {source}")]
    TargetWriteError { name: String, source: kube::Error },
}

pub type Result<T> = std::result::Result<T, MirrorError>;
