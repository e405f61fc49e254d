// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Annotation keys recognized on source TLS bundle secrets
pub mod annotations {
    /// Must be set to [`SYNC_VALUE`] for a secret to be mirrored
    pub const SYNC: &str = "camirror.io/sync";
    pub const SYNC_VALUE: &str = "reconcile";
    /// Name of the derived secret holding the combined certificate chain
    pub const TARGET_CERT_NAME: &str = "camirror.io/target-cert-name";
    /// Name of the derived secret holding the private key
    pub const TARGET_KEY_NAME: &str = "camirror.io/target-key-name";
    /// Value for the `strimzi.io/cluster` label on derived secrets (optional)
    pub const TARGET_CLUSTER_NAME: &str = "camirror.io/target-cluster-name";
}

/// Labels written on derived secrets
pub mod labels {
    pub const MANAGED_BY: &str = "camirror.io/managed-by";
    pub const MANAGED_BY_VALUE: &str = "camirror";
    /// Truncated content fingerprint of the source bundle
    pub const HASH: &str = "camirror.io/hash";
    /// Marks archived generation snapshots
    pub const HISTORICAL: &str = "camirror.io/historical";
    pub const HISTORICAL_VALUE: &str = "true";
    pub const STRIMZI_CLUSTER: &str = "strimzi.io/cluster";
    pub const STRIMZI_KIND: &str = "strimzi.io/kind";
    pub const STRIMZI_KIND_VALUE: &str = "Kafka";
}

/// Strimzi generation annotation keys on derived secrets
pub mod generation {
    pub const CA_CERT: &str = "strimzi.io/ca-cert-generation";
    pub const CA_KEY: &str = "strimzi.io/ca-key-generation";
    /// Generation assigned to a freshly created target secret
    pub const INITIAL: &str = "0";
}

/// Well-known data keys in source and derived secrets
pub mod data_keys {
    pub const CA_CRT: &str = "ca.crt";
    pub const TLS_CRT: &str = "tls.crt";
    pub const TLS_KEY: &str = "tls.key";
    pub const CA_KEY: &str = "ca.key";
}

/// Secret type of source TLS bundles
pub const SECRET_TYPE_TLS: &str = "kubernetes.io/tls";

/// Secret type of derived secrets
pub const SECRET_TYPE_OPAQUE: &str = "Opaque";
