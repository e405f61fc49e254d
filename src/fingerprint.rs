// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Content fingerprinting for TLS bundle change detection.

use crate::constants::data_keys;
use k8s_openapi::ByteString;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Compute the content fingerprint of a TLS bundle.
///
/// The fingerprint is the SHA-256 digest of the `ca.crt`, `tls.crt` and
/// `tls.key` bytes concatenated in that order (a missing field contributes
/// nothing), hex-encoded and truncated to `max_len` characters so it fits a
/// Kubernetes label value. Truncating a 64-character digest to 63 keeps 252
/// bits and is an accepted collision-risk tradeoff for label compatibility.
pub fn bundle_fingerprint(data: &BTreeMap<String, ByteString>, max_len: usize) -> String {
    let mut hasher = Sha256::new();
    for key in [data_keys::CA_CRT, data_keys::TLS_CRT, data_keys::TLS_KEY] {
        if let Some(field) = data.get(key) {
            hasher.update(&field.0);
        }
    }
    let mut fingerprint = hex::encode(hasher.finalize());
    fingerprint.truncate(max_len);
    fingerprint
}
