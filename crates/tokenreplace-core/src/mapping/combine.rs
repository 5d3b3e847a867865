//! Mapping combination with precedence rules

use super::TokenMapping;

/// Merge `overlay` over `base`
///
/// Every key of both inputs is kept. For a key present in both, the token
/// from `overlay` wins. Keys keep the position of their first appearance:
/// `base` order first, then keys that only `overlay` has.
#[must_use]
pub fn combine(base: &TokenMapping, overlay: &TokenMapping) -> TokenMapping {
    let mut merged = base.clone();
    merged.extend(overlay.iter());
    merged
}
