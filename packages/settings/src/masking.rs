// ABOUTME: Credential masking for display
// ABOUTME: Renders a stored API key as a fixed bullet prefix plus its last eight characters

/// Prefix of every masked key shown to clients
pub const MASK_PREFIX: &str = "••••••••";

/// A submitted key starting with this marker is the masked preview echoed
/// back by a client, not a new key. Real provider keys are ASCII and can
/// never start with U+2022.
pub const MASKED_PLACEHOLDER_MARKER: &str = "••••";

/// Number of trailing characters revealed after the prefix
pub const VISIBLE_SUFFIX_CHARS: usize = 8;

/// Mask an API key for display.
///
/// Empty keys stay empty. Keys of [`VISIBLE_SUFFIX_CHARS`] characters or
/// fewer render as the bare prefix so no key is ever shown in full.
pub fn mask_api_key(key: &str) -> String {
    if key.is_empty() {
        return String::new();
    }

    let len = key.chars().count();
    if len <= VISIBLE_SUFFIX_CHARS {
        return MASK_PREFIX.to_string();
    }

    let tail: String = key.chars().skip(len - VISIBLE_SUFFIX_CHARS).collect();
    format!("{}{}", MASK_PREFIX, tail)
}

pub fn is_masked_placeholder(value: &str) -> bool {
    value.starts_with(MASKED_PLACEHOLDER_MARKER)
}
