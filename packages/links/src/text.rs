// ABOUTME: Link-label filters for scraped download pages
// ABOUTME: Rejects tutorial, promo and bare-format labels that never point at a file

use crate::contains_any;

/// Labels rejected when they appear anywhere in the link text
pub const JUNK_LINK_TEXTS: &[&str] = &[
    "how to download",
    "[how to download]",
    "how to watch",
    "[how to watch]",
    "join telegram",
    "join our telegram",
    "request movie",
    "4k | sdr | hevc",
    "4k | sdr",
    "sdr | hevc",
];

/// Labels rejected only when they are the whole (trimmed) link text
pub const JUNK_LINK_EXACT_TEXTS: &[&str] =
    &["4k", "sdr", "hevc", "download", "watch", "click here", "link"];

pub fn is_junk_link_text(text: &str) -> bool {
    let lower = text.trim().to_lowercase();

    contains_any(&lower, JUNK_LINK_TEXTS) || JUNK_LINK_EXACT_TEXTS.contains(&lower.as_str())
}
