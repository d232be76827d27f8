// ABOUTME: Static classification tables and predicates for scraped links
// ABOUTME: Case-insensitive substring checks over URLs and link labels

pub mod domains;
pub mod media;
pub mod report;
pub mod text;

pub use domains::{
    has_hubcloud_tld, has_hubdrive_tld, is_cdn_domain, is_junk_domain, is_target_domain,
    is_timer_domain, CDN_DOMAINS, HUBCLOUD_TLDS, HUBDRIVE_TLDS, JUNK_DOMAINS, TARGET_DOMAINS,
    TIMER_DOMAINS,
};
pub use media::{best_format, format_priority, is_valid_language, FORMAT_PRIORITY, VALID_LANGUAGES};
pub use report::{classify_text, classify_url, TextReport, UrlReport};
pub use text::{is_junk_link_text, JUNK_LINK_EXACT_TEXTS, JUNK_LINK_TEXTS};

/// True if `haystack` (already lowercased) contains any of `needles`.
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
