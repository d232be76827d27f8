// ABOUTME: Domain lists for timer pages, download hosts, CDNs and junk sources
// ABOUTME: Matching is a lowercase substring test, URLs are not validated

use url::Url;

use crate::contains_any;

/// Interstitial "wait N seconds" pages in front of the real links
pub const TIMER_DOMAINS: &[&str] = &["gadgetsweb", "review-tech", "ngwin", "cryptoinsights"];

/// File hosts whose links are worth resolving
pub const TARGET_DOMAINS: &[&str] = &[
    "hblinks", "hubdrive", "hubcdn", "hubcloud", "gdflix", "drivehub",
];

pub const JUNK_DOMAINS: &[&str] = &[
    "catimages",
    "imdb.com",
    "googleusercontent",
    "instagram.com",
    "facebook.com",
    "wp-content",
    "wpshopmart",
];

pub const CDN_DOMAINS: &[&str] = &[
    "hubcdn", "hubdrive", "gadgetsweb", "hubstream", "hdstream", "hblinks", "hubcloud", "gdflix",
    "drivehub",
];

/// Top-level domains HubCloud mirrors rotate through
pub const HUBCLOUD_TLDS: &[&str] = &[
    ".foo", ".fans", ".dev", ".cloud", ".icu", ".lol", ".art", ".in", ".store",
];

pub const HUBDRIVE_TLDS: &[&str] = &[".space", ".pro", ".in"];

pub fn is_timer_domain(url: &str) -> bool {
    contains_any(&url.to_lowercase(), TIMER_DOMAINS)
}

pub fn is_target_domain(url: &str) -> bool {
    contains_any(&url.to_lowercase(), TARGET_DOMAINS)
}

pub fn is_junk_domain(url: &str) -> bool {
    contains_any(&url.to_lowercase(), JUNK_DOMAINS)
}

pub fn is_cdn_domain(url: &str) -> bool {
    contains_any(&url.to_lowercase(), CDN_DOMAINS)
}

/// True if the URL's host ends with one of the HubCloud mirror TLDs.
pub fn has_hubcloud_tld(url: &str) -> bool {
    host_has_suffix(url, HUBCLOUD_TLDS)
}

pub fn has_hubdrive_tld(url: &str) -> bool {
    host_has_suffix(url, HUBDRIVE_TLDS)
}

fn host_has_suffix(url: &str, suffixes: &[&str]) -> bool {
    // Bare hosts like "hubcloud.foo" do not parse as URLs; use the raw string then
    let host = match Url::parse(url.trim()) {
        Ok(parsed) => parsed.host_str().map(str::to_lowercase),
        Err(_) => None,
    }
    .unwrap_or_else(|| url.trim().to_lowercase());

    suffixes.iter().any(|suffix| host.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_target_domain() {
        assert!(is_target_domain("https://hubcloud.example/foo"));
        assert!(!is_target_domain("https://example.com"));
    }

    #[rstest]
    #[case("https://HUBCLOUD.ink/file/abc", true)]
    #[case("https://gdflix.dad/file/123", true)]
    #[case("http://drivehub.cfd/?id=9", true)]
    #[case("https://hblinks.pro/archives/1", true)]
    #[case("https://github.com/hub", false)]
    #[case("", false)]
    fn test_target_domain_cases(#[case] url: &str, #[case] expected: bool) {
        assert_eq!(is_target_domain(url), expected);
    }

    #[rstest]
    #[case("https://gadgetsweb.xyz/?id=abc", true)]
    #[case("https://Review-Tech.net/go", true)]
    #[case("https://cryptoinsights.site/x", true)]
    #[case("https://hubcloud.foo/drive/1", false)]
    fn test_timer_domain_cases(#[case] url: &str, #[case] expected: bool) {
        assert_eq!(is_timer_domain(url), expected);
    }

    #[rstest]
    #[case("https://www.imdb.com/title/tt123", true)]
    #[case("https://lh3.googleusercontent.com/img.png", true)]
    #[case("https://site.org/wp-content/uploads/poster.jpg", true)]
    #[case("https://hubdrive.space/file/1", false)]
    fn test_junk_domain_cases(#[case] url: &str, #[case] expected: bool) {
        assert_eq!(is_junk_domain(url), expected);
    }

    #[test]
    fn test_cdn_domain_covers_target_domains() {
        for domain in TARGET_DOMAINS {
            assert!(
                is_cdn_domain(&format!("https://{}.example/x", domain)),
                "{} should be a CDN domain",
                domain
            );
        }
        assert!(is_cdn_domain("https://hubstream.art/v/1"));
        assert!(!is_cdn_domain("https://example.com"));
    }

    #[rstest]
    #[case("https://hubcloud.foo/drive/abc", true)]
    #[case("https://HUBCLOUD.Fans/drive/abc", true)]
    #[case("hubcloud.lol", true)]
    #[case("https://hubcloud.com/drive/abc", false)]
    #[case("https://example.store.com/x", false)]
    fn test_hubcloud_tld(#[case] url: &str, #[case] expected: bool) {
        assert_eq!(has_hubcloud_tld(url), expected);
    }

    #[test]
    fn test_hubdrive_tld() {
        assert!(has_hubdrive_tld("https://hubdrive.space/file/1"));
        assert!(has_hubdrive_tld("https://hubdrive.in/file/1"));
        assert!(!has_hubdrive_tld("https://hubdrive.dev/file/1"));
    }
}
