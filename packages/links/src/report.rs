// ABOUTME: Aggregated classification results for a URL or a link label
// ABOUTME: Serializable so the API and CLI can show every predicate at once

use serde::Serialize;

use crate::domains::{
    has_hubcloud_tld, has_hubdrive_tld, is_cdn_domain, is_junk_domain, is_target_domain,
    is_timer_domain,
};
use crate::text::is_junk_link_text;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlReport {
    pub url: String,
    pub is_target_domain: bool,
    pub is_timer_domain: bool,
    pub is_cdn_domain: bool,
    pub is_junk_domain: bool,
    pub has_hubcloud_tld: bool,
    pub has_hubdrive_tld: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextReport {
    pub text: String,
    pub is_junk_link_text: bool,
}

pub fn classify_url(url: &str) -> UrlReport {
    UrlReport {
        url: url.to_string(),
        is_target_domain: is_target_domain(url),
        is_timer_domain: is_timer_domain(url),
        is_cdn_domain: is_cdn_domain(url),
        is_junk_domain: is_junk_domain(url),
        has_hubcloud_tld: has_hubcloud_tld(url),
        has_hubdrive_tld: has_hubdrive_tld(url),
    }
}

pub fn classify_text(text: &str) -> TextReport {
    TextReport {
        text: text.to_string(),
        is_junk_link_text: is_junk_link_text(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_hubcloud_url() {
        let report = classify_url("https://hubcloud.foo/drive/abc");
        assert!(report.is_target_domain);
        assert!(report.is_cdn_domain);
        assert!(report.has_hubcloud_tld);
        assert!(!report.is_timer_domain);
        assert!(!report.is_junk_domain);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let json = serde_json::to_value(classify_text("Join Telegram")).unwrap();
        assert_eq!(json["isJunkLinkText"], serde_json::json!(true));
        assert_eq!(json["text"], serde_json::json!("Join Telegram"));

        let json = serde_json::to_value(classify_url("https://example.com")).unwrap();
        assert_eq!(json["isTargetDomain"], serde_json::json!(false));
        assert!(json.get("hasHubcloudTld").is_some());
    }
}
