// ABOUTME: Terminal rendering of link classification reports
// ABOUTME: Used by the classify subcommand

use colored::*;

use linkdesk_links::{TextReport, UrlReport};

fn flag(label: &str, value: bool) -> String {
    let mark = if value { "yes".green() } else { "no".dimmed() };
    format!("  {:<18} {}\n", label, mark)
}

pub fn render_url_report(report: &UrlReport) -> String {
    let mut out = format!("{} {}\n", "URL:".bold(), report.url);
    out.push_str(&flag("target domain", report.is_target_domain));
    out.push_str(&flag("timer domain", report.is_timer_domain));
    out.push_str(&flag("cdn domain", report.is_cdn_domain));
    out.push_str(&flag("junk domain", report.is_junk_domain));
    out.push_str(&flag("hubcloud tld", report.has_hubcloud_tld));
    out.push_str(&flag("hubdrive tld", report.has_hubdrive_tld));
    out
}

pub fn render_text_report(report: &TextReport) -> String {
    let mut out = format!("{} {:?}\n", "Text:".bold(), report.text);
    out.push_str(&flag("junk link text", report.is_junk_link_text));
    out
}
