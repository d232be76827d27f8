// ABOUTME: Release format ranking and audio language whitelist
// ABOUTME: Used to pick the best mirror among several labelled downloads

/// Release formats ranked from best (highest) to worst
pub const FORMAT_PRIORITY: &[(&str, u8)] = &[
    ("WEB-DL", 5),
    ("BluRay", 4),
    ("WEBRip", 3),
    ("HEVC", 2),
    ("x264", 1),
    ("HDTC", 0),
    ("10Bit", 0),
];

pub const VALID_LANGUAGES: &[&str] = &[
    "Hindi",
    "English",
    "Tamil",
    "Telugu",
    "Malayalam",
    "Kannada",
    "Punjabi",
    "Marathi",
    "Bengali",
    "Spanish",
    "French",
    "Korean",
    "Japanese",
    "Chinese",
];

/// Rank of a release format label, `None` if the label is not ranked.
pub fn format_priority(label: &str) -> Option<u8> {
    FORMAT_PRIORITY
        .iter()
        .find(|(format, _)| *format == label)
        .map(|(_, rank)| *rank)
}

/// Highest ranked label among `labels`. Unranked labels are ignored and the
/// first label wins a tie.
pub fn best_format<'a, I>(labels: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, u8)> = None;

    for label in labels {
        if let Some(rank) = format_priority(label) {
            match best {
                Some((_, best_rank)) if best_rank >= rank => {}
                _ => best = Some((label, rank)),
            }
        }
    }

    best.map(|(label, _)| label)
}

pub fn is_valid_language(name: &str) -> bool {
    let name = name.trim();
    VALID_LANGUAGES
        .iter()
        .any(|language| language.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("WEB-DL", Some(5))]
    #[case("BluRay", Some(4))]
    #[case("WEBRip", Some(3))]
    #[case("HEVC", Some(2))]
    #[case("x264", Some(1))]
    #[case("HDTC", Some(0))]
    #[case("10Bit", Some(0))]
    #[case("web-dl", None)]
    #[case("CAM", None)]
    fn test_format_priority(#[case] label: &str, #[case] expected: Option<u8>) {
        assert_eq!(format_priority(label), expected);
    }

    #[test]
    fn test_best_format() {
        assert_eq!(best_format(["x264", "BluRay", "HEVC"]), Some("BluRay"));
        assert_eq!(best_format(["WEBRip", "WEB-DL"]), Some("WEB-DL"));
        assert_eq!(best_format(["HDTC", "10Bit"]), Some("HDTC"));
        assert_eq!(best_format(["CAM", "TS"]), None);
        assert_eq!(best_format(Vec::<&str>::new()), None);
    }

    #[test]
    fn test_valid_languages() {
        assert!(is_valid_language("Hindi"));
        assert!(is_valid_language("  telugu "));
        assert!(is_valid_language("KOREAN"));
        assert!(!is_valid_language("Klingon"));
        assert!(!is_valid_language(""));
    }
}
