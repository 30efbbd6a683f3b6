use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// Header fields of a post as written in its YAML block.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Frontmatter {
    pub title: Option<String>,
    pub description: String,
    /// `YYYY-MM-DD` or RFC 3339.
    pub date: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
}

impl Default for Frontmatter {
    fn default() -> Self {
        Self {
            title: None,
            description: String::new(),
            date: None,
            tags: Vec::new(),
            published: true,
        }
    }
}

impl Frontmatter {
    pub fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }
}

/// Splits `---` fenced YAML off the top of a document.
/// Returns `None` and the whole input when there is no complete fence.
#[must_use]
pub fn split_frontmatter(source: &str) -> (Option<&str>, &str) {
    let Some(rest) = source
        .strip_prefix("---")
        .and_then(|rest| rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")))
    else {
        return (None, source);
    };
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, source)
}

pub(super) fn parse_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(date)
                .ok()
                .map(|date| date.date_naive())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn splits_fenced_header() {
        let (yaml, body) = split_frontmatter("---\ntitle: Hi\n---\nBody\n");
        assert_eq!(Some("title: Hi\n"), yaml);
        assert_eq!("Body\n", body);
    }

    #[test]
    fn crlf_fences() {
        let (yaml, body) = split_frontmatter("---\r\ntitle: Hi\r\n---\r\nBody");
        assert_eq!(Some("title: Hi\r\n"), yaml);
        assert_eq!("Body", body);
    }

    #[rstest]
    #[case("No header at all")]
    #[case("---\ntitle: never closed\n")]
    #[case("--- not a fence\n---\n")]
    fn missing_fence_keeps_everything(#[case] source: &str) {
        assert_eq!((None, source), split_frontmatter(source));
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let frontmatter = Frontmatter::parse("title: Only a title\n").unwrap();
        assert_eq!(Some("Only a title"), frontmatter.title.as_deref());
        assert!(frontmatter.published);
        assert!(frontmatter.tags.is_empty());
        assert_eq!(Frontmatter::default(), Frontmatter::parse("  \n").unwrap());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(Frontmatter::parse("title: [unclosed\n").is_err());
    }

    #[rstest]
    #[case("2024-01-15", Some((2024, 1, 15)))]
    #[case("2023-12-31T22:00:00-05:00", Some((2023, 12, 31)))]
    #[case("2023-12-31T22:00:00Z", Some((2023, 12, 31)))]
    #[case("last tuesday", None)]
    fn dates(#[case] input: &str, #[case] expected: Option<(i32, u32, u32)>) {
        let expected = expected.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());
        assert_eq!(expected, parse_date(input));
    }
}
