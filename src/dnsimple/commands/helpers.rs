use crate::error::{DnsimpleError, Result};
use crate::resources::Attributes;
use chrono::{DateTime, Utc};
use std::str::FromStr;
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

/// Positional argument `index`. Arity is checked by the dispatcher before a
/// handler runs, so required positions are always present.
pub fn arg(args: &[String], index: usize) -> &str {
    args.get(index).map(String::as_str).unwrap_or_default()
}

pub fn optional(args: &[String], index: usize) -> Option<&str> {
    args.get(index).map(String::as_str).filter(|s| !s.is_empty())
}

pub fn rest(args: &[String], from: usize) -> &[String] {
    args.get(from..).unwrap_or_default()
}

pub fn parse_number<T: FromStr>(value: Option<&str>, what: &str) -> Result<Option<T>> {
    value
        .map(|v| {
            v.parse::<T>()
                .map_err(|_| DnsimpleError::Usage(format!("{} must be a number, got '{}'", what, v)))
        })
        .transpose()
}

/// Parse `name:value` pairs; the value may itself contain colons.
pub fn parse_attributes(args: &[String]) -> Result<Attributes> {
    args.iter()
        .map(|pair| match pair.split_once(':') {
            Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
            _ => Err(DnsimpleError::Usage(format!(
                "expected name:value, got '{}'",
                pair
            ))),
        })
        .collect()
}

pub fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    let Some(timestamp) = timestamp else {
        return "-".to_string();
    };
    let elapsed = Utc::now().signed_duration_since(timestamp);
    let ago = Formatter::new().convert(elapsed.to_std().unwrap_or_default());
    format!("{} ({})", timestamp.format("%Y-%m-%d %H:%M"), ago)
}

pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}

/// Left-align `s` in a column `width` terminal cells wide.
pub fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

pub fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(|v| v.width()).max().unwrap_or(0)
}

pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn attributes_split_at_first_colon() {
        let parsed = parse_attributes(&strings(&["content:v=spf1 a:mail.example.com", "ttl:60"])).unwrap();
        assert_eq!(parsed["content"], "v=spf1 a:mail.example.com");
        assert_eq!(parsed["ttl"], "60");
    }

    #[test]
    fn attributes_reject_bare_words() {
        assert!(matches!(
            parse_attributes(&strings(&["nocolon"])),
            Err(DnsimpleError::Usage(_))
        ));
        assert!(parse_attributes(&strings(&[":value"])).is_err());
    }

    #[test]
    fn numbers_are_validated() {
        assert_eq!(parse_number::<u32>(Some("3600"), "ttl").unwrap(), Some(3600));
        assert_eq!(parse_number::<u32>(None, "ttl").unwrap(), None);
        assert!(parse_number::<u32>(Some("soon"), "ttl").is_err());
    }

    #[test]
    fn pad_uses_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
        assert_eq!(column_width(["a", "abc", "ab"].into_iter()), 3);
    }

    #[test]
    fn optional_skips_empty_strings() {
        let args = strings(&["a", ""]);
        assert_eq!(optional(&args, 0), Some("a"));
        assert_eq!(optional(&args, 1), None);
        assert_eq!(optional(&args, 2), None);
        assert_eq!(arg(&args, 5), "");
    }
}
