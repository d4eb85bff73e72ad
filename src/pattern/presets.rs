// Tue Oct 13 2026 - Alex

use crate::pattern::{compile, Flags, Pattern, PatternError};
use once_cell::sync::OnceCell;

pub const EMAIL: &str = r"[\w\.+-]+@[\w\.-]+\.[\w\.-]+";
pub const URI: &str = r"[\w]+://[^/\s?#]+[^\s?#]+(?:\?[^\s#]*)?(?:#[^\s]*)?";
pub const IP: &str =
    r"(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9])";

static EMAIL_PATTERN: OnceCell<Pattern> = OnceCell::new();
static URI_PATTERN: OnceCell<Pattern> = OnceCell::new();
static IP_PATTERN: OnceCell<Pattern> = OnceCell::new();

pub fn email() -> Result<&'static Pattern, PatternError> {
    EMAIL_PATTERN.get_or_try_init(|| compile(EMAIL, Flags::empty()))
}

pub fn uri() -> Result<&'static Pattern, PatternError> {
    URI_PATTERN.get_or_try_init(|| compile(URI, Flags::empty()))
}

pub fn ip() -> Result<&'static Pattern, PatternError> {
    IP_PATTERN.get_or_try_init(|| compile(IP, Flags::empty()))
}

/// Name and source of every preset, in a stable order.
pub fn all() -> [(&'static str, &'static str); 3] {
    [("email", EMAIL), ("uri", URI), ("ip", IP)]
}

pub fn by_name(name: &str) -> Option<Result<&'static Pattern, PatternError>> {
    match name.to_lowercase().as_str() {
        "email" => Some(email()),
        "uri" | "url" => Some(uri()),
        "ip" => Some(ip()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = concat!(
        "mail bob.smith+tag@example.co.uk or visit https://example.com/a?b=1#top ",
        "from 192.168.10.20 not 999.1.1.1"
    );

    #[test]
    fn test_presets_extract() {
        let emails = email().unwrap().findall(SAMPLE).unwrap();
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].as_str(), "bob.smith+tag@example.co.uk");

        let uris = uri().unwrap().findall(SAMPLE).unwrap();
        assert_eq!(uris[0].as_str(), "https://example.com/a?b=1#top");

        let ips: Vec<_> = ip()
            .unwrap()
            .findall(SAMPLE)
            .unwrap()
            .iter()
            .map(|f| f.as_str())
            .collect();
        assert_eq!(ips, vec!["192.168.10.20"]);
    }

    #[test]
    fn test_presets_are_compiled_once() {
        let a = email().unwrap() as *const Pattern;
        let b = by_name("EMAIL").unwrap().unwrap() as *const Pattern;
        assert_eq!(a, b);
        assert!(by_name("phone").is_none());
    }
}
