//! The home page URL query: `/?page=<n>&pageSize=<n>&keyword=<text>[&locale=<tag>]`.
//!
//! `HomeQuery` is the single source the page state is derived from. The
//! router parses it with `From<&str>` and writes it back with `Display`.

use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Characters escaped inside a query value.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeQuery {
    pub page: u32,
    pub page_size: u32,
    pub keyword: String,
    pub locale: Option<String>,
}

impl Default for HomeQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            keyword: String::new(),
            locale: None,
        }
    }
}

impl HomeQuery {
    /// Parse a raw query string (with or without the leading `?`).
    /// Missing, zero or malformed numbers fall back to the defaults.
    pub fn parse(raw: &str) -> Self {
        let mut query = HomeQuery::default();
        let raw = raw.trim().trim_start_matches('?');

        for pair in raw.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode(value);
            match decode(key).as_str() {
                "page" => query.page = parse_positive(&value).unwrap_or(1),
                "pageSize" => query.page_size = parse_positive(&value).unwrap_or(DEFAULT_PAGE_SIZE),
                "keyword" => query.keyword = value,
                "locale" => {
                    let tag = value.trim();
                    query.locale = (!tag.is_empty()).then(|| tag.to_string());
                }
                _ => {}
            }
        }

        query
    }

    /// Absolute in-site link to this query.
    pub fn href(&self) -> String {
        format!("/?{self}")
    }

    pub fn has_keyword(&self) -> bool {
        !self.keyword.trim().is_empty()
    }

    pub fn with_locale(mut self, locale: Option<String>) -> Self {
        self.locale = locale;
        self
    }
}

impl From<&str> for HomeQuery {
    fn from(raw: &str) -> Self {
        HomeQuery::parse(raw)
    }
}

impl fmt::Display for HomeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "page={}&pageSize={}&keyword={}",
            self.page,
            self.page_size,
            utf8_percent_encode(&self.keyword, QUERY_VALUE)
        )?;
        if let Some(locale) = &self.locale {
            write!(f, "&locale={}", utf8_percent_encode(locale, QUERY_VALUE))?;
        }
        Ok(())
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

fn parse_positive(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|n| *n > 0)
}
