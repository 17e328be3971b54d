use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

static IFRAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<iframe\b").unwrap());
static SRC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bsrc\s*=\s*(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)'|(?P<bare>[^\s"'>]+))"#)
        .unwrap()
});

// Any run of scheme prefixes ending in an https one, including stray leading
// `h`s such as "hhttps://" and doubled schemes such as "https://https://".
static PROTOCOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i)(?:h*ttps?://)*h*ttps://").unwrap());

/// Result of normalizing user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub url: String,
    /// The url was lifted out of pasted `<iframe>` markup
    pub from_iframe: bool,
}

/// Clean up a pasted link or embed code into a canonical url string.
///
/// Never fails: anything that cannot be cleaned up comes back trimmed.
pub fn normalize(input: &str) -> String {
    normalize_input(input).url
}

pub fn normalize_input(input: &str) -> Normalized {
    let trimmed = input.trim();

    let (url, from_iframe) = if IFRAME_RE.is_match(trimmed) {
        match iframe_src(trimmed) {
            Some(src) => (src, true),
            None => {
                trace!("iframe markup without usable src, leaving input as is");
                return Normalized {
                    url: trimmed.to_owned(),
                    from_iframe: false,
                };
            }
        }
    } else {
        (trimmed.to_owned(), false)
    };

    let url = url.trim_start_matches(|c: char| c == '@' || c.is_whitespace());
    let url = PROTOCOL_RE.replace(url, "https://");

    trace!(input = trimmed, normalized = %url, from_iframe, "normalized link");
    Normalized {
        url: url.into_owned(),
        from_iframe,
    }
}

fn iframe_src(markup: &str) -> Option<String> {
    let caps = SRC_RE.captures(markup)?;
    let src = caps
        .name("dq")
        .or_else(|| caps.name("sq"))
        .or_else(|| caps.name("bare"))?
        .as_str()
        .trim()
        .replace("&amp;", "&");
    // A src holding markup of its own would still need cleaning on the next pass
    if src.is_empty() || IFRAME_RE.is_match(&src) {
        None
    } else {
        Some(src)
    }
}
