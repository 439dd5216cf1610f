//! Recognisers for URL-shaped and web-search input.

const URI_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// Web search engines reachable through a one-letter selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEngine {
    Google,
    DuckDuckGo,
}

impl SearchEngine {
    pub fn from_selector(selector: char) -> Option<SearchEngine> {
        match selector {
            'g' => Some(SearchEngine::Google),
            's' => Some(SearchEngine::DuckDuckGo),
            _ => None,
        }
    }

    fn query_prefix(self) -> &'static str {
        match self {
            SearchEngine::Google => "https://www.google.com/#q=",
            SearchEngine::DuckDuckGo => "https://duckduckgo.com/?q=",
        }
    }

    /// Builds the search URL with the query percent-encoded.
    pub fn url_for(self, query: &str) -> String {
        format!("{}{}", self.query_prefix(), urlencoding::encode(query))
    }
}

/// Returns the normalized URL when `input` looks like `[w ]scheme://host.tld[/path]`.
///
/// The scheme is optional only after the `w` marker. The last
/// whitespace-separated token is the URL; a known scheme is lowercased and
/// `http://` is prepended when it carries none.
pub fn match_uri(input: &str) -> Option<String> {
    let rest = match strip_browser_marker(input) {
        Some(after_marker) => strip_scheme(after_marker).unwrap_or(after_marker),
        None => strip_scheme(input)?,
    };
    if !is_host_and_path(rest) {
        return None;
    }
    let token = input.split_whitespace().last()?;
    Some(with_scheme(token))
}

/// Returns the engine and raw query for `g <query>` / `s <query>` input.
pub fn match_search(input: &str) -> Option<(SearchEngine, &str)> {
    let mut chars = input.chars();
    let engine = SearchEngine::from_selector(chars.next()?)?;
    let rest = chars.as_str();
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let query = rest.trim_start();
    if query.is_empty() {
        return None;
    }
    Some((engine, query))
}

fn strip_browser_marker(input: &str) -> Option<&str> {
    let rest = input
        .strip_prefix('w')
        .or_else(|| input.strip_prefix('W'))?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim_start())
}

fn strip_scheme(input: &str) -> Option<&str> {
    let (scheme, rest) = input.split_once("://")?;
    URI_SCHEMES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(scheme))
        .then_some(rest)
}

fn with_scheme(token: &str) -> String {
    match strip_scheme(token) {
        Some(rest) => {
            let scheme = &token[..token.len() - rest.len() - "://".len()];
            format!("{}://{rest}", scheme.to_ascii_lowercase())
        }
        None => format!("http://{token}"),
    }
}

/// `label.` repeated, a 2-6 letter TLD, an optional `:port`, then nothing or
/// `/`/`?` and more.
fn is_host_and_path(input: &str) -> bool {
    let (host, tail) = match input.find(&['/', '?'][..]) {
        Some(index) => input.split_at(index),
        None => (input, ""),
    };
    if !tail.is_empty() && (tail.len() < 2 || tail.contains(char::is_whitespace)) {
        return false;
    }
    let host = match host.split_once(':') {
        Some((host, port)) if is_port(port) => host,
        Some(_) => return false,
        None => host,
    };
    let Some((labels, tld)) = host.rsplit_once('.') else {
        return false;
    };
    let tld_ok = (2..=6).contains(&tld.len()) && tld.chars().all(|c| c.is_ascii_alphabetic());
    tld_ok
        && labels
            .split('.')
            .all(|label| !label.is_empty() && label.chars().all(is_label_char))
}

fn is_port(port: &str) -> bool {
    !port.is_empty() && port.chars().all(|c| c.is_ascii_digit())
}

fn is_label_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-'
}
