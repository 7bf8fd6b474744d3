//! Keyword highlighter — wraps JD keywords found in resume text in `<strong>`.
//!
//! The fragment is never parsed into a tree. Instead it is split into segments:
//! - `Protected`: existing `<strong ...>...</strong>` runs (and any region that
//!   still holds an unbalanced `<strong`), copied through untouched.
//! - `Open`: everything else, where keywords may be wrapped.
//!
//! Wrapped matches become `Protected` segments on the spot, so a shorter keyword
//! processed later in the same pass can never land inside a longer one.
//! Passes repeat until nothing changes, which makes the whole operation idempotent.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

/// Opening tag inserted around every highlighted keyword.
pub const EMPHASIS_OPEN: &str = r#"<strong style="font-weight: 700; color: #000;">"#;
pub const EMPHASIS_CLOSE: &str = "</strong>";

/// Keywords shorter than this (in chars) are skipped; single letters match everywhere.
const MIN_KEYWORD_CHARS: usize = 2;

static EMPHASIS_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<strong[^>]*>.*?</strong>").expect("emphasis run pattern is valid")
});

static STRAY_EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<strong").expect("stray emphasis pattern is valid"));

/// A tag inside an open region. Requires a letter, `/` or `!` after `<` so that
/// a bare "5 < 6" in text is not mistaken for markup.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z!][^>]*>").expect("tag pattern is valid"));

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Open(String),
    Protected(String),
}

/// Splits a fragment into alternating open and protected segments.
fn tokenize(html: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for run in EMPHASIS_RUN.find_iter(html) {
        if run.start() > cursor {
            segments.push(open_or_protected(&html[cursor..run.start()]));
        }
        segments.push(Segment::Protected(run.as_str().to_string()));
        cursor = run.end();
    }
    if cursor < html.len() {
        segments.push(open_or_protected(&html[cursor..]));
    }

    segments
}

fn open_or_protected(text: &str) -> Segment {
    if STRAY_EMPHASIS.is_match(text) {
        Segment::Protected(text.to_string())
    } else {
        Segment::Open(text.to_string())
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Deduplicates (exact string, first wins), drops unusable keywords and orders
/// the rest longest-first. The sort is stable so equal lengths keep input order.
fn prepare_keywords<S: AsRef<str>>(keywords: &[S]) -> Vec<&str> {
    let mut prepared: Vec<&str> = Vec::with_capacity(keywords.len());
    for keyword in keywords.iter().map(|k| k.as_ref()) {
        if keyword.chars().count() < MIN_KEYWORD_CHARS || keyword.trim().is_empty() {
            continue;
        }
        if !prepared.contains(&keyword) {
            prepared.push(keyword);
        }
    }
    prepared.sort_by_key(|k| std::cmp::Reverse(k.chars().count()));
    prepared
}

/// A compiled keyword matcher.
struct KeywordMatcher {
    pattern: Regex,
}

impl KeywordMatcher {
    fn new(keyword: &str) -> Option<Self> {
        match RegexBuilder::new(&regex::escape(keyword))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => Some(Self { pattern }),
            Err(e) => {
                warn!("Skipping keyword {keyword:?}: {e}");
                None
            }
        }
    }

    /// Byte ranges of every boundary-safe occurrence in `text` that does not
    /// overlap a tag.
    fn find_matches(&self, text: &str) -> Vec<(usize, usize)> {
        let tags: Vec<(usize, usize)> =
            TAG.find_iter(text).map(|m| (m.start(), m.end())).collect();
        let mut matches = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let Some(m) = self.pattern.find_at(text, pos) else {
                break;
            };
            let (start, end) = (m.start(), m.end());

            let before_ok = text[..start]
                .chars()
                .next_back()
                .map_or(true, |c| c != '<' && !is_word_char(c));
            let after_ok = text[end..]
                .chars()
                .next()
                .map_or(true, |c| c != '>' && !is_word_char(c));
            let inside_tag = tags.iter().any(|&(ts, te)| start < te && ts < end);

            if before_ok && after_ok && !inside_tag && end > start {
                matches.push((start, end));
                pos = end;
            } else {
                // Retry one character further on, like a regex engine would.
                pos = start + text[start..].chars().next().map_or(1, char::len_utf8);
            }
        }

        matches
    }

    /// Wraps all matches in an open segment. Returns `None` when nothing matched.
    fn apply(&self, text: &str) -> Option<Vec<Segment>> {
        let matches = self.find_matches(text);
        if matches.is_empty() {
            return None;
        }

        let mut out = Vec::with_capacity(matches.len() * 2 + 1);
        let mut cursor = 0;
        for (start, end) in matches {
            if start > cursor {
                out.push(Segment::Open(text[cursor..start].to_string()));
            }
            out.push(Segment::Protected(format!(
                "{EMPHASIS_OPEN}{}{EMPHASIS_CLOSE}",
                &text[start..end]
            )));
            cursor = end;
        }
        if cursor < text.len() {
            out.push(Segment::Open(text[cursor..].to_string()));
        }
        Some(out)
    }
}

/// One substitution pass over every keyword. Returns the new HTML and whether
/// anything was wrapped.
fn highlight_pass(html: &str, matchers: &[KeywordMatcher]) -> (String, bool) {
    let mut segments = tokenize(html);
    let mut changed = false;

    for matcher in matchers {
        let mut next = Vec::with_capacity(segments.len());
        for segment in segments {
            match segment {
                Segment::Open(text) => match matcher.apply(&text) {
                    Some(parts) => {
                        changed = true;
                        next.extend(parts);
                    }
                    None => next.push(Segment::Open(text)),
                },
                protected => next.push(protected),
            }
        }
        segments = next;
    }

    let html = segments
        .into_iter()
        .map(|s| match s {
            Segment::Open(t) | Segment::Protected(t) => t,
        })
        .collect();
    (html, changed)
}

/// Wraps every boundary-safe, case-insensitive occurrence of each keyword in
/// emphasis markup, preserving the casing found in the text.
///
/// Existing `<strong>` runs are never touched and matches never land inside a
/// tag. `highlight(&highlight(f, k), k) == highlight(f, k)` for all inputs.
pub fn highlight<S: AsRef<str>>(fragment: &str, keywords: &[S]) -> String {
    if keywords.is_empty() {
        return fragment.to_string();
    }

    let matchers: Vec<KeywordMatcher> = prepare_keywords(keywords)
        .into_iter()
        .filter_map(KeywordMatcher::new)
        .collect();
    if matchers.is_empty() {
        return fragment.to_string();
    }

    // Each changing pass turns open text into protected text, so this terminates.
    let mut html = fragment.to_string();
    let mut passes = 0;
    loop {
        let (next, changed) = highlight_pass(&html, &matchers);
        passes += 1;
        html = next;
        if !changed {
            break;
        }
    }
    debug!(
        "Highlighted {} keyword(s) in {} pass(es)",
        matchers.len(),
        passes
    );

    html
}
