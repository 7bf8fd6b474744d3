//! Punctuation and color cleanup for generated resume HTML.

/// UTF-8 punctuation that was decoded as Windows-1252 somewhere upstream.
/// Applied before `PUNCTUATION_FIXES` since the glyph table would never see these.
const MOJIBAKE_FIXES: &[(&str, &str)] = &[
    ("\u{e2}\u{20ac}\u{201c}", "-"),   // en dash
    ("\u{e2}\u{20ac}\u{201d}", "-"),   // em dash
    ("\u{e2}\u{20ac}\u{2dc}", "'"),    // left single quote
    ("\u{e2}\u{20ac}\u{2122}", "'"),   // right single quote
    ("\u{e2}\u{20ac}\u{153}", "\""),   // left double quote
    ("\u{e2}\u{20ac}\u{9d}", "\""),    // right double quote
    ("\u{e2}\u{20ac}\u{a6}", "..."),   // ellipsis
    ("\u{e2}\u{20ac}\u{a2}", "-"),     // bullet
];

const PUNCTUATION_FIXES: &[(&str, &str)] = &[
    ("\u{2013}", "-"),
    ("\u{2014}", "-"),
    ("\u{2018}", "'"),
    ("\u{2019}", "'"),
    ("\u{201c}", "\""),
    ("\u{201d}", "\""),
    ("\u{2026}", "..."),
    ("\u{2022}", "-"),
];

/// Gray tones the generator likes to emit; resumes print in black.
const COLOR_FIXES: &[(&str, &str)] = &[("color: #333", "color: #000"), ("color: #555", "color: #000")];

/// Replaces non-ASCII punctuation with ASCII equivalents and forces the known
/// gray inline colors to black. Literal substring replacement only.
pub fn normalize(fragment: &str) -> String {
    let mut html = fragment.to_string();
    for table in [MOJIBAKE_FIXES, PUNCTUATION_FIXES, COLOR_FIXES] {
        for (from, to) in table {
            if html.contains(from) {
                html = html.replace(from, to);
            }
        }
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_colors_become_black() {
        let out = normalize(r#"<p style="color: #333">a</p><p style="color: #555">b</p>"#);
        assert!(out.contains("color: #000"));
        assert!(!out.contains("color: #333"));
        assert!(!out.contains("color: #555"));
    }

    #[test]
    fn test_other_colors_untouched() {
        let html = r#"<span style="color: #444">Jan 2020</span>"#;
        assert_eq!(normalize(html), html);
    }

    #[test]
    fn test_curly_apostrophe_straightened() {
        assert_eq!(normalize("don\u{2019}t"), "don't");
    }

    #[test]
    fn test_punctuation_table() {
        let input = "2019\u{2013}2021 \u{2014} \u{201c}lead\u{201d} \u{2018}x\u{2019} wait\u{2026} \u{2022} item";
        assert_eq!(normalize(input), "2019-2021 - \"lead\" 'x' wait... - item");
    }

    #[test]
    fn test_mojibake_sequences_repaired() {
        let input = "Rust \u{e2}\u{20ac}\u{201d} Go, it\u{e2}\u{20ac}\u{2122}s fine\u{e2}\u{20ac}\u{a6}";
        assert_eq!(normalize(input), "Rust - Go, it's fine...");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_ascii_passthrough() {
        let html = "<h1>Jane Doe</h1><p>Plain text - already ascii.</p>";
        assert_eq!(normalize(html), html);
    }
}
