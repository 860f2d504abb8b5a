//! Turns the small markup dialect used by fallback labels (`x<sup>2</sup>`,
//! `<b><big>0</big></b>`) into plain text plus a couple of style flags, since
//! the renderer only draws plain strings.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_SUPERSCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<sup>(.*?)</sup>").unwrap());
static RE_SUBSCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<sub>(.*?)</sub>").unwrap());
static RE_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"<b(?:\s[^>]*)?>").unwrap());
static RE_BIG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<big(?:\s[^>]*)?>").unwrap());
static RE_ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?[A-Za-z][^>]*>").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub bold: bool,
    pub large: bool,
}

pub fn render_markup(markup: &str) -> Label {
    let bold = RE_BOLD.is_match(markup);
    let large = RE_BIG.is_match(markup);

    let text = RE_SUPERSCRIPT.replace_all(markup, |caps: &regex::Captures<'_>| {
        shift(&caps[1], superscript, "^")
    });
    let text = RE_SUBSCRIPT.replace_all(&text, |caps: &regex::Captures<'_>| {
        shift(&caps[1], subscript, "_")
    });
    let text = RE_ANY_TAG.replace_all(&text, "");

    Label {
        text: unescape(&text),
        bold,
        large,
    }
}

/// Map every char through `table`; if any char has no shifted form, keep the
/// run readable as `^(..)` / `_(..)` instead.
fn shift(inner: &str, table: fn(char) -> Option<char>, marker: &str) -> String {
    let inner = RE_ANY_TAG.replace_all(inner, "");
    match inner.chars().map(table).collect::<Option<String>>() {
        Some(shifted) => shifted,
        None if inner.chars().count() == 1 => format!("{marker}{inner}"),
        None => format!("{marker}({inner})"),
    }
}

fn superscript(ch: char) -> Option<char> {
    Some(match ch {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '-' => '⁻',
        '+' => '⁺',
        'n' => 'ⁿ',
        'x' => 'ˣ',
        'y' => 'ʸ',
        _ => return None,
    })
}

fn subscript(ch: char) -> Option<char> {
    Some(match ch {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        '-' => '₋',
        '+' => '₊',
        _ => return None,
    })
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}
