//! Identifier to display-name conversion.

/// Short words kept lower case when they start a word after a space or `(`.
const ARTICLES: &[&str] = &[
    "In", "As", "To", "Or", "At", "On", "If", "Be", "By", "The", "For", "And", "With", "When",
    "From",
];

/// Turn an identifier such as `DesertCanyon_Night2` into `Desert Canyon Night 2`.
///
/// Underscores become spaces, a space is inserted where a run of capitals or
/// digits begins, and each word is capitalized. Runs of capitals stay
/// together (`HDRMap` stays `HDRMap`) and numbers such as `-1.5` are not split.
pub fn humanize(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    let mut in_run = false;
    let mut was_space = false;
    let mut was_open_paren = false;
    let mut was_number = false;
    let mut was_minus = false;

    for (index, &original) in chars.iter().enumerate() {
        let mut ch = original;
        let is_lower = ch.is_lowercase();
        let is_upper = ch.is_uppercase();
        let is_digit = ch.is_ascii_digit();

        if (is_upper || (is_digit && !was_minus)) && !in_run && !was_open_paren && !was_number {
            if !was_space && !out.is_empty() {
                out.push(' ');
                was_space = true;
            }
            in_run = true;
        }

        // A lower case character breaks a run of capitals and digits
        if is_lower {
            in_run = false;
        }

        if ch == '_' {
            ch = ' ';
            in_run = true;
        }

        if ch == ' ' && was_space {
            continue;
        }

        if out.is_empty() {
            ch = to_upper(ch);
        } else if !is_digit && (was_space || was_open_paren) {
            if starts_article(&chars[index..]) {
                ch = to_lower(ch);
            } else {
                ch = to_upper(ch);
            }
        }

        was_space = ch == ' ';
        was_open_paren = ch == '(';
        was_minus = ch == '-';
        was_number = is_digit || (was_number && (was_minus || ch == '.'));

        out.push(ch);
    }

    out
}

/// Whether `rest` begins with an article followed by something other than a
/// lower-case letter (so "Inland" is not mistaken for "In").
fn starts_article(rest: &[char]) -> bool {
    ARTICLES.iter().any(|article| {
        let len = article.chars().count();
        rest.len() > len
            && !rest[len].is_lowercase()
            && rest[..len].iter().copied().eq(article.chars())
    })
}

fn to_upper(ch: char) -> char {
    ch.to_uppercase().next().unwrap_or(ch)
}

fn to_lower(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}
