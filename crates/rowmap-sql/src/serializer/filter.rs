use super::{Formatter, ToSql};

/// Leading words that mark a fragment as a complete clause rather than a
/// bare predicate.
const CLAUSE_KEYWORDS: &[&[&str]] = &[
    &["WHERE"],
    &["ORDER", "BY"],
    &["GROUP", "BY"],
    &["HAVING"],
    &["LIMIT"],
    &["OFFSET"],
    &["FETCH"],
    &["UNION"],
];

/// A caller supplied filter fragment.
///
/// The fragment is trusted SQL and is rendered exactly as given. Only its
/// leading words are looked at, to decide whether a `WHERE` keyword has to
/// be inserted in front of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Filter<'a> {
    /// A predicate, rendered as ` WHERE <fragment>`
    Predicate(&'a str),

    /// A fragment that starts with its own clause keyword, rendered as-is
    Clause(&'a str),
}

impl<'a> Filter<'a> {
    /// Returns `None` for an absent or blank fragment.
    pub(super) fn new(fragment: Option<&'a str>) -> Option<Filter<'a>> {
        let fragment = fragment?;
        let leading = fragment.trim();

        if leading.is_empty() {
            None
        } else if CLAUSE_KEYWORDS
            .iter()
            .any(|keyword| starts_with_words(leading, keyword))
        {
            Some(Filter::Clause(fragment))
        } else {
            Some(Filter::Predicate(fragment))
        }
    }

    /// True if the fragment orders the outer statement. An `ORDER BY` inside
    /// parentheses or a string literal belongs to a subquery or a value and
    /// does not count.
    pub(super) fn has_order_by(self) -> bool {
        let fragment = match self {
            Filter::Predicate(fragment) | Filter::Clause(fragment) => fragment,
        };

        let words = top_level_words(fragment);
        words.windows(2).any(|pair| {
            pair[0].eq_ignore_ascii_case("ORDER") && pair[1].eq_ignore_ascii_case("BY")
        })
    }
}

impl ToSql for Filter<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Filter::Predicate(fragment) => fmt!(f, " WHERE ", fragment),
            Filter::Clause(fragment) => fmt!(f, " ", fragment),
        }
    }
}

/// Words of `src` outside parentheses and quoted text.
fn top_level_words(src: &str) -> Vec<&str> {
    let mut words = vec![];
    let mut depth = 0usize;
    let mut quote = None;
    let mut start = None;

    for (i, ch) in src.char_indices() {
        if let Some(open) = quote {
            if ch == open {
                quote = None;
            }
            continue;
        }

        let in_word = depth == 0 && (ch.is_alphanumeric() || ch == '_');

        match (start, in_word) {
            (None, true) => start = Some(i),
            (Some(begin), false) => {
                words.push(&src[begin..i]);
                start = None;
            }
            _ => {}
        }

        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '\'' | '"' => quote = Some(ch),
            _ => {}
        }
    }

    if let Some(begin) = start {
        words.push(&src[begin..]);
    }

    words
}

/// Case-insensitive check that `src` begins with the given words, each one
/// ending at a word boundary and separated from the next by whitespace.
fn starts_with_words(src: &str, words: &[&str]) -> bool {
    let mut rest = src;

    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            let trimmed = rest.trim_start();
            if trimmed.len() == rest.len() {
                return false;
            }
            rest = trimmed;
        }

        let Some(head) = rest.get(..word.len()) else {
            return false;
        };

        if !head.eq_ignore_ascii_case(word) {
            return false;
        }

        rest = &rest[word.len()..];

        if rest
            .chars()
            .next()
            .is_some_and(|ch| ch.is_alphanumeric() || ch == '_')
        {
            return false;
        }
    }

    true
}
