//! Regex-table tokenizer.
//!
//! An ordered list of anchored patterns is tried at the current position;
//! the first match wins and its action decides the token kind. Every pattern
//! matches at least one character and the final rule matches any character,
//! so the scan always makes progress and covers the whole input.

use once_cell::sync::Lazy;
use regex::Regex;

use super::keywords;
use super::token::{CommentKind, KeywordKind, NumberKind, StringKind, Token, TokenKind};

/// What to do with a rule's match.
#[derive(Clone, Copy)]
enum Action {
    /// Emit a token of this kind.
    Emit(TokenKind),
    /// Look the word up in the keyword table; emit a `Name` if absent.
    Word,
}

static RULES: Lazy<Vec<(Regex, Action)>> = Lazy::new(|| {
    fn rule(pattern: &str, action: Action) -> (Regex, Action) {
        // Patterns are fixed at compile time; a failure here is a programming
        // error caught by the unit tests below.
        (Regex::new(pattern).expect("invalid tokenizer rule"), action)
    }
    use Action::{Emit, Word};

    vec![
        rule(
            r"^(--|#)[^\r\n]*(\r\n|\r|\n)?",
            Emit(TokenKind::Comment(CommentKind::Line)),
        ),
        rule(
            r"^/\*[\s\S]*?\*/",
            Emit(TokenKind::Comment(CommentKind::Multiline)),
        ),
        rule(r"^(\r\n|\r|\n)+", Emit(TokenKind::Whitespace)),
        rule(r"^[ \t\f]+", Emit(TokenKind::Whitespace)),
        rule(r"^:=", Emit(TokenKind::Assignment)),
        rule(r"^::", Emit(TokenKind::Punctuation)),
        rule(r"^\*", Emit(TokenKind::Wildcard)),
        rule(r"^%\(\w+\)s", Emit(TokenKind::Placeholder)),
        rule(r"^\?", Emit(TokenKind::Placeholder)),
        rule(r"^[$:@]\w+", Emit(TokenKind::Placeholder)),
        rule(
            r"^(?i)END\s+(IF|LOOP)\b",
            Emit(TokenKind::Keyword(KeywordKind::Plain)),
        ),
        rule(
            r"^(?i)NOT\s+NULL\b",
            Emit(TokenKind::Keyword(KeywordKind::Plain)),
        ),
        rule(
            r"^'(?:[^'\\]|\\.|'')*'",
            Emit(TokenKind::String(StringKind::Single)),
        ),
        rule(
            r#"^"(?:[^"\\]|\\.|"")*""#,
            Emit(TokenKind::String(StringKind::Symbol)),
        ),
        rule(r"^-?\d+\.\d+", Emit(TokenKind::Number(NumberKind::Float))),
        rule(r"^-?\d+", Emit(TokenKind::Number(NumberKind::Integer))),
        rule(r"^[a-zA-Z_]\w*", Word),
        rule(r"^[<>=~!]+", Emit(TokenKind::Comparison)),
        rule(r"^[+\-/%^&|`~@]+", Emit(TokenKind::Operator)),
        rule(r"^[();\[\],\.:]", Emit(TokenKind::Punctuation)),
        rule(r"(?s)^.", Emit(TokenKind::Error)),
    ]
});

/// Splits `input` into classified tokens.
///
/// The scan is total: it never fails, unknown characters become
/// [`TokenKind::Error`] tokens, and concatenating the returned token values
/// reproduces `input` exactly.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = input;
    while !rest.is_empty() {
        let token = next_token(rest);
        rest = &rest[token.value.len()..];
        tokens.push(token);
    }
    tokens
}

fn next_token(rest: &str) -> Token {
    for (pattern, action) in RULES.iter() {
        if let Some(found) = pattern.find(rest) {
            let text = found.as_str();
            let kind = match action {
                Action::Emit(kind) => *kind,
                Action::Word => keywords::keyword_kind(text)
                    .map_or(TokenKind::Name, TokenKind::Keyword),
            };
            return Token::new(kind, text);
        }
    }
    // Unreachable given the catch-all rule, but keep the scan total anyway.
    let len = rest.chars().next().map_or(1, char::len_utf8);
    Token::new(TokenKind::Error, &rest[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(sql: &str) -> Vec<TokenKind> {
        tokenize(sql).into_iter().map(|t| t.kind).collect()
    }

    fn rejoined(sql: &str) -> String {
        tokenize(sql).iter().map(|t| t.value.as_str()).collect()
    }

    #[test]
    fn test_simple_statement() {
        assert_eq!(
            kinds("SELECT * FROM t;"),
            vec![
                TokenKind::Keyword(KeywordKind::Dml),
                TokenKind::Whitespace,
                TokenKind::Wildcard,
                TokenKind::Whitespace,
                TokenKind::Keyword(KeywordKind::Plain),
                TokenKind::Whitespace,
                TokenKind::Name,
                TokenKind::Punctuation,
            ]
        );
    }

    #[test]
    fn test_operators_and_punctuation() {
        assert_eq!(
            kinds("a := b :: c = d"),
            vec![
                TokenKind::Name,
                TokenKind::Whitespace,
                TokenKind::Assignment,
                TokenKind::Whitespace,
                TokenKind::Name,
                TokenKind::Whitespace,
                TokenKind::Punctuation,
                TokenKind::Whitespace,
                TokenKind::Name,
                TokenKind::Whitespace,
                TokenKind::Comparison,
                TokenKind::Whitespace,
                TokenKind::Name,
            ]
        );
    }

    #[test]
    fn test_comments() {
        let tokens = tokenize("x -- note\ny /* block */ z");
        assert_eq!(tokens[2].kind, TokenKind::Comment(CommentKind::Line));
        assert_eq!(tokens[2].value, "-- note\n");
        assert_eq!(tokens[5].kind, TokenKind::Comment(CommentKind::Multiline));
        assert_eq!(tokens[5].value, "/* block */");
    }

    #[test]
    fn test_compound_keywords() {
        let tokens = tokenize("END IF");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Keyword(KeywordKind::Plain));
        assert_eq!(tokens[0].value, "END IF");

        let tokens = tokenize("end loop");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value, "end loop");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(kinds("?"), vec![TokenKind::Placeholder]);
        assert_eq!(kinds(":name"), vec![TokenKind::Placeholder]);
        assert_eq!(kinds("%(name)s"), vec![TokenKind::Placeholder]);
        assert_eq!(kinds("$1"), vec![TokenKind::Placeholder]);
    }

    #[test]
    fn test_literals() {
        assert_eq!(kinds("1"), vec![TokenKind::Number(NumberKind::Integer)]);
        assert_eq!(kinds("3.14"), vec![TokenKind::Number(NumberKind::Float)]);
        assert_eq!(kinds("'it''s'"), vec![TokenKind::String(StringKind::Single)]);
        assert_eq!(kinds("\"col\""), vec![TokenKind::String(StringKind::Symbol)]);
    }

    #[test]
    fn test_lossless_on_broken_input() {
        for sql in [
            "'unterminated",
            "/* unterminated",
            "SELECT \u{1F980} FROM t",
            "(((",
            "a\u{0}b",
        ] {
            assert_eq!(rejoined(sql), sql);
        }
    }
}
