//! The dialect classification table.
//!
//! The grouping engine treats this module as configuration: it reads the
//! keyword classes and the WHERE-terminator set but defines neither. Swapping
//! in a dialect-specific table changes how tokens are pre-classified without
//! touching the engine.

use super::token::KeywordKind;

/// Keywords that terminate a WHERE clause when they appear at the same
/// nesting level as the opening `WHERE`.
pub const WHERE_CLOSERS: &[&str] = &["ORDER", "GROUP", "LIMIT", "UNION", "EXCEPT", "HAVING"];

/// Classifies a bare word, returning `None` for plain identifiers.
///
/// Type names such as `VARCHAR` are intentionally absent: they must stay
/// names so that `VARCHAR(10)` forms a function group.
#[must_use]
pub fn keyword_kind(word: &str) -> Option<KeywordKind> {
    match word.to_ascii_uppercase().as_str() {
        "SELECT" | "INSERT" | "UPDATE" | "DELETE" | "MERGE" | "REPLACE" => {
            Some(KeywordKind::Dml)
        }
        "CREATE" | "DROP" | "ALTER" | "TRUNCATE" => Some(KeywordKind::Ddl),
        "ASC" | "DESC" => Some(KeywordKind::Order),
        "WHERE" | "FROM" | "AS" | "CASE" | "WHEN" | "THEN" | "ELSE" | "END" | "IF" | "FOR"
        | "FOREACH" | "LOOP" | "BEGIN" | "COMMIT" | "ROLLBACK" | "DECLARE" | "RETURN"
        | "WHILE" | "ELSIF" | "NULL" | "GROUP" | "ORDER" | "BY" | "LIMIT" | "OFFSET"
        | "UNION" | "EXCEPT" | "INTERSECT" | "HAVING" | "DISTINCT" | "ALL" | "AND" | "OR"
        | "NOT" | "IN" | "IS" | "LIKE" | "BETWEEN" | "EXISTS" | "JOIN" | "INNER" | "LEFT"
        | "RIGHT" | "OUTER" | "FULL" | "CROSS" | "ON" | "USING" | "INTO" | "VALUES" | "SET"
        | "ROLE" | "TABLE" | "VIEW" | "INDEX" | "PRIMARY" | "KEY" | "FOREIGN" | "REFERENCES"
        | "DEFAULT" | "CHECK" | "UNIQUE" | "CONSTRAINT" => Some(KeywordKind::Plain),
        _ => None,
    }
}
