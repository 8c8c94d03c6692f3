//! Built-in highlighting modes.
//!
//! Each mode is a fixed [`Grammar`]; category order is significant because
//! ties at the same offset go to the category declared first.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SqaullError;
use crate::tagger::{Grammar, PatternCategory, Tag};

/// Clause keywords, classic and Gen Alpha spellings.
const DSL_KEYWORDS: &str = r"((?:from|sel|whr|ord|lim|off|grp|hav|join|on|ins|cols|vals|upd|set|del|ret|main|slay|sus|vibe|bet|skip|squad|tea|link|match|nocap|drip|fire|glow|rizz|yeet|flex|fam|with):)";
const DSL_MODIFIERS: &str = r"(/desc|/asc|/left|/right|/full)";
const DSL_FUNCTIONS: &str = r"((?:sum|cnt|avg|min|max):)";

const SQL_KEYWORDS: &str = r"\b(SELECT|FROM|WHERE|ORDER BY|DESC|ASC|LIMIT|OFFSET|GROUP BY|HAVING|JOIN|LEFT|RIGHT|FULL|INNER|ON|INSERT INTO|VALUES|UPDATE|SET|DELETE|RETURNING|AND|OR|IN|IS|NULL|NOT|SUM|COUNT|AVG|MIN|MAX)\b";
const SQL_PARAMS: &str = r"(\$\d+)";

// The landing-page terminal tries these at every position, so there is no
// leading word boundary and the keyword list is shorter.
const TERMINAL_KEYWORDS: &str = r"(SELECT|FROM|WHERE|ORDER BY|DESC|ASC|LIMIT|OFFSET|GROUP BY|HAVING|JOIN|LEFT|RIGHT|FULL|ON|INSERT INTO|VALUES|UPDATE|SET|DELETE|RETURNING)\b";
const TERMINAL_STAR: &str = r"(\*)";

const TEMPLATE_TAG: &str = r"(cook)`";
const TEMPLATE_NUMBERS: &str = r"(\d+)";

/// Which category set to tag with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Query-builder strings such as `main:users slay:*`.
    Dsl,
    /// Compiled SQL as shown in the output panes.
    Sql,
    /// Tagged templates: ``cook`main:users bet:10` ``.
    Template,
    /// SQL as the landing-page terminal replays it; `*` is an operator.
    TerminalSql,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Dsl, Mode::Sql, Mode::Template, Mode::TerminalSql];

    /// The grammar for this mode. Built once, shared across threads.
    pub fn grammar(self) -> &'static Grammar {
        match self {
            Mode::Dsl => &DSL,
            Mode::Sql => &SQL,
            Mode::Template => &TEMPLATE,
            Mode::TerminalSql => &TERMINAL_SQL,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Dsl => write!(f, "dsl"),
            Mode::Sql => write!(f, "sql"),
            Mode::Template => write!(f, "template"),
            Mode::TerminalSql => write!(f, "terminal-sql"),
        }
    }
}

impl FromStr for Mode {
    type Err = SqaullError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dsl" | "genaql" => Ok(Mode::Dsl),
            "sql" => Ok(Mode::Sql),
            "template" | "cook" => Ok(Mode::Template),
            "terminal-sql" | "terminal" => Ok(Mode::TerminalSql),
            _ => Err(SqaullError::UnknownMode(s.to_string())),
        }
    }
}

// Patterns are constants; test_builtin_grammars_compile covers them.
fn builtin(name: &str, tag: Tag, pattern: &str) -> PatternCategory {
    match PatternCategory::new(name, tag, pattern) {
        Ok(category) => category,
        Err(e) => panic!("built-in category is malformed: {}", e),
    }
}

static DSL: Lazy<Grammar> = Lazy::new(|| {
    Grammar::default()
        .with(builtin("keyword", Tag::Keyword, DSL_KEYWORDS))
        .with(builtin("modifier", Tag::Operator, DSL_MODIFIERS))
        .with(builtin("function", Tag::Function, DSL_FUNCTIONS))
});

static SQL: Lazy<Grammar> = Lazy::new(|| {
    Grammar::default()
        .with(builtin("keyword", Tag::Keyword, SQL_KEYWORDS))
        .with(builtin("param", Tag::Number, SQL_PARAMS))
});

static TEMPLATE: Lazy<Grammar> = Lazy::new(|| {
    Grammar::default()
        .with(builtin("template", Tag::Function, TEMPLATE_TAG))
        .with(builtin("keyword", Tag::Keyword, DSL_KEYWORDS))
        .with(builtin("number", Tag::Number, TEMPLATE_NUMBERS))
        .with(builtin("modifier", Tag::Operator, DSL_MODIFIERS))
});

static TERMINAL_SQL: Lazy<Grammar> = Lazy::new(|| {
    Grammar::default()
        .with(builtin("keyword", Tag::Keyword, TERMINAL_KEYWORDS))
        .with(builtin("param", Tag::Number, SQL_PARAMS))
        .with(builtin("operator", Tag::Operator, TERMINAL_STAR))
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::tag;
    use pretty_assertions::assert_eq;

    fn tagged(source: &str, mode: Mode) -> Vec<(&str, Tag)> {
        tag(source, mode)
            .into_iter()
            .filter_map(|f| f.tag.map(|t| (f.text, t)))
            .collect()
    }

    #[test]
    fn test_builtin_grammars_compile() {
        for mode in Mode::ALL {
            assert!(!mode.grammar().categories().is_empty());
        }
    }

    #[test]
    fn test_category_order() {
        let names: Vec<&str> = Mode::Dsl
            .grammar()
            .categories()
            .iter()
            .map(|c| c.name())
            .collect();
        assert_eq!(names, vec!["keyword", "modifier", "function"]);
    }

    #[test]
    fn test_dsl_leaves_operators_and_numbers_plain() {
        assert_eq!(tagged("sus:age>18", Mode::Dsl), vec![("sus:", Tag::Keyword)]);
    }

    #[test]
    fn test_dsl_modifiers_and_functions() {
        assert_eq!(
            tagged("main:posts vibe:views/desc squad:author tea:cnt:id", Mode::Dsl),
            vec![
                ("main:", Tag::Keyword),
                ("vibe:", Tag::Keyword),
                ("/desc", Tag::Operator),
                ("squad:", Tag::Keyword),
                ("tea:", Tag::Keyword),
                ("cnt:", Tag::Function),
            ]
        );
    }

    #[test]
    fn test_dsl_keyword_without_word_boundary() {
        // "session:" ends in "on:", which the site highlights as well.
        assert_eq!(tagged("session:x", Mode::Dsl), vec![("on:", Tag::Keyword)]);
    }

    #[test]
    fn test_sql_multiword_keywords() {
        assert_eq!(
            tagged("SELECT title FROM posts ORDER BY views DESC LIMIT 5", Mode::Sql),
            vec![
                ("SELECT", Tag::Keyword),
                ("FROM", Tag::Keyword),
                ("ORDER BY", Tag::Keyword),
                ("DESC", Tag::Keyword),
                ("LIMIT", Tag::Keyword),
            ]
        );
    }

    #[test]
    fn test_sql_word_boundary() {
        // ON inside an identifier stays plain
        assert_eq!(tagged("SELECT ONLINE", Mode::Sql), vec![("SELECT", Tag::Keyword)]);
    }

    #[test]
    fn test_sql_leaves_star_plain() {
        let fragments = tag("DELETE FROM sessions WHERE expired = $1 RETURNING *", Mode::Sql);
        let star = fragments.iter().find(|f| f.text == "*");
        assert_eq!(star.map(|f| f.tag), Some(None));
    }

    #[test]
    fn test_terminal_sql_tags_star() {
        let source = "DELETE FROM sessions WHERE expired = $1 RETURNING *";
        assert_eq!(
            tagged(source, Mode::TerminalSql),
            vec![
                ("DELETE", Tag::Keyword),
                ("FROM", Tag::Keyword),
                ("WHERE", Tag::Keyword),
                ("$1", Tag::Number),
                ("RETURNING", Tag::Keyword),
                ("*", Tag::Operator),
            ]
        );
        assert!(!tagged(source, Mode::Sql).contains(&("*", Tag::Operator)));
    }

    #[test]
    fn test_terminal_sql_keyword_list() {
        // AND and COUNT are only in the docs-page list
        assert_eq!(
            tagged("SELECT COUNT(*) WHERE a AND b", Mode::TerminalSql),
            vec![
                ("SELECT", Tag::Keyword),
                ("*", Tag::Operator),
                ("WHERE", Tag::Keyword),
            ]
        );
        // no leading boundary: the ON ending JSON is a keyword here
        assert_eq!(tagged("JSON x", Mode::TerminalSql), vec![("ON", Tag::Keyword)]);
        assert!(tagged("JSON x", Mode::Sql).is_empty());
    }

    #[test]
    fn test_template_mode() {
        assert_eq!(
            tagged("cook`main:users bet:10`", Mode::Template),
            vec![
                ("cook", Tag::Function),
                ("main:", Tag::Keyword),
                ("bet:", Tag::Keyword),
                ("10", Tag::Number),
            ]
        );
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("SQL".parse::<Mode>().unwrap(), Mode::Sql);
        assert_eq!("genaql".parse::<Mode>().unwrap(), Mode::Dsl);
        assert_eq!("Terminal-SQL".parse::<Mode>().unwrap(), Mode::TerminalSql);
        assert!(matches!(
            "xml".parse::<Mode>(),
            Err(SqaullError::UnknownMode(m)) if m == "xml"
        ));
    }

    #[test]
    fn test_mode_display_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }
}
