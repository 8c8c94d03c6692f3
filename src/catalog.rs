//! Pre-baked examples shown on the site.
//!
//! The SQL next to each example is a literal. "Compiling" an example in the
//! playground is a lookup, never a translation.

use serde::Serialize;

use crate::error::{SqaullError, SqaullResult};
use crate::prefs::SyntaxMode;

/// A playground example in both spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Example {
    pub name: &'static str,
    pub emoji: &'static str,
    pub classic: &'static str,
    pub gen_alpha: &'static str,
    pub sql: &'static str,
}

impl Example {
    /// The query-builder text for the chosen spelling.
    pub fn source(&self, syntax: SyntaxMode) -> &'static str {
        match syntax {
            SyntaxMode::Classic => self.classic,
            SyntaxMode::GenAlpha => self.gen_alpha,
        }
    }
}

/// A tagged-template example from the landing-page terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TerminalExample {
    pub label: &'static str,
    pub template: &'static str,
    pub sql: &'static str,
}

const PLAYGROUND: &[Example] = &[
    Example {
        name: "Basic Query",
        emoji: "🔍",
        classic: "from:users sel:name,email whr:age>18",
        gen_alpha: "main:users slay:name,email sus:age>18",
        sql: "SELECT name, email FROM users WHERE age > 18",
    },
    Example {
        name: "Sorting",
        emoji: "📊",
        classic: "from:posts sel:title,views ord:views/desc lim:5",
        gen_alpha: "main:posts slay:title,views vibe:views/desc bet:5",
        sql: "SELECT title, views FROM posts ORDER BY views DESC LIMIT 5",
    },
    Example {
        name: "Insert",
        emoji: "➕",
        classic: "ins:users cols:name,email vals:john,john@test.com ret:id",
        gen_alpha: "nocap:users drip:name,email fire:john,john@test.com flex:id",
        sql: "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id",
    },
    Example {
        name: "Update",
        emoji: "✏️",
        classic: "upd:users set:verified=true whr:id=1 ret:*",
        gen_alpha: "glow:users rizz:verified=true sus:id=1 flex:*",
        sql: "UPDATE users SET verified = $1 WHERE id = $2 RETURNING *",
    },
    Example {
        name: "Delete",
        emoji: "🗑️",
        classic: "del:sessions whr:expired=true",
        gen_alpha: "yeet:sessions sus:expired=true",
        sql: "DELETE FROM sessions WHERE expired = $1",
    },
    Example {
        name: "Join",
        emoji: "🔗",
        classic: "from:orders join:users/left on:orders.user_id=users.id sel:*",
        gen_alpha: "main:orders link:users/left match:orders.user_id=users.id slay:*",
        sql: "SELECT * FROM orders LEFT JOIN users ON orders.user_id = users.id",
    },
];

const TERMINAL: &[TerminalExample] = &[
    TerminalExample {
        label: "SELECT",
        template: "cook`main:users slay:name,email sus:age>18 vibe:created_at/desc bet:10`",
        sql: "SELECT name, email FROM users WHERE age > 18 ORDER BY created_at DESC LIMIT 10",
    },
    TerminalExample {
        label: "INSERT",
        template: "cook`nocap:users drip:name,email fire:john,john@test.com flex:id`",
        sql: "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id",
    },
    TerminalExample {
        label: "UPDATE",
        template: "cook`glow:users rizz:status=active sus:id=1 flex:*`",
        sql: "UPDATE users SET status = $1 WHERE id = $2 RETURNING *",
    },
    TerminalExample {
        label: "DELETE",
        template: "cook`yeet:sessions sus:expired=true`",
        sql: "DELETE FROM sessions WHERE expired = $1",
    },
    TerminalExample {
        label: "JOIN",
        template: "cook`main:orders link:users/left match:orders.user_id=users.id slay:*`",
        sql: "SELECT * FROM orders LEFT JOIN users ON orders.user_id = users.id",
    },
];

/// All playground examples, in display order.
pub fn playground() -> &'static [Example] {
    PLAYGROUND
}

/// All terminal examples, in playback order.
pub fn terminal() -> &'static [TerminalExample] {
    TERMINAL
}

/// Find a playground example by name, ignoring case.
pub fn find_playground(name: &str) -> SqaullResult<&'static Example> {
    let found = PLAYGROUND
        .iter()
        .find(|ex| ex.name.eq_ignore_ascii_case(name.trim()));

    match found {
        Some(ex) => {
            tracing::debug!("Found playground example '{}'", ex.name);
            Ok(ex)
        }
        None => {
            tracing::debug!("No playground example named '{}'", name);
            Err(SqaullError::UnknownExample(name.to_string()))
        }
    }
}
