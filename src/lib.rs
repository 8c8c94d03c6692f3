//! # sqaull — docs-site highlighting
//!
//! > **SQL that hits different.**
//!
//! Tags query-builder strings and their pre-baked SQL for styled display,
//! and carries the examples and slang reference the docs are built from.
//! Nothing here parses or runs a query; every SQL string is a literal.
//!
//! ## Quick Example
//!
//! ```rust
//! use sqaull::prelude::*;
//!
//! let fragments = sqaull::tag("main:users slay:* sus:age>18", Mode::Dsl);
//! assert_eq!(fragments[0].text, "main:");
//! assert_eq!(fragments[0].tag, Some(Tag::Keyword));
//!
//! let html = HtmlRenderer.highlight("SELECT * FROM users", Mode::Sql);
//! assert!(html.starts_with("<span class=\"code-keyword\">SELECT</span>"));
//! ```
//!
//! ## Modes
//!
//! | Mode           | Input                         | Categories (scan order)             |
//! |----------------|-------------------------------|-------------------------------------|
//! | `dsl`          | `main:users vibe:id/desc`     | keyword, modifier, function         |
//! | `sql`          | `SELECT * FROM users`         | keyword, param                      |
//! | `template`     | ``cook`main:users bet:10` ``  | template, keyword, number, modifier |
//! | `terminal-sql` | `DELETE FROM t RETURNING *`   | keyword, param, operator            |

pub mod catalog;
pub mod config;
pub mod error;
pub mod modes;
pub mod prefs;
pub mod render;
pub mod slang;
pub mod tagger;

pub use modes::Mode;
pub use tagger::{Fragment, Tag, tag};

pub mod prelude {
    pub use crate::catalog::{Example, TerminalExample};
    pub use crate::error::*;
    pub use crate::modes::Mode;
    pub use crate::prefs::{Preferences, SyntaxMode, Theme};
    pub use crate::render::{AnsiRenderer, CodeBlock, HtmlRenderer, Render};
    pub use crate::tagger::{Fragment, Grammar, PatternCategory, Tag, merge_plain, tag};
}
