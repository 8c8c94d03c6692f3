//! Gen Alpha slang reference.
//!
//! Both spellings produce the same SQL; this table is what the docs print
//! next to each other.

use serde::Serialize;

/// One keyword pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlangEntry {
    pub gen_alpha: &'static str,
    pub classic: &'static str,
    pub sql: &'static str,
    pub vibe: &'static str,
}

const fn entry(
    gen_alpha: &'static str,
    classic: &'static str,
    sql: &'static str,
    vibe: &'static str,
) -> SlangEntry {
    SlangEntry {
        gen_alpha,
        classic,
        sql,
        vibe,
    }
}

const REFERENCE: &[SlangEntry] = &[
    entry("main:", "from:", "FROM", "Main character table"),
    entry("slay:", "sel:", "SELECT", "Slay those columns"),
    entry("sus:", "whr:", "WHERE", "Filter the sus rows"),
    entry("vibe:", "ord:", "ORDER BY", "Vibe check the order"),
    entry("bet:", "lim:", "LIMIT", "Bet, only this many"),
    entry("skip:", "off:", "OFFSET", "Skip these"),
    entry("squad:", "grp:", "GROUP BY", "Squad up by column"),
    entry("tea:", "hav:", "HAVING", "Spill the tea"),
    entry("link:", "join:", "JOIN", "Link up tables"),
    entry("match:", "on:", "ON", "Match condition"),
    entry("nocap:", "ins:", "INSERT", "No cap, for real inserting"),
    entry("drip:", "cols:", "(columns)", "The drip (columns)"),
    entry("fire:", "vals:", "VALUES", "Fire values"),
    entry("glow:", "upd:", "UPDATE", "Glow up the data"),
    entry("rizz:", "set:", "SET", "Apply the rizz"),
    entry("yeet:", "del:", "DELETE", "Yeet into the void"),
    entry("flex:", "ret:", "RETURNING", "Flex what you got back"),
    entry("fam:", "with:", "(eager load)", "Bring the fam (relations)"),
];

/// The full table, in docs order.
pub fn reference() -> &'static [SlangEntry] {
    REFERENCE
}

/// Look up a keyword in either spelling; the trailing colon is optional.
pub fn lookup(keyword: &str) -> Option<&'static SlangEntry> {
    let key = keyword.trim().trim_end_matches(':');
    if key.is_empty() {
        return None;
    }
    REFERENCE.iter().find(|e| {
        e.gen_alpha.trim_end_matches(':') == key || e.classic.trim_end_matches(':') == key
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::Mode;
    use crate::tagger::{Tag, tag};

    #[test]
    fn test_lookup_both_spellings() {
        assert_eq!(lookup("rizz:").map(|e| e.classic), Some("set:"));
        assert_eq!(lookup("set").map(|e| e.gen_alpha), Some("rizz:"));
        assert_eq!(lookup("vibe").map(|e| e.sql), Some("ORDER BY"));
    }

    #[test]
    fn test_lookup_missing() {
        assert!(lookup("cook").is_none());
        assert!(lookup(":").is_none());
    }

    #[test]
    fn test_every_keyword_highlights() {
        for e in reference() {
            for word in [e.gen_alpha, e.classic] {
                let fragments = tag(word, Mode::Dsl);
                assert_eq!(fragments.len(), 1, "{}", word);
                assert_eq!(fragments[0].tag, Some(Tag::Keyword), "{}", word);
            }
        }
    }
}
