//! Line-pattern rules for recognizing declarations.
//!
//! Rules are tried in priority order and the first match wins for a line,
//! so more specific forms (`export function`) sit ahead of generic ones.
//! The method rule is last since it matches almost any call-like line.

use crate::models::Kind;
use regex::Regex;
use std::sync::LazyLock;

/// Identifiers that the method rule picks up from control-flow statements.
pub const KEYWORD_DENYLIST: [&str; 5] = ["if", "for", "while", "switch", "catch"];

/// A pattern with the kind and label recorded when it matches.
#[derive(Debug, Clone)]
pub struct Rule {
    pub pattern: Regex,
    pub kind: Kind,
    pub label: &'static str,
}

impl Rule {
    fn new(pattern: &str, kind: Kind, label: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("builtin rule: invalid regex"),
            kind,
            label,
        }
    }

    /// Identifier captured by this rule on `line`, if it matches.
    pub fn capture<'l>(&self, line: &'l str) -> Option<&'l str> {
        self.pattern
            .captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }
}

static BUILTIN_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(
            r"^\s*export\s+(?:default\s+)?(?:async\s+)?function\s+(\w+)",
            Kind::Function,
            "export function",
        ),
        Rule::new(
            r"^\s*(?:export\s+)?(?:async\s+)?function\s+(\w+)",
            Kind::Function,
            "function",
        ),
        Rule::new(
            r"^\s*export\s+(?:default\s+)?const\s+(\w+)\s*=\s*(?:async\s*)?\(",
            Kind::Function,
            "const function",
        ),
        Rule::new(
            r"^\s*const\s+(\w+)\s*=\s*(?:async\s*)?\(",
            Kind::Function,
            "const function",
        ),
        Rule::new(r"^\s*export\s+class\s+(\w+)", Kind::Class, "class"),
        Rule::new(r"^\s*class\s+(\w+)", Kind::Class, "class"),
        Rule::new(r"^\s*export\s+interface\s+(\w+)", Kind::Interface, "interface"),
        Rule::new(r"^\s*interface\s+(\w+)", Kind::Interface, "interface"),
        Rule::new(r"^\s*export\s+type\s+(\w+)", Kind::Type, "type"),
        Rule::new(r"^\s*type\s+(\w+)", Kind::Type, "type"),
        Rule::new(
            r"^\s*(?:private|protected|public)?\s*(?:static\s+)?(?:async\s+)?(\w+)\s*\(",
            Kind::Method,
            "method",
        ),
    ]
});

/// Builtin rules in priority order.
pub fn builtin_rules() -> &'static [Rule] {
    &BUILTIN_RULES
}

/// First rule matching `line` together with its captured identifier.
///
/// Denylisted identifiers are returned as-is; callers decide whether to
/// record them. Lower-priority rules are never consulted once one matches.
pub fn first_match<'r, 'l>(rules: &'r [Rule], line: &'l str) -> Option<(&'r Rule, &'l str)> {
    rules
        .iter()
        .find_map(|rule| rule.capture(line).map(|name| (rule, name)))
}

pub fn is_denylisted(name: &str) -> bool {
    KEYWORD_DENYLIST.contains(&name)
}
