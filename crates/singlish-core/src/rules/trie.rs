use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::{parse_rules_toml, RuleConfigError};
use super::table::DEFAULT_TOML;
use super::RuleEntry;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Debug, PartialEq)]
pub enum TrieLookupResult<'a> {
    None,
    Prefix,
    Exact(&'a RuleEntry),
    ExactAndPrefix(&'a RuleEntry),
}

/// One rule whose pattern matches at the start of the queried input.
#[derive(Debug, Clone, Copy)]
pub struct PrefixMatch<'a> {
    /// Matched length in characters.
    pub len: usize,
    /// How many uppercase input characters matched a lowercase pattern.
    pub folded: usize,
    pub entry: &'a RuleEntry,
}

struct Node {
    children: HashMap<char, Node>,
    entry: Option<usize>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            entry: None,
        }
    }
}

pub struct RuleTrie {
    root: Node,
    entries: Vec<RuleEntry>,
}

impl RuleTrie {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RuleConfigError> {
        // Validate eagerly
        parse_rules_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RuleConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RuleTrie {
        static INSTANCE: OnceLock<RuleTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            RuleTrie::from_toml(toml_str).expect("rule table TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, RuleConfigError> {
        Ok(Self::from_entries(parse_rules_toml(toml_str)?))
    }

    /// Build a trie from entries. When two entries share a pattern the one
    /// with higher priority is kept; on equal priority the first wins.
    pub fn from_entries(entries: Vec<RuleEntry>) -> Self {
        let mut root = Node::new();
        for (idx, entry) in entries.iter().enumerate() {
            let mut node = &mut root;
            for c in entry.pattern.chars() {
                node = node.children.entry(c).or_insert_with(Node::new);
            }
            match node.entry {
                Some(existing) if entries[existing].priority >= entry.priority => {}
                _ => node.entry = Some(idx),
            }
        }
        RuleTrie { root, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact, case-sensitive lookup of a complete pattern.
    pub fn lookup(&self, pattern: &str) -> TrieLookupResult<'_> {
        let mut node = &self.root;
        for c in pattern.chars() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => return TrieLookupResult::None,
            }
        }
        let has_children = !node.children.is_empty();
        match node.entry.map(|idx| &self.entries[idx]) {
            Some(entry) if has_children => TrieLookupResult::ExactAndPrefix(entry),
            Some(entry) => TrieLookupResult::Exact(entry),
            None if has_children => TrieLookupResult::Prefix,
            None => TrieLookupResult::None,
        }
    }

    /// True if some rule can begin with `c`, directly or case-folded.
    pub fn can_start(&self, c: char) -> bool {
        self.root.children.contains_key(&c)
            || (c.is_ascii_uppercase() && self.root.children.contains_key(&c.to_ascii_lowercase()))
    }

    /// All rules whose pattern is a prefix of `input`, best first.
    ///
    /// Uppercase input characters also match lowercase patterns. Ordering is
    /// longest pattern first, then fewest case folds, then highest priority.
    pub fn prefix_matches(&self, input: &[char]) -> Vec<PrefixMatch<'_>> {
        let mut found = Vec::new();
        let mut stack = vec![(&self.root, 0usize, 0usize)];

        while let Some((node, depth, folded)) = stack.pop() {
            if depth > 0 {
                if let Some(idx) = node.entry {
                    found.push(PrefixMatch {
                        len: depth,
                        folded,
                        entry: &self.entries[idx],
                    });
                }
            }
            let Some(&c) = input.get(depth) else {
                continue;
            };
            if let Some(child) = node.children.get(&c) {
                stack.push((child, depth + 1, folded));
            }
            if c.is_ascii_uppercase() {
                if let Some(child) = node.children.get(&c.to_ascii_lowercase()) {
                    stack.push((child, depth + 1, folded + 1));
                }
            }
        }

        found.sort_by(|a, b| {
            b.len
                .cmp(&a.len)
                .then(a.folded.cmp(&b.folded))
                .then(b.entry.priority.cmp(&a.entry.priority))
        });
        found
    }
}
