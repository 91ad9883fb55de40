//! Label trie for dropping subdomains of already accepted root domains.

use std::collections::HashMap;

use crate::error::{GeositeError, Result};

/// Node in the label trie
#[derive(Debug, Default)]
struct Node {
    /// An accepted domain ends here; everything below is subsumed.
    terminal: bool,
    children: HashMap<String, Node>,
}

/// Trie keyed by domain labels, TLD first.
///
/// Domains must be inserted fewest labels first: `example.com` has to be
/// accepted before `ads.example.com` for the latter to be seen as redundant.
#[derive(Debug, Default)]
pub struct DomainTrie {
    root: Node,
}

impl DomainTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a domain.
    ///
    /// Returns `true` if the domain was newly accepted and `false` if an
    /// accepted domain already covers it. A rejected insert leaves the trie
    /// untouched.
    pub fn insert(&mut self, domain: &str) -> Result<bool> {
        if domain.is_empty() {
            return Err(GeositeError::EmptyDomain);
        }

        let mut node = &mut self.root;
        let mut labels = domain.rsplit('.').peekable();
        while let Some(label) = labels.next() {
            if node.terminal {
                return Ok(false);
            }
            if !node.children.contains_key(label) {
                let last = labels.peek().is_none();
                node.children.insert(
                    label.to_string(),
                    Node {
                        terminal: last,
                        children: HashMap::new(),
                    },
                );
                if last {
                    return Ok(true);
                }
            }
            node = match node.children.get_mut(label) {
                Some(child) => child,
                None => return Ok(false),
            };
        }
        Ok(false)
    }
}
