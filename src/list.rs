use tracing::info;

use crate::error::Result;
use crate::geo::dat::geodat;
use crate::trie::DomainTrie;
use crate::types::{DomainRule, DomainType};

/// Rules collected for one named list.
///
/// Root domains are kept in parse order in `domain`; `unique_domain` holds
/// the ones surviving [`DomainList::deduplicate`] and is empty until then.
#[derive(Debug, Clone, Default)]
pub struct DomainList {
    name: String,
    full: Vec<DomainRule>,
    regexp: Vec<DomainRule>,
    domain: Vec<DomainRule>,
    unique_domain: Vec<DomainRule>,
}

impl DomainList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a rule to the bucket for its type.
    pub fn push(&mut self, rule: DomainRule) {
        match rule.kind() {
            DomainType::Full => self.full.push(rule),
            DomainType::RootDomain => self.domain.push(rule),
            DomainType::Regex => self.regexp.push(rule),
            DomainType::Plain => {}
        }
    }

    pub fn full(&self) -> &[DomainRule] {
        &self.full
    }

    pub fn regexp(&self) -> &[DomainRule] {
        &self.regexp
    }

    pub fn domain(&self) -> &[DomainRule] {
        &self.domain
    }

    pub fn unique_domain(&self) -> &[DomainRule] {
        &self.unique_domain
    }

    /// Total number of rules pushed so far.
    pub fn len(&self) -> usize {
        self.full.len() + self.domain.len() + self.regexp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop root domains already covered by a more general root domain.
    ///
    /// Domains are stably sorted by label count first so a parent is always
    /// accepted before any of its subdomains; ties keep their parse order.
    pub fn deduplicate(&mut self) -> Result<()> {
        self.domain.sort_by_key(DomainRule::label_count);

        let mut trie = DomainTrie::new();
        let mut unique = Vec::with_capacity(self.domain.len());
        for rule in &self.domain {
            if trie.insert(rule.value())? {
                unique.push(rule.clone());
            }
        }

        info!(
            list = %self.name,
            root_domains = self.domain.len(),
            unique = unique.len(),
            "deduplicated root domains"
        );
        self.unique_domain = unique;
        Ok(())
    }

    /// Final rule order: full, then unique root domains, then regexes.
    pub fn assemble(&self) -> Vec<DomainRule> {
        self.full
            .iter()
            .chain(&self.unique_domain)
            .chain(&self.regexp)
            .cloned()
            .collect()
    }

    /// Build the V2Ray geosite list with a single entry named after this list.
    pub fn to_geosite_list(&self) -> geodat::GeoSiteList {
        let site = geodat::GeoSite {
            country_code: self.name.clone(),
            domain: self.assemble().iter().map(DomainRule::to_proto).collect(),
        };
        geodat::GeoSiteList { entry: vec![site] }
    }

    /// Render the assembled rules as `full:`/`domain:`/`regexp:` lines.
    pub fn render_plaintext(&self) -> Vec<u8> {
        let mut out = String::new();
        for rule in self.assemble() {
            if let Some(line) = rule.to_plain_line() {
                out.push_str(&line);
                out.push('\n');
            }
        }
        out.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(rules: &[DomainRule]) -> Vec<&str> {
        rules.iter().map(DomainRule::value).collect()
    }

    #[test]
    fn test_push_by_type() {
        let mut list = DomainList::new("TEST");
        list.push(DomainRule::full("https://a.com"));
        list.push(DomainRule::root_domain("b.com"));
        list.push(DomainRule::regex(r"(.*\.)?c\.com"));
        list.push(DomainRule::new(DomainType::Plain, "ignored"));

        assert_eq!(list.full().len(), 1);
        assert_eq!(list.domain().len(), 1);
        assert_eq!(list.regexp().len(), 1);
        assert_eq!(list.len(), 3);
        assert!(list.unique_domain().is_empty());
    }

    #[test]
    fn test_deduplicate_drops_subdomain() {
        let mut list = DomainList::new("TEST");
        list.push(DomainRule::root_domain("ads.example.com"));
        list.push(DomainRule::root_domain("example.com"));
        list.deduplicate().unwrap();

        assert_eq!(values(list.unique_domain()), vec!["example.com"]);
        assert_eq!(list.domain().len(), 2);
    }

    #[test]
    fn test_deduplicate_keeps_tie_order() {
        let mut list = DomainList::new("TEST");
        for domain in ["c.com", "a.b.org", "a.com", "b.com", "x.a.com"] {
            list.push(DomainRule::root_domain(domain));
        }
        list.deduplicate().unwrap();

        assert_eq!(
            values(list.unique_domain()),
            vec!["c.com", "a.com", "b.com", "a.b.org"]
        );
    }

    #[test]
    fn test_deduplicate_exact_duplicates() {
        let mut list = DomainList::new("TEST");
        list.push(DomainRule::root_domain("example.com"));
        list.push(DomainRule::root_domain("example.com"));
        list.deduplicate().unwrap();
        assert_eq!(values(list.unique_domain()), vec!["example.com"]);
    }

    #[test]
    fn test_deduplicate_rerun_is_stable() {
        let mut list = DomainList::new("TEST");
        list.push(DomainRule::root_domain("example.com"));
        list.push(DomainRule::root_domain("www.example.com"));
        list.deduplicate().unwrap();
        list.deduplicate().unwrap();
        assert_eq!(values(list.unique_domain()), vec!["example.com"]);
    }

    #[test]
    fn test_deduplicate_empty_domain_fails() {
        let mut list = DomainList::new("TEST");
        list.push(DomainRule::root_domain(""));
        assert!(list.deduplicate().is_err());
    }

    #[test]
    fn test_assemble_order() {
        let mut list = DomainList::new("TEST");
        let regex = DomainRule::regex(r"(.*\.)?ads\.com");
        list.push(regex.clone());
        list.push(DomainRule::root_domain("sub.example.com"));
        list.push(DomainRule::full("https://example.org"));
        list.push(DomainRule::root_domain("example.com"));
        list.deduplicate().unwrap();

        assert_eq!(
            list.assemble(),
            vec![
                DomainRule::full("https://example.org"),
                DomainRule::root_domain("example.com"),
                regex,
            ]
        );
    }

    #[test]
    fn test_assemble_before_deduplicate_has_no_root_domains() {
        let mut list = DomainList::new("TEST");
        list.push(DomainRule::root_domain("example.com"));
        assert!(list.assemble().is_empty());
    }

    #[test]
    fn test_to_geosite_list() {
        let mut list = DomainList::new("ZAPRETINFO");
        list.push(DomainRule::full("https://example.org"));
        list.push(DomainRule::root_domain("example.com"));
        list.deduplicate().unwrap();

        let geosites = list.to_geosite_list();
        assert_eq!(geosites.entry.len(), 1);
        let site = &geosites.entry[0];
        assert_eq!(site.country_code, "ZAPRETINFO");
        assert_eq!(site.domain.len(), 2);
        assert_eq!(site.domain[0].r#type, DomainType::Full as i32);
        assert_eq!(site.domain[1].value, "example.com");
    }

    #[test]
    fn test_render_plaintext() {
        let mut list = DomainList::new("TEST");
        list.push(DomainRule::regex(r"(.*\.)?ads\.com"));
        list.push(DomainRule::root_domain("example.com"));
        list.push(DomainRule::full("https://example.org"));
        list.deduplicate().unwrap();

        let text = String::from_utf8(list.render_plaintext()).unwrap();
        assert_eq!(
            text,
            "full:https://example.org\ndomain:example.com\nregexp:(.*\\.)?ads\\.com\n"
        );
    }

    #[test]
    fn test_render_plaintext_skips_blank_values() {
        let mut list = DomainList::new("TEST");
        list.push(DomainRule::full("  "));
        list.push(DomainRule::root_domain("example.com"));
        list.deduplicate().unwrap();

        let text = String::from_utf8(list.render_plaintext()).unwrap();
        assert_eq!(text, "domain:example.com\n");
    }
}
