use crate::geo::dat::geodat;

pub use crate::geo::dat::geodat::domain::Type as DomainType;

/// A classified domain rule.
///
/// Immutable once built: `value` is the exact string for `Full`, the suffix
/// for `RootDomain` and the regex source for `Regex`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainRule {
    kind: DomainType,
    value: String,
}

impl DomainRule {
    pub fn new(kind: DomainType, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn full(value: impl Into<String>) -> Self {
        Self::new(DomainType::Full, value)
    }

    pub fn root_domain(value: impl Into<String>) -> Self {
        Self::new(DomainType::RootDomain, value)
    }

    pub fn regex(value: impl Into<String>) -> Self {
        Self::new(DomainType::Regex, value)
    }

    pub fn kind(&self) -> DomainType {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of dot-separated labels in the value.
    pub fn label_count(&self) -> usize {
        self.value.split('.').count()
    }

    /// Plaintext line for this rule, or `None` when the value is blank
    /// or the type has no plaintext prefix.
    pub fn to_plain_line(&self) -> Option<String> {
        let value = self.value.trim();
        if value.is_empty() {
            return None;
        }
        let prefix = match self.kind {
            DomainType::Full => "full:",
            DomainType::RootDomain => "domain:",
            DomainType::Regex => "regexp:",
            DomainType::Plain => return None,
        };
        Some(format!("{}{}", prefix, value))
    }

    /// Convert protobuf Domain to DomainRule
    pub fn from_proto(domain: &geodat::Domain) -> Option<Self> {
        let kind = DomainType::try_from(domain.r#type).ok()?;
        Some(Self::new(kind, domain.value.clone()))
    }

    pub fn to_proto(&self) -> geodat::Domain {
        geodat::Domain {
            r#type: self.kind as i32,
            value: self.value.clone(),
        }
    }
}
