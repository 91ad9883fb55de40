use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{GeositeError, Result};
use crate::types::{DomainRule, DomainType};

/// URL scheme prefix such as `https://`
static SCHEME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z]+://").expect("SCHEME_PATTERN: hardcoded regex is invalid")
});

/// Record delimiter of the dump.
const FIELD_DELIMITER: char = ';';

/// Delimiter between domain tokens inside one field.
const DOMAIN_DELIMITER: char = '|';

/// Number of trailing metadata fields on every record.
const TRAILING_FIELDS: usize = 2;

const WILDCARD_MARKER: &str = "*.";

/// Optional, arbitrarily deep, dot-terminated prefix.
const WILDCARD_REGEX: &str = r"(.*\.)?";

/// Characters escaped in literal host pieces (the RE2 `QuoteMeta` set).
const REGEX_META: &str = r"\.+*?()|[]{}^$";

/// Escape regex metacharacters, leaving `-`, `#`, `&` and `~` as they are.
fn quote_meta(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if REGEX_META.contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Classify a raw domain token.
///
/// The wildcard check runs before the scheme check, so
/// `https://*.example.com/` is a regex rule.
pub fn classify(token: &str) -> DomainType {
    if token.contains('*') {
        return DomainType::Regex;
    }
    if SCHEME_PATTERN.is_match(token) {
        return DomainType::Full;
    }
    DomainType::RootDomain
}

/// Translate a `*.`-wildcard host pattern into a regex fragment.
///
/// `http://`/`https://` prefixes and anything after the first `/` are
/// dropped. The host is split after every `*.`; a piece that is exactly
/// `*.` becomes `(.*\.)?`, any other piece is escaped as a literal, so a
/// `*.` glued to a label (`ads.*.`, `a*.`) stays literal.
pub fn wildcard_to_regex(pattern: &str) -> String {
    let stripped = pattern.replace("https://", "").replace("http://", "");
    let host = stripped.split('/').next().unwrap_or("").trim();

    let mut out = String::with_capacity(host.len() * 2);
    for piece in host.split_inclusive(WILDCARD_MARKER) {
        if piece == WILDCARD_MARKER {
            out.push_str(WILDCARD_REGEX);
        } else {
            out.push_str(&quote_meta(piece));
        }
    }
    out
}

/// Build a rule of the given type from a non-blank token.
/// Returns `Ok(None)` for a wildcard that translates to nothing.
pub(crate) fn build_rule(kind: DomainType, token: &str) -> Result<Option<DomainRule>> {
    match kind {
        DomainType::Regex => {
            let pattern = wildcard_to_regex(token);
            if pattern.trim().is_empty() {
                debug!(token, "dropping wildcard with empty host pattern");
                return Ok(None);
            }
            Ok(Some(DomainRule::regex(pattern)))
        }
        DomainType::Full | DomainType::RootDomain => Ok(Some(DomainRule::new(kind, token))),
        other => Err(GeositeError::UnknownDomainType(
            other.as_str_name().to_string(),
        )),
    }
}

/// Parse one domain token. Blank tokens yield `None`.
pub fn parse_domain(token: &str) -> Result<Option<DomainRule>> {
    let token = token.trim();
    if token.is_empty() {
        return Ok(None);
    }
    build_rule(classify(token), token)
}

/// Parse a `|`-delimited field of domain tokens.
pub fn parse_domains(field: &str) -> Result<Vec<DomainRule>> {
    let mut rules = Vec::new();
    if field.trim().is_empty() {
        return Ok(rules);
    }
    for token in field.split(DOMAIN_DELIMITER) {
        if let Some(rule) = parse_domain(token)? {
            rules.push(rule);
        }
    }
    Ok(rules)
}

/// Parse a single dump record into domain rules.
///
/// The first field and the last two fields carry metadata and are skipped.
/// Fails with `MalformedLine` for a blank line or a line without `;`.
pub fn parse_rule(line: &str) -> Result<Vec<DomainRule>> {
    if line.trim().is_empty() {
        return Err(GeositeError::MalformedLine("line is empty".to_string()));
    }

    let columns: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    if columns.len() <= 1 {
        return Err(GeositeError::MalformedLine(
            "line is missing delimiters".to_string(),
        ));
    }

    let mut rules = Vec::new();
    for column in columns[..columns.len() - TRAILING_FIELDS].iter().skip(1) {
        rules.extend(parse_domains(column)?);
    }
    Ok(rules)
}
