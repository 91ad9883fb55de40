//! Zapret geosite - convert the Zapret-Info blocklist dump into a V2Ray geosite list
//!
//! This library provides:
//! - Classification of dump tokens into full, root-domain and regex rules
//! - Translation of `*.` wildcard hosts into regular expressions
//! - Removal of root domains already covered by a more general one
//! - `geosite.dat` (protobuf) and plaintext rendering
//!
//! # Example
//!
//! ```rust
//! use zapret_geosite::{parse_list, DomainType};
//!
//! let dump = "\
//! Updated: 2024-01-01
//! 1.2.3.4;example.com|ads.example.com|*.tracker.net;;org;decision;2024-01-01
//! ";
//!
//! let mut list = parse_list("ZAPRETINFO", dump, 1).unwrap();
//! list.deduplicate().unwrap();
//!
//! let rules = list.assemble();
//! assert_eq!(rules.len(), 3);
//! assert_eq!(rules[0].kind(), DomainType::RootDomain);
//! assert_eq!(rules[2].kind(), DomainType::Regex);
//!
//! let text = String::from_utf8(list.render_plaintext()).unwrap();
//! assert!(text.contains("domain:example.com\n"));
//! ```
//!
//! # Dump Format
//!
//! Each record is `;`-delimited with at least two fields:
//! ```text
//! ips;domains;urls;...;organisation;decision;date
//! ```
//!
//! The first field and the last two fields are skipped. Every other field is
//! a `|`-delimited list of tokens:
//!
//! | Token | Rule | Plaintext |
//! |-------|------|-----------|
//! | `example.com` | RootDomain | `domain:example.com` |
//! | `https://example.com/page` | Full | `full:https://example.com/page` |
//! | `*.example.com` | Regex | `regexp:(.*\.)?example\.com` |

pub mod config;
pub mod error;
pub mod geo;
pub mod list;
pub mod output;
pub mod parser;
pub mod source;
pub mod trie;
pub mod types;

// Re-export commonly used items
pub use config::{BuildOptions, DEFAULT_LIST_NAME, LIST_NAME_PLACEHOLDER};
pub use error::{ErrorKind, GeositeError, Result};
pub use list::DomainList;
pub use output::{build, verify_output, write_outputs, BuildReport};
pub use parser::{classify, parse_rule, wildcard_to_regex};
pub use source::{encoding_for_label, parse_list, parse_list_from_file, read_rules};
pub use trie::DomainTrie;
pub use types::{DomainRule, DomainType};
