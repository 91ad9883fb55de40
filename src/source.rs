//! Reading the blocklist dump into a [`DomainList`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use encoding_rs::Encoding;
use tracing::{debug, info};

use crate::error::{GeositeError, Result};
use crate::list::DomainList;
use crate::parser::parse_rule;

/// Charset the Zapret-Info dump is published in.
pub const DEFAULT_ENCODING: &str = "windows-1251";

/// Resolve a WHATWG encoding label such as `windows-1251` or `utf-8`.
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| GeositeError::UnknownEncoding(label.to_string()))
}

/// Scan a dump line by line into `list`.
///
/// The first `header_lines` lines are skipped and blank lines are ignored.
/// Any parse failure aborts the scan and reports its 1-based line number.
pub fn read_rules<R: BufRead>(
    list: &mut DomainList,
    mut reader: R,
    encoding: &'static Encoding,
    header_lines: usize,
) -> Result<()> {
    let mut buf = Vec::with_capacity(64 * 1024);
    let mut line_num = 0;
    let mut records = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_num += 1;
        if line_num <= header_lines {
            continue;
        }

        let (text, _) = encoding.decode_without_bom_handling(&buf);
        let line = text.trim();
        if line.is_empty() {
            continue;
        }

        let rules = parse_rule(line).map_err(|e| GeositeError::at_line(line_num, e))?;
        for rule in rules {
            list.push(rule);
        }
        records += 1;
    }

    debug!(lines = line_num, records, "finished reading dump");
    Ok(())
}

/// Parse already decoded text into a new list.
pub fn parse_list(name: impl Into<String>, text: &str, header_lines: usize) -> Result<DomainList> {
    let mut list = DomainList::new(name);
    read_rules(&mut list, text.as_bytes(), encoding_rs::UTF_8, header_lines)?;
    Ok(list)
}

/// Open and parse a dump file into a new list.
pub fn parse_list_from_file(
    name: impl Into<String>,
    path: impl AsRef<Path>,
    encoding: &'static Encoding,
    header_lines: usize,
) -> Result<DomainList> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut list = DomainList::new(name);
    read_rules(&mut list, BufReader::new(file), encoding, header_lines)?;
    info!(
        path = %path.display(),
        encoding = encoding.name(),
        full = list.full().len(),
        root_domains = list.domain().len(),
        regexp = list.regexp().len(),
        "parsed dump"
    );
    Ok(list)
}
