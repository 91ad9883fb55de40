//! Running a full conversion and writing its artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::BuildOptions;
use crate::error::{GeositeError, Result};
use crate::geo::dat::{encode_geosite_list, verify_geosite};
use crate::list::DomainList;
use crate::source::{encoding_for_label, parse_list_from_file};

/// Entries in a generated geosite file: one per list.
const EXPECTED_ENTRIES: usize = 1;

/// Summary of a finished conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Rules in the assembled list
    pub rules: usize,
    /// Root domains dropped as subsumed
    pub subsumed: usize,
    /// Entries found when re-reading the geosite output
    pub entries: usize,
    pub geosite_path: PathBuf,
    pub plaintext_path: PathBuf,
}

/// Write both artifacts of a deduplicated list.
pub fn write_outputs(list: &DomainList, opts: &BuildOptions) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(&opts.output_dir)?;

    let geosite_path = opts.geosite_path();
    let data = encode_geosite_list(&list.to_geosite_list())?;
    fs::write(&geosite_path, data)?;
    info!(
        file = %opts.geosite_filename,
        dir = %opts.output_dir.display(),
        "geosite list generated"
    );

    let plaintext_path = opts.plaintext_path();
    fs::write(&plaintext_path, list.render_plaintext())?;
    info!(
        file = %opts.plaintext_name(),
        dir = %opts.output_dir.display(),
        "plaintext list generated"
    );

    Ok((geosite_path, plaintext_path))
}

/// Re-read a generated geosite file and check it holds exactly one entry.
pub fn verify_output(path: impl AsRef<Path>) -> Result<usize> {
    let found = verify_geosite(path)?;
    if found != EXPECTED_ENTRIES {
        return Err(GeositeError::EntryCountMismatch {
            expected: EXPECTED_ENTRIES,
            found,
        });
    }
    Ok(found)
}

/// Read, deduplicate and write one list, then re-read the geosite output.
pub fn build(opts: &BuildOptions) -> Result<BuildReport> {
    let encoding = encoding_for_label(&opts.encoding)?;
    let mut list = parse_list_from_file(opts.list_code(), &opts.input, encoding, opts.header_lines)?;
    list.deduplicate()?;

    let (geosite_path, plaintext_path) = write_outputs(&list, opts)?;
    let entries = verify_output(&geosite_path)?;

    Ok(BuildReport {
        rules: list.full().len() + list.unique_domain().len() + list.regexp().len(),
        subsumed: list.domain().len() - list.unique_domain().len(),
        entries,
        geosite_path,
        plaintext_path,
    })
}
