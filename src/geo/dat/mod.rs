use std::fs;
use std::path::Path;

use prost::Message;

use crate::error::Result;
use crate::types::DomainRule;

pub mod geodat;

/// Encode a geosite list into V2Ray DAT bytes
pub fn encode_geosite_list(list: &geodat::GeoSiteList) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(list.encoded_len());
    list.encode(&mut buf)?;
    Ok(buf)
}

/// Decode V2Ray DAT bytes into a geosite list
pub fn decode_geosite_list(data: &[u8]) -> Result<geodat::GeoSiteList> {
    Ok(geodat::GeoSiteList::decode(data)?)
}

/// Load GeoSite data from V2Ray DAT format, keyed by entry code as stored
pub fn load_geosite(path: impl AsRef<Path>) -> Result<Vec<(String, Vec<DomainRule>)>> {
    let data = fs::read(path.as_ref())?;
    let list = decode_geosite_list(&data)?;

    let mut result = Vec::with_capacity(list.entry.len());
    for entry in list.entry {
        let rules = entry
            .domain
            .iter()
            .filter_map(DomainRule::from_proto)
            .collect();
        result.push((entry.country_code, rules));
    }

    Ok(result)
}

/// Verify DAT file integrity by attempting to load it.
/// Returns the number of entries found.
pub fn verify_geosite(path: impl AsRef<Path>) -> Result<usize> {
    Ok(load_geosite(path)?.len())
}
