pub mod dat;

pub use dat::{decode_geosite_list, encode_geosite_list, load_geosite, verify_geosite};
