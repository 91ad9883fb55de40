//! V2Ray `routercommon` geosite messages.
//!
//! Field tags follow `app/router/routercommon/common.proto` so the encoded
//! list is readable by V2Ray, Xray and sing-box geosite loaders.

/// Domain for routing decision.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Domain {
    /// Domain matching type.
    #[prost(enumeration = "domain::Type", tag = "1")]
    pub r#type: i32,
    /// Domain value.
    #[prost(string, tag = "2")]
    pub value: String,
}

/// Nested message and enum types in `Domain`.
pub mod domain {
    /// Type of domain value.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        /// The value is used as is.
        Plain = 0,
        /// The value is used as a regular expression.
        Regex = 1,
        /// The value is a root domain.
        RootDomain = 2,
        /// The value is a domain.
        Full = 3,
    }

    impl Type {
        /// Variant name as it appears in the proto definition.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Type::Plain => "Plain",
                Type::Regex => "Regex",
                Type::RootDomain => "RootDomain",
                Type::Full => "Full",
            }
        }
    }
}

/// A named list of domains.
#[derive(Clone, PartialEq, prost::Message)]
pub struct GeoSite {
    #[prost(string, tag = "1")]
    pub country_code: String,
    #[prost(message, repeated, tag = "2")]
    pub domain: Vec<Domain>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GeoSiteList {
    #[prost(message, repeated, tag = "1")]
    pub entry: Vec<GeoSite>,
}
