//! Test fixtures and constants.

use pixsign::models::{ParamValue, Params, SourceConfig};

/// Account used throughout the examples
pub const TOKEN: &str = "aaBBcc";
pub const DOMAIN: &str = "https://my-social-network.imgix.net";

/// Image paths
pub mod paths {
    pub const JETS: &str = "/images/jets.png";
    pub const AVATAR_URL: &str = "http://avatars.com/john-smith.png";
    pub const AVATAR_PROXY_PATH: &str = "/http%3A%2F%2Favatars.com%2Fjohn-smith.png";
}

/// Known signatures: md5(TOKEN + plain path+query)
pub mod signatures {
    /// "aaBBcc/images/jets.png"
    pub const JETS: &str = "f57da971ac95af0f16670e1b0b0e4365";
    /// "aaBBcc/images/jets.png?con=10"
    pub const JETS_CON_10: &str = "4964d289be1d3eba495ab25d03d5c2a3";
    /// "aaBBcc/images/jets.png?con=10&w=400"
    pub const JETS_CON_10_W_400: &str = "3af7ff87cdfc48b6df8e1692cfab44c4";
    /// "aaBBcc/images/jets.png?con=10&w=500"
    pub const JETS_CON_10_W_500: &str = "73edffe171c0a903a0ce79eb948f93a2";
    /// "aaBBcc/images/jets.png?con=10&w=200"
    pub const JETS_CON_10_W_200: &str = "80411890138f9ae7a943da00aa51d532";
    /// "zz/images/jets.png"
    pub const JETS_TOKEN_ZZ: &str = "1d31336caea67b65a520b1372970e3e0";
    /// "aaBBcc/http%3A%2F%2Favatars.com%2Fjohn-smith.png"
    pub const AVATAR_PROXY: &str = "a45acdbc5abb99d8947b662d6851a1fa";
}

pub fn source() -> SourceConfig {
    SourceConfig::new(TOKEN, DOMAIN)
}

/// Build params from literal pairs
pub fn params(pairs: &[(&str, ParamValue)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

pub const CONFIG_YAML: &str = r#"
default_source: social
sources:
  social:
    token: aaBBcc
    domain: https://my-social-network.imgix.net
  avatars:
    token: ddEEff
    domain: https://avatars.imgix.net
presets:
  contrast:
    con: 10
  thumb:
    w: 200
    con: 5
  banner:
    w: 1200
    h: 300
    txt: Hello World
"#;
