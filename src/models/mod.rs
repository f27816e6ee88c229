pub mod config;
pub mod params;
pub mod source;

pub use config::{resolve_params, resolve_source, AppConfig, CONFIG_FILE_VAR};
pub use params::{merge_params, params_from_yaml, parse_param_arg, ParamValue, Params};
pub use source::{SourceConfig, DOMAIN_VAR, TOKEN_VAR};
