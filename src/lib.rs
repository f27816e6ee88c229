//! Pixsign - signed URLs for remote image-processing services
//!
//! Builds URLs whose query carries an MD5 signature over a shared secret
//! token and the canonical path+query, so the image service can check the
//! URL was issued by an authorized client.
//!
//! ```
//! use pixsign::models::{Params, SourceConfig};
//! use pixsign::services::build_url;
//!
//! let source = SourceConfig::new("aaBBcc", "https://my-social-network.imgix.net");
//! let mut params = Params::new();
//! params.insert("con".to_string(), 10.into());
//!
//! let url = build_url("/images/jets.png", Some(&params), &source).unwrap();
//! assert!(url.starts_with("https://my-social-network.imgix.net/images/jets.png?con%3D10%26s="));
//! ```

pub mod error;
pub mod models;
pub mod services;

pub use error::SignError;
