//! typed-href - resolve bracketed route templates into concrete paths
//!
//! This library parses route templates such as `/user/[id]` or
//! `/blog/[...slug]`, substitutes caller-supplied parameters and refuses to
//! return a path that still contains placeholder syntax.
//!
//! # Example
//!
//! ```rust
//! use typed_href::{resolve, Params};
//!
//! let params = Params::new().with("id", "123");
//! assert_eq!(resolve("/user/[id]", Some(&params)).unwrap(), "/user/123");
//! ```

pub mod error;
pub mod navigation;
pub mod params;
pub mod parser;
pub mod template;

pub use error::ResolveError;
pub use navigation::{Link, MemoryHistory, NavOptions, Navigator, TypedLink, TypedRouter};
pub use params::{ParamValue, Params, ParamsError, Scalar};
pub use parser::{parse, PlaceholderKind, RouteTemplate};
pub use template::{
    encode_component, resolve, resolve_template, ManifestError, RouteError, RouteManifest,
    RouteShape, ShapeError,
};
