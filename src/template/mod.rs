//! Route template resolution
//!
//! This module turns a route template such as `/blog/[...slug]` into a
//! concrete path using caller-supplied parameters, and keeps a manifest of
//! known routes so callers can check parameter shapes before resolving.
//!
//! # Example
//!
//! ```text
//! /user/[id]          + { id: "123" }                 -> /user/123
//! /blog/[...slug]     + { slug: ["2025", "pricing"] } -> /blog/2025/pricing
//! /blog/[...slug]     + { slug: [] }                  -> missing param "slug"
//! ```

mod manifest;
mod resolver;

pub use manifest::{ManifestError, ParamSpec, RouteError, RouteManifest, RouteShape, ShapeError};
pub use resolver::{encode_component, resolve, resolve_template};
