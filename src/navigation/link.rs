//! Typed link descriptions

use std::collections::BTreeMap;

use crate::error::ResolveError;
use crate::params::{ParamValue, Params};
use crate::template::resolve;

/// A link whose href is a route template plus its parameters
///
/// Presentation attributes are passed through untouched; only the href is
/// resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypedLink {
    href: String,
    params: Option<Params>,
    attrs: BTreeMap<String, String>,
}

impl TypedLink {
    /// Create a link to a route template
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            params: None,
            attrs: BTreeMap::new(),
        }
    }

    /// Set all route parameters at once
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    /// Add a single route parameter
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.get_or_insert_with(Params::new).insert(name, value);
        self
    }

    /// Add a pass-through attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    /// Resolve the href and produce the final link
    pub fn build(&self) -> Result<Link, ResolveError> {
        Ok(Link {
            href: resolve(&self.href, self.params.as_ref())?,
            attrs: self.attrs.clone(),
        })
    }
}

/// A link with a concrete href, ready for a rendering facility
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub attrs: BTreeMap<String, String>,
}

impl Link {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_link() {
        let link = TypedLink::new("/about").with_attr("class", "nav").build().unwrap();
        assert_eq!(link.href, "/about");
        assert_eq!(link.attr("class"), Some("nav"));
    }

    #[test]
    fn test_dynamic_link() {
        let link = TypedLink::new("/blog/[...slug]")
            .with_param("slug", ["2025", "pricing"])
            .with_attr("prefetch", "false")
            .build()
            .unwrap();
        assert_eq!(link.href, "/blog/2025/pricing");
        assert_eq!(link.attr("prefetch"), Some("false"));
    }

    #[test]
    fn test_link_without_params_on_dynamic_route() {
        let err = TypedLink::new("/user/[id]").build().unwrap_err();
        assert!(matches!(err, ResolveError::MissingParameter { .. }));
    }

    #[test]
    fn test_with_params_replaces_single_params() {
        let link = TypedLink::new("/user/[id]")
            .with_param("id", "old")
            .with_params(Params::new().with("id", "new"))
            .build()
            .unwrap();
        assert_eq!(link.href, "/user/new");
    }
}
