//! Route manifest: the table of known route keys and their parameter shapes
//!
//! A manifest is what a typed caller consults before resolving: it knows which
//! routes exist, which parameters each one takes and whether a parameter is a
//! single segment or a catch-all list. The resolver never depends on it and
//! validates values again on every call.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::ResolveError;
use crate::params::{ParamValue, Params};
use crate::parser::ast::{PlaceholderKind, RouteTemplate};
use crate::parser::parse;

use super::resolver::resolve_template;

/// Errors that can occur when loading a manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read route manifest: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse route manifest TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("duplicate route in manifest: {route}")]
    Duplicate { route: String },
}

/// Parameters that contradict a route's declared shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("route {route} has no param \"{param}\"")]
    UnexpectedParam { route: String, param: String },

    #[error("param \"{param}\" of route {route} is {expected}, got {found}")]
    WrongKind {
        route: String,
        param: String,
        expected: PlaceholderKind,
        found: &'static str,
    },
}

/// Errors from resolving a route through the manifest
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("unknown route: {key}")]
    UnknownRoute { key: String },

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// A parameter a route declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: String,
    pub kind: PlaceholderKind,
}

/// The parameter shape of one route
#[derive(Debug, Clone, PartialEq)]
pub struct RouteShape {
    pub template: RouteTemplate,
    pub params: Vec<ParamSpec>,
}

impl RouteShape {
    /// Derive the shape from a template's placeholders
    pub fn from_template(template: RouteTemplate) -> Self {
        let mut params: Vec<ParamSpec> = Vec::new();
        for p in template.placeholders() {
            if !params.iter().any(|s| s.name == p.node.name) {
                params.push(ParamSpec {
                    name: p.node.name.clone(),
                    kind: p.node.kind,
                });
            }
        }
        Self { template, params }
    }

    pub fn key(&self) -> &str {
        self.template.as_str()
    }

    /// Whether the route can only be resolved with parameters
    pub fn requires_params(&self) -> bool {
        !self.params.is_empty()
    }

    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Check supplied parameters against the declared shape
    ///
    /// Unknown names and values of the wrong kind are rejected here. Missing
    /// or null values are left for the resolver, which reports all of them
    /// together.
    pub fn check(&self, params: &Params) -> Result<(), ShapeError> {
        for name in params.names() {
            let spec = self.param(name).ok_or_else(|| ShapeError::UnexpectedParam {
                route: self.key().to_string(),
                param: name.to_string(),
            })?;

            let value = params.get(name);
            let wrong = match (spec.kind, value) {
                (PlaceholderKind::Single, Some(ParamValue::List(_))) => true,
                (PlaceholderKind::CatchAll, Some(ParamValue::Scalar(_))) => true,
                _ => false,
            };
            if wrong {
                return Err(ShapeError::WrongKind {
                    route: self.key().to_string(),
                    param: name.to_string(),
                    expected: spec.kind,
                    found: value.map(ParamValue::kind_name).unwrap_or("nothing"),
                });
            }
        }
        Ok(())
    }
}

/// TOML structure for deserializing manifests
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlManifest {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    routes: Vec<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Table of known routes keyed by their template
#[derive(Debug, Clone, Default)]
pub struct RouteManifest {
    /// Optional name for the manifest
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    routes: BTreeMap<String, RouteShape>,
}

impl RouteManifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a manifest from route templates
    pub fn from_routes<I, S>(routes: I) -> Result<Self, ManifestError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut manifest = Self::new();
        for route in routes {
            manifest.register(route.as_ref())?;
        }
        Ok(manifest)
    }

    /// Load manifest from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load manifest from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ManifestError> {
        let parsed: TomlManifest = toml::from_str(content)?;

        let mut manifest = Self::from_routes(&parsed.routes)?;
        manifest.name = parsed.metadata.as_ref().and_then(|m| m.name.clone());
        manifest.description = parsed.metadata.as_ref().and_then(|m| m.description.clone());
        Ok(manifest)
    }

    /// Register a route template
    pub fn register(&mut self, route: &str) -> Result<(), ManifestError> {
        if self.routes.contains_key(route) {
            return Err(ManifestError::Duplicate {
                route: route.to_string(),
            });
        }
        let shape = RouteShape::from_template(parse(route));
        self.routes.insert(route.to_string(), shape);
        Ok(())
    }

    /// Get the shape of a route
    pub fn shape(&self, key: &str) -> Option<&RouteShape> {
        self.routes.get(key)
    }

    /// Check if a route exists
    pub fn contains(&self, key: &str) -> bool {
        self.routes.contains_key(key)
    }

    /// All route keys in sorted order
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Routes that resolve without parameters
    pub fn static_routes(&self) -> impl Iterator<Item = &str> {
        self.routes
            .values()
            .filter(|s| !s.requires_params())
            .map(RouteShape::key)
    }

    /// Routes that need parameters to resolve
    pub fn dynamic_routes(&self) -> impl Iterator<Item = &str> {
        self.routes
            .values()
            .filter(|s| s.requires_params())
            .map(RouteShape::key)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolve a known route: look it up, check the shape, then substitute
    pub fn resolve(&self, key: &str, params: Option<&Params>) -> Result<String, RouteError> {
        let shape = self.shape(key).ok_or_else(|| RouteError::UnknownRoute {
            key: key.to_string(),
        })?;
        if let Some(params) = params {
            shape.check(params)?;
        }
        Ok(resolve_template(&shape.template, params)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn manifest() -> RouteManifest {
        RouteManifest::from_routes(["/", "/user/[id]", "/blog/[...slug]", "/[lang]/docs/[...path]"])
            .expect("Should build")
    }

    #[test]
    fn test_register_and_lookup() {
        let m = manifest();
        assert_eq!(m.len(), 4);
        assert!(m.contains("/user/[id]"));
        assert!(!m.contains("/user/[uid]"));

        let shape = m.shape("/[lang]/docs/[...path]").expect("Should exist");
        assert_eq!(
            shape.params,
            vec![
                ParamSpec { name: "lang".to_string(), kind: PlaceholderKind::Single },
                ParamSpec { name: "path".to_string(), kind: PlaceholderKind::CatchAll },
            ]
        );
    }

    #[test]
    fn test_static_and_dynamic_partition() {
        let m = manifest();
        assert_eq!(m.static_routes().collect::<Vec<_>>(), vec!["/"]);
        assert_eq!(
            m.dynamic_routes().collect::<Vec<_>>(),
            vec!["/[lang]/docs/[...path]", "/blog/[...slug]", "/user/[id]"]
        );
    }

    #[test]
    fn test_duplicate_route_error() {
        let result = RouteManifest::from_routes(["/a", "/a"]);
        assert!(matches!(result, Err(ManifestError::Duplicate { .. })));
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r#"
routes = ["/", "/user/[id]"]

[metadata]
name = "storefront"
description = "Shop routes"
"#;
        let m = RouteManifest::from_str(toml_str).expect("Should parse");
        assert_eq!(m.name, Some("storefront".to_string()));
        assert_eq!(m.description, Some("Shop routes".to_string()));
        assert_eq!(m.routes().collect::<Vec<_>>(), vec!["/", "/user/[id]"]);
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = RouteManifest::from_str("routes = [1, 2");
        assert!(matches!(result, Err(ManifestError::ParseError(_))));
    }

    #[test]
    fn test_routes_under_metadata_table_rejected() {
        // `routes` after the header belongs to the [metadata] table
        let toml_str = r#"
[metadata]
name = "storefront"

routes = ["/", "/user/[id]"]
"#;
        let result = RouteManifest::from_str(toml_str);
        assert!(matches!(result, Err(ManifestError::ParseError(_))));
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        let result = RouteManifest::from_str(r#"paths = ["/"]"#);
        assert!(matches!(result, Err(ManifestError::ParseError(_))));
    }

    #[test]
    fn test_check_rejects_unknown_param() {
        let m = manifest();
        let params = Params::new().with("id", "1").with("extra", "x");
        let err = m.shape("/user/[id]").unwrap().check(&params).unwrap_err();
        assert_eq!(
            err,
            ShapeError::UnexpectedParam {
                route: "/user/[id]".to_string(),
                param: "extra".to_string(),
            }
        );
    }

    #[test]
    fn test_check_rejects_wrong_kind() {
        let m = manifest();
        let shape = m.shape("/blog/[...slug]").unwrap();
        let err = shape.check(&Params::new().with("slug", "flat")).unwrap_err();
        assert_eq!(err.to_string(), "param \"slug\" of route /blog/[...slug] is catch-all, got scalar");

        let shape = m.shape("/user/[id]").unwrap();
        assert!(shape.check(&Params::new().with("id", ["a"])).is_err());
        assert!(shape.check(&Params::new().with("id", None::<&str>)).is_ok());
    }

    #[test]
    fn test_resolve_known_route() {
        let m = manifest();
        let params = Params::new().with("lang", "en").with("path", ["guides", "setup"]);
        assert_eq!(
            m.resolve("/[lang]/docs/[...path]", Some(&params)).unwrap(),
            "/en/docs/guides/setup"
        );
        assert_eq!(m.resolve("/", None).unwrap(), "/");
    }

    #[test]
    fn test_resolve_unknown_route() {
        let err = manifest().resolve("/nope", None).unwrap_err();
        assert_eq!(err, RouteError::UnknownRoute { key: "/nope".to_string() });
    }

    #[test]
    fn test_resolve_reports_missing_through_resolver() {
        let err = manifest().resolve("/user/[id]", None).unwrap_err();
        assert!(matches!(err, RouteError::Resolve(ResolveError::MissingParameter { .. })));
    }
}
