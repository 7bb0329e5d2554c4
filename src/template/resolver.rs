//! Template resolution - substitutes parameter values into placeholders

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{debug, trace};

use crate::error::{ResolveError, Span};
use crate::params::{ParamValue, Params, Scalar};
use crate::parser::ast::{Placeholder, PlaceholderKind, RouteTemplate, Segment};
use crate::parser::parse;

/// Characters left unescaped in a path component: ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )`, the same set as `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single path component
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Resolve a template string against optional parameters
///
/// # Example
///
/// ```rust
/// use typed_href::{resolve, Params};
///
/// let params = Params::new().with("slug", ["2025", "pricing"]);
/// let href = resolve("/blog/[...slug]", Some(&params)).unwrap();
/// assert_eq!(href, "/blog/2025/pricing");
/// ```
pub fn resolve(template: &str, params: Option<&Params>) -> Result<String, ResolveError> {
    resolve_template(&parse(template), params)
}

/// Resolve an already parsed template
pub fn resolve_template(
    template: &RouteTemplate,
    params: Option<&Params>,
) -> Result<String, ResolveError> {
    let result = match params {
        Some(params) if !params.is_empty() => substitute_all(template, params),
        _ => resolve_without_params(template),
    };

    match &result {
        Ok(href) => debug!(template = %template, href = %href, "resolved route template"),
        Err(err) => debug!(template = %template, error = %err, "route template did not resolve"),
    }
    result
}

/// Outcome of looking up one placeholder
enum Binding {
    Value(String),
    Missing,
    Mismatch,
}

/// Placeholder names without a usable value, collected before failing
#[derive(Default)]
struct MissingParams {
    names: Vec<String>,
    spans: Vec<Span>,
}

impl MissingParams {
    fn record(&mut self, name: &str, span: Span) {
        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
            self.spans.push(span);
        }
    }

    fn into_error(self, template: &RouteTemplate) -> Option<ResolveError> {
        if self.names.is_empty() {
            return None;
        }
        Some(ResolveError::MissingParameter {
            params: self.names,
            template: template.source.clone(),
            spans: self.spans,
        })
    }
}

/// An empty mapping only resolves a template without placeholders
fn resolve_without_params(template: &RouteTemplate) -> Result<String, ResolveError> {
    let mut missing = MissingParams::default();
    for p in template.placeholders() {
        missing.record(&p.node.name, p.span);
    }
    if let Some(err) = missing.into_error(template) {
        return Err(err);
    }
    check_unresolved(template.source.clone())
}

fn substitute_all(template: &RouteTemplate, params: &Params) -> Result<String, ResolveError> {
    let mut missing = MissingParams::default();
    let mut out = String::with_capacity(template.source.len());

    for seg in &template.segments {
        match &seg.node {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(p) => match bind(p, params.get(&p.name)) {
                Binding::Value(value) => {
                    trace!(param = %p.name, kind = %p.kind, value = %value, "substituted placeholder");
                    out.push_str(&value);
                }
                Binding::Missing => {
                    missing.record(&p.name, seg.span.clone());
                    out.push_str(template.slice(&seg.span));
                }
                Binding::Mismatch => {
                    return Err(ResolveError::TypeMismatch {
                        param: p.name.clone(),
                        template: template.source.clone(),
                        span: seg.span.clone(),
                    });
                }
            },
        }
    }

    if let Some(err) = missing.into_error(template) {
        return Err(err);
    }
    check_unresolved(out)
}

fn bind(placeholder: &Placeholder, value: Option<&ParamValue>) -> Binding {
    match (placeholder.kind, value) {
        (_, None) | (_, Some(ParamValue::Null)) => Binding::Missing,

        (PlaceholderKind::CatchAll, Some(ParamValue::Scalar(_))) => Binding::Mismatch,
        (PlaceholderKind::CatchAll, Some(ParamValue::List(items))) if items.is_empty() => {
            Binding::Missing
        }
        (PlaceholderKind::CatchAll, Some(ParamValue::List(items))) => Binding::Value(
            items
                .iter()
                .map(|item| encode_component(&item.to_path_string()))
                .collect::<Vec<_>>()
                .join("/"),
        ),

        (PlaceholderKind::Single, Some(ParamValue::List(_))) => Binding::Missing,
        (PlaceholderKind::Single, Some(ParamValue::Scalar(scalar))) => {
            Binding::Value(encode_scalar(scalar))
        }
    }
}

fn encode_scalar(scalar: &Scalar) -> String {
    encode_component(&scalar.to_path_string())
}

/// Reject any bracket that survived substitution
fn check_unresolved(path: String) -> Result<String, ResolveError> {
    match path.find(|c: char| c == '[' || c == ']') {
        Some(offset) => Err(ResolveError::UnresolvedSegment { path, offset }),
        None => Ok(path),
    }
}
