//! Syntax tree for route templates

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// AST node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// How many path segments a placeholder binds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    /// `[name]` - exactly one segment
    Single,
    /// `[...name]` - zero or more segments joined by `/`
    CatchAll,
}

impl PlaceholderKind {
    pub fn is_catch_all(self) -> bool {
        matches!(self, PlaceholderKind::CatchAll)
    }
}

impl std::fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceholderKind::Single => f.write_str("single"),
            PlaceholderKind::CatchAll => f.write_str("catch-all"),
        }
    }
}

/// A bracketed placeholder inside a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub name: String,
    pub kind: PlaceholderKind,
}

impl Placeholder {
    pub fn single(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlaceholderKind::Single,
        }
    }

    pub fn catch_all(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlaceholderKind::CatchAll,
        }
    }
}

/// One piece of a template: literal text or a placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// A parsed route template
///
/// Segments cover the source text without gaps, so concatenating the
/// literal text and the original placeholder syntax yields the source again.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTemplate {
    pub source: String,
    pub segments: Vec<Spanned<Segment>>,
}

impl RouteTemplate {
    /// The template exactly as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Iterate over placeholders in template order
    pub fn placeholders(&self) -> impl Iterator<Item = Spanned<&Placeholder>> + '_ {
        self.segments.iter().filter_map(|seg| match &seg.node {
            Segment::Placeholder(p) => Some(Spanned::new(p, seg.span.clone())),
            Segment::Literal(_) => None,
        })
    }

    /// Placeholder names in first-occurrence order, without duplicates
    pub fn placeholder_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for p in self.placeholders() {
            if !names.contains(&p.node.name.as_str()) {
                names.push(p.node.name.as_str());
            }
        }
        names
    }

    /// True when the template has no placeholders at all
    pub fn is_static(&self) -> bool {
        self.placeholders().next().is_none()
    }

    /// Source text covered by a span
    pub fn slice(&self, span: &Span) -> &str {
        self.source.get(span.clone()).unwrap_or("")
    }
}

impl std::fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
