//! Typed wrapper around a navigation facility

use crate::error::ResolveError;
use crate::params::Params;
use crate::template::resolve;

/// Flags forwarded to the navigation facility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavOptions {
    /// Whether to restore scroll position; `None` leaves the host default
    pub scroll: Option<bool>,
}

impl NavOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set scroll restoration
    pub fn with_scroll(mut self, scroll: bool) -> Self {
        self.scroll = Some(scroll);
        self
    }
}

/// A host navigation facility that only ever receives resolved paths
pub trait Navigator {
    fn push(&mut self, href: &str, options: NavOptions);
    fn replace(&mut self, href: &str, options: NavOptions);
    fn prefetch(&mut self, href: &str);
    fn back(&mut self);
    fn forward(&mut self);
    fn refresh(&mut self);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn push(&mut self, href: &str, options: NavOptions) {
        (**self).push(href, options)
    }

    fn replace(&mut self, href: &str, options: NavOptions) {
        (**self).replace(href, options)
    }

    fn prefetch(&mut self, href: &str) {
        (**self).prefetch(href)
    }

    fn back(&mut self) {
        (**self).back()
    }

    fn forward(&mut self) {
        (**self).forward()
    }

    fn refresh(&mut self) {
        (**self).refresh()
    }
}

/// Router that resolves route templates before handing them to a [`Navigator`]
///
/// A failed resolution is returned to the caller and the navigator is never
/// called with a partial path.
#[derive(Debug, Default)]
pub struct TypedRouter<N> {
    navigator: N,
}

impl<N: Navigator> TypedRouter<N> {
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    /// Navigate to a new history entry
    pub fn push(
        &mut self,
        href: &str,
        params: Option<&Params>,
        options: NavOptions,
    ) -> Result<(), ResolveError> {
        let built = resolve(href, params)?;
        self.navigator.push(&built, options);
        Ok(())
    }

    /// Replace the current history entry
    pub fn replace(
        &mut self,
        href: &str,
        params: Option<&Params>,
        options: NavOptions,
    ) -> Result<(), ResolveError> {
        let built = resolve(href, params)?;
        self.navigator.replace(&built, options);
        Ok(())
    }

    /// Warm up a route without navigating
    pub fn prefetch(&mut self, href: &str, params: Option<&Params>) -> Result<(), ResolveError> {
        let built = resolve(href, params)?;
        self.navigator.prefetch(&built);
        Ok(())
    }

    pub fn back(&mut self) {
        self.navigator.back();
    }

    pub fn forward(&mut self) {
        self.navigator.forward();
    }

    pub fn refresh(&mut self) {
        self.navigator.refresh();
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_inner(self) -> N {
        self.navigator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Navigator for Recorder {
        fn push(&mut self, href: &str, options: NavOptions) {
            self.calls.push(format!("push {} {:?}", href, options.scroll));
        }
        fn replace(&mut self, href: &str, options: NavOptions) {
            self.calls.push(format!("replace {} {:?}", href, options.scroll));
        }
        fn prefetch(&mut self, href: &str) {
            self.calls.push(format!("prefetch {}", href));
        }
        fn back(&mut self) {
            self.calls.push("back".to_string());
        }
        fn forward(&mut self) {
            self.calls.push("forward".to_string());
        }
        fn refresh(&mut self) {
            self.calls.push("refresh".to_string());
        }
    }

    #[test]
    fn test_forwards_resolved_paths() {
        let mut router = TypedRouter::new(Recorder::default());
        let params = Params::new().with("id", "a b");

        router.push("/user/[id]", Some(&params), NavOptions::new()).unwrap();
        router
            .replace("/about", None, NavOptions::new().with_scroll(false))
            .unwrap();
        router.prefetch("/user/[id]", Some(&params)).unwrap();
        router.back();
        router.forward();
        router.refresh();

        assert_eq!(
            router.into_inner().calls,
            vec![
                "push /user/a%20b None",
                "replace /about Some(false)",
                "prefetch /user/a%20b",
                "back",
                "forward",
                "refresh",
            ]
        );
    }

    #[test]
    fn test_failure_never_reaches_navigator() {
        let mut recorder = Recorder::default();
        let mut router = TypedRouter::new(&mut recorder);

        let err = router.push("/user/[id]", None, NavOptions::new()).unwrap_err();
        assert!(matches!(err, ResolveError::MissingParameter { .. }));
        assert!(router.prefetch("/blog/[...slug]", Some(&Params::new().with("slug", "x"))).is_err());

        assert!(recorder.calls.is_empty());
    }
}
