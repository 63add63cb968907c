//! Node-type predicate applied to imports before traversal.

/// Extension assumed for component modules when none is configured.
pub const DEFAULT_EXTENSION: &str = "jsx";

/// Accepts modules whose file extension is in a fixed set.
///
/// Modules rejected by the filter are invisible to tree building and path
/// finding, including as intermediate hops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeFilter {
    extensions: Vec<String>,
}

impl NodeFilter {
    /// Create a filter from extensions, with or without a leading dot.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_string())
                .collect(),
        }
    }

    /// Returns `true` if the module at `id` passes the filter.
    #[must_use]
    pub fn accepts(&self, id: &str) -> bool {
        self.extensions.iter().any(|ext| {
            id.strip_suffix(ext.as_str())
                .is_some_and(|rest| rest.ends_with('.'))
        })
    }

    /// The accepted extensions, without leading dots.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

impl Default for NodeFilter {
    fn default() -> Self {
        Self::new([DEFAULT_EXTENSION])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::component("src/components/nav_bar.jsx", true)]
    #[case::nested_dots("src/components/nav.bar.jsx", true)]
    #[case::plain_js("src/utils/format.js", false)]
    #[case::stylesheet("src/css/site.css", false)]
    #[case::no_extension("src/components/README", false)]
    #[case::suffix_only_in_name("src/jsx", false)]
    #[case::case_sensitive("src/components/Nav.JSX", false)]
    fn default_filter_accepts_only_jsx(#[case] id: &str, #[case] expected: bool) {
        assert_eq!(NodeFilter::default().accepts(id), expected);
    }

    #[test]
    fn leading_dots_are_ignored() {
        let filter = NodeFilter::new([".tsx", "jsx"]);
        assert_eq!(filter.extensions(), ["tsx", "jsx"]);
        assert!(filter.accepts("a/b.tsx"));
        assert!(filter.accepts("a/b.jsx"));
        assert!(!filter.accepts("a/b.ts"));
    }
}
