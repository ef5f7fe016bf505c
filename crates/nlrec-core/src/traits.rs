use serde::de::DeserializeOwned;

use crate::types::PageMeta;

/// A self-contained demo page served by one binary.
///
/// `View` is the request-scoped view state parsed from the query string
/// (selected scenario, active tab). It defaults to the page's initial state
/// and is the only input to rendering; `render` must be a pure function of
/// it over the page's literal content.
pub trait DemoPage: Send + Sync {
    type View: Default + DeserializeOwned + Send;

    fn meta(&self) -> PageMeta;

    /// Render the complete HTML document for the given view state.
    fn render(&self, view: &Self::View) -> String;
}
