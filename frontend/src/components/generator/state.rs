//! Component state for the document generator.
//!
//! All document logic lives in the [`GeneratorSession`]; the component only
//! adds what is tied to the browser: the abort handle of the catalog fetch
//! and the first-render guard.

use docgen_common::session::GeneratorSession;
use web_sys::AbortController;

/// Main state container for the `DocumentGeneratorComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct DocumentGeneratorComponent {
    /// Catalog, selection, form values, workflow and banners.
    pub session: GeneratorSession,

    /// Aborts the catalog fetch when the component is destroyed.
    /// `None` once the fetch has completed.
    pub catalog_abort: Option<AbortController>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl DocumentGeneratorComponent {
    pub fn new(user_id: String) -> Self {
        Self {
            session: GeneratorSession::new(user_id),
            catalog_abort: None,
            loaded: false,
        }
    }
}
