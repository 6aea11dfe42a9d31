//! Defines the properties for the `DocumentGeneratorComponent`.

use yew::prelude::*;

/// Properties for the `DocumentGeneratorComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct DocumentGeneratorProps {
    /// Prefix of the proxied document service routes.
    ///
    /// The catalog is read from `{api_base_path}/templates` and documents are
    /// generated through `{api_base_path}/generator`. Defaults to `/api`, the
    /// path the bundled server proxies.
    #[prop_or(AttrValue::Static("/api"))]
    pub api_base_path: AttrValue,
}
