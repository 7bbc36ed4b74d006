//! JSON chapter lists.
//!
//! The serde representation of [`NavigationTree`]:
//!
//! ```json
//! {"chapters": [{"label": "Intro", "href": "intro.html", "children": []}]}
//! ```

use crate::error::Result;
use crate::formats::Format;
use crate::nav::NavigationTree;

/// Chapter list serialised with serde.
pub struct JsonFormat;

impl Format for JsonFormat {
    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn parse_tree(&self, source: &str) -> Result<NavigationTree> {
        Ok(serde_json::from_str(source)?)
    }
}
