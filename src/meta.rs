use crate::constants::{
    META_DESCRIPTION_CONTENT, META_DESCRIPTION_NAME, META_SITE_VERIFICATION_CONTENT,
    META_SITE_VERIFICATION_NAME,
};

/// A `<meta name=… content=…>` entry for the document head.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetaTag {
    pub name: &'static str,
    pub content: &'static str,
}

pub const DEFAULT_META_TAGS: [MetaTag; 2] = [
    MetaTag {
        name: META_DESCRIPTION_NAME,
        content: META_DESCRIPTION_CONTENT,
    },
    MetaTag {
        name: META_SITE_VERIFICATION_NAME,
        content: META_SITE_VERIFICATION_CONTENT,
    },
];

/// True when a tag called `name` still has to be inserted. Names compare
/// exactly, as the `name` attribute does in the DOM.
#[inline]
pub fn needs_insert<'a>(existing_names: impl IntoIterator<Item = &'a str>, name: &str) -> bool {
    !existing_names.into_iter().any(|n| n == name)
}
