use serde::{Deserialize, Serialize};

/// One entry in the navigation menu tree.
///
/// `children` is omitted from JSON when empty: a leaf serialized without
/// the field and one serialized with an empty list are the same thing,
/// so nothing downstream may distinguish them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct NavigationItem {
    /// Unique across the whole tree, not just among siblings.
    pub id: String,

    pub label: String,

    /// Absolute URL this entry links to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavigationItem>,
}

impl NavigationItem {
    /// A freshly created entry is always a leaf; children are only ever
    /// attached through the tree operations.
    pub fn new(id: String, data: NavigationFormData) -> Self {
        Self {
            id,
            label: data.label,
            url: data.url,
            children: Vec::new(),
        }
    }
}

/// Validated payload coming out of the item form.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NavigationFormData {
    pub label: String,
    pub url: Option<String>,
}
