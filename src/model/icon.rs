//! Fixed catalog of link icons.
//!
//! Links store a free-form icon tag. Readers resolve that tag against [`ICON_CATALOG`], and any
//! tag that is missing or not in the catalog resolves to [`FALLBACK_ICON_TAG`].

use serde::{Deserialize, Serialize};

/// Tag used when a link has no icon or an unknown one.
pub const FALLBACK_ICON_TAG: &str = "website";

/// Position of the fallback entry in [`ICON_CATALOG`].
const FALLBACK_ICON_INDEX: usize = 3;

/// Static description of a catalog entry.
#[derive(Debug, PartialEq, Eq)]
pub struct IconDescriptor {
    pub tag: &'static str,
    pub label: &'static str,
    /// Display colour class used by the front end
    pub color: &'static str,
}

pub static ICON_CATALOG: [IconDescriptor; 15] = [
    IconDescriptor {
        tag: "instagram",
        label: "Instagram",
        color: "text-pink-600",
    },
    IconDescriptor {
        tag: "twitter",
        label: "Twitter",
        color: "text-blue-500",
    },
    IconDescriptor {
        tag: "youtube",
        label: "YouTube",
        color: "text-red-600",
    },
    IconDescriptor {
        tag: "website",
        label: "Website",
        color: "text-gray-600",
    },
    IconDescriptor {
        tag: "email",
        label: "Email",
        color: "text-blue-600",
    },
    IconDescriptor {
        tag: "phone",
        label: "Phone",
        color: "text-green-600",
    },
    IconDescriptor {
        tag: "camera",
        label: "Photography",
        color: "text-purple-600",
    },
    IconDescriptor {
        tag: "music",
        label: "Music",
        color: "text-green-500",
    },
    IconDescriptor {
        tag: "shop",
        label: "Shop",
        color: "text-orange-600",
    },
    IconDescriptor {
        tag: "blog",
        label: "Blog",
        color: "text-indigo-600",
    },
    IconDescriptor {
        tag: "gaming",
        label: "Gaming",
        color: "text-purple-500",
    },
    IconDescriptor {
        tag: "heart",
        label: "Favorite",
        color: "text-red-500",
    },
    IconDescriptor {
        tag: "star",
        label: "Featured",
        color: "text-yellow-500",
    },
    IconDescriptor {
        tag: "zap",
        label: "Quick Link",
        color: "text-yellow-600",
    },
    IconDescriptor {
        tag: "github",
        label: "GitHub",
        color: "text-gray-600",
    },
];

/// Look up a tag in the catalog, falling back to the website icon.
pub fn resolve_icon(tag: Option<&str>) -> &'static IconDescriptor {
    let tag = tag.map(str::trim).unwrap_or_default();

    ICON_CATALOG
        .iter()
        .find(|icon| icon.tag == tag)
        .unwrap_or(&ICON_CATALOG[FALLBACK_ICON_INDEX])
}

/// A catalog entry as returned by the API
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IconDto {
    pub tag: String,
    pub label: String,
    pub color: String,
}

impl IconDto {
    /// Resolve a stored tag into its catalog entry.
    pub fn resolve(tag: Option<&str>) -> Self {
        Self::from(resolve_icon(tag))
    }
}

impl From<&IconDescriptor> for IconDto {
    fn from(icon: &IconDescriptor) -> Self {
        Self {
            tag: icon.tag.to_string(),
            label: icon.label.to_string(),
            color: icon.color.to_string(),
        }
    }
}
