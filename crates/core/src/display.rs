//! Display Items

use crate::pets::Pet;

/// The randomly fetched showcase image shown ahead of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedImage {
    /// Image URI
    pub image: String,

    /// Caption shown in place of a pet name
    pub caption: String,

    /// Whether the fetch failed and a fallback image is shown
    pub fallback: bool,
}

impl FeaturedImage {
    /// A successfully fetched image.
    pub fn new(image: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            caption: caption.into(),
            fallback: false,
        }
    }

    /// A fallback image used after a failed fetch.
    pub fn fallback(image: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            caption: caption.into(),
            fallback: true,
        }
    }
}

/// An entry in the home list.
///
/// Only [`DisplayItem::RealPet`] can reach the cart: [`DisplayItem::pet`] is the sole way to get a
/// [`Pet`] out of a display item and returns `None` for the featured placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayItem {
    /// A catalog pet
    RealPet(Pet),

    /// The featured showcase entry
    FeaturedPlaceholder(FeaturedImage),
}

impl DisplayItem {
    /// The catalog pet, if this is one.
    pub fn pet(&self) -> Option<&Pet> {
        match self {
            Self::RealPet(pet) => Some(pet),
            Self::FeaturedPlaceholder(_) => None,
        }
    }

    /// Image URI to render.
    pub fn image(&self) -> &str {
        match self {
            Self::RealPet(pet) => &pet.image,
            Self::FeaturedPlaceholder(featured) => &featured.image,
        }
    }

    /// Heading to render: the pet name or the featured caption.
    pub fn title(&self) -> &str {
        match self {
            Self::RealPet(pet) => &pet.name,
            Self::FeaturedPlaceholder(featured) => &featured.caption,
        }
    }

    /// Whether this is the featured placeholder.
    pub fn is_featured(&self) -> bool {
        matches!(self, Self::FeaturedPlaceholder(_))
    }
}

/// Home list contents: the featured entry first, then every catalog pet in order.
pub fn home_items(featured: &FeaturedImage, pets: &[Pet]) -> Vec<DisplayItem> {
    std::iter::once(DisplayItem::FeaturedPlaceholder(featured.clone()))
        .chain(pets.iter().cloned().map(DisplayItem::RealPet))
        .collect()
}

/// Header text summarising how many pets are listed.
pub fn availability_label(count: usize) -> String {
    if count == 1 {
        "1 pet available".to_string()
    } else {
        format!("{count} pets available")
    }
}
