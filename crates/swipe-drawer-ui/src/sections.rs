//! Section re-rendering strategies.
//!
//! After the cart changes the server returns fresh markup keyed by section.
//! Which sections to replace depends on where the cart is shown, so the list
//! comes from a [`SectionsToRender`] strategy rather than a subclass hook.

use smallvec::{smallvec, SmallVec};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    /// Target element id.
    pub id: &'static str,
    /// Server section name, when it differs from `id`.
    pub section: Option<&'static str>,
    /// Selector for the part of the returned markup to keep.
    pub selector: Option<&'static str>,
}

impl SectionDescriptor {
    /// Key of this section in a render payload.
    pub fn payload_key(&self) -> &'static str {
        self.section.unwrap_or(self.id)
    }
}

pub type SectionList = SmallVec<[SectionDescriptor; 2]>;

pub trait SectionsToRender {
    fn sections_to_render(&self) -> SectionList;
}

/// The drawer's own sections: the whole drawer plus the header cart bubble.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawerSections;

impl SectionsToRender for DrawerSections {
    fn sections_to_render(&self) -> SectionList {
        smallvec![
            SectionDescriptor {
                id: "cart-drawer",
                section: None,
                selector: Some("#CartDrawer"),
            },
            SectionDescriptor {
                id: "cart-icon-bubble",
                section: None,
                selector: None,
            },
        ]
    }
}

/// Line-item updates made from inside the drawer: only the inner panel and
/// the cart bubble are replaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawerItemsSections;

impl SectionsToRender for DrawerItemsSections {
    fn sections_to_render(&self) -> SectionList {
        smallvec![
            SectionDescriptor {
                id: "CartDrawer",
                section: Some("cart-drawer"),
                selector: Some(".drawer__inner"),
            },
            SectionDescriptor {
                id: "cart-icon-bubble",
                section: Some("cart-icon-bubble"),
                selector: Some(".shopify-section"),
            },
        ]
    }
}

/// Server response after a cart mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartContents {
    pub product_id: Option<u64>,
    /// Rendered markup keyed by section name.
    pub sections: HashMap<String, String>,
}

impl CartContents {
    pub fn with_section(mut self, key: impl Into<String>, markup: impl Into<String>) -> Self {
        self.sections.insert(key.into(), markup.into());
        self
    }
}

/// Replaces section markup on the page.
pub trait SectionRenderer {
    /// Returns `false` if the target element does not exist.
    fn replace_section(&self, section: &SectionDescriptor, markup: &str) -> bool;
}

/// Replaces every section the strategy lists that has markup in `contents`.
/// Returns how many were replaced.
pub fn render_sections(
    strategy: &dyn SectionsToRender,
    contents: &CartContents,
    renderer: &dyn SectionRenderer,
) -> usize {
    let mut replaced = 0;
    for section in strategy.sections_to_render() {
        let Some(markup) = contents.sections.get(section.payload_key()) else {
            continue;
        };
        if renderer.replace_section(&section, markup) {
            replaced += 1;
        } else {
            log::warn!("section target {} missing, skipped", section.id);
        }
    }
    replaced
}
