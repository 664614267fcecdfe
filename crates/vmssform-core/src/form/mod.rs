//! Widget state for the scale-set configuration panel.
//!
//! These types model the form elements the controller mutates: the three
//! text inputs, the busy spinner, the image-type radio pair, and the
//! image-reference sub-fields the selected radio enables. They hold state
//! only; event wiring lives in [`crate::selector`].

mod field;
mod radio;
mod spinner;

pub use field::TextField;
pub use radio::{ImageType, ImageTypeRadios, RadioFlags, RadioSnapshot};
pub use spinner::Spinner;

use crate::image_reference::ImageReference;

/// Image-reference inputs, split the way the panel splits them: the custom
/// radio enables `id`, the official radio enables the other four.
#[derive(Debug, Clone, Default)]
pub struct ReferenceFields {
    pub id: TextField,
    pub publisher: TextField,
    pub offer: TextField,
    pub sku: TextField,
    pub version: TextField,
}

/// The assembled configuration panel.
///
/// `credentials` and `resource_group` may be absent (the panel renders
/// without them in some host layouts); the controller treats an absent field
/// like an empty one and never issues a check.
#[derive(Debug)]
pub struct FormPanel {
    pub credentials: Option<TextField>,
    pub resource_group: Option<TextField>,
    pub name: TextField,
    pub spinner: Spinner,
    pub image_type: ImageTypeRadios,
    pub reference: ReferenceFields,
}

impl FormPanel {
    /// Panel with all fields present and empty, spinner hidden, official
    /// radio preselected.
    pub fn new() -> Self {
        Self {
            credentials: Some(TextField::new()),
            resource_group: Some(TextField::new()),
            name: TextField::new(),
            spinner: Spinner::new(),
            image_type: ImageTypeRadios::new(),
            reference: ReferenceFields::default(),
        }
    }

    /// Builds the image reference from the sub-fields the active radio
    /// enables: custom keeps only the id, official keeps only the quad.
    /// Returns None when no radio is active.
    pub fn effective_reference(&self) -> Option<ImageReference> {
        match self.image_type.snapshot().selected()? {
            ImageType::Custom => Some(ImageReference {
                id: non_empty(self.reference.id.value()),
                ..ImageReference::default()
            }),
            ImageType::Official => Some(ImageReference {
                publisher: non_empty(self.reference.publisher.value()),
                offer: non_empty(self.reference.offer.value()),
                sku: non_empty(self.reference.sku.value()),
                version: non_empty(self.reference.version.value()),
                ..ImageReference::default()
            }),
        }
    }
}

impl Default for FormPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
