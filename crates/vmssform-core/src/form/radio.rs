//! Mutually exclusive image-type radio pair.
//!
//! Mirrors the two radio inputs of the configuration panel: an official
//! platform image (publisher/offer/sku/version) vs. a custom image (resource
//! id). Selection keeps the pair consistent: the selected option is enabled
//! and checked, the other is disabled and unchecked.

use std::fmt;

/// The two image kinds a scale set can be backed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Official,
    Custom,
}

impl ImageType {
    /// The radio input value for this option.
    pub fn as_value(&self) -> &'static str {
        match self {
            ImageType::Official => "official",
            ImageType::Custom => "custom",
        }
    }

    /// Interprets a check-endpoint response body. The endpoint answers the
    /// literal string "true" when the scale set is backed by a custom image;
    /// every other body means official. Exact comparison, no trimming.
    pub fn from_check_body(body: &str) -> Self {
        if body == "true" {
            ImageType::Custom
        } else {
            ImageType::Official
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// Checked/disabled flags of a single radio input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RadioFlags {
    pub checked: bool,
    pub disabled: bool,
}

/// Point-in-time view of both radios, handed to refresh hooks and renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioSnapshot {
    pub official: RadioFlags,
    pub custom: RadioFlags,
}

impl RadioSnapshot {
    /// The currently active choice: checked and not disabled.
    pub fn selected(&self) -> Option<ImageType> {
        if self.official.checked && !self.official.disabled {
            Some(ImageType::Official)
        } else if self.custom.checked && !self.custom.disabled {
            Some(ImageType::Custom)
        } else {
            None
        }
    }
}

type RefreshHook = Box<dyn Fn(RadioSnapshot) + Send + Sync>;

/// The radio pair plus the group's refresh hook, invoked after programmatic
/// selection changes so the host can redraw the row.
pub struct ImageTypeRadios {
    official: RadioFlags,
    custom: RadioFlags,
    on_refresh: Option<RefreshHook>,
}

impl ImageTypeRadios {
    /// Fresh pair as the panel first renders it: official preselected, both
    /// options enabled until a check has run.
    pub fn new() -> Self {
        Self {
            official: RadioFlags { checked: true, disabled: false },
            custom: RadioFlags::default(),
            on_refresh: None,
        }
    }

    /// Applies a completed check: the given option becomes enabled+checked,
    /// the other disabled+unchecked.
    pub fn select(&mut self, image_type: ImageType) {
        let (enabled, disabled) = match image_type {
            ImageType::Official => (&mut self.official, &mut self.custom),
            ImageType::Custom => (&mut self.custom, &mut self.official),
        };
        enabled.disabled = false;
        enabled.checked = true;
        disabled.disabled = true;
        disabled.checked = false;
    }

    /// Invokes the refresh hook with the current flags, if one is registered.
    pub fn refresh(&self) {
        if let Some(hook) = &self.on_refresh {
            hook(self.snapshot());
        }
    }

    pub fn set_refresh_hook(&mut self, hook: impl Fn(RadioSnapshot) + Send + Sync + 'static) {
        self.on_refresh = Some(Box::new(hook));
    }

    pub fn snapshot(&self) -> RadioSnapshot {
        RadioSnapshot { official: self.official, custom: self.custom }
    }
}

impl Default for ImageTypeRadios {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ImageTypeRadios {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageTypeRadios")
            .field("official", &self.official)
            .field("custom", &self.custom)
            .field("on_refresh", &self.on_refresh.is_some())
            .finish()
    }
}
