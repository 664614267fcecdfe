//! Busy-state indicator shown while a check is in flight.

/// Visual busy marker next to the name field. Starts hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spinner {
    visible: bool,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_starts_hidden() {
        assert!(!Spinner::new().is_visible());
    }

    #[test]
    fn spinner_show_hide() {
        let mut spinner = Spinner::new();
        spinner.show();
        assert!(spinner.is_visible());
        spinner.hide();
        assert!(!spinner.is_visible());
    }
}
