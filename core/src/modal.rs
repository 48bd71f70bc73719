/// Content shown by the image overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalImage {
    pub source: String,
    pub label: String,
}

/// Full-size image overlay. At most one image is shown at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageModal {
    current: Option<ModalImage>,
}

impl ImageModal {
    /// Show `source`. Opening while open replaces the image.
    pub fn open(&mut self, source: impl Into<String>, label: impl Into<String>) {
        self.current = Some(ModalImage {
            source: source.into(),
            label: label.into(),
        });
    }

    /// Hide the overlay. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Background scroll is locked while the overlay is up.
    pub fn locks_scroll(&self) -> bool {
        self.is_open()
    }

    pub fn current(&self) -> Option<&ModalImage> {
        self.current.as_ref()
    }
}
