/// Target page geometry for the exported document, portrait orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageSize {
    A4,
    Letter,
    /// Custom size in PDF points (1/72 inch).
    Custom {
        width: f32,
        height: f32,
    },
}

impl PageSize {
    /// Page dimensions in PDF points (1/72 inch).
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            // 210mm x 297mm
            PageSize::A4 => (595.276, 841.89),
            // 8.5in x 11in
            PageSize::Letter => (612.0, 792.0),
            PageSize::Custom { width, height } => (width, height),
        }
    }

    /// Height-to-width aspect ratio of the page.
    pub fn aspect_ratio(self) -> f32 {
        let (width, height) = self.dimensions_pt();
        height / width
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::A4
    }
}
