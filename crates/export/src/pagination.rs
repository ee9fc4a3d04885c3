//! Pure pagination geometry: how a single tall bitmap maps onto a sequence
//! of fixed-size pages.

/// The placement plan for one export: a uniform scale factor and one
/// vertical band offset per output page.
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    /// Points per source pixel: page width divided by bitmap width.
    pub scale: f32,
    /// Total image height after scaling, in points.
    pub scaled_height: f32,
    /// Downward band offset of each page, in points. The first page is
    /// always at offset 0; page `n` shows the band starting `n` page
    /// heights into the image.
    pub offsets: Vec<f32>,
}

impl PagePlan {
    pub fn page_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Plan the pagination of a `width x height` pixel bitmap onto pages of
/// `page_width x page_height` points.
///
/// The loop places the first band unconditionally, then adds one page per
/// full page height of remaining content while `remaining > 0`. The strict
/// inequality means a bitmap whose scaled height is an exact multiple of
/// the page height produces no trailing blank page; any fractional
/// remainder gets one final partial page. Termination: `remaining`
/// decreases by a fixed positive page height each iteration.
pub fn plan_pages(width: u32, height: u32, page_width: f32, page_height: f32) -> PagePlan {
    debug_assert!(width > 0 && height > 0);
    debug_assert!(page_width > 0.0 && page_height > 0.0);

    let scale = page_width / width as f32;
    let scaled_height = height as f32 * scale;

    let mut offsets = vec![0.0];
    let mut remaining = scaled_height - page_height;
    let mut offset = 0.0;
    while remaining > 0.0 {
        offset += page_height;
        offsets.push(offset);
        remaining -= page_height;
    }

    PagePlan {
        scale,
        scaled_height,
        offsets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::PageSize;

    #[test]
    fn test_content_shorter_than_page_yields_one_page() {
        let (pw, ph) = PageSize::A4.dimensions_pt();
        let plan = plan_pages(1600, 1000, pw, ph);
        assert_eq!(plan.page_count(), 1);
        assert_eq!(plan.offsets, vec![0.0]);
    }

    #[test]
    fn test_page_count_matches_aspect_ratio_formula() {
        // 1600x4000 px on A4: (4000/1600) / sqrt(2) ~= 1.77 -> 2 pages.
        let (pw, ph) = PageSize::A4.dimensions_pt();
        let plan = plan_pages(1600, 4000, pw, ph);
        assert_eq!(plan.page_count(), 2);

        let expected = ((4000.0 / 1600.0) / PageSize::A4.aspect_ratio()).ceil() as usize;
        assert_eq!(plan.page_count(), expected);
    }

    #[test]
    fn test_offsets_advance_by_one_page_height() {
        let plan = plan_pages(100, 1000, 100.0, 150.0);
        // Scaled height 1000pt over 150pt pages -> 7 pages.
        assert_eq!(plan.page_count(), 7);
        for (i, offset) in plan.offsets.iter().enumerate() {
            assert_eq!(*offset, 150.0 * i as f32);
        }
    }

    #[test]
    fn test_exact_multiple_adds_no_blank_page() {
        // Scaled height is exactly 4 page heights: 50px wide at 100pt page
        // width doubles, 400px tall -> 800pt over 200pt pages.
        let plan = plan_pages(50, 400, 100.0, 200.0);
        assert_eq!(plan.scale, 2.0);
        assert_eq!(plan.scaled_height, 800.0);
        assert_eq!(plan.page_count(), 4);
    }

    #[test]
    fn test_fractional_remainder_gets_final_partial_page() {
        let plan = plan_pages(50, 401, 100.0, 200.0);
        assert_eq!(plan.page_count(), 5);
    }

    #[test]
    fn test_scale_fits_image_to_page_width() {
        let plan = plan_pages(800, 800, 400.0, 600.0);
        assert_eq!(plan.scale, 0.5);
        assert_eq!(plan.scaled_height, 400.0);
    }
}
