//! PDF assembly: embeds the raster snapshot once as an image XObject and
//! places it on every page with a shifted transform. The page MediaBox does
//! the clipping; this code never crops pixel data.

use crate::error::ExportError;
use crate::pagination::plan_pages;
use folio_traits::RasterSnapshot;
use folio_types::PageSize;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use printpdf::ops::Op;
use printpdf::xobject::{XObject, XObjectTransform};
use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt, XObjectId};

/// Assemble a paginated PDF from a snapshot. Returns the document bytes and
/// the number of pages emitted.
pub(crate) fn assemble(
    snapshot: &RasterSnapshot,
    page_size: PageSize,
    title: &str,
) -> Result<(Vec<u8>, usize), ExportError> {
    let (page_width, page_height) = page_size.dimensions_pt();
    let plan = plan_pages(snapshot.width(), snapshot.height(), page_width, page_height);

    let mut doc = PdfDocument::new(title);

    let png = encode_png(snapshot)?;
    let mut warnings = Vec::new();
    let raw_image = printpdf::image::RawImage::decode_from_bytes(&png, &mut warnings)
        .map_err(|e| ExportError::DocumentAssembly(format!("failed to embed image: {e}")))?;
    let xobj_id = XObjectId::new();
    doc.resources
        .xobjects
        .map
        .insert(xobj_id.clone(), XObject::Image(raw_image));

    let width_mm: Mm = Pt(page_width).into();
    let height_mm: Mm = Pt(page_height).into();

    for offset in &plan.offsets {
        // PDF origin is bottom-left: align the image top with the page top,
        // then shift up by the band offset so this page shows its band.
        let translate_y = page_height - plan.scaled_height + offset;
        let transform = XObjectTransform {
            translate_x: Some(Pt(0.0)),
            translate_y: Some(Pt(translate_y)),
            scale_x: Some(plan.scale),
            scale_y: Some(plan.scale),
            rotate: None,
            dpi: Some(72.0),
        };
        let ops = vec![Op::UseXobject {
            id: xobj_id.clone(),
            transform,
        }];
        doc.pages.push(PdfPage::new(width_mm, height_mm, ops));
    }

    let page_count = doc.pages.len();
    let mut bytes = Vec::new();
    doc.save_writer(&mut bytes, &PdfSaveOptions::default(), &mut warnings);
    if bytes.is_empty() {
        return Err(ExportError::DocumentAssembly(
            "PDF serialization produced no output".to_string(),
        ));
    }

    log::debug!(
        "assembled {page_count}-page PDF ({} bytes) from {}x{} snapshot",
        bytes.len(),
        snapshot.width(),
        snapshot.height()
    );
    Ok((bytes, page_count))
}

fn encode_png(snapshot: &RasterSnapshot) -> Result<Vec<u8>, ExportError> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(
            snapshot.pixels(),
            snapshot.width(),
            snapshot.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| ExportError::DocumentAssembly(format!("PNG encoding failed: {e}")))?;
    Ok(png)
}
