//! Marker-color hole detection over template pixel buffers.
//!
//! Hole placement is encoded directly in the template PNG: regions painted
//! in a reserved marker color become photo holes. The detector scans each
//! row for marker runs, groups runs into connected regions, and returns the
//! region bounding boxes as holes in reading order. Scanning never mutates
//! the input and repeated runs on the same buffer yield identical geometry.

use crate::geom::{Hole, TemplateGeometry};
use crate::image::PixelView;
use crate::trace::{trace_event, trace_span};
use crate::util::{SlotFitError, SlotFitResult};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

mod regions;

use regions::{merge_spans, Span};

/// Reserved hole-marker color: full-intensity magenta.
pub const DEFAULT_MARKER: [u8; 3] = [255, 0, 255];

/// Detection parameters.
#[derive(Clone, Copy, Debug)]
pub struct DetectConfig {
    /// Marker RGB value holes are painted with. Alpha is ignored.
    pub marker: [u8; 3],
    /// Per-channel absolute distance still accepted as the marker color.
    pub tolerance: u8,
    /// Regions below this pixel area are discarded as authoring noise.
    pub min_area: usize,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            tolerance: 0,
            min_area: 16,
        }
    }
}

fn matches_marker(pixel: &[u8], marker: [u8; 3], tolerance: u8) -> bool {
    pixel[0].abs_diff(marker[0]) <= tolerance
        && pixel[1].abs_diff(marker[1]) <= tolerance
        && pixel[2].abs_diff(marker[2]) <= tolerance
}

fn row_spans(view: PixelView<'_>, y: usize, cfg: &DetectConfig) -> Vec<Span> {
    let mut spans = Vec::new();
    let row = match view.row(y) {
        Some(row) => row,
        None => return spans,
    };
    let mut start: Option<usize> = None;
    for x in 0..view.width() {
        let hit = matches_marker(&row[x * 4..x * 4 + 4], cfg.marker, cfg.tolerance);
        match (hit, start) {
            (true, None) => start = Some(x),
            (false, Some(x0)) => {
                spans.push(Span { x0, x1: x });
                start = None;
            }
            _ => {}
        }
    }
    if let Some(x0) = start {
        spans.push(Span {
            x0,
            x1: view.width(),
        });
    }
    spans
}

#[cfg(not(feature = "rayon"))]
fn scan_rows(view: PixelView<'_>, cfg: &DetectConfig) -> Vec<Vec<Span>> {
    (0..view.height()).map(|y| row_spans(view, y, cfg)).collect()
}

/// Row scans are independent, so the span pass parallelizes cleanly; the
/// merge stays sequential and the result is identical to the scalar path.
#[cfg(feature = "rayon")]
fn scan_rows(view: PixelView<'_>, cfg: &DetectConfig) -> Vec<Vec<Span>> {
    (0..view.height())
        .into_par_iter()
        .map(|y| row_spans(view, y, cfg))
        .collect()
}

/// Scans a decoded template buffer for marker-colored holes.
///
/// Holes are returned ordered top-to-bottom then left-to-right, so a hole's
/// index is stable across re-detections of the same template. Fails with
/// [`SlotFitError::NoHolesFound`] when no region survives the area filter.
pub fn detect(view: PixelView<'_>, cfg: &DetectConfig) -> SlotFitResult<TemplateGeometry> {
    let _span = trace_span!(
        "detect_holes",
        width = view.width(),
        height = view.height()
    )
    .entered();

    let rows = scan_rows(view, cfg);
    let regions = merge_spans(&rows);

    let holes: Vec<Hole> = regions
        .into_iter()
        .filter(|region| region.area >= cfg.min_area.max(1))
        .enumerate()
        .map(|(id, region)| Hole {
            id,
            x: region.min_x as u32,
            y: region.min_y as u32,
            width: (region.max_x - region.min_x) as u32,
            height: (region.max_y - region.min_y) as u32,
        })
        .collect();

    trace_event!("holes_detected", count = holes.len());

    if holes.is_empty() {
        return Err(SlotFitError::NoHolesFound);
    }

    Ok(TemplateGeometry {
        width: view.width() as u32,
        height: view.height() as u32,
        holes,
    })
}

/// Decodes template bytes and scans them for holes.
///
/// This is the entry point the surrounding application calls after fetching
/// template bytes from storage. Decode failures surface as
/// [`SlotFitError::DecodeFailed`].
#[cfg(feature = "image-io")]
pub fn detect_template(bytes: &[u8], cfg: &DetectConfig) -> SlotFitResult<TemplateGeometry> {
    let pixels = crate::image::io::decode_rgba(bytes)?;
    detect(pixels.view(), cfg)
}
