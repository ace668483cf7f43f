//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::style::WHITE;
use crate::core::{CurveEntry, StrokeStyle};
use crate::shared::{CurveDrawRequest, EditOverlay, PointMarkerDraw, RenderScene, StrokedPath};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Mit `flatten` entsteht die Export-Geometrie: identische Kurven, aber ohne
/// Halo, Hilfslinien und Punkt-Marker.
pub fn build(state: &AppState, flatten: bool) -> RenderScene {
    let document = &state.document;
    let samples = state.options.curve_sample_count;
    let overlay_index =
        (document.edit_mode && !flatten).then_some(document.current_index());

    let curves = document
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| curve_request(entry, index, samples, overlay_index == Some(index)))
        .collect();

    let overlay = overlay_index.map(|index| build_overlay(state, document.current_entry(), index));

    RenderScene {
        canvas_size: state.options.canvas_size,
        background_color: document.background_color,
        curves,
        overlay,
        flatten,
    }
}

fn curve_request(
    entry: &CurveEntry,
    index: usize,
    samples: usize,
    show_overlays: bool,
) -> CurveDrawRequest {
    let curve = &entry.curve;
    let (centerline, parallels) = if curve.has_parallels() {
        (Vec::new(), curve.draw_parallels(samples))
    } else {
        (curve.draw_curve(samples), Vec::new())
    };

    CurveDrawRequest {
        index,
        name: entry.name.clone(),
        centerline,
        parallels,
        style: entry.style,
        show_overlays,
    }
}

fn build_overlay(state: &AppState, entry: &CurveEntry, index: usize) -> EditOverlay {
    let opts = &state.options;
    let curve = &entry.curve;
    let centerline = curve.draw_curve(opts.curve_sample_count);

    let (halo, highlight) = if centerline.is_empty() {
        (None, None)
    } else {
        let halo_style = StrokeStyle {
            color: WHITE,
            width: entry.style.width * opts.halo_width_factor + opts.halo_width_extra,
            cap: entry.style.cap,
        };
        let highlight_style = StrokeStyle {
            width: entry.style.width * opts.highlight_width_factor,
            ..entry.style
        };
        (
            Some(StrokedPath::solid(centerline.clone(), &halo_style)),
            Some(StrokedPath::solid(centerline, &highlight_style)),
        )
    };

    let guide_points = curve.draw_guides();
    let guides = (!guide_points.is_empty()).then(|| StrokedPath {
        points: guide_points,
        color: opts.guide_color,
        width: opts.guide_width,
        cap: entry.style.cap,
        dash: Some(opts.guide_dash),
    });

    let markers = curve
        .draw_all_points()
        .into_iter()
        .map(|marker| PointMarkerDraw {
            position: marker.position,
            role: marker.role,
            style: opts.point_styles.style_for(marker.role),
        })
        .collect();

    EditOverlay {
        curve_index: index,
        halo,
        highlight,
        guides,
        markers,
    }
}
