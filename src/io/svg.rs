//! SVG-Export einer Render-Szene.
//!
//! Jede Polylinie wird als `<polyline>` geschrieben, Punkt-Marker als
//! `<circle>`. Koordinaten mit drei Nachkommastellen.

use crate::core::style::color_to_hex;
use crate::core::Color;
use crate::shared::{EditOverlay, RenderScene, StrokedPath};
use anyhow::{Context, Result};
use glam::Vec2;
use std::path::Path;

/// Schreibt die Szene als SVG-Dokument.
pub fn write_svg(scene: &RenderScene) -> String {
    let [width, height] = scene.canvas_size;
    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    output.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = format_float(width),
        h = format_float(height)
    ));
    output.push_str(&format!(
        "  <rect width=\"100%\" height=\"100%\"{}/>\n",
        paint_attr("fill", scene.background_color)
    ));

    for curve in &scene.curves {
        output.push_str(&format!(
            "  <g id=\"curve-{}\" data-name=\"{}\">\n",
            curve.index,
            escape_xml(&curve.name)
        ));
        for points in curve.visible_paths() {
            let path = StrokedPath::solid(points.to_vec(), &curve.style);
            write_polyline(&mut output, &path, "    ");
        }
        output.push_str("  </g>\n");
    }

    if let Some(overlay) = &scene.overlay {
        write_overlay(&mut output, overlay);
    }

    output.push_str("</svg>\n");
    output
}

/// Exportiert die Szene in eine SVG-Datei.
pub fn export_svg(scene: &RenderScene, path: &Path) -> Result<()> {
    std::fs::write(path, write_svg(scene))
        .with_context(|| format!("SVG nicht schreibbar: {}", path.display()))?;
    Ok(())
}

fn write_overlay(output: &mut String, overlay: &EditOverlay) {
    output.push_str(&format!(
        "  <g id=\"overlay\" data-curve=\"{}\">\n",
        overlay.curve_index
    ));
    for path in [&overlay.halo, &overlay.highlight, &overlay.guides]
        .into_iter()
        .flatten()
    {
        write_polyline(output, path, "    ");
    }
    for marker in &overlay.markers {
        output.push_str(&format!(
            "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}{} stroke-width=\"{}\"/>\n",
            format_float(marker.position.x),
            format_float(marker.position.y),
            format_float(marker.style.radius),
            paint_attr("fill", marker.style.fill),
            paint_attr("stroke", marker.style.stroke),
            format_float(marker.style.stroke_width)
        ));
    }
    output.push_str("  </g>\n");
}

fn write_polyline(output: &mut String, path: &StrokedPath, indent: &str) {
    let dash = path
        .dash
        .map(|[on, off]| {
            format!(
                " stroke-dasharray=\"{} {}\"",
                format_float(on),
                format_float(off)
            )
        })
        .unwrap_or_default();
    output.push_str(&format!(
        "{indent}<polyline points=\"{}\" fill=\"none\"{} stroke-width=\"{}\" stroke-linecap=\"{}\"{}/>\n",
        format_points(&path.points),
        paint_attr("stroke", path.color),
        format_float(path.width),
        path.cap.as_str(),
        dash
    ));
}

/// `name="#rrggbb"`, bei Transparenz zusätzlich `name-opacity`.
fn paint_attr(name: &str, color: Color) -> String {
    let hex = color_to_hex([color[0], color[1], color[2], 1.0]);
    if color[3] >= 1.0 {
        format!(" {name}=\"{hex}\"")
    } else {
        format!(
            " {name}=\"{hex}\" {name}-opacity=\"{}\"",
            format_float(color[3].clamp(0.0, 1.0))
        )
    }
}

fn format_points(points: &[Vec2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", format_float(p.x), format_float(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_float(value: f32) -> String {
    format!("{:.3}", value)
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{StrokeCap, StrokeStyle};
    use crate::shared::CurveDrawRequest;

    fn scene_with_curve(name: &str) -> RenderScene {
        RenderScene {
            canvas_size: [100.0, 50.0],
            background_color: [1.0, 1.0, 1.0, 1.0],
            curves: vec![CurveDrawRequest {
                index: 0,
                name: name.to_string(),
                centerline: vec![Vec2::new(0.0, 0.0), Vec2::new(10.5, 20.25)],
                parallels: Vec::new(),
                style: StrokeStyle {
                    color: [1.0, 0.0, 0.0, 0.5],
                    width: 3.0,
                    cap: StrokeCap::Round,
                },
                show_overlays: false,
            }],
            overlay: None,
            flatten: true,
        }
    }

    #[test]
    fn test_format_float_precision() {
        assert_eq!(format_float(1.23456), "1.235");
        assert_eq!(format_float(-0.5), "-0.500");
    }

    #[test]
    fn test_polyline_attributes() {
        let svg = write_svg(&scene_with_curve("Kurve"));
        assert!(svg.contains("viewBox=\"0 0 100.000 50.000\""));
        assert!(svg.contains("fill=\"#ffffff\""));
        assert!(svg.contains("points=\"0.000,0.000 10.500,20.250\""));
        assert!(svg.contains("stroke=\"#ff0000\" stroke-opacity=\"0.500\""));
        assert!(svg.contains("stroke-linecap=\"round\""));
        assert!(!svg.contains("<circle"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_names_are_escaped() {
        let svg = write_svg(&scene_with_curve("A & <B>"));
        assert!(svg.contains("data-name=\"A &amp; &lt;B&gt;\""));
    }
}
