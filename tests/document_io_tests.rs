use curvita::app::render_scene;
use curvita::{
    load_document, parse_document, save_document, AppController, AppIntent, AppState,
    EditorOptions, ParallelMode,
};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("curvita_{}_{}", std::process::id(), name))
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_paths_close(a: &[glam::Vec2], b: &[glam::Vec2]) {
    assert_eq!(a.len(), b.len());
    for (p, q) in a.iter().zip(b) {
        assert!((*p - *q).length() < 1e-3, "{p:?} != {q:?}");
    }
}

#[test]
fn test_json_roundtrip_preserves_rendered_geometry() {
    init_logger();
    let mut controller = AppController::new();
    let mut state = AppState::seeded();
    controller
        .handle_intent(&mut state, AppIntent::ParallelCountChanged { count: 3 })
        .expect("ParallelCountChanged");
    controller
        .handle_intent(&mut state, AppIntent::ParallelSpacingChanged { spacing: 12.0 })
        .expect("ParallelSpacingChanged");
    controller
        .handle_intent(
            &mut state,
            AppIntent::ParallelModeChanged {
                mode: ParallelMode::VertexBisector,
            },
        )
        .expect("ParallelModeChanged");

    let path = temp_path("roundtrip.json");
    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveDocumentRequested { path: path.clone() },
        )
        .expect("Speichern sollte funktionieren");

    let mut restored = AppState::new();
    controller
        .handle_intent(
            &mut restored,
            AppIntent::LoadDocumentRequested { path: path.clone() },
        )
        .expect("Laden sollte funktionieren");
    let _ = std::fs::remove_file(&path);

    let before = render_scene::build(&state, true);
    let after = render_scene::build(&restored, true);
    assert_eq!(before.curves.len(), after.curves.len());
    for (a, b) in before.curves.iter().zip(&after.curves) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.style, b.style);
        assert_paths_close(&a.centerline, &b.centerline);
        assert_eq!(a.parallels.len(), b.parallels.len());
        for (pa, pb) in a.parallels.iter().zip(&b.parallels) {
            assert_paths_close(pa, pb);
        }
    }
    assert_eq!(
        restored.current_entry().curve.parallel_mode(),
        ParallelMode::VertexBisector
    );
    assert_eq!(restored.panel.parallel_count, 3);
}

#[test]
fn test_failed_load_keeps_document() {
    let mut controller = AppController::new();
    let mut state = AppState::seeded();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::LoadDocumentRequested {
            path: temp_path("does_not_exist.json"),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.document.len(), 2);
}

#[test]
fn test_load_rejects_invalid_color() {
    let path = temp_path("bad_color.json");
    std::fs::write(
        &path,
        r#"{ "curves": [ { "name": "x", "curve": { "points": [] }, "color": "blau" } ] }"#,
    )
    .expect("Testdatei schreiben");

    let result = load_document(&path);
    let _ = std::fs::remove_file(&path);

    let message = format!("{:#}", result.expect_err("Farbe ist ungültig"));
    assert!(message.contains("blau"), "{message}");
}

#[test]
fn test_save_and_load_functions_roundtrip() {
    let doc = curvita::Document::seeded();
    let path = temp_path("direct.json");

    save_document(&doc, &path).expect("Speichern");
    let content = std::fs::read_to_string(&path).expect("Lesen");
    let _ = std::fs::remove_file(&path);

    let restored = parse_document(&content).expect("Parsen");
    assert_eq!(restored.len(), doc.len());
    for (a, b) in doc.entries().iter().zip(restored.entries()) {
        assert_eq!(a.curve.positions(), b.curve.positions());
    }
}

#[test]
fn test_svg_export_is_flattened() {
    let mut controller = AppController::new();
    let mut state = AppState::seeded();
    let path = temp_path("export.svg");

    controller
        .handle_intent(&mut state, AppIntent::ExportSvgRequested { path: path.clone() })
        .expect("Export sollte funktionieren");
    let svg = std::fs::read_to_string(&path).expect("SVG lesen");
    let _ = std::fs::remove_file(&path);

    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("width=\"1080.000\""));
    assert_eq!(svg.matches("<polyline").count(), 2);
    assert!(!svg.contains("<circle"));
    assert!(!svg.contains("id=\"overlay\""));
    // Bearbeitungsmodus bleibt unverändert
    assert!(state.document.edit_mode);
}

#[test]
fn test_svg_export_with_overlay() {
    let state = AppState::seeded();
    let scene = render_scene::build(&state, false);
    let svg = curvita::io::write_svg(&scene);

    // 2 Kurven + Halo + Highlight + Hilfslinie
    assert_eq!(svg.matches("<polyline").count(), 5);
    assert_eq!(svg.matches("<circle").count(), 5);
    assert!(svg.contains("stroke-dasharray=\"5.000 5.000\""));
}

#[test]
fn test_options_file_drives_new_state() {
    let path = temp_path("options.toml");
    let mut options = EditorOptions::default();
    options.default_stroke_width = 12.0;
    options.point_hit_radius_min = 8.0;
    options.save_to_file(&path).expect("Optionen speichern");

    let loaded = EditorOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);

    let state = AppState::with_options(loaded);
    assert_eq!(state.current_entry().style.width, 12.0);
    assert_eq!(state.point_hit_radius(), 24.0);
}
