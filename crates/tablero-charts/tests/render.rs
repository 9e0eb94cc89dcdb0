//! Integration tests for the dashboard chart layer.

use std::collections::HashMap;
use std::f32::consts::TAU;
use tablero_charts::{ChartRegistry, ChartRenderer, RenderContext, SurfaceProvider};
use tablero_core::{
    Color, DrawCommand, Locale, Paint, Rect, RecordingCanvas, Size, SurfaceSpec, ThemeMode,
};

/// Map-backed surface provider: every chart mounted at the same size.
struct TestSurfaces {
    bounds: Rect,
    rendered: HashMap<String, Vec<DrawCommand>>,
}

impl TestSurfaces {
    fn new(width: f32, height: f32) -> Self {
        Self {
            bounds: Rect::new(0.0, 0.0, width, height),
            rendered: HashMap::new(),
        }
    }

    fn commands(&self, id: &str) -> &[DrawCommand] {
        self.rendered.get(id).map_or(&[], Vec::as_slice)
    }
}

impl SurfaceProvider for TestSurfaces {
    fn surface_bounds(&mut self, _id: &str) -> Option<Rect> {
        Some(self.bounds)
    }

    fn submit(&mut self, id: &str, commands: Vec<DrawCommand>) {
        self.rendered.insert(id.to_string(), commands);
    }
}

fn render_all(ctx: RenderContext) -> TestSurfaces {
    let mut surfaces = TestSurfaces::new(400.0, 300.0);
    ChartRegistry::standard().render_all(&ctx, &mut surfaces);
    surfaces
}

fn background_of(commands: &[DrawCommand]) -> Option<Color> {
    match commands.first()? {
        DrawCommand::Rect { style, .. } => style.fill.as_ref().and_then(Paint::solid_color),
        _ => None,
    }
}

fn texts_of(commands: &[DrawCommand]) -> Vec<&str> {
    commands
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn all_six_charts_render() {
    let surfaces = render_all(RenderContext::default());
    assert_eq!(surfaces.rendered.len(), 6);
    for commands in surfaces.rendered.values() {
        assert!(!commands.is_empty());
    }
}

#[test]
fn angular_charts_cover_the_full_circle() {
    let surfaces = render_all(RenderContext::default());
    for id in ["revenueCategoryChart", "paymentMethodsChart"] {
        let sweep: f32 = surfaces
            .commands(id)
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Slice { path, .. } => Some(path.sweep()),
                _ => None,
            })
            .sum();
        assert!((sweep - TAU).abs() < 1e-4, "{id} sweep {sweep}");
    }
}

#[test]
fn theme_toggle_swaps_every_background_atomically() {
    let dark = render_all(RenderContext::new(ThemeMode::Light.toggled(), Locale::En));
    let expected = Color::rgb8(0x1E, 0x29, 0x3B);
    for (id, commands) in &dark.rendered {
        assert_eq!(
            background_of(commands),
            Some(expected),
            "{id} kept a light background"
        );
    }
}

#[test]
fn locale_toggle_swaps_every_label_set_atomically() {
    let arabic = render_all(RenderContext::new(ThemeMode::Light, Locale::En.toggled()));

    // No chart may render any English-table label once the locale is Arabic.
    let english_words = [
        "Jul", "Dec", "Electronics", "Others", "12AM", "Cash", "Sat", "This Year",
    ];
    for (id, commands) in &arabic.rendered {
        let texts = texts_of(commands);
        for word in english_words {
            assert!(!texts.contains(&word), "{id} still shows '{word}'");
        }
    }

    // And each chart carries its Arabic table instead.
    assert!(texts_of(arabic.commands("salesTrendChart")).contains(&"ديسمبر"));
    assert!(texts_of(arabic.commands("revenueCategoryChart")).contains(&"إلكترونيات"));
    assert!(texts_of(arabic.commands("paymentMethodsChart")).contains(&"نقدي"));
    assert!(texts_of(arabic.commands("weeklySalesChart")).contains(&"السبت"));

    // The document direction for the Arabic locale is rtl.
    assert_eq!(Locale::Ar.direction().as_str(), "rtl");
}

#[test]
fn resize_changes_backing_store_to_twice_logical() {
    let spec = SurfaceSpec::from_logical(Size::new(400.0, 300.0));
    assert_eq!((spec.backing_width(), spec.backing_height()), (800, 600));

    let resized = SurfaceSpec::from_logical(Size::new(512.0, 256.0));
    assert_eq!((resized.backing_width(), resized.backing_height()), (1024, 512));
}

#[test]
fn renders_are_pure_across_calls() {
    let first = render_all(RenderContext::default());
    let second = render_all(RenderContext::default());
    for (id, commands) in &first.rendered {
        assert_eq!(commands, &second.rendered[id], "{id} is not deterministic");
    }
}

#[test]
fn absent_surfaces_produce_no_commands() {
    struct NoSurfaces {
        submissions: usize,
    }
    impl SurfaceProvider for NoSurfaces {
        fn surface_bounds(&mut self, _id: &str) -> Option<Rect> {
            None
        }
        fn submit(&mut self, _id: &str, _commands: Vec<DrawCommand>) {
            self.submissions += 1;
        }
    }

    let mut surfaces = NoSurfaces { submissions: 0 };
    ChartRegistry::standard().render_all(&RenderContext::default(), &mut surfaces);
    assert_eq!(surfaces.submissions, 0);
}

#[test]
fn zero_sized_surfaces_are_safe() {
    let mut surfaces = TestSurfaces::new(0.0, 0.0);
    ChartRegistry::standard().render_all(&RenderContext::default(), &mut surfaces);
    for commands in surfaces.rendered.values() {
        assert!(commands.is_empty());
    }
}

#[test]
fn tiny_surfaces_never_emit_non_finite_geometry() {
    let mut surfaces = TestSurfaces::new(10.0, 8.0);
    ChartRegistry::standard().render_all(&RenderContext::default(), &mut surfaces);
    for commands in surfaces.rendered.values() {
        for cmd in commands {
            match cmd {
                DrawCommand::Rect { bounds, .. } => {
                    assert!(bounds.x.is_finite() && bounds.y.is_finite());
                    assert!(bounds.width.is_finite() && bounds.height.is_finite());
                }
                DrawCommand::Circle { center, radius, .. } => {
                    assert!(center.x.is_finite() && center.y.is_finite());
                    assert!(radius.is_finite());
                }
                DrawCommand::Path { points, .. } => {
                    assert!(points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
                }
                DrawCommand::Slice { path, .. } => {
                    assert!(path.sweep().is_finite());
                }
                DrawCommand::Text { position, .. } => {
                    assert!(position.x.is_finite() && position.y.is_finite());
                }
            }
        }
    }
}

#[test]
fn trend_chart_grid_and_peak_marker() {
    // Dataset [42k, 52k, 48k, 60k, 57k, 68k]: first grid label reads 68K and
    // the last marker sits on the plot top edge.
    let registry = ChartRegistry::standard();
    let renderer = registry.find("salesTrendChart").expect("registered");
    let mut canvas = RecordingCanvas::new();
    renderer.render(
        &mut canvas,
        Rect::new(0.0, 0.0, 400.0, 300.0),
        &RenderContext::default(),
    );

    assert_eq!(canvas.texts()[0], "68K");

    let plot_top = 30.0;
    let marker_ys: Vec<f32> = canvas
        .commands()
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::Circle { center, radius, .. } if *radius == 6.0 => Some(center.y),
            _ => None,
        })
        .collect();
    assert!((marker_ys.last().expect("markers") - plot_top).abs() < 0.5);
}

#[test]
fn pie_chart_slice_angles_for_sample_data() {
    // {35, 25, 20, 12, 8} -> 126deg, 90deg, 72deg, 43.2deg, 28.8deg from -90deg.
    let registry = ChartRegistry::standard();
    let renderer = registry.find("revenueCategoryChart").expect("registered");
    let mut canvas = RecordingCanvas::new();
    renderer.render(
        &mut canvas,
        Rect::new(0.0, 0.0, 400.0, 300.0),
        &RenderContext::default(),
    );

    let sweeps: Vec<f32> = canvas
        .slices()
        .iter()
        .map(|s| s.sweep().to_degrees())
        .collect();
    let expected = [126.0, 90.0, 72.0, 43.2, 28.8];
    assert_eq!(sweeps.len(), expected.len());
    for (sweep, expected) in sweeps.iter().zip(expected) {
        assert!((sweep - expected).abs() < 0.01);
    }
    assert!((canvas.slices()[0].start_angle.to_degrees() - (-90.0)).abs() < 1e-3);
}
