//! Canvas2D backend - replays recorded draw commands onto an HTML5 canvas.

use tablero_core::{
    BoxStyle, Color, DrawCommand, FontWeight, Paint, Point, Rect, SlicePath, StrokeStyle,
    SurfaceSpec, TextAlign, TextBaseline, TextStyle,
};
use wasm_bindgen::JsCast;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

/// Renderer that draws to an HTML5 Canvas 2D context.
pub struct Canvas2DRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2DRenderer {
    /// Create a renderer for the given canvas element.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("failed to get 2d context: {e:?}"))?
            .ok_or("no 2d context available")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "failed to cast to CanvasRenderingContext2d")?;

        Ok(Self { canvas, ctx })
    }

    /// Size the backing store and apply the 2x scale so all subsequent
    /// drawing uses logical coordinates. Resizing the canvas resets the
    /// context state, so this must run before every frame.
    pub fn prepare(&self, spec: &SurfaceSpec) {
        self.canvas.set_width(spec.backing_width());
        self.canvas.set_height(spec.backing_height());
        self.ctx
            .scale(f64::from(spec.scale()), f64::from(spec.scale()))
            .ok();
    }

    /// Replay a list of draw commands.
    pub fn render(&self, commands: &[DrawCommand]) {
        for cmd in commands {
            self.render_command(cmd);
        }
    }

    fn render_command(&self, cmd: &DrawCommand) {
        match cmd {
            DrawCommand::Rect { bounds, style } => self.draw_rect(bounds, style),
            DrawCommand::Circle {
                center,
                radius,
                style,
            } => self.draw_circle(center, *radius, style),
            DrawCommand::Path {
                points,
                closed,
                fill,
                stroke,
            } => self.draw_path(points, *closed, fill.as_ref(), stroke.as_ref()),
            DrawCommand::Slice { path, style } => self.draw_slice(path, style),
            DrawCommand::Text {
                content,
                position,
                style,
            } => self.draw_text(content, position, style),
        }
    }

    fn draw_rect(&self, bounds: &Rect, style: &BoxStyle) {
        self.ctx.begin_path();
        self.ctx.rect(
            f64::from(bounds.x),
            f64::from(bounds.y),
            f64::from(bounds.width),
            f64::from(bounds.height),
        );
        self.fill_and_stroke(style);
    }

    fn draw_circle(&self, center: &Point, radius: f32, style: &BoxStyle) {
        self.ctx.begin_path();
        self.ctx
            .arc(
                f64::from(center.x),
                f64::from(center.y),
                f64::from(radius),
                0.0,
                std::f64::consts::TAU,
            )
            .ok();
        self.fill_and_stroke(style);
    }

    fn draw_path(
        &self,
        points: &[Point],
        closed: bool,
        fill: Option<&Paint>,
        stroke: Option<&StrokeStyle>,
    ) {
        if points.is_empty() {
            return;
        }

        self.ctx.begin_path();
        self.ctx
            .move_to(f64::from(points[0].x), f64::from(points[0].y));
        for p in points.iter().skip(1) {
            self.ctx.line_to(f64::from(p.x), f64::from(p.y));
        }
        if closed {
            self.ctx.close_path();
        }

        if let Some(paint) = fill {
            self.set_fill_paint(paint);
            self.ctx.fill();
        }
        if let Some(stroke) = stroke {
            self.apply_stroke(stroke);
            self.ctx.stroke();
        }
    }

    /// Pie slices fan out from the center; donut slices trace the outer arc
    /// forward and the inner arc backward to close the annulus.
    fn draw_slice(&self, path: &SlicePath, style: &BoxStyle) {
        let cx = f64::from(path.center.x);
        let cy = f64::from(path.center.y);
        let start = f64::from(path.start_angle);
        let end = f64::from(path.end_angle);

        self.ctx.begin_path();
        match path.inner_radius {
            None => {
                self.ctx.move_to(cx, cy);
                self.ctx
                    .arc(cx, cy, f64::from(path.outer_radius), start, end)
                    .ok();
            }
            Some(inner) => {
                self.ctx
                    .arc(cx, cy, f64::from(path.outer_radius), start, end)
                    .ok();
                self.ctx
                    .arc_with_anticlockwise(cx, cy, f64::from(inner), end, start, true)
                    .ok();
            }
        }
        self.ctx.close_path();
        self.fill_and_stroke(style);
    }

    fn draw_text(&self, content: &str, position: &Point, style: &TextStyle) {
        let font = match style.weight {
            FontWeight::Bold => format!("bold {}px sans-serif", style.size),
            FontWeight::Normal => format!("{}px sans-serif", style.size),
        };
        self.ctx.set_font(&font);
        self.ctx.set_text_align(match style.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        });
        self.ctx.set_text_baseline(match style.baseline {
            TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
            TextBaseline::Alphabetic => "alphabetic",
        });
        self.ctx.set_fill_style_str(&color_to_css(&style.color));
        self.ctx
            .fill_text(content, f64::from(position.x), f64::from(position.y))
            .ok();
    }

    fn fill_and_stroke(&self, style: &BoxStyle) {
        if let Some(shadow) = &style.shadow {
            self.ctx.set_shadow_blur(f64::from(shadow.blur));
            self.ctx.set_shadow_color(&color_to_css(&shadow.color));
        }
        if let Some(paint) = &style.fill {
            self.set_fill_paint(paint);
            self.ctx.fill();
        }
        if style.shadow.is_some() {
            self.ctx.set_shadow_blur(0.0);
        }
        if let Some(stroke) = &style.stroke {
            self.apply_stroke(stroke);
            self.ctx.stroke();
        }
    }

    fn set_fill_paint(&self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color_to_css(color)),
            Paint::Linear(gradient) => {
                let g = self.make_gradient(gradient);
                self.ctx.set_fill_style_canvas_gradient(&g);
            }
        }
    }

    fn apply_stroke(&self, stroke: &StrokeStyle) {
        match &stroke.paint {
            Paint::Solid(color) => self.ctx.set_stroke_style_str(&color_to_css(color)),
            Paint::Linear(gradient) => {
                let g = self.make_gradient(gradient);
                self.ctx.set_stroke_style_canvas_gradient(&g);
            }
        }
        self.ctx.set_line_width(f64::from(stroke.width));
        self.ctx.set_line_cap(match stroke.cap {
            tablero_core::LineCap::Butt => "butt",
            tablero_core::LineCap::Round => "round",
        });
        self.ctx.set_line_join(match stroke.join {
            tablero_core::LineJoin::Miter => "miter",
            tablero_core::LineJoin::Round => "round",
        });
    }

    fn make_gradient(&self, gradient: &tablero_core::Gradient) -> CanvasGradient {
        let g = self.ctx.create_linear_gradient(
            f64::from(gradient.from.x),
            f64::from(gradient.from.y),
            f64::from(gradient.to.x),
            f64::from(gradient.to.y),
        );
        g.add_color_stop(0.0, &color_to_css(&gradient.start)).ok();
        g.add_color_stop(1.0, &color_to_css(&gradient.end)).ok();
        g
    }
}

fn color_to_css(color: &Color) -> String {
    format!(
        "rgba({},{},{},{})",
        (color.r * 255.0).round() as u8,
        (color.g * 255.0).round() as u8,
        (color.b * 255.0).round() as u8,
        color.a
    )
}
