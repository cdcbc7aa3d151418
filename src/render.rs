use crate::model::constants::LINK_LINE_WIDTH;
use crate::model::{particle_color, ParticleField, Rgb, Theme};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D-canvas painter for the particle field.
pub struct FieldRenderer {
    pub canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl FieldRenderer {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    /// Clears the surface, draws every particle and advances it, then draws
    /// the links between the advanced positions.
    pub fn frame(&self, field: &mut ParticleField, theme: Theme) {
        let color = particle_color(theme);
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);

        field.draw_and_step(|p| {
            self.ctx.begin_path();
            _ = self
                .ctx
                .arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
            self.ctx.set_fill_style_str(&color.rgba(p.opacity));
            self.ctx.fill();
        });

        self.draw_links(field, color);
    }

    fn draw_links(&self, field: &ParticleField, color: Rgb) {
        let particles = field.particles();
        self.ctx.set_line_width(LINK_LINE_WIDTH);
        for link in field.links() {
            let (a, b) = (&particles[link.a], &particles[link.b]);
            self.ctx.begin_path();
            self.ctx.move_to(a.pos.x as f64, a.pos.y as f64);
            self.ctx.line_to(b.pos.x as f64, b.pos.y as f64);
            self.ctx.set_stroke_style_str(&color.rgba(link.alpha));
            self.ctx.stroke();
        }
    }
}
