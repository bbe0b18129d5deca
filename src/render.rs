use crate::core::waves::Rgba;
use crate::core::{Glow, Painter};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// [`Painter`] backed by a browser 2D canvas context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &web::CanvasRenderingContext2d {
        &self.ctx
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn stroke_polyline(&mut self, points: &[Vec2], color: Rgba, width: f32, glow: Option<Glow>) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.set_stroke_style_str(&color.to_css());
        ctx.set_line_width(width as f64);
        match glow {
            Some(g) => {
                ctx.set_shadow_color(&g.color.to_css());
                ctx.set_shadow_blur(g.blur as f64);
            }
            None => ctx.set_shadow_blur(0.0),
        }
        ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            ctx.line_to(p.x as f64, p.y as f64);
        }
        ctx.stroke();
        // shadows must not bleed into particles and links
        ctx.set_shadow_blur(0.0);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if !(radius > 0.0) {
            return;
        }
        let ctx = &self.ctx;
        ctx.begin_path();
        _ = ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        ctx.set_fill_style_str(&color.to_css());
        ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.set_stroke_style_str(&color.to_css());
        ctx.set_line_width(width as f64);
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.stroke();
    }
}
