// Draws a particle field onto anything that can clear itself, fill circles
// and stroke lines. In the browser that is a 2D canvas context.

use crate::color::Color;
use crate::particle_field::ParticleField;
use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    fn clear(&self, width: f64, height: f64);
    fn fill_circle(&self, x: f64, y: f64, radius: f64, style: &str);
    fn stroke_line(&self, from: [f64; 2], to: [f64; 2], style: &str);
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    #[allow(deprecated)]
    fn fill_circle(&self, x: f64, y: f64, radius: f64, style: &str) {
        self.begin_path();
        // arc only fails for a negative radius
        let _ = self.arc(x, y, radius, 0.0, 2.0 * PI);
        self.set_fill_style(&JsValue::from_str(style));
        self.fill();
    }

    #[allow(deprecated)]
    fn stroke_line(&self, from: [f64; 2], to: [f64; 2], style: &str) {
        self.begin_path();
        self.move_to(from[0], from[1]);
        self.line_to(to[0], to[1]);
        self.set_stroke_style(&JsValue::from_str(style));
        self.stroke();
    }
}

pub struct Renderer {
    pub color: Color,
}

impl Renderer {
    pub fn new(color: Color) -> Self {
        Renderer { color }
    }

    pub fn render<S: Surface>(&self, surface: &S, field: &ParticleField) {
        surface.clear(field.width(), field.height());

        let particles = field.particles();
        for p in particles {
            surface.fill_circle(p.pos[0], p.pos[1], p.radius, &self.color.to_rgba(p.opacity));
        }

        for link in field.links() {
            surface.stroke_line(
                particles[link.from].pos,
                particles[link.to].pos,
                &self.color.to_rgba(link.opacity),
            );
        }
    }
}
