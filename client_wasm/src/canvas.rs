//! Canvas 2D drawing surface

use std::f64::consts::TAU;

use game_core::{DrawCommand, DrawTarget};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasTarget {
    ctx: CanvasRenderingContext2d,
}

impl CanvasTarget {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }
}

impl DrawTarget for CanvasTarget {
    type Error = JsValue;

    fn draw(&mut self, command: &DrawCommand) -> Result<(), JsValue> {
        match command {
            DrawCommand::FillRect { x, y, w, h, color } => {
                self.ctx.set_fill_style_str(&color.to_css());
                self.ctx
                    .fill_rect(*x as f64, *y as f64, *w as f64, *h as f64);
            }
            DrawCommand::FillCircle { x, y, r, color } => {
                self.ctx.set_fill_style_str(&color.to_css());
                self.ctx.begin_path();
                self.ctx.arc(*x as f64, *y as f64, *r as f64, 0.0, TAU)?;
                self.ctx.close_path();
                self.ctx.fill();
            }
            DrawCommand::Text {
                text,
                x,
                y,
                font,
                color,
            } => {
                self.ctx.set_fill_style_str(&color.to_css());
                self.ctx.set_font(font);
                self.ctx.fill_text(text, *x as f64, *y as f64)?;
            }
        }
        Ok(())
    }
}
