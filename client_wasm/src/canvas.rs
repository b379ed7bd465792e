//! Canvas 2D drawing surface and the DOM score labels

use game_core::{DrawCommand, OutputSink, Side};
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys::{console, CanvasRenderingContext2d, Element};

const FONT_FAMILY: &str = "'Press Start 2P'";

pub struct CanvasSink {
    ctx: CanvasRenderingContext2d,
    left_score: Element,
    right_score: Element,
}

impl CanvasSink {
    pub fn new(ctx: CanvasRenderingContext2d, left_score: Element, right_score: Element) -> Self {
        Self {
            ctx,
            left_score,
            right_score,
        }
    }

    fn render(&self, command: &DrawCommand) -> Result<(), JsValue> {
        match command {
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                color,
            } => {
                self.ctx.set_fill_style_str(&color.to_css());
                self.ctx
                    .fill_rect(*x as f64, *y as f64, *width as f64, *height as f64);
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                self.ctx.set_fill_style_str(&color.to_css());
                self.ctx.begin_path();
                self.ctx
                    .arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                self.ctx.close_path();
                self.ctx.fill();
            }
            DrawCommand::Text {
                text,
                pos,
                size,
                color,
            } => {
                self.ctx.set_fill_style_str(&color.to_css());
                self.ctx.set_font(&format!("{}px {}", size, FONT_FAMILY));
                self.ctx.set_text_align("center");
                self.ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
            }
        }
        Ok(())
    }
}

impl OutputSink for CanvasSink {
    fn draw(&mut self, command: DrawCommand) {
        if let Err(e) = self.render(&command) {
            console::log_2(&JsValue::from_str("Draw failed:"), &e);
        }
    }

    fn set_score(&mut self, side: Side, score: u8) {
        let label = match side {
            Side::Left => &self.left_score,
            Side::Right => &self.right_score,
        };
        label.set_text_content(Some(&score.to_string()));
    }
}
