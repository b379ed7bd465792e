//! Browser client for Pong
//!
//! Canvas 2D rendering and DOM input around the `game_core` simulation.
//! Note: only built for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod canvas;
mod input;

use canvas::CanvasSink;
use game_core::*;
use input::{listen, listen_active, wire_direction_buttons, wire_keyboard, wire_pressed_styling};
use input::{DomInput, InputQueue};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, Document, Element, Event, HtmlCanvasElement};

/// Browser console logging
pub struct ConsoleEnv;

impl Environment for ConsoleEnv {
    fn log(&self, msg: String) {
        console::log_1(&JsValue::from_str(&msg));
    }
}

/// Every element the page must provide
#[derive(Clone)]
struct Elements {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    screen: Element,
    left_score: Element,
    right_score: Element,
    up: Element,
    down: Element,
    start: Element,
}

impl Elements {
    fn lookup(document: &Document) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = by_id(document, "pong")?
            .dyn_into()
            .map_err(|_| JsValue::from_str("#pong is not a canvas"))?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas 2D context unavailable"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("Unexpected 2D context type"))?;

        Ok(Self {
            canvas,
            ctx,
            screen: by_selector(document, ".screen")?,
            left_score: by_id(document, "left-score")?,
            right_score: by_id(document, "right-score")?,
            up: by_selector(document, ".up")?,
            down: by_selector(document, ".down")?,
            start: by_selector(document, ".start-btn")?,
        })
    }

    /// Match the canvas to its container and return the new playfield
    fn fit_canvas(&self) -> Playfield {
        let width = self.screen.client_width().max(0) as u32;
        let height = self.screen.client_height().max(0) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        Playfield::new(width as f32, height as f32)
    }
}

fn by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{}", id)))
}

fn by_selector(document: &Document, selector: &str) -> Result<Element, JsValue> {
    document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("Missing element {}", selector)))
}

/// Page-wide client state shared by listeners and the frame loop
struct Client {
    elements: Elements,
    session: Session,
    queue: InputQueue,
    last_frame_ms: Option<f64>,
}

impl Client {
    fn new(elements: Elements) -> Self {
        Self {
            elements,
            session: Session::new(),
            queue: InputQueue::default(),
            last_frame_ms: None,
        }
    }

    /// Start button: first press builds the game, later presses restart it
    fn start_or_restart(&mut self) -> StartOutcome {
        let elements = self.elements.clone();
        let queue = self.queue.clone();
        self.session.start_or_restart(move || {
            // Drop anything pressed before the match existed
            queue.borrow_mut().clear();
            let field = elements.fit_canvas();
            Game::new(
                field,
                Config::new(),
                js_sys::Date::now() as u64,
                Box::new(DomInput::new(queue)),
                Box::new(CanvasSink::new(
                    elements.ctx,
                    elements.left_score,
                    elements.right_score,
                )),
                Box::new(ConsoleEnv),
            )
        })
    }

    fn resize(&mut self) {
        if self.session.is_started() {
            let field = self.elements.fit_canvas();
            self.session.resize(field);
        }
    }

    fn frame(&mut self, now_ms: f64) {
        let dt = match self.last_frame_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 1.0 / 60.0,
        };
        self.last_frame_ms = Some(now_ms);
        self.session.frame(dt);
    }
}

fn request_animation_frame(client: Rc<RefCell<Client>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(move |now_ms: f64| {
        client.borrow_mut().frame(now_ms);
        request_animation_frame(client);
    });
    if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
        console::log_2(&JsValue::from_str("requestAnimationFrame failed:"), &e);
    }
}

fn wire_start_button(client: &Rc<RefCell<Client>>, start: &Element) -> Result<(), JsValue> {
    let on_start = {
        let client = client.clone();
        move || {
            let outcome = client.borrow_mut().start_or_restart();
            if outcome == StartOutcome::Started {
                request_animation_frame(client.clone());
            }
        }
    };

    let on_click = on_start.clone();
    listen(start, "click", move |_event: Event| on_click())?;
    listen_active(start, "touchstart", move |event: Event| {
        event.prevent_default();
        on_start();
    })?;
    Ok(())
}

fn run() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let elements = Elements::lookup(&document)?;

    wire_pressed_styling(&document)?;

    let client = Rc::new(RefCell::new(Client::new(elements.clone())));
    let queue = client.borrow().queue.clone();
    wire_keyboard(&document, &queue)?;
    wire_direction_buttons(&document, &elements.up, &elements.down, &queue)?;
    wire_start_button(&client, &elements.start)?;

    let resize_client = client.clone();
    listen(&window, "resize", move |_event: Event| {
        resize_client.borrow_mut().resize();
    })?;

    console::log_1(&JsValue::from_str("Pong ready, press start"));
    Ok(())
}

/// Entry point. A page missing any required element simply never starts.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = run() {
        console::log_2(&JsValue::from_str("Pong not started:"), &e);
    }
}
