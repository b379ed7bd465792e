//! Keyboard, pointer and touch input

use game_core::{key_down_event, key_up_event, InputEvent, InputSource};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, KeyboardEvent};

/// Events queued by DOM listeners until the next frame drains them
pub type InputQueue = Rc<RefCell<VecDeque<InputEvent>>>;

/// Input source backed by the shared queue
pub struct DomInput {
    queue: InputQueue,
}

impl DomInput {
    pub fn new(queue: InputQueue) -> Self {
        Self { queue }
    }
}

impl InputSource for DomInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }
}

/// Register a listener that lives for the rest of the page
pub fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], but non-passive so the handler may call `prevent_default`
pub fn listen_active<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// W/S (or arrows) steer, R restarts after game over
pub fn wire_keyboard(document: &Document, queue: &InputQueue) -> Result<(), JsValue> {
    let down_queue = queue.clone();
    listen(document, "keydown", move |event: Event| {
        let key = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key);
        if let Some(input) = key.as_deref().and_then(key_down_event) {
            down_queue.borrow_mut().push_back(input);
        }
    })?;

    let up_queue = queue.clone();
    listen(document, "keyup", move |event: Event| {
        let key = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key);
        if let Some(input) = key.as_deref().and_then(key_up_event) {
            up_queue.borrow_mut().push_back(input);
        }
    })?;
    Ok(())
}

/// On-screen direction buttons; releasing anywhere on the page stops the paddle
pub fn wire_direction_buttons(
    document: &Document,
    up: &Element,
    down: &Element,
    queue: &InputQueue,
) -> Result<(), JsValue> {
    for (button, input) in [(up, InputEvent::Up), (down, InputEvent::Down)] {
        let mouse_queue = queue.clone();
        listen(button, "mousedown", move |_event: Event| {
            mouse_queue.borrow_mut().push_back(input);
        })?;

        let touch_queue = queue.clone();
        listen_active(button, "touchstart", move |event: Event| {
            event.prevent_default();
            touch_queue.borrow_mut().push_back(input);
        })?;
    }

    let Some(body) = document.body() else {
        return Err(JsValue::from_str("document has no body"));
    };
    for kind in ["mouseup", "touchend"] {
        let release_queue = queue.clone();
        listen(&body, kind, move |_event: Event| {
            release_queue.borrow_mut().push_back(InputEvent::Release);
        })?;
    }
    Ok(())
}

/// Cosmetic pressed state on every `.button`
pub fn wire_pressed_styling(document: &Document) -> Result<(), JsValue> {
    let buttons = document.query_selector_all(".button")?;
    for i in 0..buttons.length() {
        let Some(button) = buttons
            .item(i)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };

        let pressed = button.clone();
        listen(&button, "mousedown", move |_event: Event| {
            let _ = pressed.class_list().add_1("pressed");
        })?;
        let pressed = button.clone();
        listen_active(&button, "touchstart", move |event: Event| {
            event.prevent_default();
            let _ = pressed.class_list().add_1("pressed");
        })?;

        for kind in ["mouseup", "mouseleave", "touchend", "touchcancel"] {
            let released = button.clone();
            listen(&button, kind, move |_event: Event| {
                let _ = released.class_list().remove_1("pressed");
            })?;
        }
    }
    Ok(())
}
