//! Browser client for Pong
//!
//! Paints the game on a canvas with the 2D context and drives the user paddle
//! from `mousemove` events. The loop runs on `setInterval` at the configured
//! tick rate.

pub mod input;

#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
pub use app::*;

#[cfg(target_arch = "wasm32")]
mod app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use game_core::{Config, Driver, GameState};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{console, HtmlCanvasElement, MouseEvent};

    use crate::canvas::CanvasTarget;
    use crate::input::{to_board_y, PointerQueue};

    type CanvasDriver = Driver<CanvasTarget, PointerQueue>;

    /// A running game attached to a canvas
    #[wasm_bindgen]
    pub struct Game {
        driver: Rc<RefCell<CanvasDriver>>,
        canvas: HtmlCanvasElement,
        interval_id: Option<i32>,
        _on_tick: Closure<dyn FnMut()>,
        on_pointer: Closure<dyn FnMut(MouseEvent)>,
    }

    #[wasm_bindgen]
    impl Game {
        /// Stop the loop and detach the pointer listener
        pub fn stop(&mut self) {
            if let Some(id) = self.interval_id.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(id);
                }
                if let Err(e) = self.canvas.remove_event_listener_with_callback(
                    "mousemove",
                    self.on_pointer.as_ref().unchecked_ref(),
                ) {
                    console::error_2(&"Pong: detaching pointer listener failed".into(), &e);
                }
                console::log_1(&"Pong: stopped".into());
            }
        }

        /// Fresh start: centred entities, zero scores
        pub fn reset(&self) {
            self.driver.borrow_mut().state.reset();
        }

        #[wasm_bindgen(getter)]
        pub fn running(&self) -> bool {
            self.interval_id.is_some()
        }

        #[wasm_bindgen(getter)]
        pub fn user_score(&self) -> u32 {
            self.driver.borrow().state.score().user
        }

        #[wasm_bindgen(getter)]
        pub fn cpu_score(&self) -> u32 {
            self.driver.borrow().state.score().cpu
        }
    }

    impl Drop for Game {
        fn drop(&mut self) {
            self.stop();
        }
    }

    /// Start a game on the canvas with id `canvas_id`.
    ///
    /// `config_json` may override any tuning value; the board always takes
    /// the canvas size.
    #[wasm_bindgen]
    pub fn start(canvas_id: &str, config_json: Option<String>) -> Result<Game, JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("Canvas '{canvas_id}' not found")))?
            .dyn_into::<HtmlCanvasElement>()?;

        let mut config = match config_json {
            Some(json) => Config::from_json(&json)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?,
            None => Config::new(),
        };
        config.board_width = canvas.width() as f32;
        config.board_height = canvas.height() as f32;
        config
            .validate()
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?;

        let interval_ms = config.tick_interval().as_millis().max(1) as i32;
        let pointer = PointerQueue::new();
        let target = CanvasTarget::new(&canvas)?;
        let driver = Rc::new(RefCell::new(Driver::new(
            GameState::new(config),
            target,
            pointer.clone(),
        )));

        let on_pointer = {
            let canvas = canvas.clone();
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let rect = canvas.get_bounding_client_rect();
                pointer.push(to_board_y(event.client_y() as f64, rect.top()));
            })
        };
        canvas.add_event_listener_with_callback("mousemove", on_pointer.as_ref().unchecked_ref())?;

        let on_tick = {
            let driver = Rc::clone(&driver);
            Closure::<dyn FnMut()>::new(move || {
                if let Err(e) = driver.borrow_mut().tick() {
                    console::error_2(&"Pong: frame failed".into(), &e);
                }
            })
        };

        // Paint the opening frame before the first tick
        driver.borrow_mut().present()?;

        let interval_id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            on_tick.as_ref().unchecked_ref(),
            interval_ms,
        )?;

        console::log_1(&format!("Pong: started, tick every {interval_ms}ms").into());

        Ok(Game {
            driver,
            canvas,
            interval_id: Some(interval_id),
            _on_tick: on_tick,
            on_pointer,
        })
    }
}
