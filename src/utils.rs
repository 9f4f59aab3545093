use crate::objects::JsError;
use std::{cell::Cell, rc::Rc, time::Duration};
use wasm_bindgen::{closure::Closure, JsCast};
use wasm_bindgen_futures::JsFuture;

pub const OFFLINE: &str = "The Internet connection appears to be offline.";

fn window() -> Result<web_sys::Window, JsError> {
    web_sys::window().ok_or_else(|| "could not obtain window".into())
}

fn millis(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}

pub fn is_online() -> Result<bool, JsError> {
    Ok(window()?.navigator().on_line())
}

/// Resolves once the window reports `online`, or fails after `limit`.
pub async fn wait_for_connectivity(limit: Duration) -> Result<(), JsError> {
    let window = window()?;
    let mut timer = None;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        window.set_ononline(Some(&resolve));
        timer = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&reject, millis(limit))
            .ok();
    });
    let res = JsFuture::from(promise).await;

    window.set_ononline(None);
    if let Some(handle) = timer {
        window.clear_timeout_with_handle(handle);
    }

    res.map(|_| ()).map_err(|_| OFFLINE.into())
}

/// Aborts a request once `duration` has passed. Dropping it disarms the timer.
pub struct Timeout {
    window: web_sys::Window,
    handle: i32,
    fired: Rc<Cell<bool>>,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn abort_after(controller: &web_sys::AbortController, duration: Duration) -> Result<Self, JsError> {
        let window = window()?;
        let fired = Rc::new(Cell::new(false));
        let closure = {
            let controller = controller.clone();
            let fired = fired.clone();

            Closure::wrap(Box::new(move || {
                fired.set(true);
                controller.abort();
            }) as Box<dyn FnMut()>)
        };
        let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            millis(duration),
        )?;

        Ok(Self {
            window,
            handle,
            fired,
            _closure: closure,
        })
    }

    pub fn fired(&self) -> bool {
        self.fired.get()
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.window.clear_timeout_with_handle(self.handle);
    }
}
