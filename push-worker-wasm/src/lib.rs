//! WebAssembly service worker for web push notifications.
//!
//! `js/service-worker.js` is the worker script. It adds the `push` listener
//! synchronously, starts instantiating this module, and routes each event
//! through [`handle_push_event`] once the module is ready:
//!
//! ```text
//! importScripts("/static/pkg/push_worker_wasm.js");
//! const ready = wasm_bindgen("/static/pkg/push_worker_wasm_bg.wasm");
//! self.addEventListener("push", (event) => {
//!   event.waitUntil(ready.then(() => wasm_bindgen.handlePushEvent(event)));
//! });
//! ```
//!
//! Each push message is expected to carry `{"title": "...", "message": "..."}`
//! and becomes one notification with the fixed icon `/static/icon-192.png`.
//!
//! # Event Flow
//!
//! ```text
//! Push service       Worker script              This crate                 Browser UI
//! ─────────────────────────────────────────────────────────────────────────────────────
//! push message ────► PushEvent
//!                    event.waitUntil(ready ───► handlePushEvent
//!                      .then(...))              1. parse data as PushPayload
//!                                                  (malformed → thrown, nothing shown)
//!                                               2. showNotification ─────► notification
//!                    ◄──────────────────────────   display promise
//! ```

use wasm_bindgen::prelude::*;

mod error;
mod handler;
mod notification;
mod payload;
mod worker;

pub use error::PushError;
pub use handler::handle_push;
pub use notification::{NotificationRequest, Notifier, NOTIFICATION_ICON};
pub use payload::PushPayload;
pub use worker::{handle_push_event, notification_options, RegistrationNotifier};

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();
    init_logging();
    log::info!("[Push] {} ready", version());
}

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Errors only if a logger is already set, which is fine.
    let _ = console_log::init_with_level(level);
}

/// Return the crate name and version, to verify the WASM module loaded in the worker.
#[wasm_bindgen]
pub fn version() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
