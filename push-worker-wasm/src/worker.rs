//! Service worker glue.
//!
//! The `push` listener itself lives in `js/service-worker.js`, which adds it
//! during the worker script's first evaluation. That listener keeps the
//! event alive with `waitUntil` and, once the module is instantiated, hands
//! the event to [`handle_push_event`].

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{NotificationOptions, PushEvent, ServiceWorkerGlobalScope, ServiceWorkerRegistration};

use crate::error::PushError;
use crate::handler::handle_push;
use crate::notification::{NotificationRequest, Notifier};

/// Displays notifications via `registration.showNotification()`.
#[derive(Debug, Clone)]
pub struct RegistrationNotifier {
    registration: ServiceWorkerRegistration,
}

impl RegistrationNotifier {
    pub fn new(registration: ServiceWorkerRegistration) -> Self {
        Self { registration }
    }
}

impl Notifier for RegistrationNotifier {
    type Pending = Promise;

    fn show_notification(&self, request: &NotificationRequest) -> Result<Promise, PushError> {
        self.registration
            .show_notification_with_options(&request.title, &notification_options(request))
            .map_err(|e| PushError::platform("showNotification", &e))
    }
}

/// Build the `options` argument of `showNotification()`.
pub fn notification_options(request: &NotificationRequest) -> NotificationOptions {
    let options = NotificationOptions::new();
    options.set_body(&request.body);
    options.set_icon(request.icon);
    options
}

fn worker_scope() -> Result<ServiceWorkerGlobalScope, PushError> {
    js_sys::global()
        .dyn_into::<ServiceWorkerGlobalScope>()
        .map_err(|_| PushError::Platform("global scope is not a service worker".to_string()))
}

/// Show the notification for one push event.
///
/// Returns the display promise for the caller's `waitUntil`. By the time
/// this runs the event may already be past dispatch, so it never calls
/// `waitUntil` itself. A malformed payload throws, which rejects the
/// promise the listener handed to `waitUntil`.
#[wasm_bindgen(js_name = "handlePushEvent")]
pub fn handle_push_event(event: &PushEvent) -> Result<Promise, JsValue> {
    let notifier = RegistrationNotifier::new(worker_scope()?.registration());
    let text = event.data().map(|data| data.text());
    let displayed = handle_push(&notifier, text.as_deref())?;

    Ok(log_rejection(displayed))
}

/// Pass `promise` through unchanged, logging if it rejects.
fn log_rejection(promise: Promise) -> Promise {
    future_to_promise(async move {
        JsFuture::from(promise).await.inspect_err(|e| {
            log::warn!("[Push] showNotification rejected: {e:?}");
        })
    })
}
