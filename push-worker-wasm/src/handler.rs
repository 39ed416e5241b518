//! Push event handling, independent of the browser.

use crate::error::PushError;
use crate::notification::{NotificationRequest, Notifier};
use crate::payload::PushPayload;

/// Turn the data of one push event into one notification request.
///
/// Parses first. A malformed payload returns before `notifier` is touched, so
/// a failed event never produces a notification. On success the notifier is
/// called exactly once and its pending handle is returned for the caller to
/// keep alive.
pub fn handle_push<N: Notifier>(
    notifier: &N,
    data: Option<&str>,
) -> Result<N::Pending, PushError> {
    let payload = PushPayload::from_event_data(data).inspect_err(|e| {
        log::warn!("[Push] Dropping push event: {e}");
    })?;
    log::debug!("[Push] Received push: {payload:?}");

    let request = NotificationRequest::from(payload);
    notifier.show_notification(&request)
}
