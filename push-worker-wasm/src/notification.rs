//! Notification requests and the seam to the platform notification API.

use crate::error::PushError;
use crate::payload::PushPayload;

/// Icon shown on every push notification.
pub const NOTIFICATION_ICON: &str = "/static/icon-192.png";

/// A request to display one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Heading, from the payload `title`.
    pub title: String,
    /// Body text, from the payload `message`.
    pub body: String,
    /// Icon URL, always [`NOTIFICATION_ICON`].
    pub icon: &'static str,
}

impl From<PushPayload> for NotificationRequest {
    fn from(payload: PushPayload) -> Self {
        Self {
            title: payload.title,
            body: payload.message,
            icon: NOTIFICATION_ICON,
        }
    }
}

/// Something that can put a notification in front of the user.
///
/// In the browser this is the service worker registration. `Pending` is the
/// work the caller must keep alive until display completes; there it
/// is the promise returned by `showNotification()`.
pub trait Notifier {
    /// Handle to the in-flight display request.
    type Pending;

    /// Ask the platform to display `request`.
    fn show_notification(
        &self,
        request: &NotificationRequest,
    ) -> Result<Self::Pending, PushError>;
}
