//! Notifier: the single alert raised when a fetch cycle fails.

use crate::surface::DisplaySurface;

/// Alert text for a failed fetch.
pub const FAILURE_MESSAGE: &str = "Could not fetch the list of users.  Please, try again";

/// Raise exactly one alert. No retry is offered.
pub fn notify_failure<S>(surface: &mut S, message: &str)
where
    S: DisplaySurface + ?Sized,
{
    surface.alert(message);
}
