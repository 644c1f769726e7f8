//! CLI command handlers. Each runs exactly one fetch cycle.

mod click;
mod html;
mod list;

pub use click::run_click;
pub use html::run_html;
pub use list::run_list;

use userlist_core::surface::{lock, Page, SharedSurface};

/// Print and drain alerts raised during the cycle.
fn show_alerts(surface: &SharedSurface<Page>) {
    for message in lock(surface).take_alerts() {
        eprintln!("alert: {message}");
    }
}
