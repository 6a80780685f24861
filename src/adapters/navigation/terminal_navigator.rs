use tracing::info;

use crate::cli::output;
use crate::core::traits::navigator::{Navigator, Route};

/// Navigator for the terminal: there is no page to load, so a navigation
/// tells the user which command opens the target view.
#[derive(Default)]
pub struct TerminalNavigator;

impl TerminalNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        info!(%route, "navigating");
        output::warning(hint(route));
    }
}

fn hint(route: Route) -> &'static str {
    match route {
        Route::Login => "Signed out. Run 'ethics-monitor login' to sign in.",
        Route::Dashboard => "Back to the dashboard: ethics-monitor dashboard",
    }
}
