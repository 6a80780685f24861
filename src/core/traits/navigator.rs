/// Destinations the client can be sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Login => write!(f, "login"),
            Route::Dashboard => write!(f, "dashboard"),
        }
    }
}

/// Port for "hard navigation": leaving the current view for another one.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
