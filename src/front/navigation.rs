use derive_more::Display;
use log::info;
use serde::Serialize;

use crate::services::Navigator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Route {
    #[display("Home")]
    Home,
    #[display("AddSubscription")]
    AddSubscription,
}

/// Entry of the bottom tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub route: Route,
    pub label: &'static str,
    pub tab_bar_visible: bool,
}

/// The subscription screen comes first and hides the tab bar while open
pub const TABS: [Tab; 2] = [
    Tab {
        route: Route::AddSubscription,
        label: "Subscribe",
        tab_bar_visible: false,
    },
    Tab {
        route: Route::Home,
        label: "Home",
        tab_bar_visible: true,
    },
];

pub fn initial_route() -> Route {
    TABS[0].route
}

pub fn tab_for(route: Route) -> Option<&'static Tab> {
    TABS.iter().find(|tab| tab.route == route)
}

/// Navigator of the command line front: logs the move and prints the destination
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        info!("navigating to {}", route);
        let label = tab_for(route).map(|tab| tab.label).unwrap_or("?");
        println!("==> {label}");
    }
}
