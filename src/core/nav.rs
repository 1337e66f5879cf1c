//! View router and shell chrome flags

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewId {
    #[default]
    OrderList,
    Ecommerce,
}

impl ViewId {
    pub const ALL: [ViewId; 2] = [ViewId::OrderList, ViewId::Ecommerce];

    /// Unknown names fall back to the order list
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "ecommerce" | "e-commerce" | "analytics" => ViewId::Ecommerce,
            _ => ViewId::OrderList,
        }
    }

    /// Sidebar entry under "Dashboards"
    pub fn title(&self) -> &'static str {
        match self {
            ViewId::OrderList => "Default",
            ViewId::Ecommerce => "eCommerce",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            ViewId::OrderList => "Order List",
            ViewId::Ecommerce => "eCommerce",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            ViewId::OrderList => '1',
            ViewId::Ecommerce => '2',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub view: ViewId,
    pub sidebar_open: bool,
    pub drawer_open: bool,
    pub theme: Theme,
}

impl NavState {
    /// Switching views always collapses the sidebar
    pub fn navigate(self, view: ViewId) -> Self {
        Self {
            view,
            sidebar_open: false,
            ..self
        }
    }

    pub fn toggle_sidebar(self) -> Self {
        Self {
            sidebar_open: !self.sidebar_open,
            ..self
        }
    }

    pub fn close_sidebar(self) -> Self {
        Self {
            sidebar_open: false,
            ..self
        }
    }

    pub fn toggle_drawer(self) -> Self {
        Self {
            drawer_open: !self.drawer_open,
            ..self
        }
    }

    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    pub fn breadcrumb(&self) -> String {
        format!("Dashboards / {}", self.view.title())
    }
}
