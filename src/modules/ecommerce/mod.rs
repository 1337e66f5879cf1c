//! eCommerce module - panel-based analytics view

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{Action, Context, Module};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcommercePanel {
    Kpis,
    Projections,
    Revenue,
    Locations,
    Products,
    Sales,
}

impl EcommercePanel {
    pub const ALL: [EcommercePanel; 6] = [
        EcommercePanel::Kpis,
        EcommercePanel::Projections,
        EcommercePanel::Revenue,
        EcommercePanel::Locations,
        EcommercePanel::Products,
        EcommercePanel::Sales,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            EcommercePanel::Kpis => "Overview",
            EcommercePanel::Projections => "Projections vs Actuals",
            EcommercePanel::Revenue => "Revenue",
            EcommercePanel::Locations => "Revenue by Location",
            EcommercePanel::Products => "Top Selling Products",
            EcommercePanel::Sales => "Total Sales",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }
}

pub struct Ecommerce {
    active_panel: EcommercePanel,
}

impl Default for Ecommerce {
    fn default() -> Self {
        Self::new()
    }
}

impl Ecommerce {
    pub fn new() -> Self {
        Self {
            active_panel: EcommercePanel::Kpis,
        }
    }

    pub fn active_panel(&self) -> EcommercePanel {
        self.active_panel
    }

    pub fn next_panel(&mut self) {
        let next = (self.active_panel.index() + 1) % EcommercePanel::ALL.len();
        self.active_panel = EcommercePanel::ALL[next];
    }

    pub fn prev_panel(&mut self) {
        let len = EcommercePanel::ALL.len();
        let prev = (self.active_panel.index() + len - 1) % len;
        self.active_panel = EcommercePanel::ALL[prev];
    }
}

impl Module for Ecommerce {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &Context) -> Action {
        match key.code {
            KeyCode::Tab
            | KeyCode::Right
            | KeyCode::Char('l')
            | KeyCode::Down
            | KeyCode::Char('j') => {
                self.next_panel();
                Action::None
            }
            KeyCode::BackTab
            | KeyCode::Left
            | KeyCode::Char('h')
            | KeyCode::Up
            | KeyCode::Char('k') => {
                self.prev_panel();
                Action::None
            }
            _ => Action::None,
        }
    }
}
