use std::collections::BTreeSet;

use crate::domain::{Order, OrderId, OrderStatus};
use crate::error::{DashboardError, Result};

/// Immutable, fixed set of orders loaded once at startup
#[derive(Debug, Clone)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new(orders: Vec<Order>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for order in &orders {
            if !seen.insert(order.id.as_str()) {
                return Err(DashboardError::DuplicateOrderId(order.id.to_string()));
            }
        }
        Ok(Self { orders })
    }

    /// The fixed dashboard data set, checked like any other input
    pub fn sample() -> Result<Self> {
        Self::new(sample_orders())
    }

    pub fn as_slice(&self) -> &[Order] {
        &self.orders
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| &order.id == id)
    }

    pub fn contains(&self, id: &OrderId) -> bool {
        self.get(id).is_some()
    }

    /// Orders whose id is in `ids`, in store order
    pub fn pick<'s, 'i>(
        &'s self,
        ids: &'i BTreeSet<OrderId>,
    ) -> impl Iterator<Item = &'s Order> + 'i
    where
        's: 'i,
    {
        self.orders.iter().filter(move |order| ids.contains(&order.id))
    }
}

fn sample_orders() -> Vec<Order> {
    use OrderStatus::*;

    vec![
        Order::new(
            "#CM9801",
            "Natali Craig",
            "/images/a1.svg",
            "Landing Page",
            "Meadow Lane Oakland",
            "Just now",
            InProgress,
        ),
        Order::new(
            "#CM9802",
            "Kate Morrison",
            "/images/a5.svg",
            "CRM Admin pages",
            "Larry San Francisco",
            "A minute ago",
            Complete,
        ),
        Order::new(
            "#CM9803",
            "Drew Cano",
            "/images/a4.svg",
            "Client Project",
            "Bagwell Avenue Ocala",
            "1 hour ago",
            Pending,
        ),
        Order::new(
            "#CM9804",
            "Orlando Diggs",
            "/images/a3.svg",
            "Admin Dashboard",
            "Washburn Baton Rouge",
            "Yesterday",
            Approved,
        ),
        Order::new(
            "#CM9805",
            "Andi Lane",
            "/images/a2.svg",
            "App Landing Page",
            "Nest Lane Olivette",
            "Feb 2, 2023",
            Rejected,
        ),
        Order::new(
            "#CM9806",
            "Sarah Johnson",
            "/images/a1.svg",
            "Mobile App",
            "Main Street Boston",
            "Feb 3, 2023",
            InProgress,
        ),
        Order::new(
            "#CM9807",
            "Michael Chen",
            "/images/a5.svg",
            "E-commerce Site",
            "Oak Avenue Seattle",
            "Feb 4, 2023",
            Complete,
        ),
        Order::new(
            "#CM9808",
            "Emily Davis",
            "/images/a4.svg",
            "Portfolio Website",
            "Pine Street Denver",
            "Feb 5, 2023",
            Pending,
        ),
        Order::new(
            "#CM9809",
            "David Wilson",
            "/images/a3.svg",
            "Blog Platform",
            "Cedar Lane Austin",
            "Feb 6, 2023",
            Approved,
        ),
        Order::new(
            "#CM9810",
            "Lisa Brown",
            "/images/a2.svg",
            "Social Media App",
            "Maple Drive Miami",
            "Feb 7, 2023",
            InProgress,
        ),
        Order::new(
            "#CM9811",
            "James Taylor",
            "/images/a1.svg",
            "Analytics Dashboard",
            "Elm Street Chicago",
            "Feb 8, 2023",
            Complete,
        ),
        Order::new(
            "#CM9812",
            "Maria Garcia",
            "/images/a5.svg",
            "Booking System",
            "Willow Way Phoenix",
            "Feb 9, 2023",
            Pending,
        ),
        Order::new(
            "#CM9813",
            "Robert Martinez",
            "/images/a4.svg",
            "Learning Platform",
            "Birch Road Portland",
            "Feb 10, 2023",
            Approved,
        ),
        Order::new(
            "#CM9814",
            "Jennifer Lee",
            "/images/a3.svg",
            "Fitness Tracker",
            "Spruce Avenue Nashville",
            "Feb 11, 2023",
            InProgress,
        ),
        Order::new(
            "#CM9815",
            "William Anderson",
            "/images/a2.svg",
            "News Portal",
            "Poplar Street Kansas City",
            "Feb 12, 2023",
            Complete,
        ),
    ]
}
