use std::fmt;

use serde::Serialize;

use super::date::OrderDate;

/// Display identifier of an order, e.g. `#CM9801`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    InProgress,
    Complete,
    Pending,
    Approved,
    Rejected,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Complete => "Complete",
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub name: String,
    /// Opaque asset path, never resolved by the dashboard
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub user: UserRef,
    pub project: String,
    pub address: String,
    pub date: OrderDate,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(
        id: &str,
        user: &str,
        avatar: &str,
        project: &str,
        address: &str,
        date: &str,
        status: OrderStatus,
    ) -> Self {
        Self {
            id: OrderId::new(id),
            user: UserRef {
                name: user.to_string(),
                avatar: avatar.to_string(),
            },
            project: project.to_string(),
            address: address.to_string(),
            date: OrderDate::parse(date),
            status,
        }
    }

    /// Case-insensitive match on order id or user name
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        contains_case_insensitive(self.id.as_str(), needle_lower)
            || contains_case_insensitive(&self.user.name, needle_lower)
    }
}

fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(OrderStatus::InProgress.label(), "In Progress");
        assert_eq!(OrderStatus::Rejected.label(), "Rejected");
    }

    #[test]
    fn test_matches_search() {
        let order = Order::new(
            "#CM9801",
            "Natali Craig",
            "/images/a1.svg",
            "Landing Page",
            "Meadow Lane Oakland",
            "Just now",
            OrderStatus::InProgress,
        );
        assert!(order.matches_search(""));
        assert!(order.matches_search("natali"));
        assert!(order.matches_search("#cm98"));
        assert!(!order.matches_search("landing"));
    }
}
