//! Static drawer content

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedItem {
    pub text: &'static str,
    pub when: &'static str,
}

const fn item(text: &'static str, when: &'static str) -> FeedItem {
    FeedItem { text, when }
}

pub const NOTIFICATIONS: [FeedItem; 4] = [
    item("You have a bug that needs...", "Just now"),
    item("New user registered", "59 minutes ago"),
    item("You have a bug that needs...", "12 hours ago"),
    item("Andi Lane subscribed to you", "Today, 11:59 AM"),
];

pub const ACTIVITIES: [FeedItem; 5] = [
    item("You have a bug that needs...", "Just now"),
    item("Released a new version", "59 minutes ago"),
    item("Submitted a bug", "12 hours ago"),
    item("Modified A data in Page X", "Today, 11:59 AM"),
    item("Deleted a page in Project X", "Feb 2, 2023"),
];

pub const CONTACTS: [&str; 6] = [
    "Natali Craig",
    "Drew Cano",
    "Orlando Diggs",
    "Andi Lane",
    "Kate Morrison",
    "Koray Okumus",
];
