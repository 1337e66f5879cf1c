mod orders;

pub use orders::OrderStore;
