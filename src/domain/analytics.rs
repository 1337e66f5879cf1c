//! Literal sample figures shown on the eCommerce view

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kpi {
    pub title: &'static str,
    pub value: &'static str,
    pub change_pct: f64,
}

impl Kpi {
    pub fn is_rising(&self) -> bool {
        self.change_pct >= 0.0
    }

    pub fn change_label(&self) -> String {
        format!("{:+.2}%", self.change_pct)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub data: &'static [u64],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationRevenue {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    /// Thousands
    pub revenue_k: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductSale {
    pub name: &'static str,
    pub price: &'static str,
    pub quantity: u32,
    pub amount: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalesChannel {
    pub name: &'static str,
    pub amount: &'static str,
    pub share_pct: f64,
}

pub const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

pub const KPIS: [Kpi; 4] = [
    Kpi {
        title: "Customers",
        value: "3,781",
        change_pct: 11.01,
    },
    Kpi {
        title: "Orders",
        value: "1,219",
        change_pct: -0.03,
    },
    Kpi {
        title: "Revenue",
        value: "$695",
        change_pct: 15.03,
    },
    Kpi {
        title: "Growth",
        value: "30.1%",
        change_pct: 6.08,
    },
];

pub const ACTUALS: Series = Series {
    name: "Actuals",
    data: &[15, 20, 17, 22, 12, 18],
};

pub const PROJECTIONS: Series = Series {
    name: "Projections",
    data: &[5, 5, 4, 5, 4, 5],
};

pub const CURRENT_WEEK: Series = Series {
    name: "Current Week",
    data: &[12, 9, 7, 10, 15, 20],
};

pub const PREVIOUS_WEEK: Series = Series {
    name: "Previous Week",
    data: &[7, 17, 12, 9, 16, 22],
};

pub const CURRENT_WEEK_TOTAL: &str = "$58,211";
pub const PREVIOUS_WEEK_TOTAL: &str = "$68,768";

pub const LOCATIONS: [LocationRevenue; 4] = [
    LocationRevenue {
        name: "New York",
        lat: 40.7128,
        lon: -74.0060,
        revenue_k: 72,
    },
    LocationRevenue {
        name: "San Francisco",
        lat: 37.7749,
        lon: -122.4194,
        revenue_k: 39,
    },
    LocationRevenue {
        name: "Sydney",
        lat: -33.8688,
        lon: 151.2093,
        revenue_k: 25,
    },
    LocationRevenue {
        name: "Singapore",
        lat: 1.3521,
        lon: 103.8198,
        revenue_k: 61,
    },
];

pub const TOP_PRODUCTS: [ProductSale; 5] = [
    ProductSale {
        name: "ASOS Ridley High Waist",
        price: "$79.49",
        quantity: 82,
        amount: "$6,518.18",
    },
    ProductSale {
        name: "Marco Lightweight Shirt",
        price: "$128.50",
        quantity: 37,
        amount: "$4,754.50",
    },
    ProductSale {
        name: "Half Sleeve Shirt",
        price: "$39.99",
        quantity: 64,
        amount: "$2,559.36",
    },
    ProductSale {
        name: "Lightweight Jacket",
        price: "$20.00",
        quantity: 184,
        amount: "$3,680.00",
    },
    ProductSale {
        name: "Marco Shoes",
        price: "$79.49",
        quantity: 64,
        amount: "$1,965.81",
    },
];

pub const SALES_CHANNELS: [SalesChannel; 4] = [
    SalesChannel {
        name: "Direct",
        amount: "$300.56",
        share_pct: 38.6,
    },
    SalesChannel {
        name: "Affiliate",
        amount: "$135.18",
        share_pct: 17.1,
    },
    SalesChannel {
        name: "Sponsored",
        amount: "$154.02",
        share_pct: 19.5,
    },
    SalesChannel {
        name: "E-mail",
        amount: "$48.96",
        share_pct: 6.2,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_cover_every_month() {
        for series in [ACTUALS, PROJECTIONS, CURRENT_WEEK, PREVIOUS_WEEK] {
            assert_eq!(series.data.len(), MONTHS.len(), "{}", series.name);
        }
    }

    #[test]
    fn test_kpi_change_label() {
        assert_eq!(KPIS[0].change_label(), "+11.01%");
        assert_eq!(KPIS[1].change_label(), "-0.03%");
        assert!(!KPIS[1].is_rising());
    }
}
