//! Fixed reference data the mock order pipeline draws from.

/// Catalog entry used to seed synthetic orders
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductRef {
    pub name: &'static str,
    pub code: &'static str,
    pub base_price: f64,
}

pub const COMPANIES: &[&str] = &[
    "Acme Corp",
    "TechFlow Solutions",
    "Global Manufacturing Inc",
    "Precision Dynamics",
    "Industrial Systems Ltd",
    "MegaTech Industries",
    "Advanced Components Co",
    "Premier Manufacturing",
    "Elite Engineering",
    "Strategic Solutions Inc",
    "Innovative Tech Corp",
    "Dynamic Industries",
    "MetalWorks International",
    "ProTech Systems",
    "Summit Manufacturing",
    "Apex Solutions",
    "Pinnacle Industries",
    "Superior Components",
    "Excellence Manufacturing",
    "Progressive Tech",
];

pub const PRODUCTS: &[ProductRef] = &[
    ProductRef { name: "Industrial Widgets", code: "IW", base_price: 29.99 },
    ProductRef { name: "Premium Connectors", code: "PC", base_price: 45.00 },
    ProductRef { name: "Steel Components", code: "SC", base_price: 125.50 },
    ProductRef { name: "Precision Bearings", code: "PB", base_price: 89.99 },
    ProductRef { name: "Heavy Duty Motors", code: "HDM", base_price: 299.99 },
    ProductRef { name: "Control Valves", code: "CV", base_price: 189.50 },
    ProductRef { name: "Safety Switches", code: "SS", base_price: 67.99 },
    ProductRef { name: "Power Supplies", code: "PS", base_price: 159.99 },
    ProductRef { name: "Hydraulic Pumps", code: "HP", base_price: 459.99 },
    ProductRef { name: "Ceramic Insulators", code: "CI", base_price: 34.50 },
    ProductRef { name: "Aluminum Brackets", code: "AB", base_price: 78.99 },
    ProductRef { name: "Titanium Plates", code: "TP", base_price: 289.99 },
    ProductRef { name: "Carbon Fiber Sheets", code: "CFS", base_price: 199.99 },
    ProductRef { name: "Stainless Steel Rods", code: "SSR", base_price: 149.50 },
    ProductRef { name: "Copper Wire Assemblies", code: "CWA", base_price: 89.99 },
];

pub const CITIES: &[&str] = &[
    "Commerce City, CA",
    "Tech Valley, NY",
    "Manufacturing City, TX",
    "Industrial Park, MI",
    "Business District, FL",
    "Corporate Center, WA",
    "Enterprise Zone, IL",
    "Innovation Hub, CO",
    "Production Center, OH",
    "Assembly District, PA",
    "Engineering Plaza, NC",
    "Factory Row, GA",
];

pub const STREETS: &[&str] = &[
    "Business St",
    "Industrial Blvd",
    "Commerce Ave",
    "Enterprise Dr",
    "Corporate Way",
];
