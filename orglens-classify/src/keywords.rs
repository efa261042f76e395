//! Static trigger tables shared read-only across all requests.
//!
//! Order matters everywhere in this module: industries are checked in
//! declared order, and size classes are checked Small → Medium → Large.
//! Triggers are stored lowercase because classifiers match against
//! lowercased text.

/// Industry label → trigger substrings, in declared precedence order.
pub const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Technology",
        &["technology", "software", "it", "cloud", "artificial intelligence", "ai"],
    ),
    (
        "Healthcare",
        &["health", "pharmaceutical", "medical", "healthcare", "biotech", "medicine"],
    ),
    (
        "Finance",
        &["financial", "banking", "investment", "insurance", "fintech", "cryptocurrency"],
    ),
    (
        "Education",
        &["education", "university", "college", "school", "learning", "training"],
    ),
    (
        "Retail",
        &["retail", "shopping", "e-commerce", "store", "consumer goods", "fashion"],
    ),
    (
        "Automotive",
        &["automotive", "car", "vehicle", "transportation", "motor", "automobile"],
    ),
];

/// Size label → whole-text phrases, in precedence order.
pub const SIZE_PHRASES: &[(&str, &[&str])] = &[
    ("Small", &["small company", "startup"]),
    ("Medium", &["medium company", "mid-size"]),
    ("Large", &["large company", "enterprise"]),
];

/// Size label → marker checked inside organization entity text, in order.
pub const SIZE_MARKERS: &[(&str, &str)] =
    &[("Small", "small"), ("Medium", "medium"), ("Large", "large")];
