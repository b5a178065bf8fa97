//! Static filter sets used across harnesses, taken from the demo scenarios.

use searchbox::Filter;

/// `(id, label, badge count, badge class)`
pub const NODE_FILTERS: &[(u64, &str, u32, &str)] = &[
    (1, "Sampling", 15, "i-badge"),
    (2, "ControlNet", 8, "o-badge"),
    (3, "SDXL", 24, "c-badge"),
];

pub const MANY_FILTERS: &[(u64, &str, u32, &str)] = &[
    (1, "Sampling", 15, "i-badge"),
    (2, "Image Processing", 23, "o-badge"),
    (3, "ControlNet", 12, "c-badge"),
    (4, "Text Encoding", 8, "s-badge"),
    (5, "Model Loading", 6, "i-badge"),
    (6, "Advanced", 31, "o-badge"),
];

/// A typing burst: each keystroke is `(delay since previous ms, query)`.
pub const TYPING_BURST: &[(u64, &str)] = &[
    (0, "k"),
    (40, "ks"),
    (35, "ksa"),
    (60, "ksam"),
    (20, "ksamp"),
    (90, "ksampl"),
    (45, "ksample"),
    (30, "ksampler"),
];

pub fn filters_from(seed: &[(u64, &str, u32, &str)]) -> Vec<Filter> {
    seed.iter()
        .map(|&(id, label, count, class)| Filter::new(id, label).with_badge(count, class))
        .collect()
}
