//! Demo scenario catalogue.
//!
//! Each scenario seeds a fresh [`SearchController`](searchbox_core::SearchController)
//! with a placeholder, a debounce, an initial query and a filter set, so the
//! different timing and filter behaviours can be tried side by side.

use std::time::Duration;

use searchbox_core::{config::SearchConfig, Filter};

/// `(id, label, badge count, badge class)`
type ChipSeed = (u64, &'static str, u32, &'static str);

#[derive(Debug)]
pub struct Scenario {
    /// Stable identifier, accepted by `--scenario`.
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    /// `None` falls back to the configured debounce.
    pub debounce_ms: Option<u64>,
    pub query: &'static str,
    chips: &'static [ChipSeed],
    /// Show a simulated results panel after each search.
    pub simulate_results: bool,
}

impl Scenario {
    pub fn filters(&self) -> Vec<Filter> {
        self.chips
            .iter()
            .map(|&(id, label, count, class)| Filter::new(id, label).with_badge(count, class))
            .collect()
    }

    pub fn debounce(&self, config: &SearchConfig) -> Duration {
        self.debounce_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| config.debounce())
    }
}

const CATALOGUE: &[Scenario] = &[
    Scenario {
        name: "default",
        title: "Default",
        description: "Basic search box with debounced search. Type to see search events in the log.",
        placeholder: "Search nodes...",
        debounce_ms: Some(300),
        query: "",
        chips: &[],
        simulate_results: false,
    },
    Scenario {
        name: "with-filters",
        title: "With filters",
        description: "Active filter chips and a filter button. Remove a chip with Delete.",
        placeholder: "Search nodes and models...",
        debounce_ms: Some(300),
        query: "",
        chips: &[
            (1, "Sampling", 5, "i-badge"),
            (2, "Image", 3, "o-badge"),
            (3, "Advanced", 12, "c-badge"),
        ],
        simulate_results: false,
    },
    Scenario {
        name: "custom-placeholder",
        title: "Custom placeholder",
        description: "Custom placeholder text for a specific use case.",
        placeholder: "Find workflows, nodes, or models...",
        debounce_ms: Some(300),
        query: "",
        chips: &[],
        simulate_results: false,
    },
    Scenario {
        name: "fast-debounce",
        title: "Fast debounce",
        description: "100ms debounce. The counter shows how often search fires.",
        placeholder: "Type quickly to test debounce...",
        debounce_ms: Some(100),
        query: "",
        chips: &[],
        simulate_results: false,
    },
    Scenario {
        name: "node-search",
        title: "Node search",
        description: "Search for nodes and filter by category.",
        placeholder: "Search nodes (e.g., KSampler, CLIP, VAE)...",
        debounce_ms: Some(300),
        query: "",
        chips: &[
            (1, "Sampling", 15, "i-badge"),
            (2, "ControlNet", 8, "o-badge"),
            (3, "SDXL", 24, "c-badge"),
        ],
        simulate_results: true,
    },
    Scenario {
        name: "model-search",
        title: "Model search",
        description: "Model-specific filters with a faster debounce.",
        placeholder: "Search models (e.g., SDXL, Stable Diffusion)...",
        debounce_ms: Some(200),
        query: "",
        chips: &[(1, "Checkpoints", 42, "i-badge"), (2, "LoRA", 28, "o-badge")],
        simulate_results: false,
    },
    Scenario {
        name: "extension-search",
        title: "Extension search",
        description: "Pre-filled query with status filters.",
        placeholder: "Search extensions...",
        debounce_ms: None,
        query: "controlnet",
        chips: &[(1, "Installed", 23, "s-badge"), (2, "Updates", 5, "o-badge")],
        simulate_results: false,
    },
    Scenario {
        name: "clear-behavior",
        title: "Clear behaviour",
        description: "The clear hint shows while there is text and disappears once cleared (Esc).",
        placeholder: "Type something then clear it...",
        debounce_ms: None,
        query: "Sample search text",
        chips: &[],
        simulate_results: false,
    },
    Scenario {
        name: "no-debounce",
        title: "No debounce",
        description: "0ms debounce: search fires on every keystroke.",
        placeholder: "Instant search (no debounce)...",
        debounce_ms: Some(0),
        query: "",
        chips: &[],
        simulate_results: false,
    },
    Scenario {
        name: "many-filters",
        title: "Many filters",
        description: "Many active filters wrapping across the chip row.",
        placeholder: "Search with multiple filters...",
        debounce_ms: None,
        query: "",
        chips: &[
            (1, "Sampling", 15, "i-badge"),
            (2, "Image Processing", 23, "o-badge"),
            (3, "ControlNet", 12, "c-badge"),
            (4, "Text Encoding", 8, "s-badge"),
            (5, "Model Loading", 6, "i-badge"),
            (6, "Advanced", 31, "o-badge"),
        ],
        simulate_results: false,
    },
];

pub fn catalogue() -> &'static [Scenario] {
    CATALOGUE
}

/// Index of the scenario called `name`, if any.
pub fn position(name: &str) -> Option<usize> {
    CATALOGUE.iter().position(|s| s.name == name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
