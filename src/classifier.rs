//! Waste classification from annotation labels.
//!
//! The annotation service returns free-text labels for the uploaded image;
//! this module maps them onto the three bins the sorter hardware knows about
//! using a priority keyword scan.

/// Keywords that route an object to the metal bin.
const METAL_KEYWORDS: [&str; 6] = ["metal", "can", "aluminum", "steel", "tin", "utensil"];

/// Keywords that route an object to the biodegradable bin.
const BIODEGRADABLE_KEYWORDS: [&str; 8] = [
    "food",
    "fruit",
    "vegetable",
    "peel",
    "scrap",
    "compost",
    "paper",
    "cardboard",
];

/// The three waste categories the sorting station distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WasteCategory {
    Metal,
    Biodegradable,
    NonBiodegradable,
}

impl WasteCategory {
    /// Single-letter command code understood by the sorter hardware.
    pub fn code(self) -> char {
        match self {
            WasteCategory::Metal => 'M',
            WasteCategory::Biodegradable => 'B',
            WasteCategory::NonBiodegradable => 'N',
        }
    }

    /// Bin identifier used by the logging server.
    pub fn bin_id(self) -> &'static str {
        match self {
            WasteCategory::Metal => "metal",
            WasteCategory::Biodegradable => "bio",
            WasteCategory::NonBiodegradable => "nonbio",
        }
    }
}

/// Classify a set of annotation labels into a waste category.
///
/// Labels are joined, lower-cased and scanned for keyword substrings in
/// strict priority order: any metal keyword wins, then any biodegradable
/// keyword, and everything else falls through to non-biodegradable.
///
/// Matching is substring-based rather than whole-word, mirroring the sorter's
/// deployed behavior ("tin" matches "Valentine"). No confidence threshold is
/// applied to the labels.
pub fn classify_labels(labels: &[String]) -> WasteCategory {
    let labels_string = labels.join(" ").to_lowercase();

    if METAL_KEYWORDS.iter().any(|kw| labels_string.contains(kw)) {
        return WasteCategory::Metal;
    }

    if BIODEGRADABLE_KEYWORDS
        .iter()
        .any(|kw| labels_string.contains(kw))
    {
        return WasteCategory::Biodegradable;
    }

    WasteCategory::NonBiodegradable
}

/// The most recent classification outcome.
///
/// A single slot of this type is kept in the shared application state: it is
/// overwritten by every successful classification, read by the sensor
/// simulation endpoint, and force-reset by the bin reset operation.
#[derive(Debug, Clone)]
pub struct Classification {
    pub category: WasteCategory,
    pub object_name: String,
}

impl Classification {
    /// The marker installed by the bin reset operation.
    pub fn reset_marker() -> Self {
        Self {
            category: WasteCategory::NonBiodegradable,
            object_name: crate::config::constants::RESET_OBJECT_NAME.to_string(),
        }
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            category: WasteCategory::NonBiodegradable,
            object_name: crate::config::constants::DEFAULT_OBJECT_NAME.to_string(),
        }
    }
}
