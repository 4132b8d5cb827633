//! Simulated sensor telemetry.
//!
//! The station has no real moisture or gas sensors; readings are fabricated
//! within fixed per-category bands so the dashboard shows plausible,
//! recognizably distinct values for each bin. The bands do not overlap.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use crate::classifier::WasteCategory;

/// One simulated reading for a classified object.
#[derive(Debug, Clone)]
pub struct SensorReading {
    pub moisture: u32,
    pub gas: u32,
    pub metal_detected: bool,
    pub object_name: String,
}

/// Moisture band for the given category, in raw ADC-style units.
pub fn moisture_band(category: WasteCategory) -> RangeInclusive<u32> {
    match category {
        WasteCategory::Metal => 950..=1150,
        WasteCategory::Biodegradable => 3700..=3950,
        WasteCategory::NonBiodegradable => 1400..=1700,
    }
}

/// Gas level band for the given category.
pub fn gas_band(category: WasteCategory) -> RangeInclusive<u32> {
    match category {
        WasteCategory::Metal => 100..=200,
        WasteCategory::Biodegradable => 700..=850,
        WasteCategory::NonBiodegradable => 250..=400,
    }
}

/// Generator for simulated sensor readings.
///
/// Wraps a seedable random source so tests can fix the seed and get a
/// deterministic sequence of readings; production construction seeds from
/// entropy.
pub struct TelemetrySimulator {
    rng: StdRng,
}

impl TelemetrySimulator {
    /// Create a simulator seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a simulator with a fixed seed.
    ///
    /// Two simulators built from the same seed produce identical reading
    /// sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw one simulated reading for the given classification.
    ///
    /// Moisture and gas are independent uniform draws within the category's
    /// fixed bands; the metal flag is set for the metal category only.
    pub fn sample(&mut self, category: WasteCategory, object_name: &str) -> SensorReading {
        let moisture = self.rng.gen_range(moisture_band(category));
        let gas = self.rng.gen_range(gas_band(category));

        SensorReading {
            moisture,
            gas,
            metal_detected: category == WasteCategory::Metal,
            object_name: object_name.to_string(),
        }
    }
}

impl Default for TelemetrySimulator {
    fn default() -> Self {
        Self::new()
    }
}
