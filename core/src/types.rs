use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Øyeblikksbilde av begge trendene, f.eks. for JSON-utskrift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSnapshot {
    pub timestamp: DateTime<Utc>,
    pub bkg_average: f32,     // rå (filtrert) enhet
    pub test_average: f32,    // rå (filtrert) enhet
    pub bkg_ppm: f32,
    pub test_ppm: f32,
    pub bkg_index: usize,
    pub test_index: usize,
    pub bkg_capacity: usize,
    pub test_capacity: usize,
}

impl TrendSnapshot {
    /// Test minus bakgrunn i ppm.
    pub fn delta_ppm(&self) -> f32 {
        self.test_ppm - self.bkg_ppm
    }
}
