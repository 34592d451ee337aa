// core/src/metrics.rs
use prometheus::{Encoder, Gauge, IntCounter, Registry, TextEncoder};

use crate::error::CoResult;

/// Tellere og målere for sensorkjernen, registrert i et eget `Registry`.
///
/// Kloner deler de samme underliggende verdiene.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    raw_samples_total: IntCounter,
    bkg_readings_total: IntCounter,
    test_readings_total: IntCounter,
    bkg_average: Gauge,
    test_average: Gauge,
}

impl Metrics {
    pub fn new() -> CoResult<Self> {
        let registry = Registry::new();

        let raw_samples_total =
            IntCounter::new("cobreath_raw_samples_total", "Rå ADC-samples lest")?;
        let bkg_readings_total =
            IntCounter::new("cobreath_bkg_readings_total", "Bakgrunnsmålinger")?;
        let test_readings_total =
            IntCounter::new("cobreath_test_readings_total", "Testmålinger")?;
        let bkg_average = Gauge::new("cobreath_bkg_average", "Siste bakgrunnssnitt (rå)")?;
        let test_average = Gauge::new("cobreath_test_average", "Siste testsnitt (rå)")?;

        registry.register(Box::new(raw_samples_total.clone()))?;
        registry.register(Box::new(bkg_readings_total.clone()))?;
        registry.register(Box::new(test_readings_total.clone()))?;
        registry.register(Box::new(bkg_average.clone()))?;
        registry.register(Box::new(test_average.clone()))?;

        Ok(Self {
            registry,
            raw_samples_total,
            bkg_readings_total,
            test_readings_total,
            bkg_average,
            test_average,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Prometheus tekstformat.
    pub fn encode_text(&self) -> CoResult<String> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn raw_samples(&self) -> u64 {
        self.raw_samples_total.get()
    }

    pub fn bkg_readings(&self) -> u64 {
        self.bkg_readings_total.get()
    }

    pub fn test_readings(&self) -> u64 {
        self.test_readings_total.get()
    }

    pub(crate) fn on_raw_sample(&self) {
        self.raw_samples_total.inc();
    }

    pub(crate) fn on_bkg(&self, average: f32) {
        self.bkg_readings_total.inc();
        self.bkg_average.set(f64::from(average));
    }

    pub(crate) fn on_test(&self, average: f32) {
        self.test_readings_total.inc();
        self.test_average.set(f64::from(average));
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("raw_samples_total", &self.raw_samples_total.get())
            .field("bkg_readings_total", &self.bkg_readings_total.get())
            .field("test_readings_total", &self.test_readings_total.get())
            .finish()
    }
}
