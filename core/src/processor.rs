// core/src/processor.rs
use chrono::Utc;
use log::{debug, trace};

use crate::calibration;
use crate::config::{BKG_SIZE, FILTER_ORDER, SAMPLE_DELAY_MS, SAMPLE_SIZE, TEST_SIZE};
use crate::filter::FirFilter;
use crate::hardware::{AnalogInput, Delay};
use crate::metrics::Metrics;
use crate::trend::TrendBuffer;
use crate::types::TrendSnapshot;

/// Sampling, filtrering og bakgrunns-/testtrend for CO-sensoren.
///
/// Kapasitetene er const generics; `BKG` og `TEST` har standardverdier fra
/// `config`, men kan settes per bygg (f.eks. `SensorProcessor<_, _, 8, 5>`).
/// Alt er synkront og blokkerende.
pub struct SensorProcessor<A, D, const BKG: usize = BKG_SIZE, const TEST: usize = TEST_SIZE> {
    analog: A,
    delay: D,
    fir_avg: FirFilter<FILTER_ORDER>,
    bkg: TrendBuffer<BKG>,
    test: TrendBuffer<TEST>,
    metrics: Option<Metrics>,
}

impl<A, D, const BKG: usize, const TEST: usize> SensorProcessor<A, D, BKG, TEST>
where
    A: AnalogInput,
    D: Delay,
{
    pub fn new(analog: A, delay: D) -> Self {
        Self {
            analog,
            delay,
            fir_avg: FirFilter::moving_average(),
            bkg: TrendBuffer::new(),
            test: TrendBuffer::new(),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Les `SAMPLE_SIZE` rå-verdier med `SAMPLE_DELAY_MS` mellom hver,
    /// mat alle gjennom filteret og returner utgangen etter siste sample.
    pub fn read_sensor(&mut self) -> f32 {
        for _ in 0..SAMPLE_SIZE - 1 {
            self.sample_once();
            self.delay.delay_ms(SAMPLE_DELAY_MS);
        }
        self.sample_once()
    }

    fn sample_once(&mut self) -> f32 {
        let raw = self.analog.read_raw();
        if let Some(m) = &self.metrics {
            m.on_raw_sample();
        }
        let out = self.fir_avg.process_reading(f32::from(raw));
        trace!("raw={raw} fir={out:.3}");
        out
    }

    /// Ny bakgrunnsmåling inn i trenden; returnerer nytt bakgrunnssnitt.
    pub fn read_bkg(&mut self) -> f32 {
        let reading = self.read_sensor();
        let avg = self.bkg.push(reading);
        debug!(
            "bkg reading={reading:.3} avg={avg:.3} index={}/{}",
            self.bkg.index(),
            BKG
        );
        if let Some(m) = &self.metrics {
            m.on_bkg(avg);
        }
        avg
    }

    /// Ny testmåling inn i trenden; returnerer nytt testsnitt.
    pub fn read_test(&mut self) -> f32 {
        let reading = self.read_sensor();
        let avg = self.test.push(reading);
        debug!(
            "test reading={reading:.3} avg={avg:.3} index={}/{}",
            self.test.index(),
            TEST
        );
        if let Some(m) = &self.metrics {
            m.on_test(avg);
        }
        avg
    }

    /// Siste bakgrunnssnitt, uten ny sampling.
    pub fn get_bkg(&self) -> f32 {
        self.bkg.average()
    }

    /// Siste testsnitt, uten ny sampling.
    pub fn get_test(&self) -> f32 {
        self.test.average()
    }

    pub fn bkg_index(&self) -> usize {
        self.bkg.index()
    }

    pub fn test_index(&self) -> usize {
        self.test.index()
    }

    /// Se `calibration::convert`.
    pub fn convert(&self, current: f32) -> f32 {
        calibration::convert(current)
    }

    pub fn snapshot(&self) -> TrendSnapshot {
        let bkg_average = self.get_bkg();
        let test_average = self.get_test();
        TrendSnapshot {
            timestamp: Utc::now(),
            bkg_average,
            test_average,
            bkg_ppm: calibration::convert(bkg_average),
            test_ppm: calibration::convert(test_average),
            bkg_index: self.bkg.index(),
            test_index: self.test.index(),
            bkg_capacity: BKG,
            test_capacity: TEST,
        }
    }

    pub fn metrics(&self) -> Option<&Metrics> {
        self.metrics.as_ref()
    }

    pub fn analog_mut(&mut self) -> &mut A {
        &mut self.analog
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Gi tilbake maskinvaren.
    pub fn into_parts(self) -> (A, D) {
        (self.analog, self.delay)
    }
}
