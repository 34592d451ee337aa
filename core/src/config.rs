// core/src/config.rs
//! Faste byggetids-konstanter for sensoren. Ingenting her kan endres i runtime.

pub const SAMPLE_DELAY_MS: u32 = 10;   // pause mellom to rå-samples (ms)
pub const SAMPLE_SIZE: usize = 25;     // antall rå-samples per read_sensor()
pub const FILTER_ORDER: usize = 10;    // lengde på moving average-vinduet

pub const BKG_SIZE: usize = 5;         // bakgrunns-trend (noen headere bruker 8)
pub const TEST_SIZE: usize = 5;        // test-trend

/// Kalibrering: rå-verdi ved 0 ppm, og spennet som tilsvarer 1000 ppm.
pub const CAL_VOLT_ZERO: f32 = 80.0;
pub const CAL_VOLT_RANGE: f32 = 400.0;

pub const ADC_MAX: u16 = 1023;         // 10-bit ADC

// Tomme vinduer gir deling på null i snittet.
const _: () = assert!(SAMPLE_SIZE > 0);
const _: () = assert!(FILTER_ORDER > 0);
const _: () = assert!(BKG_SIZE > 0 && TEST_SIZE > 0);
