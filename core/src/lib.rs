//! CO-pustetest: sampling av analog CO-sensor, moving average (FIR) og
//! rullerende bakgrunns-/testsnitt.

pub mod calibration;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod hardware;
pub mod metrics;
pub mod processor;
pub mod replay;
pub mod trend;
pub mod types;

pub use calibration::{convert, convert_ppm, reading_for_concentration};
pub use error::{CoError, CoResult};
pub use filter::FirFilter;
pub use hardware::{AnalogInput, Delay};
pub use metrics::Metrics;
pub use processor::SensorProcessor;
pub use trend::TrendBuffer;
pub use types::TrendSnapshot;
