use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};

use cobreath_core::config::ADC_MAX;
use cobreath_core::hardware::{AnalogInput, ConstantInput, Delay, NoDelay, ThreadDelay};
use cobreath_core::{cli, replay, Metrics, SensorProcessor};

/// Kjører CO-pipelinen mot en innspilt trace eller en konstant kilde.
#[derive(Debug, Parser)]
#[command(name = "cobreath", version)]
struct Args {
    /// CSV med rå ADC-verdier (første kolonne)
    #[arg(long, conflicts_with = "constant")]
    replay: Option<PathBuf>,

    /// Konstant rå-verdi når ingen replay er gitt
    #[arg(
        long,
        default_value_t = 0,
        value_parser = clap::value_parser!(u16).range(0..=i64::from(ADC_MAX))
    )]
    constant: u16,

    /// Antall bakgrunnsmålinger
    #[arg(long, default_value_t = 5)]
    bkg_reads: usize,

    /// Antall testmålinger
    #[arg(long, default_value_t = 5)]
    test_reads: usize,

    /// Sov mellom samples som på enheten
    #[arg(long)]
    realtime: bool,

    /// Skriv øyeblikksbildet som JSON
    #[arg(long)]
    json: bool,

    /// Skriv prometheus-metrics til stdout etter kjøringen
    #[arg(long)]
    metrics: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let analog: Box<dyn AnalogInput> = match &args.replay {
        Some(path) => {
            let input = replay::open(path)
                .with_context(|| format!("kunne ikke laste {}", path.display()))?;
            let missing = replay::missing_samples(input.len(), args.bkg_reads + args.test_reads);
            if missing > 0 {
                warn!(
                    "replay har {} samples, {missing} mangler; siste verdi gjentas",
                    input.len()
                );
            }
            Box::new(input)
        }
        None => Box::new(ConstantInput(args.constant)),
    };
    let delay: Box<dyn Delay> = if args.realtime {
        Box::new(ThreadDelay)
    } else {
        Box::new(NoDelay)
    };

    let metrics = Metrics::new()?;
    let mut processor: SensorProcessor<_, _> =
        SensorProcessor::new(analog, delay).with_metrics(metrics.clone());

    for _ in 0..args.bkg_reads {
        processor.read_bkg();
    }
    for _ in 0..args.test_reads {
        processor.read_test();
    }
    info!(
        "ferdig: {} bakgrunn, {} test, {} rå-samples",
        metrics.bkg_readings(),
        metrics.test_readings(),
        metrics.raw_samples()
    );

    let snap = processor.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snap)?);
    } else {
        cli::print_trend_report(&snap);
    }

    if args.metrics {
        print!("{}", metrics.encode_text()?);
    }
    Ok(())
}
