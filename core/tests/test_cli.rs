use cobreath_core::cli::format_trend_report;
use cobreath_core::hardware::{ConstantInput, NoDelay};
use cobreath_core::SensorProcessor;

#[test]
fn report_lists_both_trends() {
    let mut p: SensorProcessor<_, _, 2, 2> = SensorProcessor::new(ConstantInput(480), NoDelay);
    p.read_bkg();
    p.read_test();

    let report = format_trend_report(&p.snapshot());
    assert!(report.starts_with("--- CO Trend Report ---"));
    assert!(report.contains("Bakgrunn"));
    assert!(report.contains("indeks 1/2"));

    let json = serde_json::to_string(&p.snapshot()).unwrap();
    assert!(json.contains("\"bkg_ppm\""));
}
