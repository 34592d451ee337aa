use cobreath_core::config::{CAL_VOLT_RANGE, CAL_VOLT_ZERO};
use cobreath_core::hardware::{ConstantInput, NoDelay};
use cobreath_core::{convert, convert_ppm, reading_for_concentration, SensorProcessor};

#[test]
fn zero_offset_maps_to_zero_ppm() {
    assert!(convert(CAL_VOLT_ZERO).abs() < 1e-6);
}

#[test]
fn full_range_maps_to_thousand_ppm() {
    assert!((convert(CAL_VOLT_ZERO + CAL_VOLT_RANGE) - 1000.0).abs() < 1e-3);
    assert_eq!(convert_ppm(CAL_VOLT_ZERO + CAL_VOLT_RANGE), 1000);
}

#[test]
fn inverse_recovers_reading() {
    for ppm in [0.0f32, 12.5, 35.0, 400.0, 1000.0] {
        let r = reading_for_concentration(ppm);
        assert!((convert(r) - ppm).abs() < 1e-3, "ppm={ppm}");
    }
}

#[test]
fn processor_convert_is_same_transform() {
    let p: SensorProcessor<_, _> = SensorProcessor::new(ConstantInput(0), NoDelay);
    let x = CAL_VOLT_ZERO + 37.0;
    assert_eq!(p.convert(x), convert(x));
}
