// core/src/calibration.rs
use crate::config::{CAL_VOLT_RANGE, CAL_VOLT_ZERO};

/// Fullt kalibrert spenn i ppm.
pub const FULL_SCALE_PPM: f32 = 1000.0;

/// Affin omregning fra filtrert sensorverdi til CO-konsentrasjon (ppm).
/// Ingen klamping – kalleren avgjør gyldig område.
#[inline]
pub fn convert(current: f32) -> f32 {
    (current - CAL_VOLT_ZERO) * FULL_SCALE_PPM / CAL_VOLT_RANGE
}

/// Som `convert`, men avkortet mot null til heltall (verdien enheten viser).
#[inline]
pub fn convert_ppm(current: f32) -> i32 {
    convert(current) as i32
}

/// Invers av `convert`: hvilken sensorverdi gir `ppm`.
#[inline]
pub fn reading_for_concentration(ppm: f32) -> f32 {
    ppm * CAL_VOLT_RANGE / FULL_SCALE_PPM + CAL_VOLT_ZERO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_zero_offset_goes_negative() {
        assert!(convert(CAL_VOLT_ZERO - 40.0) < 0.0);
        // avkorting mot null, ikke nedover
        assert_eq!(convert_ppm(CAL_VOLT_ZERO - 0.2), 0);
    }
}
