// core/src/filter.rs
use crate::config::FILTER_ORDER;

/// FIR-filter med fast orden og faste koeffisienter.
///
/// Utgang = Σ coeff[i] · x[n-i] / gain, der gain = Σ coeff.
/// Manglende historikk regnes som 0 (nullpadding) til vinduet er fullt.
#[derive(Debug, Clone)]
pub struct FirFilter<const ORDER: usize = FILTER_ORDER> {
    coeffs: [f32; ORDER],
    values: [f32; ORDER], // forsinkelseslinje (ringbuffer)
    k: usize,             // neste skriveposisjon
    gain: f32,
}

impl<const ORDER: usize> FirFilter<ORDER> {
    const NONZERO_ORDER: () = assert!(ORDER > 0, "FIR-orden må være > 0");

    pub fn new(coeffs: [f32; ORDER]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO_ORDER;

        let sum: f32 = coeffs.iter().sum();
        // Koeffisienter som summerer til 0 (høypass o.l.) skaleres ikke
        let gain = if sum.abs() > f32::EPSILON { sum } else { 1.0 };

        Self {
            coeffs,
            values: [0.0; ORDER],
            k: 0,
            gain,
        }
    }

    /// Moving average: alle koeffisienter = 1.
    pub fn moving_average() -> Self {
        Self::new([1.0; ORDER])
    }

    /// Mat inn én verdi og returner filtrert utgang.
    pub fn process_reading(&mut self, reading: f32) -> f32 {
        self.values[self.k] = reading;

        let mut out = 0.0f32;
        for (i, c) in self.coeffs.iter().enumerate() {
            // x[n-i] ligger i i plasser bak k (modulo orden)
            let idx = (self.k + ORDER - i) % ORDER;
            out += c * self.values[idx];
        }

        self.k = (self.k + 1) % ORDER;
        out / self.gain
    }

    /// Nullstill historikken (koeffisientene beholdes).
    pub fn reset(&mut self) {
        self.values = [0.0; ORDER];
        self.k = 0;
    }

    pub fn order(&self) -> usize {
        ORDER
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }

    pub fn coeffs(&self) -> &[f32; ORDER] {
        &self.coeffs
    }
}

impl<const ORDER: usize> Default for FirFilter<ORDER> {
    fn default() -> Self {
        Self::moving_average()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_coeffs_use_sum_as_gain() {
        let mut f = FirFilter::<2>::new([3.0, 1.0]);
        assert_eq!(f.gain(), 4.0);
        // x0=4: (3*4 + 1*0)/4 = 3
        assert!((f.process_reading(4.0) - 3.0).abs() < 1e-6);
        // x1=8: (3*8 + 1*4)/4 = 7
        assert!((f.process_reading(8.0) - 7.0).abs() < 1e-6);
    }

    #[test]
    fn zero_sum_coeffs_are_not_scaled() {
        let mut f = FirFilter::<2>::new([1.0, -1.0]);
        assert_eq!(f.gain(), 1.0);
        f.process_reading(2.0);
        assert!((f.process_reading(5.0) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn reset_clears_history() {
        let mut f = FirFilter::<4>::moving_average();
        for _ in 0..4 {
            f.process_reading(10.0);
        }
        f.reset();
        assert!((f.process_reading(4.0) - 1.0).abs() < 1e-6);
    }
}
