// core/src/trend.rs

/// Sirkulær trendbuffer med fast kapasitet.
///
/// Snittet regnes alltid over alle `N` plasser; plasser som ikke er skrevet
/// ennå teller som 0.
#[derive(Debug, Clone)]
pub struct TrendBuffer<const N: usize> {
    slots: [f32; N],
    index: usize, // neste plass som overskrives
    average: f32,
}

impl<const N: usize> TrendBuffer<N> {
    const NONZERO_CAPACITY: () = assert!(N > 0, "trendbuffer må ha kapasitet > 0");

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO_CAPACITY;

        Self {
            slots: [0.0; N],
            index: 0,
            average: 0.0,
        }
    }

    /// Skriv verdien på gjeldende indeks, flytt indeksen og returner nytt snitt.
    pub fn push(&mut self, reading: f32) -> f32 {
        self.slots[self.index] = reading;
        self.index = (self.index + 1) % N;

        // Regnes fra bunnen hver gang, ingen løpende sum som kan drifte
        self.average = self.slots.iter().sum::<f32>() / N as f32;
        self.average
    }

    pub fn average(&self) -> f32 {
        self.average
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn slots(&self) -> &[f32; N] {
        &self.slots
    }
}

impl<const N: usize> Default for TrendBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritten_slots_count_as_zero() {
        let mut t = TrendBuffer::<4>::new();
        assert_eq!(t.push(8.0), 2.0);
        assert_eq!(t.slots(), &[8.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn index_wraps() {
        let mut t = TrendBuffer::<3>::new();
        for i in 0..3 {
            t.push(i as f32);
        }
        assert_eq!(t.index(), 0);
        t.push(9.0);
        assert_eq!(t.index(), 1);
        assert_eq!(t.slots(), &[9.0, 1.0, 2.0]);
    }
}
