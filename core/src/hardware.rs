// core/src/hardware.rs
use std::time::Duration;

/// Blokkerende lesing av én rå-verdi fra den analoge inngangen.
pub trait AnalogInput {
    fn read_raw(&mut self) -> u16;
}

/// Blokkerende pause i millisekunder.
pub trait Delay {
    fn delay_ms(&mut self, ms: u32);
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    fn read_raw(&mut self) -> u16 {
        (**self).read_raw()
    }
}

impl<T: AnalogInput + ?Sized> AnalogInput for Box<T> {
    fn read_raw(&mut self) -> u16 {
        (**self).read_raw()
    }
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}

impl<T: Delay + ?Sized> Delay for Box<T> {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}

/// Sensor som alltid gir samme verdi (tester/simulering).
#[derive(Debug, Clone, Copy)]
pub struct ConstantInput(pub u16);

impl AnalogInput for ConstantInput {
    fn read_raw(&mut self) -> u16 {
        self.0
    }
}

/// Spiller av en fast liste med rå-verdier.
/// Når lista er brukt opp gjentas siste verdi; tom liste gir 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    samples: Vec<u16>,
    pos: usize,
    padded: usize, // lesinger forbi slutten
}

impl ScriptedInput {
    pub fn new(samples: Vec<u16>) -> Self {
        Self {
            samples,
            pos: 0,
            padded: 0,
        }
    }

    /// Hver verdi gjentas `n` ganger, f.eks. én blokk per read_sensor().
    pub fn blocks(values: &[u16], n: usize) -> Self {
        let samples = values
            .iter()
            .flat_map(|&v| std::iter::repeat(v).take(n))
            .collect();
        Self::new(samples)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Antall verdier som er lest så langt (stopper ved lengden).
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Lesinger etter at lista var tom, dvs. gjentatte (ikke innspilte) verdier.
    pub fn padded(&self) -> usize {
        self.padded
    }
}

impl AnalogInput for ScriptedInput {
    fn read_raw(&mut self) -> u16 {
        match self.samples.get(self.pos) {
            Some(&v) => {
                self.pos += 1;
                v
            }
            None => {
                self.padded += 1;
                self.samples.last().copied().unwrap_or(0)
            }
        }
    }
}

/// Ekte pause via `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

/// Ingen pause – for replay og tester.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn delay_ms(&mut self, _ms: u32) {}
}

/// Teller pauser uten å sove.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordingDelay {
    pub calls: usize,
    pub total_ms: u64,
}

impl Delay for RecordingDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.calls += 1;
        self.total_ms += u64::from(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_repeats_last_value() {
        let mut input = ScriptedInput::new(vec![1, 2, 3]);
        let read: Vec<u16> = (0..5).map(|_| input.read_raw()).collect();
        assert_eq!(read, vec![1, 2, 3, 3, 3]);
        assert_eq!(input.consumed(), 3);
        assert_eq!(input.padded(), 2);
    }

    #[test]
    fn empty_script_reads_zero() {
        let mut input = ScriptedInput::default();
        assert_eq!(input.read_raw(), 0);
    }

    #[test]
    fn boxed_input_forwards() {
        let mut input: Box<dyn AnalogInput> = Box::new(ConstantInput(42));
        assert_eq!(input.read_raw(), 42);
    }
}
