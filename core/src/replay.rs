// core/src/replay.rs
use std::io::Read;
use std::path::Path;

use log::info;

use crate::config::SAMPLE_SIZE;
use crate::error::{CoError, CoResult};
use crate::hardware::ScriptedInput;

/// Leser innspilte rå ADC-verdier fra CSV (første kolonne, én verdi per rad).
/// Første rad hoppes over som header bare når feltet ikke har et eneste siffer;
/// alt annet som ikke er en gyldig u16 gir `InvalidSample`.
pub fn load_samples<R: Read>(reader: R) -> CoResult<Vec<u16>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut out = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let line = rec.position().map(|p| p.line()).unwrap_or(i as u64 + 1);
        let field = rec.get(0).unwrap_or("");
        if field.is_empty() {
            continue;
        }
        match field.parse::<u16>() {
            Ok(v) => out.push(v),
            Err(_) if i == 0 && looks_like_header(field) => continue,
            Err(_) => {
                return Err(CoError::InvalidSample {
                    line,
                    value: field.to_string(),
                })
            }
        }
    }
    Ok(out)
}

fn looks_like_header(field: &str) -> bool {
    !field.chars().any(|c| c.is_ascii_digit())
}

/// Hvor mange samples som mangler for å dekke `readings` hele målinger.
/// Mer enn 0 betyr at `ScriptedInput` må gjenta siste verdi.
pub fn missing_samples(available: usize, readings: usize) -> usize {
    readings.saturating_mul(SAMPLE_SIZE).saturating_sub(available)
}

/// Åpner en CSV-fil og lager en `ScriptedInput` av innholdet.
pub fn open<P: AsRef<Path>>(path: P) -> CoResult<ScriptedInput> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let samples = load_samples(file)?;
    if samples.is_empty() {
        return Err(CoError::EmptyReplay(path.display().to_string()));
    }
    info!("replay: {} samples lastet fra {}", samples.len(), path.display());
    Ok(ScriptedInput::new(samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_blank_rows_are_skipped() {
        let data = "raw,volt\n512,2.5\n\n 600 ,2.9\n";
        let samples = load_samples(data.as_bytes()).unwrap();
        assert_eq!(samples, vec![512, 600]);
    }

    #[test]
    fn bad_value_reports_line() {
        let data = "100\n200\nabc\n";
        match load_samples(data.as_bytes()) {
            Err(CoError::InvalidSample { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "abc");
            }
            other => panic!("forventet InvalidSample, fikk {other:?}"),
        }
    }

    #[test]
    fn numeric_first_row_is_not_a_header() {
        for data in ["70000\n100\n", "512.0\n100\n", "-3\n100\n"] {
            match load_samples(data.as_bytes()) {
                Err(CoError::InvalidSample { line, .. }) => assert_eq!(line, 1, "{data:?}"),
                other => panic!("forventet InvalidSample for {data:?}, fikk {other:?}"),
            }
        }
    }

    #[test]
    fn missing_samples_counts_shortfall() {
        assert_eq!(missing_samples(SAMPLE_SIZE, 5), 4 * SAMPLE_SIZE);
        assert_eq!(missing_samples(10 * SAMPLE_SIZE, 5), 0);
        assert_eq!(missing_samples(0, 0), 0);
    }
}
