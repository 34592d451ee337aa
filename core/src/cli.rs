use crate::types::TrendSnapshot;

/// Skriver en kort menneskelesbar rapport av trendene.
pub fn print_trend_report(snap: &TrendSnapshot) {
    println!("{}", format_trend_report(snap));
}

pub fn format_trend_report(snap: &TrendSnapshot) -> String {
    let mut lines = Vec::with_capacity(4);
    lines.push("--- CO Trend Report ---".to_string());
    lines.push(format!(
        "Bakgrunn: {:.2} rå => {:.0} ppm (indeks {}/{})",
        snap.bkg_average, snap.bkg_ppm, snap.bkg_index, snap.bkg_capacity
    ));
    lines.push(format!(
        "Test:     {:.2} rå => {:.0} ppm (indeks {}/{})",
        snap.test_average, snap.test_ppm, snap.test_index, snap.test_capacity
    ));
    lines.push(format!("Delta:    {:.0} ppm", snap.delta_ppm()));
    lines.join("\n")
}
