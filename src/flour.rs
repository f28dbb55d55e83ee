//! Flour strength recommendation for a given rising time.

/// Suggested flour strength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlourStrength {
    /// Alveograph W index.
    pub w: u32,
    pub protein_perc: f64,
}

/// (W, protein %, rising hours the flour is good up to)
const W_PROTEIN_HOURS: [(u32, f64, f64); 26] = [
    (80, 9.1, 1.0),
    (110, 9.6, 1.5),
    (140, 10.2, 2.0),
    (150, 10.4, 2.5),
    (170, 10.7, 3.0),
    (180, 10.9, 3.5),
    (190, 11.1, 4.0),
    (200, 11.3, 4.5),
    (210, 11.5, 5.0),
    (220, 11.6, 5.5),
    (230, 11.8, 6.5),
    (240, 12.0, 7.5),
    (250, 12.2, 8.5),
    (260, 12.4, 9.5),
    (270, 12.6, 10.5),
    (280, 12.8, 12.0),
    (290, 12.9, 13.5),
    (300, 13.1, 15.5),
    (310, 13.3, 17.5),
    (320, 13.5, 20.0),
    (330, 13.7, 22.5),
    (340, 13.9, 25.5),
    (350, 14.0, 29.0),
    (360, 14.2, 33.0),
    (370, 14.4, 38.0),
    (380, 14.6, 43.0),
];

/// Weakest flour that still holds up for `levitation_time_hrs`.
///
/// Returns `None` when the rise is shorter than the first table row, where
/// any flour will do. Rises longer than the table get the strongest entry.
pub fn recommend_flour(levitation_time_hrs: f64) -> Option<FlourStrength> {
    let idx = W_PROTEIN_HOURS
        .iter()
        .position(|&(_, _, hours)| hours > levitation_time_hrs);

    let (w, protein_perc, _) = match idx {
        Some(0) => return None,
        Some(i) => W_PROTEIN_HOURS[i - 1],
        None => W_PROTEIN_HOURS[W_PROTEIN_HOURS.len() - 1],
    };
    Some(FlourStrength { w, protein_perc })
}
