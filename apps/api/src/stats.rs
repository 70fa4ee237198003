//! Small numeric helpers shared by the generators and the summary endpoints.

use std::collections::HashMap;
use std::hash::Hash;

/// Rounds to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part / whole × 100`, rounded to 2 decimals. Zero when `whole` is zero.
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    round2(part / whole * 100.0)
}

/// Arithmetic mean, `None` for an empty input.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0_usize), |(s, c), v| (s + v, c + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Most frequent value.
///
/// Ties go to the value whose first occurrence comes earliest in the input,
/// so the answer depends only on the input order, never on hashing.
pub fn most_frequent<I, T>(values: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut slots: HashMap<T, usize> = HashMap::new();
    let mut tally: Vec<(T, usize)> = Vec::new();

    for value in values {
        match slots.get(&value) {
            Some(&idx) => tally[idx].1 += 1,
            None => {
                slots.insert(value.clone(), tally.len());
                tally.push((value, 1));
            }
        }
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in tally {
        // strict `>` keeps the earliest value on a tie
        if best.as_ref().map_or(true, |(_, c)| count > *c) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.666), 66.67);
        assert_eq!(round2(50.0), 50.0);
        assert_eq!(round2(-1.005_1), -1.01);
    }

    #[test]
    fn test_percentage_zero_denominator() {
        assert_eq!(percentage(5.0, 0.0), 0.0);
        assert_eq!(percentage(150.0, 300.0), 50.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(vec![80.0, 90.0, 100.0]), Some(90.0));
        assert_eq!(mean(Vec::<f64>::new()), None);
    }

    #[test]
    fn test_most_frequent_picks_highest_count() {
        let regions = ["Tabuk", "Riyadh", "Riyadh", "Hail"];
        assert_eq!(most_frequent(regions), Some("Riyadh"));
    }

    #[test]
    fn test_most_frequent_tie_goes_to_first_seen() {
        let roles = ["Chef", "Nurse", "Nurse", "Chef", "Doctor"];
        assert_eq!(most_frequent(roles), Some("Chef"));
        let roles = ["Nurse", "Chef", "Chef", "Nurse"];
        assert_eq!(most_frequent(roles), Some("Nurse"));
    }

    #[test]
    fn test_most_frequent_empty() {
        assert_eq!(most_frequent(Vec::<String>::new()), None);
    }
}
