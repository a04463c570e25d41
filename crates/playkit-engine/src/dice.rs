use chrono::{DateTime, Utc};
use playkit_types::{DiceSpec, RollEntry};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Fixed seed for reproducible runs, fresh entropy otherwise
pub fn create_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

/// Throws `spec.count` independent dice, each uniform on `1..=spec.sides`
pub fn roll<R: Rng + ?Sized>(spec: DiceSpec, rng: &mut R) -> Vec<u32> {
    (0..spec.count)
        .map(|_| rng.random_range(1..=spec.sides))
        .collect()
}

pub fn roll_entry<R: Rng + ?Sized>(spec: DiceSpec, rng: &mut R, now: DateTime<Utc>) -> RollEntry {
    RollEntry::new(spec, roll(spec, rng), now)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaceCount {
    pub face: u32,
    pub count: usize,
}

/// Occurrences of every face `1..=sides`, zero counts included
pub fn distribution(results: &[u32], sides: u32) -> Vec<FaceCount> {
    let mut counts = vec![0usize; sides as usize];
    for &r in results {
        if (1..=sides).contains(&r) {
            counts[(r - 1) as usize] += 1;
        }
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| FaceCount {
            face: i as u32 + 1,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_yields_count_values_in_range() {
        let mut rng = create_rng(Some(7));
        for (count, sides) in [(1, 2), (2, 6), (5, 20), (20, 100)] {
            let spec = DiceSpec::new(count, sides).unwrap();
            for _ in 0..200 {
                let results = roll(spec, &mut rng);
                assert_eq!(results.len(), count as usize);
                assert!(results.iter().all(|&r| (1..=sides).contains(&r)));
            }
        }
    }

    #[test]
    fn test_seeded_rolls_are_reproducible() {
        let spec = DiceSpec::new(10, 20).unwrap();
        let first = roll(spec, &mut create_rng(Some(42)));
        let second = roll(spec, &mut create_rng(Some(42)));
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_face_eventually_appears() {
        let spec = DiceSpec::new(20, 6).unwrap();
        let mut rng = create_rng(Some(1));
        let mut seen = Vec::new();
        for _ in 0..50 {
            seen.extend(roll(spec, &mut rng));
        }
        let dist = distribution(&seen, 6);
        assert!(dist.iter().all(|fc| fc.count > 0));
    }

    #[test]
    fn test_distribution_counts_faces() {
        let dist = distribution(&[1, 3, 3, 6], 6);
        let counts: Vec<usize> = dist.iter().map(|fc| fc.count).collect();
        assert_eq!(counts, vec![1, 0, 2, 0, 0, 1]);
        assert_eq!(dist[2], FaceCount { face: 3, count: 2 });
    }

    #[test]
    fn test_roll_entry_totals_match_results() {
        let spec = DiceSpec::new(4, 8).unwrap();
        let entry = roll_entry(spec, &mut create_rng(Some(3)), Utc::now());
        assert_eq!(entry.total, entry.results.iter().sum::<u32>());
        assert_eq!(entry.results.len(), 4);
    }
}
