//! Weighted lookup tables for random draws.
use rand::Rng;

/// A fixed table of `(value, weight)` entries.
pub type WeightedTable<T> = [(T, u32)];

/// Draw one value from `table` proportionally to its weight.
///
/// Returns `None` only when every weight is zero or the table is empty.
pub fn choose_weighted<T: Copy, R: Rng>(table: &WeightedTable<T>, rng: &mut R) -> Option<T> {
    let total_weight: u32 = table.iter().map(|(_, weight)| *weight).sum();
    if total_weight == 0 {
        return None;
    }

    let roll = rng.gen_range(0..total_weight);
    let mut current = 0;
    for (value, weight) in table {
        current += *weight;
        if roll < current {
            return Some(*value);
        }
    }

    table.first().map(|(value, _)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn zero_weight_entries_are_never_chosen() {
        let table = [('a', 0), ('b', 3), ('c', 0)];
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..200 {
            assert_eq!(choose_weighted(&table, &mut rng), Some('b'));
        }
    }

    #[test]
    fn empty_or_weightless_tables_yield_nothing() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let empty: [(u8, u32); 0] = [];
        assert_eq!(choose_weighted(&empty, &mut rng), None);
        assert_eq!(choose_weighted(&[(1_u8, 0)], &mut rng), None);
    }

    #[test]
    fn equal_weights_cover_every_entry() {
        let table = [(0_usize, 1), (1, 1), (2, 1), (3, 1)];
        let mut rng = ChaCha20Rng::seed_from_u64(0xBEEF);
        let mut seen = [0_u32; 4];
        for _ in 0..4_000 {
            let pick = choose_weighted(&table, &mut rng).unwrap();
            seen[pick] += 1;
        }
        assert!(seen.iter().all(|count| (800..1_200).contains(count)), "{seen:?}");
    }
}
