//! Unit tests for set generation

#[cfg(test)]
mod tests {
    use super::super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const SEEDS: u64 = 500;

    fn is_consecutive(numbers: &[u32]) -> bool {
        numbers.windows(2).all(|w| w[1] == w[0] + 1)
    }

    #[test]
    fn test_sequential_set_shares_one_group() {
        for seed in 0..SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = sequential_set(&mut rng);
            assert_eq!(set.len(), TICKETS_PER_SET);

            let groups: HashSet<u16> = set.iter().map(|t| t.group).collect();
            assert_eq!(groups.len(), 1, "seed {seed}");
        }
    }

    #[test]
    fn test_sequential_set_numbers_consecutive() {
        for seed in 0..SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = sequential_set(&mut rng);

            let mut numbers: Vec<u32> = set.iter().map(|t| t.number).collect();
            numbers.sort_unstable();
            assert!(is_consecutive(&numbers), "seed {seed}: {numbers:?}");

            let unique: HashSet<u32> = numbers.iter().copied().collect();
            assert_eq!(unique.len(), TICKETS_PER_SET);
        }
    }

    #[test]
    fn test_sequential_set_stays_in_range() {
        for seed in 0..SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = sequential_set(&mut rng);
            assert!(set.iter().all(Ticket::is_valid), "seed {seed}");
            assert!(set[0].number <= MAX_SEQUENTIAL_START);
        }
    }

    #[test]
    fn test_scattered_set_distinct_groups() {
        for seed in 0..SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = scattered_set(&mut rng);
            assert_eq!(set.len(), TICKETS_PER_SET);

            let groups: HashSet<u16> = set.iter().map(|t| t.group).collect();
            assert_eq!(groups.len(), TICKETS_PER_SET, "seed {seed}");
        }
    }

    #[test]
    fn test_scattered_set_covers_every_last_digit() {
        for seed in 0..SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = scattered_set(&mut rng);

            let mut digits: Vec<u32> = set.iter().map(|t| t.number % 10).collect();
            digits.sort_unstable();
            assert_eq!(digits, (0..10).collect::<Vec<u32>>(), "seed {seed}");
        }
    }

    #[test]
    fn test_scattered_set_not_consecutive() {
        for seed in 0..SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = scattered_set(&mut rng);

            let mut numbers: Vec<u32> = set.iter().map(|t| t.number).collect();
            numbers.sort_unstable();
            assert!(!is_consecutive(&numbers), "seed {seed}: {numbers:?}");
        }
    }

    #[test]
    fn test_scattered_set_stays_in_range() {
        for seed in 0..SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(scattered_set(&mut rng).iter().all(Ticket::is_valid));
        }
    }

    #[test]
    fn test_scattered_set_order_is_shuffled() {
        // Unshuffled output would always end in digits 0..9 by position
        let shuffled = (0..SEEDS).any(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = scattered_set(&mut rng);
            set.iter().enumerate().any(|(i, t)| t.number % 10 != i as u32)
        });
        assert!(shuffled);
    }

    #[test]
    fn test_generate_sets_lengths() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_sets(&mut rng, Strategy::Sequential, 3).len(), 30);
        assert_eq!(generate_sets(&mut rng, Strategy::Scattered, 2).len(), 20);
        assert!(generate_sets(&mut rng, Strategy::Scattered, 0).is_empty());
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            generate_sets(&mut a, Strategy::Scattered, 5),
            generate_sets(&mut b, Strategy::Scattered, 5)
        );
    }
}
