//! Target-prompt selection.
//!
//! Normal play picks uniformly at random, never immediately repeating
//! the current prompt. Debug mode walks the pose list round-robin so a
//! manual tester sees full, repeatable coverage.

use rand::Rng;

use crate::poses::PoseSet;

/// Picks the next target pose. The pose pool itself lives on the
/// session; pools are non-empty by `PoseSet` construction.
#[derive(Debug, Clone)]
pub struct PromptSequencer {
    debug: bool,
    debug_index: usize,
}

impl PromptSequencer {
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            debug_index: 0,
        }
    }

    /// First prompt of a session. Debug mode always starts at the head
    /// of the list; normal play picks uniformly over the whole pool.
    pub fn initial<R: Rng>(&mut self, poses: &PoseSet, rng: &mut R) -> String {
        if self.debug {
            self.debug_index = 0;
            poses.get(0).to_string()
        } else {
            poses.names()[rng.gen_range(0..poses.len())].clone()
        }
    }

    /// Rotate away from `current`. Normal play draws uniformly over the
    /// pool minus `current`; a pool of size 1 is a no-op rotation.
    /// Debug mode advances round-robin.
    pub fn next<R: Rng>(&mut self, poses: &PoseSet, current: &str, rng: &mut R) -> String {
        if self.debug {
            self.debug_index = (self.debug_index + 1) % poses.len();
            return poses.get(self.debug_index).to_string();
        }

        let pool: Vec<&String> = poses
            .names()
            .iter()
            .filter(|name| name.as_str() != current)
            .collect();
        if pool.is_empty() {
            return current.to_string();
        }
        pool[rng.gen_range(0..pool.len())].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poses::PoseSet;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn set(names: &[&str]) -> PoseSet {
        PoseSet::new(names.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_debug_starts_at_head_and_cycles_in_order() {
        let poses = set(&["rock", "paper", "scissors"]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut seq = PromptSequencer::new(true);

        let mut visited = vec![seq.initial(&poses, &mut rng)];
        for _ in 0..5 {
            let current = visited.last().unwrap().clone();
            visited.push(seq.next(&poses, &current, &mut rng));
        }
        assert_eq!(
            visited,
            ["rock", "paper", "scissors", "rock", "paper", "scissors"]
        );
    }

    #[test]
    fn test_single_pose_pool_is_noop_rotation() {
        let poses = set(&["thumbs up"]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seq = PromptSequencer::new(false);

        let first = seq.initial(&poses, &mut rng);
        assert_eq!(first, "thumbs up");
        assert_eq!(seq.next(&poses, &first, &mut rng), "thumbs up");
    }

    #[test]
    fn test_two_pose_pool_always_flips() {
        let poses = set(&["thumbs up", "piece"]);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut seq = PromptSequencer::new(false);

        let mut current = seq.initial(&poses, &mut rng);
        for _ in 0..20 {
            let next = seq.next(&poses, &current, &mut rng);
            assert_ne!(next, current);
            assert!(poses.contains(&next));
            current = next;
        }
    }

    #[test]
    fn test_initial_prompt_is_member_of_pool() {
        let poses = set(&["a", "b", "c", "d"]);
        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut seq = PromptSequencer::new(false);
            assert!(poses.contains(&seq.initial(&poses, &mut rng)));
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: non-debug rotation never immediately repeats
            /// the current prompt for pools of size >= 2.
            #[test]
            fn prop_rotation_never_repeats(
                pool_size in 2usize..8,
                seed in 0u64..1_000,
                rotations in 1usize..64
            ) {
                let names: Vec<String> =
                    (0..pool_size).map(|i| format!("pose-{}", i)).collect();
                let poses = PoseSet::new(names).unwrap();
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let mut seq = PromptSequencer::new(false);

                let mut current = seq.initial(&poses, &mut rng);
                for _ in 0..rotations {
                    let next = seq.next(&poses, &current, &mut rng);
                    prop_assert_ne!(&next, &current);
                    prop_assert!(poses.contains(&next));
                    current = next;
                }
            }

            /// Property: debug rotation visits every pose exactly once
            /// per full pool-length cycle, in list order.
            #[test]
            fn prop_debug_full_coverage(pool_size in 1usize..8, seed in 0u64..100) {
                let names: Vec<String> =
                    (0..pool_size).map(|i| format!("pose-{}", i)).collect();
                let poses = PoseSet::new(names.clone()).unwrap();
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let mut seq = PromptSequencer::new(true);

                let mut current = seq.initial(&poses, &mut rng);
                prop_assert_eq!(&current, &names[0]);
                for i in 1..pool_size {
                    current = seq.next(&poses, &current, &mut rng);
                    prop_assert_eq!(&current, &names[i]);
                }
                // wraps back to the head after a full cycle
                prop_assert_eq!(seq.next(&poses, &current, &mut rng), names[0].clone());
            }
        }
    }
}
