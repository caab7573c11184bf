use rand::Rng;

/// Source of die outcomes. Implemented for every [`rand::Rng`]; tests
/// substitute a deterministic roller instead.
pub trait Roller {
    /// Draw a value uniformly from `[1, faces]`. `faces` is at least 1.
    fn roll(&mut self, faces: u32) -> u32;
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, faces: u32) -> u32 {
        self.gen_range(1..=faces)
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_rng_rolls_in_range() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0xD1CE);
        for faces in [1, 2, 6, 20, 100] {
            for _ in 0..100 {
                let v = Roller::roll(&mut rng, faces);
                assert!((1..=faces).contains(&v));
            }
        }
    }

    #[test]
    fn test_step_roller_wraps_to_die_size() {
        let mut roller = StepRoller::new(5, 1);
        assert_eq!(roller.roll(6), 5);
        assert_eq!(roller.roll(6), 6);
        assert_eq!(roller.roll(6), 1);
        assert_eq!(roller.roll(4), 4);
    }
}
