use rand::seq::SliceRandom;
use rand::Rng;

/// How the next shape is drawn from the eligible set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionMode {
    /// Independent uniform draw on every attempt.
    Random,
    /// Shuffled bag: each eligible shape comes up once before any repeats,
    /// then the bag refills with a new shuffle.
    Cycle,
}

impl SelectionMode {
    pub const ALL: [SelectionMode; 2] = [SelectionMode::Random, SelectionMode::Cycle];

    pub fn label(self) -> &'static str {
        match self {
            SelectionMode::Random => "random",
            SelectionMode::Cycle => "cycle",
        }
    }

    pub fn from_token(token: &str) -> Option<SelectionMode> {
        match token.trim().to_lowercase().as_str() {
            "r" | "random" => Some(SelectionMode::Random),
            "c" | "cycle" | "bag" => Some(SelectionMode::Cycle),
            _ => None,
        }
    }
}

/// Per-run draw state. Yields indices into the eligible slice.
pub struct ShapePicker {
    mode: SelectionMode,
    bag: Vec<usize>,
}

impl ShapePicker {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            bag: Vec::new(),
        }
    }

    /// Next shape index, or None when the eligible set is empty.
    pub fn next(&mut self, eligible: usize, rng: &mut impl Rng) -> Option<usize> {
        if eligible == 0 {
            return None;
        }
        match self.mode {
            SelectionMode::Random => Some(rng.gen_range(0..eligible)),
            SelectionMode::Cycle => {
                if self.bag.is_empty() {
                    self.bag = (0..eligible).collect();
                    self.bag.shuffle(rng);
                }
                self.bag.pop()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_random_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut picker = ShapePicker::new(SelectionMode::Random);
        for _ in 0..100 {
            let idx = picker.next(7, &mut rng);
            assert!(matches!(idx, Some(i) if i < 7));
        }
    }

    #[test]
    fn test_cycle_visits_every_index_before_repeating() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut picker = ShapePicker::new(SelectionMode::Cycle);
        for _ in 0..3 {
            let mut lap: Vec<usize> = (0..5)
                .map(|_| picker.next(5, &mut rng).unwrap())
                .collect();
            lap.sort_unstable();
            assert_eq!(lap, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_empty_set_yields_none() {
        let mut rng = StdRng::seed_from_u64(13);
        assert_eq!(ShapePicker::new(SelectionMode::Random).next(0, &mut rng), None);
        assert_eq!(ShapePicker::new(SelectionMode::Cycle).next(0, &mut rng), None);
    }

    #[test]
    fn test_single_shape_is_always_index_zero() {
        let mut rng = StdRng::seed_from_u64(14);
        let mut picker = ShapePicker::new(SelectionMode::Cycle);
        for _ in 0..10 {
            assert_eq!(picker.next(1, &mut rng), Some(0));
        }
    }
}
