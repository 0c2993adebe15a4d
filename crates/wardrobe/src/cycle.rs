use rand::Rng;

/// Signed value standing for "nothing selected" in index arithmetic.
pub const NONE_INDEX: isize = -1;

/// How a slot's selection should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Relative(isize),
    Absolute(isize),
    Random,
}

impl Request {
    pub const NEXT: Request = Request::Relative(1);
    pub const PREVIOUS: Request = Request::Relative(-1);
    pub const CLEAR: Request = Request::Absolute(NONE_INDEX);
}

pub fn to_signed(index: Option<usize>) -> isize {
    index.map_or(NONE_INDEX, |i| i as isize)
}

/// Folds a candidate into `[-1, len - 1]` with at most one wrap step: anything below
/// the sentinel lands on the last piece, anything past the last piece lands on none.
pub fn wrap_once(candidate: isize, len: usize) -> Option<usize> {
    let last = len as isize - 1;
    let wrapped = if candidate < NONE_INDEX {
        last
    } else if candidate > last {
        NONE_INDEX
    } else {
        candidate
    };
    usize::try_from(wrapped).ok()
}

pub fn next_index<R: Rng>(
    current: Option<usize>,
    len: usize,
    request: Request,
    rng: &mut R,
) -> Option<usize> {
    match request {
        Request::Relative(delta) => wrap_once(to_signed(current).saturating_add(delta), len),
        Request::Absolute(target) => wrap_once(target, len),
        // 0 stands for none, so every piece and none are equally likely
        Request::Random => rng.random_range(0..=len).checked_sub(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn step(current: Option<usize>, len: usize, delta: isize) -> Option<usize> {
        next_index(current, len, Request::Relative(delta), &mut rng())
    }

    #[test]
    fn test_forward_sequence_from_none() {
        let mut current = None;
        let mut seen = Vec::new();
        for _ in 0..9 {
            current = step(current, 3, 1);
            seen.push(to_signed(current));
        }
        assert_eq!(seen, vec![0, 1, 2, -1, 0, 1, 2, -1, 0]);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for len in 0..6 {
            let starts = std::iter::once(None).chain((0..len).map(Some));
            for start in starts {
                let mut current = start;
                for _ in 0..=len {
                    current = step(current, len, 1);
                }
                assert_eq!(current, start, "len {len}");
            }
        }
    }

    #[test]
    fn test_backward_from_none_wraps_to_last() {
        assert_eq!(step(None, 4, -1), Some(3));
        assert_eq!(step(Some(0), 4, -1), None);
        assert_eq!(step(None, 0, -1), None);
    }

    #[test]
    fn test_large_delta_wraps_only_once() {
        // 1 + 2 overflows past the last index and stops at none
        assert_eq!(step(Some(1), 3, 2), None);
        assert_eq!(step(Some(2), 3, 5), None);
        // -1 - 3 underflows and stops at the last piece
        assert_eq!(step(None, 3, -3), Some(2));
        assert_eq!(step(Some(0), 3, 2), Some(2));
    }

    #[test]
    fn test_absolute_target() {
        let mut r = rng();
        assert_eq!(next_index(None, 3, Request::Absolute(1), &mut r), Some(1));
        assert_eq!(next_index(Some(1), 3, Request::CLEAR, &mut r), None);
        assert_eq!(next_index(None, 3, Request::Absolute(7), &mut r), None);
        assert_eq!(next_index(None, 3, Request::Absolute(-5), &mut r), Some(2));
    }

    #[test]
    fn test_random_stays_in_domain() {
        let mut r = rng();
        let mut seen = [false; 5];
        for _ in 0..500 {
            let idx = to_signed(next_index(None, 4, Request::Random, &mut r));
            assert!((-1..4).contains(&idx));
            seen[(idx + 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every value in [-1, 3] should come up");
    }

    #[test]
    fn test_random_on_empty_slot() {
        let mut r = rng();
        for _ in 0..20 {
            assert_eq!(next_index(Some(0), 0, Request::Random, &mut r), None);
        }
    }
}
