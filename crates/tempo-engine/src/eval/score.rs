//! Opening/endgame score pair used throughout evaluation.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::eval::phase::PHASE_SCALE;

/// An evaluation term with separate opening (`mg`) and endgame (`eg`) values.
///
/// Terms that do not depend on the game phase are stored with `mg == eg`
/// (see [`Score::flat`]) so that tapering leaves them untouched.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Score {
    pub mg: i32,
    pub eg: i32,
}

impl Score {
    pub const ZERO: Score = Score { mg: 0, eg: 0 };

    #[inline]
    pub const fn new(mg: i32, eg: i32) -> Score {
        Score { mg, eg }
    }

    /// A phase-independent term.
    #[inline]
    pub const fn flat(value: i32) -> Score {
        Score { mg: value, eg: value }
    }

    /// Blend the two halves linearly by `phase` in `0..=PHASE_SCALE`.
    ///
    /// `phase == PHASE_SCALE` is a full board (pure opening values), `0` is
    /// bare kings (pure endgame values). Division truncates toward zero, so
    /// `(-s).taper(p) == -(s.taper(p))`.
    #[inline]
    pub fn taper(self, phase: i32) -> i32 {
        (self.mg * phase + self.eg * (PHASE_SCALE - phase)) / PHASE_SCALE
    }
}

/// Shorthand constructor for a [`Score`].
#[allow(non_snake_case)]
#[inline]
pub const fn S(mg: i32, eg: i32) -> Score {
    Score::new(mg, eg)
}

impl Add for Score {
    type Output = Score;

    #[inline]
    fn add(self, rhs: Score) -> Score {
        Score::new(self.mg + rhs.mg, self.eg + rhs.eg)
    }
}

impl AddAssign for Score {
    #[inline]
    fn add_assign(&mut self, rhs: Score) {
        self.mg += rhs.mg;
        self.eg += rhs.eg;
    }
}

impl Sub for Score {
    type Output = Score;

    #[inline]
    fn sub(self, rhs: Score) -> Score {
        Score::new(self.mg - rhs.mg, self.eg - rhs.eg)
    }
}

impl SubAssign for Score {
    #[inline]
    fn sub_assign(&mut self, rhs: Score) {
        self.mg -= rhs.mg;
        self.eg -= rhs.eg;
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S({}, {})", self.mg, self.eg)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S({}, {})", self.mg, self.eg)
    }
}

#[cfg(test)]
mod tests {
    use super::{S, Score};
    use crate::eval::phase::PHASE_SCALE;

    impl std::ops::Neg for Score {
        type Output = Score;

        fn neg(self) -> Score {
            Score::new(-self.mg, -self.eg)
        }
    }

    #[test]
    fn arithmetic() {
        assert_eq!(S(10, 20) + S(30, 40), S(40, 60));
        assert_eq!(S(50, 60) - S(10, 20), S(40, 40));
        let mut s = S(1, 2);
        s += S(3, 4);
        s -= S(1, 1);
        assert_eq!(s, S(3, 5));
    }

    #[test]
    fn taper_endpoints() {
        let s = S(100, -40);
        assert_eq!(s.taper(PHASE_SCALE), 100);
        assert_eq!(s.taper(0), -40);
        assert_eq!(s.taper(PHASE_SCALE / 2), 30);
    }

    #[test]
    fn flat_terms_ignore_phase() {
        let s = Score::flat(-37);
        for phase in 0..=PHASE_SCALE {
            assert_eq!(s.taper(phase), -37);
        }
    }

    #[test]
    fn taper_is_odd() {
        let s = S(17, -9);
        for phase in 0..=PHASE_SCALE {
            assert_eq!((-s).taper(phase), -s.taper(phase));
        }
    }
}
