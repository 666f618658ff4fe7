//! Polynomial family generator.

use multipoly_core::Poly;
use multipoly_numeric::Coeff;
use rustc_hash::FxHashMap;
use tracing::debug;

/// A recurrence-defined polynomial family.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Family {
    /// Hermite: `H(n) = 2x H(n-1) + (2n-2) H(n-2)`.
    Hermite,
    /// Chebyshev of the first kind: `T(n) = 2x T(n-1) - T(n-2)`.
    Chebyshev,
    /// Legendre: `P(n) = (2n-1)/n x P(n-1) + (1-n)/n P(n-2)`.
    Legendre,
}

impl Family {
    /// Returns the family's first two members.
    fn seeds(self) -> (Poly, Poly) {
        match self {
            Family::Hermite => (Poly::one(), Poly::new(2, &[1])),
            Family::Chebyshev | Family::Legendre => (Poly::one(), Poly::var(0)),
        }
    }

    /// Returns `(a, b)` such that `p(n) = a * p(n-1) + b * p(n-2)`, for `n >= 2`.
    fn step(self, n: u32) -> (Poly, Poly) {
        let n = i64::from(n);
        match self {
            Family::Hermite => (Poly::new(2, &[1]), Poly::constant(2 * n - 2)),
            Family::Chebyshev => (Poly::new(2, &[1]), Poly::constant(-1)),
            Family::Legendre => {
                // n >= 2, so the denominators are non-zero.
                let a = Coeff::ratio(2 * n - 1, n).unwrap_or_default();
                let b = Coeff::ratio(1 - n, n).unwrap_or_default();
                (Poly::new(a, &[1]), Poly::constant(b))
            }
        }
    }

    /// Returns a short name for the family.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Family::Hermite => "hermite",
            Family::Chebyshev => "chebyshev",
            Family::Legendre => "legendre",
        }
    }
}

/// Generator for named polynomial families.
///
/// Each recurrence family keeps its own memo table, filled lazily up to the
/// highest index requested so far.
#[derive(Clone, Debug)]
pub struct PolyFamilies {
    hermite: FxHashMap<u32, Poly>,
    chebyshev: FxHashMap<u32, Poly>,
    legendre: FxHashMap<u32, Poly>,
}

impl Default for PolyFamilies {
    fn default() -> Self {
        Self::new()
    }
}

impl PolyFamilies {
    /// Creates a generator with the degree 0 and 1 members cached.
    #[must_use]
    pub fn new() -> Self {
        let seeded = |family: Family| {
            let (p0, p1) = family.seeds();
            let mut table = FxHashMap::default();
            table.insert(0, p0);
            table.insert(1, p1);
            table
        };
        Self {
            hermite: seeded(Family::Hermite),
            chebyshev: seeded(Family::Chebyshev),
            legendre: seeded(Family::Legendre),
        }
    }

    /// Returns `(x-1)(x-2)...(x-n)`.
    #[must_use]
    pub fn natural(&self, n: u32) -> Poly {
        let x = Poly::var(0);
        (1..=n).fold(Poly::one(), |acc, i| acc * (&x - &Poly::constant(i)))
    }

    /// Returns `1 + x + x^2 + ... + x^n`.
    #[must_use]
    pub fn geometric(&self, n: u32) -> Poly {
        (0..=n).map(|i| Poly::new(1, &[i])).sum()
    }

    /// Returns the Hermite polynomial of degree `n`.
    pub fn hermite(&mut self, n: u32) -> Poly {
        self.get(Family::Hermite, n)
    }

    /// Returns the Chebyshev polynomial of degree `n`.
    pub fn chebyshev(&mut self, n: u32) -> Poly {
        self.get(Family::Chebyshev, n)
    }

    /// Returns the Legendre polynomial of degree `n`.
    pub fn legendre(&mut self, n: u32) -> Poly {
        self.get(Family::Legendre, n)
    }

    /// Returns the number of cached members of a family.
    #[must_use]
    pub fn cached(&self, family: Family) -> usize {
        self.table(family).len()
    }

    fn table(&self, family: Family) -> &FxHashMap<u32, Poly> {
        match family {
            Family::Hermite => &self.hermite,
            Family::Chebyshev => &self.chebyshev,
            Family::Legendre => &self.legendre,
        }
    }

    fn table_mut(&mut self, family: Family) -> &mut FxHashMap<u32, Poly> {
        match family {
            Family::Hermite => &mut self.hermite,
            Family::Chebyshev => &mut self.chebyshev,
            Family::Legendre => &mut self.legendre,
        }
    }

    /// Returns member `n`, extending the memo table up to `n` if needed.
    ///
    /// Members are filled in increasing order, so the table always holds
    /// every index from 0 to its highest entry.
    fn get(&mut self, family: Family, n: u32) -> Poly {
        let table = self.table_mut(family);
        if let Some(p) = table.get(&n) {
            return p.clone();
        }

        let start = u32::try_from(table.len()).unwrap_or(u32::MAX);
        debug!(family = family.name(), from = start, to = n, "extending memo table");

        let mut prev2 = table.get(&(start - 2)).cloned().unwrap_or_default();
        let mut prev1 = table.get(&(start - 1)).cloned().unwrap_or_default();
        for k in start..=n {
            let (a, b) = family.step(k);
            let next = &a * &prev1 + &b * &prev2;
            table.insert(k, next.clone());
            prev2 = std::mem::replace(&mut prev1, next);
        }
        prev1
    }
}
