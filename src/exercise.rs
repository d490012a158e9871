use rand::Rng;
use rand::rngs::ThreadRng;
use std::collections::HashSet;
use std::fmt;

/// Default inclusive upper bound for drawn operand values.
pub const DEFAULT_THRESHOLD: u32 = 10;

/// The four supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Kind {
    /// All kinds in a fixed order; used to build one generator per kind.
    pub const ALL: [Kind; 4] = [
        Kind::Addition,
        Kind::Subtraction,
        Kind::Multiplication,
        Kind::Division,
    ];

    /// Display character for the operation.
    pub fn symbol(self) -> &'static str {
        match self {
            Kind::Addition => "+",
            Kind::Subtraction => "-",
            Kind::Multiplication => "x",
            Kind::Division => "/",
        }
    }

    /// Turn a drawn operand pair into a full exercise.
    ///
    /// Subtraction reorders the pair so the result is never negative.
    /// Division treats the drawn pair as (quotient, divisor) and displays
    /// (quotient x divisor, divisor), so the division always comes out even.
    pub(crate) fn build(self, a: u32, b: u32) -> Exercise {
        match self {
            Kind::Addition => Exercise::new(self, a, b, a + b),
            Kind::Multiplication => Exercise::new(self, a, b, a * b),
            Kind::Subtraction => {
                let (larger, smaller) = if b > a { (b, a) } else { (a, b) };
                Exercise::new(self, larger, smaller, larger - smaller)
            }
            Kind::Division => Exercise::new(self, a * b, b, a),
        }
    }
}

/// One exercise: two displayed operands and the expected result.
///
/// Displays as `"{left} {symbol} {right}"`, ready to be dropped into a
/// round prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    kind: Kind,
    left: u32,
    right: u32,
    result: u32,
}

impl Exercise {
    fn new(kind: Kind, left: u32, right: u32, result: u32) -> Self {
        Self {
            kind,
            left,
            right,
            result,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn left(&self) -> u32 {
        self.left
    }

    pub fn right(&self) -> u32 {
        self.right
    }

    /// The expected result in its decimal string form.
    pub fn result(&self) -> String {
        self.result.to_string()
    }

    /// Check an already-validated answer string.
    ///
    /// The comparison is exact string equality against the minimal-digit
    /// decimal form of the result, so "04" does not match a result of 4.
    pub fn check(&self, answer: &str) -> bool {
        answer == self.result.to_string()
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.kind.symbol(), self.right)
    }
}

/// Produces non-repeating exercises of a single kind.
///
/// Every accepted unordered operand pair is remembered for the lifetime of
/// the generator and already-seen pairs are redrawn. Once every pair within
/// the threshold has been issued the redraw loop never terminates, so a
/// session must not ask one generator for more than
/// threshold * (threshold + 1) / 2 exercises.
pub struct Generator {
    kind: Kind,
    threshold: u32,
    seen: HashSet<(u32, u32)>,
}

impl Generator {
    pub fn new(kind: Kind) -> Self {
        Self::with_threshold(kind, DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(kind: Kind, threshold: u32) -> Self {
        Self {
            kind,
            threshold,
            seen: HashSet::new(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Draw the next exercise.
    ///
    /// Operands are drawn independently and uniformly from
    /// [1, threshold]; the kind's rule then decides what is displayed.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Exercise {
        loop {
            let a = rng.random_range(1..=self.threshold);
            let b = rng.random_range(1..=self.threshold);
            let pair = if a <= b { (a, b) } else { (b, a) };
            if self.seen.insert(pair) {
                return self.kind.build(a, b);
            }
        }
    }
}

/// Source of exercises for a game session.
///
/// The game loop only ever asks for the next exercise; what mixes the
/// kinds (or scripts them, in tests) lives behind this trait.
pub trait ExerciseSource {
    fn next_exercise(&mut self) -> Exercise;
}

/// The standard source: one independent generator per kind, and a
/// uniformly random kind each round. Seen-pair caches never cross kinds.
pub struct RandomExercises {
    generators: Vec<Generator>,
    rng: ThreadRng,
}

impl RandomExercises {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(threshold: u32) -> Self {
        Self {
            generators: Kind::ALL
                .iter()
                .map(|&kind| Generator::with_threshold(kind, threshold))
                .collect(),
            rng: rand::rng(),
        }
    }
}

impl Default for RandomExercises {
    fn default() -> Self {
        Self::new()
    }
}

impl ExerciseSource for RandomExercises {
    fn next_exercise(&mut self) -> Exercise {
        let which = self.rng.random_range(0..self.generators.len());
        self.generators[which].draw(&mut self.rng)
    }
}
