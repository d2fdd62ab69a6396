use crate::math::DEFAULT_PRECISION_DIGITS;
use crate::shape::Dim;

/// Options for the GJK intersection test.
///
/// These replace any process-wide setting: two queries run with different
/// options never influence each other.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GjkOptions {
    /// The maximum number of simplex refinements for 2D shapes.
    ///
    /// Reaching it ends the test with [`GjkResult::IterationLimit`](super::GjkResult::IterationLimit).
    pub planar_max_iterations: usize,
    /// The maximum number of simplex refinements for 3D shapes.
    pub spatial_max_iterations: usize,
    /// The number of decimal digits kept when testing colinearity and coplanarity.
    pub precision_digits: u32,
    /// Emit a `debug` log record for every iteration of the test.
    ///
    /// This never changes the result of a query.
    pub debug: bool,
}

impl Default for GjkOptions {
    fn default() -> Self {
        Self {
            planar_max_iterations: 10,
            spatial_max_iterations: 30,
            precision_digits: DEFAULT_PRECISION_DIGITS,
            debug: false,
        }
    }
}

impl GjkOptions {
    /// The iteration limit applying to shapes of dimension `dim`.
    pub fn max_iterations(&self, dim: Dim) -> usize {
        match dim {
            Dim::Two => self.planar_max_iterations,
            Dim::Three => self.spatial_max_iterations,
        }
    }

    /// Sets the iteration limit applying to shapes of dimension `dim`.
    pub fn with_max_iterations(mut self, dim: Dim, max_iterations: usize) -> Self {
        match dim {
            Dim::Two => self.planar_max_iterations = max_iterations,
            Dim::Three => self.spatial_max_iterations = max_iterations,
        }
        self
    }

    /// Sets the number of decimal digits used for approximate comparisons.
    pub fn with_precision_digits(mut self, digits: u32) -> Self {
        self.precision_digits = digits;
        self
    }

    /// Enables or disables diagnostic logging.
    pub fn with_debug_mode(mut self, enabled: bool) -> Self {
        self.set_debug_mode(enabled);
        self
    }

    /// Enables or disables diagnostic logging.
    pub fn set_debug_mode(&mut self, enabled: bool) {
        self.debug = enabled;
    }
}
