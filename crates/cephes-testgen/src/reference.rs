//! Reference implementations of the special functions.
//!
//! These are trusted as ground truth and are served by `libm`, with `statrs` for the inverse normal CDF.

use core::f64::consts::SQRT_2;

/// The special functions available as a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reference {
    /// The error function.
    Erf,
    /// The complementary error function.
    Erfc,
    /// The gamma function.
    Gamma,
    /// The natural logarithm of the absolute value of the gamma function.
    Lgamma,
    /// The cumulative distribution function of the standard normal distribution.
    Ndtr,
    /// The inverse of `Ndtr`.
    Ndtri,
    /// Two raised to the given power.
    Exp2,
    /// Ten raised to the given power.
    Exp10,
    /// `exp(x) - 1`, accurate near zero.
    Expm1,
    /// `ln(1 + x)`, accurate near zero.
    Log1p,
    /// The cube root.
    Cbrt,
    /// The Bessel function of the first kind of order zero.
    J0,
    /// The Bessel function of the first kind of order one.
    J1,
    /// The Bessel function of the second kind of order zero.
    Y0,
    /// The Bessel function of the second kind of order one.
    Y1,
}

impl Reference {
    /// All available reference functions.
    pub const ALL: [Self; 15] = [
        Self::Erf,
        Self::Erfc,
        Self::Gamma,
        Self::Lgamma,
        Self::Ndtr,
        Self::Ndtri,
        Self::Exp2,
        Self::Exp10,
        Self::Expm1,
        Self::Log1p,
        Self::Cbrt,
        Self::J0,
        Self::J1,
        Self::Y0,
        Self::Y1,
    ];

    /// The name used for this function in catalogs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Erf => "erf",
            Self::Erfc => "erfc",
            Self::Gamma => "gamma",
            Self::Lgamma => "lgamma",
            Self::Ndtr => "ndtr",
            Self::Ndtri => "ndtri",
            Self::Exp2 => "exp2",
            Self::Exp10 => "exp10",
            Self::Expm1 => "expm1",
            Self::Log1p => "log1p",
            Self::Cbrt => "cbrt",
            Self::J0 => "j0",
            Self::J1 => "j1",
            Self::Y0 => "y0",
            Self::Y1 => "y1",
        }
    }

    /// The function that computes the reference value.
    #[must_use]
    pub fn function(self) -> fn(f64) -> f64 {
        match self {
            Self::Erf => libm::erf,
            Self::Erfc => libm::erfc,
            Self::Gamma => libm::tgamma,
            Self::Lgamma => libm::lgamma,
            Self::Ndtr => ndtr,
            Self::Ndtri => ndtri,
            Self::Exp2 => libm::exp2,
            Self::Exp10 => libm::exp10,
            Self::Expm1 => libm::expm1,
            Self::Log1p => libm::log1p,
            Self::Cbrt => libm::cbrt,
            Self::J0 => libm::j0,
            Self::J1 => libm::j1,
            Self::Y0 => libm::y0,
            Self::Y1 => libm::y1,
        }
    }

    /// Evaluates the reference function at `x`.
    #[must_use]
    pub fn eval(self, x: f64) -> f64 {
        (self.function())(x)
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Reference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| format!("Unknown reference function: '{s}'"))
    }
}

/// The standard normal CDF.
fn ndtr(x: f64) -> f64 {
    0.5 * libm::erfc(-x / SQRT_2)
}

/// The inverse of the standard normal CDF. NaN outside `[0, 1]`.
fn ndtri(p: f64) -> f64 {
    if (0.0..=1.0).contains(&p) {
        SQRT_2 * statrs::function::erf::erf_inv(2.0_f64.mul_add(p, -1.0))
    } else {
        f64::NAN
    }
}
