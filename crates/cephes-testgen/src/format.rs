//! Formatting of numbers as Java literals.

/// The precision at which a value is written into the generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Width {
    /// A Java `double`.
    #[default]
    Double,
    /// A Java `float`.
    Float,
}

impl Width {
    /// The boxed Java type whose constants name the special values at this width.
    #[must_use]
    pub const fn boxed_type(self) -> &'static str {
        match self {
            Self::Double => "Double",
            Self::Float => "Float",
        }
    }
}

impl std::fmt::Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Double => "double",
            Self::Float => "float",
        })
    }
}

/// Formats `value` as a Java literal of the given `width`.
///
/// NaN and the infinities become the constants of the boxed type (e.g. `Double.NaN`,
/// `Float.NEGATIVE_INFINITY`). Finite values use the shortest decimal string that round-trips at the given
/// width. `float` literals carry the `f` suffix, and a finite `double` that overflows a `float` becomes an
/// infinity.
#[must_use]
pub fn format_literal(value: f64, width: Width) -> String {
    match width {
        Width::Double => special_literal(value, width).unwrap_or_else(|| format!("{value:?}")),
        Width::Float => {
            #[allow(clippy::cast_possible_truncation)]
            let value = value as f32;
            special_literal(f64::from(value), width).unwrap_or_else(|| format!("{value:?}f"))
        }
    }
}

/// Returns the boxed-type constant for NaN and the infinities, and `None` for finite values.
fn special_literal(value: f64, width: Width) -> Option<String> {
    let constant = if value.is_nan() {
        "NaN"
    } else if value.is_infinite() {
        if value.is_sign_positive() { "POSITIVE_INFINITY" } else { "NEGATIVE_INFINITY" }
    } else {
        return None;
    };
    Some(format!("{}.{constant}", width.boxed_type()))
}

/// Records which widths were used while rendering, so that only the needed imports are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidthUsage {
    /// Whether any `double` literal was written.
    pub double: bool,
    /// Whether any `float` literal was written.
    pub float: bool,
}

impl WidthUsage {
    /// Formats `value` at `width` and records that the width was used.
    pub fn format(&mut self, value: f64, width: Width) -> String {
        self.record(width);
        format_literal(value, width)
    }

    /// Records that `width` was used.
    pub const fn record(&mut self, width: Width) {
        match width {
            Width::Double => self.double = true,
            Width::Float => self.float = true,
        }
    }

    /// Combines the usage of two rendering passes.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            double: self.double || other.double,
            float: self.float || other.float,
        }
    }

    /// Whether `width` was used.
    #[must_use]
    pub const fn uses(&self, width: Width) -> bool {
        match width {
            Width::Double => self.double,
            Width::Float => self.float,
        }
    }
}
