//! Scoring and distance modifiers attached to terms and groups.
//!
//! All three are small `Copy` value types with a fixed render prefix. None of
//! them validate their payload - any float or integer the backend might
//! accept is passed through verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Multiplicative relevance weight, rendered as `^1.5`.
///
/// ```
/// use solq::Boost;
///
/// assert_eq!(Boost::new(1.5).to_string(), "^1.5");
/// assert_eq!(Boost::new(4.0).to_string(), "^4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boost {
    value: f32,
}

impl Boost {
    pub fn new(value: f32) -> Boost {
        Boost { value }
    }

    pub fn value(self) -> f32 {
        self.value
    }
}

impl From<f32> for Boost {
    fn from(value: f32) -> Boost {
        Boost::new(value)
    }
}

impl fmt::Display for Boost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "^{}", format_number(self.value))
    }
}

impl Hash for Boost {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
    }
}

/// Fixed relevance score override, rendered as `^=2`.
///
/// A clause carries a boost or a constant score, never both; setting one
/// through [`crate::Term`] or [`crate::Group`] clears the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantScore {
    value: f32,
}

impl ConstantScore {
    pub fn new(value: f32) -> ConstantScore {
        ConstantScore { value }
    }

    pub fn value(self) -> f32 {
        self.value
    }
}

impl From<f32> for ConstantScore {
    fn from(value: f32) -> ConstantScore {
        ConstantScore::new(value)
    }
}

impl fmt::Display for ConstantScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "^={}", format_number(self.value))
    }
}

impl Hash for ConstantScore {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
    }
}

/// Fuzziness for a single word or term distance for a phrase, rendered as
/// `~2`.
///
/// Whether the backend treats the number as edit distance (`color:grey~1`) or
/// phrase slop (`title:"pink panther"~2`) depends on the value it decorates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Proximity {
    value: i32,
}

impl Proximity {
    pub fn new(value: i32) -> Proximity {
        Proximity { value }
    }

    pub fn value(self) -> i32 {
        self.value
    }
}

impl From<i32> for Proximity {
    fn from(value: i32) -> Proximity {
        Proximity::new(value)
    }
}

impl fmt::Display for Proximity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "~{}", self.value)
    }
}

/// Format a modifier value: four decimal places, then strip trailing zeros
/// and a trailing decimal point. Never scientific notation.
pub(crate) fn format_number(value: f32) -> String {
    let formatted = format!("{value:.4}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
