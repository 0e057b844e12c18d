use serde::{Deserialize, Serialize};
use std::fmt;

/// The subset of Lucene boolean clause operators a clause can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Occur {
    /// The clause must appear in matching documents. Rendered as `+`.
    Must,
    /// The clause should appear in matching documents. Rendered without a
    /// prefix; for a query with no `Must` clauses, at least one `Should`
    /// clause has to match.
    #[default]
    Should,
    /// The clause must not appear in matching documents. Rendered as `-`.
    /// Such clauses never contribute to scoring.
    MustNot,
}

impl Occur {
    /// Prefix emitted in front of the term or group.
    pub fn prefix(self) -> &'static str {
        match self {
            Occur::Must => "+",
            Occur::Should => "",
            Occur::MustNot => "-",
        }
    }
}

impl fmt::Display for Occur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}
