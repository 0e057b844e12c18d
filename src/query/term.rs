use crate::query::modifier::{Boost, ConstantScore, Proximity};
use crate::query::occur::Occur;
use crate::query::{is_blank, opt_is_blank};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TermData {
    field: Option<String>,
    value: Option<String>,
    boost: Option<Boost>,
    constant_score: Option<ConstantScore>,
    proximity: Option<Proximity>,
    occur: Occur,
    is_range: bool,
    is_grouping_clause: bool,
}

/// A unit of search: an optional field name plus a value, with optional
/// scoring modifiers.
///
/// For example:
///
/// - `+title:"pink panther"~1`
/// - `title:("pink panther" "treasure island")`
/// - `year:[1950 TO 1960]^=2`
/// - `year:1953^0.5`
///
/// A multi-word value is quoted automatically:
///
/// ```
/// use solq::Term;
///
/// let term = Term::new("title", "pink panther").with_boost(1.5);
/// assert_eq!(term.to_string(), r#"title:"pink panther"^1.5"#);
///
/// let term = Term::unfielded("pink panther").with_boost(1.5);
/// assert_eq!(term.to_string(), r#""pink panther"^1.5"#);
/// ```
///
/// `Term` is a shared handle: [`Clone`] produces another handle to the same
/// node, so a term placed in a group keeps tracking later mutations. Use
/// [`Term::deep_clone`] for an independent copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Term {
    data: Rc<RefCell<TermData>>,
}

impl Term {
    /// Create a term querying `field` for `value`.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Term {
        let term = Term {
            data: Rc::new(RefCell::new(TermData::default())),
        };
        term.set_field(field);
        term.set_value(value);
        term
    }

    /// Create a term querying the backend's default field for `value`.
    pub fn unfielded(value: impl Into<String>) -> Term {
        let term = Term {
            data: Rc::new(RefCell::new(TermData::default())),
        };
        term.set_value(value);
        term
    }

    /// Independent copy of this term. The copy compares equal but is a
    /// distinct node for identity-based membership checks.
    pub fn deep_clone(&self) -> Term {
        Term {
            data: Rc::new(RefCell::new(self.data.borrow().clone())),
        }
    }

    /// True when `other` is the same node, not merely an equal one.
    pub fn ptr_eq(&self, other: &Term) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    pub fn field(&self) -> Option<String> {
        self.data.borrow().field.clone()
    }

    pub fn set_field(&self, field: impl Into<String>) {
        self.data.borrow_mut().field = Some(field.into());
    }

    /// The value as it will render, i.e. after any auto-quoting.
    pub fn value(&self) -> Option<String> {
        self.data.borrow().value.clone()
    }

    /// Set the value, classifying it and applying the auto-quoting rule.
    ///
    /// A value starting with `[` or `{` is a range clause; one starting with
    /// `(` is a grouping clause. A value with more than one space-separated
    /// token that is not already quoted and is neither of those gets wrapped
    /// in double quotes. Range clauses drop any proximity; grouping clauses
    /// drop proximity and boost. Re-setting an already classified value is a
    /// no-op with respect to quoting.
    pub fn set_value(&self, value: impl Into<String>) {
        let mut value = value.into();
        let mut data = self.data.borrow_mut();
        if !is_blank(&value) {
            data.is_range = value.starts_with('[') || value.starts_with('{');
            data.is_grouping_clause = value.starts_with('(');

            let tokens = value.split(' ').filter(|t| !t.is_empty()).count();
            if tokens > 1 && !value.starts_with('"') && !data.is_range && !data.is_grouping_clause {
                value = format!("\"{value}\"");
            }

            if data.is_range {
                data.proximity = None;
            }
            if data.is_grouping_clause {
                data.proximity = None;
                data.boost = None;
            }
        }
        data.value = Some(value);
    }

    /// True when both field and value are empty or absent. Blank terms
    /// render as the empty string and do not count against group emptiness.
    pub fn is_blank(&self) -> bool {
        let data = self.data.borrow();
        opt_is_blank(data.value.as_deref()) && opt_is_blank(data.field.as_deref())
    }

    /// True when the value is a range clause such as `[1950 TO 1960]`.
    pub fn is_range(&self) -> bool {
        self.data.borrow().is_range
    }

    /// True when the value is a grouping clause such as `("a" "b")`.
    pub fn is_grouping_clause(&self) -> bool {
        self.data.borrow().is_grouping_clause
    }

    pub fn boost(&self) -> Option<Boost> {
        self.data.borrow().boost
    }

    /// Set or clear the boost. A non-`None` boost clears any constant score.
    /// Ignored entirely for grouping-clause values.
    pub fn set_boost(&self, boost: impl Into<Option<Boost>>) {
        let boost = boost.into();
        let mut data = self.data.borrow_mut();
        if data.is_grouping_clause {
            return;
        }
        if boost.is_some() {
            data.constant_score = None;
        }
        data.boost = boost;
    }

    pub fn constant_score(&self) -> Option<ConstantScore> {
        self.data.borrow().constant_score
    }

    /// Set or clear the constant score. A non-`None` score clears any boost.
    pub fn set_constant_score(&self, constant_score: impl Into<Option<ConstantScore>>) {
        let constant_score = constant_score.into();
        let mut data = self.data.borrow_mut();
        if constant_score.is_some() {
            data.boost = None;
        }
        data.constant_score = constant_score;
    }

    pub fn proximity(&self) -> Option<Proximity> {
        self.data.borrow().proximity
    }

    /// Set or clear the proximity. Ignored for range and grouping-clause
    /// values, which cannot carry one.
    pub fn set_proximity(&self, proximity: impl Into<Option<Proximity>>) {
        let mut data = self.data.borrow_mut();
        if data.is_range || data.is_grouping_clause {
            return;
        }
        data.proximity = proximity.into();
    }

    pub fn occur(&self) -> Occur {
        self.data.borrow().occur
    }

    pub fn set_occur(&self, occur: Occur) {
        self.data.borrow_mut().occur = occur;
    }

    pub fn with_occur(self, occur: Occur) -> Term {
        self.set_occur(occur);
        self
    }

    pub fn with_boost(self, boost: f32) -> Term {
        self.set_boost(Boost::new(boost));
        self
    }

    pub fn with_constant_score(self, constant_score: f32) -> Term {
        self.set_constant_score(ConstantScore::new(constant_score));
        self
    }

    pub fn with_proximity(self, proximity: i32) -> Term {
        self.set_proximity(Proximity::new(proximity));
        self
    }
}

impl fmt::Display for Term {
    /// Renders `occur field:value proximity modifier` with the optional
    /// parts omitted. A term without a value renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data.borrow();
        let Some(value) = data.value.as_deref() else {
            return Ok(());
        };
        if is_blank(value) {
            return Ok(());
        }

        f.write_str(data.occur.prefix())?;
        if let Some(field) = data.field.as_deref() {
            if !is_blank(field) {
                write!(f, "{field}:")?;
            }
        }
        f.write_str(value)?;

        if let Some(proximity) = data.proximity {
            write!(f, "{proximity}")?;
        }
        if let Some(boost) = data.boost {
            write!(f, "{boost}")?;
        } else if let Some(constant_score) = data.constant_score {
            write!(f, "{constant_score}")?;
        }
        Ok(())
    }
}

impl PartialEq for Term {
    /// Structural equality over (field, value, boost, constant score,
    /// proximity, occur). Node identity is [`Term::ptr_eq`].
    fn eq(&self, other: &Term) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let a = self.data.borrow();
        let b = other.data.borrow();
        a.field == b.field
            && a.value == b.value
            && a.boost == b.boost
            && a.constant_score == b.constant_score
            && a.proximity == b.proximity
            && a.occur == b.occur
    }
}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let data = self.data.borrow();
        data.field.hash(state);
        data.value.hash(state);
        data.boost.hash(state);
        data.constant_score.hash(state);
        data.proximity.hash(state);
        data.occur.hash(state);
    }
}
