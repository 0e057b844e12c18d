use crate::output::{
    CLOSE_COMMENT, CLOSE_GROUP, OPEN_COMMENT, OPEN_FILTER_GROUP, OPEN_GROUP, RenderOptions,
};
use crate::query::is_blank;
use crate::query::modifier::{Boost, ConstantScore};
use crate::query::occur::Occur;
use crate::query::term::Term;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};

/// Which opening token a group renders with.
///
/// The two kinds are structurally identical; only the opening token differs,
/// and [`Group::deep_clone`] preserves the kind of every node in the subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GroupKind {
    /// Plain boolean group, opened with `(`.
    #[default]
    Standard,
    /// Solr filter clause, opened with `filter(`. Filter clauses match
    /// without contributing to scoring.
    Filter,
}

impl GroupKind {
    pub fn open_token(self) -> &'static str {
        match self {
            GroupKind::Standard => OPEN_GROUP,
            GroupKind::Filter => OPEN_FILTER_GROUP,
        }
    }
}

#[derive(Debug)]
struct GroupData {
    kind: GroupKind,
    terms: Vec<Term>,
    groups: Vec<Group>,
    parent: Weak<RefCell<GroupData>>,
    occur: Option<Occur>,
    boost: Option<Boost>,
    constant_score: Option<ConstantScore>,
    has_grouping_parenthesis: bool,
    label: String,
}

impl Default for GroupData {
    fn default() -> Self {
        GroupData {
            kind: GroupKind::Standard,
            terms: Vec::new(),
            groups: Vec::new(),
            parent: Weak::new(),
            occur: Some(Occur::Should),
            boost: None,
            constant_score: None,
            has_grouping_parenthesis: true,
            label: String::new(),
        }
    }
}

/// A composite query node: an ordered list of [`Term`]s plus an ordered list
/// of child groups, with group-level modifiers.
///
/// ```
/// use solq::{Group, Occur, Term};
///
/// let group = Group::new().with_occur(Occur::Must).with_boost(1.4);
/// group.add_term(&Term::new("foo", "bar").with_proximity(1));
///
/// assert_eq!(group.to_string(), "+( foo:bar~1 )^1.4");
/// ```
///
/// `Group` is a shared handle, like [`Term`]: [`Clone`] aliases the node, and
/// membership is by identity, so the same group instance lives in at most one
/// parent at a time. [`Group::adopt`] is the move primitive - re-parenting a
/// group always relocates it, never duplicates it. The parent link is a
/// non-owning back-reference; a detached subtree is reclaimed once the last
/// external handle to it is dropped.
#[derive(Debug, Clone)]
pub struct Group {
    data: Rc<RefCell<GroupData>>,
}

impl Group {
    /// Create an empty standard group.
    pub fn new() -> Group {
        Group::with_kind(GroupKind::Standard)
    }

    /// Create an empty filter group, rendered as `filter( ... )`.
    pub fn new_filter() -> Group {
        Group::with_kind(GroupKind::Filter)
    }

    pub fn with_kind(kind: GroupKind) -> Group {
        let group = Group {
            data: Rc::new(RefCell::new(GroupData::default())),
        };
        group.data.borrow_mut().kind = kind;
        group
    }

    pub fn kind(&self) -> GroupKind {
        self.data.borrow().kind
    }

    /// True when `other` is the same node, not merely an equal one.
    pub fn ptr_eq(&self, other: &Group) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Independent copy of this subtree: every term and child group is
    /// copied, each child keeping its kind. The copy has no parent,
    /// regardless of where the original is attached.
    pub fn deep_clone(&self) -> Group {
        let data = self.data.borrow();
        let copy = Group::with_kind(data.kind);
        {
            let mut copy_data = copy.data.borrow_mut();
            copy_data.label = data.label.clone();
            copy_data.occur = data.occur;
            copy_data.has_grouping_parenthesis = data.has_grouping_parenthesis;
            copy_data.boost = data.boost;
            copy_data.constant_score = data.constant_score;
            copy_data.terms = data.terms.iter().map(Term::deep_clone).collect();
        }
        for child in &data.groups {
            copy.adopt(&child.deep_clone());
        }
        copy
    }

    // ------------------------------------------------------------------
    // Terms

    /// Append a term unless this exact term instance is already a member.
    pub fn add_term(&self, term: &Term) {
        let mut data = self.data.borrow_mut();
        if data.terms.iter().any(|t| t.ptr_eq(term)) {
            return;
        }
        data.terms.push(term.clone());
    }

    /// Remove a term by identity; no-op if it is not a member.
    pub fn remove_term(&self, term: &Term) {
        self.data.borrow_mut().terms.retain(|t| !t.ptr_eq(term));
    }

    /// The member terms, in insertion order.
    pub fn terms(&self) -> Vec<Term> {
        self.data.borrow().terms.clone()
    }

    // ------------------------------------------------------------------
    // Child groups

    /// Create a child group of the same kind as this one, attach it, and
    /// return it.
    pub fn add_group(&self) -> Group {
        let child = Group::with_kind(self.kind());
        child.data.borrow_mut().parent = Rc::downgrade(&self.data);
        self.data.borrow_mut().groups.push(child.clone());
        child
    }

    fn contains_group(&self, group: &Group) -> bool {
        self.data.borrow().groups.iter().any(|g| g.ptr_eq(group))
    }

    /// Attach an existing group as the last child, detaching it from its
    /// current parent first. This is the move primitive: a group is a member
    /// of exactly one parent at a time. Re-adopting a current member, or the
    /// group itself, is a no-op. Returns the group for chaining.
    pub fn adopt(&self, group: &Group) -> Group {
        if self.ptr_eq(group) || self.contains_group(group) {
            return group.clone();
        }
        if let Some(previous) = group.parent() {
            previous.data.borrow_mut().groups.retain(|g| !g.ptr_eq(group));
        }
        group.data.borrow_mut().parent = Rc::downgrade(&self.data);
        self.data.borrow_mut().groups.push(group.clone());
        group.clone()
    }

    /// Detach a direct child. No-op unless this group is its parent.
    pub fn remove_group(&self, group: &Group) {
        if !group.parent().is_some_and(|p| p.ptr_eq(self)) {
            return;
        }
        self.data.borrow_mut().groups.retain(|g| !g.ptr_eq(group));
        group.data.borrow_mut().parent = Weak::new();
    }

    /// Detach a direct child and promote its contents one level: the child's
    /// sub-groups are re-attached to this group first, then its terms, all
    /// appended after the existing members. The child itself is discarded.
    pub fn splice_group(&self, group: &Group) {
        if !group.parent().is_some_and(|p| p.ptr_eq(self)) {
            return;
        }
        self.data.borrow_mut().groups.retain(|g| !g.ptr_eq(group));
        group.data.borrow_mut().parent = Weak::new();

        let (sub_groups, sub_terms) = {
            let data = group.data.borrow();
            (data.groups.clone(), data.terms.clone())
        };
        for sub_group in &sub_groups {
            self.adopt(sub_group);
        }
        for sub_term in &sub_terms {
            self.add_term(sub_term);
        }
    }

    /// The child groups, in insertion order.
    pub fn groups(&self) -> Vec<Group> {
        self.data.borrow().groups.clone()
    }

    /// The owning group, or `None` for a root.
    pub fn parent(&self) -> Option<Group> {
        self.data.borrow().parent.upgrade().map(|data| Group { data })
    }

    /// The top-most group, found by walking the containment hierarchy
    /// upward. A root returns itself.
    pub fn root(&self) -> Group {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Make `wrapper` the new parent of this group, at this group's former
    /// position. With a parent, the wrapper is spliced into the same sibling
    /// slot this group occupied, so sibling order is preserved. Without one,
    /// the wrapper simply becomes the new root above this group.
    pub fn wrap_with(&self, wrapper: &Group) {
        let former = self.parent();
        if self.ptr_eq(wrapper) || former.as_ref().is_some_and(|p| p.ptr_eq(wrapper)) {
            return;
        }
        if let Some(stale) = wrapper.parent() {
            stale.remove_group(wrapper);
        }

        let mut position = None;
        if let Some(parent) = &former {
            {
                let mut data = parent.data.borrow_mut();
                position = data.groups.iter().position(|g| g.ptr_eq(self));
                data.groups.retain(|g| !g.ptr_eq(self));
            }
            self.data.borrow_mut().parent = Weak::new();
        }

        wrapper.adopt(self);

        if let Some(parent) = former {
            wrapper.data.borrow_mut().parent = Rc::downgrade(&parent.data);
            let mut data = parent.data.borrow_mut();
            let at = position.unwrap_or(data.groups.len()).min(data.groups.len());
            data.groups.insert(at, wrapper.clone());
        }
    }

    // ------------------------------------------------------------------
    // Modifiers

    /// The group's occur operator. `None` means explicitly cleared: no
    /// prefix is rendered, same as [`Occur::Should`].
    pub fn occur(&self) -> Option<Occur> {
        self.data.borrow().occur
    }

    /// Set or clear the occur operator.
    ///
    /// A group without grouping parentheses has no place to render an
    /// operator, so anything but `Should` is ignored until parentheses are
    /// re-enabled.
    pub fn set_occur(&self, occur: impl Into<Option<Occur>>) {
        let occur = occur.into();
        let mut data = self.data.borrow_mut();
        if occur == Some(Occur::Should) || data.has_grouping_parenthesis {
            data.occur = occur;
        }
    }

    /// Set the occur operator of the nearest enclosing group that renders
    /// parentheses, walking upward from the parent. No-op on a root: the
    /// absolute root's occur cannot be set this way.
    pub fn set_outer_occur(&self, occur: impl Into<Option<Occur>>) {
        let occur = occur.into();
        let mut current = self.parent();
        while let Some(ancestor) = current {
            if ancestor.has_grouping_parenthesis() {
                ancestor.set_occur(occur);
                return;
            }
            current = ancestor.parent();
        }
    }

    pub fn boost(&self) -> Option<Boost> {
        self.data.borrow().boost
    }

    /// Set or clear the boost. A non-`None` boost clears any constant score.
    pub fn set_boost(&self, boost: impl Into<Option<Boost>>) {
        let boost = boost.into();
        let mut data = self.data.borrow_mut();
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

    pub fn has_grouping_parenthesis(&self) -> bool {
        self.data.borrow().has_grouping_parenthesis
    }

    /// Enable or disable the group's own parentheses. Without them the
    /// group's contents merge visually into the parent's clause list, and
    /// since there is nowhere to put an operator, occur is forced back to
    /// [`Occur::Should`].
    pub fn set_grouping_parenthesis(&self, enabled: bool) {
        let mut data = self.data.borrow_mut();
        data.has_grouping_parenthesis = enabled;
        if !enabled {
            data.occur = Some(Occur::Should);
        }
    }

    // ------------------------------------------------------------------
    // Labels

    /// The diagnostic label, empty when unset. Labels are not rendered
    /// unless requested through [`RenderOptions::with_labels`].
    pub fn label(&self) -> String {
        self.data.borrow().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.data.borrow_mut().label = label.into();
    }

    /// Exact label match; the empty label never matches.
    pub fn has_label(&self, label: &str) -> bool {
        !label.is_empty() && self.data.borrow().label == label
    }

    /// Collect every group in this subtree (self included) whose label
    /// exactly equals `label`, in depth-first pre-order. The empty label
    /// never matches.
    pub fn find_by_label(&self, label: &str) -> Vec<Group> {
        let mut found = Vec::new();
        if !label.is_empty() {
            self.collect_by_label(label, &mut found);
        }
        found
    }

    fn collect_by_label(&self, label: &str, found: &mut Vec<Group>) {
        if self.has_label(label) {
            found.push(self.clone());
        }
        for child in &self.data.borrow().groups {
            child.collect_by_label(label, found);
        }
    }

    // ------------------------------------------------------------------
    // Fluent builders

    pub fn with_occur(self, occur: Occur) -> Group {
        self.set_occur(occur);
        self
    }

    pub fn with_boost(self, boost: f32) -> Group {
        self.set_boost(Boost::new(boost));
        self
    }

    pub fn with_constant_score(self, constant_score: f32) -> Group {
        self.set_constant_score(ConstantScore::new(constant_score));
        self
    }

    pub fn with_label(self, label: impl Into<String>) -> Group {
        self.set_label(label);
        self
    }

    pub fn with_grouping_parenthesis(self, enabled: bool) -> Group {
        self.set_grouping_parenthesis(enabled);
        self
    }

    // ------------------------------------------------------------------
    // Emptiness

    /// A group is empty iff every direct term is blank and every child group
    /// is recursively empty. Empty groups render as the empty string.
    pub fn is_empty(&self) -> bool {
        let data = self.data.borrow();
        data.terms.iter().all(Term::is_blank) && data.groups.iter().all(Group::is_empty)
    }

    pub fn is_valid(&self) -> bool {
        !self.is_empty()
    }

    // ------------------------------------------------------------------
    // Rendering

    /// Indented rendering: one clause per line, tab indentation, no labels.
    pub fn pretty(&self) -> String {
        self.render(&RenderOptions::pretty())
    }

    /// Serialize this subtree under the given options. An empty subtree
    /// produces the empty string - no parentheses, separators, or modifier
    /// suffixes.
    pub fn render(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        self.render_into(options, &options.base_indent, &mut out);
        out
    }

    fn render_into(&self, options: &RenderOptions, current_indent: &str, out: &mut String) {
        if self.is_empty() {
            return;
        }
        let data = self.data.borrow();
        // Indentation of this group's delimiters; nested content indents one
        // unit further once the opening token is emitted.
        let outer_indent = current_indent;
        let mut inner_indent = current_indent.to_string();

        if options.include_labels && !is_blank(&data.label) {
            out.push_str(outer_indent);
            out.push_str(OPEN_COMMENT);
            out.push_str(&data.label);
            out.push_str(CLOSE_COMMENT);
            out.push_str(&options.separator);
        }

        if data.has_grouping_parenthesis {
            out.push_str(outer_indent);
            if let Some(occur) = data.occur {
                out.push_str(occur.prefix());
            }
            out.push_str(data.kind.open_token());
            inner_indent.push_str(&options.indent_unit);
        }

        for term in &data.terms {
            let rendered = term.to_string();
            if is_blank(&rendered) {
                continue;
            }
            if !out.is_empty() {
                out.push_str(&options.separator);
            }
            out.push_str(&inner_indent);
            out.push_str(&rendered);
        }

        for child in &data.groups {
            let mut rendered = String::new();
            child.render_into(options, &inner_indent, &mut rendered);
            if is_blank(&rendered) {
                continue;
            }
            if !out.is_empty() {
                out.push_str(&options.separator);
            }
            out.push_str(&rendered);
        }

        if data.has_grouping_parenthesis {
            out.push_str(&options.separator);
            out.push_str(outer_indent);
            out.push_str(CLOSE_GROUP);
            if let Some(constant_score) = data.constant_score {
                out.push_str(&constant_score.to_string());
            } else if let Some(boost) = data.boost {
                out.push_str(&boost.to_string());
            }
        }
    }
}

impl Default for Group {
    fn default() -> Self {
        Group::new()
    }
}

impl fmt::Display for Group {
    /// Compact single-line rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderOptions::compact()))
    }
}

impl PartialEq for Group {
    /// Structural equality over (terms, label, child groups, occur, constant
    /// score, boost, grouping parentheses). The parent link is excluded -
    /// two subtrees under different parents can still be equal - and so is
    /// the kind, matching the original model. Node identity is
    /// [`Group::ptr_eq`].
    fn eq(&self, other: &Group) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let a = self.data.borrow();
        let b = other.data.borrow();
        a.terms == b.terms
            && a.label == b.label
            && a.groups == b.groups
            && a.occur == b.occur
            && a.constant_score == b.constant_score
            && a.boost == b.boost
            && a.has_grouping_parenthesis == b.has_grouping_parenthesis
    }
}

impl Hash for Group {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let data = self.data.borrow();
        data.terms.hash(state);
        data.label.hash(state);
        data.groups.hash(state);
        data.occur.hash(state);
        data.constant_score.hash(state);
        data.boost.hash(state);
        data.has_grouping_parenthesis.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_empty_group_renders_nothing() {
        let group = Group::new();
        assert!(group.is_empty());
        assert!(!group.is_valid());
        assert_eq!(group.to_string(), "");

        // Occur, boost, and label change nothing on an empty group.
        group.set_occur(Occur::Must);
        group.set_boost(Boost::new(2.0));
        group.set_label("empty");
        assert_eq!(group.to_string(), "");
        assert_eq!(group.render(&RenderOptions::pretty().with_labels(true)), "");
    }

    #[test]
    fn test_single_term_render() {
        let group = Group::new();
        group.add_term(&Term::new("fieldName", "value"));
        assert_eq!(group.to_string(), "( fieldName:value )");

        group.set_occur(Occur::Must);
        assert_eq!(group.to_string(), "+( fieldName:value )");

        group.set_boost(Boost::new(2.3));
        assert_eq!(group.to_string(), "+( fieldName:value )^2.3");

        group.set_constant_score(ConstantScore::new(4.0));
        assert_eq!(group.to_string(), "+( fieldName:value )^=4");
    }

    #[test]
    fn test_boost_and_constant_score_are_exclusive() {
        let group = Group::new();
        group.set_boost(Boost::new(1.0));
        group.set_constant_score(ConstantScore::new(3.0));
        assert!(group.boost().is_none());
        assert_eq!(group.constant_score(), Some(ConstantScore::new(3.0)));

        group.set_boost(Boost::new(1.0));
        assert!(group.constant_score().is_none());
        assert_eq!(group.boost(), Some(Boost::new(1.0)));
    }

    #[test]
    fn test_occur_guard_without_parentheses() {
        let group = Group::new();
        group.add_term(&Term::new("FirstName", "Geoffrey"));

        group.set_occur(Occur::Must);
        assert_eq!(group.to_string(), "+( FirstName:Geoffrey )");

        group.set_occur(None);
        assert_eq!(group.occur(), None);
        assert_eq!(group.to_string(), "( FirstName:Geoffrey )");

        group.set_grouping_parenthesis(false);
        assert_eq!(group.occur(), Some(Occur::Should));
        assert_eq!(group.to_string(), "FirstName:Geoffrey");

        // Anything but Should is ignored while parentheses are off.
        group.set_occur(Occur::Must);
        assert_eq!(group.occur(), Some(Occur::Should));
        group.set_occur(None);
        assert_eq!(group.occur(), Some(Occur::Should));
        group.set_occur(Occur::Should);
        assert_eq!(group.occur(), Some(Occur::Should));
        assert_eq!(group.to_string(), "FirstName:Geoffrey");
    }

    #[test]
    fn test_add_term_is_identity_based() {
        let group = Group::new();
        let term = Term::new("foo", "bar");
        group.add_term(&term);
        group.add_term(&term);
        group.add_term(&term.clone());
        assert_eq!(group.terms().len(), 1);

        // A structurally equal but distinct term is a separate member.
        group.add_term(&Term::new("foo", "bar"));
        assert_eq!(group.terms().len(), 2);
    }

    #[test]
    fn test_remove_term_is_identity_based() {
        let group = Group::new();
        let term_a = Term::new("foo", "bar");
        let term_b = Term::new("chocolate", "bar");
        group.add_term(&term_a);
        group.add_term(&term_b);

        group.remove_term(&Term::new("foo", "bar"));
        assert_eq!(group.terms().len(), 2);

        group.remove_term(&term_a);
        assert_eq!(group.to_string(), "( chocolate:bar )");

        group.remove_term(&term_a);
        assert_eq!(group.terms().len(), 1);
    }

    #[test]
    fn test_add_group_inherits_kind() {
        let group = Group::new();
        assert_eq!(group.add_group().kind(), GroupKind::Standard);

        let filter = Group::new_filter();
        assert_eq!(filter.add_group().kind(), GroupKind::Filter);
    }

    #[test]
    fn test_adopt_moves_between_parents() {
        let group = Group::new();
        let child_a = Group::new();
        let child_b = Group::new();

        child_a.add_term(&Term::new("FirstName", "Geoffrey"));
        child_b.add_term(&Term::new("LastName", "Slinker"));

        group.adopt(&child_a);
        child_a.adopt(&child_b);
        assert_eq!(group.groups().len(), 1);
        assert_eq!(child_a.groups().len(), 1);
        assert_eq!(
            group.to_string(),
            "( ( FirstName:Geoffrey ( LastName:Slinker ) ) )"
        );
        assert!(child_b.root().ptr_eq(&group));

        // Move child_b up: relocation, not duplication.
        group.adopt(&child_b);
        assert_eq!(group.groups().len(), 2);
        assert_eq!(child_a.groups().len(), 0);
        assert!(child_b.parent().unwrap().ptr_eq(&group));
        assert_eq!(
            group.to_string(),
            "( ( FirstName:Geoffrey ) ( LastName:Slinker ) )"
        );
    }

    #[test]
    fn test_adopt_is_identity_based() {
        let group = Group::new();
        let child = Group::new();
        group.adopt(&child);
        group.adopt(&child);
        group.adopt(&child.clone());
        assert_eq!(group.groups().len(), 1);

        // Self-adoption is an invalid structural request.
        group.adopt(&group.clone());
        assert_eq!(group.groups().len(), 1);
        assert!(group.parent().is_none());
    }

    #[test]
    fn test_remove_group() {
        let group = Group::new();
        let child_a = group.add_group();
        let child_b = group.add_group();
        assert_eq!(group.groups().len(), 2);

        // Not a child: no-op.
        group.remove_group(&Group::new());
        assert_eq!(group.groups().len(), 2);

        group.remove_group(&child_a);
        assert_eq!(group.groups().len(), 1);
        assert!(child_a.parent().is_none());

        group.remove_group(&child_a);
        assert_eq!(group.groups().len(), 1);

        group.remove_group(&child_b);
        assert!(group.groups().is_empty());
    }

    #[test]
    fn test_emptiness_is_recursive() {
        let group = Group::new();
        let mut deepest = group.add_group();
        deepest = deepest.add_group();
        deepest = deepest.add_group();
        assert!(group.is_empty());

        deepest.add_term(&Term::new("FirstName", "Geoffrey"));
        assert!(!group.is_empty());
        assert!(group.is_valid());
        assert_eq!(group.to_string(), "( ( ( ( FirstName:Geoffrey ) ) ) )");
    }

    #[test]
    fn test_blank_terms_do_not_defeat_emptiness() {
        let group = Group::new();
        group.add_term(&Term::new("", ""));
        group.add_term(&Term::new("", ""));
        assert!(group.is_empty());

        group.add_term(&Term::new("", "pink panther"));
        assert!(!group.is_empty());
        assert_eq!(group.to_string(), "( \"pink panther\" )");
    }

    #[test]
    fn test_outer_occur_skips_unparenthesized_ancestors() {
        let level1 = Group::new();
        let level2 = level1.add_group();
        let level3 = level2.add_group();
        level2.set_grouping_parenthesis(false);
        level3.add_term(&Term::new("foo", "bar").with_proximity(2));

        assert_eq!(level1.to_string(), "( ( foo:bar~2 ) )");

        level3.set_outer_occur(Occur::MustNot);
        assert_eq!(level1.to_string(), "-( ( foo:bar~2 ) )");

        // A root has no outer group to receive the operator.
        level1.set_outer_occur(Occur::Must);
        assert_eq!(level1.occur(), Some(Occur::MustNot));
    }

    #[test]
    fn test_labels() {
        let group = Group::new();
        group.set_label("ROOT");
        assert!(group.has_label("ROOT"));
        assert!(!group.has_label(""));
        assert!(!group.has_label("root"));

        let birth_years = group.add_group();
        birth_years.set_label("BIRTH");
        let nested = birth_years.add_group().with_label("BIRTH");

        let found = group.find_by_label("BIRTH");
        assert_eq!(found.len(), 2);
        assert!(found[0].ptr_eq(&birth_years));
        assert!(found[1].ptr_eq(&nested));

        assert!(group.find_by_label("").is_empty());
        assert!(group.find_by_label("missing").is_empty());

        let found = group.find_by_label("ROOT");
        assert_eq!(found.len(), 1);
        assert!(found[0].ptr_eq(&group));
    }

    #[test]
    fn test_equality_is_structural_and_ignores_parent() {
        let group1 = Group::new();
        let group2 = Group::new();
        assert_eq!(group1, group2);
        assert_eq!(hash_of(&group1), hash_of(&group2));

        group1.add_term(&Term::new("", ""));
        assert_ne!(group1, group2);
        group2.add_term(&Term::new("", ""));
        assert_eq!(group1, group2);
        assert_eq!(hash_of(&group1), hash_of(&group2));

        group1.set_label("l");
        assert_ne!(group1, group2);
        group2.set_label("l");
        assert_eq!(group1, group2);

        group1.set_occur(Occur::Must);
        assert_ne!(group1, group2);
        group2.set_occur(Occur::Must);
        assert_eq!(group1, group2);
        group2.set_occur(None);
        assert_ne!(group1, group2);
        group2.set_occur(Occur::Must);

        group1.set_boost(Boost::new(1.0));
        assert_ne!(group1, group2);
        group2.set_boost(Boost::new(2.0));
        assert_ne!(group1, group2);
        group2.set_boost(Boost::new(1.0));
        assert_eq!(group1, group2);
        assert_eq!(hash_of(&group1), hash_of(&group2));

        // Attaching one of two equal groups to a parent changes nothing.
        let parent = Group::new();
        parent.adopt(&group1);
        assert_eq!(group1, group2);
    }

    #[test]
    fn test_equality_without_parenthesis() {
        let group1 = Group::new();
        let group2 = Group::new();
        group1.set_grouping_parenthesis(false);
        assert_ne!(group1, group2);
        group2.set_grouping_parenthesis(false);
        assert_eq!(group1, group2);
        assert_eq!(hash_of(&group1), hash_of(&group2));
    }
}
