//! Edge types for the architecture graph.
//!
//! An edge carries one relation and the set of perspectives it shows up
//! in. Edges are keyed by the (subject, object) paths of their relation,
//! so declaring the same relation twice never draws two lines.

use arcviz_model::{top_level, Perspective, Relation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Label prefix of relations synthesized from nested children.
pub const DEPENDENCY_MARKER: &str = "Use:";

/// Identity of an edge: the ordered pair of element paths it connects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    pub subject: String,
    pub object: String,
}

impl EdgeKey {
    pub fn new(subject: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            object: object.into(),
        }
    }

    pub fn of(relation: &Relation) -> Self {
        Self::new(relation.subject.as_str(), relation.object.as_str())
    }

    /// Key of the rollup edge between the top-level parents of a relation.
    /// `None` when both ends share a parent.
    pub fn rollup_of(relation: &Relation) -> Option<Self> {
        let subject = top_level(&relation.subject);
        let object = top_level(&relation.object);
        (subject != object).then(|| Self::new(subject, object))
    }
}

impl std::fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.subject, self.object)
    }
}

/// The perspectives an edge is drawn in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Views(BTreeSet<Perspective>);

impl Views {
    /// Landscape and Context.
    pub fn system_level() -> Self {
        Self([Perspective::Landscape, Perspective::Context].into_iter().collect())
    }

    /// Classifies a relation by the combined depth of its two paths.
    ///
    /// Depth 3 (a top-level element against a direct child) maps to no
    /// perspective at all.
    pub fn for_depth(combined_depth: usize) -> Self {
        match combined_depth {
            0..=2 => Self::system_level(),
            3 => Self::default(),
            4 => Self([Perspective::Container].into_iter().collect()),
            _ => Self([Perspective::Component].into_iter().collect()),
        }
    }

    pub fn contains(&self, perspective: Perspective) -> bool {
        self.0.contains(&perspective)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Perspective> + '_ {
        self.0.iter().copied()
    }
}

/// An edge in the architecture graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub relation: Relation,
    pub views: Views,
}

impl Edge {
    /// Creates an edge classified by the relation's combined depth.
    pub fn new(relation: Relation) -> Self {
        let views = Views::for_depth(relation.combined_depth());
        Self { relation, views }
    }

    /// Synthesizes the edge between the top-level parents of a nested
    /// relation. Returns `None` when both ends share a parent.
    pub fn rollup(child: &Relation) -> Option<Self> {
        let key = EdgeKey::rollup_of(child)?;
        Some(Self {
            relation: Relation {
                subject: key.subject,
                object: key.object,
                pointer: format!("{}:{}", DEPENDENCY_MARKER, child.pointer),
            },
            views: Views::system_level(),
        })
    }

    /// True if the edge was derived rather than declared.
    pub fn is_derived(&self) -> bool {
        self.relation.pointer.contains(DEPENDENCY_MARKER)
    }

    pub fn visible_in(&self, perspective: Perspective) -> bool {
        self.views.contains(perspective)
    }
}

/// Outcome of offering an edge to a slot that may already hold one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upsert {
    /// The slot was empty.
    Insert(Edge),
    /// The slot held a derived edge, which the candidate refines.
    Replace(Edge),
    /// The slot holds a declared edge, which stays.
    Keep,
}

/// Decides what happens when `candidate` is offered for a slot currently
/// holding `current`. Only derived edges are ever overwritten.
pub fn upsert(current: Option<&Edge>, candidate: Edge) -> Upsert {
    match current {
        None => Upsert::Insert(candidate),
        Some(existing) if existing.is_derived() => Upsert::Replace(candidate),
        Some(_) => Upsert::Keep,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_classification() {
        let top = Views::for_depth(2);
        assert!(top.contains(Perspective::Landscape));
        assert!(top.contains(Perspective::Context));
        assert!(!top.contains(Perspective::Container));
        assert!(!top.contains(Perspective::Component));

        let containers = Views::for_depth(4);
        assert_eq!(containers.iter().collect::<Vec<_>>(), vec![Perspective::Container]);

        for depth in 5..8 {
            let components = Views::for_depth(depth);
            assert_eq!(components.iter().collect::<Vec<_>>(), vec![Perspective::Component]);
        }
    }

    #[test]
    fn test_depth_three_is_invisible() {
        let edge = Edge::new(Relation::new("s1", "s2.c1", "call"));
        assert!(edge.views.is_empty());
        for perspective in Perspective::ALL {
            assert!(!edge.visible_in(perspective));
        }
    }

    #[test]
    fn test_rollup_edge() {
        let child = Relation::new("s1.c1", "s2.c1", "call");
        let rollup = Edge::rollup(&child).unwrap();

        assert_eq!(rollup.relation, Relation::new("s1", "s2", "Use::call"));
        assert!(rollup.is_derived());
        assert!(rollup.visible_in(Perspective::Landscape));
        assert!(rollup.visible_in(Perspective::Context));
        assert!(!rollup.visible_in(Perspective::Container));
    }

    #[test]
    fn test_rollup_skips_same_parent() {
        let child = Relation::new("s1.c1", "s1.c2", "call");
        assert!(Edge::rollup(&child).is_none());
        assert!(EdgeKey::rollup_of(&child).is_none());
    }

    #[test]
    fn test_upsert_inserts_into_empty_slot() {
        let candidate = Edge::new(Relation::new("u1", "s1", "use"));
        assert_eq!(upsert(None, candidate.clone()), Upsert::Insert(candidate));
    }

    #[test]
    fn test_upsert_refines_derived_edge() {
        let derived = Edge::rollup(&Relation::new("s1.c1", "s2.c1", "call")).unwrap();
        let declared = Edge::new(Relation::new("s1", "s2", "sync orders"));

        assert_eq!(
            upsert(Some(&derived), declared.clone()),
            Upsert::Replace(declared)
        );
    }

    #[test]
    fn test_upsert_keeps_declared_edge() {
        let declared = Edge::new(Relation::new("s1", "s2", "sync orders"));
        let derived = Edge::rollup(&Relation::new("s1.c1", "s2.c1", "call")).unwrap();
        let again = Edge::new(Relation::new("s1", "s2", "other label"));

        assert_eq!(upsert(Some(&declared), derived), Upsert::Keep);
        assert_eq!(upsert(Some(&declared), again), Upsert::Keep);
    }

    #[test]
    fn test_edge_key_is_not_a_joined_string() {
        // "a&b" + "c" and "a" + "b&c" would collide as "a&b&c".
        assert_ne!(EdgeKey::new("a&b", "c"), EdgeKey::new("a", "b&c"));
        assert_eq!(EdgeKey::new("s1", "s2").to_string(), "s1 -> s2");
    }
}
