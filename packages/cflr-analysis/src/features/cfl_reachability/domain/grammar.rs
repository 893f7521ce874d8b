//! The fixed context-free grammar over edge labels
//!
//! Productions are read left-to-right as concatenation of labels on a
//! path. Starting from `AddrBar` edges the unary rule seeds `PointsTo`;
//! the copy rule propagates points-to across copy chains; the remaining
//! three encode the Andersen store/load closure: a value stored into a
//! pointed-to object (`StoredInto`), loaded back out of that object
//! (`LoadedInto`), becomes a `Copy` from the original source to the load
//! destination, which feeds back into the copy rule.

use super::edge_label::EdgeLabel;

/// A binary production `left · right → output`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Production {
    pub left: EdgeLabel,
    pub right: EdgeLabel,
    pub output: EdgeLabel,
}

/// The production set, consulted by the solver
///
/// Exposed as data so the solver stays a generic join engine: it asks
/// which productions a popped edge can participate in as left or right
/// operand and never hard-codes a rule.
pub struct Grammar;

impl Grammar {
    /// Unary productions `label → output`
    pub const UNARY: &'static [(EdgeLabel, EdgeLabel)] =
        &[(EdgeLabel::AddrBar, EdgeLabel::PointsTo)];

    /// Binary productions `left · right → output`
    pub const BINARY: &'static [Production] = &[
        Production {
            left: EdgeLabel::CopyBar,
            right: EdgeLabel::PointsTo,
            output: EdgeLabel::PointsTo,
        },
        Production {
            left: EdgeLabel::Store,
            right: EdgeLabel::PointsTo,
            output: EdgeLabel::StoredInto,
        },
        Production {
            left: EdgeLabel::PointsToBar,
            right: EdgeLabel::Load,
            output: EdgeLabel::LoadedInto,
        },
        Production {
            left: EdgeLabel::StoredInto,
            right: EdgeLabel::LoadedInto,
            output: EdgeLabel::Copy,
        },
    ];

    /// Output of the unary production for `label`, if any
    #[inline]
    pub fn unary_output(label: EdgeLabel) -> Option<EdgeLabel> {
        Self::UNARY
            .iter()
            .find(|(input, _)| *input == label)
            .map(|&(_, output)| output)
    }

    /// Binary productions taking `label` as the left operand
    #[inline]
    pub fn with_left(label: EdgeLabel) -> impl Iterator<Item = &'static Production> {
        Self::BINARY.iter().filter(move |p| p.left == label)
    }

    /// Binary productions taking `label` as the right operand
    #[inline]
    pub fn with_right(label: EdgeLabel) -> impl Iterator<Item = &'static Production> {
        Self::BINARY.iter().filter(move |p| p.right == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unary_seeds_points_to() {
        assert_eq!(
            Grammar::unary_output(EdgeLabel::AddrBar),
            Some(EdgeLabel::PointsTo)
        );
        assert_eq!(Grammar::unary_output(EdgeLabel::Copy), None);
    }

    #[test]
    fn test_copy_rule_lookup() {
        let lefts: Vec<_> = Grammar::with_left(EdgeLabel::CopyBar).collect();
        assert_eq!(lefts.len(), 1);
        assert_eq!(lefts[0].output, EdgeLabel::PointsTo);

        // PointsTo is the right operand of two productions
        let rights: Vec<_> = Grammar::with_right(EdgeLabel::PointsTo).collect();
        assert_eq!(rights.len(), 2);
    }

    #[test]
    fn test_no_production_emits_bar_labels() {
        // Bar twins are maintained by the solver's symmetry insertion,
        // never produced directly by the grammar.
        for p in Grammar::BINARY {
            assert!(!matches!(
                p.output,
                EdgeLabel::PointsToBar | EdgeLabel::CopyBar | EdgeLabel::AddrBar
            ));
        }
    }
}
