//! Edge labels for the pointer assignment graph
//!
//! The alphabet is doubled: each core relation carries a "bar" twin so
//! that reversed traversal is uniform with forward traversal and
//! expressible as ordinary concatenation. Bar edges are first-class
//! edges with their own adjacency entries, never endpoint reversal at
//! lookup time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::models::NodeId;

/// Labels over pointer assignment graph edges
///
/// Terminal labels come from the frontend; derived labels arise only
/// from grammar productions (`Copy` is both: emitted for `p = q` and
/// re-derived through store/load composition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EdgeLabel {
    /// Address-of: `p = &a` yields `a → p`
    Addr,

    /// Inverse of Addr, oriented pointer-to-object: `p → a`
    AddrBar,

    /// Value flow between locations: `p = q` yields `q → p`
    Copy,

    /// Inverse of Copy
    CopyBar,

    /// Store through pointer: `*p = q` yields `q → p`
    Store,

    /// Load through pointer: `r = *p` yields `p → r`
    Load,

    /// Points-to: source pointer references target object
    PointsTo,

    /// Inverse of PointsTo
    PointsToBar,

    /// Intermediate: value `u` has been stored into object `v`
    StoredInto,

    /// Intermediate: object `u` has been loaded into value `v`
    LoadedInto,
}

impl EdgeLabel {
    /// All labels, in declaration order
    pub const ALL: [EdgeLabel; 10] = [
        EdgeLabel::Addr,
        EdgeLabel::AddrBar,
        EdgeLabel::Copy,
        EdgeLabel::CopyBar,
        EdgeLabel::Store,
        EdgeLabel::Load,
        EdgeLabel::PointsTo,
        EdgeLabel::PointsToBar,
        EdgeLabel::StoredInto,
        EdgeLabel::LoadedInto,
    ];

    /// The bar twin of this label, if it has one
    ///
    /// Store, Load and the stored/loaded intermediates have no inverse.
    #[inline]
    pub fn inverse(self) -> Option<EdgeLabel> {
        match self {
            EdgeLabel::Addr => Some(EdgeLabel::AddrBar),
            EdgeLabel::AddrBar => Some(EdgeLabel::Addr),
            EdgeLabel::Copy => Some(EdgeLabel::CopyBar),
            EdgeLabel::CopyBar => Some(EdgeLabel::Copy),
            EdgeLabel::PointsTo => Some(EdgeLabel::PointsToBar),
            EdgeLabel::PointsToBar => Some(EdgeLabel::PointsTo),
            _ => None,
        }
    }

    /// Whether the frontend may emit this label in the initial graph
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            EdgeLabel::Addr
                | EdgeLabel::AddrBar
                | EdgeLabel::Copy
                | EdgeLabel::CopyBar
                | EdgeLabel::Store
                | EdgeLabel::Load
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeLabel::Addr => "Addr",
            EdgeLabel::AddrBar => "AddrBar",
            EdgeLabel::Copy => "Copy",
            EdgeLabel::CopyBar => "CopyBar",
            EdgeLabel::Store => "Store",
            EdgeLabel::Load => "Load",
            EdgeLabel::PointsTo => "PointsTo",
            EdgeLabel::PointsToBar => "PointsToBar",
            EdgeLabel::StoredInto => "StoredInto",
            EdgeLabel::LoadedInto => "LoadedInto",
        }
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single labeled edge (src, dst, label)
///
/// Edges are sets, not multisets: the same triple is never stored twice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LabeledEdge {
    pub src: NodeId,
    pub dst: NodeId,
    pub label: EdgeLabel,
}

impl LabeledEdge {
    #[inline]
    pub fn new(src: NodeId, dst: NodeId, label: EdgeLabel) -> Self {
        Self { src, dst, label }
    }
}

impl fmt::Display for LabeledEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -[{}]-> {}", self.src, self.label, self.dst)
    }
}
