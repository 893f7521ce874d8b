//! Graph node identity
//!
//! Nodes denote address-taken memory objects or value locations
//! (pointers and scalars). The analysis treats them as opaque
//! identities and never inspects their provenance.

/// Node identifier (dense non-negative integer assigned by the frontend)
pub type NodeId = u32;
