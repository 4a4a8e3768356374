use xi_rope::Rope;

use crate::parsing::blocks::BlockNode;

/// Validates parser output invariants.
///
/// Asserts that:
/// - All block spans are within rope bounds
/// - Block spans are non-empty and appear in document order without overlap
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, blocks: &[BlockNode]) {
    let n = rope.len();
    let mut prev_end = 0;
    for b in blocks {
        assert!(
            b.span.start < b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (rope len: {})",
            b.span,
            n
        );
        assert!(
            b.span.start >= prev_end,
            "block span overlaps previous block: {:?} starts before {}",
            b.span,
            prev_end
        );
        prev_end = b.span.end;
    }
}
