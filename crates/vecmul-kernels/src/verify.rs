//! Exact-equality verification of kernel outputs.

/// Compare kernel result buffers in lock-step against the first one.
///
/// Returns `true` only if every corresponding pair of elements compares
/// exactly equal; short-circuits on the first mismatch. No epsilon is used:
/// all kernels perform the identical floating-point multiply per element,
/// so their outputs must be bit-identical.
pub fn outputs_match(results: &[&[f32]]) -> bool {
    let Some((reference, rest)) = results.split_first() else {
        return true;
    };

    for other in rest {
        if other.len() != reference.len() {
            return false;
        }
        for (x, y) in reference.iter().zip(other.iter()) {
            if x != y {
                return false;
            }
        }
    }

    true
}
