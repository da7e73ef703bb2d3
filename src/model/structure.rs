use std::fmt::Debug;
use std::hash::Hash;

/// An opaque, immutable molecular species supplied by an external
/// structure registry.
///
/// The expansion engine never inspects connectivity; it only relies on the
/// registry-provided identity semantics: two values comparing equal must
/// represent the same chemical species, including symmetry-equivalent
/// representations of it. `Eq`/`Hash` therefore must agree with structural
/// identity, not with any textual serialization.
///
/// Structures are treated as value types: never mutated after creation,
/// cheap enough to clone into pool sets.
pub trait Structure: Clone + Eq + Hash + Debug {
    /// The molecular formula, e.g. `"C10H22"` for decane.
    fn formula(&self) -> String;
}


#[cfg(test)]
mod tests {
    use super::testing::FakeStructure;

    #[test]
    fn identity_follows_key_not_formula() {
        // Same species drawn twice (e.g. two symmetry-equivalent atom
        // numberings canonicalized to one key) compares equal.
        let a = FakeStructure::new("CC[CH2]", "C3H7");
        let b = FakeStructure::new("CC[CH2]", "C3H7");
        assert_eq!(a, b);

        // Isomers share a formula but are distinct structures.
        let c = FakeStructure::new("C[CH]C", "C3H7");
        assert_ne!(a, c);
    }
}
