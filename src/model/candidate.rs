use super::structure::Structure;

/// The ephemeral result of applying a rule family to one input tuple:
/// an ordered list of product structures.
///
/// Kinetics parameters estimated alongside the products are not part of
/// this engine's contract and are not carried here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionCandidate<S: Structure> {
    pub products: Vec<S>,
}

impl<S: Structure> ReactionCandidate<S> {
    pub fn new(products: Vec<S>) -> Self {
        Self { products }
    }

    /// The product at `index`, if the candidate has that many products.
    #[inline]
    pub fn product(&self, index: usize) -> Option<&S> {
        self.products.get(index)
    }
}
