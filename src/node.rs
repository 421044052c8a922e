//! Weighted nodes and the strategy used to order and combine their weights.

use derivative::Derivative;
use std::ops::Add;

/// A tree node: leaves carry a symbol, internal nodes only a combined weight.
///
/// Equality, ordering and hashing look at the weight alone, so a stable sort
/// of leaves keeps equally weighted symbols in their incoming order.
#[derive(Debug, Clone, Derivative)]
#[derivative(PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Node<W, S> {
    weight: W,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    #[derivative(Hash = "ignore")]
    symbol: Option<S>,
}

impl<W, S> Node<W, S> {
    pub fn leaf(weight: W, symbol: S) -> Self {
        Self {
            weight,
            symbol: Some(symbol),
        }
    }

    pub fn internal(weight: W) -> Self {
        Self {
            weight,
            symbol: None,
        }
    }

    pub fn weight(&self) -> &W {
        &self.weight
    }

    pub fn symbol(&self) -> Option<&S> {
        self.symbol.as_ref()
    }

    pub fn is_leaf(&self) -> bool {
        self.symbol.is_some()
    }
}

/// How weights are ordered and combined while building and walking a tree.
pub trait Weighting<W> {
    /// Strict "is smaller than".
    fn less(&self, a: &W, b: &W) -> bool;

    /// Weight of an internal node created from `a` and `b`.
    fn combine(&self, a: &W, b: &W) -> W;
}

/// Natural ordering, combined by addition. Used for occurrence counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Additive;

impl<W> Weighting<W> for Additive
where
    W: Ord + Clone + Add<Output = W>,
{
    fn less(&self, a: &W, b: &W) -> bool {
        a < b
    }

    fn combine(&self, a: &W, b: &W) -> W {
        a.clone() + b.clone()
    }
}

/// A [`Weighting`] built from a pair of closures.
#[derive(Debug, Clone, Copy)]
pub struct FnWeighting<L, C> {
    less: L,
    combine: C,
}

impl<L, C> FnWeighting<L, C> {
    pub fn new(less: L, combine: C) -> Self {
        Self { less, combine }
    }
}

impl<W, L, C> Weighting<W> for FnWeighting<L, C>
where
    L: Fn(&W, &W) -> bool,
    C: Fn(&W, &W) -> W,
{
    fn less(&self, a: &W, b: &W) -> bool {
        (self.less)(a, b)
    }

    fn combine(&self, a: &W, b: &W) -> W {
        (self.combine)(a, b)
    }
}
