//! Deferred builders: pending computations that compose left to right.
//!
//! A query chain is a [`FragmentBuilder`]: an optional pending producer
//! followed by the fragments appended to it. Forcing it yields the
//! fragments in clause order; that order is what the apply operator and the
//! merge fold rely on.

mod apply;


use crate::{block::Fragment, document::QueryDocument};
use std::{fmt, sync::Arc};

// re-exports
pub use apply::apply_operator;

///
/// Force
///
/// Anything that yields a value when forced.
///

pub trait Force {
    type Output;

    fn force(&self) -> Self::Output;
}

///
/// Builder
///
/// Zero-argument producer of a value, evaluated on every `force`.
/// Clones share the same producer.
///

pub struct Builder<T> {
    produce: Arc<dyn Fn() -> T + Send + Sync>,
}

impl<T> Builder<T> {
    pub fn new(produce: impl Fn() -> T + Send + Sync + 'static) -> Self
    where
        T: 'static,
    {
        Self {
            produce: Arc::new(produce),
        }
    }

    /// Builder that always yields a clone of `value`.
    pub fn constant(value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        Self::new(move || value.clone())
    }

    #[must_use]
    pub fn force(&self) -> T {
        (self.produce)()
    }
}

impl<T> Clone for Builder<T> {
    fn clone(&self) -> Self {
        Self {
            produce: Arc::clone(&self.produce),
        }
    }
}

impl<T> fmt::Debug for Builder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder").finish_non_exhaustive()
    }
}

impl<T> Force for Builder<T> {
    type Output = T;

    fn force(&self) -> T {
        Builder::force(self)
    }
}

///
/// FragmentBuilder
///
/// Ordered fragment chain. Appending writes into the tail in place while
/// the chain is uniquely owned and copies it once when a branch still
/// shares it, so chains derived from a common ancestor stay independent.
/// Forcing walks the tail iteratively regardless of chain length.
///

#[derive(Clone, Debug, Default)]
pub struct FragmentBuilder {
    root: Option<Builder<Vec<Fragment>>>,
    tail: Arc<Vec<Fragment>>,
}

impl FragmentBuilder {
    /// Builder with no fragments.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Chain whose leading fragments come from a pending producer.
    #[must_use]
    pub fn lazy(root: Builder<Vec<Fragment>>) -> Self {
        Self {
            root: Some(root),
            tail: Arc::default(),
        }
    }

    fn constant(fragments: Vec<Fragment>) -> Self {
        Self {
            root: None,
            tail: Arc::new(fragments),
        }
    }

    /// Append one fragment after everything this chain produces.
    #[must_use]
    pub fn push(mut self, fragment: Fragment) -> Self {
        Arc::make_mut(&mut self.tail).push(fragment);
        self
    }

    #[must_use]
    pub fn force(&self) -> Vec<Fragment> {
        let mut fragments = self.root.as_ref().map(Builder::force).unwrap_or_default();
        fragments.extend(self.tail.iter().cloned());

        fragments
    }

    /// Last fragment of the chain. The producer is only forced when nothing
    /// was appended after it.
    #[must_use]
    pub fn last(&self) -> Option<Fragment> {
        match self.tail.last() {
            Some(fragment) => Some(fragment.clone()),
            None => self.root.as_ref().and_then(|root| root.force().pop()),
        }
    }
}

impl Force for FragmentBuilder {
    type Output = Vec<Fragment>;

    fn force(&self) -> Vec<Fragment> {
        Self::force(self)
    }
}

/// Force `builder` and hand its output to `reducer` along with `input`.
pub fn run<P, I, R>(reducer: impl FnOnce(I, P::Output) -> R, builder: &P, input: I) -> R
where
    P: Force,
{
    reducer(input, builder.force())
}

/// Compose builders: each is forced in argument order and `reducer` receives
/// the ordered outputs.
pub fn and_then<T, U>(
    reducer: impl Fn(Vec<T>) -> U + Send + Sync + 'static,
    builders: impl IntoIterator<Item = Builder<T>>,
) -> Builder<U>
where
    T: 'static,
    U: 'static,
{
    let builders: Vec<Builder<T>> = builders.into_iter().collect();

    Builder::new(move || reducer(builders.iter().map(Builder::force).collect()))
}

/// Append one fragment after everything `builder` produces.
#[must_use]
pub fn extend(builder: FragmentBuilder, fragment: Fragment) -> FragmentBuilder {
    builder.push(fragment)
}

/// Evaluate a fragment chain into one document, starting from `seed`.
#[must_use]
pub fn evaluate(builder: &FragmentBuilder, seed: QueryDocument) -> QueryDocument {
    run(crate::document::merge, builder, seed)
}

///
/// IntoBuilder
///
/// Seeds a chain from an existing chain (passed through), a pending
/// producer, or a raw document or fragment (wrapped as a constant).
///

pub trait IntoBuilder {
    fn into_builder(self) -> FragmentBuilder;
}

impl IntoBuilder for FragmentBuilder {
    fn into_builder(self) -> FragmentBuilder {
        self
    }
}

impl IntoBuilder for &FragmentBuilder {
    fn into_builder(self) -> FragmentBuilder {
        self.clone()
    }
}

impl IntoBuilder for Builder<Vec<Fragment>> {
    fn into_builder(self) -> FragmentBuilder {
        FragmentBuilder::lazy(self)
    }
}

impl IntoBuilder for QueryDocument {
    fn into_builder(self) -> FragmentBuilder {
        FragmentBuilder::constant(vec![Fragment::Document(self)])
    }
}

impl IntoBuilder for Fragment {
    fn into_builder(self) -> FragmentBuilder {
        FragmentBuilder::constant(vec![self])
    }
}

/// Free-function form of `IntoBuilder::into_builder`.
pub fn to_builder(value: impl IntoBuilder) -> FragmentBuilder {
    value.into_builder()
}
