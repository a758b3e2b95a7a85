use crate::{
    block::Fragment,
    document::{ApplyBindings, QueryDocument},
    fields::FieldMap,
};

///
/// Merge
///
/// Right-hand combination of two partial values.
/// Each implementation fixes one rule of the document merge:
/// scalars are overridden, mappings are key-unioned, lists concatenate.
///

pub trait Merge {
    #[must_use]
    fn merge(self, other: Self) -> Self;
}

/// Right overrides left when present.
impl<T> Merge for Option<T> {
    fn merge(self, other: Self) -> Self {
        other.or(self)
    }
}

/// Key-union, right wins on conflicting keys.
impl<V> Merge for FieldMap<V> {
    fn merge(self, other: Self) -> Self {
        self.union(other)
    }
}

/// Concatenation in order, duplicates kept.
impl<T> Merge for Vec<T> {
    fn merge(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Merge for ApplyBindings {
    fn merge(self, other: Self) -> Self {
        Self {
            with: self.with.merge(other.with),
            only: self.only.merge(other.only),
        }
    }
}

impl Merge for QueryDocument {
    fn merge(self, other: Self) -> Self {
        Self {
            from: self.from.merge(other.from),
            alias: self.alias.merge(other.alias),
            timeout: self.timeout.merge(other.timeout),
            headers: self.headers.merge(other.headers),
            with: self.with.merge(other.with),
            only: self.only.merge(other.only),
            hidden: self.hidden.merge(other.hidden),
            ignore_errors: self.ignore_errors.merge(other.ignore_errors),
            modifiers: self.modifiers.merge(other.modifiers),
            apply: self.apply.merge(other.apply),
        }
    }
}

/// Fold fragments left to right into the accumulated document.
pub fn merge<I>(accumulated: QueryDocument, fragments: I) -> QueryDocument
where
    I: IntoIterator<Item = Fragment>,
{
    let mut count = 0usize;
    let document = fragments.into_iter().fold(accumulated, |acc, fragment| {
        count += 1;
        acc.merge(QueryDocument::from(fragment))
    });
    tracing::trace!(fragments = count, "merged fragments into document");

    document
}
