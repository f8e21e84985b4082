use super::{Location, SourceFileKey, SourceFiles};

// WARNING: Don't implement PartialEq, Eq, or Hash for this.
// It's too easy to accidentally define constructs that are only equal
// depending on source, which is usually not what we want.
#[derive(Copy, Clone, Debug)]
pub struct Source {
    pub key: SourceFileKey,
    pub location: Location,
}

impl Source {
    pub fn new(key: SourceFileKey, location: Location) -> Self {
        Self { key, location }
    }

    /// Renders as `<file>:<line>:<column>`, the prefix of every
    /// user-facing error message.
    pub fn describe(&self, source_files: &SourceFiles) -> String {
        format!("{}:{}", source_files.filename(self.key), self.location)
    }
}

#[derive(Copy, Debug)]
pub struct Sourced<T> {
    pub inner: T,
    pub source: Source,
}

impl<T> Sourced<T> {
    pub fn new(inner: T, source: Source) -> Self {
        Self { inner, source }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn as_ref(&self) -> Sourced<&T> {
        Sourced::new(&self.inner, self.source)
    }

    pub fn tuple(self) -> (T, Source) {
        (self.inner, self.source)
    }
}

impl<T: Clone> Clone for Sourced<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            source: self.source,
        }
    }
}
