use super::error::{ResolveError, ResolveErrorKind};
use ast::Decoration;

/// Decorations are drained during resolution; anything left over when a
/// declaration finishes is unrecognized and fatal.
pub struct Decorations {
    pending: Vec<Decoration>,
}

impl Decorations {
    pub fn new(decorations: &[Decoration]) -> Self {
        Self {
            pending: decorations.to_vec(),
        }
    }

    pub fn take(&mut self, name: &str) -> Option<Decoration> {
        let position = self
            .pending
            .iter()
            .position(|decoration| decoration.name == name)?;

        Some(self.pending.remove(position))
    }

    pub fn finish(self) -> Result<(), ResolveError> {
        match self.pending.into_iter().next() {
            Some(leftover) => Err(ResolveErrorKind::UnknownDecoration {
                name: leftover.name,
            }
            .at(leftover.source)),
            None => Ok(()),
        }
    }
}
