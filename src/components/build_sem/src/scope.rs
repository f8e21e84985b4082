use indexmap::IndexMap;
use sem::Named;
use source_files::Source;

/// Arena of parent-linked scopes, rebuilt for every resolver run.
pub struct Scopes {
    scopes: Vec<ScopeData>,
}

pub type ScopeId = usize;

#[derive(Copy, Clone, Debug)]
pub struct ScopeEntry {
    pub named: Named,
    pub source: Source,
}

struct ScopeData {
    parent: Option<ScopeId>,
    entries: IndexMap<String, ScopeEntry>,
}

impl Scopes {
    pub const GLOBAL: ScopeId = 0;

    pub fn new() -> Self {
        Self {
            scopes: vec![ScopeData {
                parent: None,
                entries: IndexMap::new(),
            }],
        }
    }

    pub fn push_child(&mut self, parent: ScopeId) -> ScopeId {
        self.scopes.push(ScopeData {
            parent: Some(parent),
            entries: IndexMap::new(),
        });
        self.scopes.len() - 1
    }

    /// Walks outward through parent scopes.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<ScopeEntry> {
        let mut current = Some(scope);

        while let Some(id) = current {
            let data = &self.scopes[id];

            if let Some(entry) = data.entries.get(name) {
                return Some(*entry);
            }

            current = data.parent;
        }

        None
    }

    /// Declares a name in `scope`. Names may shadow parent scopes, but a
    /// second declaration in the same scope fails, yielding the first
    /// declaration's source.
    pub fn declare(
        &mut self,
        scope: ScopeId,
        name: &str,
        entry: ScopeEntry,
    ) -> Result<(), Source> {
        let entries = &mut self.scopes[scope].entries;

        if let Some(first) = entries.get(name) {
            return Err(first.source);
        }

        entries.insert(name.to_string(), entry);
        Ok(())
    }
}
