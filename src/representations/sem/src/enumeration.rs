use super::EnumRef;
use source_files::Source;

#[derive(Clone, Debug)]
pub struct Enum {
    pub name: String,
    pub entries: Vec<EnumEntry>,
    pub source: Source,
}

#[derive(Clone, Debug)]
pub struct EnumEntry {
    pub name: String,
    pub is_internal: bool,
    /// Back-reference to the owning enum, for lookup only.
    pub owner: EnumRef,
    pub source: Source,
}

/// Entries are owned by their enum, so a reference is the owner plus the
/// entry's position within it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumEntryRef {
    pub owner: EnumRef,
    pub index: usize,
}
