use super::{EnumEntryRef, EnumRef, TypeRef};
use source_files::Source;

/// A named, closed set of acceptable types.
#[derive(Clone, Debug)]
pub struct TypeMatcher {
    pub name: String,
    pub options: Vec<TypeRef>,
    pub source: Source,
}

/// A named subset of one enum's entries. Also created synthetically when a
/// single enum entry is used directly as a constraint.
#[derive(Clone, Debug)]
pub struct EnumMatcher {
    pub name: String,
    pub enum_: EnumRef,
    pub options: Vec<EnumEntryRef>,
    pub source: Source,
}
