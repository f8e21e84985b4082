#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceFileKey(pub(crate) u32);
