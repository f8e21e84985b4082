/// The shader stages an overload may be used in. Overloads without a
/// `@stage(...)` decoration are usable everywhere.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StageUses {
    pub vertex: bool,
    pub fragment: bool,
    pub compute: bool,
}

impl Default for StageUses {
    fn default() -> Self {
        Self {
            vertex: true,
            fragment: true,
            compute: true,
        }
    }
}

impl StageUses {
    pub fn none() -> Self {
        Self {
            vertex: false,
            fragment: false,
            compute: false,
        }
    }
}
