use super::{FullyQualifiedName, FunctionRef, StageUses, TemplateNumberParam, TemplateTypeParam};
use ast::IntrinsicKind;
use source_files::Source;

/// A function, operator, constructor or converter with all of its
/// overloads. The first overload of a name creates the function;
/// subsequent overloads of the same name append to it.
#[derive(Clone, Debug)]
pub struct Function {
    pub name: String,
    pub kind: IntrinsicKind,
    pub overloads: Vec<Overload>,
    pub source: Source,
}

#[derive(Clone, Debug)]
pub struct Overload {
    /// Back-reference to the owning function, for lookup only.
    pub owner: FunctionRef,
    /// Constructors and converters of one name share a function; the
    /// declaration kind is therefore tracked per overload.
    pub kind: IntrinsicKind,
    /// Open types, in declaration order.
    pub template_types: Vec<TemplateTypeParam>,
    /// Open numbers and open enums, in declaration order.
    pub template_numbers: Vec<TemplateNumberParam>,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<FullyQualifiedName>,
    pub can_be_used_in_stage: StageUses,
    pub must_use: bool,
    pub is_deprecated: bool,
    /// Name of the constant-evaluation routine bound by `@const`.
    pub const_eval_fn: Option<String>,
    pub source: Source,
}

#[derive(Clone, Debug)]
pub struct Parameter {
    pub name: Option<String>,
    pub ty: FullyQualifiedName,
}
