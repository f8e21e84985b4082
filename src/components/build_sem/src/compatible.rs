use super::Resolver;
use super::error::{ResolveError, ResolveErrorKind};
use ast::TemplatedName;
use sem::{EnumRef, FullyQualifiedName, Named, TemplateNumberParam, TemplateParam};

/// Template-argument compatibility classifies arguments and parameters
/// into three families; only same-family (and for enums, same-enum)
/// substitutions are accepted. Matcher constraints are enforced later by
/// the matching engine, not here.
#[derive(Copy, Clone, PartialEq, Eq)]
enum Family {
    Type,
    Number,
    Enum(EnumRef),
}

impl Resolver {
    pub(crate) fn check_compatible(
        &self,
        arg: &FullyQualifiedName,
        arg_ast: &TemplatedName,
        param: &TemplateParam,
        template_numbers: &[TemplateNumberParam],
    ) -> Result<(), ResolveError> {
        let arg_family = match arg.target {
            Named::Type(_) | Named::TypeMatcher(_) | Named::TemplateType(_) => Family::Type,
            Named::Enum(enum_) => Family::Enum(enum_),
            Named::EnumEntry(entry) => Family::Enum(entry.owner),
            Named::EnumMatcher(matcher) => Family::Enum(self.sem.enum_matchers[matcher].enum_),
            Named::TemplateNumber(i) => match &template_numbers[i] {
                TemplateNumberParam::Number { .. } => Family::Number,
                TemplateNumberParam::Enum { enum_, .. } => Family::Enum(*enum_),
            },
        };

        let param_family = match param {
            TemplateParam::Type(_) => Family::Type,
            TemplateParam::Number(TemplateNumberParam::Number { .. }) => Family::Number,
            TemplateParam::Number(TemplateNumberParam::Enum { enum_, .. }) => {
                Family::Enum(*enum_)
            }
        };

        if arg_family == param_family {
            return Ok(());
        }

        Err(ResolveErrorKind::IncompatibleTemplateArg {
            arg_kind: self.describe_arg(arg.target, template_numbers),
            arg_name: arg_ast.name.clone(),
            param_family: match param_family {
                Family::Type => "type",
                Family::Number => "number",
                Family::Enum(_) => "enum",
            },
        }
        .at(arg_ast.source))
    }

    fn describe_arg(
        &self,
        named: Named,
        template_numbers: &[TemplateNumberParam],
    ) -> &'static str {
        match named {
            Named::Type(_) => "type",
            Named::TypeMatcher(_) => "type matcher",
            Named::Enum(_) => "enum",
            Named::EnumEntry(_) => "enum entry",
            Named::EnumMatcher(_) => "enum matcher",
            Named::TemplateType(_) => "template type",
            Named::TemplateNumber(i) => match &template_numbers[i] {
                TemplateNumberParam::Number { .. } => "template number",
                TemplateNumberParam::Enum { .. } => "template enum",
            },
        }
    }
}
