mod compatible;
mod decorations;
mod error;
mod scope;

pub use error::{ResolveError, ResolveErrorKind};

use ast::{
    DecorationValue, EnumDecl, File, IntrinsicDecl, IntrinsicKind, MatcherDecl, TemplateParamDecl,
    TemplatedName, TypeDecl,
};
use decorations::Decorations;
use scope::{ScopeEntry, ScopeId, Scopes};
use sem::{
    Enum, EnumEntry, EnumEntryRef, EnumMatcher, EnumMatcherRef, FullyQualifiedName, Function,
    FunctionRef, Named, Overload, Parameter, Sem, StageUses, TemplateNumberParam, TemplateParam,
    TemplateTypeParam, Type, TypeMatcher,
};
use source_files::Source;
use std::collections::HashMap;

/// Builds the semantic graph from a parsed definition file, failing on the
/// first unresolvable reference, duplicate declaration, or incompatible
/// template usage.
pub fn resolve(file: &File) -> Result<Sem, ResolveError> {
    Resolver::new().resolve(file)
}

/// Functions are grouped the way the lookup table consumes them. A name is
/// unique within its group; `op -` legitimately has both a unary and a
/// binary function.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum FunctionGroup {
    Builtin,
    UnaryOperator,
    BinaryOperator,
    ConstructorOrConverter,
}

struct Resolver {
    sem: Sem,
    scopes: Scopes,
    functions: HashMap<(FunctionGroup, String), FunctionRef>,
    /// Synthetic single-entry matchers for enum entries used directly as
    /// constraints, memoized per entry.
    enum_entry_matchers: HashMap<EnumEntryRef, EnumMatcherRef>,
}

impl Resolver {
    fn new() -> Self {
        Self {
            sem: Sem::new(),
            scopes: Scopes::new(),
            functions: HashMap::new(),
            enum_entry_matchers: HashMap::new(),
        }
    }

    fn resolve(mut self, file: &File) -> Result<Sem, ResolveError> {
        for decl in &file.enums {
            self.enum_decl(decl)?;
        }
        for decl in &file.types {
            self.type_decl(decl)?;
        }
        for decl in &file.matchers {
            self.matcher_decl(decl)?;
        }
        for decl in file.intrinsics() {
            self.intrinsic_decl(decl)?;
        }

        Ok(self.sem)
    }

    fn declare(
        &mut self,
        scope: ScopeId,
        name: &str,
        named: Named,
        source: Source,
    ) -> Result<(), ResolveError> {
        self.scopes
            .declare(scope, name, ScopeEntry { named, source })
            .map_err(|first| {
                ResolveErrorKind::AlreadyDeclared {
                    name: name.to_string(),
                    first,
                }
                .at(source)
            })
    }

    fn enum_decl(&mut self, decl: &EnumDecl) -> Result<(), ResolveError> {
        let enum_ref = self.sem.enums.alloc(Enum {
            name: decl.name.clone(),
            entries: Vec::new(),
            source: decl.source,
        });

        self.declare(Scopes::GLOBAL, &decl.name, Named::Enum(enum_ref), decl.source)?;

        for entry_decl in &decl.entries {
            let mut decorations = Decorations::new(&entry_decl.decorations);
            let is_internal = take_flag(&mut decorations, "internal")?;
            decorations.finish()?;

            let index = self.sem.enums[enum_ref].entries.len();

            self.sem.enums[enum_ref].entries.push(EnumEntry {
                name: entry_decl.name.clone(),
                is_internal,
                owner: enum_ref,
                source: entry_decl.source,
            });

            self.declare(
                Scopes::GLOBAL,
                &entry_decl.name,
                Named::EnumEntry(EnumEntryRef {
                    owner: enum_ref,
                    index,
                }),
                entry_decl.source,
            )?;
        }

        Ok(())
    }

    fn type_decl(&mut self, decl: &TypeDecl) -> Result<(), ResolveError> {
        let mut decorations = Decorations::new(&decl.decorations);

        let display = match decorations.take("display") {
            Some(decoration) => match decoration.values.as_slice() {
                [DecorationValue::Str(text)] => text.clone(),
                _ => {
                    return Err(ResolveErrorKind::InvalidDecorationValues {
                        name: decoration.name,
                    }
                    .at(decoration.source));
                }
            },
            None => String::new(),
        };

        decorations.finish()?;

        let scope = self.scopes.push_child(Scopes::GLOBAL);
        let (_, _, template_params) = self.resolve_template_params(&decl.template_params, scope)?;

        let type_ref = self.sem.types.alloc(Type {
            name: decl.name.clone(),
            display,
            template_params,
            source: decl.source,
        });

        self.declare(Scopes::GLOBAL, &decl.name, Named::Type(type_ref), decl.source)
    }

    fn matcher_decl(&mut self, decl: &MatcherDecl) -> Result<(), ResolveError> {
        let options: Vec<(Named, &TemplatedName)> = decl
            .options
            .iter()
            .map(|option| {
                if !option.template_args.is_empty() {
                    return Err(ResolveErrorKind::InvalidMatcherOption {
                        name: option.name.clone(),
                    }
                    .at(option.source));
                }

                let entry = self.scopes.lookup(Scopes::GLOBAL, &option.name).ok_or_else(|| {
                    ResolveErrorKind::Unresolved {
                        name: option.name.clone(),
                    }
                    .at(option.source)
                })?;

                Ok((entry.named, option))
            })
            .collect::<Result<_, _>>()?;

        // The first option decides whether this is a type or enum matcher.
        let named = match options.first() {
            Some((Named::Type(_), _)) => {
                let mut types = Vec::new();

                for (named, option) in &options {
                    match named {
                        Named::Type(ty) => types.push(*ty),
                        _ => {
                            return Err(ResolveErrorKind::InvalidMatcherOption {
                                name: option.name.clone(),
                            }
                            .at(option.source));
                        }
                    }
                }

                Named::TypeMatcher(self.sem.type_matchers.alloc(TypeMatcher {
                    name: decl.name.clone(),
                    options: types,
                    source: decl.source,
                }))
            }
            Some((Named::EnumEntry(first), _)) => {
                let enum_ = first.owner;
                let mut entries = Vec::new();

                for (named, option) in &options {
                    match named {
                        Named::EnumEntry(entry) if entry.owner == enum_ => entries.push(*entry),
                        Named::EnumEntry(_) => {
                            return Err(ResolveErrorKind::MatcherMixesEnums {
                                name: option.name.clone(),
                            }
                            .at(option.source));
                        }
                        _ => {
                            return Err(ResolveErrorKind::InvalidMatcherOption {
                                name: option.name.clone(),
                            }
                            .at(option.source));
                        }
                    }
                }

                Named::EnumMatcher(self.sem.enum_matchers.alloc(EnumMatcher {
                    name: decl.name.clone(),
                    enum_,
                    options: entries,
                    source: decl.source,
                }))
            }
            Some((_, option)) => {
                return Err(ResolveErrorKind::InvalidMatcherOption {
                    name: option.name.clone(),
                }
                .at(option.source));
            }
            None => {
                return Err(ResolveErrorKind::InvalidMatcherOption {
                    name: decl.name.clone(),
                }
                .at(decl.source));
            }
        };

        self.declare(Scopes::GLOBAL, &decl.name, named, decl.source)
    }

    fn intrinsic_decl(&mut self, decl: &IntrinsicDecl) -> Result<(), ResolveError> {
        let mut decorations = Decorations::new(&decl.decorations);

        let can_be_used_in_stage = match decorations.take("stage") {
            Some(decoration) => {
                if decoration.values.is_empty() {
                    return Err(ResolveErrorKind::InvalidDecorationValues {
                        name: decoration.name,
                    }
                    .at(decoration.source));
                }

                let mut uses = StageUses::none();

                for value in &decoration.values {
                    let DecorationValue::Ident(stage) = value else {
                        return Err(ResolveErrorKind::InvalidDecorationValues {
                            name: decoration.name,
                        }
                        .at(decoration.source));
                    };

                    match stage.as_str() {
                        "vertex" => uses.vertex = true,
                        "fragment" => uses.fragment = true,
                        "compute" => uses.compute = true,
                        _ => {
                            return Err(ResolveErrorKind::InvalidStage {
                                stage: stage.clone(),
                            }
                            .at(decoration.source));
                        }
                    }
                }

                uses
            }
            None => StageUses::default(),
        };

        let is_deprecated = take_flag(&mut decorations, "deprecated")?;
        let must_use = take_flag(&mut decorations, "must_use")?;

        let const_eval_fn = match decorations.take("const") {
            Some(decoration) => match decoration.values.as_slice() {
                [] => Some(decl.name.clone()),
                [DecorationValue::Str(name)] | [DecorationValue::Ident(name)] => {
                    Some(name.clone())
                }
                _ => {
                    return Err(ResolveErrorKind::InvalidDecorationValues {
                        name: decoration.name,
                    }
                    .at(decoration.source));
                }
            },
            None => None,
        };

        decorations.finish()?;

        let group = match decl.kind {
            IntrinsicKind::Builtin => FunctionGroup::Builtin,
            IntrinsicKind::Operator => match decl.parameters.len() {
                1 => FunctionGroup::UnaryOperator,
                2 => FunctionGroup::BinaryOperator,
                _ => {
                    return Err(ResolveErrorKind::InvalidOperatorParameterCount {
                        name: decl.name.clone(),
                    }
                    .at(decl.source));
                }
            },
            IntrinsicKind::Constructor | IntrinsicKind::Converter => {
                FunctionGroup::ConstructorOrConverter
            }
        };

        let function = self.function(group, decl);

        let scope = self.scopes.push_child(Scopes::GLOBAL);
        let (template_types, template_numbers, _) =
            self.resolve_template_params(&decl.template_params, scope)?;

        let mut parameters = Vec::new();

        for parameter in &decl.parameters {
            let ty = self.fully_qualified_name(&parameter.ty, scope, &template_numbers)?;
            parameters.push(Parameter {
                name: parameter.name.clone(),
                ty,
            });
        }

        let return_type = match &decl.return_type {
            Some(templated_name) => {
                let fqn = self.fully_qualified_name(templated_name, scope, &template_numbers)?;

                match fqn.target {
                    Named::Type(_) | Named::TypeMatcher(_) | Named::TemplateType(_) => {}
                    _ => {
                        return Err(ResolveErrorKind::InvalidReturnType {
                            name: templated_name.name.clone(),
                        }
                        .at(templated_name.source));
                    }
                }

                Some(fqn)
            }
            None => None,
        };

        self.sem.max_template_types = self.sem.max_template_types.max(template_types.len());
        self.sem.max_template_numbers = self.sem.max_template_numbers.max(template_numbers.len());

        self.sem.functions[function].overloads.push(Overload {
            owner: function,
            kind: decl.kind,
            template_types,
            template_numbers,
            parameters,
            return_type,
            can_be_used_in_stage,
            must_use,
            is_deprecated,
            const_eval_fn,
            source: decl.source,
        });

        Ok(())
    }

    /// The first overload of a name creates the function; later overloads
    /// of the same name (within the same group) append to it.
    fn function(&mut self, group: FunctionGroup, decl: &IntrinsicDecl) -> FunctionRef {
        if let Some(&function) = self.functions.get(&(group, decl.name.clone())) {
            return function;
        }

        let function = self.sem.functions.alloc(Function {
            name: decl.name.clone(),
            kind: decl.kind,
            overloads: Vec::new(),
            source: decl.source,
        });

        match group {
            FunctionGroup::Builtin => self.sem.builtins.push(function),
            FunctionGroup::UnaryOperator => self.sem.unary_operators.push(function),
            FunctionGroup::BinaryOperator => self.sem.binary_operators.push(function),
            FunctionGroup::ConstructorOrConverter => {
                self.sem.constructors_and_converters.push(function)
            }
        }

        self.functions.insert((group, decl.name.clone()), function);
        function
    }

    /// Resolves a declaration's template parameters, declaring each into
    /// `scope` and partitioning them into the open-type and open-number
    /// lists the later stages consume.
    fn resolve_template_params(
        &mut self,
        decls: &[TemplateParamDecl],
        scope: ScopeId,
    ) -> Result<
        (
            Vec<TemplateTypeParam>,
            Vec<TemplateNumberParam>,
            Vec<TemplateParam>,
        ),
        ResolveError,
    > {
        let mut types = Vec::new();
        let mut numbers = Vec::new();
        let mut unified = Vec::new();

        for decl in decls {
            let param = self.template_param(decl, scope)?;

            let named = match &param {
                TemplateParam::Type(param) => {
                    types.push(param.clone());
                    Named::TemplateType(types.len() - 1)
                }
                TemplateParam::Number(param) => {
                    numbers.push(param.clone());
                    Named::TemplateNumber(numbers.len() - 1)
                }
            };

            self.declare(scope, &decl.name, named, decl.source)?;
            unified.push(param);
        }

        Ok((types, numbers, unified))
    }

    fn template_param(
        &mut self,
        decl: &TemplateParamDecl,
        scope: ScopeId,
    ) -> Result<TemplateParam, ResolveError> {
        let Some(constraint) = &decl.constraint else {
            return Ok(TemplateParam::Type(TemplateTypeParam {
                name: decl.name.clone(),
                matcher: None,
            }));
        };

        if !constraint.template_args.is_empty() {
            return Err(ResolveErrorKind::InvalidTemplateParamConstraint {
                name: constraint.name.clone(),
            }
            .at(constraint.source));
        }

        if constraint.name == "num" {
            return Ok(TemplateParam::Number(TemplateNumberParam::Number {
                name: decl.name.clone(),
            }));
        }

        let entry = self.scopes.lookup(scope, &constraint.name).ok_or_else(|| {
            ResolveErrorKind::Unresolved {
                name: constraint.name.clone(),
            }
            .at(constraint.source)
        })?;

        match entry.named {
            Named::TypeMatcher(matcher) => Ok(TemplateParam::Type(TemplateTypeParam {
                name: decl.name.clone(),
                matcher: Some(matcher),
            })),
            Named::Enum(enum_) => Ok(TemplateParam::Number(TemplateNumberParam::Enum {
                name: decl.name.clone(),
                enum_,
                matcher: None,
            })),
            Named::EnumMatcher(matcher) => Ok(TemplateParam::Number(TemplateNumberParam::Enum {
                name: decl.name.clone(),
                enum_: self.sem.enum_matchers[matcher].enum_,
                matcher: Some(matcher),
            })),
            Named::EnumEntry(entry) => {
                let matcher = self.enum_entry_matcher(entry);
                Ok(TemplateParam::Number(TemplateNumberParam::Enum {
                    name: decl.name.clone(),
                    enum_: entry.owner,
                    matcher: Some(matcher),
                }))
            }
            _ => Err(ResolveErrorKind::InvalidTemplateParamConstraint {
                name: constraint.name.clone(),
            }
            .at(constraint.source)),
        }
    }

    /// A single enum entry used as a constraint acts as a one-option enum
    /// matcher; repeated lifts of the same entry share the matcher.
    fn enum_entry_matcher(&mut self, entry: EnumEntryRef) -> EnumMatcherRef {
        if let Some(&matcher) = self.enum_entry_matchers.get(&entry) {
            return matcher;
        }

        let (name, source) = {
            let entry = self.sem.entry(entry);
            (entry.name.clone(), entry.source)
        };

        let matcher = self.sem.enum_matchers.alloc(EnumMatcher {
            name,
            enum_: entry.owner,
            options: vec![entry],
            source,
        });

        self.enum_entry_matchers.insert(entry, matcher);
        matcher
    }

    fn fully_qualified_name(
        &mut self,
        templated_name: &TemplatedName,
        scope: ScopeId,
        template_numbers: &[TemplateNumberParam],
    ) -> Result<FullyQualifiedName, ResolveError> {
        let entry = self
            .scopes
            .lookup(scope, &templated_name.name)
            .ok_or_else(|| {
                ResolveErrorKind::Unresolved {
                    name: templated_name.name.clone(),
                }
                .at(templated_name.source)
            })?;

        let mut target = entry.named;

        if let Named::EnumEntry(entry) = target {
            target = Named::EnumMatcher(self.enum_entry_matcher(entry));
        }

        let declared_params: Vec<TemplateParam> = match target {
            Named::Type(ty) => self.sem.types[ty].template_params.clone(),
            _ => Vec::new(),
        };

        if templated_name.template_args.len() != declared_params.len() {
            return Err(ResolveErrorKind::TemplateArityMismatch {
                name: templated_name.name.clone(),
                expected: declared_params.len(),
                got: templated_name.template_args.len(),
            }
            .at(templated_name.source));
        }

        let mut template_args = Vec::new();

        for (arg, param) in templated_name.template_args.iter().zip(&declared_params) {
            let fqn = self.fully_qualified_name(arg, scope, template_numbers)?;
            self.check_compatible(&fqn, arg, param, template_numbers)?;
            template_args.push(sem::TemplateArg::Name(fqn));
        }

        Ok(FullyQualifiedName {
            target,
            template_args,
        })
    }
}

fn take_flag(decorations: &mut Decorations, name: &str) -> Result<bool, ResolveError> {
    match decorations.take(name) {
        Some(decoration) if decoration.values.is_empty() => Ok(true),
        Some(decoration) => Err(ResolveErrorKind::InvalidDecorationValues {
            name: decoration.name,
        }
        .at(decoration.source)),
        None => Ok(false),
    }
}
