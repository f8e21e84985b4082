//! Flattens the semantic graph into the compacted, index-based tables the
//! downstream matching engine embeds as static data.

mod helpers;

pub use helpers::{
    deepest_element_type, element_type, is_abstract, is_declarable, is_host_shareable,
    overload_uses_f16, split_display_name,
};

use lut::{Lut, Slot};
use sem::{
    FullyQualifiedName, FunctionRef, IntrinsicKind, Named, Overload, Sem, StageUses, TemplateArg,
    TemplateNumberParam,
};
use std::collections::HashMap;
use std::fmt::Display;

#[derive(Debug)]
pub struct BuildTableError {
    message: String,
}

impl Display for BuildTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Row of the template-type table: one open type of some overload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TemplateType {
    pub name: String,
    /// Constraining matcher's index into the type matcher array, if any.
    pub matcher_index: Option<usize>,
}

/// Row of the template-number table: one open number or open enum.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TemplateNumber {
    pub name: String,
    /// Constraining matcher's index into the number matcher array, if any.
    pub matcher_index: Option<usize>,
}

/// Row of the parameter table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParameterInfo {
    pub usage: Option<String>,
    /// Start of this parameter's matcher indices in
    /// [`IntrinsicTable::type_matcher_indices`].
    pub type_matcher_indices_offset: usize,
    /// Start of this parameter's matcher indices in
    /// [`IntrinsicTable::number_matcher_indices`].
    pub number_matcher_indices_offset: usize,
}

/// Row of the overload table: counts plus start offsets into the shared
/// arrays.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OverloadInfo {
    pub num_parameters: usize,
    pub num_template_types: usize,
    pub num_template_numbers: usize,
    pub template_types_offset: usize,
    pub template_numbers_offset: usize,
    pub parameters_offset: usize,
    pub return_type_matcher_indices_offset: Option<usize>,
    pub return_number_matcher_indices_offset: Option<usize>,
    pub const_eval_function_offset: Option<usize>,
    pub can_be_used_in_stage: StageUses,
    pub must_use: bool,
    pub is_deprecated: bool,
    pub kind: IntrinsicKind,
}

/// Row of the per-function table.
#[derive(Clone, Debug)]
pub struct IntrinsicInfo {
    pub name: String,
    pub overload_descriptions: Vec<String>,
    pub num_overloads: usize,
    pub overloads_offset: usize,
}

/// The built lookup table. Matcher arrays are laid out with the open
/// template slots first, so an index below `max_template_types` (or
/// `max_template_numbers`) selects an overload-local template parameter.
#[derive(Debug, Default)]
pub struct IntrinsicTable {
    pub t_matchers: Vec<Option<Named>>,
    pub n_matchers: Vec<Option<Named>>,

    pub type_matcher_indices: Vec<usize>,
    pub number_matcher_indices: Vec<usize>,
    pub template_types: Vec<TemplateType>,
    pub template_numbers: Vec<TemplateNumber>,
    pub parameters: Vec<ParameterInfo>,
    pub overloads: Vec<OverloadInfo>,
    pub const_eval_functions: Vec<String>,

    pub builtins: Vec<IntrinsicInfo>,
    pub unary_operators: Vec<IntrinsicInfo>,
    pub binary_operators: Vec<IntrinsicInfo>,
    pub constructors_and_converters: Vec<IntrinsicInfo>,
}

/// Builds the lookup table from the semantic graph.
pub fn build_intrinsic_table(sem: &Sem) -> Result<IntrinsicTable, BuildTableError> {
    TableBuilder::new(sem).build()
}

/// Per-overload bookkeeping across the two processing stages: slots are
/// recorded before compaction and resolved to offsets afterwards.
struct OverloadSlots {
    function: FunctionRef,
    overload_index: usize,
    num_template_types: usize,
    num_template_numbers: usize,
    template_types_slot: Slot,
    template_numbers_slot: Slot,
    return_type_slot: Option<Slot>,
    return_number_slot: Option<Slot>,
    const_eval_slot: Option<Slot>,
    parameter_slots: Vec<(Option<String>, Slot, Slot)>,
}

struct TableBuilder<'a> {
    sem: &'a Sem,
    t_matchers: Vec<Option<Named>>,
    n_matchers: Vec<Option<Named>>,
    t_matcher_index: HashMap<Named, usize>,
    n_matcher_index: HashMap<Named, usize>,
}

impl<'a> TableBuilder<'a> {
    fn new(sem: &'a Sem) -> Self {
        let mut builder = Self {
            sem,
            t_matchers: Vec::new(),
            n_matchers: Vec::new(),
            t_matcher_index: HashMap::new(),
            n_matcher_index: HashMap::new(),
        };
        builder.layout_matchers();
        builder
    }

    /// Assigns every type, type matcher and enum matcher a unique index.
    /// The first `max_template_types` / `max_template_numbers` slots are
    /// reserved for overload-local template parameters.
    fn layout_matchers(&mut self) {
        self.t_matchers = vec![None; self.sem.max_template_types];

        for ty in self.sem.types.indices() {
            self.t_matcher_index
                .insert(Named::Type(ty), self.t_matchers.len());
            self.t_matchers.push(Some(Named::Type(ty)));
        }

        for matcher in self.sem.type_matchers.indices() {
            self.t_matcher_index
                .insert(Named::TypeMatcher(matcher), self.t_matchers.len());
            self.t_matchers.push(Some(Named::TypeMatcher(matcher)));
        }

        self.n_matchers = vec![None; self.sem.max_template_numbers];

        for matcher in self.sem.enum_matchers.indices() {
            self.n_matcher_index
                .insert(Named::EnumMatcher(matcher), self.n_matchers.len());
            self.n_matchers.push(Some(Named::EnumMatcher(matcher)));
        }
    }

    /// The matcher indices for one named entity: (type indices, number
    /// indices). Template parameters use their overload-local index, which
    /// selects one of the reserved leading slots.
    fn matcher_indices(
        &self,
        named: Named,
        overload: &Overload,
    ) -> Result<(Vec<usize>, Vec<usize>), BuildTableError> {
        match named {
            Named::Type(_) | Named::TypeMatcher(_) => match self.t_matcher_index.get(&named) {
                Some(&index) => Ok((vec![index], Vec::new())),
                None => Err(BuildTableError {
                    message: format!(
                        "matcher index missing entry for '{}'",
                        self.sem.named_str(named, overload)
                    ),
                }),
            },
            Named::TemplateType(i) => Ok((vec![i], Vec::new())),
            Named::EnumMatcher(_) => match self.n_matcher_index.get(&named) {
                Some(&index) => Ok((Vec::new(), vec![index])),
                None => Err(BuildTableError {
                    message: format!(
                        "matcher index missing entry for '{}'",
                        self.sem.named_str(named, overload)
                    ),
                }),
            },
            Named::TemplateNumber(i) => Ok((Vec::new(), vec![i])),
            Named::Enum(_) | Named::EnumEntry(_) => Err(BuildTableError {
                message: format!(
                    "'{}' cannot be flattened to matcher indices",
                    self.sem.named_str(named, overload)
                ),
            }),
        }
    }

    /// Flattens a fully-qualified name to matcher indices with a pre-order
    /// walk: the target's own index first, then each template argument's
    /// indices left to right, recursing through nested arguments.
    fn collect_matcher_indices(
        &self,
        fqn: &FullyQualifiedName,
        overload: &Overload,
    ) -> Result<(Vec<usize>, Vec<usize>), BuildTableError> {
        let (mut types, mut numbers) = self.matcher_indices(fqn.target, overload)?;

        for arg in &fqn.template_args {
            if let TemplateArg::Name(inner) = arg {
                let (inner_types, inner_numbers) = self.collect_matcher_indices(inner, overload)?;
                types.extend(inner_types);
                numbers.extend(inner_numbers);
            }
        }

        Ok((types, numbers))
    }

    fn build(self) -> Result<IntrinsicTable, BuildTableError> {
        let groups: [&[FunctionRef]; 4] = self.sem.function_groups();

        // Stage 0: append everything offset-independent through the LUTs.
        let mut type_indices_lut: Lut<usize> = Lut::new();
        let mut number_indices_lut: Lut<usize> = Lut::new();
        let mut template_types_lut: Lut<TemplateType> = Lut::new();
        let mut template_numbers_lut: Lut<TemplateNumber> = Lut::new();
        let mut const_eval_lut: Lut<String> = Lut::new();

        let mut all_slots: Vec<OverloadSlots> = Vec::new();

        for group in groups {
            for &function in group {
                for (overload_index, overload) in
                    self.sem.functions[function].overloads.iter().enumerate()
                {
                    let mut template_types = Vec::new();

                    for param in &overload.template_types {
                        let matcher_index = match param.matcher {
                            Some(matcher) => {
                                let (types, _) =
                                    self.matcher_indices(Named::TypeMatcher(matcher), overload)?;
                                Some(types[0])
                            }
                            None => None,
                        };

                        template_types.push(TemplateType {
                            name: param.name.clone(),
                            matcher_index,
                        });
                    }

                    let mut template_numbers = Vec::new();

                    for param in &overload.template_numbers {
                        let matcher_index = match param {
                            TemplateNumberParam::Enum {
                                matcher: Some(matcher),
                                ..
                            } => {
                                let (_, numbers) =
                                    self.matcher_indices(Named::EnumMatcher(*matcher), overload)?;
                                Some(numbers[0])
                            }
                            _ => None,
                        };

                        template_numbers.push(TemplateNumber {
                            name: param.name().to_string(),
                            matcher_index,
                        });
                    }

                    let (return_type_slot, return_number_slot) = match &overload.return_type {
                        Some(return_type) => {
                            let (types, numbers) =
                                self.collect_matcher_indices(return_type, overload)?;
                            (
                                Some(type_indices_lut.add(types)),
                                Some(number_indices_lut.add(numbers)),
                            )
                        }
                        None => (None, None),
                    };

                    let mut parameter_slots = Vec::new();

                    for parameter in &overload.parameters {
                        let (types, numbers) =
                            self.collect_matcher_indices(&parameter.ty, overload)?;

                        parameter_slots.push((
                            parameter.name.clone(),
                            type_indices_lut.add(types),
                            number_indices_lut.add(numbers),
                        ));
                    }

                    let const_eval_slot = overload
                        .const_eval_fn
                        .as_ref()
                        .map(|name| const_eval_lut.add([name.clone()]));

                    all_slots.push(OverloadSlots {
                        function,
                        overload_index,
                        num_template_types: overload.template_types.len(),
                        num_template_numbers: overload.template_numbers.len(),
                        template_types_slot: template_types_lut.add(template_types),
                        template_numbers_slot: template_numbers_lut.add(template_numbers),
                        return_type_slot,
                        return_number_slot,
                        const_eval_slot,
                        parameter_slots,
                    });
                }
            }
        }

        // Compact the stage-0 LUTs; slots resolve to final offsets now.
        let type_matcher_indices = type_indices_lut.compact();
        let number_matcher_indices = number_indices_lut.compact();
        let template_types = template_types_lut.compact();
        let template_numbers = template_numbers_lut.compact();
        let const_eval_functions = const_eval_lut.compact();

        // Stage 1: parameter rows now embed the resolved index offsets.
        let mut parameters_lut: Lut<ParameterInfo> = Lut::new();

        let parameters_slots: Vec<Slot> = all_slots
            .iter()
            .map(|slots| {
                let rows: Vec<ParameterInfo> = slots
                    .parameter_slots
                    .iter()
                    .map(|(usage, type_slot, number_slot)| ParameterInfo {
                        usage: usage.clone(),
                        type_matcher_indices_offset: type_matcher_indices.offset(*type_slot),
                        number_matcher_indices_offset: number_matcher_indices.offset(*number_slot),
                    })
                    .collect();

                parameters_lut.add(rows)
            })
            .collect();

        let parameters = parameters_lut.compact();

        // Finally the overload rows, grouped per function.
        let mut overloads_lut: Lut<OverloadInfo> = Lut::new();

        let mut slots_by_overload: HashMap<(FunctionRef, usize), usize> = HashMap::new();
        for (index, slots) in all_slots.iter().enumerate() {
            slots_by_overload.insert((slots.function, slots.overload_index), index);
        }

        let mut pending_groups: Vec<Vec<(String, Vec<String>, usize, Slot)>> = Vec::new();

        for group in groups {
            let mut pending = Vec::new();

            for &function_ref in group {
                let function = &self.sem.functions[function_ref];
                let mut rows = Vec::new();
                let mut descriptions = Vec::new();

                for (overload_index, overload) in function.overloads.iter().enumerate() {
                    let index = slots_by_overload[&(function_ref, overload_index)];
                    let slots = &all_slots[index];

                    descriptions.push(self.sem.overload_signature(function, overload));

                    rows.push(OverloadInfo {
                        num_parameters: overload.parameters.len(),
                        num_template_types: slots.num_template_types,
                        num_template_numbers: slots.num_template_numbers,
                        template_types_offset: template_types.offset(slots.template_types_slot),
                        template_numbers_offset: template_numbers
                            .offset(slots.template_numbers_slot),
                        parameters_offset: parameters.offset(parameters_slots[index]),
                        return_type_matcher_indices_offset: slots
                            .return_type_slot
                            .map(|slot| type_matcher_indices.offset(slot)),
                        return_number_matcher_indices_offset: slots
                            .return_number_slot
                            .map(|slot| number_matcher_indices.offset(slot)),
                        const_eval_function_offset: slots
                            .const_eval_slot
                            .map(|slot| const_eval_functions.offset(slot)),
                        can_be_used_in_stage: overload.can_be_used_in_stage,
                        must_use: overload.must_use,
                        is_deprecated: overload.is_deprecated,
                        kind: overload.kind,
                    });
                }

                let num_overloads = rows.len();
                let overloads_slot = overloads_lut.add(rows);

                pending.push((
                    function.name.clone(),
                    descriptions,
                    num_overloads,
                    overloads_slot,
                ));
            }

            pending_groups.push(pending);
        }

        let overloads = overloads_lut.compact();

        let mut resolved_groups = pending_groups.into_iter().map(|pending| {
            pending
                .into_iter()
                .map(
                    |(name, overload_descriptions, num_overloads, slot)| IntrinsicInfo {
                        name,
                        overload_descriptions,
                        num_overloads,
                        overloads_offset: overloads.offset(slot),
                    },
                )
                .collect::<Vec<_>>()
        });

        let builtins = resolved_groups.next().unwrap_or_default();
        let unary_operators = resolved_groups.next().unwrap_or_default();
        let binary_operators = resolved_groups.next().unwrap_or_default();
        let constructors_and_converters = resolved_groups.next().unwrap_or_default();

        Ok(IntrinsicTable {
            t_matchers: self.t_matchers,
            n_matchers: self.n_matchers,
            type_matcher_indices: type_matcher_indices.into_items(),
            number_matcher_indices: number_matcher_indices.into_items(),
            template_types: template_types.into_items(),
            template_numbers: template_numbers.into_items(),
            parameters: parameters.into_items(),
            overloads: overloads.into_items(),
            const_eval_functions: const_eval_functions.into_items(),
            builtins,
            unary_operators,
            binary_operators,
            constructors_and_converters,
        })
    }
}
