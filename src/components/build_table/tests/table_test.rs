use build_ast::parse;
use build_sem::resolve;
use build_table::build_intrinsic_table;
use build_token::lex;
use indoc::indoc;
use sem::{Named, Sem};
use source_files::SourceFiles;

fn resolve_source(source: &str) -> Sem {
    let mut source_files = SourceFiles::new();
    let key = source_files.add("test.def".into(), source.into());
    let tokens = lex(source, key).expect("lexes");
    let file = parse(tokens).expect("parses");
    resolve(&file).expect("resolves")
}

#[test]
fn matcher_layout_reserves_template_slots() {
    let sem = resolve_source(indoc! {r#"
        type f32
        type i32
        match scalar: f32 | i32
        fn f<T, U>(T, U)
    "#});

    let table = build_intrinsic_table(&sem).unwrap();

    // Two leading open-type slots, then the declared types, then the
    // declared type matchers.
    assert_eq!(sem.max_template_types, 2);
    assert_eq!(table.t_matchers.len(), 2 + 2 + 1);
    assert!(table.t_matchers[0].is_none());
    assert!(table.t_matchers[1].is_none());
    assert!(matches!(table.t_matchers[2], Some(Named::Type(_))));
    assert!(matches!(table.t_matchers[4], Some(Named::TypeMatcher(_))));
}

#[test]
fn fully_qualified_names_flatten_in_pre_order() {
    let sem = resolve_source(indoc! {r#"
        type C
        type D
        type E
        type B<x, y>
        type A<x, y>
        fn f(A<B<C, D>, E>)
    "#});

    let table = build_intrinsic_table(&sem).unwrap();

    // No template parameters anywhere, so type indices start at zero in
    // declaration order: C=0 D=1 E=2 B=3 A=4.
    let overload = &table.overloads[table.builtins[0].overloads_offset];
    let parameter = &table.parameters[overload.parameters_offset];

    let offset = parameter.type_matcher_indices_offset;
    assert_eq!(
        &table.type_matcher_indices[offset..offset + 5],
        &[4, 3, 0, 1, 2]
    );
}

#[test]
fn template_parameters_use_leading_slot_indices() {
    let sem = resolve_source(indoc! {r#"
        type f32
        type vec<N: num, T>
        fn f<T, N: num>(vec<N, T>) -> T
    "#});

    let table = build_intrinsic_table(&sem).unwrap();
    let overload = &table.overloads[table.builtins[0].overloads_offset];

    // Parameter `vec<N, T>` flattens to type indices [vec, T] and number
    // indices [N]; T and N are overload-local, so they use slot 0.
    let parameter = &table.parameters[overload.parameters_offset];
    let type_offset = parameter.type_matcher_indices_offset;
    let vec_index = 1 + sem.types.indices().position(|ty| sem.types[ty].name == "vec").unwrap();
    assert_eq!(
        &table.type_matcher_indices[type_offset..type_offset + 2],
        &[vec_index, 0]
    );

    let number_offset = parameter.number_matcher_indices_offset;
    assert_eq!(&table.number_matcher_indices[number_offset..number_offset + 1], &[0]);

    // The return type `T` is the open type at slot 0.
    let return_offset = overload.return_type_matcher_indices_offset.unwrap();
    assert_eq!(&table.type_matcher_indices[return_offset..return_offset + 1], &[0]);

    assert_eq!(overload.num_template_types, 1);
    assert_eq!(overload.num_template_numbers, 1);
    assert_eq!(table.template_types[overload.template_types_offset].name, "T");
    assert_eq!(
        table.template_numbers[overload.template_numbers_offset].name,
        "N"
    );
}

#[test]
fn constrained_template_types_record_their_matcher() {
    let sem = resolve_source(indoc! {r#"
        type i32
        type u32
        match iu32: i32 | u32
        fn f<T: iu32>(T)
    "#});

    let table = build_intrinsic_table(&sem).unwrap();
    let overload = &table.overloads[table.builtins[0].overloads_offset];
    let row = &table.template_types[overload.template_types_offset];

    // The iu32 matcher sits after 1 template slot + 2 types.
    assert_eq!(row.name, "T");
    assert_eq!(row.matcher_index, Some(3));
}

#[test]
fn identical_parameter_lists_share_storage() {
    let sem = resolve_source(indoc! {r#"
        type f32
        fn a(f32, f32)
        fn b(f32, f32)
    "#});

    let table = build_intrinsic_table(&sem).unwrap();

    let a = &table.overloads[table.builtins[0].overloads_offset];
    let b = &table.overloads[table.builtins[1].overloads_offset];
    assert_eq!(a.parameters_offset, b.parameters_offset);
}

#[test]
fn overload_rows_carry_flags_and_groups() {
    let sem = resolve_source(indoc! {r#"
        type f32
        type i32
        @must_use @const fn f(f32) -> f32
        op -(f32) -> f32
        op -(f32, f32) -> f32
        ctor f32() -> f32
        conv f32(i32) -> f32
    "#});

    let table = build_intrinsic_table(&sem).unwrap();

    assert_eq!(table.builtins.len(), 1);
    assert_eq!(table.unary_operators.len(), 1);
    assert_eq!(table.binary_operators.len(), 1);
    assert_eq!(table.constructors_and_converters.len(), 1);

    let f = &table.overloads[table.builtins[0].overloads_offset];
    assert!(f.must_use);
    assert!(!f.is_deprecated);
    assert_eq!(
        f.const_eval_function_offset.map(|offset| table.const_eval_functions[offset].as_str()),
        Some("f")
    );

    let ctor_conv = &table.constructors_and_converters[0];
    assert_eq!(ctor_conv.num_overloads, 2);
    assert_eq!(
        ctor_conv.overload_descriptions,
        vec!["ctor f32() -> f32", "conv f32(i32) -> f32"]
    );

    let unary = &table.unary_operators[0];
    assert_eq!(unary.name, "-");
    assert_eq!(unary.overload_descriptions, vec!["op -(f32) -> f32"]);
}

#[test]
fn functions_without_return_types_have_no_return_offsets() {
    let sem = resolve_source(indoc! {r#"
        type f32
        fn f(f32)
    "#});

    let table = build_intrinsic_table(&sem).unwrap();
    let overload = &table.overloads[table.builtins[0].overloads_offset];

    assert!(overload.return_type_matcher_indices_offset.is_none());
    assert!(overload.return_number_matcher_indices_offset.is_none());
    assert!(overload.const_eval_function_offset.is_none());
}
