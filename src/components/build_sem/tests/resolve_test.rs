use build_ast::parse;
use build_sem::{ResolveError, resolve};
use build_token::lex;
use indoc::indoc;
use sem::Sem;
use source_files::SourceFiles;

fn resolve_source(source: &str) -> (SourceFiles, Result<Sem, ResolveError>) {
    let mut source_files = SourceFiles::new();
    let key = source_files.add("test.def".into(), source.into());
    let tokens = lex(source, key).expect("lexes");
    let file = parse(tokens).expect("parses");
    let result = resolve(&file);
    (source_files, result)
}

fn resolve_ok(source: &str) -> Sem {
    let (_, result) = resolve_source(source);
    result.expect("resolves")
}

fn error_message(source: &str) -> String {
    let (source_files, result) = resolve_source(source);
    result.unwrap_err().message(&source_files)
}

#[test]
fn entities_land_in_the_graph() {
    let sem = resolve_ok(indoc! {r#"
        enum access {
          read
          write
          @internal read_write
        }
        type f32
        type i32
        match scalar: f32 | i32
        match readable: read | read_write
        fn clamp<T: scalar>(value: T, low: T, high: T) -> T
        fn clamp(i32, i32, i32) -> i32
    "#});

    assert_eq!(sem.enums.len(), 1);
    assert_eq!(sem.types.len(), 2);
    assert_eq!(sem.type_matchers.len(), 1);
    assert_eq!(sem.enum_matchers.len(), 1);
    assert_eq!(sem.builtins.len(), 1);

    let clamp = &sem.functions[sem.builtins[0]];
    assert_eq!(clamp.name, "clamp");
    assert_eq!(clamp.overloads.len(), 2);

    let entries = &sem.enums[sem.enum_matchers.values().next().unwrap().enum_].entries;
    assert!(entries[2].is_internal);
    assert!(!entries[0].is_internal);
}

#[test]
fn operators_partition_by_arity() {
    let sem = resolve_ok(indoc! {r#"
        type i32
        op -(i32) -> i32
        op -(i32, i32) -> i32
    "#});

    assert_eq!(sem.unary_operators.len(), 1);
    assert_eq!(sem.binary_operators.len(), 1);
    assert_eq!(sem.functions[sem.unary_operators[0]].overloads.len(), 1);
}

#[test]
fn constructors_and_converters_share_a_name() {
    let sem = resolve_ok(indoc! {r#"
        type f32
        type i32
        ctor f32() -> f32
        conv f32(i32) -> f32
    "#});

    assert_eq!(sem.constructors_and_converters.len(), 1);

    let function = &sem.functions[sem.constructors_and_converters[0]];
    assert_eq!(function.overloads.len(), 2);
    assert_eq!(function.overloads[0].kind, sem::IntrinsicKind::Constructor);
    assert_eq!(function.overloads[1].kind, sem::IntrinsicKind::Converter);
}

#[test]
fn duplicate_declaration_cites_first_site() {
    assert_eq!(
        error_message("enum e { a }\ntype e"),
        "test.def:2:6 'e' already declared\nFirst declared here: test.def:1:6"
    );
}

#[test]
fn duplicate_enum_entry_across_enums() {
    assert_eq!(
        error_message("enum a { x }\nenum b { x }"),
        "test.def:2:10 'x' already declared\nFirst declared here: test.def:1:10"
    );
}

#[test]
fn duplicate_template_param() {
    assert_eq!(
        error_message("type f32\nfn f<T, T>(f32)"),
        "test.def:2:9 'T' already declared\nFirst declared here: test.def:2:6"
    );
}

#[test]
fn unresolved_reference() {
    assert_eq!(
        error_message("fn f(widget)"),
        "test.def:1:6 cannot resolve 'widget'"
    );
}

#[test]
fn type_as_template_number_is_rejected() {
    let message = error_message(indoc! {r#"
        type A<N: num>
        type B
        fn f(A<B>)
    "#});

    assert_eq!(message, "test.def:3:8 cannot use type 'B' as template number");
}

#[test]
fn compatible_family_substitutions_are_accepted() {
    resolve_ok(indoc! {r#"
        type T<x>
        type P<N: num>
        fn f<M: num>(P<M>)
        fn g<U>(T<U>)
    "#});
}

#[test]
fn enum_entry_as_template_enum_is_accepted() {
    resolve_ok(indoc! {r#"
        enum access { read write }
        type ptr<A: access>
        fn f(ptr<read>)
        fn g<A: access>(ptr<A>)
    "#});
}

#[test]
fn wrong_enum_is_rejected() {
    let message = error_message(indoc! {r#"
        enum access { read write }
        enum storage_class { uniform workgroup }
        type ptr<A: access>
        fn f(ptr<uniform>)
    "#});

    assert_eq!(
        message,
        "test.def:4:10 cannot use enum matcher 'uniform' as template enum"
    );
}

#[test]
fn template_arity_is_checked() {
    assert_eq!(
        error_message("type vec2<T>\nfn f(vec2)"),
        "test.def:2:6 'vec2' requires 1 template arguments, but 0 were provided"
    );
}

#[test]
fn enum_entry_lifts_are_memoized() {
    let sem = resolve_ok(indoc! {r#"
        enum access { read write }
        type ptr<A: access>
        fn f(ptr<read>)
        fn g(ptr<read>)
        fn h(ptr<write>)
    "#});

    // One synthetic matcher per distinct entry.
    assert_eq!(sem.enum_matchers.len(), 2);
}

#[test]
fn return_type_must_be_a_type() {
    assert_eq!(
        error_message("enum e { a }\nfn f() -> e"),
        "test.def:2:11 cannot use 'e' as return type"
    );
}

#[test]
fn unknown_decoration_is_rejected() {
    assert_eq!(
        error_message("@wobble type t"),
        "test.def:1:2 unknown decoration 'wobble'"
    );
}

#[test]
fn overload_decorations_are_drained() {
    let sem = resolve_ok(indoc! {r#"
        type f32
        @stage(compute) @deprecated @must_use @const fn f(f32) -> f32
        @const("custom") fn g(f32) -> f32
    "#});

    let f = &sem.functions[sem.builtins[0]].overloads[0];
    assert!(!f.can_be_used_in_stage.vertex);
    assert!(!f.can_be_used_in_stage.fragment);
    assert!(f.can_be_used_in_stage.compute);
    assert!(f.is_deprecated);
    assert!(f.must_use);
    assert_eq!(f.const_eval_fn.as_deref(), Some("f"));

    let g = &sem.functions[sem.builtins[1]].overloads[0];
    assert!(g.can_be_used_in_stage.vertex);
    assert_eq!(g.const_eval_fn.as_deref(), Some("custom"));
}

#[test]
fn display_decoration_lands_on_the_type() {
    let sem = resolve_ok(r#"@display("vector of {T}") type vec2<T>"#);
    assert_eq!(sem.types.values().next().unwrap().display, "vector of {T}");
}

#[test]
fn invalid_stage_is_rejected() {
    assert_eq!(
        error_message("type f32\n@stage(geometry) fn f(f32)"),
        "test.def:2:2 invalid stage 'geometry'"
    );
}

#[test]
fn max_template_counts_track_the_widest_overload() {
    let sem = resolve_ok(indoc! {r#"
        enum access { read write }
        type f32
        type vec<N: num, T>
        fn f<T, U, N: num, A: access>(vec<N, T>, U) -> f32
        fn g<T>(T)
    "#});

    assert_eq!(sem.max_template_types, 2);
    assert_eq!(sem.max_template_numbers, 2);
}

#[test]
fn resolution_is_deterministic() {
    let source = indoc! {r#"
        enum access { read write }
        type f32
        type i32
        type vec<N: num, T>
        match scalar: f32 | i32
        fn clamp<T: scalar>(T, T, T) -> T
        fn length<N: num, T: scalar>(vec<N, T>) -> f32
        op -(i32) -> i32
    "#};

    let a = resolve_ok(source);
    let b = resolve_ok(source);

    let signatures = |sem: &Sem| -> Vec<String> {
        sem.functions
            .values()
            .flat_map(|function| {
                function
                    .overloads
                    .iter()
                    .map(|overload| sem.overload_signature(function, overload))
            })
            .collect()
    };

    assert_eq!(signatures(&a), signatures(&b));
    assert_eq!(a.types.len(), b.types.len());
    assert_eq!(a.enum_matchers.len(), b.enum_matchers.len());
}
