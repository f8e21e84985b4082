use build_ast::{ParseError, parse};
use build_token::lex;
use indoc::indoc;
use source_files::SourceFiles;

fn parse_source(source: &str) -> (SourceFiles, Result<ast::File, ParseError>) {
    let mut source_files = SourceFiles::new();
    let key = source_files.add("test.def".into(), source.into());
    let tokens = lex(source, key).expect("lexes");
    let result = parse(tokens);
    (source_files, result)
}

fn parse_ok(source: &str) -> ast::File {
    let (_, result) = parse_source(source);
    result.expect("parses")
}

#[test]
fn round_trip_every_construct() {
    let source = indoc! {r#"
        enum storage_class {
          function
          private
          workgroup
          @internal handle
        }
        type bool
        type f32
        @display("vec{N}<{T}>") type vec<N: num, T>
        match scalar: f32 | bool
        @stage(compute) @deprecated fn clamp<T: scalar>(value: T, low: T, high: T) -> T
        fn nested(array<vec2<f32>>)
        op -<T: scalar>(T) -> T
        op ==(f32, f32) -> bool
        ctor vec2<T>(x: T, y: T) -> vec2<T>
        conv f32(i32) -> f32
    "#};

    let file = parse_ok(source);

    let formatted = file.to_string();
    let reparsed = parse_ok(&formatted);

    assert_eq!(file, reparsed);
}

#[test]
fn attribute_list_form_matches_at_form() {
    let bracketed = parse_ok(r#"[[display("foo"), internal]] type t"#);
    let at_form = parse_ok(r#"@display("foo") @internal type t"#);
    assert_eq!(bracketed, at_form);
}

#[test]
fn declarations_are_grouped_by_kind() {
    let file = parse_ok(indoc! {r#"
        fn f()
        type t
        op !(t) -> t
        enum e { a b }
        ctor t() -> t
        match m: t
        conv t(t) -> t
    "#});

    assert_eq!(file.enums.len(), 1);
    assert_eq!(file.types.len(), 1);
    assert_eq!(file.matchers.len(), 1);
    assert_eq!(file.builtins.len(), 1);
    assert_eq!(file.operators.len(), 1);
    assert_eq!(file.constructors.len(), 1);
    assert_eq!(file.converters.len(), 1);
}

#[test]
fn shift_right_closes_nested_template_lists() {
    let file = parse_ok("fn f(array<vec2<f32>>)");
    let parameter = &file.builtins[0].parameters[0];

    assert_eq!(parameter.ty.name, "array");
    assert_eq!(parameter.ty.template_args[0].name, "vec2");
    assert_eq!(parameter.ty.template_args[0].template_args[0].name, "f32");
}

#[test]
fn unnamed_and_named_parameters() {
    let file = parse_ok("fn f(x: f32, f32)");
    let parameters = &file.builtins[0].parameters;

    assert_eq!(parameters[0].name.as_deref(), Some("x"));
    assert_eq!(parameters[1].name, None);
}

#[test]
fn decorations_rejected_before_enum() {
    let (source_files, result) = parse_source("@internal enum e { a }");
    let error = result.unwrap_err();

    assert_eq!(
        error.message(&source_files),
        "test.def:1:2 decorations are not valid here"
    );
}

#[test]
fn decorations_rejected_before_matcher() {
    let (source_files, result) = parse_source("@display match m: t");
    let error = result.unwrap_err();

    assert_eq!(
        error.message(&source_files),
        "test.def:1:2 decorations are not valid here"
    );
}

#[test]
fn first_syntax_error_aborts() {
    let (source_files, result) = parse_source("fn");
    let error = result.unwrap_err();

    assert_eq!(
        error.message(&source_files),
        "test.def:1:3 expected function name, got end-of-file"
    );
}

#[test]
fn stray_token_is_unexpected() {
    let (source_files, result) = parse_source("fn f() }");
    let error = result.unwrap_err();

    assert_eq!(
        error.message(&source_files),
        "test.def:1:8 unexpected token '}'"
    );
}
