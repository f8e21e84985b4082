use build_ast::parse;
use build_sem::resolve;
use build_token::lex;
use indoc::indoc;
use permute::{PermuteError, PermuteErrorKind, Permutation, Permuter};
use sem::Sem;
use source_files::SourceFiles;

const PRELUDE: &str = indoc! {r#"
    enum storage_class { function private workgroup uniform storage }
    enum access { read write read_write }
    type bool
    type f32
    type i32
    type u32
    type sampler
    type vec<N: num, T>
    type array<T>
    type ptr<S: storage_class, T, A: access>
    match iu32: i32 | u32
"#};

fn resolve_with_prelude(decls: &str) -> Sem {
    let source = format!("{}{}", PRELUDE, decls);
    let mut source_files = SourceFiles::new();
    let key = source_files.add("test.def".into(), source.clone());
    let tokens = lex(&source, key).expect("lexes");
    let file = parse(tokens).expect("parses");
    resolve(&file).expect("resolves")
}

fn permute_first(sem: &Sem, name: &str) -> Result<Vec<Permutation>, PermuteError> {
    permute_first_with(sem, name, Permuter::new(sem))
}

fn permute_first_with(
    sem: &Sem,
    name: &str,
    permuter: Permuter,
) -> Result<Vec<Permutation>, PermuteError> {
    let function = sem
        .functions
        .values()
        .find(|function| function.name == name)
        .expect("function exists");

    permuter.permute(function, &function.overloads[0])
}

#[test]
fn unconstrained_type_ranges_over_all_plain_types() {
    let sem = resolve_with_prelude("fn f<T>(T) -> T");
    let permutations = permute_first(&sem, "f").unwrap();

    // bool, f32, i32, u32, sampler; vec/array/ptr take template
    // parameters and are not in the catalog.
    assert_eq!(permutations.len(), 5);

    let descs: Vec<&str> = permutations
        .iter()
        .map(|permutation| permutation.desc.as_str())
        .collect();
    assert!(descs.contains(&"fn f(f32) -> f32"));
    assert!(descs.contains(&"fn f(sampler) -> sampler"));
}

#[test]
fn matcher_constrained_type_ranges_over_its_options() {
    let sem = resolve_with_prelude("fn g<T: iu32>(T) -> T");
    let permutations = permute_first(&sem, "g").unwrap();

    assert_eq!(permutations.len(), 2);
    assert_eq!(permutations[0].desc, "fn g(i32) -> i32");
    assert_eq!(permutations[1].desc, "fn g(u32) -> u32");
}

#[test]
fn open_numbers_bind_two_three_four() {
    let sem = resolve_with_prelude("fn h<N: num>(vec<N, f32>)");
    let permutations = permute_first(&sem, "h").unwrap();

    let descs: Vec<&str> = permutations
        .iter()
        .map(|permutation| permutation.desc.as_str())
        .collect();
    assert_eq!(
        descs,
        vec![
            "fn h(vec<2, f32>)",
            "fn h(vec<3, f32>)",
            "fn h(vec<4, f32>)",
        ]
    );
}

#[test]
fn permutation_count_is_the_product_of_dimensions() {
    let sem = resolve_with_prelude("fn wide<T: iu32, N: num>(vec<N, T>)");
    let permutations = permute_first(&sem, "wide").unwrap();
    assert_eq!(permutations.len(), 2 * 3);
}

#[test]
fn arrays_of_unstorable_elements_are_filtered() {
    let sem = resolve_with_prelude("fn a<T>(array<T>)");
    let permutations = permute_first(&sem, "a").unwrap();

    // bool and sampler elements are not storable.
    assert_eq!(permutations.len(), 3);
    assert!(
        permutations
            .iter()
            .all(|permutation| !permutation.desc.contains("bool"))
    );
}

#[test]
fn pointer_storage_class_access_rules() {
    let sem = resolve_with_prelude("fn p<S: storage_class, A: access>(ptr<S, f32, A>)");
    let permutations = permute_first(&sem, "p").unwrap();

    let descs: Vec<&str> = permutations
        .iter()
        .map(|permutation| permutation.desc.as_str())
        .collect();

    assert_eq!(
        descs,
        vec![
            "fn p(ptr<function, f32, read_write>)",
            "fn p(ptr<private, f32, read_write>)",
            "fn p(ptr<workgroup, f32, read_write>)",
            "fn p(ptr<uniform, f32, read>)",
            "fn p(ptr<storage, f32, read>)",
            "fn p(ptr<storage, f32, read_write>)",
        ]
    );
}

#[test]
fn workgroup_pointers_disable_vertex_and_fragment() {
    let sem = resolve_with_prelude("fn p<S: storage_class, A: access>(ptr<S, f32, A>)");
    let permutations = permute_first(&sem, "p").unwrap();

    let workgroup = permutations
        .iter()
        .find(|permutation| permutation.desc.contains("workgroup"))
        .unwrap();
    assert!(!workgroup.can_be_used_in_stage.vertex);
    assert!(!workgroup.can_be_used_in_stage.fragment);
    assert!(workgroup.can_be_used_in_stage.compute);

    let private = permutations
        .iter()
        .find(|permutation| permutation.desc.contains("private"))
        .unwrap();
    assert!(private.can_be_used_in_stage.vertex);
}

#[test]
fn open_enum_ranges_over_matcher_options() {
    let sem = resolve_with_prelude(indoc! {r#"
        match readable: read | read_write
        fn e<S: storage_class, A: readable>(ptr<S, f32, A>)
    "#});

    let permutations = permute_first(&sem, "e").unwrap();

    // The readable matcher drops `write`; the ptr validator then keeps
    // the same six class/access combinations as the unconstrained case.
    assert_eq!(permutations.len(), 6);
}

#[test]
fn underscored_types_are_not_permuted() {
    let sem = resolve_with_prelude(indoc! {r#"
        type _hidden
        fn u<T>(T)
    "#});

    let permutations = permute_first(&sem, "u").unwrap();

    // _hidden joins the catalog but every permutation using it is
    // rejected by the validator.
    assert_eq!(permutations.len(), 5);
    assert!(
        permutations
            .iter()
            .all(|permutation| !permutation.desc.contains("_hidden"))
    );
}

#[test]
fn dimension_with_no_bindings_is_fatal() {
    let source = "type arr<T>\nfn f<T>(T)";
    let mut source_files = SourceFiles::new();
    let key = source_files.add("test.def".into(), source.into());
    let tokens = lex(source, key).expect("lexes");
    let file = parse(tokens).expect("parses");
    let sem = resolve(&file).expect("resolves");

    let error = permute_first(&sem, "f").unwrap_err();
    assert!(matches!(
        error.kind,
        PermuteErrorKind::NoBindings { ref param } if param == "T"
    ));
}

#[test]
fn unused_open_dimension_is_a_duplicate() {
    let sem = resolve_with_prelude("fn d<T>(f32)");
    let error = permute_first(&sem, "d").unwrap_err();

    assert!(matches!(
        error.kind,
        PermuteErrorKind::DuplicatePermutation { ref desc } if desc == "fn d(f32)"
    ));
}

#[test]
fn short_hashes_collide_when_truncated_too_far() {
    let sem = resolve_with_prelude("fn c<T, U>(T, U)");

    // 25 distinct descriptions into 16 single-hex-digit buckets must
    // collide, and the error names both offenders.
    let error = permute_first_with(&sem, "c", Permuter::with_hash_length(&sem, 1)).unwrap_err();

    match error.kind {
        PermuteErrorKind::HashCollision { first, second, .. } => {
            assert_ne!(first, second);
        }
        kind => panic!("expected a hash collision, got {:?}", kind),
    }

    // The default hash length keeps all 25 apart.
    let permutations = permute_first(&sem, "c").unwrap();
    assert_eq!(permutations.len(), 25);
}

#[test]
fn hashes_are_stable_and_distinct() {
    let sem = resolve_with_prelude("fn g<T: iu32>(T) -> T");

    let first = permute_first(&sem, "g").unwrap();
    let second = permute_first(&sem, "g").unwrap();

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.hash, b.hash);
        assert_eq!(a.hash.len(), Permuter::DEFAULT_HASH_LENGTH);
    }

    assert_ne!(first[0].hash, first[1].hash);
}
