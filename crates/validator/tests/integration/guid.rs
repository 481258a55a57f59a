use albumkit_validator::prelude::*;
use rstest::rstest;

#[rstest]
#[case("123e4567-e89b-12d3-a456-426614174000")]
#[case("123E4567-E89B-12D3-A456-426614174000")]
#[case("{123e4567-e89b-12d3-a456-426614174000}")]
#[case("(123e4567-e89b-42d3-b456-426614174000)")]
#[case("550e8400-e29b-41d4-a716-446655440000")]
fn accepts(#[case] input: &str) {
    assert!(is_valid_guid(input), "{input}");
}

#[rstest]
#[case::version_zero("123e4567-e89b-02d3-a456-426614174000")]
#[case::version_six("123e4567-e89b-62d3-a456-426614174000")]
#[case::variant_c("123e4567-e89b-12d3-c456-426614174000")]
#[case::trailing_z("123e4567-e89b-12d3-a456-42661417400Z")]
#[case::not_a_guid("This is not a GUID")]
#[case::no_hyphens("123e456712d3a456426614174000e89b")]
#[case::nil("00000000-0000-0000-0000-000000000000")]
fn rejects(#[case] input: &str) {
    assert!(!is_valid_guid(input), "{input}");
}

#[test]
fn mismatched_brackets_depend_on_mode() {
    let input = "{123e4567-e89b-12d3-a456-426614174000)";
    assert!(is_valid_guid(input));
    assert!(Guid::new().brackets(BracketMode::Lenient).is_valid(input));
    assert!(!Guid::new().brackets(BracketMode::Paired).is_valid(input));
}
