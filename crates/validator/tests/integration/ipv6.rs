use albumkit_validator::prelude::*;
use rstest::rstest;

#[rstest]
#[case("2001:0db8:85a3:0000:0000:8a2e:0370:7334")]
#[case("2001:db8:85a3::8a2e:370:7334")]
#[case("::")]
#[case("::1")]
#[case("fe80::")]
#[case("FE80::ABCD")]
#[case("1::8")]
fn accepts(#[case] input: &str) {
    assert!(is_valid_ipv6(input), "{input}");
}

#[rstest]
#[case("2001:db8::85a3::8a2e:370:7334")]
#[case("This is not an IPv6 address")]
#[case(":")]
#[case(":::")]
#[case("")]
#[case("2001:db8:85a3:0:0:8a2e:370")]
#[case("2001:db8:85a3:00000:0:8a2e:370:7334")]
#[case("::ffff:10.0.0.1")]
fn rejects(#[case] input: &str) {
    assert!(!is_valid_ipv6(input), "{input}");
}

#[test]
fn validator_exposes_reason() {
    let err = Ipv6::new().validate("1:2:3:4:5:6:7").unwrap_err();
    assert_eq!(err.code, "group_count");
    assert_eq!(err.param("actual"), Some("7"));
}
