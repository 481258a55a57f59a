use albumkit_validator::prelude::*;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn converts_valid_input() {
    let record = validate_and_convert_composite_record("2023/10/01,Test Name").unwrap();
    assert_eq!(record.date(), NaiveDate::from_ymd_opt(2023, 10, 1).unwrap());
    assert_eq!(record.name(), "Test Name");
}

#[rstest]
#[case::wrong_separator("2023-10-01,Test Name", RecordError::InvalidDateFormat)]
#[case::empty_name("2023/10/01,", RecordError::InvalidNameEmpty)]
#[case::blank_name("2023/10/01,   ", RecordError::InvalidNameEmpty)]
#[case::one_segment("2023/10/01", RecordError::InvalidInputFormat)]
#[case::three_segments("2023/10/01,Test,Name", RecordError::InvalidInputFormat)]
#[case::impossible_day("2023/02/30,X", RecordError::InvalidDateValue)]
#[case::month_thirteen("2023/13/01,X", RecordError::InvalidDateValue)]
#[case::not_leap_year("2023/02/29,X", RecordError::InvalidDateValue)]
#[case::short_year("123/10/01,X", RecordError::InvalidDateFormat)]
#[case::padded_date(" 2023/10/01,X", RecordError::InvalidDateFormat)]
fn rejects_with_specific_kind(#[case] input: &str, #[case] expected: RecordError) {
    assert_eq!(validate_and_convert_composite_record(input), Err(expected));
}

#[rstest]
#[case(RecordError::InvalidInputFormat, "Invalid input format. Expected \"date,name\".")]
#[case(RecordError::InvalidDateFormat, "Invalid date format. Expected \"YYYY/MM/DD\".")]
#[case(RecordError::InvalidDateValue, "Invalid date value.")]
#[case(RecordError::InvalidNameEmpty, "Invalid name. Name cannot be empty.")]
fn error_messages(#[case] error: RecordError, #[case] message: &str) {
    assert_eq!(error.to_string(), message);
}

#[test]
fn leap_day_accepted() {
    let record: CompositeRecord = "2024/02/29,Leap".parse().unwrap();
    assert_eq!(record.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
}

#[test]
fn serialized_form_revalidates_to_equal_record() {
    let original = validate_and_convert_composite_record("1969/09/26,\tAbbey Road  ").unwrap();
    let again = validate_and_convert_composite_record(&original.to_string()).unwrap();
    assert_eq!(again, original);
}

#[test]
fn validator_trait_reports_code() {
    let v = RecordValidator::new();
    let err = v.validate("2023/10/01").unwrap_err();
    assert_eq!(err.code, "invalid_input_format");
    assert!(v.is_valid("2023/10/01,ok"));
}

#[test]
fn into_parts() {
    let (date, name) = validate_and_convert_composite_record("2001/01/01,Odyssey")
        .unwrap()
        .into_parts();
    assert_eq!(date, NaiveDate::from_ymd_opt(2001, 1, 1).unwrap());
    assert_eq!(name, "Odyssey");
}
