use super::*;

#[test]
fn input_type_matches_field_kind() {
    assert_eq!(input_type(InputKind::Text), "text");
    assert_eq!(input_type(InputKind::Number), "number");
    assert_eq!(input_type(InputKind::Date), "date");
    assert_eq!(input_type(InputKind::Time), "time");
}

#[test]
fn input_class_flags_invalid_inputs() {
    assert_eq!(input_class(false), "form__input");
    assert_eq!(input_class(true), "form__input form__input--invalid");
}
