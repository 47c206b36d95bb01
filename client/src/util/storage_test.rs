#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::filter::FilterQuery;

#[test]
fn filter_key_lowercases_noun() {
    assert_eq!(filter_key("Patient"), "hms_filter_patient");
    assert_eq!(filter_key("Appointment"), "hms_filter_appointment");
}

#[test]
fn load_json_is_none_outside_browser() {
    save_json("hms_filter_patient", &FilterQuery::default());
    assert_eq!(load_json::<FilterQuery>("hms_filter_patient"), None);
}

#[test]
fn read_dark_mode_is_false_in_non_hydrate_tests() {
    assert!(!read_dark_mode());
}

#[test]
fn toggle_dark_mode_flips_boolean_value() {
    assert!(toggle_dark_mode(false));
    assert!(!toggle_dark_mode(true));
}
