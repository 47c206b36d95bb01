use super::*;
use time::macros::date;

#[test]
fn parse_iso_date_accepts_input_date_format() {
    assert_eq!(parse_iso_date("2025-10-20"), Some(date!(2025 - 10 - 20)));
    assert_eq!(parse_iso_date(" 2025-01-02 "), Some(date!(2025 - 01 - 02)));
}

#[test]
fn parse_iso_date_rejects_other_shapes() {
    assert_eq!(parse_iso_date(""), None);
    assert_eq!(parse_iso_date("20/10/2025"), None);
    assert_eq!(parse_iso_date("2025-02-30"), None);
}

#[test]
fn format_iso_date_pads_month_and_day() {
    assert_eq!(format_iso_date(date!(2025 - 03 - 07)), "2025-03-07");
}

#[test]
fn today_is_a_real_calendar_day() {
    let day = today();
    assert_eq!(parse_iso_date(&format_iso_date(day)), Some(day));
}
