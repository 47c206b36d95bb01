use super::*;

#[test]
fn completion_label_appends_percent_sign() {
    assert_eq!(completion_label(77), "77%");
    assert_eq!(completion_label(0), "0%");
}

#[test]
fn mock_snapshot_completion_label() {
    let stats = DashboardSnapshot::mock().stats;
    assert_eq!(completion_label(stats.completion_rate_percent()), "77%");
}
