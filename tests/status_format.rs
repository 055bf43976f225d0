use lazy_progress::format_status;

#[test]
fn percent_only_when_remaining_unset() {
    assert_eq!(format_status(75.0, None), "M117 P 75.00%");
}

#[test]
fn zero_percent_renders_two_decimals() {
    assert_eq!(format_status(0.0, None), "M117 P 0.00%");
}

#[test]
fn sub_minute_remaining_renders_t0_0() {
    assert_eq!(format_status(75.0, Some(30.0)), "M117 P75.00% T0::0");
}

#[test]
fn exactly_zero_remaining_still_gets_suffix() {
    assert_eq!(format_status(100.0, Some(0.0)), "M117 P100.00% T0::0");
}

#[test]
fn remaining_over_an_hour_splits_hours_and_minutes() {
    // 3725 s -> 62 min -> 1 h 2 min
    assert_eq!(format_status(50.0, Some(3725.0)), "M117 P50.00% T1::2");
}

#[test]
fn remaining_just_under_a_minute_floors_to_zero() {
    assert_eq!(format_status(10.0, Some(59.9)), "M117 P10.00% T0::0");
}
