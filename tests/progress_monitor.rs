use lazy_progress::{PrintProgressData, ProgressMonitor};

#[test]
fn update_overwrites_all_fields() {
    let mut monitor = ProgressMonitor::new();
    monitor.update(&PrintProgressData {
        completion: Some(42.5),
        print_time: Some(90.0),
        print_time_left: Some(30.0),
    });
    let snapshot = monitor.snapshot();
    assert_eq!(snapshot.completion, Some(42.5));
    assert_eq!(snapshot.elapsed_s, Some(90.0));
    assert_eq!(snapshot.remaining_s, Some(30.0));
}

#[test]
fn absent_fields_overwrite_with_unset() {
    let mut monitor = ProgressMonitor::new();
    monitor.update(&PrintProgressData {
        completion: Some(50.0),
        print_time: Some(100.0),
        print_time_left: Some(100.0),
    });
    // Next broadcast knows only the completion value
    monitor.update(&PrintProgressData {
        completion: Some(55.0),
        print_time: None,
        print_time_left: None,
    });
    let snapshot = monitor.snapshot();
    assert_eq!(snapshot.completion, Some(55.0));
    assert_eq!(snapshot.elapsed_s, None);
    assert_eq!(snapshot.remaining_s, None);
}

#[test]
fn reset_clears_to_unset() {
    let mut monitor = ProgressMonitor::new();
    monitor.update(&PrintProgressData {
        completion: Some(99.9),
        print_time: Some(1.0),
        print_time_left: Some(2.0),
    });
    monitor.reset();
    let snapshot = monitor.snapshot();
    assert_eq!(snapshot.completion, None);
    assert_eq!(snapshot.elapsed_s, None);
    assert_eq!(snapshot.remaining_s, None);
}
