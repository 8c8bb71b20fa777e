use super::*;

#[test]
fn describe_reports_support_and_standalone() {
    let lines = describe(true, true);
    assert_eq!(lines, vec!["Service Worker: Supported", "Running as: Installed PWA"]);
}

#[test]
fn describe_reports_missing_support_and_browser_tab() {
    let lines = describe(false, false);
    assert_eq!(lines, vec!["Service Worker: Not supported", "Running as: Browser tab"]);
}

#[test]
fn native_probes_report_nothing_supported() {
    assert!(!service_worker_supported());
    assert!(!running_standalone());
    assert_eq!(status_lines(), describe(false, false));
}
