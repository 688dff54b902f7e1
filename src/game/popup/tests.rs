use super::*;

#[test]
fn ends_after_duration() {
    let mut popup = Popup::new(Verdict::Correct, Duration::from_millis(2000));
    assert!(!popup.is_over());
    popup.on_tick(Duration::from_millis(1000));
    assert!(!popup.is_over());
    popup.on_tick(Duration::from_millis(999));
    assert!(!popup.is_over());
    popup.on_tick(Duration::from_millis(1));
    assert!(popup.is_over());
}

#[test]
fn remembers_verdict() {
    let popup = Popup::new(Verdict::Penalty, Duration::from_secs(2));
    assert_eq!(popup.get_verdict(), Verdict::Penalty);
}
