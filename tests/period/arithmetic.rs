use timelib::TimePeriod;

use crate::Result;

fn period(hours: i64, minutes: i8, seconds: i8) -> TimePeriod {
    TimePeriod::new(hours, minutes, seconds).unwrap()
}

#[test]
fn add() {
    assert_eq!(period(13, 59, 55) + period(1, 15, 10), period(15, 15, 5));
    assert_eq!(period(23, 0, 0) + period(23, 0, 0), period(46, 0, 0));
    assert_eq!(period(0, 0, 0) + period(0, 0, 0), TimePeriod::ZERO);
}

#[test]
fn add_checked() -> Result {
    let p = period(1, 0, 0);
    assert_eq!(p.checked_add(p)?, period(2, 0, 0));
    assert!(TimePeriod::MAX.checked_add(p).unwrap_err().is_range());
    assert_eq!(TimePeriod::MAX.saturating_add(p), TimePeriod::MAX);
    Ok(())
}

#[test]
fn subtract() -> Result {
    assert_eq!(period(25, 12, 2) - period(1, 15, 10), period(23, 56, 52));
    let p = period(25, 12, 2);
    assert_eq!(p.checked_sub(p)?, TimePeriod::ZERO);

    let mut p = period(1, 0, 0);
    p -= period(0, 0, 1);
    assert_eq!(p, period(0, 59, 59));
    Ok(())
}

#[test]
fn subtract_underflow() {
    let err = period(1, 15, 10).checked_sub(period(25, 12, 2)).unwrap_err();
    assert!(err.is_underflow());
    assert!(!err.is_range());
    assert!(!err.is_invalid_format());
}

#[test]
#[should_panic]
fn subtract_underflow_panics() {
    let _ = period(0, 0, 0) - period(0, 0, 1);
}
