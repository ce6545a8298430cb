use timelib::{time, Time, TimePeriod};

use crate::Result;

#[test]
fn add_times() {
    let t1 = time(13, 59, 55);
    let t2 = time(1, 15, 10);
    assert_eq!(t1 + t2, time(15, 15, 5));
    assert_eq!(t2 + t1, time(15, 15, 5));
}

#[test]
fn add_carries() {
    assert_eq!(time(0, 0, 59) + time(0, 0, 1), time(0, 1, 0));
    assert_eq!(time(0, 59, 59) + time(0, 0, 1), time(1, 0, 0));
    assert_eq!(time(11, 59, 59) + time(11, 59, 59), time(23, 59, 58));
}

#[test]
fn add_saturates() -> Result {
    assert_eq!(time(23, 59, 59) + time(0, 0, 1), Time::MAX);
    assert_eq!(time(23, 59, 59) + time(23, 59, 59), Time::MAX);
    assert_eq!(Time::MAX + time(0, 0, 1), Time::MAX);
    assert_eq!(time(12, 0, 0) + TimePeriod::new(12, 0, 1)?, Time::MAX);
    assert_eq!(time(12, 0, 0) + TimePeriod::MAX, Time::MAX);
    Ok(())
}

#[test]
fn add_period() -> Result {
    let t = time(13, 59, 55);
    let p = TimePeriod::new(1, 15, 10)?;
    assert_eq!(t + p, time(15, 15, 5));

    let mut t = time(8, 0, 0);
    t += p;
    t += time(0, 0, 50);
    assert_eq!(t, time(9, 16, 0));
    Ok(())
}

#[test]
fn subtract_times() -> Result {
    let t1 = time(13, 12, 2);
    let t2 = time(1, 15, 10);
    assert_eq!(t1.checked_sub(t2)?, time(11, 56, 52));
    assert_eq!(t1 - t2, time(11, 56, 52));
    assert_eq!(t1 - t1, Time::MIN);
    Ok(())
}

#[test]
fn subtract_period() -> Result {
    let t = time(13, 10, 5);
    let p = TimePeriod::new(10, 15, 10)?;
    assert_eq!(t - p, time(2, 54, 55));

    let mut t = time(13, 10, 5);
    t -= p;
    assert_eq!(t, time(2, 54, 55));
    Ok(())
}

#[test]
fn subtract_underflow() -> Result {
    let t1 = time(1, 15, 10);
    let t2 = time(13, 12, 2);
    assert!(t1.checked_sub(t2).unwrap_err().is_underflow());

    let p = TimePeriod::new(25, 0, 0)?;
    assert!(Time::MAX.checked_sub(p).unwrap_err().is_underflow());
    assert!(Time::MIN.checked_sub(time(0, 0, 1)).unwrap_err().is_underflow());
    Ok(())
}

#[test]
#[should_panic]
fn subtract_underflow_panics() {
    let _ = time(1, 15, 10) - time(13, 12, 2);
}

#[test]
fn subtraction_never_saturates_at_zero() {
    let result = time(0, 0, 0).checked_sub(time(0, 0, 1));
    assert!(result.is_err());
}

#[test]
fn operands_are_unchanged() -> Result {
    let t1 = time(10, 0, 0);
    let t2 = time(3, 0, 0);
    let _ = t1 + t2;
    let _ = t1.checked_sub(t2)?;
    assert_eq!(t1, time(10, 0, 0));
    assert_eq!(t2, time(3, 0, 0));
    Ok(())
}
