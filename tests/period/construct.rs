use timelib::TimePeriod;

use crate::Result;

#[test]
fn components() -> Result {
    let p = TimePeriod::new(163, 20, 1)?;
    assert_eq!(p.hours(), 163);
    assert_eq!(p.minutes(), 20);
    assert_eq!(p.seconds(), 1);
    assert_eq!(p.total_seconds(), 588_001);
    Ok(())
}

#[test]
fn hours_only_and_hours_minutes() -> Result {
    // Leaving out trailing components is spelled with zeroes.
    assert_eq!(TimePeriod::new(30, 0, 0)?.to_string(), "30:00:00");
    assert_eq!(TimePeriod::new(30, 45, 0)?.total_seconds(), 110_700);
    Ok(())
}

#[test]
fn zero() {
    assert_eq!(TimePeriod::default(), TimePeriod::ZERO);
    assert!(TimePeriod::ZERO.is_zero());
    assert_eq!(TimePeriod::ZERO.to_string(), "0:00:00");
}

#[test]
fn bounds() {
    assert!(TimePeriod::new(-1, 0, 0).unwrap_err().is_range());
    assert!(TimePeriod::new(0, 60, 0).unwrap_err().is_range());
    assert!(TimePeriod::new(0, 0, 60).unwrap_err().is_range());
    assert!(TimePeriod::new(i64::MAX, 0, 0).unwrap_err().is_range());
    assert!(TimePeriod::new(2_562_047_788_015_214, 59, 59).is_ok());
}

#[test]
fn from_seconds() -> Result {
    assert_eq!(TimePeriod::from_seconds(90_722)?, TimePeriod::new(25, 12, 2)?);
    assert_eq!(
        TimePeriod::from_seconds(TimePeriod::MAX.total_seconds())?,
        TimePeriod::MAX,
    );
    assert!(TimePeriod::from_seconds(-5).unwrap_err().is_range());
    Ok(())
}

#[test]
fn display() -> Result {
    assert_eq!(TimePeriod::new(1, 1, 1)?.to_string(), "1:01:01");
    assert_eq!(TimePeriod::new(10, 0, 9)?.to_string(), "10:00:09");
    assert_eq!(TimePeriod::new(100, 59, 59)?.to_string(), "100:59:59");
    Ok(())
}
