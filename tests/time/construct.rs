use timelib::{time, Time};

use crate::Result;

#[test]
fn components() -> Result {
    let t = Time::new(13, 20, 1)?;
    assert_eq!(t.hour(), 13);
    assert_eq!(t.minute(), 20);
    assert_eq!(t.second(), 1);
    assert_eq!(t.total_seconds(), 48_001);
    Ok(())
}

#[test]
fn hours_only_and_hours_minutes() -> Result {
    // Leaving out trailing components is spelled with zeroes.
    assert_eq!(Time::new(7, 0, 0)?.to_string(), "07:00:00");
    assert_eq!(Time::new(7, 45, 0)?.to_string(), "07:45:00");
    Ok(())
}

#[test]
fn default_is_midnight() {
    assert_eq!(Time::default(), Time::MIN);
    assert_eq!(Time::default(), Time::midnight());
    assert_eq!(Time::default().to_string(), "00:00:00");
}

#[test]
fn bounds() {
    for hour in 0..=24 {
        assert!(Time::new(hour, 0, 0).is_ok(), "hour {hour} should be ok");
    }
    for minute in 0..=59 {
        assert!(Time::new(0, minute, 0).is_ok());
        assert!(Time::new(0, 0, minute).is_ok());
    }
    for bad in [-128, -1, 60, 127] {
        assert!(Time::new(0, bad, 0).unwrap_err().is_range());
        assert!(Time::new(0, 0, bad).unwrap_err().is_range());
    }
    assert!(Time::new(25, 0, 0).unwrap_err().is_range());
    assert!(Time::new(-1, 0, 0).unwrap_err().is_range());
}

#[test]
fn end_of_day_with_minutes_is_accepted() -> Result {
    let t = Time::new(24, 59, 59)?;
    assert_eq!(t.to_string(), "24:59:59");
    assert!(t > Time::MAX);
    Ok(())
}

#[test]
fn hashing_agrees_with_equality() {
    use std::collections::HashSet;

    let set: HashSet<Time> =
        [time(1, 2, 3), time(1, 2, 3), time(3, 2, 1)].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn sorting() {
    let mut times = vec![
        time(15, 29, 15),
        time(0, 0, 0),
        time(24, 0, 0),
        time(13, 59, 55),
        time(13, 59, 54),
    ];
    times.sort();
    assert_eq!(
        times,
        vec![
            time(0, 0, 0),
            time(13, 59, 54),
            time(13, 59, 55),
            time(15, 29, 15),
            time(24, 0, 0),
        ],
    );
}
