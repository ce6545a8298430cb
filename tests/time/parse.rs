use timelib::{time, Time};

use crate::Result;

#[test]
fn ok() -> Result {
    assert_eq!("13:20:01".parse::<Time>()?, time(13, 20, 1));
    assert_eq!("00:00:00".parse::<Time>()?, Time::MIN);
    assert_eq!("24:00:00".parse::<Time>()?, Time::MAX);
    // Padding is not required when parsing.
    assert_eq!("1:2:3".parse::<Time>()?, time(1, 2, 3));
    // Neither is a lack of it.
    assert_eq!("0001:002:03".parse::<Time>()?, time(1, 2, 3));
    Ok(())
}

#[test]
fn extra_segments_are_ignored() -> Result {
    assert_eq!("13:20:01:99".parse::<Time>()?, time(13, 20, 1));
    assert_eq!("13:20:01:".parse::<Time>()?, time(13, 20, 1));
    assert_eq!("13:20:01:not a number".parse::<Time>()?, time(13, 20, 1));
    Ok(())
}

#[test]
fn too_few_segments() {
    for input in ["", "13", "13:20", "13-20-01", "132001"] {
        let err = input.parse::<Time>().unwrap_err();
        assert!(err.is_invalid_format(), "{input:?} gave {err}");
    }
}

#[test]
fn not_numbers() {
    for input in ["aa:00:00", "00:bb:00", "00:00:cc", "::", " 1:00:00"] {
        let err = input.parse::<Time>().unwrap_err();
        assert!(err.is_invalid_format(), "{input:?} gave {err}");
    }
}

#[test]
fn out_of_range() {
    for input in ["25:00:00", "00:60:00", "00:00:60", "99999:00:00"] {
        let err = input.parse::<Time>().unwrap_err();
        assert!(err.is_range(), "{input:?} gave {err}");
    }
}

#[test]
fn error_message() {
    insta::assert_snapshot!(
        "13:20".parse::<Time>().unwrap_err(),
        @"failed to parse time in HH:MM:SS format: expected at least 3 colon separated segments, but found 2",
    );
}

#[test]
fn print_then_parse() -> Result {
    for total in (0..=86_400).step_by(7) {
        let period = timelib::TimePeriod::from_seconds(total)?;
        let t = Time::MIN.saturating_add(period);
        assert_eq!(t.to_string().parse::<Time>()?, t);
    }
    Ok(())
}
