use timelib::TimePeriod;

use crate::Result;

#[test]
fn ok() -> Result {
    let p: TimePeriod = "1:01:01".parse()?;
    assert_eq!(p, TimePeriod::new(1, 1, 1)?);
    let p: TimePeriod = "01:01:01".parse()?;
    assert_eq!(p, TimePeriod::new(1, 1, 1)?);
    let p: TimePeriod = "2562047788015214:59:59".parse()?;
    assert_eq!(p, TimePeriod::MAX);
    let p: TimePeriod = "1:01:01:anything".parse()?;
    assert_eq!(p, TimePeriod::new(1, 1, 1)?);
    Ok(())
}

#[test]
fn invalid_format() {
    for input in ["", "1", "1:01", "a:01:01", "1:+1:01", "1:01:1.5"] {
        let err = input.parse::<TimePeriod>().unwrap_err();
        assert!(err.is_invalid_format(), "{input:?} gave {err}");
    }
}

#[test]
fn out_of_range() {
    for input in [
        "2562047788015215:00:00",
        "99999999999999999999:00:00",
        "1:60:00",
        "1:00:60",
    ] {
        let err = input.parse::<TimePeriod>().unwrap_err();
        assert!(err.is_range(), "{input:?} gave {err}");
    }
}

#[test]
fn print_then_parse() -> Result {
    for hours in [0, 1, 23, 24, 25, 1_000, 2_562_047_788_015_214] {
        let p = TimePeriod::new(hours, 7, 59)?;
        assert_eq!(p.to_string().parse::<TimePeriod>()?, p);
    }
    Ok(())
}
