#![no_main]

use libfuzzer_sys::fuzz_target;

use timelib::TimePeriod;

fn do_fuzz(data: &[u8]) {
    let Ok(input) = std::str::from_utf8(data) else { return };
    let Ok(first) = input.parse::<TimePeriod>() else { return };
    let printed = first.to_string();

    match printed.parse::<TimePeriod>() {
        Ok(second) => {
            assert_eq!(
                first, second,
                "expected the initially parsed value \
                 to be equal to the value after printing and re-parsing",
            );
        }
        Err(e) if cfg!(not(feature = "relaxed")) => {
            panic!(
                "should be able to parse a printed value; \
                 failed with `{e}` at: `{printed}`, \
                 corresponding to {first:?}",
            );
        }
        Err(_) => {}
    }

    let _ = first.checked_add(first);
    let _ = first.saturating_add(TimePeriod::MAX);
    assert_eq!(first.checked_sub(first).ok(), Some(TimePeriod::ZERO));
}

fuzz_target!(|data: &[u8]| do_fuzz(data));
