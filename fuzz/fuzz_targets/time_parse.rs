#![no_main]

use libfuzzer_sys::fuzz_target;

use timelib::Time;

fn do_fuzz(data: &[u8]) {
    let Ok(input) = std::str::from_utf8(data) else { return };
    let Ok(first) = input.parse::<Time>() else { return };
    let printed = first.to_string();

    match printed.parse::<Time>() {
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

    // Arithmetic with anything that parsed should never panic through the
    // checked and saturating APIs.
    let _ = first.saturating_add(first);
    let _ = first.checked_sub(first);
}

fuzz_target!(|data: &[u8]| do_fuzz(data));
