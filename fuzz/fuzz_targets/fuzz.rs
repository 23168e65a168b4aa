#![no_main]
use imperial_date::{CivilDateTime, ErrorKind, ImperialDate};
use libfuzzer_sys::fuzz_target;

#[inline(never)]
fn test_ticks(ticks: i64) {
    match ImperialDate::from_ticks(ticks) {
        Ok(date) => {
            assert_eq!(date.ticks(), ticks);
            assert!(date.year() > 1 && date.year_fraction() > 1);
            let bytes = bincode::serialize(&date).unwrap();
            assert_eq!(bincode::deserialize::<ImperialDate>(&bytes).unwrap(), date);
            let _ = date.format(Some("S")).unwrap();
        }
        Err(e) => assert_eq!(e.kind(), ErrorKind::InvalidArgument),
    }
}

#[inline(never)]
fn test_raw(check: i64, year_fraction: i64, year: i64, millennium: i64) {
    let Ok(date) = ImperialDate::from_raw(check, year_fraction, year, millennium) else {
        return;
    };
    // Anything direct construction accepts orders the same way its ticks do.
    assert!(ImperialDate::MIN <= date);
    let decoded = ImperialDate::from_ticks(date.ticks());
    if year > 1 && year_fraction > 1 {
        assert_eq!(decoded.unwrap(), date);
    } else {
        assert!(decoded.is_err());
    }
}

#[inline(never)]
fn test_civil(year: i32, ordinal: u16, hour: u8, minute: u8, second: u8) {
    let Ok(civil) = CivilDateTime::from_ordinal(year, ordinal, hour, minute, second) else {
        return;
    };
    let Some(next_year) = year.checked_add(1) else {
        return;
    };
    let date = ImperialDate::from_civil(civil);
    let later = ImperialDate::from_civil(
        CivilDateTime::from_ordinal(next_year, 1, hour, minute, second).unwrap(),
    );
    assert!(date <= later);
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, data)) = data.split_first() else {
        return;
    };
    let word = |i: usize| {
        let mut bytes = [0u8; 8];
        if let Some(chunk) = data.get(i * 8..(i + 1) * 8) {
            bytes.copy_from_slice(chunk);
        }
        i64::from_le_bytes(bytes)
    };

    match selector % 3 {
        0 => test_ticks(word(0)),
        1 => test_raw(word(0), word(1), word(2), word(3)),
        _ => {
            let w = word(0);
            test_civil(
                word(1) as i32,
                (w & 0x1ff) as u16,
                (w >> 9) as u8 % 24,
                (w >> 17) as u8 % 60,
                (w >> 25) as u8 % 60,
            )
        }
    }
});
