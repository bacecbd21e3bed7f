use time::macros::{date, datetime};
use time::UtcOffset;
use zoneserial::{Error, SoaSerial, MAX_SEQUENCE_NUMBER};

/// Conforming serials, including a leap day.
const SOME_SERIALS: [&str; 6] = [
    "2017061134",
    "2017061100",
    "2017061199",
    "2017061034",
    "2017061234",
    "2016022934",
];

/// Strings that must never parse: wrong length, non-digits, impossible month,
/// impossible day, Feb 29 outside a leap year, multi-byte content.
const NOT_SERIALS: [&str; 10] = [
    "",
    "427423825",
    "20170611345",
    "fs5252mj2",
    "2017o61134",
    "2017-06-11",
    "2017131134",
    "2017063234",
    "2017022934",
    "12345678é",
];

#[test]
fn test_parses_the_documented_examples() {
    for serial in SOME_SERIALS {
        let parsed = SoaSerial::parse(serial).unwrap();
        assert_eq!(parsed.serial(), serial);
        assert_eq!(parsed.serial_start(), &serial[..8]);
        assert!(parsed.sequence_number() <= MAX_SEQUENCE_NUMBER);
    }
}

#[test]
fn test_is_serial_is_total() {
    for serial in SOME_SERIALS {
        assert!(SoaSerial::is_serial(serial), "expected a serial: {serial}");
    }
    for candidate in NOT_SERIALS {
        assert!(
            !SoaSerial::is_serial(candidate),
            "expected not a serial: {candidate}"
        );
    }
}

#[test]
fn test_parse_rejects_non_serials_with_the_offending_string() {
    let err = SoaSerial::parse("2017131134").unwrap_err();
    match err {
        Error::NotASerial(s) => assert_eq!(s, "2017131134"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_constructs_from_an_instant_and_sequence_number() {
    let at = datetime!(2017-06-11 16:19:23 UTC);
    for sequence in [0, 50, 99] {
        let serial = SoaSerial::new(at, sequence).unwrap();
        assert_eq!(serial.serial_start(), "20170611");
        assert_eq!(serial.sequence_number(), sequence);
        assert_eq!(serial.serial(), format!("20170611{sequence:02}"));
    }
}

#[test]
fn test_normalizes_offsets_to_the_utc_calendar_date() {
    // 01:19 at +02:00 is still the previous UTC day.
    let early = SoaSerial::new(datetime!(2017-06-11 01:19:23 +02:00), 0).unwrap();
    assert_eq!(early.serial_start(), "20170610");

    // 22:19 at -06:00 is already the next UTC day.
    let late = SoaSerial::new(datetime!(2017-06-11 22:19:23 -06:00), 0).unwrap();
    assert_eq!(late.serial_start(), "20170612");

    // An offset that doesn't cross midnight changes nothing.
    let same = SoaSerial::new(datetime!(2017-06-11 16:19:23 +02:00), 0).unwrap();
    assert_eq!(same.serial_start(), "20170611");
}

#[test]
fn test_rejects_sequence_numbers_above_the_maximum() {
    let at = datetime!(2017-06-11 16:19:23 UTC);
    assert!(matches!(
        SoaSerial::new(at, 100),
        Err(Error::SequenceOutOfRange(100))
    ));
    assert!(matches!(
        SoaSerial::from_date(date!(2017 - 06 - 11), 255),
        Err(Error::SequenceOutOfRange(255))
    ));
}

#[test]
fn test_next_increments_within_the_same_day() {
    let serial = SoaSerial::parse("2017061134").unwrap();
    let next = serial.next(datetime!(2017-06-11 16:19:23 UTC)).unwrap();
    assert_eq!(next.serial(), "2017061135");
}

#[test]
fn test_next_resets_the_sequence_on_a_later_day() {
    let serial = SoaSerial::parse("2017061134").unwrap();
    let next = serial.next(datetime!(2017-06-12 00:00:01 UTC)).unwrap();
    assert_eq!(next.serial(), "2017061200");
}

#[test]
fn test_next_keeps_its_own_date_when_the_clock_is_behind() {
    // A skewed clock must not move the serial backward: the receiver's date
    // wins and the sequence still increments.
    let serial = SoaSerial::parse("2017061134").unwrap();
    let next = serial.next(datetime!(2017-06-10 23:59:59 UTC)).unwrap();
    assert_eq!(next.serial(), "2017061135");
}

#[test]
fn test_next_fails_when_the_day_is_exhausted() {
    let serial = SoaSerial::from_date(date!(2017 - 06 - 11), 99).unwrap();

    let same_day = serial.next(datetime!(2017-06-11 16:19:23 UTC));
    assert!(matches!(same_day, Err(Error::SequenceExhausted(date)) if date == date!(2017 - 06 - 11)));

    // A behind clock hits the same wall; it must not wrap into tomorrow.
    let behind = serial.next(datetime!(2017-06-10 16:19:23 UTC));
    assert!(matches!(behind, Err(Error::SequenceExhausted(_))));
}

#[test]
fn test_next_rolls_over_an_exhausted_day_only_via_the_calendar() {
    let serial = SoaSerial::from_date(date!(2017 - 06 - 11), 99).unwrap();
    let next = serial.next(datetime!(2017-06-12 00:00:01 UTC)).unwrap();
    assert_eq!(next.serial(), "2017061200");
}

#[test]
fn test_next_never_goes_backward() {
    let moments = [
        datetime!(2017-06-11 16:19:23 UTC),
        datetime!(2017-06-11 16:19:23 +02:00),
        datetime!(2017-06-11 16:19:23 -06:00),
        datetime!(2017-06-11 01:19:23 +02:00),
        datetime!(2017-06-11 22:19:23 -06:00),
    ];
    for serial in SOME_SERIALS {
        let subject = SoaSerial::parse(serial).unwrap();
        for at in moments {
            let today = at.to_offset(UtcOffset::UTC).date();
            match subject.next(at) {
                Ok(next) => {
                    assert!(next > subject, "{next} does not supersede {subject}");
                    assert!(next.date() >= subject.date());
                    if next.date() == subject.date() {
                        assert_eq!(next.sequence_number(), subject.sequence_number() + 1);
                    } else {
                        assert_eq!(next.date(), today);
                        assert_eq!(next.sequence_number(), 0);
                    }
                }
                Err(err) => {
                    assert!(matches!(err, Error::SequenceExhausted(_)));
                    assert_eq!(subject.sequence_number(), MAX_SEQUENCE_NUMBER);
                    assert!(today <= subject.date());
                }
            }
        }
    }
}

#[test]
fn test_orders_by_date_then_sequence() {
    let mut parsed: Vec<SoaSerial> = SOME_SERIALS
        .iter()
        .map(|s| SoaSerial::parse(s).unwrap())
        .collect();
    parsed.sort();
    let rendered: Vec<String> = parsed.iter().map(SoaSerial::serial).collect();

    let mut sorted_strings: Vec<&str> = SOME_SERIALS.to_vec();
    sorted_strings.sort_unstable();
    assert_eq!(rendered, sorted_strings);
}

#[test]
fn test_round_trips_through_display_and_from_str() {
    for serial in SOME_SERIALS {
        let parsed: SoaSerial = serial.parse().unwrap();
        assert_eq!(parsed.to_string(), serial);
    }
}

#[test]
fn test_format_parse_round_trip_preserves_date_and_sequence() {
    let original = SoaSerial::from_date(date!(2016 - 02 - 29), 34).unwrap();
    assert_eq!(original.serial(), "2016022934");

    let reparsed = SoaSerial::parse(&original.serial()).unwrap();
    assert_eq!(reparsed.date(), original.date());
    assert_eq!(reparsed.sequence_number(), original.sequence_number());
}

#[test]
fn test_serials_are_always_ten_digits() {
    // Early years zero-pad, so the invariant holds across the calendar.
    let ancient = SoaSerial::from_date(date!(0999 - 06 - 11), 7).unwrap();
    assert_eq!(ancient.serial(), "0999061107");
    assert!(SoaSerial::is_serial(&ancient.serial()));
}
