//! Tests for the direct scanner: agreement with the full parse-then-query
//! path, delimiter independence, and scan failures.

mod common;

use common::{MINIMAL, MINIMAL_ALT_DELIMS, SAMPLE_ORU, assert_both_resolve};
use hl7_toolchain_core::{Address, Hl7Error, parse_str, scan, scan_str};

#[test]
fn scan_extracts_without_a_tree() {
    assert_eq!(scan_str(MINIMAL, "OBR.7").unwrap(), "20200101");
    assert_eq!(scan_str(MINIMAL, "/.OBR-7").unwrap(), "20200101");
}

#[test]
fn scan_agrees_with_tree_path_across_addresses() {
    let addresses = [
        "MSH.1",
        "MSH.2",
        "MSH.3",
        "MSH.7",
        "MSH.9",
        "MSH.9.2",
        "MSH.12",
        "PID.3",
        "PID.5",
        "PID.5.2",
        "PID.5.9",
        "PID.8",
        "OBR.1",
        "OBR.4.2",
        "OBR.5",
        "OBR.7",
        "OBR.16.3",
        "OBX.2",
        "OBX.3.3",
        "OBX.5",
        "OBX.5.2",
        "OBX.11",
        "/.OBX-5-2",
        "/.PID-5-2",
    ];
    let message = parse_str(SAMPLE_ORU).unwrap();
    for address in addresses {
        assert_eq!(
            scan_str(SAMPLE_ORU, address).unwrap(),
            message.query_str(address).unwrap(),
            "paths disagree for {address}"
        );
    }
}

#[test]
fn scan_handles_repetitions_and_occurrences() {
    let input = "MSH|^~\\&|A\rOBX|1|ST|X||first~alt\rOBX|2|ST|Y||second";
    assert_both_resolve(input, "OBX.5", "first");
    assert_both_resolve(input, "OBX.5(2)", "alt");
    assert_both_resolve(input, "OBX(2).5", "second");
}

#[test]
fn scan_decodes_escapes() {
    let input = "MSH|^~\\&|APP\rOBX|1|ST|NOTE||a\\F\\b";
    assert_both_resolve(input, "OBX.5", "a|b");
}

#[test]
fn scan_preserves_empty_fields() {
    assert_both_resolve(MINIMAL, "OBR.5", "");
    assert_both_resolve(MINIMAL, "OBR.6", "");
}

#[test]
fn substituted_delimiters_resolve_the_same_values() {
    // Same message, every delimiter replaced. MSH-1/MSH-2 are excluded:
    // they hold the delimiters themselves.
    for address in ["MSH.3", "MSH.7", "MSH.9", "MSH.9.2", "OBR.1", "OBR.4", "OBR.7"] {
        assert_eq!(
            scan_str(MINIMAL, address).unwrap(),
            scan_str(MINIMAL_ALT_DELIMS, address).unwrap(),
            "delimiter substitution changed {address}"
        );
        assert_eq!(
            parse_str(MINIMAL).unwrap().query_str(address).unwrap(),
            parse_str(MINIMAL_ALT_DELIMS)
                .unwrap()
                .query_str(address)
                .unwrap(),
            "delimiter substitution changed {address} via tree"
        );
    }
}

#[test]
fn scan_missing_segment_is_an_error() {
    assert!(matches!(
        scan_str(SAMPLE_ORU, "ZZZ.1"),
        Err(Hl7Error::SegmentNotFound { name, .. }) if name == "ZZZ"
    ));
    assert!(matches!(
        scan_str(SAMPLE_ORU, "OBR(2).1"),
        Err(Hl7Error::SegmentNotFound { occurrence: 2, .. })
    ));
}

#[test]
fn scan_field_past_segment_end_is_an_error() {
    assert!(matches!(
        scan_str(SAMPLE_ORU, "PID.99"),
        Err(Hl7Error::FieldIndexOutOfRange { index: 99, .. })
    ));
    // The tree path reports the same failure.
    let message = parse_str(SAMPLE_ORU).unwrap();
    assert!(matches!(
        message.query_str("PID.99"),
        Err(Hl7Error::FieldIndexOutOfRange { index: 99, .. })
    ));
}

#[test]
fn scan_bad_header_is_unknown_delimiters() {
    assert!(matches!(
        scan_str("", "OBR.7"),
        Err(Hl7Error::UnknownDelimiters(_))
    ));
    assert!(matches!(
        scan_str("MSH|^~", "OBR.7"),
        Err(Hl7Error::UnknownDelimiters(_))
    ));
}

#[test]
fn scan_accepts_a_parsed_address() {
    let address = Address::new("OBR", 7);
    assert_eq!(scan(MINIMAL, &address).unwrap(), "20200101");
}

#[test]
fn scan_tolerates_terminator_variants() {
    let lf = "MSH|^~\\&|A|B|C|D|20200101||ORU^R01|1|P|2.4\nOBR|1|X|Y|Z|||20200101\n";
    let crlf = "MSH|^~\\&|A|B|C|D|20200101||ORU^R01|1|P|2.4\r\nOBR|1|X|Y|Z|||20200101\r\n";
    assert_eq!(scan_str(lf, "OBR.7").unwrap(), "20200101");
    assert_eq!(scan_str(crlf, "OBR.7").unwrap(), "20200101");
}
