//! Shared fixtures and helpers for `hl7_toolchain_core` integration tests.

#![allow(unreachable_pub)]

use hl7_toolchain_core::{parse_str, scan_str};

#[allow(dead_code)]
/// An ORU^R01 lab result with PID/OBR/OBX content, CR-terminated.
pub const SAMPLE_ORU: &str = "MSH|^~\\&|GHH LAB|ELAB-3|GHH OE|BLDG4|200202150930||ORU^R01|CNTRL-3456|P|2.4\rPID|||555-44-4444||EVERYWOMAN^EVE^E^^^^L|JONES|19620320|F\rOBR|1|845439^GHH OE|1045813^GHH LAB|15545^GLUCOSE|||200202150730|||||||||555-55-5555^PRIMARY^PATRICIA P^^^^MD\rOBX|1|SN|1554-5^GLUCOSE^POST 12H CFST:MCNC:PT:SER/PLAS:QN||^182|mg/dl|70_105|H|||F\r";

#[allow(dead_code)]
/// A minimal two-segment ORU message.
pub const MINIMAL: &str = "MSH|^~\\&|A|B|C|D|20200101||ORU^R01|1|P|2.4\rOBR|1|X|Y|Z|||20200101";

#[allow(dead_code)]
/// [`MINIMAL`] re-encoded with a fully substituted delimiter table
/// (`#` field, `!` component, `@` repetition, `$` escape, `%` subcomponent).
pub const MINIMAL_ALT_DELIMS: &str =
    "MSH#!@$%#A#B#C#D#20200101##ORU!R01#1#P#2.4\rOBR#1#X#Y#Z###20200101";

/// Assert that the direct scanner and the full parse-then-query path agree
/// on a value.
#[allow(dead_code)]
pub fn assert_both_resolve(input: &str, address: &str, expected: &str) {
    let message = parse_str(input).expect("parse");
    assert_eq!(
        message.query_str(address).expect("query"),
        expected,
        "tree path disagrees for {address}"
    );
    assert_eq!(
        scan_str(input, address).expect("scan"),
        expected,
        "scan path disagrees for {address}"
    );
}
