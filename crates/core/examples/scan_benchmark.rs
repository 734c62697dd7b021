//! Lightweight parse-versus-scan benchmark harness for local baselines.
//!
//! Run from repository root:
//! `cargo run -p hl7_toolchain_core --example scan_benchmark --release`

use std::time::Instant;

use hl7_toolchain_core::{Address, parse_str, scan};

const SAMPLE: &str = "MSH|^~\\&|GHH LAB|ELAB-3|GHH OE|BLDG4|200202150930||ORU^R01|CNTRL-3456|P|2.4\rPID|||555-44-4444||EVERYWOMAN^EVE^E^^^^L|JONES|19620320|F|||153 FERNWOOD DR.^^STATESVILLE^OH^35292||(206)3345232|(206)752-121||||AC555444444||67-A4335^OH^20030520\rOBR|1|845439^GHH OE|1045813^GHH LAB|15545^GLUCOSE|||200202150730|||||||||555-55-5555^PRIMARY^PATRICIA P^^^^MD|||||||||F||||||444-44-4444^HIPPOCRATES^HOWARD H^^^^MD\rOBX|1|SN|1554-5^GLUCOSE^POST 12H CFST:MCNC:PT:SER/PLAS:QN||^182|mg/dl|70_105|H|||F\r";

fn main() {
    let iterations = 100_000usize;
    let address: Address = "OBR.7".parse().expect("address");

    let tree_start = Instant::now();
    for _ in 0..iterations {
        let message = parse_str(SAMPLE).expect("parse");
        let _ = message.query(&address).expect("query");
    }
    let tree_elapsed = tree_start.elapsed();

    let scan_start = Instant::now();
    for _ in 0..iterations {
        let _ = scan(SAMPLE, &address).expect("scan");
    }
    let scan_elapsed = scan_start.elapsed();

    println!("Benchmark: extract OBR-7 from a {}-byte ORU^R01", SAMPLE.len());
    println!("  iterations: {iterations}");
    println!(
        "  parse+query: total={:?}, per_iter={:.3} us",
        tree_elapsed,
        tree_elapsed.as_secs_f64() * 1e6 / iterations as f64
    );
    println!(
        "  scan:        total={:?}, per_iter={:.3} us",
        scan_elapsed,
        scan_elapsed.as_secs_f64() * 1e6 / iterations as f64
    );
}
