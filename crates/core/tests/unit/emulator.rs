//! Traced emulator tests.
//!
//! The emulator must agree with the pure function, report every step to its
//! sink in order, and stop at the first sink failure.

use div7_core::common::{EmuError, Reg};
use div7_core::sim::{LogSink, NullSink, TextSink, TraceEvent};
use div7_core::{DividerEmulator, divide_by_seven};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::mocks::{FailingSink, RecordingSink, SinkCall};

#[test]
fn run_reports_begin_steps_finish() {
    let mut sink = RecordingSink::new();
    let division = DividerEmulator::new().run(42, &mut sink).unwrap();

    assert_eq!(division.quotient, 6);
    assert_eq!(sink.calls.len(), 7);
    assert_eq!(sink.calls.first(), Some(&SinkCall::Begin(42)));
    assert_eq!(sink.calls.last(), Some(&SinkCall::Finish(6)));

    let steps: Vec<TraceEvent> = sink.steps().into_iter().cloned().collect();
    assert_eq!(steps, division.steps);
}

#[test]
fn intermediate_registers_for_42() {
    let division = DividerEmulator::new().evaluate(42);
    let s = &division.steps;

    assert_eq!(s[0].written(Reg::R3), Some(0x9249_2493));
    assert_eq!(s[1].product, Some(-77_309_411_298));
    assert_eq!(s[1].written(Reg::R2), Some(30));
    assert_eq!(s[1].written(Reg::R3), Some(-18i32 as u32));
    assert_eq!(s[2].written(Reg::R3), Some(24));
    assert_eq!(s[3].written(Reg::R0), Some(0));
    assert_eq!(s[4].written(Reg::R0), Some(6));
}

#[test]
fn intermediate_registers_for_minus_6() {
    let division = DividerEmulator::new().evaluate(-6);
    let s = &division.steps;

    assert_eq!(s[1].written(Reg::R3), Some(2));
    assert_eq!(s[2].written(Reg::R3), Some(-4i32 as u32));
    assert_eq!(s[3].written(Reg::R0), Some(u32::MAX));
    assert_eq!(division.quotient, 0);
    assert_eq!(division.remainder(), -6);
}

#[test]
fn sink_failure_aborts_run() {
    let mut sink = FailingSink::new(2);
    let err = DividerEmulator::new().run(100, &mut sink).unwrap_err();
    assert!(matches!(err, EmuError::Trace(_)));
    assert_eq!(sink.seen, 2);
}

#[test]
fn collecting_into_vec() {
    let mut events: Vec<TraceEvent> = Vec::new();
    let division = DividerEmulator::new().run(-700, &mut events).unwrap();
    assert_eq!(division.quotient, -100);
    assert_eq!(events.len(), 5);
}

#[test]
fn null_sink_matches_evaluate() {
    let emulator = DividerEmulator::new();
    let traced = emulator.run(12345, &mut NullSink).unwrap();
    assert_eq!(traced, emulator.evaluate(12345));
}

#[test]
fn log_sink_does_not_alter_result() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
    let division = DividerEmulator::new().run(-49, &mut LogSink).unwrap();
    assert_eq!(division.quotient, -7);
}

#[test]
fn text_trace_for_42() {
    let mut sink = TextSink::new(Vec::new());
    let _division = DividerEmulator::new().run(42, &mut sink).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();

    let expected = "\
Computing 42/7
    r0 = 42 (0x0000002a)
ldr r3, =0x92492493
    r3 = -1840700269 (0x92492493)
smull r2, r3, r0, r3
    r0*r3 = -77309411298 (0xffffffee0000001e)
    r2 = 30 (0x0000001e)
    r3 = -18 (0xffffffee)
add r3, r3, r0
    r3 = 24 (0x00000018)
mov r0, r0, ASR#31
    r0 = 0 (0x00000000)
rsb r0, r0, r3, ASR#2
    r0 = 6 (0x00000006)
42/7 = 6
";
    assert_eq!(text, expected);
}

#[test]
fn division_serializes_to_json() {
    let division = DividerEmulator::new().evaluate(-13);
    let json = serde_json::to_value(&division).unwrap();

    assert_eq!(json["dividend"], -13);
    assert_eq!(json["quotient"], -1);
    assert_eq!(json["steps"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["steps"][1]["asm"], "smull r2, r3, r0, r3");
    assert!(json["steps"][1].get("product").is_some());
    assert!(json["steps"][0].get("product").is_none());
    assert_eq!(json["stats"]["multiplies"], 1);
}

#[test]
fn emulator_exposes_program() {
    assert_eq!(DividerEmulator::default().program().len(), 5);
}

proptest! {
    #[test]
    fn emulator_matches_pure_and_native(n in any::<i32>()) {
        let division = DividerEmulator::new().evaluate(n);
        prop_assert_eq!(division.quotient, divide_by_seven(n));
        prop_assert_eq!(division.quotient, n / 7);
        prop_assert!(division.remainder().abs() < 7);
    }
}
