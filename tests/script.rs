//! Script driver transcripts

mod common;

use common::{assert_snapshot, load_script};
use runqueue::script::{self, run_script, Command, ScriptError};
use runqueue::RunqueueKind;
use test_case::test_case;

#[test_case(RunqueueKind::Tree ; "tree")]
#[test_case(RunqueueKind::Array ; "array")]
#[test_case(RunqueueKind::List ; "list")]
fn scheduler_day_transcript(kind: RunqueueKind) {
    let transcript = run_script(&load_script("scheduler_day.txt"), kind).expect("script runs");
    assert_snapshot("scheduler_day.out", &transcript);
}

#[test_case(RunqueueKind::Tree ; "tree")]
#[test_case(RunqueueKind::Array ; "array")]
#[test_case(RunqueueKind::List ; "list")]
fn scenario_scripts(kind: RunqueueKind) {
    let a = run_script("EN P1 10\nEN P2 5\nEN P3 20\nPA\nPT P1\nST P1\n", kind).unwrap();
    assert_eq!(a, "P2 P1 P3 \n5\n20\n");

    let b = run_script("DE\nFP X\nPT X\n", kind).unwrap();
    assert_eq!(b, "\nfalse\n-1\n");

    let c = run_script("EN P1 10\nEN P1 99\nPA\nPT P1\nST P1\n", kind).unwrap();
    assert_eq!(c, "P1 \n0\n0\n");

    let d = run_script("EN P1 5\nEN P2 5\nPT P2\nST P1\n", kind).unwrap();
    assert_eq!(d, "5\n5\n");
}

#[test]
fn long_aliases_are_accepted() {
    let out = run_script(
        "enqueue a 2\nEnqueue b 1\nprint\nfind a\npreceding a\nsucceeding b\nremove a\ndequeue\nquit\n",
        RunqueueKind::Array,
    )
    .unwrap();
    assert_eq!(out, "b a \ntrue\n1\n2\ntrue\nb\n");
}

#[test]
fn execute_writes_into_any_sink() {
    let commands = script::parse("EN x 3\nDE\n").unwrap();
    assert_eq!(
        commands[0],
        Command::Enqueue {
            label: "x".to_string(),
            vt: 3
        }
    );

    let mut queue = RunqueueKind::List.build();
    let mut sink = Vec::new();
    script::execute(&commands, queue.as_mut(), &mut sink).unwrap();
    assert_eq!(sink, b"x\n");
    assert!(queue.is_empty());
}

#[test]
fn parse_errors_surface_through_run_script() {
    let err = run_script("EN a 1\nEN b ten\n", RunqueueKind::Tree).unwrap_err();
    assert!(matches!(err, ScriptError::InvalidVirtualTime { line: 2, .. }));
    assert_eq!(err.to_string(), "line 2: invalid virtual time 'ten'");
}

#[test]
fn max_vt_times_print_in_full() {
    let source = "EN a 18446744073709551615\nEN b 18446744073709551615\nEN c 1\nST c\nPT b\n";
    for kind in RunqueueKind::ALL {
        let out = run_script(source, kind).unwrap();
        assert_eq!(out, "36893488147419103230\n18446744073709551616\n", "{kind}");
    }
}

#[test]
fn all_kinds_agree_on_scheduler_day() {
    let source = load_script("scheduler_day.txt");
    let outputs: Vec<_> = RunqueueKind::ALL
        .into_iter()
        .map(|kind| (kind, run_script(&source, kind).unwrap()))
        .collect();
    script::compare_transcripts(&outputs).unwrap();
}
