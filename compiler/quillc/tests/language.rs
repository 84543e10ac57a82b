#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end language behavior: source text in, environment state and
//! channel output out.

use std::io::Write;

use pretty_assertions::assert_eq;
use quill_eval::{Bindings, BufferSink, Channel, Environment, Value, WriteOutcome};
use quill_lexer::{lex_all, LexError, LexOptions};
use quill_parse::{parse_source, ParseOutcome};
use quillc::commands::{run_file, run_source, CommandError, RunOptions};

fn run_in(env: &mut Environment, source: &str) -> BufferSink {
    let out = BufferSink::new();
    env.register_output_sink(out.clone());
    run_source(source, &RunOptions::default(), env).unwrap();
    out
}

fn run(source: &str) -> (Environment, BufferSink) {
    let mut env = Environment::new();
    let out = run_in(&mut env, source);
    (env, out)
}

fn int(n: i64) -> Value {
    Value::Int(n)
}

fn frame(pairs: &[(&str, Value)]) -> Bindings {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_string(), value.clone()))
        .collect()
}

// Indentation

#[test]
fn dedent_closes_every_block_opened_since_that_level() {
    let source = "\
for a in [1]
  for b in [2]
    for c in [3]
      x = a + b + c
y = 1
";
    let kinds: Vec<String> = lex_all(source, LexOptions::default())
        .unwrap()
        .iter()
        .map(|t| t.kind.to_string())
        .collect();
    let at_y = kinds.iter().position(|k| k == "NAME(y)").unwrap();
    assert_eq!(
        kinds[at_y - 4..at_y],
        ["END_BLOCK", "END_BLOCK", "END_BLOCK", "NEWLINE"]
    );

    let (env, _) = run(source);
    assert_eq!(env.read("y").unwrap(), int(1));
    assert_eq!(env.depth(), 1);
}

#[test]
fn dedent_to_unseen_level_fails_lexically() {
    let err = lex_all("if 1\n    a = 1\n  b = 2", LexOptions::default()).unwrap_err();
    assert!(matches!(err, LexError::UnmatchedDedent { line: 3, .. }));
}

// Scoping

#[test]
fn new_names_bind_in_innermost_frame() {
    let mut env = Environment::with_frames(vec![Bindings::default(), Bindings::default()]);
    run_in(&mut env, "fresh = 1");
    assert_eq!(env.frames()[1].borrow().get("fresh"), Some(&int(1)));
    assert!(env.frames()[0].borrow().is_empty());
    assert_eq!(env.global("fresh"), None);
}

#[test]
fn writes_to_globals_are_ignored_but_frames_mutate_in_place() {
    let mut env = Environment::with_frames(vec![frame(&[("local", int(1))]), Bindings::default()]);
    env.register_global("registry", 5_i64);
    run_in(&mut env, "registry = 6\nlocal = 2");
    assert_eq!(env.global("registry"), Some(&int(5)));
    assert_eq!(env.frames()[0].borrow().get("local"), Some(&int(2)));
    assert!(env.frames()[1].borrow().is_empty());
    assert_eq!(env.write("registry", int(7)), WriteOutcome::GlobalIgnored);
}

#[test]
fn loop_bindings_do_not_survive_the_loop() {
    let (env, _) = run("a = 0\nfor i in [1, 2, 3]\n  a = a + i");
    assert_eq!(env.read("a").unwrap(), int(6));
    assert_eq!(env.lookup("i"), None);
    assert_eq!(env.depth(), 1);
}

// Expressions

#[test]
fn operator_precedence() {
    let (env, _) = run("a = 2 + 2 * 5\nb = (2 + 2) * 5");
    assert_eq!(env.read("a").unwrap(), int(12));
    assert_eq!(env.read("b").unwrap(), int(20));
}

#[test]
fn compound_assignment_divides() {
    let (env, _) = run("a = 8\na /= 2");
    assert_eq!(env.read("a").unwrap(), int(4));
}

#[test]
fn subscript_and_dotted_access_are_equivalent() {
    let shared = Value::map(frame(&[("test", int(1))]));
    let mut env = Environment::with_frames(vec![frame(&[("a", shared.clone())])]);
    run_in(&mut env, "b = a[\"test\"]\nc = a.test\na[\"foo\"] = 3\nd = a.foo\na.foo = 4");
    assert_eq!(env.read("b").unwrap(), int(1));
    assert_eq!(env.read("c").unwrap(), int(1));
    assert_eq!(env.read("d").unwrap(), int(3));
    let Value::Map(map) = &shared else {
        panic!("expected map");
    };
    assert_eq!(map.borrow().get("foo"), Some(&int(4)));
}

#[test]
fn false_condition_leaves_environment_unchanged() {
    let (env, _) = run("if 0\n  a = 1");
    assert_eq!(env.lookup("a"), None);
    assert!(env.current_frame().borrow().is_empty());
}

#[test]
fn list_mutation_is_visible_through_aliases() {
    let (env, out) = run("a = [1, 2]\nb = a\nb[1] = 5\nprint a");
    assert_eq!(out.lines(Channel::Standard), vec!["[1, 5]"]);
    assert_eq!(env.read("a").unwrap(), env.read("b").unwrap());
}

#[test]
fn len_resolves_chains_against_live_environment() {
    let config = Value::map(frame(&[("names", Value::list(vec![]))]));
    let mut env = Environment::with_frames(vec![frame(&[("config", config)])]);
    let out = run_in(
        &mut env,
        "print len(config.names)\nconfig.names = [1, 2]\nprint len(config.names)",
    );
    assert_eq!(out.lines(Channel::Standard), vec!["0", "2"]);
}

#[test]
fn sys_locals_assignment_binds_in_current_frame() {
    let (env, _) = run("sys.locals.x = 1");
    assert_eq!(env.read("x").unwrap(), int(1));
}

// Faults

#[test]
fn undefined_read_reports_on_error_channel() {
    let (env, out) = run("a = 1\nprint b\na = 2");
    assert_eq!(
        out.output(),
        vec![(Channel::Error, "line 2: undefined variable: b".to_string())]
    );
    assert_eq!(env.read("a").unwrap(), int(1));
}

#[test]
fn for_pops_frame_when_body_faults() {
    let (env, out) = run("for i in [1, 2]\n  print i / 0");
    assert_eq!(out.lines(Channel::Error), vec!["line 2: division by zero"]);
    assert_eq!(env.depth(), 1);
    assert_eq!(env.lookup("i"), None);
}

#[test]
fn syntax_errors_are_returned_not_evaluated() {
    let mut env = Environment::new();
    let out = BufferSink::new();
    env.register_output_sink(out.clone());
    let err = run_source("print 1\nprint )", &RunOptions::default(), &mut env).unwrap_err();
    assert_eq!(err.to_string(), "can't make use of RPAREN on line 2");
    assert!(out.output().is_empty());
}

// Incremental parsing

#[test]
fn strict_mode_distinguishes_incomplete_from_complete() {
    assert_eq!(
        parse_source("if 1\n a=1", LexOptions::strict()).unwrap(),
        ParseOutcome::Incomplete
    );
    let program = parse_source("if 1\n a=1\nnop", LexOptions::strict())
        .unwrap()
        .into_complete()
        .unwrap();
    let mut env = Environment::new();
    env.evaluate(&program);
    assert_eq!(env.read("a").unwrap(), int(1));
}

#[test]
fn strict_run_of_unclosed_block_is_unexpected_eof() {
    let options = RunOptions {
        strict: true,
        ..RunOptions::default()
    };
    let err = run_source("if 1\n  a = 1", &options, &mut Environment::new()).unwrap_err();
    assert!(matches!(err, CommandError::UnexpectedEof));
}

// Files

#[test]
fn run_file_reads_scripts_ending_in_newline() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "a = 1\nif a\n  a += 1\n\n").unwrap();
    let options = RunOptions {
        path: Some(file.path().to_string_lossy().into_owned()),
        ..RunOptions::default()
    };
    run_file(&options).unwrap();
}

#[test]
fn run_file_reports_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.ql");
    let options = RunOptions {
        path: Some(path.to_string_lossy().into_owned()),
        ..RunOptions::default()
    };
    let err = run_file(&options).unwrap_err();
    assert!(matches!(err, CommandError::Read { .. }));
}
