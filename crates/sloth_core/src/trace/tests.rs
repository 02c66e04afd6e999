use pretty_assertions::assert_eq;

use super::*;
use crate::{and, buffer_sink, from_sequence, or, range, take};

#[test]
fn trace_writes_only_when_forced() {
    let sink = buffer_sink();
    let traced = trace(Thunk::value(1), "L", &sink);
    assert!(sink.lines().is_empty());

    assert_eq!(traced.force(), 1);
    assert_eq!(sink.lines(), vec!["L"]);
}

#[test]
fn trace_writes_once_per_force() {
    let sink = buffer_sink();
    let traced = trace(Thunk::value('x'), "hit", &sink);
    traced.force();
    traced.force();
    traced.force();
    assert_eq!(sink.lines(), vec!["hit", "hit", "hit"]);
}

#[test]
fn traced_and_fires_right_only_when_left_true() {
    let cases = [
        (false, false, vec!["L"]),
        (true, false, vec!["L", "R"]),
        (true, true, vec!["L", "R"]),
        (false, true, vec!["L"]),
    ];
    for (left, right, expected) in cases {
        let sink = buffer_sink();
        let result = and(
            trace(Thunk::value(left), "L", &sink),
            trace(Thunk::value(right), "R", &sink),
        )
        .force();
        assert_eq!(result, left && right);
        assert_eq!(sink.lines(), expected, "{left} && {right}");
    }
}

#[test]
fn traced_or_fires_right_only_when_left_false() {
    let cases = [
        (false, false, vec!["L", "R"]),
        (true, false, vec!["L"]),
        (true, true, vec!["L"]),
        (false, true, vec!["L", "R"]),
    ];
    for (left, right, expected) in cases {
        let sink = buffer_sink();
        let result = or(
            trace(Thunk::value(left), "L", &sink),
            trace(Thunk::value(right), "R", &sink),
        )
        .force();
        assert_eq!(result, left || right);
        assert_eq!(sink.lines(), expected, "{left} || {right}");
    }
}

#[test]
fn print_stream_writes_one_line_per_element() {
    let sink = buffer_sink();
    print_stream(&sink, &from_sequence([1, 2, 3, 4, 5]));
    assert_eq!(sink.contents(), "1\n2\n3\n4\n5\n");
}

#[test]
fn print_stream_of_truncated_infinite_stream() {
    let sink = buffer_sink();
    print_stream(&sink, &take(Thunk::value(3), range(Thunk::value(3))));
    assert_eq!(sink.lines(), vec!["3", "4", "5"]);
}

#[test]
fn print_stream_of_empty_writes_nothing() {
    let sink = buffer_sink();
    print_stream(&sink, &from_sequence(Vec::<u8>::new()));
    assert_eq!(sink.contents(), "");
}

#[test]
fn trace_and_print_stream_share_one_handle() {
    let sink = buffer_sink();
    let head = trace(Thunk::value(7), "forced", &sink);
    print_stream(&sink, &from_sequence([head.force(), 8]));
    assert_eq!(sink.lines(), vec!["forced", "7", "8"]);
}
