//! The demo sections. Every section writes to a sink so tests can capture it.

use sloth_core::{
    and, filter, from_sequence, hang, lazy_first, lazy_sum, or, print_stream, range, sieve, take,
    trace, SharedSink, Stream, Thunk,
};

use crate::options::Command;

const RULE: &str = "==============================";

type BoolCombinator = fn(Thunk<bool>, Thunk<bool>) -> Thunk<bool>;

pub fn run(command: &Command, sink: &SharedSink) {
    tracing::debug!(?command, "running");
    match command {
        Command::Demo => demo(sink),
        Command::Logic => logic(sink),
        Command::Range { start, count } => print_range(*start, *count, sink),
        Command::Evens { count } => print_stream(sink, &evens(*count)),
        Command::Primes { count } => print_stream(sink, &primes(*count)),
        Command::Help => sink.write_line(crate::options::usage()),
    }
}

fn demo(sink: &SharedSink) {
    laziness(sink);
    sink.write_line("");
    sink.write_line(RULE);
    sink.write_line("");
    logic(sink);
    sink.write_line("");
    sink.write_line(RULE);
    sink.write_line("");
    lists(sink);
    sink.write_line("");
    sink.write_line(RULE);
    sink.write_line("");
    print_stream(sink, &primes(10));
}

/// Both arguments are evaluated before the call, needed or not.
fn eager_sum(a: i64, b: i64) -> i64 {
    a + b
}

fn laziness(sink: &SharedSink) {
    sink.write_line(&format!("Eager sum:\t{}", eager_sum(10 + 5, 20)));

    let sum = lazy_sum(Thunk::new(|| 10 + 5), Thunk::value(20));
    sink.write_line(&format!("Lazy sum:\t{}", sum.force()));

    // The second argument would spin forever if anything forced it.
    let first = lazy_first(Thunk::value(10), Thunk::new(hang::<i64>));
    sink.write_line(&format!("Lazy first:\t{}", first.force()));
}

fn logic(sink: &SharedSink) {
    truth_table("&&", and, sink);
    sink.write_line("---");
    truth_table("||", or, sink);
}

fn truth_table(symbol: &str, combine: BoolCombinator, sink: &SharedSink) {
    for (left, right) in [(false, false), (true, false), (true, true), (false, true)] {
        let result = combine(
            trace(Thunk::value(left), "L", sink),
            trace(Thunk::value(right), "R", sink),
        )
        .force();
        sink.write_line(&format!("{left} {symbol} {right} == {result}"));
    }
}

fn lists(sink: &SharedSink) {
    walk_heads(&from_sequence([1, 2, 3]), 4, sink);
    sink.write_line("---");
    walk_heads(&range(Thunk::value(3)), 5, sink);
    sink.write_line("---");
    print_stream(sink, &from_sequence([1, 2, 3, 4, 5]));
    sink.write_line("---");
    print_range(3, 10, sink);
    sink.write_line("---");
    print_stream(sink, &evens(10));
}

/// Follow up to `steps` tails by hand, reporting each head (or the end).
fn walk_heads(xs: &Stream<i64>, steps: usize, sink: &SharedSink) {
    let mut current = xs.force();
    for _ in 0..steps {
        let Some(node) = current else {
            sink.write_line("<empty>");
            return;
        };
        sink.write_line(&node.head().force().to_string());
        current = node.tail().force();
    }
}

fn print_range(start: i64, count: i64, sink: &SharedSink) {
    print_stream(sink, &take(Thunk::value(count), range(Thunk::value(start))));
}

fn evens(count: i64) -> Stream<i64> {
    take(
        Thunk::value(count),
        filter(|x: &i64| x % 2 == 0, range(Thunk::value(1))),
    )
}

fn primes(count: i64) -> Stream<i64> {
    take(Thunk::value(count), sieve(range(Thunk::value(2))))
}
