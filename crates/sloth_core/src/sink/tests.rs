use pretty_assertions::assert_eq;

use super::*;

#[test]
fn buffer_write_line_appends_newline() {
    let sink = Sink::buffer();
    sink.write_line("L");
    assert_eq!(sink.contents(), "L\n");
}

#[test]
fn buffer_lines_split_on_newlines() {
    let sink = buffer_sink();
    sink.write_line("L");
    sink.write_line("false && true == false");
    assert_eq!(sink.lines(), vec!["L", "false && true == false"]);
}

#[test]
fn stdout_captures_nothing() {
    let sink = stdout_sink();
    assert_eq!(sink.contents(), "");
    assert!(sink.lines().is_empty());
}

#[test]
fn silent_discards_everything() {
    let sink = silent_sink();
    sink.write_line("L");
    sink.write_line("R");
    assert_eq!(sink.contents(), "");
    assert!(sink.lines().is_empty());
}

#[test]
fn shared_handles_see_the_same_buffer() {
    let sink = buffer_sink();
    let other = SharedSink::clone(&sink);
    other.write_line("1");
    sink.write_line("2");
    assert_eq!(sink.lines(), vec!["1", "2"]);
}

#[test]
fn buffer_is_usable_across_threads() {
    let sink = buffer_sink();
    let writer = SharedSink::clone(&sink);

    let handle = std::thread::spawn(move || {
        for _ in 0..50 {
            writer.write_line("a");
        }
    });
    for _ in 0..50 {
        sink.write_line("b");
    }
    assert!(handle.join().is_ok());

    assert_eq!(sink.lines().len(), 100);
}
