use nsdebug::{
    Channel, DebugFactory, Line, MemorySink, Output, Settings, colour_for, nsdebug, strip_ansi,
};
use std::sync::{Arc, Mutex};

fn settings(debug: &str) -> Settings {
    Settings {
        debug: debug.to_string(),
        ..Settings::default()
    }
}

fn plain_factory(debug: &str) -> (DebugFactory, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let factory = DebugFactory::new(&settings(debug))
        .with_output(Output::Plain)
        .with_sink(sink.clone());
    (factory, sink)
}

#[test]
fn test_disabled_debugger_writes_nothing() {
    let (factory, sink) = plain_factory("app:*");
    let log = factory.create("db");
    log.log("ignored");
    nsdebug!(log, "also {}", "ignored");
    assert!(sink.lines().is_empty());
}

#[test]
fn test_enabled_debugger_writes_prefixed_lines() {
    let (factory, sink) = plain_factory("app:*");
    let log = factory.create("app:init");
    log.log("starting");
    nsdebug!(log, "loaded {} plugins", 3);
    assert_eq!(
        sink.texts(),
        vec!["app:init starting", "app:init loaded 3 plugins"]
    );
    assert!(sink.lines().iter().all(|(channel, _)| *channel == Channel::Debug));
}

#[test]
fn test_override_flips_output() {
    let (factory, sink) = plain_factory("");
    let mut log = factory.create("quiet");
    assert!(!log.is_enabled());

    log.set_enabled(true);
    log.log("now visible");
    log.set_enabled(false);
    log.log("hidden again");

    assert_eq!(sink.texts(), vec!["quiet now visible"]);
}

#[test]
fn test_filter_is_consulted_only_at_creation() {
    let (factory, sink) = plain_factory("a");
    let log = factory.create("a");
    let other = factory.create("b");
    assert!(log.is_enabled());
    assert!(!other.is_enabled());
    log.log("x");
    other.log("y");
    assert_eq!(sink.texts(), vec!["a x"]);
}

#[test]
fn test_ansi_output_strips_to_plain() {
    let sink = Arc::new(MemorySink::new());
    let factory = DebugFactory::new(&settings("*"))
        .with_output(Output::Ansi)
        .with_sink(sink.clone());
    factory.create("net:http").log("GET /");

    let texts = sink.texts();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains(&colour_for("net:http").ansi_prefix()));
    assert_eq!(strip_ansi(&texts[0]), "net:http GET /");
}

#[test]
fn test_styled_output_carries_css() {
    let sink = Arc::new(MemorySink::new());
    let factory = DebugFactory::new(&settings("*"))
        .with_output(Output::Styled)
        .with_sink(sink.clone());
    factory.create("ui").log("click");

    let lines = sink.lines();
    match &lines[0].1 {
        Line::Styled(styled) => {
            assert_eq!(styled.format, "%cui %cclick");
            assert_eq!(styled.colour_css, format!("color: #{}", colour_for("ui").hex));
            assert_eq!(styled.reset_css, "color: inherit");
        }
        other => panic!("expected styled line, got {:?}", other),
    }
}

#[test]
fn test_closure_sink() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let captured = seen.clone();
    let mut log = DebugFactory::new(&settings("*"))
        .with_output(Output::Plain)
        .create("cb");
    log.set_sink(Arc::new(move |channel: Channel, line: &Line| {
        captured.lock().unwrap().push((channel, line.to_plain()));
    }));
    log.log("hello");
    assert_eq!(
        *seen.lock().unwrap(),
        vec![(Channel::Debug, "cb hello".to_string())]
    );
}

#[test]
#[should_panic(expected = "PANIC! out of disk")]
fn test_panic_unwinds_when_configured() {
    let settings = Settings {
        panic_throws: true,
        ..settings("")
    };
    let mut log = DebugFactory::new(&settings).create("storage");
    log.panic("out of disk");
}
