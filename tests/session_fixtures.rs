use clisim::commands::merge_commands;
use clisim::context::Context;
use clisim::document::Document;
use clisim::session::{INVALID_INPUT, Mode, Reply, Session};

const BASE_FIXTURE: &str = include_str!("fixtures/base_commands.json");
const DEVICE_FIXTURE: &str = include_str!("fixtures/device_lab1.json");

fn lab_session() -> Session {
    let base = Document::from_json(BASE_FIXTURE).expect("load base fixture");
    let device = Document::from_json(DEVICE_FIXTURE).expect("load device fixture");
    let context = Context::from_document(&device);
    let commands = merge_commands(&base.commands, &device.commands);
    Session::new(context, commands)
}

fn anonymous_session() -> Session {
    let base = Document::from_json(BASE_FIXTURE).expect("load base fixture");
    let context = Context::from_document(&Document::default());
    let commands = merge_commands(&base.commands, &Document::default().commands);
    Session::new(context, commands)
}

#[test]
fn fixture_device_overrides_base_version_output() {
    let mut session = lab_session();
    assert_eq!(
        session.handle_line("show version"),
        Reply::Output("Router OS 2.3 (lab build)".to_string())
    );
}

#[test]
fn missing_device_document_falls_back_to_defaults() {
    let mut session = anonymous_session();
    assert_eq!(session.prompt(), "sim-router>");
    assert_eq!(
        session.handle_line("show version"),
        Reply::Output("Router OS 1.0, uptime 42 days".to_string())
    );
}

#[test]
fn placeholders_render_across_multi_line_output() {
    let mut session = lab_session();
    assert_eq!(
        session.handle_line("show running-config"),
        Reply::Output("hostname lab1\nsnmp-server location BLDG-7\nend".to_string())
    );
    assert_eq!(
        session.handle_line("show ip interface brief"),
        Reply::Output(
            "Interface    IP-Address     Status\nGi0/0        192.0.2.10      up".to_string()
        )
    );
}

#[test]
fn device_only_command_resolves_in_config_mode() {
    let mut session = lab_session();
    session.handle_line("enable");
    session.handle_line("configure terminal");
    assert_eq!(session.mode(), Mode::Config);

    match session.handle_line("show inventory") {
        Reply::Output(text) => assert!(text.contains("PID: SIM-1921")),
        other => panic!("unexpected reply: {other:?}"),
    }
}

#[test]
fn full_shell_transcript_walks_every_mode() {
    let mut session = lab_session();
    assert_eq!(session.prompt(), "lab1>");

    assert_eq!(session.handle_line("enable"), Reply::Silent);
    assert_eq!(session.prompt(), "lab1#");

    assert_eq!(session.handle_line("configure terminal"), Reply::Silent);
    assert_eq!(session.prompt(), "lab1(config)#");

    assert_eq!(
        session.handle_line("show clock"),
        Reply::Output("12:00:00.000 UTC".to_string())
    );

    assert_eq!(session.handle_line("exit"), Reply::Silent);
    assert_eq!(session.prompt(), "lab1#");

    assert_eq!(session.handle_line("exit"), Reply::Silent);
    assert_eq!(session.prompt(), "lab1>");

    assert_eq!(session.handle_line("exit"), Reply::Logout);
}

#[test]
fn unknown_command_is_invalid_in_every_mode() {
    let mut session = lab_session();
    let invalid = Reply::Output(INVALID_INPUT.to_string());

    assert_eq!(session.handle_line("show bogus"), invalid);
    session.handle_line("enable");
    assert_eq!(session.handle_line("show bogus"), invalid);
    session.handle_line("configure terminal");
    assert_eq!(session.handle_line("show bogus"), invalid);
}

#[test]
fn fixture_documents_have_basic_quality_guarantees() {
    let fixtures = [("base", BASE_FIXTURE), ("device", DEVICE_FIXTURE)];

    for (name, content) in fixtures {
        let doc = Document::from_json(content).expect("parse fixture");
        assert!(
            !doc.commands.is_empty(),
            "fixture '{name}' should contribute commands"
        );
        for command in doc.commands.keys() {
            assert_eq!(
                command,
                command.trim(),
                "fixture '{name}' has an untrimmed command key"
            );
            assert!(
                !command.is_empty(),
                "fixture '{name}' has an empty command key"
            );
        }
    }
}
