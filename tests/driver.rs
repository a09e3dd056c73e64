//! End-to-end tests for the protocol driver

use chrono::NaiveTime;
use serde_json::Value;
use swaystatus::core::build_all;
use swaystatus::protocol::PROTOCOL_HEADER;
use swaystatus::{config, StatusBar};

fn bar(config: &str) -> StatusBar {
    StatusBar::new(build_all(config::parse(config).unwrap()).unwrap())
}

/// Parse one render line (`,[...]`) into its block objects.
fn blocks(line: &str) -> Vec<Value> {
    let array = line.strip_prefix(',').expect("render line starts with ','");
    serde_json::from_str(array).expect("render line payload is a JSON array")
}

fn text_of<'a>(blocks: &'a [Value], name: &str) -> &'a str {
    blocks
        .iter()
        .find(|b| b["name"] == name)
        .unwrap_or_else(|| panic!("no block named {name}"))["full_text"]
        .as_str()
        .unwrap()
}

#[test]
fn timeout_tick_renders_all_blocks_in_configured_order() {
    let mut bar = bar(
        r#"[
            {"type": "clock", "name": "clock"},
            {"type": "red_shift", "name": "shift"}
        ]"#,
    );

    let line = bar.tick();
    let blocks = blocks(&line);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0]["name"], "clock");
    assert_eq!(blocks[1]["name"], "shift");

    // Clock text ends in a parseable wall-clock time.
    let clock_text = text_of(&blocks, "clock");
    let time_token = clock_text.split_whitespace().last().unwrap();
    assert!(
        NaiveTime::parse_from_str(time_token, "%H:%M:%S").is_ok(),
        "unexpected clock text: {clock_text}"
    );

    assert_eq!(text_of(&blocks, "shift"), "6500K 1.00");
}

#[test]
fn every_block_carries_color_name_and_text() {
    let mut bar = bar(
        r#"[
            {"type": "clock", "name": "clock"},
            {"type": "swap", "name": "swap"}
        ]"#,
    );

    for block in blocks(&bar.tick()) {
        let object = block.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object["color"].is_string());
        assert!(object["name"].is_string());
        assert!(object["full_text"].is_string());
    }
}

#[test]
fn left_click_moves_pomodoro_from_waiting_to_running() {
    let mut bar = bar(
        r#"[{
            "type": "pomodoro",
            "name": "pomodoro",
            "segments": 8,
            "end_sound_fname": "/tmp/ring.ogg"
        }]"#,
    );

    let waiting = bar.tick();
    let waiting_text = text_of(&blocks(&waiting), "pomodoro").to_string();
    assert_eq!(waiting_text, format!("[{}]", "-".repeat(8)));

    let running = bar
        .handle_line(r#"{"name":"pomodoro","button":1,"x":0,"y":0}"#)
        .expect("click on a registered module renders a line");
    let running_text = text_of(&blocks(&running), "pomodoro").to_string();
    assert!(
        !running_text.contains('-'),
        "expected running bar, got {running_text}"
    );
    assert!(running_text.starts_with('[') && running_text.ends_with(']'));
}

#[test]
fn clicks_are_routed_to_the_named_module_only() {
    let mut bar = bar(
        r#"[
            {"type": "red_shift", "name": "left"},
            {"type": "red_shift", "name": "right"}
        ]"#,
    );
    bar.tick();

    let line = bar
        .handle_line(r#",{"name":"right","button":5,"x":0,"y":0}"#)
        .unwrap();
    let blocks = blocks(&line);
    assert_eq!(text_of(&blocks, "left"), "6500K 1.00");
    assert_eq!(text_of(&blocks, "right"), "6500K 0.90");
}

#[test]
fn framing_and_noise_produce_no_render_lines() {
    let mut bar = bar(r#"[{"type": "clock", "name": "clock"}]"#);
    assert!(bar.handle_line("[").is_none());
    assert!(bar.handle_line("").is_none());
    assert!(bar.handle_line("]]]").is_none());
    assert!(bar
        .handle_line(r#"{"name":"ghost","button":1,"x":0,"y":0}"#)
        .is_none());
}

#[test]
fn header_matches_the_bar_protocol() {
    let header: Value = serde_json::from_str(PROTOCOL_HEADER).unwrap();
    assert_eq!(header["click_events"], true);
    assert_eq!(header["version"], 1);
}
