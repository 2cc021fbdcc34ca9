use checklist_sync::{parse_checklist, CheckState, ChecklistItem, ChecklistSlots, ParseError, SLOT_COUNT};
use serde_json::{json, Value};

fn sample_texts() -> Vec<String> {
    vec![
        json!([]).to_string(),
        json!([{ "id": "1", "name": "A", "value": "checked" }]).to_string(),
        json!([
            { "id": "1", "name": "A", "type": "doc", "value": "", "doctype": "x", "mandatory": "yes", "note": "keep me" },
            { "id": "2", "name": "B", "value": "maybe", "mandatory": "  " },
            { "id": 3, "name": true },
            "loose element",
        ])
        .to_string(),
    ]
}

#[test]
fn blank_text_is_empty_without_error() {
    for text in ["", "   ", "\n", "\t \r\n "] {
        assert_eq!(parse_checklist(text), Ok(Vec::new()));
    }
}

#[test]
fn non_array_json_is_rejected() {
    let values = [json!({"a": 1}), json!(1), json!(-2.5), json!("s"), json!(false), json!(null), json!({})];
    for value in values {
        assert_eq!(parse_checklist(&value.to_string()), Err(ParseError::NotArray));
    }
}

#[test]
fn malformed_json_always_errors() {
    for text in ["not json", "[", "[{]", r#"[{"id":"1",}]"#, "]", "{\"a\":", "[1 2]"] {
        let mut slots = ChecklistSlots::new();
        slots.set_slot_text(0, text).unwrap();
        let slot = slots.slot(0).unwrap();
        assert!(slot.parse_error().is_some(), "{}", text);
        assert!(slot.items().is_empty(), "{}", text);
    }
}

#[test]
fn toggle_round_trips_every_row() {
    for text in sample_texts() {
        let mut slots = ChecklistSlots::new();
        slots.set_slot_text(0, text.as_str()).unwrap();
        let rows = slots.slot(0).unwrap().items().len();

        for row in 0..rows {
            slots.toggle_item(0, row).unwrap();
            let slot = slots.slot(0).unwrap();
            assert_eq!(parse_checklist(slot.raw_text()).unwrap(), slot.items());
            assert!(slot.parse_error().is_none());
        }
    }
}

#[test]
fn double_toggle_restores_check_states() {
    for text in sample_texts() {
        let mut slots = ChecklistSlots::new();
        slots.set_slot_text(0, text.as_str()).unwrap();
        let original = slots.slot(0).unwrap().items().to_vec();

        for row in 0..original.len() {
            let first = slots.toggle_item(0, row).unwrap();
            let second = slots.toggle_item(0, row).unwrap();
            assert_eq!(first.toggled(), second);
            assert_eq!(second, original[row].value());
        }

        let slot = slots.slot(0).unwrap();
        let states = |items: &[ChecklistItem]| -> Vec<(String, CheckState)> {
            items.iter().map(|item| (item.id().into_owned(), item.value())).collect()
        };
        assert_eq!(states(slot.items()), states(&original));
        assert_eq!(states(&parse_checklist(slot.raw_text()).unwrap()), states(&original));
    }
}

#[test]
fn toggle_preserves_extension_attributes() {
    let mut slots = ChecklistSlots::new();
    slots
        .set_slot_text(0, json!([{ "id": "1", "note": "keep me", "meta": { "k": [1, 2] } }]).to_string())
        .unwrap();

    slots.toggle_item(0, 0).unwrap();

    let item = &slots.slot(0).unwrap().items()[0];
    assert_eq!(item.value(), CheckState::Checked);
    assert_eq!(item.field("note"), Some(&json!("keep me")));
    assert_eq!(item.field("meta"), Some(&json!({ "k": [1, 2] })));
    assert!(slots.slot(0).unwrap().raw_text().contains("\"note\": \"keep me\""));
}

#[test]
fn malformed_value_reads_as_unchecked_and_toggles_to_checked() {
    let mut slots = ChecklistSlots::new();
    slots.set_slot_text(0, r#"[{"id":"1","value":"yes"}]"#).unwrap();
    assert_eq!(slots.slot(0).unwrap().items()[0].value(), CheckState::Unchecked);
    assert_eq!(slots.toggle_item(0, 0), Ok(CheckState::Checked));
}

#[test]
fn edits_and_toggles_are_isolated_per_slot() {
    let texts = sample_texts();
    for target in 0..SLOT_COUNT {
        let mut slots = ChecklistSlots::new();
        for (index, text) in texts.iter().enumerate() {
            slots.set_slot_text(index, text.as_str()).unwrap();
        }
        let before = slots.clone();

        slots.set_slot_text(target, "garbage").unwrap();
        slots.set_slot_text(target, texts[2].as_str()).unwrap();
        slots.toggle_item(target, 0).unwrap();

        for other in (0..SLOT_COUNT).filter(|&j| j != target) {
            assert_eq!(slots.slot(other).unwrap(), before.slot(other).unwrap());
        }
    }
}

#[test]
fn aligned_length_tracks_longest_slot() {
    let mut slots = ChecklistSlots::new();
    let steps: [(usize, &str); 6] = [
        (0, "[{}]"),
        (1, "[{},{},{}]"),
        (2, "[{},{}]"),
        (1, "oops"),
        (0, ""),
        (2, "[{},{},{},{},{}]"),
    ];

    for (index, text) in steps {
        slots.set_slot_text(index, text).unwrap();
        let expected = slots.slots().iter().map(|s| s.items().len()).max().unwrap();
        assert_eq!(slots.aligned_rows().len(), expected);
        assert_eq!(slots.aligned_rows().count(), expected);
    }
}

fn as_json(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

const MIXED: &str = r#"[
    {"id": 1, "name": "A", "value": "yes", "mandatory": null, "extra": "e"},
    {"id": "2", "name": "B"},
    5,
    {"id": "4", "name": "D", "value": "", "type": "doc", "meta": {"k": [1, 2]}},
    {"name": "E", "value": "checked", "mandatory": "yes"},
    null
]"#;

#[test]
fn toggle_leaves_untouched_rows_verbatim() {
    let before = as_json(MIXED);
    let len = before.as_array().unwrap().len();

    for row in 0..len {
        let mut slots = ChecklistSlots::new();
        slots.set_slot_text(0, MIXED).unwrap();
        slots.toggle_item(0, row).unwrap();

        let after = as_json(slots.slot(0).unwrap().raw_text());
        for other in (0..len).filter(|&r| r != row) {
            assert_eq!(after[other], before[other], "row {} after toggling row {}", other, row);
        }
        if let Some(fields) = before[row].as_object() {
            for (key, value) in fields.iter().filter(|(key, _)| key.as_str() != "value") {
                assert_eq!(&after[row][key], value, "key {} of row {}", key, row);
            }
        }
    }
}

#[test]
fn double_toggle_restores_text_json() {
    // Rows whose value is already "" or "checked" come back byte-for-byte
    for row in [3, 4] {
        let mut slots = ChecklistSlots::new();
        slots.set_slot_text(0, MIXED).unwrap();
        slots.toggle_item(0, row).unwrap();
        slots.toggle_item(0, row).unwrap();

        assert_eq!(as_json(slots.slot(0).unwrap().raw_text()), as_json(MIXED));
    }
}

#[test]
fn double_toggle_of_loose_value_settles_on_unchecked() {
    // Missing or malformed values are written as "" on the way back
    let mut slots = ChecklistSlots::new();
    slots.set_slot_text(0, MIXED).unwrap();
    for row in [0, 1] {
        slots.toggle_item(0, row).unwrap();
        slots.toggle_item(0, row).unwrap();
    }

    let mut expected = as_json(MIXED);
    expected[0]["value"] = json!("");
    expected[1]["value"] = json!("");
    assert_eq!(as_json(slots.slot(0).unwrap().raw_text()), expected);
}

#[test]
fn export_matches_input_json() {
    let mut slots = ChecklistSlots::new();
    slots.set_slot_text(1, MIXED).unwrap();

    let exported = slots.export_slot(1).unwrap();
    assert!(!exported.contains('\n'));
    assert_eq!(as_json(&exported), as_json(MIXED));
}
