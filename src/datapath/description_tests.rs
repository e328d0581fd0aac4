use std::collections::BTreeMap;

use super::description::{Document, PinRow, Section};
use super::{DisplayMode, Pin, Theme, Unit, UnitKind, UnitView, ViewContext};
use crate::format::NumberFormat;
use crate::locale::TableLexicon;

fn lexicon() -> TableLexicon {
    let mut lexicon = TableLexicon::new();
    lexicon.insert("en", "alu", "Arithmetic Logic Unit");
    lexicon.insert("en", "alu_desc", "Performs arithmetic.\nAnd logic.");
    lexicon.insert("en", "synchronous", "synchronous");
    lexicon.insert("en", "latency", "Latency");
    lexicon.insert("en", "double_click_to_change", "double-click to change");
    lexicon
}

fn pin(id: &str, value: u32, accumulated_latency: u32) -> Pin {
    Pin {
        id: id.to_string(),
        connected: true,
        in_control_path: false,
        value,
        accumulated_latency,
        relevant: true,
    }
}

fn alu() -> Unit {
    Unit {
        kind: UnitKind::Plain,
        synchronous: false,
        id: "alu".to_string(),
        name_key: "alu".to_string(),
        description_key: "alu_desc".to_string(),
        custom_descriptions: BTreeMap::new(),
        in_control_path: false,
        latency: 5,
        accumulated_latency: 40,
        hi: 0,
        lo: 0,
        inputs: vec![pin("in1", 0x10, 7), pin("in2", 0x20, 9)],
        outputs: vec![pin("out", 0x30, 11)],
    }
}

fn ctx(mode: DisplayMode) -> ViewContext {
    ViewContext {
        mode,
        theme: Theme::Light,
        format: NumberFormat::Hexadecimal,
        lang: "en".to_string(),
    }
}

fn section_at(doc: &Document, index: usize) -> &Section {
    &doc.sections[index]
}

#[test]
fn test_deterministic() {
    let unit = alu();
    let lexicon = lexicon();
    for mode in [DisplayMode::ValueInspection, DisplayMode::PerformanceAnalysis] {
        let a = Document::build(&unit, &ctx(mode), &lexicon);
        let b = Document::build(&unit, &ctx(mode), &lexicon);
        assert_eq!(a, b);
    }
}

#[test]
fn test_fixed_section_order() {
    let doc = Document::build(&alu(), &ctx(DisplayMode::ValueInspection), &lexicon());
    assert_eq!(
        section_at(&doc, 0),
        &Section::Header("Arithmetic Logic Unit".to_string())
    );
    assert_eq!(
        section_at(&doc, 1),
        &Section::Identity {
            id: "alu".to_string(),
            marker: None,
        }
    );
    assert_eq!(
        section_at(&doc, 2),
        &Section::Description(vec!["Performs arithmetic.".to_string(), "And logic.".to_string()])
    );
    assert!(matches!(section_at(&doc, 3), Section::Inputs(_)));
    assert!(matches!(section_at(&doc, 4), Section::Outputs(_)));
    assert_eq!(doc.sections.len(), 5);
}

#[test]
fn test_synchronous_marker() {
    let mut unit = alu();
    unit.synchronous = true;
    let doc = Document::build(&unit, &ctx(DisplayMode::ValueInspection), &lexicon());
    assert_eq!(
        section_at(&doc, 1),
        &Section::Identity {
            id: "alu".to_string(),
            marker: Some("synchronous".to_string()),
        }
    );
}

#[test]
fn test_custom_description_overrides_lookup() {
    let mut unit = alu();
    unit.custom_descriptions
        .insert("en".to_string(), "first line\nsecond line".to_string());
    let doc = Document::build(&unit, &ctx(DisplayMode::ValueInspection), &lexicon());
    assert_eq!(
        section_at(&doc, 2),
        &Section::Description(vec!["first line".to_string(), "second line".to_string()])
    );
}

#[test]
fn test_custom_description_for_other_language_is_ignored() {
    let mut unit = alu();
    unit.custom_descriptions
        .insert("pt".to_string(), "unused".to_string());
    let doc = Document::build(&unit, &ctx(DisplayMode::ValueInspection), &lexicon());
    assert_eq!(
        section_at(&doc, 2),
        &Section::Description(vec!["Performs arithmetic.".to_string(), "And logic.".to_string()])
    );
}

#[test]
fn test_registers_only_for_extended_alu_inspecting_values() {
    let mut unit = alu();
    unit.kind = UnitKind::ExtendedAlu;
    unit.hi = 0xAB;
    unit.lo = 0xCD;

    let doc = Document::build(&unit, &ctx(DisplayMode::ValueInspection), &lexicon());
    assert_eq!(
        section_at(&doc, 3),
        &Section::Registers {
            hi: "0x000000AB".to_string(),
            lo: "0x000000CD".to_string(),
        }
    );

    let doc = Document::build(&unit, &ctx(DisplayMode::PerformanceAnalysis), &lexicon());
    assert!(!doc.sections.iter().any(|s| matches!(s, Section::Registers { .. })));

    let doc = Document::build(&alu(), &ctx(DisplayMode::ValueInspection), &lexicon());
    assert!(!doc.sections.iter().any(|s| matches!(s, Section::Registers { .. })));
}

#[test]
fn test_latency_section_only_in_performance_analysis() {
    let doc = Document::build(&alu(), &ctx(DisplayMode::PerformanceAnalysis), &lexicon());
    assert_eq!(
        section_at(&doc, 3),
        &Section::Latency {
            text: "Latency: 5 ps".to_string(),
            hint: "double-click to change".to_string(),
        }
    );

    let doc = Document::build(&alu(), &ctx(DisplayMode::ValueInspection), &lexicon());
    assert!(!doc.sections.iter().any(|s| matches!(s, Section::Latency { .. })));
}

#[test]
fn test_pin_rows_skip_disconnected_and_keep_declared_order() {
    let mut unit = alu();
    unit.inputs.insert(
        1,
        Pin {
            id: "unwired".to_string(),
            connected: false,
            ..Pin::default()
        },
    );
    let doc = Document::build(&unit, &ctx(DisplayMode::ValueInspection), &lexicon());
    let Section::Inputs(rows) = section_at(&doc, 3) else {
        panic!("expected inputs section");
    };
    let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, ["in1", "in2"]);
}

#[test]
fn test_input_rows_show_values_or_pin_latency() {
    let doc = Document::build(&alu(), &ctx(DisplayMode::ValueInspection), &lexicon());
    let Section::Inputs(rows) = section_at(&doc, 3) else {
        panic!("expected inputs section");
    };
    assert_eq!(rows[0].text, "0x00000010");
    assert_eq!(rows[1].text, "0x00000020");

    let doc = Document::build(&alu(), &ctx(DisplayMode::PerformanceAnalysis), &lexicon());
    let Section::Inputs(rows) = section_at(&doc, 4) else {
        panic!("expected inputs section");
    };
    assert_eq!(rows[0].text, "7 ps");
    assert_eq!(rows[1].text, "9 ps");
}

#[test]
fn test_output_rows_use_unit_accumulated_latency() {
    let mut unit = alu();
    unit.outputs.push(pin("out2", 0x44, 13));

    let doc = Document::build(&unit, &ctx(DisplayMode::PerformanceAnalysis), &lexicon());
    let Section::Outputs(rows) = section_at(&doc, 5) else {
        panic!("expected outputs section");
    };
    // all outputs complete together: the unit's 40 ps, not 11 or 13
    assert_eq!(rows[0].text, "40 ps");
    assert_eq!(rows[1].text, "40 ps");

    let doc = Document::build(&unit, &ctx(DisplayMode::ValueInspection), &lexicon());
    let Section::Outputs(rows) = section_at(&doc, 4) else {
        panic!("expected outputs section");
    };
    assert_eq!(rows[0].text, "0x00000030");
    assert_eq!(rows[1].text, "0x00000044");
}

#[test]
fn test_control_path_rows_are_flagged() {
    let mut unit = alu();
    unit.inputs[1].in_control_path = true;
    let doc = Document::build(&unit, &ctx(DisplayMode::ValueInspection), &lexicon());
    let Section::Inputs(rows) = section_at(&doc, 3) else {
        panic!("expected inputs section");
    };
    assert_eq!(
        rows[1],
        PinRow {
            id: "in2".to_string(),
            text: "0x00000020".to_string(),
            in_control_path: true,
        }
    );
    assert!(!rows[0].in_control_path);
}

#[test]
fn test_view_refresh_tracks_unit_state() {
    let lexicon = lexicon();
    let ctx = ctx(DisplayMode::PerformanceAnalysis);
    let mut unit = alu();
    let mut view = UnitView::new(&unit, &ctx, &lexicon);
    let before = view.clone();

    unit.latency = 9;
    view.refresh(&unit, &ctx, &lexicon);
    assert_ne!(view, before);
    assert!(view.document.sections.iter().any(|s| matches!(
        s,
        Section::Latency { text, .. } if text == "Latency: 9 ps"
    )));
}
