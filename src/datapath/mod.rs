pub mod description;
pub mod latency_editor;
pub mod style;

#[cfg(test)]
mod description_tests;

use std::collections::BTreeMap;

use strum::{Display, EnumIter};

use crate::format::NumberFormat;
use crate::locale::Lexicon;
use description::Document;
use style::UnitStyle;

/// Unit latencies are expressed in this fixed unit.
pub const LATENCY_UNIT: &str = "ps";

/// Closed taxonomy of datapath units, assigned by the simulation engine
/// at construction and fixed for the unit's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum UnitKind {
    /// Fan-out point with a single governing input.
    Fork,
    /// Splits a value into bit ranges.
    Distributor,
    /// Joins values into one wider value.
    Concatenator,
    /// Constant source, rendered as a bare label.
    Constant,
    /// Arithmetic unit with HI/LO auxiliary registers.
    ExtendedAlu,
    /// Any other boxed unit.
    Plain,
}

/// What the diagram is currently presenting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum DisplayMode {
    /// Current data values on every pin.
    ValueInspection,
    /// Latencies and accumulated latencies.
    PerformanceAnalysis,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// View settings owned by the diagram container, passed in explicitly so
/// the style and description derivations stay pure.
#[derive(Clone, Debug)]
pub struct ViewContext {
    pub mode: DisplayMode,
    pub theme: Theme,
    pub format: NumberFormat,
    pub lang: String,
}

/// One input or output of a unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pin {
    pub id: String,
    pub connected: bool,
    pub in_control_path: bool,
    pub value: u32,
    pub accumulated_latency: u32,
    /// Whether this pin's value affects the unit's current output
    /// selection. Meaningful for the governing input of a fork.
    pub relevant: bool,
}

/// Snapshot of one simulated processing unit, as supplied by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unit {
    pub kind: UnitKind,
    /// Synchronous units latch on the clock edge; orthogonal to `kind`.
    pub synchronous: bool,
    pub id: String,
    pub name_key: String,
    pub description_key: String,
    /// Per-language description overrides, keyed by language code.
    pub custom_descriptions: BTreeMap<String, String>,
    pub in_control_path: bool,
    /// Mutable only through the latency editor.
    pub latency: u32,
    /// Computed by the engine's performance pass; read-only here.
    pub accumulated_latency: u32,
    pub hi: u32,
    pub lo: u32,
    pub inputs: Vec<Pin>,
    pub outputs: Vec<Pin>,
}

impl Unit {
    /// Custom description for `lang`, if the unit carries one.
    pub fn custom_description(&self, lang: &str) -> Option<&str> {
        self.custom_descriptions.get(lang).map(String::as_str)
    }

    /// Relevance of the single governing input of a fork. Units without
    /// inputs report relevant so the style never degrades to gray.
    pub fn governing_input_relevant(&self) -> bool {
        self.inputs.first().map(|pin| pin.relevant).unwrap_or(true)
    }

    pub fn connected_inputs(&self) -> impl Iterator<Item = &Pin> {
        self.inputs.iter().filter(|pin| pin.connected)
    }

    pub fn connected_outputs(&self) -> impl Iterator<Item = &Pin> {
        self.outputs.iter().filter(|pin| pin.connected)
    }
}

/// One visual element of the diagram: a unit id plus the style and
/// tooltip document last derived for it. Ephemeral, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitView {
    pub unit_id: String,
    pub style: UnitStyle,
    pub document: Document,
}

impl UnitView {
    pub fn new(unit: &Unit, ctx: &ViewContext, lexicon: &impl Lexicon) -> Self {
        UnitView {
            unit_id: unit.id.clone(),
            style: UnitStyle::resolve(unit, ctx),
            document: Document::build(unit, ctx, lexicon),
        }
    }

    /// Re-derives style and document from the unit's current state.
    /// Called after every simulation step and after a latency edit.
    pub fn refresh(&mut self, unit: &Unit, ctx: &ViewContext, lexicon: &impl Lexicon) {
        self.style = UnitStyle::resolve(unit, ctx);
        self.document = Document::build(unit, ctx, lexicon);
    }
}
