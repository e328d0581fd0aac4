use super::{DisplayMode, LATENCY_UNIT, Unit, UnitKind, ViewContext};
use crate::format::format_value;
use crate::locale::Lexicon;

/// One row of the inputs or outputs table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PinRow {
    pub id: String,
    /// Formatted value in value inspection, accumulated latency in
    /// performance analysis.
    pub text: String,
    /// Control-path rows are tinted by the presenter.
    pub in_control_path: bool,
}

/// Ordered sections of a unit tooltip. The presenter renders whatever
/// is present; conditional sections are simply absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Section {
    /// Localized unit type name.
    Header(String),
    /// Unit identifier, with the localized synchronous marker if any.
    Identity { id: String, marker: Option<String> },
    /// Free-text description, one entry per line.
    Description(Vec<String>),
    /// HI and LO of an extended ALU, formatted per the active format.
    Registers { hi: String, lo: String },
    /// Current latency with the double-click edit hint.
    Latency { text: String, hint: String },
    Inputs(Vec<PinRow>),
    Outputs(Vec<PinRow>),
}

/// Tooltip document for one unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Document {
    /// Builds the tooltip document for `unit`. Pure: identical snapshot,
    /// mode, language and format yield an identical document.
    pub fn build(unit: &Unit, ctx: &ViewContext, lexicon: &impl Lexicon) -> Document {
        let lang = ctx.lang.as_str();
        let mut sections = Vec::new();

        sections.push(Section::Header(lexicon.lookup(lang, &unit.name_key)));

        let marker = unit.synchronous.then(|| lexicon.lookup(lang, "synchronous"));
        sections.push(Section::Identity {
            id: unit.id.clone(),
            marker,
        });

        let text = match unit.custom_description(lang) {
            Some(custom) => custom.to_string(),
            None => lexicon.lookup(lang, &unit.description_key),
        };
        sections.push(Section::Description(
            text.split('\n').map(str::to_string).collect(),
        ));

        if unit.kind == UnitKind::ExtendedAlu && ctx.mode == DisplayMode::ValueInspection {
            sections.push(Section::Registers {
                hi: format_value(unit.hi, ctx.format),
                lo: format_value(unit.lo, ctx.format),
            });
        }

        if ctx.mode == DisplayMode::PerformanceAnalysis {
            sections.push(Section::Latency {
                text: format!(
                    "{}: {} {}",
                    lexicon.lookup(lang, "latency"),
                    unit.latency,
                    LATENCY_UNIT
                ),
                hint: lexicon.lookup(lang, "double_click_to_change"),
            });
        }

        sections.push(Section::Inputs(
            unit.connected_inputs()
                .map(|pin| PinRow {
                    id: pin.id.clone(),
                    text: match ctx.mode {
                        DisplayMode::PerformanceAnalysis => {
                            format!("{} {}", pin.accumulated_latency, LATENCY_UNIT)
                        }
                        DisplayMode::ValueInspection => format_value(pin.value, ctx.format),
                    },
                    in_control_path: pin.in_control_path,
                })
                .collect(),
        ));

        // Every output of a unit completes at the same time, so latency
        // rows show the unit's accumulated latency, not the pin's.
        sections.push(Section::Outputs(
            unit.connected_outputs()
                .map(|pin| PinRow {
                    id: pin.id.clone(),
                    text: match ctx.mode {
                        DisplayMode::PerformanceAnalysis => {
                            format!("{} {}", unit.accumulated_latency, LATENCY_UNIT)
                        }
                        DisplayMode::ValueInspection => format_value(pin.value, ctx.format),
                    },
                    in_control_path: pin.in_control_path,
                })
                .collect(),
        ));

        Document { sections }
    }
}
