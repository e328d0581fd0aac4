use super::{DisplayMode, Theme, Unit, UnitKind, ViewContext};

/// Plain RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Control-path units, borders and tinted tooltip rows.
    pub const CONTROL: Color = Color::rgb(0, 130, 200);
    /// Fork whose governing input does not affect the current output.
    pub const IRRELEVANT: Color = Color::rgb(128, 128, 128);
}

/// Derived appearance of one unit. Recomputed on every refresh,
/// never stored in the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitStyle {
    pub fill: Option<Color>,
    pub border: Option<Color>,
    pub label: Color,
}

impl UnitStyle {
    pub fn border_visible(&self) -> bool {
        self.border.is_some()
    }

    /// Resolves a unit's appearance from its category, control-path
    /// membership, the theme and the display mode.
    ///
    /// Forks, concatenators and distributors are solid blocks in their
    /// path color; constants are bare labels; everything else is a boxed
    /// unit. A fork additionally turns gray while its governing input is
    /// irrelevant, but only when inspecting values: performance analysis
    /// cares about every path regardless of the current selection.
    pub fn resolve(unit: &Unit, ctx: &ViewContext) -> UnitStyle {
        let path_color = if unit.in_control_path {
            Color::CONTROL
        } else {
            match ctx.theme {
                Theme::Dark => Color::WHITE,
                Theme::Light => Color::BLACK,
            }
        };

        match unit.kind {
            UnitKind::Fork => {
                let color = if ctx.mode != DisplayMode::PerformanceAnalysis
                    && !unit.governing_input_relevant()
                {
                    Color::IRRELEVANT
                } else {
                    path_color
                };
                UnitStyle {
                    fill: Some(color),
                    border: Some(color),
                    label: Color::BLACK,
                }
            }
            UnitKind::Concatenator | UnitKind::Distributor => UnitStyle {
                fill: Some(path_color),
                border: Some(path_color),
                label: Color::BLACK,
            },
            UnitKind::Constant => UnitStyle {
                fill: None,
                border: None,
                label: path_color,
            },
            UnitKind::ExtendedAlu | UnitKind::Plain => {
                let accent = if unit.in_control_path {
                    Color::CONTROL
                } else {
                    Color::BLACK
                };
                UnitStyle {
                    fill: Some(Color::WHITE),
                    border: Some(accent),
                    label: accent,
                }
            }
        }
    }
}
