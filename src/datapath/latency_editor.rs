use log::{debug, warn};
use thiserror::Error;

use super::{DisplayMode, Unit, ViewContext};
use crate::locale::Lexicon;

/// Outcome of the modal latency prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptOutcome {
    Submitted(String),
    Cancelled,
}

/// Modal interaction surface owned by the UI shell. The prompt is a
/// synchronous pause point: the event thread logically stops until the
/// user answers.
pub trait LatencyPrompt {
    /// Asks for a new latency for `unit_id`, pre-filled with `current`.
    fn request_latency(&mut self, unit_id: &str, current: u32) -> PromptOutcome;

    /// Presents a validation error. No return value.
    fn show_error(&mut self, message: &str);
}

/// Hooks owned by the diagram container, invoked in order after a
/// latency change.
pub trait DiagramHost {
    /// Recomputes accumulated latencies across the whole diagram.
    fn recalculate_performance(&mut self);

    /// Re-derives the style and description of the diagram's elements.
    fn refresh(&mut self);

    /// Requests a visual redraw.
    fn repaint(&mut self);
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LatencyInputError {
    #[error("not an integer: {0:?}")]
    InvalidInput(String),
    #[error("latency must be non-negative, got {0}")]
    Negative(i64),
}

/// Editor phases. AwaitingInput and Applying are only observable from
/// within a [`LatencyEditor::double_click`] call; between gestures the
/// editor is always Idle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Idle,
    AwaitingInput,
    Applying,
}

/// Result of one double-click gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// The gesture arrived outside performance analysis mode.
    Ignored,
    Cancelled,
    Applied(u32),
    Rejected(LatencyInputError),
}

/// Drives the edit flow for one gesture at a time. Gestures are UI
/// events on a single thread, so flows never overlap; a concurrent host
/// must serialize calls itself.
#[derive(Debug, Default)]
pub struct LatencyEditor {
    state: EditorState,
}

impl LatencyEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Runs one edit flow: prompt, validate, apply, propagate.
    ///
    /// On a valid value the unit's latency is set and the host's
    /// recalculation, refresh and repaint hooks run in that order.
    /// Cancellation and invalid input leave the unit untouched and
    /// invoke no hooks; invalid input additionally raises one localized
    /// error notification through the prompt.
    pub fn double_click<P, H, L>(
        &mut self,
        unit: &mut Unit,
        ctx: &ViewContext,
        lexicon: &L,
        prompt: &mut P,
        host: &mut H,
    ) -> EditOutcome
    where
        P: LatencyPrompt,
        H: DiagramHost,
        L: Lexicon + ?Sized,
    {
        if ctx.mode != DisplayMode::PerformanceAnalysis {
            return EditOutcome::Ignored;
        }

        self.state = EditorState::AwaitingInput;
        let outcome = match prompt.request_latency(&unit.id, unit.latency) {
            PromptOutcome::Cancelled => EditOutcome::Cancelled,
            PromptOutcome::Submitted(text) => match parse_latency(&text) {
                Ok(latency) => {
                    self.state = EditorState::Applying;
                    unit.latency = latency;
                    host.recalculate_performance();
                    host.refresh();
                    host.repaint();
                    debug!("latency of {} set to {} {}", unit.id, latency, super::LATENCY_UNIT);
                    EditOutcome::Applied(latency)
                }
                Err(err) => {
                    warn!("rejected latency input for {}: {}", unit.id, err);
                    prompt.show_error(&lexicon.lookup(&ctx.lang, "invalid_value"));
                    EditOutcome::Rejected(err)
                }
            },
        };
        self.state = EditorState::Idle;
        outcome
    }
}

/// Validates raw prompt text as a latency value.
pub fn parse_latency(text: &str) -> Result<u32, LatencyInputError> {
    let value: i64 = text
        .trim()
        .parse()
        .map_err(|_| LatencyInputError::InvalidInput(text.to_string()))?;
    if value < 0 {
        return Err(LatencyInputError::Negative(value));
    }
    u32::try_from(value).map_err(|_| LatencyInputError::InvalidInput(text.to_string()))
}
