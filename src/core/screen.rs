//! Binds two amount inputs and two currency selectors to a [`Converter`]
//!
//! Toolkits usually report a programmatic `set_text` as a text change, just
//! like a keystroke. The screen remembers which input it last wrote and
//! swallows the first change notification from that input, so the
//! controller only ever sees user edits.

use super::controller::{ConversionState, Converter, Recomputed, Side};
use super::widgets::{AmountInput, CurrencySelector};
use anyhow::Result;
use tracing::debug;

pub struct Screen<I, S>
where
    I: AmountInput,
    S: CurrencySelector,
{
    converter: Converter,
    inputs: [I; 2],
    selectors: [S; 2],
    // Input whose pending change notification is our own write
    writing: Option<Side>,
}

impl<I, S> Screen<I, S>
where
    I: AmountInput,
    S: CurrencySelector,
{
    /// Wires the widgets to `converter`, pushing its current currencies and
    /// amounts into them.
    pub fn new(converter: Converter, inputs: [I; 2], selectors: [S; 2]) -> Self {
        let mut screen = Self {
            converter,
            inputs,
            selectors,
            writing: None,
        };
        for side in [Side::A, Side::B] {
            let state = screen.converter.state();
            let (code, amount) = (state.currency(side).to_string(), state.amount(side).to_string());
            screen.selectors[index(side)].select(&code);
            screen.inputs[index(side)].set_text(&amount);
        }
        screen
    }

    pub fn state(&self) -> &ConversionState {
        self.converter.state()
    }

    pub fn input(&self, side: Side) -> &I {
        &self.inputs[index(side)]
    }

    pub fn input_mut(&mut self, side: Side) -> &mut I {
        &mut self.inputs[index(side)]
    }

    pub fn selector_mut(&mut self, side: Side) -> &mut S {
        &mut self.selectors[index(side)]
    }

    /// Text change notification from the input on `side`.
    ///
    /// Returns `None` when the notification is the echo of the screen's own
    /// write to that input. Any other event ends the echo window.
    pub fn text_changed(&mut self, side: Side) -> Option<Recomputed> {
        if self.writing.take() == Some(side) {
            debug!(%side, "Skipping notification for computed write");
            return None;
        }

        let text = self.inputs[index(side)].text();
        let update = self.converter.on_field_edited(side, &text);
        self.write(&update);
        Some(update)
    }

    pub fn focus_gained(&mut self, side: Side) {
        self.writing = None;
        self.converter.on_focus_gained(side);
    }

    /// Selection change notification from the selector on `side`.
    pub fn selection_changed(&mut self, side: Side) -> Result<Recomputed> {
        self.writing = None;
        let code = self.selectors[index(side)].selected_code();
        let update = self.converter.on_currency_changed(side, &code)?;
        self.write(&update);
        Ok(update)
    }

    fn write(&mut self, update: &Recomputed) {
        self.writing = Some(update.side);
        self.inputs[index(update.side)].set_text(&update.text);
    }
}

fn index(side: Side) -> usize {
    match side {
        Side::A => 0,
        Side::B => 1,
    }
}
