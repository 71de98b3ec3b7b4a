//! Widget seams consumed by the screen, plus in-memory implementations

/// A text field holding an amount.
pub trait AmountInput {
    fn text(&self) -> String;
    /// Programmatic write. Hosts may report it back as a change notification.
    fn set_text(&mut self, text: &str);
}

/// A drop-down of currency codes.
pub trait CurrencySelector {
    fn selected_code(&self) -> String;
    fn select(&mut self, code: &str);
}

/// In-memory amount field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryInput {
    text: String,
    writes: usize,
}

impl MemoryInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of programmatic writes received so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Simulates a keystroke-level replacement of the whole text.
    pub fn type_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

impl AmountInput for MemoryInput {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.writes += 1;
        self.text = text.to_string();
    }
}

/// In-memory currency selector over a fixed list of options
#[derive(Debug, Clone, PartialEq)]
pub struct MemorySelector {
    options: Vec<String>,
    selected: String,
}

impl MemorySelector {
    pub fn new<I, S>(options: I, selected: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            selected: selected.to_string(),
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl CurrencySelector for MemorySelector {
    fn selected_code(&self) -> String {
        self.selected.clone()
    }

    fn select(&mut self, code: &str) {
        self.selected = code.to_string();
    }
}
