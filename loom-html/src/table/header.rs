/// A table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHeader {
    /// Dotted property path looked up on each row.
    pub binding_path: String,
    /// Header cell text.
    pub caption: String,
    /// Whether the column gets a cell in the Razor row template.
    pub show_in_iteration: bool,
}

impl TableHeader {
    pub fn new(binding_path: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            binding_path: binding_path.into(),
            caption: caption.into(),
            show_in_iteration: true,
        }
    }

    /// Keep the header cell but leave the column out of the row template.
    pub fn hidden(mut self) -> Self {
        self.show_in_iteration = false;
        self
    }
}
