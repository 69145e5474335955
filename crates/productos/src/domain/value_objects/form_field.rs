//! FormField - Editable fields of the product form

/// One editable input of the product form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Description,
    Price,
    Stock,
}

impl FormField {
    /// Fields in the order the form shows them
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Description,
        FormField::Price,
        FormField::Stock,
    ];

    /// Human-readable input label
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Description => "Description",
            FormField::Price => "Price",
            FormField::Stock => "Stock",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormField::Name => write!(f, "name"),
            FormField::Description => write!(f, "description"),
            FormField::Price => write!(f, "price"),
            FormField::Stock => write!(f, "stock"),
        }
    }
}
