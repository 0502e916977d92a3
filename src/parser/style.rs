//! Inline `style` attribute splitting.
//!
//! Only splits `property:value` pairs on `;`. There is no cascade, no
//! shorthand expansion and no comment handling.

/// A single `property:value` pair from an inline style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub property: &'a str,
    pub value: &'a str,
}

impl Declaration<'_> {
    /// True for properties that paint shapes (`fill`, `stroke`, and any
    /// property whose name contains either word).
    pub fn is_paint(&self) -> bool {
        self.property.contains("fill") || self.property.contains("stroke")
    }
}

/// Iterate over the declarations in a style string.
///
/// Parts without a `:` are skipped. Property and value are trimmed; the value
/// is everything after the first `:`.
pub fn declarations(style: &str) -> impl Iterator<Item = Declaration<'_>> {
    style.split(';').filter_map(|part| {
        let (property, value) = part.split_once(':')?;
        Some(Declaration {
            property: property.trim(),
            value: value.trim(),
        })
    })
}
