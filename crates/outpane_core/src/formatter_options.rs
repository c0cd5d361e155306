//! Translation from debugger value-formatter type options to type-formatter options.
//!
//! The two option sets are versioned independently, so bits are mapped by
//! meaning through a table rather than by numeric value.

use bitflags::bitflags;

bitflags! {
    /// Type display options requested by a debugger value formatter.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ValueFormatterTypeOptions: u32 {
        /// Use language keywords (`int`, `string`) for intrinsic types.
        const INTRINSIC_TYPE_KEYWORDS = 0x0000_0001;
        /// Show metadata tokens.
        const TOKENS                  = 0x0000_0002;
        /// Show namespaces.
        const NAMESPACES              = 0x0000_0004;
        /// Use digit separators in numbers.
        const DIGIT_SEPARATORS        = 0x0000_0008;
        /// Format numbers as decimal.
        const DECIMAL                 = 0x0000_0010;
    }
}

bitflags! {
    /// Options understood by the type formatter.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeFormatterOptions: u32 {
        const NAMESPACES              = 0x0000_0001;
        const INTRINSIC_TYPE_KEYWORDS = 0x0000_0002;
        const TOKENS                  = 0x0000_0004;
    }
}

const TRANSLATION: &[(ValueFormatterTypeOptions, TypeFormatterOptions)] = &[
    (
        ValueFormatterTypeOptions::INTRINSIC_TYPE_KEYWORDS,
        TypeFormatterOptions::INTRINSIC_TYPE_KEYWORDS,
    ),
    (ValueFormatterTypeOptions::TOKENS, TypeFormatterOptions::TOKENS),
    (ValueFormatterTypeOptions::NAMESPACES, TypeFormatterOptions::NAMESPACES),
];

/// Map value-formatter options onto type-formatter options.
///
/// Bits without a counterpart are dropped.
pub fn to_type_formatter_options(options: ValueFormatterTypeOptions) -> TypeFormatterOptions {
    TRANSLATION
        .iter()
        .filter(|(source, _)| options.contains(*source))
        .fold(TypeFormatterOptions::empty(), |acc, (_, target)| acc | *target)
}

impl From<ValueFormatterTypeOptions> for TypeFormatterOptions {
    fn from(value: ValueFormatterTypeOptions) -> Self {
        to_type_formatter_options(value)
    }
}
