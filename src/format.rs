use strum::{Display, EnumIter};

/// How raw pin and register values are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum NumberFormat {
    Binary,
    Decimal,
    Hexadecimal,
}

/// Renders a raw value in the active display format.
pub fn format_value(value: u32, format: NumberFormat) -> String {
    match format {
        NumberFormat::Binary => format!("0b{:b}", value),
        NumberFormat::Decimal => format!("{}", value),
        NumberFormat::Hexadecimal => format!("0x{:08X}", value),
    }
}

#[test]
fn test_format_value() {
    assert_eq!(format_value(10, NumberFormat::Binary), "0b1010");
    assert_eq!(format_value(10, NumberFormat::Decimal), "10");
    assert_eq!(format_value(10, NumberFormat::Hexadecimal), "0x0000000A");
    assert_eq!(format_value(0, NumberFormat::Binary), "0b0");
    assert_eq!(
        format_value(u32::MAX, NumberFormat::Hexadecimal),
        "0xFFFFFFFF"
    );
}
