//! C# spelling of literal values

use crate::ast::Literal;

/// Escapes one character for use inside a string or char literal.
/// Quotes are left alone; callers escape the delimiter they use.
pub fn convert_char(ch: char) -> String {
    match ch {
        '\\' => "\\\\".to_string(),
        '\0' => "\\0".to_string(),
        '\u{7}' => "\\a".to_string(),
        '\u{8}' => "\\b".to_string(),
        '\u{c}' => "\\f".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        '\u{b}' => "\\v".to_string(),
        c if c.is_control() || (c.is_whitespace() && c != ' ') => unicode_escape(c),
        c => c.to_string(),
    }
}

/// Escapes a string body, without the surrounding quotes
pub fn convert_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '"' {
            out.push_str("\\\"");
        } else {
            out.push_str(&convert_char(ch));
        }
    }
    out
}

fn unicode_escape(ch: char) -> String {
    let code = ch as u32;
    if code > 0xFFFF {
        format!("\\U{:08x}", code)
    } else {
        format!("\\u{:04x}", code)
    }
}

/// Renders a literal the way C# source spells it
pub fn format_literal(value: &Literal) -> String {
    match value {
        Literal::Null => "null".to_string(),
        Literal::Bool(true) => "true".to_string(),
        Literal::Bool(false) => "false".to_string(),
        Literal::Char('\'') => "'\\''".to_string(),
        Literal::Char(ch) => format!("'{}'", convert_char(*ch)),
        Literal::String(text) => format!("\"{}\"", convert_string(text)),
        Literal::Int(v) => v.to_string(),
        Literal::UInt(v) => format!("{}u", v),
        Literal::Long(v) => format!("{}L", v),
        Literal::ULong(v) => format!("{}UL", v),
        Literal::Float(v) => {
            if v.is_nan() {
                "float.NaN".to_string()
            } else if v.is_infinite() {
                special_value("float", v.is_sign_positive())
            } else {
                format!("{}f", v)
            }
        }
        Literal::Double(v) => {
            if v.is_nan() {
                "double.NaN".to_string()
            } else if v.is_infinite() {
                special_value("double", v.is_sign_positive())
            } else {
                let mut number = v.to_string();
                if !number.contains(['.', 'e', 'E']) {
                    number.push_str(".0");
                }
                number
            }
        }
        Literal::Decimal(digits) => format!("{}m", digits),
    }
}

fn special_value(type_keyword: &str, positive: bool) -> String {
    let name = if positive {
        "PositiveInfinity"
    } else {
        "NegativeInfinity"
    };
    format!("{}.{}", type_keyword, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_suffixes() {
        assert_eq!(format_literal(&Literal::Int(-42)), "-42");
        assert_eq!(format_literal(&Literal::UInt(7)), "7u");
        assert_eq!(format_literal(&Literal::Long(7)), "7L");
        assert_eq!(format_literal(&Literal::ULong(7)), "7UL");
        assert_eq!(format_literal(&Literal::Decimal("1.50".into())), "1.50m");
    }

    #[test]
    fn test_floating_point_spelling() {
        assert_eq!(format_literal(&Literal::Double(1.0)), "1.0");
        assert_eq!(format_literal(&Literal::Double(2.5)), "2.5");
        assert_eq!(format_literal(&Literal::Double(-0.0)), "-0.0");
        assert_eq!(format_literal(&Literal::Float(1.0)), "1f");
        assert_eq!(format_literal(&Literal::Float(0.25)), "0.25f");
        assert_eq!(format_literal(&Literal::Double(f64::NAN)), "double.NaN");
        assert_eq!(
            format_literal(&Literal::Double(f64::NEG_INFINITY)),
            "double.NegativeInfinity"
        );
        assert_eq!(
            format_literal(&Literal::Float(f32::INFINITY)),
            "float.PositiveInfinity"
        );
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            format_literal(&Literal::String("say \"hi\"\n\tC:\\".into())),
            r#""say \"hi\"\n\tC:\\""#
        );
        assert_eq!(format_literal(&Literal::String("it's".into())), "\"it's\"");
        assert_eq!(convert_string("\u{1}\u{a0}"), "\\u0001\\u00a0");
    }

    #[test]
    fn test_char_escapes() {
        assert_eq!(format_literal(&Literal::Char('\'')), r"'\''");
        assert_eq!(format_literal(&Literal::Char('"')), "'\"'");
        assert_eq!(format_literal(&Literal::Char('\0')), r"'\0'");
        assert_eq!(format_literal(&Literal::Char('x')), "'x'");
        assert_eq!(convert_char('\u{b}'), "\\v");
    }
}
