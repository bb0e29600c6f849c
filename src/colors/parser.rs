//! Textual color parsing
//!
//! Precedence, after trimming and lower-casing:
//! 1. `rgb(...)` / `rgba(...)` (a failure here is final)
//! 2. `r,g,b[,a]` when the text has commas and no parenthesis (falls through on failure)
//! 3. hex: `#`, `0x` or bare, with `_` separators, in 3/4/6/8 digit forms
//!
//! Alpha is accepted wherever a fourth channel is allowed, then dropped.

use super::color::{Color, ColorParseError};

pub(crate) fn parse_text(s: &str) -> Result<Color, ColorParseError> {
    let input = s.trim().to_lowercase();
    if input.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if input.starts_with("rgb(") || input.starts_with("rgba(") {
        return parse_rgb_func(&input);
    }

    if input.contains(',') && !input.contains('(') {
        if let Ok(color) = parse_csv(&input) {
            return Ok(color);
        }
    }

    parse_hex(&input)
}

fn parse_hex(s: &str) -> Result<Color, ColorParseError> {
    let hex = s.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    let hex = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);
    let hex = hex.replace('_', "");

    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHex(s.to_string()));
    }

    match hex.len() {
        // RGB or RGBA
        3 | 4 => {
            let digits = hex.as_bytes();
            Ok(Color::rgb(
                nibble(digits[0]) * 17,
                nibble(digits[1]) * 17,
                nibble(digits[2]) * 17,
            ))
        }
        // RRGGBB or RRGGBBAA
        6 | 8 => Ok(Color::rgb(
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
        )),
        _ => Err(ColorParseError::InvalidHex(s.to_string())),
    }
}

// Caller has already checked the digit
fn nibble(digit: u8) -> u8 {
    (digit as char).to_digit(16).unwrap_or(0) as u8
}

fn hex_byte(s: &str) -> Result<u8, ColorParseError> {
    u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidHex(s.to_string()))
}

fn parse_rgb_func(s: &str) -> Result<Color, ColorParseError> {
    let (open, close) = match (s.find('('), s.rfind(')')) {
        (Some(open), Some(close)) if close > open => (open, close),
        _ => return Err(ColorParseError::InvalidChannel(s.to_string())),
    };

    let name = s[..open].trim();
    let args = split_args(&s[open + 1..close]);

    match name {
        "rgb" => {
            expect_args(&args, 3)?;
            channels(&args)
        }
        "rgba" => {
            expect_args(&args, 4)?;
            let color = channels(&args)?;
            discard_alpha(args[3]);
            Ok(color)
        }
        other => Err(ColorParseError::UnknownFunction(other.to_string())),
    }
}

fn parse_csv(s: &str) -> Result<Color, ColorParseError> {
    let args = split_args(s);
    if args.len() != 3 && args.len() != 4 {
        return Err(ColorParseError::ArgumentCount {
            expected: 3,
            actual: args.len(),
        });
    }
    let color = channels(&args)?;
    if let Some(alpha) = args.get(3) {
        discard_alpha(alpha);
    }
    Ok(color)
}

fn expect_args(args: &[&str], expected: usize) -> Result<(), ColorParseError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ColorParseError::ArgumentCount {
            expected,
            actual: args.len(),
        })
    }
}

fn channels(args: &[&str]) -> Result<Color, ColorParseError> {
    Ok(Color::rgb(
        parse_channel(args[0])?,
        parse_channel(args[1])?,
        parse_channel(args[2])?,
    ))
}

/// Split on commas, dropping empty pieces
fn split_args(s: &str) -> Vec<&str> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// 0-255 integer or 0-100 percentage
fn parse_channel(s: &str) -> Result<u8, ColorParseError> {
    let s = s.trim();

    if let Some(percent) = s.strip_suffix('%') {
        return parse_percent(percent, s);
    }

    let value: i64 = s
        .parse()
        .map_err(|_| ColorParseError::InvalidChannel(s.to_string()))?;
    Ok(value.clamp(0, 255) as u8)
}

/// Percentage, 0.0-1.0 fraction, or 0-255 integer
fn parse_alpha(s: &str) -> Result<u8, ColorParseError> {
    let s = s.trim();

    if let Some(percent) = s.strip_suffix('%') {
        return parse_percent(percent, s);
    }

    if s.contains('.') {
        let value: f64 = s
            .parse()
            .map_err(|_| ColorParseError::InvalidChannel(s.to_string()))?;
        return Ok((value.clamp(0.0, 1.0) * 255.0).round() as u8);
    }

    parse_channel(s)
}

fn parse_percent(number: &str, original: &str) -> Result<u8, ColorParseError> {
    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| ColorParseError::InvalidChannel(original.to_string()))?;
    Ok((value.clamp(0.0, 100.0) * 255.0 / 100.0).round() as u8)
}

fn discard_alpha(s: &str) {
    if let Err(e) = parse_alpha(s) {
        crate::log!("Ignoring unparsable alpha channel: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Color, ColorParseError> {
        parse_text(s)
    }

    #[test]
    fn test_hex_forms() {
        assert_eq!(parse("#fff").unwrap(), Color::WHITE);
        assert_eq!(parse("#F00A").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(parse("#ff00").unwrap(), Color::rgb(255, 255, 0));
        assert_eq!(parse("#42A5F5").unwrap(), Color::rgb(0x42, 0xA5, 0xF5));
        assert_eq!(parse("#2196f3ff").unwrap(), Color::rgb(0x21, 0x96, 0xF3));
        assert_eq!(parse("0x757575").unwrap(), Color::rgb(0x75, 0x75, 0x75));
        assert_eq!(parse("  EEEEEE ").unwrap(), Color::rgb(0xEE, 0xEE, 0xEE));
        assert_eq!(parse("0xff_00_80").unwrap(), Color::rgb(255, 0, 128));
    }

    #[test]
    fn test_hex_invalid() {
        assert!(matches!(parse("#ff000"), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!(parse("#gg0000"), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!(parse("#é00"), Err(ColorParseError::InvalidHex(_))));
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse("   "), Err(ColorParseError::Empty));
    }

    #[test]
    fn test_rgb_function() {
        assert_eq!(parse("rgb(10, 20, 30)").unwrap(), Color::rgb(10, 20, 30));
        assert_eq!(parse("RGB(300,-5,7)").unwrap(), Color::rgb(255, 0, 7));
        assert_eq!(parse("rgba(1,2,3,0.5)").unwrap(), Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_rgb_function_percentages_clamp_before_scaling() {
        assert_eq!(parse("rgb(100%, 50%, 0%)").unwrap(), Color::rgb(255, 128, 0));
        assert_eq!(parse("rgb(150%, -10%, 20)").unwrap(), Color::rgb(255, 0, 20));
    }

    #[test]
    fn test_rgb_function_argument_count() {
        assert_eq!(
            parse("rgb(1,2)"),
            Err(ColorParseError::ArgumentCount {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            parse("rgba(1,2,3)"),
            Err(ColorParseError::ArgumentCount {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_rgb_function_failure_is_final() {
        assert!(matches!(
            parse("rgb(1.5,2,3)"),
            Err(ColorParseError::InvalidChannel(_))
        ));
        assert!(parse("rgb(1,2,3").is_err());
    }

    #[test]
    fn test_csv() {
        assert_eq!(parse("12,34,56").unwrap(), Color::rgb(12, 34, 56));
        assert_eq!(parse("12, 34, 56, 50%").unwrap(), Color::rgb(12, 34, 56));
        assert_eq!(parse("1,,2,3").unwrap(), Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_csv_alpha_is_discarded_even_if_invalid() {
        assert_eq!(parse("1,2,3,nope").unwrap(), Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_csv_failure_falls_through_to_hex() {
        // Not a valid CSV color and not valid hex either
        assert!(matches!(parse("1,2"), Err(ColorParseError::InvalidHex(_))));
    }

    #[test]
    fn test_alpha_forms() {
        assert_eq!(parse_alpha("0.5").unwrap(), 128);
        assert_eq!(parse_alpha("2.0").unwrap(), 255);
        assert_eq!(parse_alpha("50%").unwrap(), 128);
        assert_eq!(parse_alpha("300").unwrap(), 255);
    }
}
