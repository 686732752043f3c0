//! Attribute values and their parse/format strategies
//!
//! Every attribute carries one of a small closed set of value strategies.
//! Parsing is lenient about surrounding whitespace and token case;
//! formatting always produces the canonical text, so formatting a parsed
//! value is a fixed point regardless of how the input was spelled.

/// A typed attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Free text (labels).
    Text(String),
    /// Bounded integer (gate input count, clock durations).
    Int(i64),
    /// Canonical token from an enumerated set (facing, appearance).
    Token(&'static str),
    /// Bus width in bits.
    Width(u8),
    /// Unsigned constant rendered in hexadecimal.
    Hex(u64),
}

impl AttrValue {
    /// Canonical text form, matching what the persisted file schema stores.
    pub fn canonical(&self) -> String {
        match self {
            AttrValue::Text(s) => s.clone(),
            AttrValue::Int(v) => v.to_string(),
            AttrValue::Token(t) => (*t).to_string(),
            AttrValue::Width(w) => w.to_string(),
            AttrValue::Hex(v) => format!("{:#x}", v),
        }
    }
}

/// Parse/format strategy for one attribute.
#[derive(Debug, Clone)]
pub enum AttrType {
    /// Arbitrary text, stored as given (post-trim).
    Text,
    /// Integer within an inclusive range.
    Int { min: i64, max: i64 },
    /// Integer restricted to a fixed choice list.
    IntChoice { choices: &'static [i64] },
    /// One of a fixed set of lowercase tokens, matched case-insensitively.
    Tokens { tokens: &'static [&'static str] },
    /// Bit width, 1 through `max`.
    WidthBits { max: u8 },
    /// Unsigned constant; accepts decimal or 0x-prefixed hexadecimal.
    Hex,
}

impl AttrType {
    /// Parse override text into a typed value. The error is a short reason
    /// suitable for embedding in a diagnostic.
    pub fn parse(&self, text: &str) -> Result<AttrValue, String> {
        let text = text.trim();
        match self {
            AttrType::Text => Ok(AttrValue::Text(text.to_string())),
            AttrType::Int { min, max } => {
                let v = text
                    .parse::<i64>()
                    .map_err(|_| "not an integer".to_string())?;
                if v < *min || v > *max {
                    return Err(format!("out of range {}..={}", min, max));
                }
                Ok(AttrValue::Int(v))
            }
            AttrType::IntChoice { choices } => {
                let v = text
                    .parse::<i64>()
                    .map_err(|_| "not an integer".to_string())?;
                if !choices.contains(&v) {
                    let listed = choices
                        .iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    return Err(format!("must be one of {}", listed));
                }
                Ok(AttrValue::Int(v))
            }
            AttrType::Tokens { tokens } => {
                let lowered = text.to_ascii_lowercase();
                match tokens.iter().find(|t| **t == lowered) {
                    Some(token) => Ok(AttrValue::Token(token)),
                    None => Err(format!("must be one of {}", tokens.join(", "))),
                }
            }
            AttrType::WidthBits { max } => {
                let v = text
                    .parse::<u8>()
                    .map_err(|_| "not an integer".to_string())?;
                if v < 1 || v > *max {
                    return Err(format!("out of range 1..={}", max));
                }
                Ok(AttrValue::Width(v))
            }
            AttrType::Hex => {
                let lowered = text.to_ascii_lowercase();
                let v = match lowered.strip_prefix("0x") {
                    Some(hex) => {
                        u64::from_str_radix(hex, 16).map_err(|_| "not a number".to_string())?
                    }
                    None => lowered
                        .parse::<u64>()
                        .map_err(|_| "not a number".to_string())?,
                };
                Ok(AttrValue::Hex(v))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_round_trip() {
        let ty = AttrType::Text;
        let v = ty.parse("  hello  ").unwrap();
        assert_eq!(v.canonical(), "hello");
        assert_eq!(ty.parse(&v.canonical()).unwrap(), v);
    }

    #[test]
    fn test_int_range() {
        let ty = AttrType::Int { min: 2, max: 32 };
        assert_eq!(ty.parse("3").unwrap(), AttrValue::Int(3));
        assert_eq!(ty.parse(" 32 ").unwrap(), AttrValue::Int(32));
        assert!(ty.parse("1").is_err());
        assert!(ty.parse("33").is_err());
        assert!(ty.parse("three").is_err());
    }

    #[test]
    fn test_int_choice() {
        let ty = AttrType::IntChoice {
            choices: &[30, 50, 70],
        };
        assert_eq!(ty.parse("50").unwrap(), AttrValue::Int(50));
        let err = ty.parse("40").unwrap_err();
        assert!(err.contains("30, 50, 70"));
    }

    #[test]
    fn test_tokens_case_insensitive() {
        let ty = AttrType::Tokens {
            tokens: &["east", "west", "north", "south"],
        };
        assert_eq!(ty.parse("WEST").unwrap(), AttrValue::Token("west"));
        assert_eq!(ty.parse(" East ").unwrap(), AttrValue::Token("east"));
        assert!(ty.parse("up").is_err());
    }

    #[test]
    fn test_tokens_format_is_fixed_point() {
        let ty = AttrType::Tokens {
            tokens: &["classic", "evolution"],
        };
        let v = ty.parse("Classic").unwrap();
        assert_eq!(v.canonical(), "classic");
        assert_eq!(ty.parse(&v.canonical()).unwrap().canonical(), "classic");
    }

    #[test]
    fn test_width_bits() {
        let ty = AttrType::WidthBits { max: 64 };
        assert_eq!(ty.parse("8").unwrap(), AttrValue::Width(8));
        assert!(ty.parse("0").is_err());
        assert!(ty.parse("65").is_err());
    }

    #[test]
    fn test_hex_canonicalizes() {
        let ty = AttrType::Hex;
        assert_eq!(ty.parse("10").unwrap().canonical(), "0xa");
        assert_eq!(ty.parse("0xFF").unwrap().canonical(), "0xff");
        assert_eq!(ty.parse("0Xff").unwrap().canonical(), "0xff");
        assert!(ty.parse("0xzz").is_err());
        assert!(ty.parse("-1").is_err());
    }
}
