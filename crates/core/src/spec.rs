//! Typed parsers for catalog specification values.
//!
//! Catalog specifications are free-form `(name, value)` strings. Each
//! hardware attribute the rules care about has exactly one parser here.
//! Every parser returns `None` on anything it does not recognise so callers
//! can treat the attribute as unknown.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Specification key aliases
// ---------------------------------------------------------------------------

/// CPU / motherboard socket.
pub const SOCKET_KEYS: &[&str] = &["Socket", "Loại socket", "CPU Socket", "Socket hỗ trợ"];

/// RAM module generation, or generations a motherboard accepts.
pub const MEMORY_TYPE_KEYS: &[&str] = &[
    "Loại RAM",
    "Hỗ trợ RAM",
    "Chuẩn RAM",
    "Memory Type",
    "Loại bộ nhớ",
    "Bộ nhớ hỗ trợ",
];

/// Number of DIMM slots on a motherboard.
pub const RAM_SLOT_KEYS: &[&str] = &["Số khe RAM", "Khe RAM", "Memory Slots", "RAM Slots"];

/// Rated output of a power supply.
pub const PSU_WATTAGE_KEYS: &[&str] = &["Công suất", "Wattage", "Công suất tối đa", "Power"];

/// Physical length of a graphics card.
pub const GPU_LENGTH_KEYS: &[&str] = &["Chiều dài", "Length", "Chiều dài card"];

/// Longest graphics card a case accepts.
pub const CASE_MAX_GPU_LENGTH_KEYS: &[&str] = &[
    "Chiều dài VGA tối đa",
    "Hỗ trợ VGA dài tối đa",
    "Max GPU Length",
];

/// Height of a CPU cooler.
pub const COOLER_HEIGHT_KEYS: &[&str] = &["Chiều cao", "Height", "Chiều cao tản nhiệt"];

/// Tallest CPU cooler a case accepts.
pub const CASE_MAX_COOLER_HEIGHT_KEYS: &[&str] = &[
    "Chiều cao tản nhiệt tối đa",
    "Max CPU Cooler Height",
    "Max Cooler Height",
];

/// Motherboard form factor.
pub const FORM_FACTOR_KEYS: &[&str] = &["Kích thước", "Form Factor", "Chuẩn mainboard"];

/// Motherboard form factors a case accepts.
pub const CASE_FORM_FACTOR_KEYS: &[&str] = &[
    "Hỗ trợ mainboard",
    "Hỗ trợ bo mạch chủ",
    "Mainboard Support",
    "Motherboard Support",
];

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

const NUMBER_PATTERN: &str = r"\d+(?:[.,]\d+)*";

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NUMBER_PATTERN).expect("valid regex"));
static BARE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\s*({NUMBER_PATTERN})\s*$")).expect("valid regex")
});
static WATTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)({NUMBER_PATTERN})\s*(?:w|watts?)\b")).expect("valid regex")
});
static MILLIMETRES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)({NUMBER_PATTERN})\s*mm\b")).expect("valid regex")
});
static DDR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)DDR\s*([345])").expect("valid regex"));
static FORM_FACTOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:(e-?atx|extended[- ]?atx)|(micro[- ]?atx|m-?atx)|(mini[- ]?itx|itx)|(atx))\b",
    )
    .expect("valid regex")
});

/// Parse the first numeric token in `raw`, rounding any fraction up.
///
/// Separator groups of exactly three digits are thousands separators
/// (`1.000`, `1,200`); anything else is a decimal point. When both `.` and
/// `,` appear, the last one is the decimal point (`1,000.5`, `1.000,5`).
pub fn parse_number(raw: &str) -> Option<u32> {
    NUMBER_RE.find(raw).and_then(|m| number_token(m.as_str()))
}

/// Parse a wattage: a number followed by a `W`/`watt` unit, or a value that
/// is nothing but a number. `"1x 16-pin"` is not a wattage.
pub fn parse_watts(raw: &str) -> Option<u32> {
    WATTS_RE
        .captures(raw)
        .and_then(|c| number_token(&c[1]))
        .or_else(|| bare_number(raw))
}

/// Parse a length: a number followed by `mm`, or a value that is nothing
/// but a number.
pub fn parse_millimetres(raw: &str) -> Option<u32> {
    MILLIMETRES_RE
        .captures(raw)
        .and_then(|c| number_token(&c[1]))
        .or_else(|| bare_number(raw))
}

fn bare_number(raw: &str) -> Option<u32> {
    BARE_NUMBER_RE
        .captures(raw)
        .and_then(|c| number_token(&c[1]))
}

fn number_token(token: &str) -> Option<u32> {
    let (integer, fraction) = if token.contains('.') && token.contains(',') {
        let point = token.rfind(['.', ','])?;
        let integer: String = token[..point]
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        (integer, &token[point + 1..])
    } else {
        let mut groups = token.split(['.', ',']);
        let head = groups.next()?;
        let rest: Vec<&str> = groups.collect();
        if !rest.is_empty() && rest.iter().all(|g| g.len() == 3) {
            (format!("{head}{}", rest.concat()), "")
        } else {
            (head.to_string(), rest.first().copied().unwrap_or(""))
        }
    };

    let mut value: u64 = integer.parse().ok()?;
    if fraction.bytes().any(|b| b != b'0') {
        value += 1;
    }
    u32::try_from(value).ok()
}

// ---------------------------------------------------------------------------
// Socket
// ---------------------------------------------------------------------------

/// A CPU socket, normalised so that `"LGA 1700"`, `"lga-1700"`,
/// `"FCLGA1700"` and a bare `"1700"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Socket {
    Lga1200,
    Lga1700,
    Lga1851,
    Am4,
    Am5,
    Other(String),
}

impl Socket {
    pub fn parse(raw: &str) -> Option<Self> {
        // Only the first listed socket counts ("AM5, hỗ trợ Ryzen 7000").
        let head = raw.split([',', '(', ';', '/']).next().unwrap_or("");
        let normalized: String = head
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_uppercase();
        let normalized = normalized
            .strip_prefix("SOCKET")
            .unwrap_or(&normalized)
            .to_string();
        if normalized.is_empty() {
            return None;
        }
        // (token, bare pin count, socket)
        let known = [
            ("LGA1200", Some("1200"), Self::Lga1200),
            ("LGA1700", Some("1700"), Self::Lga1700),
            ("LGA1851", Some("1851"), Self::Lga1851),
            ("AM4", None, Self::Am4),
            ("AM5", None, Self::Am5),
        ];
        Some(
            known
                .into_iter()
                .find(|(token, bare, _)| {
                    normalized.contains(token) || *bare == Some(normalized.as_str())
                })
                .map(|(_, _, socket)| socket)
                .unwrap_or(Self::Other(normalized)),
        )
    }
}

impl fmt::Display for Socket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lga1200 => f.write_str("LGA1200"),
            Self::Lga1700 => f.write_str("LGA1700"),
            Self::Lga1851 => f.write_str("LGA1851"),
            Self::Am4 => f.write_str("AM4"),
            Self::Am5 => f.write_str("AM5"),
            Self::Other(s) => f.write_str(s),
        }
    }
}

// ---------------------------------------------------------------------------
// Memory generation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemoryGeneration {
    Ddr3,
    Ddr4,
    Ddr5,
}

impl MemoryGeneration {
    /// The first `DDRn` token in `raw`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::parse_all(raw).into_iter().next()
    }

    /// Every distinct `DDRn` token in `raw`, in order of appearance.
    ///
    /// Motherboards occasionally list more than one ("DDR4/DDR5").
    pub fn parse_all(raw: &str) -> Vec<Self> {
        let mut found = Vec::new();
        for cap in DDR_RE.captures_iter(raw) {
            let generation = match &cap[1] {
                "3" => Self::Ddr3,
                "4" => Self::Ddr4,
                _ => Self::Ddr5,
            };
            if !found.contains(&generation) {
                found.push(generation);
            }
        }
        found
    }
}

impl fmt::Display for MemoryGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ddr3 => f.write_str("DDR3"),
            Self::Ddr4 => f.write_str("DDR4"),
            Self::Ddr5 => f.write_str("DDR5"),
        }
    }
}

// ---------------------------------------------------------------------------
// Form factor
// ---------------------------------------------------------------------------

/// Motherboard form factor, ordered smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormFactor {
    MiniItx,
    MicroAtx,
    Atx,
    EAtx,
}

impl FormFactor {
    /// The first form factor named in `raw`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::parse_all(raw).into_iter().next()
    }

    /// Every form factor named in a list such as `"ATX, Micro-ATX, Mini-ITX"`.
    ///
    /// Names only match as whole words, so `"Size ATX"` is plain ATX.
    pub fn parse_all(raw: &str) -> Vec<Self> {
        let mut found = Vec::new();
        for cap in FORM_FACTOR_RE.captures_iter(raw) {
            let ff = if cap.get(1).is_some() {
                Self::EAtx
            } else if cap.get(2).is_some() {
                Self::MicroAtx
            } else if cap.get(3).is_some() {
                Self::MiniItx
            } else {
                Self::Atx
            };
            if !found.contains(&ff) {
                found.push(ff);
            }
        }
        found
    }
}

impl fmt::Display for FormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MiniItx => f.write_str("Mini-ITX"),
            Self::MicroAtx => f.write_str("Micro-ATX"),
            Self::Atx => f.write_str("ATX"),
            Self::EAtx => f.write_str("E-ATX"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_plain_and_with_units() {
        assert_eq!(parse_number("650"), Some(650));
        assert_eq!(parse_number("120 W"), Some(120));
        assert_eq!(parse_number("khoảng 65W"), Some(65));
        assert_eq!(parse_number("n/a"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn number_fractions_round_up() {
        assert_eq!(parse_number("267.5 mm"), Some(268));
        assert_eq!(parse_number("1,5"), Some(2));
        assert_eq!(parse_number("300.0"), Some(300));
    }

    #[test]
    fn number_thousands_separators() {
        assert_eq!(parse_number("1.000W"), Some(1000));
        assert_eq!(parse_number("1,200 W"), Some(1200));
        assert_eq!(parse_number("1.000.000"), Some(1_000_000));
    }

    #[test]
    fn number_mixed_separators_use_last_as_decimal_point() {
        assert_eq!(parse_watts("1,000.5W"), Some(1001));
        assert_eq!(parse_watts("1.000,5 W"), Some(1001));
        assert_eq!(parse_number("1,234.0"), Some(1234));
    }

    #[test]
    fn number_overflow_is_unknown() {
        assert_eq!(parse_number("99999999999"), None);
    }

    #[test]
    fn watts_prefers_unit_suffixed_number() {
        assert_eq!(parse_watts("80 Plus Bronze 650W"), Some(650));
        assert_eq!(parse_watts("750 watts"), Some(750));
        assert_eq!(parse_watts("550"), Some(550));
        assert_eq!(parse_watts(" 550 "), Some(550));
    }

    #[test]
    fn watts_ignores_numbers_without_a_unit_inside_text() {
        assert_eq!(parse_watts("1x 16-pin"), None);
        assert_eq!(parse_watts("80 Plus Gold"), None);
        assert_eq!(parse_millimetres("2 slot"), None);
    }

    #[test]
    fn millimetres_prefers_unit_suffixed_number() {
        assert_eq!(parse_millimetres("3 fan, 320 mm"), Some(320));
        assert_eq!(parse_millimetres("155"), Some(155));
    }

    #[test]
    fn socket_normalisation() {
        assert_eq!(Socket::parse("LGA 1700"), Some(Socket::Lga1700));
        assert_eq!(Socket::parse("lga-1700"), Some(Socket::Lga1700));
        assert_eq!(Socket::parse("Socket AM5"), Some(Socket::Am5));
        assert_eq!(Socket::parse("AM4, hỗ trợ Ryzen 5000"), Some(Socket::Am4));
        assert_eq!(Socket::parse("Intel LGA1851"), Some(Socket::Lga1851));
        assert_eq!(Socket::parse("FCLGA1700"), Some(Socket::Lga1700));
        assert_eq!(
            Socket::parse("sTR5"),
            Some(Socket::Other("STR5".to_string()))
        );
        assert_eq!(Socket::parse("   "), None);
    }

    #[test]
    fn bare_pin_count_is_the_lga_socket() {
        assert_eq!(Socket::parse("1700"), Some(Socket::Lga1700));
        assert_eq!(Socket::parse("Socket 1200"), Some(Socket::Lga1200));
        assert_eq!(Socket::parse("1851"), Some(Socket::Lga1851));
        assert_eq!(Socket::parse("1151"), Some(Socket::Other("1151".to_string())));
    }

    #[test]
    fn memory_generation_tokens() {
        assert_eq!(MemoryGeneration::parse("DDR5-6000"), Some(MemoryGeneration::Ddr5));
        assert_eq!(MemoryGeneration::parse("ddr4 3200MHz"), Some(MemoryGeneration::Ddr4));
        assert_eq!(
            MemoryGeneration::parse_all("DDR4 / DDR5"),
            vec![MemoryGeneration::Ddr4, MemoryGeneration::Ddr5]
        );
        assert_eq!(MemoryGeneration::parse("16GB"), None);
    }

    #[test]
    fn form_factor_lists() {
        assert_eq!(
            FormFactor::parse_all("ATX, Micro-ATX, Mini-ITX"),
            vec![FormFactor::Atx, FormFactor::MicroAtx, FormFactor::MiniItx]
        );
        assert_eq!(FormFactor::parse("mATX"), Some(FormFactor::MicroAtx));
        assert_eq!(FormFactor::parse("E-ATX"), Some(FormFactor::EAtx));
        assert_eq!(FormFactor::parse("Mid Tower"), None);
        assert_eq!(FormFactor::parse("Extended ATX"), Some(FormFactor::EAtx));
        assert_eq!(FormFactor::parse("Micro ATX"), Some(FormFactor::MicroAtx));
    }

    #[test]
    fn form_factor_names_match_whole_words_only() {
        assert_eq!(FormFactor::parse("Size ATX"), Some(FormFactor::Atx));
        assert_eq!(FormFactor::parse("Khuôn khổ ATX"), Some(FormFactor::Atx));
        assert_eq!(FormFactor::parse("ATXL"), None);
    }

    #[test]
    fn form_factor_ordering_is_by_size() {
        assert!(FormFactor::MiniItx < FormFactor::MicroAtx);
        assert!(FormFactor::Atx < FormFactor::EAtx);
    }
}
