// Entity Models
//
// Each domain has two record families sharing one identity shape:
// - Gym: GymMember (validated level) + Trainer (salary)
// - Hospital: Patient (validated ward) + Doctor (salary)
//
// Records are immutable once built. Display and dump-file lines are
// fixed formats that existing consumers of the dump files depend on.

pub mod gym;
pub mod hospital;

pub use gym::{GymMember, MembershipLevel, Trainer};
pub use hospital::{Doctor, Patient, WardType};

use std::io::{self, Write};

// ============================================================================
// ADDRESS + IDENTITY
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub city: String,
    pub street: String,
}

impl Address {
    pub fn new(city: impl Into<String>, street: impl Into<String>) -> Self {
        Address {
            city: city.into(),
            street: street.into(),
        }
    }
}

/// Fields every record carries.
///
/// `id` is supplied by the caller and never checked for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    name: String,
    id: i32,
    address: Address,
}

impl Identity {
    pub fn new(name: impl Into<String>, id: i32, address: Address) -> Self {
        Identity {
            name: name.into(),
            id,
            address,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

// ============================================================================
// RECORD CAPABILITY
// ============================================================================

/// Shared capability of every record kind: identify, display, serialize.
pub trait Record {
    /// Variant tag used in both output formats ("GymMember", "Doctor", ...)
    const KIND: &'static str;

    fn identity(&self) -> &Identity;

    /// Label and rendered value of the variant-specific field, as shown on
    /// the console.
    fn display_field(&self) -> (&'static str, String);

    /// Label and rendered value written to dump files.
    fn export_field(&self) -> (&'static str, String) {
        self.display_field()
    }

    /// `[Kind] id | name | Label: value`
    fn display(&self) -> String {
        let identity = self.identity();
        let (label, value) = self.display_field();
        format!(
            "[{}] {} | {} | {}: {}",
            Self::KIND,
            identity.id(),
            identity.name(),
            label,
            value
        )
    }

    /// Writes `Kind | id | name | Label: value | City: city` plus newline.
    fn serialize<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let identity = self.identity();
        let (label, value) = self.export_field();
        writeln!(
            out,
            "{} | {} | {} | {}: {} | City: {}",
            Self::KIND,
            identity.id(),
            identity.name(),
            label,
            value,
            identity.address().city
        )
    }
}

// ============================================================================
// NUMBER RENDERING
// ============================================================================

const GENERAL_PRECISION: i32 = 6;

/// Render a float the way a default-configured C++ output stream does
/// (`%g`, 6 significant digits, no trailing zeros).
///
/// Example: 1000.5 → "1000.5", -200.0 → "-200", 1234567.0 → "1.23457e+06"
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Exponent after rounding to the target precision
    let sci = format!("{:.*e}", (GENERAL_PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };

    if exponent < -4 || exponent >= GENERAL_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (GENERAL_PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

// ============================================================================
// TESTS
// ============================================================================
