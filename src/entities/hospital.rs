// 🏥 Hospital records - patients (validated ward) and doctors (salary)

use super::{format_general, Address, Identity, Record};
use crate::counter::{InstanceCounter, InstanceGuard};
use crate::error::ValidationError;
use std::str::FromStr;

// ============================================================================
// WARD TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WardType {
    General,
    Icu,
    Vip,
}

impl WardType {
    pub const ALL: [WardType; 3] = [WardType::General, WardType::Icu, WardType::Vip];

    pub fn as_str(&self) -> &'static str {
        match self {
            WardType::General => "General",
            WardType::Icu => "ICU",
            WardType::Vip => "VIP",
        }
    }
}

impl FromStr for WardType {
    type Err = ValidationError;

    /// Exact, case-sensitive match on "General", "ICU" or "VIP"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WardType::ALL
            .into_iter()
            .find(|ward| ward.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidWardType { given: s.to_string() })
    }
}

// ============================================================================
// PATIENT
// ============================================================================

/// Patient. Counted by the facility's live-instance counter while alive.
#[derive(Debug, Clone)]
pub struct Patient {
    identity: Identity,
    ward: WardType,
    _live: InstanceGuard,
}

impl Patient {
    pub fn new(
        name: impl Into<String>,
        id: i32,
        address: Address,
        ward: &str,
        counter: &InstanceCounter,
    ) -> Result<Self, ValidationError> {
        let ward = ward.parse::<WardType>()?;

        Ok(Patient {
            identity: Identity::new(name, id, address),
            ward,
            _live: counter.acquire(),
        })
    }

    pub fn ward(&self) -> WardType {
        self.ward
    }
}

impl Record for Patient {
    const KIND: &'static str = "Patient";

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn display_field(&self) -> (&'static str, String) {
        ("Ward", self.ward.as_str().to_string())
    }
}

// ============================================================================
// DOCTOR
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Doctor {
    identity: Identity,
    salary: f64,
}

impl Doctor {
    pub fn new(name: impl Into<String>, id: i32, address: Address, salary: f64) -> Self {
        Doctor {
            identity: Identity::new(name, id, address),
            salary,
        }
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }
}

impl Record for Doctor {
    const KIND: &'static str = "Doctor";

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn display_field(&self) -> (&'static str, String) {
        ("Salary", format!("${}", format_general(self.salary)))
    }
}

// ============================================================================
// TESTS
// ============================================================================
