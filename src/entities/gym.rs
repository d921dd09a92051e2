// 🏋️ Gym records - members (validated level) and trainers (salary)

use super::{format_general, Address, Identity, Record};
use crate::counter::{InstanceCounter, InstanceGuard};
use crate::error::ValidationError;

// ============================================================================
// MEMBERSHIP LEVEL
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipLevel {
    Basic,
    Premium,
    Vip,
}

impl MembershipLevel {
    pub const ALL: [MembershipLevel; 3] = [
        MembershipLevel::Basic,
        MembershipLevel::Premium,
        MembershipLevel::Vip,
    ];

    /// Numeric level as entered on the console and written to dump files
    pub fn level(&self) -> i32 {
        match self {
            MembershipLevel::Basic => 1,
            MembershipLevel::Premium => 2,
            MembershipLevel::Vip => 3,
        }
    }
}

impl TryFrom<i32> for MembershipLevel {
    type Error = ValidationError;

    fn try_from(level: i32) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(MembershipLevel::Basic),
            2 => Ok(MembershipLevel::Premium),
            3 => Ok(MembershipLevel::Vip),
            given => Err(ValidationError::InvalidMembershipLevel { given }),
        }
    }
}

// ============================================================================
// GYM MEMBER
// ============================================================================

/// Gym member. Counted by the facility's live-instance counter while alive.
#[derive(Debug, Clone)]
pub struct GymMember {
    identity: Identity,
    level: MembershipLevel,
    _live: InstanceGuard,
}

impl GymMember {
    /// Fails when `level` is not 1, 2 or 3; the counter is only touched on
    /// success.
    pub fn new(
        name: impl Into<String>,
        id: i32,
        address: Address,
        level: i32,
        counter: &InstanceCounter,
    ) -> Result<Self, ValidationError> {
        let level = MembershipLevel::try_from(level)?;

        Ok(GymMember {
            identity: Identity::new(name, id, address),
            level,
            _live: counter.acquire(),
        })
    }

    pub fn membership_level(&self) -> MembershipLevel {
        self.level
    }
}

impl Record for GymMember {
    const KIND: &'static str = "GymMember";

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn display_field(&self) -> (&'static str, String) {
        ("Membership Level", self.level.level().to_string())
    }

    fn export_field(&self) -> (&'static str, String) {
        ("Level", self.level.level().to_string())
    }
}

// ============================================================================
// TRAINER
// ============================================================================

/// Trainer. Salary is not validated; negative values are kept as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Trainer {
    identity: Identity,
    salary: f64,
}

impl Trainer {
    pub fn new(name: impl Into<String>, id: i32, address: Address, salary: f64) -> Self {
        Trainer {
            identity: Identity::new(name, id, address),
            salary,
        }
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }
}

impl Record for Trainer {
    const KIND: &'static str = "Trainer";

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
