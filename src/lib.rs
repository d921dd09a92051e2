// Facility Records - Core Library
// Record entities, repositories and flat-file export for the gym and
// hospital record-keepers, plus the console shell that drives them.

pub mod config;
pub mod counter;
pub mod entities;
pub mod error;
pub mod export;
pub mod facility;
pub mod input;
pub mod repository;
pub mod shell;

// Re-export commonly used types
pub use config::{AppConfig, Domain};
pub use counter::{InstanceCounter, InstanceGuard};
pub use entities::{
    format_general, Address, Identity, Record,
    GymMember, MembershipLevel, Trainer,
    Patient, WardType, Doctor,
};
pub use error::{ExportError, InputFormatError, ValidationError};
pub use export::ExportSummary;
pub use facility::{Facility, Gym, Hospital};
pub use input::{parse_int, parse_salary, TokenReader};
pub use repository::{Repository, NO_RECORDS};
pub use shell::{Console, Intake, Shell};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
