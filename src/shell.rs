// 🖥️ Console shell - main menu, per-kind submenus, record intake
//
// Text matches the original console programs so scripted sessions and
// dump files stay compatible. End of input leaves every loop.

use crate::counter::InstanceCounter;
use crate::entities::{Address, Doctor, GymMember, Patient, Record, Trainer};
use crate::error::{InputFormatError, ValidationError};
use crate::export;
use crate::facility::Facility;
use crate::input::{parse_int, parse_salary, TokenReader};
use crate::repository::Repository;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

// ============================================================================
// CONSOLE
// ============================================================================

/// Prompting on top of a token reader and an output sink
pub struct Console<R, W> {
    input: TokenReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Console {
            input: TokenReader::new(input),
            out,
        }
    }

    fn prompt(&mut self, label: &str) -> io::Result<()> {
        write!(self.out, "{}", label)?;
        self.out.flush()
    }

    /// Single-token answer; `None` at end of input
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        self.prompt(label)?;
        self.input.next_token()
    }

    /// Numeric answer, asked again until it parses; `None` at end of input
    pub fn ask_number<T>(
        &mut self,
        label: &str,
        parse: fn(&str) -> Result<T, InputFormatError>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(token) = self.ask(label)? else {
                return Ok(None);
            };

            match parse(&token) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    debug!(%err, "re-prompting");
                    self.input.discard_line();
                }
            }
        }
    }

    /// Menu choice. A malformed token is dropped along with its line and
    /// reported as `Some(None)` so the caller redraws the menu.
    fn choice(&mut self) -> io::Result<Option<Option<i32>>> {
        let Some(token) = self.ask("Choice: ")? else {
            return Ok(None);
        };

        match parse_int(&token) {
            Ok(choice) => Ok(Some(Some(choice))),
            Err(_) => {
                self.input.discard_line();
                Ok(Some(None))
            }
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }
}

// ============================================================================
// INTAKE - per-kind menu text and prompts
// ============================================================================

/// A record kind the shell can list, save and collect from the console.
pub trait Intake: Record + Sized {
    /// Entry in the main menu ("Gym Members")
    const MENU_LABEL: &'static str;
    /// Submenu heading ("Gym Member" → "--- Gym Member Menu ---")
    const MENU_TITLE: &'static str;
    /// Noun in submenu actions ("Member" → "Add Member")
    const NOUN: &'static str;
    /// Fixed dump-file name
    const EXPORT_FILE: &'static str;

    /// Value of the variant-specific field as read from the console
    type Detail;

    fn read_detail<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
    ) -> io::Result<Option<Self::Detail>>;

    fn build(
        name: String,
        id: i32,
        address: Address,
        detail: Self::Detail,
        counter: &InstanceCounter,
    ) -> Result<Self, ValidationError>;
}

impl Intake for GymMember {
    const MENU_LABEL: &'static str = "Gym Members";
    const MENU_TITLE: &'static str = "Gym Member";
    const NOUN: &'static str = "Member";
    const EXPORT_FILE: &'static str = "members.txt";

    type Detail = i32;

    fn read_detail<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Option<i32>> {
        console.ask_number("Membership Level (1-Basic,2-Premium,3-VIP): ", parse_int)
    }

    fn build(
        name: String,
        id: i32,
        address: Address,
        level: i32,
        counter: &InstanceCounter,
    ) -> Result<Self, ValidationError> {
        GymMember::new(name, id, address, level, counter)
    }
}

impl Intake for Trainer {
    const MENU_LABEL: &'static str = "Trainers";
    const MENU_TITLE: &'static str = "Trainer";
    const NOUN: &'static str = "Trainer";
    const EXPORT_FILE: &'static str = "trainers.txt";

    type Detail = f64;

    fn read_detail<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Option<f64>> {
        console.ask_number("Salary: ", parse_salary)
    }

    fn build(
        name: String,
        id: i32,
        address: Address,
        salary: f64,
        _counter: &InstanceCounter,
    ) -> Result<Self, ValidationError> {
        Ok(Trainer::new(name, id, address, salary))
    }
}

impl Intake for Patient {
    const MENU_LABEL: &'static str = "Patients";
    const MENU_TITLE: &'static str = "Patient";
    const NOUN: &'static str = "Patient";
    const EXPORT_FILE: &'static str = "patients.txt";

    type Detail = String;

    fn read_detail<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
    ) -> io::Result<Option<String>> {
        console.ask("Ward Type (General/ICU/VIP): ")
    }

    fn build(
        name: String,
        id: i32,
        address: Address,
        ward: String,
        counter: &InstanceCounter,
    ) -> Result<Self, ValidationError> {
        Patient::new(name, id, address, &ward, counter)
    }
}

impl Intake for Doctor {
    const MENU_LABEL: &'static str = "Doctors";
    const MENU_TITLE: &'static str = "Doctor";
    const NOUN: &'static str = "Doctor";
    const EXPORT_FILE: &'static str = "doctors.txt";

    type Detail = f64;

    fn read_detail<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Option<f64>> {
        console.ask_number("Salary: ", parse_salary)
    }

    fn build(
        name: String,
        id: i32,
        address: Address,
        salary: f64,
        _counter: &InstanceCounter,
    ) -> Result<Self, ValidationError> {
        Ok(Doctor::new(name, id, address, salary))
    }
}

// ============================================================================
// SHELL
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Back,
    EndOfInput,
}

pub struct Shell<R, W> {
    console: Console<R, W>,
    output_dir: PathBuf,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W, output_dir: impl Into<PathBuf>) -> Self {
        Shell {
            console: Console::new(input, out),
            output_dir: output_dir.into(),
        }
    }

    /// Run the main menu until "Exit" or end of input
    pub fn run<P: Intake, S: Intake>(&mut self, facility: &mut Facility<P, S>) -> Result<()> {
        let (primaries, secondaries, counter) = facility.parts_mut();

        loop {
            write!(
                self.console.out,
                "\n=== MAIN MENU ===\n1. {}\n2. {}\n3. Exit\n",
                P::MENU_LABEL,
                S::MENU_LABEL
            )
            .context("failed to draw main menu")?;

            let flow = match self.console.choice().context("failed to read menu choice")? {
                None => Flow::EndOfInput,
                Some(Some(1)) => submenu(&mut self.console, primaries, counter, &self.output_dir)?,
                Some(Some(2)) => submenu(&mut self.console, secondaries, counter, &self.output_dir)?,
                Some(Some(3)) => break,
                Some(_) => Flow::Back,
            };

            if flow == Flow::EndOfInput {
                info!("end of input, leaving");
                break;
            }
        }

        Ok(())
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }
}

fn submenu<T: Intake, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repo: &mut Repository<T>,
    counter: &InstanceCounter,
    output_dir: &Path,
) -> Result<Flow> {
    loop {
        write!(
            console.out,
            "\n--- {title} Menu ---\n1. Add {noun}\n2. View {noun}s\n3. Save {noun}s\n4. Back\n",
            title = T::MENU_TITLE,
            noun = T::NOUN
        )
        .context("failed to draw submenu")?;

        match console.choice().context("failed to read menu choice")? {
            None => return Ok(Flow::EndOfInput),
            Some(Some(1)) => {
                if add_record(console, repo, counter)? == Flow::EndOfInput {
                    return Ok(Flow::EndOfInput);
                }
            }
            Some(Some(2)) => repo
                .display_all(&mut console.out)
                .context("failed to list records")?,
            Some(Some(3)) => save_records(console, repo, output_dir)?,
            Some(Some(4)) => return Ok(Flow::Back),
            Some(_) => {}
        }
    }
}

/// Collect one record; validation failures are reported and nothing is added
fn add_record<T: Intake, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repo: &mut Repository<T>,
    counter: &InstanceCounter,
) -> Result<Flow> {
    let Some((name, id, address, detail)) =
        read_fields::<T, R, W>(console).context("failed to read record fields")?
    else {
        return Ok(Flow::EndOfInput);
    };

    match T::build(name, id, address, detail, counter) {
        Ok(record) => repo.add(record),
        Err(err) => {
            warn!(kind = T::KIND, id, field = err.field(), "record rejected: {}", err);
            writeln!(console.out, "Error: {}", err).context("failed to report error")?;
        }
    }

    Ok(Flow::Back)
}

type Fields<D> = (String, i32, Address, D);

fn read_fields<T: Intake, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<Fields<T::Detail>>> {
    let Some(name) = console.ask("Name: ")? else {
        return Ok(None);
    };
    let Some(id) = console.ask_number("ID: ", parse_int)? else {
        return Ok(None);
    };
    let Some(city) = console.ask("City: ")? else {
        return Ok(None);
    };
    let Some(street) = console.ask("Street: ")? else {
        return Ok(None);
    };
    let Some(detail) = T::read_detail(console)? else {
        return Ok(None);
    };

    Ok(Some((name, id, Address::new(city, street), detail)))
}

fn save_records<T: Intake, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repo: &Repository<T>,
    output_dir: &Path,
) -> Result<()> {
    let path = output_dir.join(T::EXPORT_FILE);

    // export::save logs the failure detail; the console only gets the notice
    let reported = match export::save(&path, repo.all()) {
        Ok(summary) => writeln!(console.out, "Saved to {}", summary.path.display()),
        Err(_) => writeln!(console.out, "File error."),
    };

    reported.context("failed to report save result")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::{Gym, Hospital};
    use std::fs;
    use std::io::Cursor;

    type TestShell = Shell<Cursor<Vec<u8>>, Vec<u8>>;

    fn shell(script: &str, dir: &Path) -> TestShell {
        Shell::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), dir)
    }

    fn transcript(shell: &TestShell) -> String {
        String::from_utf8(shell.console().output().clone()).unwrap()
    }

    #[test]
    fn test_add_view_and_save_members() {
        let dir = tempfile::tempdir().unwrap();
        let mut gym = Gym::new();
        let mut sh = shell(
            "1\n1\nAlice\n1\nNYC\n5th\n2\n1\nBob 2 LA Sunset 3\n2\n3\n4\n3\n",
            dir.path(),
        );

        sh.run(&mut gym).unwrap();

        assert_eq!(gym.primaries().len(), 2);
        assert_eq!(gym.live_count(), 2);

        let out = transcript(&sh);
        assert!(out.contains("=== MAIN MENU ===\n1. Gym Members\n2. Trainers\n3. Exit\nChoice: "));
        assert!(out.contains("--- Gym Member Menu ---\n1. Add Member\n2. View Members\n3. Save Members\n4. Back\n"));
        assert!(out.contains("Membership Level (1-Basic,2-Premium,3-VIP): "));
        assert!(out.contains(
            "[GymMember] 1 | Alice | Membership Level: 2\n[GymMember] 2 | Bob | Membership Level: 3\n"
        ));

        let path = dir.path().join("members.txt");
        assert!(out.contains(&format!("Saved to {}", path.display())));
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "GymMember | 1 | Alice | Level: 2 | City: NYC\nGymMember | 2 | Bob | Level: 3 | City: LA\n"
        );
    }

    #[test]
    fn test_invalid_level_reports_error_and_adds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut gym = Gym::new();
        let mut sh = shell("1\n1\nAlice 1 NYC 5th 7\n2\n4\n3\n", dir.path());

        sh.run(&mut gym).unwrap();

        assert!(gym.primaries().is_empty());
        assert_eq!(gym.live_count(), 0);

        let out = transcript(&sh);
        assert!(out.contains("Error: Membership level must be 1 (Basic), 2 (Premium), or 3 (VIP)\n"));
        assert!(out.contains("No records found.\n"));
    }

    #[test]
    fn test_malformed_numbers_reprompt() {
        let dir = tempfile::tempdir().unwrap();
        let mut gym = Gym::new();
        let mut sh = shell(
            "2\n1\nBob\nabc junk\n10\nBoston\nMain\nlots\n-200\n4\n3\n",
            dir.path(),
        );

        sh.run(&mut gym).unwrap();

        let trainers = gym.secondaries().all();
        assert_eq!(trainers.len(), 1);
        assert_eq!(trainers[0].identity().id(), 10);
        assert_eq!(trainers[0].salary(), -200.0);

        let out = transcript(&sh);
        assert_eq!(out.matches("ID: ").count(), 2);
        assert_eq!(out.matches("Salary: ").count(), 2);
    }

    #[test]
    fn test_malformed_menu_choice_redraws_menu() {
        let dir = tempfile::tempdir().unwrap();
        let mut gym = Gym::new();
        let mut sh = shell("x\n3\n", dir.path());

        sh.run(&mut gym).unwrap();

        assert_eq!(transcript(&sh).matches("=== MAIN MENU ===").count(), 2);
    }

    #[test]
    fn test_hospital_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut hospital = Hospital::new();
        let mut sh = shell(
            "1\n1\nAlice 1 NYC 5th Lobby\n1\nAlice 1 NYC 5th ICU\n3\n4\n\
             2\n1\nHouse 42 Princeton Main 1000.5\n3\n4\n3\n",
            dir.path(),
        );

        sh.run(&mut hospital).unwrap();

        assert_eq!(hospital.primaries().len(), 1);
        assert_eq!(hospital.secondaries().len(), 1);

        let out = transcript(&sh);
        assert!(out.contains("1. Patients\n2. Doctors\n3. Exit\n"));
        assert!(out.contains("--- Doctor Menu ---\n1. Add Doctor\n2. View Doctors\n"));
        assert!(out.contains("Error: Ward type must be General, ICU, or VIP\n"));

        assert_eq!(
            fs::read_to_string(dir.path().join("patients.txt")).unwrap(),
            "Patient | 1 | Alice | Ward: ICU | City: NYC\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("doctors.txt")).unwrap(),
            "Doctor | 42 | House | Salary: $1000.5 | City: Princeton\n"
        );
    }

    #[test]
    fn test_save_failure_reports_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("not-there");
        let mut gym = Gym::new();
        let mut sh = shell("2\n3\n4\n3\n", &missing);

        sh.run(&mut gym).unwrap();

        assert!(transcript(&sh).contains("File error.\n"));
        assert!(!missing.exists());
    }

    #[test]
    fn test_end_of_input_mid_record_exits() {
        let dir = tempfile::tempdir().unwrap();
        let mut gym = Gym::new();
        let mut sh = shell("1\n1\nAlice\n1\n", dir.path());

        sh.run(&mut gym).unwrap();

        assert!(gym.primaries().is_empty());
        assert!(transcript(&sh).ends_with("City: "));
    }

    #[test]
    fn test_view_twice_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let mut gym = Gym::new();
        let mut sh = shell("2\n1\nBob 1 NYC 5th 50\n2\n2\n4\n3\n", dir.path());

        sh.run(&mut gym).unwrap();

        let out = transcript(&sh);
        assert_eq!(out.matches("[Trainer] 1 | Bob | Salary: $50\n").count(), 2);
    }
}
