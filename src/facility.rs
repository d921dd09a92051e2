// 🏢 Facility - one domain's two repositories plus its live counter

use crate::counter::InstanceCounter;
use crate::entities::{Doctor, GymMember, Patient, Record, Trainer};
use crate::repository::Repository;

/// Primary records (members/patients) are counted while alive; secondary
/// records (trainers/doctors) are not.
pub struct Facility<P, S> {
    primaries: Repository<P>,
    secondaries: Repository<S>,
    live: InstanceCounter,
}

pub type Gym = Facility<GymMember, Trainer>;
pub type Hospital = Facility<Patient, Doctor>;

impl<P: Record, S: Record> Facility<P, S> {
    pub fn new() -> Self {
        Facility {
            primaries: Repository::new(),
            secondaries: Repository::new(),
            live: InstanceCounter::new(),
        }
    }

    /// Counter to pass to member/patient constructors
    pub fn counter(&self) -> &InstanceCounter {
        &self.live
    }

    /// Members/patients currently alive, in or out of the repository
    pub fn live_count(&self) -> usize {
        self.live.live()
    }

    pub fn primaries(&self) -> &Repository<P> {
        &self.primaries
    }

    pub fn secondaries(&self) -> &Repository<S> {
        &self.secondaries
    }

    /// Both repositories plus the counter, borrowed at once
    pub(crate) fn parts_mut(
        &mut self,
    ) -> (&mut Repository<P>, &mut Repository<S>, &InstanceCounter) {
        (&mut self.primaries, &mut self.secondaries, &self.live)
    }
}

impl<P: Record, S: Record> Default for Facility<P, S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Address;

    #[test]
    fn test_live_count_follows_members() {
        let mut gym = Gym::new();
        assert_eq!(gym.live_count(), 0);

        let member = GymMember::new("Alice", 1, Address::default(), 2, gym.counter()).unwrap();
        assert_eq!(gym.live_count(), 1);

        let (members, _, _) = gym.parts_mut();
        members.add(member);
        assert_eq!(gym.live_count(), 1);
        assert_eq!(gym.primaries().len(), 1);
    }

    #[test]
    fn test_invalid_patient_leaves_count_unchanged() {
        let hospital = Hospital::new();
        assert!(Patient::new("Alice", 1, Address::default(), "Lobby", hospital.counter()).is_err());
        assert_eq!(hospital.live_count(), 0);
        assert!(hospital.primaries().is_empty());
        assert!(hospital.secondaries().is_empty());
    }
}
