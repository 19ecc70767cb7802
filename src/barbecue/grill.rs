use log::{debug, warn};
use std::sync::Mutex;
use uuid::Uuid;

pub type ParticipantId = String;

/// What happened in one recorded grill operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrillEvent {
    Approached,
    SteppedAway,
    Designated,
}

/// One entry in the grill's action history
#[derive(Debug, Clone)]
pub struct GrillAction {
    pub id: String,
    pub participant: ParticipantId,
    pub event: GrillEvent,
}

/// The three grill operations shared by all grill implementations
pub trait Barbecue: Send + Sync {
    /// Designate the participant allowed to take the next turn
    fn set_next_active(&self, next_in_line: &ParticipantId);

    /// Take position at the grill
    fn approach_safely(&self, participant: &ParticipantId);

    /// Leave the grill again
    fn step_away_safely(&self, participant: &ParticipantId);

    /// Who is currently designated to take the next turn
    fn next_in_line(&self) -> ParticipantId;

    /// Everything that happened at the grill so far, in order
    fn history(&self) -> Vec<GrillAction>;

    /// How often a participant approached out of turn or while the grill was occupied
    fn collision_count(&self) -> u64;
}

struct GrillState {
    next_in_line: ParticipantId,
    at_grill: Vec<ParticipantId>,
    history: Vec<GrillAction>,
    collisions: u64,
}

impl GrillState {
    fn record(&mut self, participant: &ParticipantId, event: GrillEvent) {
        self.history.push(GrillAction {
            id: Uuid::new_v4().to_string(),
            participant: participant.clone(),
            event,
        });
    }
}

/// A grill without any turn arbitration: every approach proceeds immediately,
/// regardless of whose turn it is or whether someone is already standing at
/// the grill. Out-of-turn and overlapping approaches are counted as
/// collisions. The interior `Mutex` only keeps the bookkeeping consistent.
pub struct ChaoticGrill {
    state: Mutex<GrillState>,
}

impl ChaoticGrill {
    /// Create a grill with the given participant designated to go first
    pub fn new(first_participant: ParticipantId) -> Self {
        Self {
            state: Mutex::new(GrillState {
                next_in_line: first_participant,
                at_grill: Vec::new(),
                history: Vec::new(),
                collisions: 0,
            }),
        }
    }
}

impl Barbecue for ChaoticGrill {
    fn set_next_active(&self, next_in_line: &ParticipantId) {
        let mut state = self.state.lock().unwrap();
        state.next_in_line = next_in_line.clone();
        state.record(next_in_line, GrillEvent::Designated);
        debug!("next at the grill: {}", next_in_line);
    }

    fn approach_safely(&self, participant: &ParticipantId) {
        let mut state = self.state.lock().unwrap();
        if !state.at_grill.is_empty() || *participant != state.next_in_line {
            state.collisions += 1;
            warn!(
                "{} approached out of turn (next in line: {}, at grill: {:?})",
                participant, state.next_in_line, state.at_grill
            );
        }
        state.at_grill.push(participant.clone());
        state.record(participant, GrillEvent::Approached);
        debug!("{} approached the grill", participant);
    }

    fn step_away_safely(&self, participant: &ParticipantId) {
        let mut state = self.state.lock().unwrap();
        state.at_grill.retain(|p| p != participant);
        state.record(participant, GrillEvent::SteppedAway);
        debug!("{} stepped away from the grill", participant);
    }

    fn next_in_line(&self) -> ParticipantId {
        self.state.lock().unwrap().next_in_line.clone()
    }

    fn history(&self) -> Vec<GrillAction> {
        self.state.lock().unwrap().history.clone()
    }

    fn collision_count(&self) -> u64 {
        self.state.lock().unwrap().collisions
    }
}
