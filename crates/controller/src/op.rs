//! Operation lifecycle

use procurex_core::ConsoleError;

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Hands out increasing tickets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketCounter(u64);

impl TicketCounter {
    pub fn issue(&mut self) -> Ticket {
        self.0 += 1;
        Ticket(self.0)
    }
}

/// State of one kind of network operation
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OpState {
    /// Never started
    #[default]
    Idle,
    /// Waiting for the response to this ticket
    Pending(Ticket),
    Succeeded,
    Failed(ConsoleError),
}

impl OpState {
    pub fn is_pending(&self) -> bool {
        matches!(self, OpState::Pending(_))
    }

    /// Whether `ticket` is the request this operation is waiting for
    pub fn awaits(&self, ticket: Ticket) -> bool {
        *self == OpState::Pending(ticket)
    }

    pub fn error(&self) -> Option<&ConsoleError> {
        match self {
            OpState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Record an outcome
    pub fn settle<T>(&mut self, result: &Result<T, ConsoleError>) {
        *self = match result {
            Ok(_) => OpState::Succeeded,
            Err(err) => OpState::Failed(err.clone()),
        };
    }
}
