use serde::{Deserialize, Serialize};

/// Ticket category. Determines price and whether a seat is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    Adult,
    Child,
    /// Sits on an adult's lap: no seat, no charge.
    Infant,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    pub const fn occupies_seat(self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TicketType::Adult => "adult",
            TicketType::Child => "child",
            TicketType::Infant => "infant",
        }
    }
}

impl core::fmt::Display for TicketType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
