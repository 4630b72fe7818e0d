//! Status lifecycles for orders, claims, leads, and tickets.
//!
//! Each status enum carries its legal transitions as a static adjacency
//! table. Write paths consult [`Lifecycle::can_transition_to`] before
//! mutating anything, so an illegal jump is rejected up front instead of
//! leaking into stored data.

use serde::{Deserialize, Serialize};

/// A status machine defined by a static adjacency table.
///
/// Implementors list the states reachable in one legal step. Everything
/// else (legality checks, terminality) derives from that table.
pub trait Lifecycle: Copy + Eq + Sized + 'static {
    /// States reachable from `self` in a single legal transition.
    fn successors(self) -> &'static [Self];

    /// Whether a direct transition from `self` to `next` is legal.
    fn can_transition_to(self, next: Self) -> bool {
        self.successors().contains(&next)
    }

    /// A terminal state admits no further transitions.
    fn is_terminal(self) -> bool {
        self.successors().is_empty()
    }
}

// =============================================================================
// Order
// =============================================================================

/// Order fulfillment status.
///
/// Orders move strictly forward: draft, submitted, confirmed,
/// in production, shipped, delivered. No skips, no reversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Draft,
    Submitted,
    Confirmed,
    InProduction,
    Shipped,
    Delivered,
}

impl Lifecycle for OrderStatus {
    fn successors(self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::Submitted],
            Self::Submitted => &[Self::Confirmed],
            Self::Confirmed => &[Self::InProduction],
            Self::InProduction => &[Self::Shipped],
            Self::Shipped => &[Self::Delivered],
            Self::Delivered => &[],
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Submitted => write!(f, "submitted"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::InProduction => write!(f, "in_production"),
            Self::Shipped => write!(f, "shipped"),
            Self::Delivered => write!(f, "delivered"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "submitted" => Ok(Self::Submitted),
            "confirmed" => Ok(Self::Confirmed),
            "in_production" => Ok(Self::InProduction),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

// =============================================================================
// Warranty claim
// =============================================================================

/// Warranty claim status.
///
/// Claims move strictly forward from submission to resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    #[default]
    Submitted,
    UnderReview,
    Approved,
    PartsShipped,
    Resolved,
}

impl Lifecycle for ClaimStatus {
    fn successors(self) -> &'static [Self] {
        match self {
            Self::Submitted => &[Self::UnderReview],
            Self::UnderReview => &[Self::Approved],
            Self::Approved => &[Self::PartsShipped],
            Self::PartsShipped => &[Self::Resolved],
            Self::Resolved => &[],
        }
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Submitted => write!(f, "submitted"),
            Self::UnderReview => write!(f, "under_review"),
            Self::Approved => write!(f, "approved"),
            Self::PartsShipped => write!(f, "parts_shipped"),
            Self::Resolved => write!(f, "resolved"),
        }
    }
}

impl std::str::FromStr for ClaimStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(Self::Submitted),
            "under_review" => Ok(Self::UnderReview),
            "approved" => Ok(Self::Approved),
            "parts_shipped" => Ok(Self::PartsShipped),
            "resolved" => Ok(Self::Resolved),
            _ => Err(format!("invalid claim status: {s}")),
        }
    }
}

// =============================================================================
// Lead
// =============================================================================

/// Sales lead status.
///
/// Leads move forward through the pipeline toward `won`. `lost` is
/// reachable from every non-terminal state; both `won` and `lost` are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    QuoteSent,
    Won,
    Lost,
}

impl Lifecycle for LeadStatus {
    fn successors(self) -> &'static [Self] {
        match self {
            Self::New => &[Self::Contacted, Self::Lost],
            Self::Contacted => &[Self::Qualified, Self::Lost],
            Self::Qualified => &[Self::QuoteSent, Self::Lost],
            Self::QuoteSent => &[Self::Won, Self::Lost],
            Self::Won | Self::Lost => &[],
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Contacted => write!(f, "contacted"),
            Self::Qualified => write!(f, "qualified"),
            Self::QuoteSent => write!(f, "quote_sent"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

impl std::str::FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "contacted" => Ok(Self::Contacted),
            "qualified" => Ok(Self::Qualified),
            "quote_sent" => Ok(Self::QuoteSent),
            "won" => Ok(Self::Won),
            "lost" => Ok(Self::Lost),
            _ => Err(format!("invalid lead status: {s}")),
        }
    }
}

// =============================================================================
// Support ticket
// =============================================================================

/// Support ticket status.
///
/// Tickets open, then oscillate between `in_progress` and
/// `awaiting_response` until resolved. `resolved` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    AwaitingResponse,
    Resolved,
}

impl Lifecycle for TicketStatus {
    fn successors(self) -> &'static [Self] {
        match self {
            Self::Open => &[Self::InProgress],
            Self::InProgress => &[Self::AwaitingResponse, Self::Resolved],
            Self::AwaitingResponse => &[Self::InProgress, Self::Resolved],
            Self::Resolved => &[],
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::InProgress => write!(f, "in_progress"),
            Self::AwaitingResponse => write!(f, "awaiting_response"),
            Self::Resolved => write!(f, "resolved"),
        }
    }
}

impl std::str::FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "awaiting_response" => Ok(Self::AwaitingResponse),
            "resolved" => Ok(Self::Resolved),
            _ => Err(format!("invalid ticket status: {s}")),
        }
    }
}
