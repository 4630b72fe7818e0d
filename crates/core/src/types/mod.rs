//! Core types for the Ironwood dealer platform.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod analytics;
pub mod dealer;
pub mod id;
pub mod inventory;
pub mod lead;
pub mod notice;
pub mod order;
pub mod status;
pub mod support;
pub mod timeline;
pub mod warranty;

pub use analytics::{DealerAnalytics, MonthlySales, ProductSales};
pub use dealer::{Coordinate, DealerProfile, DealerRecord, DealerTier, DistanceResult};
pub use id::*;
pub use inventory::{Availability, InventoryItem};
pub use lead::{ActivityEntry, Lead, LeadSource};
pub use notice::{Announcement, AnnouncementCategory, Notification, NotificationKind};
pub use order::{Order, OrderLineItem, ShippingInfo};
pub use status::*;
pub use support::{SupportTicket, TicketCategory, TicketPriority};
pub use timeline::{Timeline, TimelineEntry};
pub use warranty::{Message, WarrantyClaim, WarrantyRegistration};
