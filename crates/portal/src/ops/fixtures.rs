//! Seed data for the mock operations backend.
//!
//! One dealer account (Lone Star Game Rooms, `d1` in the public directory)
//! with a representative spread of orders, leads, warranty work, tickets,
//! and stock across the product line. Entity numbers continue from the
//! highest seeded value, so the first created order is `IW-1006`.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use ironwood_core::{
    ActivityEntry, Announcement, AnnouncementCategory, AnnouncementId, Availability, ClaimId,
    ClaimStatus, DealerAnalytics, DealerId, DealerProfile, DealerTier, InventoryItem, Lead, LeadId,
    LeadSource, LeadStatus, Message, MonthlySales, Notification, NotificationId, NotificationKind,
    Order, OrderId, OrderLineItem, OrderStatus, ProductSales, RegistrationId, ShippingInfo,
    SupportTicket, TicketCategory, TicketId, TicketPriority, TicketStatus, Timeline, WarrantyClaim,
    WarrantyRegistration,
};

use super::mock::MockData;

const WAREHOUSE: &str = "Central (Tomball, TX)";

pub(super) fn seed() -> MockData {
    MockData {
        profile: profile(),
        orders: orders(),
        leads: leads(),
        registrations: registrations(),
        claims: claims(),
        tickets: tickets(),
        inventory: inventory(),
        notifications: notifications(),
        announcements: announcements(),
        analytics: analytics(),
    }
}

// Fixture clocks. Out-of-range arguments collapse to the epoch instead of
// panicking; every seeded date is in range.
fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

fn day(y: i32, mo: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap_or(NaiveDate::MIN)
}

fn dollars(amount: i64) -> Decimal {
    Decimal::from(amount)
}

fn profile() -> DealerProfile {
    DealerProfile {
        id: DealerId::new("d1"),
        name: "Lone Star Game Rooms".to_string(),
        contact_name: "Rachel Moreno".to_string(),
        email: "rachel@lonestargamerooms.com".to_string(),
        phone: "(281) 555-0114".to_string(),
        address: "21540 Stagecoach Rd".to_string(),
        city: "Tomball".to_string(),
        state: "TX".to_string(),
        zip: "77377".to_string(),
        tier: DealerTier::Premium,
        member_since: day(2019, 4, 12),
        territory: "Texas Gulf Coast".to_string(),
    }
}

// =============================================================================
// Orders
// =============================================================================

fn orders() -> Vec<Order> {
    vec![
        delivered_order(),
        in_production_order(),
        shipped_order(),
        confirmed_order(),
        draft_order(),
    ]
}

fn delivered_order() -> Order {
    let mut timeline = Timeline::new();
    timeline.record(OrderStatus::Submitted, ts(2026, 4, 2, 14, 30), None);
    timeline.record(OrderStatus::Confirmed, ts(2026, 4, 3, 9, 15), None);
    timeline.record(OrderStatus::InProduction, ts(2026, 4, 10, 8, 0), None);
    timeline.record(
        OrderStatus::Shipped,
        ts(2026, 5, 5, 16, 45),
        Some("Picked up by Saia LTL Freight".to_string()),
    );
    timeline.record(OrderStatus::Delivered, ts(2026, 5, 12, 11, 20), None);

    Order {
        id: OrderId::new("ord-1001"),
        order_number: "IW-1001".to_string(),
        dealer_id: DealerId::new("d1"),
        status: OrderStatus::Delivered,
        created: ts(2026, 4, 2, 14, 30),
        updated: ts(2026, 5, 12, 11, 20),
        line_items: vec![OrderLineItem {
            id: "li-1001-1".to_string(),
            product_slug: "caldwell".to_string(),
            product_name: "The Caldwell".to_string(),
            model: "Caldwell".to_string(),
            finish: "Windsor Cherry".to_string(),
            felt_color: Some("Championship Green".to_string()),
            size: "8 ft".to_string(),
            quantity: 1,
            unit_price: dollars(5295),
            total_price: dollars(5295),
            accessories: vec!["Premium Cue Kit".to_string()],
        }],
        subtotal: dollars(5295),
        shipping: dollars(250),
        total: dollars(5545),
        customer_name: Some("Mark Hensley".to_string()),
        customer_email: Some("mark.hensley@reagan.org".to_string()),
        timeline,
        shipping_info: Some(ShippingInfo {
            carrier: "Saia LTL Freight".to_string(),
            tracking_number: "SAIA-8841272".to_string(),
            estimated_delivery: day(2026, 5, 11),
            shipped_date: Some(day(2026, 5, 5)),
        }),
        notes: vec!["Customer requested weekday delivery".to_string()],
        eta: None,
    }
}

fn in_production_order() -> Order {
    let mut timeline = Timeline::new();
    timeline.record(OrderStatus::Submitted, ts(2026, 7, 6, 10, 5), None);
    timeline.record(OrderStatus::Confirmed, ts(2026, 7, 7, 13, 40), None);
    timeline.record(
        OrderStatus::InProduction,
        ts(2026, 7, 21, 10, 14),
        Some("Cabinet joinery started".to_string()),
    );

    Order {
        id: OrderId::new("ord-1002"),
        order_number: "IW-1002".to_string(),
        dealer_id: DealerId::new("d1"),
        status: OrderStatus::InProduction,
        created: ts(2026, 7, 6, 10, 5),
        updated: ts(2026, 7, 21, 10, 14),
        line_items: vec![OrderLineItem {
            id: "li-1002-1".to_string(),
            product_slug: "brazos".to_string(),
            product_name: "The Brazos".to_string(),
            model: "Brazos".to_string(),
            finish: "Matte Black".to_string(),
            felt_color: Some("Steel Gray".to_string()),
            size: "9 ft".to_string(),
            quantity: 1,
            unit_price: dollars(6150),
            total_price: dollars(6150),
            accessories: vec![],
        }],
        subtotal: dollars(6150),
        shipping: dollars(275),
        total: dollars(6425),
        customer_name: None,
        customer_email: None,
        timeline,
        shipping_info: None,
        notes: vec![],
        eta: Some(day(2026, 9, 12)),
    }
}

fn shipped_order() -> Order {
    let mut timeline = Timeline::new();
    timeline.record(OrderStatus::Submitted, ts(2026, 6, 18, 15, 55), None);
    timeline.record(OrderStatus::Confirmed, ts(2026, 6, 19, 8, 30), None);
    timeline.record(OrderStatus::InProduction, ts(2026, 7, 2, 9, 0), None);
    timeline.record(
        OrderStatus::Shipped,
        ts(2026, 8, 14, 17, 2),
        Some("Picked up by R+L Carriers".to_string()),
    );

    Order {
        id: OrderId::new("ord-1003"),
        order_number: "IW-1003".to_string(),
        dealer_id: DealerId::new("d1"),
        status: OrderStatus::Shipped,
        created: ts(2026, 6, 18, 15, 55),
        updated: ts(2026, 8, 14, 17, 2),
        line_items: vec![
            OrderLineItem {
                id: "li-1003-1".to_string(),
                product_slug: "caldwell-shuffleboard".to_string(),
                product_name: "Caldwell Shuffleboard".to_string(),
                model: "Caldwell Shuffleboard".to_string(),
                finish: "Weathered Oak".to_string(),
                felt_color: None,
                size: "12 ft".to_string(),
                quantity: 1,
                unit_price: dollars(4480),
                total_price: dollars(4480),
                accessories: vec!["Shuffleboard Wax Set".to_string()],
            },
            OrderLineItem {
                id: "li-1003-2".to_string(),
                product_slug: "kestrel".to_string(),
                product_name: "The Kestrel".to_string(),
                model: "Kestrel".to_string(),
                finish: "Espresso".to_string(),
                felt_color: Some("Burgundy".to_string()),
                size: "7 ft".to_string(),
                quantity: 1,
                unit_price: dollars(3895),
                total_price: dollars(3895),
                accessories: vec![],
            },
        ],
        subtotal: dollars(8375),
        shipping: dollars(395),
        total: dollars(8770),
        customer_name: Some("Alicia Tran".to_string()),
        customer_email: Some("alicia.tran@hughes-rich.com".to_string()),
        timeline,
        shipping_info: Some(ShippingInfo {
            carrier: "R+L Carriers".to_string(),
            tracking_number: "RLC-2209187".to_string(),
            estimated_delivery: day(2026, 8, 25),
            shipped_date: Some(day(2026, 8, 14)),
        }),
        notes: vec![],
        eta: None,
    }
}

fn confirmed_order() -> Order {
    let mut timeline = Timeline::new();
    timeline.record(OrderStatus::Submitted, ts(2026, 8, 8, 11, 45), None);
    timeline.record(OrderStatus::Confirmed, ts(2026, 8, 10, 9, 20), None);

    Order {
        id: OrderId::new("ord-1004"),
        order_number: "IW-1004".to_string(),
        dealer_id: DealerId::new("d1"),
        status: OrderStatus::Confirmed,
        created: ts(2026, 8, 8, 11, 45),
        updated: ts(2026, 8, 10, 9, 20),
        line_items: vec![OrderLineItem {
            id: "li-1004-1".to_string(),
            product_slug: "whitfield".to_string(),
            product_name: "The Whitfield".to_string(),
            model: "Whitfield".to_string(),
            finish: "Natural Walnut".to_string(),
            felt_color: Some("Navy".to_string()),
            size: "8 ft".to_string(),
            quantity: 2,
            unit_price: dollars(4725),
            total_price: dollars(9450),
            accessories: vec![],
        }],
        subtotal: dollars(9450),
        shipping: dollars(425),
        total: dollars(9875),
        customer_name: None,
        customer_email: None,
        timeline,
        shipping_info: None,
        notes: vec!["Both tables for the Katy showroom floor".to_string()],
        eta: Some(day(2026, 10, 2)),
    }
}

fn draft_order() -> Order {
    Order {
        id: OrderId::new("ord-1005"),
        order_number: "IW-1005".to_string(),
        dealer_id: DealerId::new("d1"),
        status: OrderStatus::Draft,
        created: ts(2026, 8, 18, 16, 10),
        updated: ts(2026, 8, 18, 16, 10),
        line_items: vec![OrderLineItem {
            id: "li-1005-1".to_string(),
            product_slug: "alcott".to_string(),
            product_name: "The Alcott".to_string(),
            model: "Alcott".to_string(),
            finish: "Windsor Cherry".to_string(),
            felt_color: Some("Championship Green".to_string()),
            size: "8 ft".to_string(),
            quantity: 1,
            unit_price: dollars(4295),
            total_price: dollars(4295),
            accessories: vec![],
        }],
        subtotal: dollars(4295),
        shipping: Decimal::ZERO,
        total: dollars(4295),
        customer_name: Some("Priya Raman".to_string()),
        customer_email: Some("praman@watts.net".to_string()),
        timeline: Timeline::new(),
        shipping_info: None,
        notes: vec![],
        eta: None,
    }
}

// =============================================================================
// Leads
// =============================================================================

fn leads() -> Vec<Lead> {
    let mut won_timeline = Timeline::seeded(LeadStatus::New, ts(2026, 3, 20, 12, 5), None);
    won_timeline.record(LeadStatus::Contacted, ts(2026, 3, 22, 10, 0), None);
    won_timeline.record(LeadStatus::Qualified, ts(2026, 3, 27, 15, 30), None);
    won_timeline.record(LeadStatus::QuoteSent, ts(2026, 3, 29, 9, 45), None);
    won_timeline.record(
        LeadStatus::Won,
        ts(2026, 4, 2, 14, 25),
        Some("Placed order IW-1001".to_string()),
    );

    let mut contacted_timeline = Timeline::seeded(LeadStatus::New, ts(2026, 8, 5, 13, 15), None);
    contacted_timeline.record(LeadStatus::Contacted, ts(2026, 8, 7, 11, 30), None);

    let mut quote_timeline = Timeline::seeded(LeadStatus::New, ts(2026, 7, 12, 18, 40), None);
    quote_timeline.record(LeadStatus::Contacted, ts(2026, 7, 14, 10, 10), None);
    quote_timeline.record(LeadStatus::Qualified, ts(2026, 7, 18, 16, 0), None);
    quote_timeline.record(
        LeadStatus::QuoteSent,
        ts(2026, 7, 25, 14, 50),
        Some("Quoted Whitfield 8 ft in Natural Walnut".to_string()),
    );

    let mut lost_timeline = Timeline::seeded(LeadStatus::New, ts(2026, 6, 2, 9, 25), None);
    lost_timeline.record(LeadStatus::Contacted, ts(2026, 6, 4, 14, 0), None);
    lost_timeline.record(
        LeadStatus::Lost,
        ts(2026, 6, 30, 10, 55),
        Some("Went with a used table".to_string()),
    );

    vec![
        Lead {
            id: LeadId::new("lead-2001"),
            customer_name: "Karen Delgado".to_string(),
            email: "karen.delgado@solis.biz".to_string(),
            phone: "(832) 555-0147".to_string(),
            location: "The Woodlands, TX".to_string(),
            zip: "77382".to_string(),
            source: LeadSource::Website,
            status: LeadStatus::New,
            product_interest: vec!["The Caldwell".to_string()],
            room_size: Some("18 x 14".to_string()),
            budget_range: None,
            created: ts(2026, 8, 19, 16, 20),
            updated: ts(2026, 8, 19, 16, 20),
            timeline: Timeline::seeded(LeadStatus::New, ts(2026, 8, 19, 16, 20), None),
            activity: vec![],
            notes: vec![],
        },
        Lead {
            id: LeadId::new("lead-2002"),
            customer_name: "Doug Pearson".to_string(),
            email: "dpearson@mckee.com".to_string(),
            phone: "(281) 555-0192".to_string(),
            location: "Spring, TX".to_string(),
            zip: "77379".to_string(),
            source: LeadSource::TradeShow,
            status: LeadStatus::Contacted,
            product_interest: vec!["Brazos Shuffleboard".to_string()],
            room_size: None,
            budget_range: None,
            created: ts(2026, 8, 5, 13, 15),
            updated: ts(2026, 8, 7, 11, 30),
            timeline: contacted_timeline,
            activity: vec![ActivityEntry {
                at: ts(2026, 8, 7, 11, 30),
                kind: "call_logged".to_string(),
                detail: "Left voicemail, trying again Thursday".to_string(),
            }],
            notes: vec!["Met at the Houston Home Show booth".to_string()],
        },
        Lead {
            id: LeadId::new("lead-2003"),
            customer_name: "Stephanie & Victor Ruiz".to_string(),
            email: "ruiz.family@vance.info".to_string(),
            phone: "(713) 555-0126".to_string(),
            location: "Katy, TX".to_string(),
            zip: "77494".to_string(),
            source: LeadSource::Referral,
            status: LeadStatus::QuoteSent,
            product_interest: vec!["The Whitfield".to_string(), "The Laurel".to_string()],
            room_size: Some("20 x 16".to_string()),
            budget_range: Some("$8,000-$12,000".to_string()),
            created: ts(2026, 7, 12, 18, 40),
            updated: ts(2026, 7, 25, 14, 50),
            timeline: quote_timeline,
            activity: vec![ActivityEntry {
                at: ts(2026, 7, 25, 14, 52),
                kind: "note_added".to_string(),
                detail: "Prefer Natural Walnut to match floors".to_string(),
            }],
            notes: vec!["Prefer Natural Walnut to match floors".to_string()],
        },
        Lead {
            id: LeadId::new("lead-2004"),
            customer_name: "Mark Hensley".to_string(),
            email: "mark.hensley@reagan.org".to_string(),
            phone: "(346) 555-0139".to_string(),
            location: "Cypress, TX".to_string(),
            zip: "77433".to_string(),
            source: LeadSource::Website,
            status: LeadStatus::Won,
            product_interest: vec!["The Caldwell".to_string()],
            room_size: Some("16 x 13".to_string()),
            budget_range: Some("$5,000-$7,000".to_string()),
            created: ts(2026, 3, 20, 12, 5),
            updated: ts(2026, 4, 2, 14, 25),
            timeline: won_timeline,
            activity: vec![],
            notes: vec![],
        },
        Lead {
            id: LeadId::new("lead-2005"),
            customer_name: "Brian Okafor".to_string(),
            email: "b.okafor@mann.com".to_string(),
            phone: "(936) 555-0171".to_string(),
            location: "Conroe, TX".to_string(),
            zip: "77301".to_string(),
            source: LeadSource::Phone,
            status: LeadStatus::Lost,
            product_interest: vec!["The Kestrel".to_string()],
            room_size: None,
            budget_range: Some("Under $4,000".to_string()),
            created: ts(2026, 6, 2, 9, 25),
            updated: ts(2026, 6, 30, 10, 55),
            timeline: lost_timeline,
            activity: vec![],
            notes: vec![],
        },
    ]
}

// =============================================================================
// Warranty
// =============================================================================

fn registrations() -> Vec<WarrantyRegistration> {
    vec![
        WarrantyRegistration {
            id: RegistrationId::new("reg-5001"),
            serial_number: "IWC-82041".to_string(),
            product_name: "The Caldwell".to_string(),
            product_slug: "caldwell".to_string(),
            customer_name: "Miguel Santos".to_string(),
            customer_email: "miguel.santos@frye.com".to_string(),
            delivery_address: "1208 Wilcrest Dr, Houston, TX 77042".to_string(),
            delivery_date: day(2025, 6, 20),
            installer_name: "Ironwood Delivery Team".to_string(),
            registration_date: day(2025, 6, 22),
            warranty_expiration: day(2030, 6, 20),
            dealer_id: DealerId::new("d1"),
        },
        WarrantyRegistration {
            id: RegistrationId::new("reg-5002"),
            serial_number: "IWS-10232".to_string(),
            product_name: "Brazos Shuffleboard".to_string(),
            product_slug: "brazos-shuffleboard".to_string(),
            customer_name: "Lauren Fitch".to_string(),
            customer_email: "lfitch@sparks.net".to_string(),
            delivery_address: "98 Tanglewood Ct, Montgomery, TX 77356".to_string(),
            delivery_date: day(2026, 1, 9),
            installer_name: "Lone Star Install Crew".to_string(),
            registration_date: day(2026, 1, 12),
            warranty_expiration: day(2031, 1, 9),
            dealer_id: DealerId::new("d1"),
        },
        WarrantyRegistration {
            id: RegistrationId::new("reg-5003"),
            serial_number: "IWC-82299".to_string(),
            product_name: "The Whitfield".to_string(),
            product_slug: "whitfield".to_string(),
            customer_name: "Derek Nelson".to_string(),
            customer_email: "derek.nelson@chan.org".to_string(),
            delivery_address: "441 Cedar Elm Ln, Sugar Land, TX 77479".to_string(),
            delivery_date: day(2026, 3, 14),
            installer_name: "Lone Star Install Crew".to_string(),
            registration_date: day(2026, 3, 15),
            warranty_expiration: day(2031, 3, 14),
            dealer_id: DealerId::new("d1"),
        },
    ]
}

fn claims() -> Vec<WarrantyClaim> {
    let mut review_timeline = Timeline::seeded(
        ClaimStatus::Submitted,
        ts(2026, 8, 2, 15, 40),
        Some("Claim received".to_string()),
    );
    review_timeline.record(
        ClaimStatus::UnderReview,
        ts(2026, 8, 6, 10, 0),
        Some("Assigned to warranty team".to_string()),
    );

    let mut parts_timeline = Timeline::seeded(
        ClaimStatus::Submitted,
        ts(2026, 6, 25, 9, 10),
        Some("Claim received".to_string()),
    );
    parts_timeline.record(ClaimStatus::UnderReview, ts(2026, 6, 27, 14, 20), None);
    parts_timeline.record(
        ClaimStatus::Approved,
        ts(2026, 7, 1, 11, 5),
        Some("Approved for seam kit and service visit".to_string()),
    );
    parts_timeline.record(
        ClaimStatus::PartsShipped,
        ts(2026, 7, 8, 16, 35),
        Some("Seam kit shipped, UPS 1Z884723".to_string()),
    );

    vec![
        WarrantyClaim {
            id: ClaimId::new("clm-3101"),
            claim_number: "WC-3101".to_string(),
            registration_id: RegistrationId::new("reg-5001"),
            serial_number: "IWC-82041".to_string(),
            product_name: "The Caldwell".to_string(),
            customer_name: "Miguel Santos".to_string(),
            issue_description: "Rail cushion separating at the corner near the head spot"
                .to_string(),
            requested_resolution: "Replacement rail assembly".to_string(),
            status: ClaimStatus::UnderReview,
            photos: vec!["claims/wc-3101/rail-corner.jpg".to_string()],
            created: ts(2026, 8, 2, 15, 40),
            updated: ts(2026, 8, 6, 10, 0),
            timeline: review_timeline,
            messages: vec![Message {
                at: ts(2026, 8, 6, 10, 5),
                author: "Ironwood Warranty Team".to_string(),
                body: "We've received your photos and assigned a technician to review."
                    .to_string(),
                internal: false,
            }],
        },
        WarrantyClaim {
            id: ClaimId::new("clm-3102"),
            claim_number: "WC-3102".to_string(),
            registration_id: RegistrationId::new("reg-5003"),
            serial_number: "IWC-82299".to_string(),
            product_name: "The Whitfield".to_string(),
            customer_name: "Derek Nelson".to_string(),
            issue_description: "Slate seam visible through the cloth after installation"
                .to_string(),
            requested_resolution: "Re-level and re-seam by a certified installer".to_string(),
            status: ClaimStatus::PartsShipped,
            photos: vec![],
            created: ts(2026, 6, 25, 9, 10),
            updated: ts(2026, 7, 8, 16, 35),
            timeline: parts_timeline,
            messages: vec![
                Message {
                    at: ts(2026, 6, 26, 8, 45),
                    author: "Rachel Moreno".to_string(),
                    body: "Customer is available weekday mornings for the service visit."
                        .to_string(),
                    internal: false,
                },
                Message {
                    at: ts(2026, 7, 8, 16, 40),
                    author: "Ironwood Warranty Team".to_string(),
                    body: "Seam kit is on the way. Service visit will be scheduled once it lands."
                        .to_string(),
                    internal: false,
                },
            ],
        },
    ]
}

// =============================================================================
// Support
// =============================================================================

fn tickets() -> Vec<SupportTicket> {
    let mut awaiting_timeline =
        Timeline::seeded(TicketStatus::Open, ts(2026, 8, 11, 15, 25), None);
    awaiting_timeline.record(TicketStatus::InProgress, ts(2026, 8, 12, 9, 10), None);
    awaiting_timeline.record(
        TicketStatus::AwaitingResponse,
        ts(2026, 8, 13, 14, 5),
        Some("Waiting on a screenshot".to_string()),
    );

    let mut resolved_timeline = Timeline::seeded(TicketStatus::Open, ts(2026, 7, 28, 10, 50), None);
    resolved_timeline.record(TicketStatus::InProgress, ts(2026, 7, 29, 8, 30), None);
    resolved_timeline.record(
        TicketStatus::Resolved,
        ts(2026, 7, 29, 11, 15),
        Some("Answered with the finish guide".to_string()),
    );

    vec![
        SupportTicket {
            id: TicketId::new("tk-4101"),
            ticket_number: "ST-4101".to_string(),
            dealer_id: DealerId::new("d1"),
            category: TicketCategory::OrderIssue,
            priority: TicketPriority::Urgent,
            status: TicketStatus::Open,
            subject: "Freight damage photos for IW-1003".to_string(),
            description: "Crate corner was crushed on the shuffleboard shipment. Photos attached \
                          before we sign the delivery receipt."
                .to_string(),
            attachments: vec!["tickets/st-4101/crate-corner.jpg".to_string()],
            created: ts(2026, 8, 17, 9, 5),
            updated: ts(2026, 8, 17, 9, 5),
            timeline: Timeline::seeded(TicketStatus::Open, ts(2026, 8, 17, 9, 5), None),
            messages: vec![],
        },
        SupportTicket {
            id: TicketId::new("tk-4102"),
            ticket_number: "ST-4102".to_string(),
            dealer_id: DealerId::new("d1"),
            category: TicketCategory::PortalHelp,
            priority: TicketPriority::Standard,
            status: TicketStatus::AwaitingResponse,
            subject: "Can't update the lead I closed last week".to_string(),
            description: "The portal rejects every status change on a lead I marked won."
                .to_string(),
            attachments: vec![],
            created: ts(2026, 8, 11, 15, 25),
            updated: ts(2026, 8, 13, 14, 5),
            timeline: awaiting_timeline,
            messages: vec![
                Message {
                    at: ts(2026, 8, 13, 14, 5),
                    author: "Ironwood Dealer Support".to_string(),
                    body: "Could you send a screenshot of the error you see?".to_string(),
                    internal: false,
                },
                Message {
                    at: ts(2026, 8, 13, 14, 7),
                    author: "Ironwood Dealer Support".to_string(),
                    body: "Closed leads are final, likely just needs an explanation.".to_string(),
                    internal: true,
                },
            ],
        },
        SupportTicket {
            id: TicketId::new("tk-4103"),
            ticket_number: "ST-4103".to_string(),
            dealer_id: DealerId::new("d1"),
            category: TicketCategory::ProductQuestion,
            priority: TicketPriority::Standard,
            status: TicketStatus::Resolved,
            subject: "Felt color options for the Berwick".to_string(),
            description: "Customer wants to know if the Berwick ships with Burgundy felt."
                .to_string(),
            attachments: vec![],
            created: ts(2026, 7, 28, 10, 50),
            updated: ts(2026, 7, 29, 11, 15),
            timeline: resolved_timeline,
            messages: vec![Message {
                at: ts(2026, 7, 29, 11, 14),
                author: "Ironwood Dealer Support".to_string(),
                body: "Yes, all four standard felt colors are available on the Berwick. Finish \
                       guide attached."
                    .to_string(),
                internal: false,
            }],
        },
    ]
}

// =============================================================================
// Inventory
// =============================================================================

#[allow(clippy::too_many_arguments)]
fn stock(
    slug: &str,
    name: &str,
    category: &str,
    finish: &str,
    size: &str,
    qty: u32,
    status: Availability,
    restock: Option<NaiveDate>,
    lead_time_days: u32,
) -> InventoryItem {
    InventoryItem {
        product_slug: slug.to_string(),
        product_name: name.to_string(),
        category: category.to_string(),
        finish: finish.to_string(),
        size: size.to_string(),
        available_qty: qty,
        status,
        restock_date: restock,
        lead_time_days,
        warehouse: WAREHOUSE.to_string(),
    }
}

#[allow(clippy::too_many_lines)]
fn inventory() -> Vec<InventoryItem> {
    use Availability::{InStock, LowStock, MadeToOrder, OutOfStock};

    const POOL: &str = "Pool Tables";
    const SHUFFLE: &str = "Shuffleboards";
    const GAME: &str = "Game Room";

    vec![
        // The Caldwell
        stock("caldwell", "The Caldwell", POOL, "Windsor Cherry", "8 ft", 6, InStock, None, 21),
        stock("caldwell", "The Caldwell", POOL, "Matte Black", "8 ft", 2, LowStock, None, 21),
        stock("caldwell", "The Caldwell", POOL, "Windsor Cherry", "9 ft", 0, MadeToOrder, None, 45),
        // The Brazos
        stock("brazos", "The Brazos", POOL, "Matte Black", "9 ft", 4, InStock, None, 28),
        stock(
            "brazos",
            "The Brazos",
            POOL,
            "Weathered Oak",
            "9 ft",
            0,
            OutOfStock,
            Some(day(2026, 9, 18)),
            28,
        ),
        stock("brazos", "The Brazos", POOL, "Espresso", "8 ft", 3, InStock, None, 28),
        // The Whitfield
        stock("whitfield", "The Whitfield", POOL, "Natural Walnut", "8 ft", 5, InStock, None, 21),
        stock("whitfield", "The Whitfield", POOL, "Windsor Cherry", "8 ft", 1, LowStock, None, 21),
        stock(
            "whitfield",
            "The Whitfield",
            POOL,
            "Natural Walnut",
            "9 ft",
            0,
            MadeToOrder,
            None,
            45,
        ),
        // The Kestrel
        stock("kestrel", "The Kestrel", POOL, "Espresso", "7 ft", 8, InStock, None, 14),
        stock("kestrel", "The Kestrel", POOL, "Matte Black", "7 ft", 7, InStock, None, 14),
        // The Alcott
        stock("alcott", "The Alcott", POOL, "Windsor Cherry", "8 ft", 4, InStock, None, 21),
        stock(
            "alcott",
            "The Alcott",
            POOL,
            "Weathered Oak",
            "8 ft",
            0,
            OutOfStock,
            Some(day(2026, 10, 2)),
            21,
        ),
        // The Berwick
        stock("berwick", "The Berwick", POOL, "Espresso", "8 ft", 2, LowStock, None, 21),
        stock("berwick", "The Berwick", POOL, "Natural Walnut", "8 ft", 3, InStock, None, 21),
        // The Laurel
        stock("laurel", "The Laurel", POOL, "Matte Black", "7 ft", 9, InStock, None, 14),
        stock("laurel", "The Laurel", POOL, "Espresso", "8 ft", 5, InStock, None, 14),
        // The Hollis
        stock("hollis", "The Hollis", POOL, "Weathered Oak", "8 ft", 0, MadeToOrder, None, 60),
        stock("hollis", "The Hollis", POOL, "Natural Walnut", "9 ft", 0, MadeToOrder, None, 60),
        // Caldwell Shuffleboard
        stock(
            "caldwell-shuffleboard",
            "Caldwell Shuffleboard",
            SHUFFLE,
            "Windsor Cherry",
            "12 ft",
            3,
            InStock,
            None,
            21,
        ),
        stock(
            "caldwell-shuffleboard",
            "Caldwell Shuffleboard",
            SHUFFLE,
            "Weathered Oak",
            "12 ft",
            1,
            LowStock,
            None,
            21,
        ),
        stock(
            "caldwell-shuffleboard",
            "Caldwell Shuffleboard",
            SHUFFLE,
            "Windsor Cherry",
            "14 ft",
            0,
            MadeToOrder,
            None,
            45,
        ),
        // Brazos Shuffleboard
        stock(
            "brazos-shuffleboard",
            "Brazos Shuffleboard",
            SHUFFLE,
            "Matte Black",
            "12 ft",
            2,
            InStock,
            None,
            28,
        ),
        stock(
            "brazos-shuffleboard",
            "Brazos Shuffleboard",
            SHUFFLE,
            "Matte Black",
            "9 ft",
            4,
            InStock,
            None,
            28,
        ),
        // Whitfield Shuffleboard
        stock(
            "whitfield-shuffleboard",
            "Whitfield Shuffleboard",
            SHUFFLE,
            "Natural Walnut",
            "12 ft",
            0,
            OutOfStock,
            Some(day(2026, 9, 25)),
            28,
        ),
        stock(
            "whitfield-shuffleboard",
            "Whitfield Shuffleboard",
            SHUFFLE,
            "Natural Walnut",
            "9 ft",
            2,
            LowStock,
            None,
            28,
        ),
        // Tournament Cue Rack
        stock(
            "tournament-cue-rack",
            "Tournament Cue Rack",
            GAME,
            "Windsor Cherry",
            "Wall Mount",
            14,
            InStock,
            None,
            7,
        ),
    ]
}

// =============================================================================
// Notices
// =============================================================================

fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: NotificationId::new("n-7001"),
            kind: NotificationKind::NewLead,
            title: "New lead in your territory".to_string(),
            body: "Karen Delgado asked about The Caldwell".to_string(),
            at: ts(2026, 8, 19, 16, 21),
            read: false,
            link_to: Some("/dealer/leads".to_string()),
            link_tab: None,
        },
        Notification {
            id: NotificationId::new("n-7002"),
            kind: NotificationKind::OrderUpdate,
            title: "Order IW-1003 shipped".to_string(),
            body: "R+L Carriers picked up the shipment, estimated delivery August 25".to_string(),
            at: ts(2026, 8, 14, 17, 2),
            read: false,
            link_to: Some("/dealer/orders/ord-1003".to_string()),
            link_tab: None,
        },
        Notification {
            id: NotificationId::new("n-7003"),
            kind: NotificationKind::Announcement,
            title: "Fall finish lineup".to_string(),
            body: "Weathered Oak joins the standard finish set in September".to_string(),
            at: ts(2026, 8, 12, 9, 0),
            read: false,
            link_to: None,
            link_tab: Some("announcements".to_string()),
        },
        Notification {
            id: NotificationId::new("n-7004"),
            kind: NotificationKind::PriceUpdate,
            title: "2027 dealer pricing posted".to_string(),
            body: "Updated cost sheets take effect October 1".to_string(),
            at: ts(2026, 8, 1, 8, 0),
            read: true,
            link_to: None,
            link_tab: Some("announcements".to_string()),
        },
        Notification {
            id: NotificationId::new("n-7005"),
            kind: NotificationKind::OrderUpdate,
            title: "Order IW-1002 in production".to_string(),
            body: "Cabinet joinery started on The Brazos".to_string(),
            at: ts(2026, 7, 21, 10, 14),
            read: true,
            link_to: Some("/dealer/orders/ord-1002".to_string()),
            link_tab: None,
        },
        Notification {
            id: NotificationId::new("n-7006"),
            kind: NotificationKind::ProductLaunch,
            title: "The Hollis opens for orders".to_string(),
            body: "Made-to-order slots for the Hollis are live in inventory".to_string(),
            at: ts(2026, 7, 15, 9, 30),
            read: false,
            link_to: None,
            link_tab: Some("inventory".to_string()),
        },
    ]
}

fn announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: AnnouncementId::new("ann-6001"),
            date: day(2026, 8, 12),
            title: "Fall finish lineup".to_string(),
            body: "Weathered Oak joins the standard finish set across the pool table line in \
                   September. Sample chips are in the mail to every showroom."
                .to_string(),
            category: AnnouncementCategory::ProductUpdate,
            action_label: Some("View finishes".to_string()),
            action_tab: None,
            action_href: Some("/finishes".to_string()),
        },
        Announcement {
            id: AnnouncementId::new("ann-6002"),
            date: day(2026, 7, 30),
            title: "2027 dealer pricing".to_string(),
            body: "Updated dealer cost sheets take effect October 1. Quotes issued before then \
                   are honored for 60 days."
                .to_string(),
            category: AnnouncementCategory::Pricing,
            action_label: Some("Download price sheet".to_string()),
            action_tab: None,
            action_href: Some("/downloads/2027-pricing.pdf".to_string()),
        },
        Announcement {
            id: AnnouncementId::new("ann-6003"),
            date: day(2026, 7, 8),
            title: "Freight carrier change for the Northeast".to_string(),
            body: "Shipments to New England now route through R+L Carriers. Transit estimates \
                   in order tracking already reflect the change."
                .to_string(),
            category: AnnouncementCategory::Operations,
            action_label: None,
            action_tab: None,
            action_href: None,
        },
        Announcement {
            id: AnnouncementId::new("ann-6004"),
            date: day(2026, 6, 19),
            title: "Summer co-op advertising window".to_string(),
            body: "Submit co-op ad claims for the June through August window by September 15."
                .to_string(),
            category: AnnouncementCategory::Marketing,
            action_label: Some("Submit claim".to_string()),
            action_tab: Some("support".to_string()),
            action_href: None,
        },
    ]
}

// =============================================================================
// Analytics
// =============================================================================

fn analytics() -> DealerAnalytics {
    DealerAnalytics {
        ytd_sales: dollars(342_800),
        prior_year_sales: dollars(306_100),
        growth_percent: 12,
        territory_rank: 3,
        total_dealers: 18,
        monthly: vec![
            month("Sep", 24_100),
            month("Oct", 27_800),
            month("Nov", 31_200),
            month("Dec", 35_600),
            month("Jan", 22_400),
            month("Feb", 24_900),
            month("Mar", 28_700),
            month("Apr", 30_100),
            month("May", 27_300),
            month("Jun", 29_800),
            month("Jul", 31_400),
            month("Aug", 18_900),
        ],
        top_products: vec![
            ProductSales {
                name: "The Caldwell".to_string(),
                units: 18,
                revenue: dollars(96_400),
            },
            ProductSales {
                name: "The Brazos".to_string(),
                units: 11,
                revenue: dollars(71_500),
            },
            ProductSales {
                name: "Caldwell Shuffleboard".to_string(),
                units: 9,
                revenue: dollars(32_400),
            },
        ],
        open_orders: 4,
        pending_leads: 3,
        avg_order_value: dollars(5_840),
        conversion_rate: 62,
    }
}

fn month(label: &str, sales: i64) -> MonthlySales {
    MonthlySales {
        month: label.to_string(),
        sales: dollars(sales),
    }
}
