//! Database seeder for Planora development and testing.
//!
//! Seeds one account per role, catalog categories, solutions with price
//! history, one event, and one pending service reservation. Prints
//! short-lived access tokens for the seeded accounts so the API can be
//! exercised right away.
//!
//! Usage: cargo run --bin seeder

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::str::FromStr;
use uuid::Uuid;

use planora_db::entities::{
    categories, events, reservations,
    sea_orm_active_enums::{ReservationKind, SolutionKind, UserRole},
    solution_snapshots, solutions, users,
};
use planora_shared::JwtService;
use planora_shared::auth::{ROLE_ADMIN, ROLE_ORGANIZER, ROLE_PROVIDER};
use planora_shared::config::DatabaseConfig;
use planora_shared::jwt::JwtConfig;

/// Organizer account ID (consistent for all seeds)
const ORGANIZER_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Provider account ID (consistent for all seeds)
const PROVIDER_ID: &str = "00000000-0000-0000-0000-000000000002";
/// Admin account ID (consistent for all seeds)
const ADMIN_ID: &str = "00000000-0000-0000-0000-000000000003";

/// Catering category ID
const CATERING_CATEGORY_ID: &str = "00000000-0000-0000-0000-000000000011";
/// Venues category ID
const VENUES_CATEGORY_ID: &str = "00000000-0000-0000-0000-000000000012";
/// Music category ID
const MUSIC_CATEGORY_ID: &str = "00000000-0000-0000-0000-000000000013";
/// Photography category ID
const PHOTOGRAPHY_CATEGORY_ID: &str = "00000000-0000-0000-0000-000000000014";
/// Decoration category ID
const DECORATION_CATEGORY_ID: &str = "00000000-0000-0000-0000-000000000015";

/// Wedding cake product ID
const CAKE_SOLUTION_ID: &str = "00000000-0000-0000-0000-000000000021";
/// Buffet product ID
const BUFFET_SOLUTION_ID: &str = "00000000-0000-0000-0000-000000000022";
/// DJ service ID (automatic confirmation)
const DJ_SOLUTION_ID: &str = "00000000-0000-0000-0000-000000000023";
/// Live band service ID (manual confirmation)
const BAND_SOLUTION_ID: &str = "00000000-0000-0000-0000-000000000024";
/// Ballroom service ID (manual confirmation)
const HALL_SOLUTION_ID: &str = "00000000-0000-0000-0000-000000000025";

/// Seeded event ID
const EVENT_ID: &str = "00000000-0000-0000-0000-000000000031";
/// Seeded reservation ID (for the live band)
const RESERVATION_ID: &str = "00000000-0000-0000-0000-000000000041";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db_config = DatabaseConfig {
        url: database_url,
        max_connections: 5,
        min_connections: 1,
    };
    let db = planora_db::connect(&db_config)
        .await
        .expect("Failed to connect to database");

    println!("Seeding users...");
    seed_users(&db).await;

    println!("Seeding categories...");
    seed_categories(&db).await;

    println!("Seeding solutions...");
    seed_solutions(&db).await;

    println!("Seeding event...");
    seed_event(&db).await;

    println!("Seeding reservation...");
    seed_reservation(&db).await;

    println!("Seeding complete!");
    print_dev_tokens();
}

fn seed_uuid(raw: &str) -> Uuid {
    Uuid::parse_str(raw).unwrap()
}

/// Seeds one account per platform role.
async fn seed_users(db: &DatabaseConnection) {
    let accounts = [
        (
            ORGANIZER_ID,
            "organizer@planora.dev",
            "Demo Organizer",
            UserRole::Organizer,
        ),
        (
            PROVIDER_ID,
            "provider@planora.dev",
            "Demo Provider",
            UserRole::Provider,
        ),
        (ADMIN_ID, "admin@planora.dev", "Demo Admin", UserRole::Admin),
    ];

    for (raw_id, email, full_name, role) in accounts {
        let id = seed_uuid(raw_id);

        if users::Entity::find_by_id(id)
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  User {email} already exists, skipping...");
            continue;
        }

        let user = users::ActiveModel {
            id: Set(id),
            email: Set(email.to_string()),
            full_name: Set(full_name.to_string()),
            role: Set(role),
            is_active: Set(true),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };

        if let Err(e) = user.insert(db).await {
            eprintln!("Failed to insert user {email}: {e}");
        } else {
            println!("  Created user: {email}");
        }
    }
}

/// Seeds the catalog categories.
async fn seed_categories(db: &DatabaseConnection) {
    let names = [
        (CATERING_CATEGORY_ID, "Catering"),
        (VENUES_CATEGORY_ID, "Venues"),
        (MUSIC_CATEGORY_ID, "Music"),
        (PHOTOGRAPHY_CATEGORY_ID, "Photography"),
        (DECORATION_CATEGORY_ID, "Decoration"),
    ];

    let mut inserted = 0;
    for (raw_id, name) in names {
        let id = seed_uuid(raw_id);

        if categories::Entity::find_by_id(id)
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            continue;
        }

        let category = categories::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            created_at: Set(Utc::now().into()),
        };

        if let Err(e) = category.insert(db).await {
            eprintln!("Failed to insert category {name}: {e}");
        } else {
            inserted += 1;
        }
    }

    println!("  Inserted {inserted} categories");
}

/// Seeds catalog solutions with one price-history row each.
async fn seed_solutions(db: &DatabaseConnection) {
    let provider_id = seed_uuid(PROVIDER_ID);

    // (id, category, name, kind, price, discount, rating, reservation kind)
    let offerings = [
        (
            CAKE_SOLUTION_ID,
            CATERING_CATEGORY_ID,
            "Three-Tier Wedding Cake",
            SolutionKind::Product,
            "450.00",
            "10.00",
            Some("4.70"),
            None,
        ),
        (
            BUFFET_SOLUTION_ID,
            CATERING_CATEGORY_ID,
            "Premium Buffet for 100",
            SolutionKind::Product,
            "2200.00",
            "0.00",
            Some("4.40"),
            None,
        ),
        (
            DJ_SOLUTION_ID,
            MUSIC_CATEGORY_ID,
            "DJ Night Package",
            SolutionKind::Service,
            "800.00",
            "15.00",
            Some("4.90"),
            Some(ReservationKind::Automatic),
        ),
        (
            BAND_SOLUTION_ID,
            MUSIC_CATEGORY_ID,
            "Live Jazz Band",
            SolutionKind::Service,
            "1500.00",
            "0.00",
            None,
            Some(ReservationKind::Manual),
        ),
        (
            HALL_SOLUTION_ID,
            VENUES_CATEGORY_ID,
            "Grand Ballroom Evening",
            SolutionKind::Service,
            "5000.00",
            "5.00",
            Some("4.20"),
            Some(ReservationKind::Manual),
        ),
    ];

    let mut inserted = 0;
    for (raw_id, raw_category_id, name, kind, price, discount, rating, reservation_kind) in
        offerings
    {
        let id = seed_uuid(raw_id);

        if solutions::Entity::find_by_id(id)
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            continue;
        }

        let price = Decimal::from_str(price).unwrap();
        let discount = Decimal::from_str(discount).unwrap();

        let solution = solutions::ActiveModel {
            id: Set(id),
            provider_id: Set(provider_id),
            category_id: Set(seed_uuid(raw_category_id)),
            name: Set(name.to_string()),
            kind: Set(kind),
            price: Set(price),
            discount: Set(discount),
            is_visible: Set(true),
            is_available: Set(true),
            rating: Set(rating.map(|r| Decimal::from_str(r).unwrap())),
            reservation_kind: Set(reservation_kind),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };

        if let Err(e) = solution.insert(db).await {
            eprintln!("Failed to insert solution {name}: {e}");
            continue;
        }
        inserted += 1;

        // Backdated so lines processed today resolve against it
        let snapshot = solution_snapshots::ActiveModel {
            id: Set(Uuid::new_v4()),
            solution_id: Set(id),
            name: Set(name.to_string()),
            price: Set(price),
            discount: Set(discount),
            valid_from: Set((Utc::now() - Duration::days(30)).into()),
        };

        if let Err(e) = snapshot.insert(db).await {
            eprintln!("Failed to insert snapshot for {name}: {e}");
        }
    }

    println!("  Inserted {inserted} solutions");
}

/// Seeds one upcoming event for the organizer.
async fn seed_event(db: &DatabaseConnection) {
    let id = seed_uuid(EVENT_ID);

    if events::Entity::find_by_id(id)
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Event already exists, skipping...");
        return;
    }

    let event = events::ActiveModel {
        id: Set(id),
        organizer_id: Set(seed_uuid(ORGANIZER_ID)),
        name: Set("Summer Gala".to_string()),
        event_date: Set((Utc::now() + Duration::days(60)).date_naive()),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    };

    if let Err(e) = event.insert(db).await {
        eprintln!("Failed to insert event: {e}");
    } else {
        println!("  Created event: Summer Gala");
    }
}

/// Seeds one reservation for the manual-confirmation band service, so
/// the reservation callbacks can be exercised against it.
async fn seed_reservation(db: &DatabaseConnection) {
    let id = seed_uuid(RESERVATION_ID);

    if reservations::Entity::find_by_id(id)
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Reservation already exists, skipping...");
        return;
    }

    let reservation = reservations::ActiveModel {
        id: Set(id),
        event_id: Set(seed_uuid(EVENT_ID)),
        service_id: Set(seed_uuid(BAND_SOLUTION_ID)),
        created_at: Set(Utc::now().into()),
    };

    if let Err(e) = reservation.insert(db).await {
        eprintln!("Failed to insert reservation: {e}");
    } else {
        println!("  Created reservation for: Live Jazz Band");
    }
}

/// Prints short-lived access tokens for the seeded accounts.
fn print_dev_tokens() {
    let secret =
        std::env::var("PLANORA__JWT__SECRET").unwrap_or_else(|_| JwtConfig::default().secret);
    let jwt = JwtService::new(JwtConfig {
        secret,
        ..JwtConfig::default()
    });

    println!("Development tokens:");
    let accounts = [
        ("organizer", ORGANIZER_ID, ROLE_ORGANIZER),
        ("provider", PROVIDER_ID, ROLE_PROVIDER),
        ("admin", ADMIN_ID, ROLE_ADMIN),
    ];
    for (label, raw_id, role) in accounts {
        match jwt.generate_access_token(seed_uuid(raw_id), role) {
            Ok(token) => println!("  {label}: {token}"),
            Err(e) => eprintln!("Failed to generate {label} token: {e}"),
        }
    }
}
