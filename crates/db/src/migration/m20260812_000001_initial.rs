//! Initial database migration.
//!
//! Creates all enums, tables, constraints, and indexes for the
//! platform schema.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: ACCOUNTS
        // ============================================================
        db.execute_unprepared(USERS_SQL).await?;

        // ============================================================
        // PART 3: CATALOG
        // ============================================================
        db.execute_unprepared(CATEGORIES_SQL).await?;
        db.execute_unprepared(SOLUTIONS_SQL).await?;
        db.execute_unprepared(SOLUTION_SNAPSHOTS_SQL).await?;

        // ============================================================
        // PART 4: EVENTS
        // ============================================================
        db.execute_unprepared(EVENTS_SQL).await?;

        // ============================================================
        // PART 5: BUDGETS
        // ============================================================
        db.execute_unprepared(BUDGETS_SQL).await?;
        db.execute_unprepared(BUDGET_ITEMS_SQL).await?;
        db.execute_unprepared(BUDGET_ACTIVE_CATEGORIES_SQL).await?;

        // ============================================================
        // PART 6: RESERVATIONS
        // ============================================================
        db.execute_unprepared(RESERVATIONS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Platform roles
CREATE TYPE user_role AS ENUM (
    'organizer',
    'provider',
    'admin'
);

-- Catalog entry kinds
CREATE TYPE solution_kind AS ENUM ('product', 'service');

-- Reservation confirmation flows
CREATE TYPE reservation_kind AS ENUM ('automatic', 'manual');

-- Budget line lifecycle
CREATE TYPE budget_item_status AS ENUM (
    'planned',
    'pending',
    'processed'
);
";

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    email VARCHAR(255) NOT NULL UNIQUE,
    full_name VARCHAR(255) NOT NULL,
    role user_role NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT true,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_users_email ON users(email) WHERE is_active = true;
";

const CATEGORIES_SQL: &str = r"
CREATE TABLE categories (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL UNIQUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const SOLUTIONS_SQL: &str = r"
CREATE TABLE solutions (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    provider_id UUID NOT NULL REFERENCES users(id),
    category_id UUID NOT NULL REFERENCES categories(id),
    name VARCHAR(255) NOT NULL,
    kind solution_kind NOT NULL,
    price NUMERIC(19, 4) NOT NULL,
    discount NUMERIC(5, 2) NOT NULL DEFAULT 0,
    is_visible BOOLEAN NOT NULL DEFAULT true,
    is_available BOOLEAN NOT NULL DEFAULT true,
    rating NUMERIC(3, 2),
    reservation_kind reservation_kind,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    CONSTRAINT chk_price_not_negative CHECK (price >= 0),
    CONSTRAINT chk_discount_range CHECK (discount >= 0 AND discount <= 100),
    CONSTRAINT chk_rating_range CHECK (rating IS NULL OR (rating >= 0 AND rating <= 5)),
    -- Only services carry a reservation flow
    CONSTRAINT chk_service_reservation_kind CHECK (kind = 'service' OR reservation_kind IS NULL)
);

CREATE INDEX idx_solutions_provider ON solutions(provider_id);
CREATE INDEX idx_solutions_suggestions ON solutions(category_id)
    WHERE is_visible = true AND is_available = true;
";

const SOLUTION_SNAPSHOTS_SQL: &str = r"
CREATE TABLE solution_snapshots (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    solution_id UUID NOT NULL REFERENCES solutions(id) ON DELETE CASCADE,
    name VARCHAR(255) NOT NULL,
    price NUMERIC(19, 4) NOT NULL,
    discount NUMERIC(5, 2) NOT NULL DEFAULT 0,
    valid_from TIMESTAMPTZ NOT NULL,

    CONSTRAINT chk_snapshot_price_not_negative CHECK (price >= 0),
    CONSTRAINT chk_snapshot_discount_range CHECK (discount >= 0 AND discount <= 100)
);

CREATE INDEX idx_solution_snapshots_lookup ON solution_snapshots(solution_id, valid_from DESC);
";

const EVENTS_SQL: &str = r"
CREATE TABLE events (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    organizer_id UUID NOT NULL REFERENCES users(id),
    name VARCHAR(255) NOT NULL,
    event_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_events_organizer ON events(organizer_id);
";

const BUDGETS_SQL: &str = r"
CREATE TABLE budgets (
    event_id UUID PRIMARY KEY REFERENCES events(id) ON DELETE CASCADE,
    planned_amount NUMERIC(19, 4) NOT NULL DEFAULT 0,
    spent_amount NUMERIC(19, 4) NOT NULL DEFAULT 0,
    version BIGINT NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    CONSTRAINT chk_totals_not_negative CHECK (planned_amount >= 0 AND spent_amount >= 0)
);
";

const BUDGET_ITEMS_SQL: &str = r"
CREATE TABLE budget_items (
    id UUID PRIMARY KEY,
    event_id UUID NOT NULL REFERENCES budgets(event_id) ON DELETE CASCADE,
    solution_id UUID NOT NULL REFERENCES solutions(id),
    kind solution_kind NOT NULL,
    category_id UUID NOT NULL REFERENCES categories(id),
    planned_amount NUMERIC(19, 4) NOT NULL,
    status budget_item_status NOT NULL DEFAULT 'planned',
    processed_at TIMESTAMPTZ,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    -- One line per solution and event
    CONSTRAINT uq_budget_items_event_solution UNIQUE (event_id, solution_id),
    CONSTRAINT chk_planned_not_negative CHECK (planned_amount >= 0),
    -- The processed stamp and the processed status travel together
    CONSTRAINT chk_processed_stamp CHECK ((status = 'processed') = (processed_at IS NOT NULL))
);

CREATE INDEX idx_budget_items_processed ON budget_items(event_id)
    WHERE status = 'processed';
";

const BUDGET_ACTIVE_CATEGORIES_SQL: &str = r"
CREATE TABLE budget_active_categories (
    event_id UUID NOT NULL REFERENCES budgets(event_id) ON DELETE CASCADE,
    category_id UUID NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    PRIMARY KEY (event_id, category_id)
);
";

const RESERVATIONS_SQL: &str = r"
CREATE TABLE reservations (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    event_id UUID NOT NULL REFERENCES events(id) ON DELETE CASCADE,
    service_id UUID NOT NULL REFERENCES solutions(id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_reservations_event ON reservations(event_id);
";

const DROP_ALL_SQL: &str = r"
-- ============================================================
-- DROP ALL: Rollback migration
-- Order matters due to foreign key constraints
-- ============================================================

-- Drop tables (reverse order of creation)
DROP TABLE IF EXISTS reservations CASCADE;
DROP TABLE IF EXISTS budget_active_categories CASCADE;
DROP TABLE IF EXISTS budget_items CASCADE;
DROP TABLE IF EXISTS budgets CASCADE;
DROP TABLE IF EXISTS events CASCADE;
DROP TABLE IF EXISTS solution_snapshots CASCADE;
DROP TABLE IF EXISTS solutions CASCADE;
DROP TABLE IF EXISTS categories CASCADE;
DROP TABLE IF EXISTS users CASCADE;

-- Drop enums
DROP TYPE IF EXISTS budget_item_status CASCADE;
DROP TYPE IF EXISTS reservation_kind CASCADE;
DROP TYPE IF EXISTS solution_kind CASCADE;
DROP TYPE IF EXISTS user_role CASCADE;
";
