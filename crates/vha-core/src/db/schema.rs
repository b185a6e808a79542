//! SQLite schema definition.

/// Complete database schema for the village health assistant.
///
/// Collections are deliberately independent: each put is atomic per
/// collection and no cross-collection constraints are enforced. Patient
/// references are plain id columns, checked for presence at the facade.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Patient Profiles
-- ============================================================================

CREATE TABLE IF NOT EXISTS profiles (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    phone TEXT NOT NULL,
    village TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_profiles_name ON profiles(name);

-- ============================================================================
-- Appointments
-- ============================================================================

CREATE TABLE IF NOT EXISTS appointments (
    id TEXT PRIMARY KEY,
    patient_id TEXT NOT NULL,
    symptoms TEXT NOT NULL DEFAULT '[]',          -- JSON array of strings
    triage_level TEXT NOT NULL,
    triage_advice TEXT NOT NULL,
    status TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_appointments_patient ON appointments(patient_id);

-- ============================================================================
-- Medicine Orders
-- ============================================================================

CREATE TABLE IF NOT EXISTS orders (
    id TEXT PRIMARY KEY,
    patient_id TEXT NOT NULL,
    medicine TEXT NOT NULL,
    status TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_orders_patient ON orders(patient_id);

-- ============================================================================
-- Sync Queue (Append-Only, FIFO by seq)
-- ============================================================================

CREATE TABLE IF NOT EXISTS sync_queue (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    op_type TEXT NOT NULL,
    payload TEXT NOT NULL,                        -- JSON tagged QueueOperation
    enqueued_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;
