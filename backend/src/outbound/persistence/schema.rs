//! Diesel table definitions.
//!
//! Must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Product catalogue.
    ///
    /// `CHECK` constraints reject blank names and negative prices.
    products (id) {
        /// Primary key assigned from a sequence.
        id -> Int4,
        /// Display name (max 100 characters).
        name -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Unit price, `NUMERIC(18,2)`.
        price -> Numeric,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Active flag; defaults to true.
        is_active -> Bool,
    }
}
