//! Diesel schema for user display records.

diesel::table! {
    /// User accounts, read only for display attributes.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional last name.
        #[max_length = 255]
        last_name -> Nullable<Varchar>,
        /// Optional email address.
        #[max_length = 255]
        email -> Nullable<Varchar>,
    }
}
