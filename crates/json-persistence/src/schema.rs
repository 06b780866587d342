//! Esquema Diesel (declarado a mano). Reemplazable con `diesel print-schema`.

diesel::table! {
    json_history (id) {
        id -> BigInt,
        original_content -> Text,
        processed_content -> Nullable<Text>,
        operation -> Text,
        success -> Bool,
        error_message -> Nullable<Text>,
        original_size -> Integer,
        processed_size -> Nullable<Integer>,
        created_at -> Timestamptz,
    }
}
