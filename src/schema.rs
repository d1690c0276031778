// Diesel table definitions. `clients.id` and `orders.client_id` are mapped to
// `BigInt` because SQLite integer keys are 64-bit.

diesel::table! {
    clients (id) {
        id -> BigInt,
        name -> Text,
        email -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    orders (id) {
        id -> Binary,
        client_id -> BigInt,
        order_date -> Timestamp,
        status -> Text,
    }
}

diesel::joinable!(orders -> clients (client_id));

diesel::allow_tables_to_appear_in_same_query!(clients, orders,);
