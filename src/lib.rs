pub mod feed;
pub mod http_client;
pub mod locale;
pub mod match_fetch;
pub mod routes;
pub mod state;
