mod helpers;
mod listing_test;
mod router_test;
