pub mod open_exchange_rates;
