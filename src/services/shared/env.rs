use dotenvy::{dotenv, from_filename, var};

pub fn check_for_env_variables() {
    // the app id is necessary for operation, thus the app panics if it isn't
    // present
    match get_env_variable("OXR_APP_ID") {
        Some(_) => println!("Open Exchange Rates app id set ✅"),
        None => panic!("Please create an app id via openexchangerates.org and set it as OXR_APP_ID in your environment variables"),
    };
}

pub fn get_env_variable(variable_to_get: &str) -> Option<String> {
    let environment = var("RUST_ENV").unwrap_or_else(|_| "development".into());

    match environment.as_str() {
        "development" => from_filename(".env.dev").ok(),
        "production" => from_filename(".env.prod").ok(),
        _ => dotenv().ok(),
    };
    var(variable_to_get).ok()
}
