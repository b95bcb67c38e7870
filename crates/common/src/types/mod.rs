use serde::{Deserialize, Serialize};

/// Greeting returned from the API root.
pub const WELCOME_MESSAGE: &str = "Welcome to Kitty's Foraging Log API";

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Welcome {
    pub message: String,
}

impl Welcome {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
