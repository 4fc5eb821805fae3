use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

pub fn write_catalog(dir: &Path, name: &str, config: &Value) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, serde_json::to_string_pretty(config).unwrap()).unwrap();
    path
}

pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn sample_catalog() -> Value {
    json!({
        "version": 1,
        "options": {
            "threshold": 0.4,
            "fallback": "Sorry, I didn't understand that. Can you rephrase?"
        },
        "intents": [
            {
                "name": "greeting",
                "examples": ["hi", "hello", "hey"],
                "responses": ["Hello! Welcome to STEM Inspires."]
            },
            {
                "name": "mission",
                "examples": [
                    "what is stem inspires mission",
                    "what is your mission",
                    "what does stem inspires do"
                ],
                "responses": [
                    "We bring hands-on STEM to every student.",
                    "We fund robotics teams at schools that need them."
                ]
            },
            {
                "name": "vision",
                "examples": [
                    "what is stem inspires vision",
                    "what is your vision"
                ],
                "responses": ["A robotics team in every school."]
            },
            {
                "name": "donate",
                "examples": ["how can i donate", "i want to donate"],
                "responses": [
                    "You can give on the Donate page.",
                    "Every donation funds a student kit."
                ]
            }
        ]
    })
}
