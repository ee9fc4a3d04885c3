use folio::{PortfolioApp, Profile, fontdb};
use std::sync::Arc;

/// Build an app with a small fixed profile and an empty font database, so
/// integration tests never depend on the host's installed fonts (text that
/// cannot be resolved is simply not drawn; shapes and layout still render).
pub fn test_app() -> PortfolioApp {
    PortfolioApp::builder()
        .with_profile(test_profile())
        .with_font_database(Arc::new(fontdb::Database::new()))
        .build()
        .expect("test app should build")
}

pub fn test_profile() -> Profile {
    serde_json::from_str(
        r#"{
            "name": "Subject Name",
            "title": "Full Stack Developer",
            "summary": "A developer building scalable backend services and clean APIs.",
            "skills": [
                { "title": "Languages", "skills": ["Rust", "Java"] }
            ],
            "education": [
                {
                    "degree": "B.Tech in Computer Science",
                    "institution": "Some College of Engineering",
                    "date": "2024"
                }
            ],
            "contact": { "email": "subject@example.com" }
        }"#,
    )
    .expect("test profile should parse")
}
