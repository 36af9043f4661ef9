//! Test data helpers for creating backend rows and sessions

use chrono::{Duration, Utc};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};
use training_portal::backend::{AuthUser, Session};
use uuid::Uuid;

pub fn course_row(id: Uuid, title: &str, price: f64) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{} description", title),
        "duration": "8 weeks",
        "format": "Online",
        "price": price,
        "image_url": null,
        "created_at": "2024-03-01T10:00:00Z"
    })
}

pub fn lecture_row(id: Uuid, title: &str, date: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "Open lecture",
        "date": date,
        "time": "19:00",
        "location": "Auditorium",
        "spots": 40,
        "image_url": null
    })
}

pub fn publication_row(id: Uuid, title: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "type": "Artigo",
        "description": "Summary",
        "content": null,
        "image_url": null,
        "link": null,
        "created_at": created_at
    })
}

pub fn registration_row(name: &str, course_ids: &[Uuid], created_at: &str, status: &str) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "name": name,
        "email": SafeEmail().fake::<String>().to_lowercase(),
        "phone": "(11) 9 8765-4321",
        "course_ids": course_ids,
        "message": null,
        "status": status,
        "created_at": created_at
    })
}

pub fn subscriber_row(created_at: &str) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "name": Name().fake::<String>(),
        "email": SafeEmail().fake::<String>().to_lowercase(),
        "created_at": created_at
    })
}

pub fn client_row(id: Uuid) -> Value {
    let name: String = Name().fake();
    json!({
        "id": id,
        "name": name,
        "email": SafeEmail().fake::<String>().to_lowercase(),
        "phone": "(21) 9 1234-5678",
        "profession": "Manager",
        "company": CompanyName().fake::<String>(),
        "notes": null,
        "avatar_url": null
    })
}

/// A live session, optionally carrying a role in its metadata
pub fn admin_session(role: Option<&str>) -> Session {
    Session {
        access_token: super::TEST_ACCESS_TOKEN.to_string(),
        refresh_token: "refresh-token".to_string(),
        expires_at: Utc::now() + Duration::hours(1),
        user: AuthUser {
            id: Uuid::new_v4(),
            email: Some("admin@example.com".to_string()),
            user_metadata: role.map_or(json!({}), |role| json!({ "role": role })),
        },
    }
}

pub fn expired_session() -> Session {
    Session {
        expires_at: Utc::now() - Duration::minutes(5),
        ..admin_session(None)
    }
}
