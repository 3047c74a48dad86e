use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Counselor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub availability: Availability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Availability {
    Online,
    Offline,
}

impl Counselor {
    pub fn is_online(&self) -> bool {
        self.availability == Availability::Online
    }
}

/// The fixed counselor roster offered in the app.
pub fn roster() -> Vec<Counselor> {
    [
        ("1", "Dr. Sarah Wijaya", "Kecemasan & Depresi", Availability::Online),
        ("2", "Psikolog Andi Rahman", "Konseling Remaja", Availability::Online),
        ("3", "Dr. Maya Sari", "Trauma & PTSD", Availability::Offline),
        ("4", "Konselor Budi Hartono", "Hubungan & Keluarga", Availability::Online),
    ]
    .into_iter()
    .map(|(id, name, specialization, availability)| Counselor {
        id: id.to_string(),
        name: name.to_string(),
        specialization: specialization.to_string(),
        availability,
    })
    .collect()
}

/// Look up a counselor in the roster by ID.
pub fn find(id: &str) -> Option<Counselor> {
    roster().into_iter().find(|c| c.id == id)
}
