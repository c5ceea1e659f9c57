use serde::{Deserialize, Serialize};

// zero-valued fields are dropped from the JSON output,
// matching the wire format this service has always produced
fn id_is_zero(id: &i64) -> bool {
    *id == 0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "id_is_zero")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub val: String,
}

// the two records served for the lifetime of the process,
// seeded once at startup and never mutated
pub fn seed_records() -> [Record; 2] {

    [
        Record {
            id: 1,
            val: "abc".to_string(),
        },
        Record {
            id: 2,
            val: "cde".to_string(),
        },
    ]

}
