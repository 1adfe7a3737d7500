use serde::{Deserialize, Serialize};

/// An employee record as returned by the backend. Field names match the
/// backend's JSON exactly.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Employee {
    pub id: i64,
    pub firstname: String,
    pub surname: String,
    pub department: String,
}

/// A record submitted for creation. The backend assigns the id and returns
/// the new record's URL in the Location response header.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NewEmployee {
    pub firstname: String,
    pub surname: String,
    pub department: String,
}
