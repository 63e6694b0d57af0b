use serde::{Deserialize, Serialize};

use super::{PhoneNumber, Points};

/// A customer's loyalty balance. Phones with no row have an implicit balance of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub phone: PhoneNumber,
    pub points: Points,
}

impl Account {
    pub fn new(phone: PhoneNumber) -> Self {
        Self { phone, points: 0 }
    }

    pub fn with_points(mut self, points: Points) -> Self {
        self.points = points;
        self
    }
}
