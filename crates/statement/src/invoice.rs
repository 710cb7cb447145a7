use serde::{Deserialize, Serialize};

use playbill_core::PlayId;

/// One booked performance, as it arrives on an invoice.
///
/// `audience` is kept as the raw signed value from the input; it is validated
/// when the statement is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "playID")]
    pub play_id: PlayId,
    pub audience: i64,
}

impl Performance {
    pub fn new(play_id: impl Into<PlayId>, audience: i64) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's invoice: the input to statement building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: String,
    pub performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }
}
