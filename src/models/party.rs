use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyStatus {
    Active,
    Finished,
    Canceled,
}

/// Admin-facing sales aggregate for one event. Figures are precomputed at
/// the source and never derived here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub id: String,
    pub name: String,
    pub tickets_total: u32,
    pub tickets_sold: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub potential_profit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_profit: Decimal,
    pub date: NaiveDate,
    pub status: PartyStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartySummary {
    pub total_parties: usize,
    pub active_parties: usize,
    pub finished_parties: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_profit: Decimal,
}

impl PartySummary {
    pub fn from_parties(parties: &[Party]) -> Self {
        let count = |status| parties.iter().filter(|p| p.status == status).count();

        Self {
            total_parties: parties.len(),
            active_parties: count(PartyStatus::Active),
            finished_parties: count(PartyStatus::Finished),
            total_profit: parties.iter().map(|p| p.current_profit).sum(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PartyReport {
    pub parties: Vec<Party>,
    pub summary: PartySummary,
}
