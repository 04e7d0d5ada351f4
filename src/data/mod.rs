//! Immutable in-memory records backing the storefront when no external
//! source is used. Shared read-only across requests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::models::{Event, Party, PartyStatus, Ticket, TicketStatus, DEFAULT_EVENT_IMAGE};

lazy_static::lazy_static! {
    static ref EVENT: Event = Event {
        id: "1".to_string(),
        name: "Festival de Música Eletrônica 2025".to_string(),
        description: "Uma noite inesquecível com os melhores DJs do cenário eletrônico \
                      nacional e internacional."
            .to_string(),
        image: DEFAULT_EVENT_IMAGE.to_string(),
        date: at(2025, 8, 15, 20),
        venue: "Arena Music Hall - São Paulo".to_string(),
        price: Decimal::new(200, 0),
        tickets_available: 150,
        tickets_total: 500,
        payment_link: "https://pagamento.boreal.example/festival-2025".to_string(),
        terms: "Ao comprar você concorda com nossos termos de entrada. Proibido menores de \
                18 anos. Documento obrigatório."
            .to_string(),
    };

    static ref PARTIES: Vec<Party> = vec![
        Party {
            id: "1".to_string(),
            name: "Festival de Música Eletrônica 2025".to_string(),
            tickets_total: 1000,
            tickets_sold: 500,
            unit_price: Decimal::new(120, 0),
            potential_profit: Decimal::new(60000, 0),
            current_profit: Decimal::new(42000, 0),
            date: day(2025, 8, 15),
            status: PartyStatus::Active,
        },
        Party {
            id: "2".to_string(),
            name: "Show de Rock Nacional".to_string(),
            tickets_total: 300,
            tickets_sold: 280,
            unit_price: Decimal::new(80, 0),
            potential_profit: Decimal::new(24000, 0),
            current_profit: Decimal::new(22400, 0),
            date: day(2025, 9, 20),
            status: PartyStatus::Active,
        },
    ];

    static ref TICKETS: Vec<Ticket> = vec![
        ticket("t-001", Some("529.982.247-25"), "João Silva", "joao@x.com", TicketStatus::Active),
        ticket("t-002", Some("987.654.321-00"), "Maria Santos", "maria@example.com", TicketStatus::Active),
        ticket("t-003", None, "Ana Paula Souza", "ana.paula@example.com", TicketStatus::Used),
        ticket("t-004", Some("111.444.777-35"), "Mariana Conceição", "mariana@example.com", TicketStatus::Canceled),
    ];
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn ticket(id: &str, cpf: Option<&str>, name: &str, email: &str, status: TicketStatus) -> Ticket {
    Ticket {
        id: id.to_string(),
        event_id: "1".to_string(),
        cpf: cpf.map(str::to_string),
        name: name.to_string(),
        email: email.to_string(),
        hash: format!("{:0>64}", id.replace('-', "").replace('t', "f")),
        purchased_at: at(2025, 7, 1, 12),
        status,
    }
}

pub fn event() -> &'static Event {
    &EVENT
}

pub fn parties() -> &'static [Party] {
    &PARTIES
}

pub fn tickets() -> &'static [Ticket] {
    &TICKETS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::cpf::is_valid_cpf;

    #[test]
    fn test_event_inventory_is_consistent() {
        assert!(event().tickets_available <= event().tickets_total);
    }

    #[test]
    fn test_mock_cpfs_are_valid() {
        for cpf in tickets().iter().filter_map(|t| t.cpf.as_deref()) {
            assert!(is_valid_cpf(cpf), "{} should be a valid CPF", cpf);
        }
    }

    #[test]
    fn test_hashes_are_unique() {
        let mut hashes: Vec<_> = tickets().iter().map(|t| t.hash.as_str()).collect();
        hashes.sort();
        hashes.dedup();
        assert_eq!(hashes.len(), tickets().len());
    }
}
