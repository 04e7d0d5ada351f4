//! Ticket lookup by CPF and/or holder name.

use crate::models::Ticket;
use crate::utils::error::AppError;
use crate::utils::text::normalize_text;

/// A validated lookup: at least one criterion is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketQuery {
    cpf: Option<String>,
    name: Option<String>,
}

impl TicketQuery {
    /// Builds a query, treating blank fields as absent. Fails when neither a
    /// CPF nor a name remains.
    pub fn new(cpf: Option<&str>, name: Option<&str>) -> Result<Self, AppError> {
        let cpf = cpf.filter(|c| !c.trim().is_empty()).map(str::to_string);
        let name = name.map(normalize_text).filter(|n| !n.is_empty());

        if cpf.is_none() && name.is_none() {
            return Err(AppError::ValidationError(
                "Please provide a CPF or a name to search for.".to_string(),
            ));
        }

        Ok(Self { cpf, name })
    }

    /// CPF must be equal; the normalized holder name must contain the
    /// normalized query name. Both apply when both are given.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        let cpf_ok = match &self.cpf {
            Some(cpf) => ticket.cpf.as_deref() == Some(cpf.as_str()),
            None => true,
        };

        let name_ok = match &self.name {
            Some(name) => normalize_text(&ticket.name).contains(name.as_str()),
            None => true,
        };

        cpf_ok && name_ok
    }
}

/// First ticket in iteration order matching `query`.
pub fn find_ticket<'a, I>(tickets: I, query: &TicketQuery) -> Option<&'a Ticket>
where
    I: IntoIterator<Item = &'a Ticket>,
{
    tickets.into_iter().find(|ticket| query.matches(ticket))
}
