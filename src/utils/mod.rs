pub mod cpf;
pub mod error;
pub mod extract;
pub mod response;
pub mod text;
pub mod validation;
