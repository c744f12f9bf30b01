//! Domain layer for the federated `AuthN` module.

pub mod chain;
pub mod completer;
pub mod error;
pub mod local_client;
pub mod resolver;
pub mod service;


pub use chain::AuthenticatorChain;
pub use completer::PrincipalCompleter;
pub use error::DomainError;
pub use local_client::FederatedAuthnLocalClient;
pub use resolver::UnresolvedUsers;
pub use service::Service;
