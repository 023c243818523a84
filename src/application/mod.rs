//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every handler returns `DomainError` as its only error type.

pub mod handlers;

pub use handlers::ledger::{
    GetAccountHandler, GetAccountInfoHandler, GetAccountInfoQuery, GetAccountQuery,
    SendXrpCommand, SendXrpHandler,
};
pub use handlers::queue::{PublishAuthenticationMessageCommand, PublishAuthenticationMessageHandler};
pub use handlers::signin::{
    AuthenticateHandler, GetSignInPayloadHandler, GetSignInPayloadQuery,
    HandleSignInWebhookCommand, HandleSignInWebhookHandler, HandleSignInWebhookResult,
};
pub use handlers::user::{
    CreateUserCommand, CreateUserHandler, DeleteUserCommand, DeleteUserHandler,
    FindUserByEmailHandler, FindUserByEmailQuery, FindUserByIdHandler, FindUserByIdQuery,
    FindUsersByAgeHandler, FindUsersByAgeQuery, GetAllUsersHandler, UpdateUserCommand,
    UpdateUserHandler,
};
