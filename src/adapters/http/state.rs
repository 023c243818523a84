//! Shared application state.

use std::sync::Arc;

use crate::application::{
    AuthenticateHandler, CreateUserHandler, DeleteUserHandler, FindUserByEmailHandler,
    FindUserByIdHandler, FindUsersByAgeHandler, GetAccountHandler, GetAccountInfoHandler,
    GetAllUsersHandler, GetSignInPayloadHandler, HandleSignInWebhookHandler, SendXrpHandler,
    UpdateUserHandler,
};
use crate::ports::{LedgerClient, QueueClient, SigningClient, UserRepository};

/// Arc-wrapped ports, cloned per request. Handlers are built on demand.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub queue: Arc<dyn QueueClient>,
    pub ledger: Arc<dyn LedgerClient>,
    pub signer: Arc<dyn SigningClient>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        queue: Arc<dyn QueueClient>,
        ledger: Arc<dyn LedgerClient>,
        signer: Arc<dyn SigningClient>,
    ) -> Self {
        Self {
            users,
            queue,
            ledger,
            signer,
        }
    }

    pub fn create_user_handler(&self) -> CreateUserHandler {
        CreateUserHandler::new(self.users.clone())
    }

    pub fn get_all_users_handler(&self) -> GetAllUsersHandler {
        GetAllUsersHandler::new(self.users.clone())
    }

    pub fn find_user_by_id_handler(&self) -> FindUserByIdHandler {
        FindUserByIdHandler::new(self.users.clone())
    }

    pub fn find_user_by_email_handler(&self) -> FindUserByEmailHandler {
        FindUserByEmailHandler::new(self.users.clone())
    }

    pub fn find_users_by_age_handler(&self) -> FindUsersByAgeHandler {
        FindUsersByAgeHandler::new(self.users.clone())
    }

    pub fn update_user_handler(&self) -> UpdateUserHandler {
        UpdateUserHandler::new(self.users.clone())
    }

    pub fn delete_user_handler(&self) -> DeleteUserHandler {
        DeleteUserHandler::new(self.users.clone())
    }

    pub fn get_account_handler(&self) -> GetAccountHandler {
        GetAccountHandler::new(self.ledger.clone())
    }

    pub fn get_account_info_handler(&self) -> GetAccountInfoHandler {
        GetAccountInfoHandler::new(self.ledger.clone())
    }

    pub fn send_xrp_handler(&self) -> SendXrpHandler {
        SendXrpHandler::new(self.ledger.clone())
    }

    pub fn authenticate_handler(&self) -> AuthenticateHandler {
        AuthenticateHandler::new(self.signer.clone())
    }

    pub fn get_signin_payload_handler(&self) -> GetSignInPayloadHandler {
        GetSignInPayloadHandler::new(self.signer.clone())
    }

    pub fn signin_webhook_handler(&self) -> HandleSignInWebhookHandler {
        HandleSignInWebhookHandler::new(self.queue.clone())
    }
}
