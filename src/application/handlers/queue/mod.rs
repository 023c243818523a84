//! Queue publishing handlers.

mod publish_authentication_message;

pub use publish_authentication_message::{
    PublishAuthenticationMessageCommand, PublishAuthenticationMessageHandler,
};
