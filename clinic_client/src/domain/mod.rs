// Domain layer: session and form types, errors and ports.

pub mod entities;
pub mod errors;
pub mod ports;

pub use entities::{
    AppointmentFormData, ContactFormData, Credentials, Field, Role, SESSION_KEY, SessionRecord,
    SubscriptionData, UserId, ValidationErrors,
};
pub use errors::{ClientError, ErrorKind, GatewayError};
pub use ports::{AuthGateway, FormGateway, FormReply, LoginRequest, SessionStore, SignupRequest};
