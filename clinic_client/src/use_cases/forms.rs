use crate::domain::entities::{AppointmentFormData, ContactFormData, SubscriptionData};
use crate::domain::errors::{ClientError, ErrorKind, GatewayError};
use crate::domain::ports::{FormGateway, FormReply};

pub const CONTACT_FALLBACK: &str = "Failed to send message";
pub const APPOINTMENT_FALLBACK: &str = "Failed to book appointment";
pub const SUBSCRIBE_FALLBACK: &str = "Failed to subscribe";
pub const MISSING_REQUIRED_FIELDS: &str = "Please fill all required fields";

// Public form submissions. Each call is a single fire-once request.
pub struct FormSubmissionUseCase<F> {
    pub forms: F,
}

impl<F> FormSubmissionUseCase<F>
where
    F: FormGateway,
{
    #[tracing::instrument(name = "send_contact_form", skip_all)]
    pub async fn send_contact_form(&self, form: &ContactFormData) -> Result<(), ClientError> {
        let result = self.forms.send_contact(form).await;
        settle(result, CONTACT_FALLBACK)
    }

    #[tracing::instrument(
        name = "send_appointment_form",
        skip_all,
        fields(department = %form.department)
    )]
    pub async fn send_appointment_form(
        &self,
        form: &AppointmentFormData,
    ) -> Result<(), ClientError> {
        if !form.has_required_fields() {
            return Err(ClientError::validation(MISSING_REQUIRED_FIELDS));
        }

        let result = self.forms.send_appointment(form).await;
        settle(result, APPOINTMENT_FALLBACK)
    }

    #[tracing::instrument(name = "send_sub_form", skip_all)]
    pub async fn send_sub_form(&self, form: &SubscriptionData) -> Result<(), ClientError> {
        let result = self.forms.send_subscription(form).await;
        settle(result, SUBSCRIBE_FALLBACK)
    }
}

// Backend message first, then the transport's own message, then the fallback.
fn settle(result: Result<FormReply, GatewayError>, fallback: &str) -> Result<(), ClientError> {
    match result {
        Ok(reply) if reply.success => {
            tracing::info!("form accepted.");
            Ok(())
        }
        Ok(reply) => {
            let message = reply
                .message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| fallback.to_string());
            tracing::warn!(%message, "form rejected by backend.");
            Err(ClientError::new(ErrorKind::Rejected, message))
        }
        Err(err) => {
            tracing::error!(error = %err, "form request failed.");
            let message = err
                .upstream_message()
                .map(str::to_string)
                .or_else(|| err.transport_message())
                .unwrap_or_else(|| fallback.to_string());
            Err(ClientError::new(ErrorKind::Transport, message))
        }
    }
}
