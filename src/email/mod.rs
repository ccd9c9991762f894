/**
 * Transactional Email
 *
 * This module wraps the SMTP transport used for all outgoing notification
 * email. The mailer is an optional service: when the SMTP environment
 * variables are absent the server boots without it and sends become logged
 * no-ops. When the mailer is configured, a delivery failure propagates to
 * the caller and fails the request.
 *
 * A single send may carry multiple recipients (announcement broadcasts go
 * out as one message addressed to every user).
 */

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

/// Admin email relay handler
pub mod handlers;

/// HTML bodies for each notification
pub mod templates;

/// Errors raised while building or delivering a message
#[derive(Debug, Error)]
pub enum EmailError {
    /// A recipient or sender address failed to parse
    #[error("invalid mailbox: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled
    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    /// The SMTP transport rejected the message
    #[error("smtp failure: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Async SMTP mailer
///
/// Built from environment configuration at startup; cheap to clone (the
/// underlying transport holds a connection pool).
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    admin_email: String,
}

impl Mailer {
    /// Build the mailer from `EMAIL_HOST`, `EMAIL_PORT`, `EMAIL_USER`,
    /// `EMAIL_PASS`, `EMAIL_FROM` and `ADMIN_EMAIL`.
    ///
    /// Returns `None` when the SMTP settings are missing or invalid; the
    /// server then runs with email disabled.
    pub fn from_env() -> Option<Mailer> {
        let host = match std::env::var("EMAIL_HOST") {
            Ok(host) => host,
            Err(_) => {
                tracing::warn!("EMAIL_HOST not set. Email notifications will be disabled.");
                return None;
            }
        };
        let user = std::env::var("EMAIL_USER").unwrap_or_default();
        let pass = std::env::var("EMAIL_PASS").unwrap_or_default();
        let port: u16 = std::env::var("EMAIL_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(587);
        let from = std::env::var("EMAIL_FROM")
            .unwrap_or_else(|_| format!("Northbridge Solutions <{}>", user));
        let admin_email =
            std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string());

        // Port 465 is implicit TLS; everything else starts plain and
        // upgrades via STARTTLS.
        let builder = if port == 465 {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&host)
        };

        let builder = match builder {
            Ok(builder) => builder,
            Err(e) => {
                tracing::error!("Failed to configure SMTP transport: {:?}", e);
                tracing::warn!("Email notifications will be disabled.");
                return None;
            }
        };

        let transport = builder
            .port(port)
            .credentials(Credentials::new(user, pass))
            .build();

        tracing::info!("SMTP mailer configured for {}:{}", host, port);

        Some(Mailer {
            transport,
            from,
            admin_email,
        })
    }

    /// Address that receives admin notifications (contact messages, new
    /// applications).
    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }

    /// Send one HTML message to one or more recipients.
    pub async fn send(
        &self,
        to: &[String],
        subject: &str,
        html: String,
    ) -> Result<(), EmailError> {
        let mut builder = Message::builder()
            .from(self.from.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_HTML);

        for recipient in to {
            builder = builder.to(recipient.parse()?);
        }

        let message = builder.body(html)?;

        tracing::debug!("sending email \"{}\" to {} recipient(s)", subject, to.len());
        self.transport.send(message).await?;

        Ok(())
    }
}
