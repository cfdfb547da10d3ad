//! Routes validated inquiries to their collection.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::inquiry::{parse_inquiry, FormType, Inquiry};
use crate::response::{ActionResponse, MSG_UNEXPECTED};
use crate::store::{to_body, Collection, DocumentStore, StoredDocument};

pub const MSG_SUBMITTED: &str = "Form submitted successfully!";

/// Destination collection for each form type.
pub fn collection_for(form_type: FormType) -> Collection {
    match form_type {
        FormType::Donate => Collection::Donors,
        FormType::Volunteer => Collection::Volunteers,
        FormType::Partner => Collection::Partners,
        FormType::Contact => Collection::Contacts,
    }
}

/// Split an inquiry into its destination and the document to store.
/// The discriminator is implied by the collection and not written.
fn into_document(inquiry: &Inquiry) -> Result<(Collection, Value)> {
    let body = match inquiry {
        Inquiry::Donate(form) => to_body(form)?,
        Inquiry::Volunteer(form) => to_body(form)?,
        Inquiry::Partner(form) => to_body(form)?,
        Inquiry::Contact(form) => to_body(form)?,
    };
    Ok((collection_for(inquiry.form_type()), body))
}

/// Anything that accepts a validated inquiry for persistence.
#[async_trait]
pub trait InquirySink: Send + Sync {
    async fn submit(&self, inquiry: Inquiry) -> ActionResponse;
}

#[derive(Clone)]
pub struct SubmissionRouter {
    store: Arc<dyn DocumentStore>,
}

impl SubmissionRouter {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Insert exactly one document for the inquiry.
    pub async fn persist(&self, inquiry: &Inquiry) -> Result<StoredDocument> {
        let (collection, body) = into_document(inquiry)?;
        let document = self.store.create(collection, body).await?;
        info!(
            form_type = %inquiry.form_type(),
            collection = %collection,
            id = %document.id,
            "Inquiry stored"
        );
        Ok(document)
    }

    /// Validate an untyped payload and store it.
    pub async fn handle_form(&self, payload: &Value) -> ActionResponse {
        match parse_inquiry(payload) {
            Ok(inquiry) => self.submit(inquiry).await,
            Err(errors) => {
                warn!(errors = %errors, "Rejected inquiry submission");
                ActionResponse::invalid(errors)
            }
        }
    }
}

#[async_trait]
impl InquirySink for SubmissionRouter {
    async fn submit(&self, inquiry: Inquiry) -> ActionResponse {
        match self.persist(&inquiry).await {
            Ok(_) => ActionResponse::ok(MSG_SUBMITTED),
            Err(e) => {
                error!(form_type = %inquiry.form_type(), "Failed to store inquiry: {:#}", e);
                ActionResponse::failed(MSG_UNEXPECTED)
            }
        }
    }
}
