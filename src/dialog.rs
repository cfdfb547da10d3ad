//! Inquiry dialog: the multi-step flow behind the Donate, Volunteer and
//! Partner buttons.
//!
//! ```text
//!            submit (Donate)            confirm_payment ok
//!   Form ─────────────────────▶ Payment ─────────────────▶ Confirmation
//!    │ ▲                          │ failed
//!    │ └──────────────────────────┘
//!    │ submit ok (Volunteer/Partner)
//!    ▼
//!   Closing ◀──── close() from any state
//!    │ finish_closing()
//!    ▼
//!   Form (cleared)
//! ```
//!
//! Payment is simulated: choosing a method resubmits the validated draft
//! through the same sink; no processor is contacted.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::inquiry::{parse_inquiry_as, DonationForm, FieldErrors, FormType, Inquiry};
use crate::notify::Toast;
use crate::submission::InquirySink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DialogKind {
    Donate,
    Volunteer,
    Partner,
}

impl DialogKind {
    pub fn form_type(self) -> FormType {
        match self {
            DialogKind::Donate => FormType::Donate,
            DialogKind::Volunteer => FormType::Volunteer,
            DialogKind::Partner => FormType::Partner,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentMethod {
    Upi,
    Card,
    NetBanking,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Upi,
        PaymentMethod::Card,
        PaymentMethod::NetBanking,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI / QR Code",
            PaymentMethod::Card => "Credit Card",
            PaymentMethod::NetBanking => "Net Banking",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogState {
    Form,
    /// Donation validated, waiting for a payment method.
    Payment { draft: DonationForm },
    Confirmation,
    /// Dismissed; `finish_closing` returns to a cleared form.
    Closing,
}

impl DialogState {
    fn name(&self) -> &'static str {
        match self {
            DialogState::Form => "form",
            DialogState::Payment { .. } => "payment",
            DialogState::Confirmation => "confirmation",
            DialogState::Closing => "closing",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum DialogError {
    #[error("a submission is already in progress")]
    Busy,
    #[error("cannot {action} while the dialog is in the {state} step")]
    WrongStep {
        action: &'static str,
        state: &'static str,
    },
    #[error(transparent)]
    Invalid(#[from] FieldErrors),
}

pub const TOAST_SUCCESS_TITLE: &str = "Submission Successful!";
pub const TOAST_SUCCESS_DESCRIPTION: &str =
    "Thank you for reaching out. We will get back to you soon.";
pub const TOAST_ERROR_TITLE: &str = "Error";
pub const TOAST_ERROR_DESCRIPTION: &str = "Something went wrong. Please try again.";
pub const TOAST_PAYMENT_ERROR_DESCRIPTION: &str =
    "Something went wrong with the submission. Please try again.";

pub struct InquiryDialog<S: InquirySink> {
    kind: DialogKind,
    sink: S,
    state: DialogState,
    submitting: bool,
    toasts: Vec<Toast>,
}

impl<S: InquirySink> InquiryDialog<S> {
    pub fn new(kind: DialogKind, sink: S) -> Self {
        Self {
            kind,
            sink,
            state: DialogState::Form,
            submitting: false,
            toasts: Vec::new(),
        }
    }

    pub fn kind(&self) -> DialogKind {
        self.kind
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    /// Drives the disabled state of the submit control.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn take_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    pub fn title(&self) -> &'static str {
        match (self.kind, &self.state) {
            (DialogKind::Donate, DialogState::Payment { .. }) => "Complete Your Donation",
            (DialogKind::Donate, DialogState::Confirmation) => "Thank You!",
            (DialogKind::Donate, _) => "Donate",
            (DialogKind::Volunteer, _) => "Volunteer",
            (DialogKind::Partner, _) => "Corporate Partnership",
        }
    }

    pub fn description(&self) -> String {
        match (self.kind, &self.state) {
            (DialogKind::Donate, DialogState::Payment { draft }) => format!(
                "You are donating ${}. Please choose your preferred payment method.",
                draft.amount
            ),
            (DialogKind::Donate, DialogState::Confirmation) => {
                "Your donation has been processed successfully. Thank you for your generosity!"
                    .to_string()
            }
            _ => "Please fill out the form below. We appreciate your interest and support."
                .to_string(),
        }
    }

    /// Label of the primary button for the current step.
    pub fn submit_label(&self) -> &'static str {
        match (&self.state, self.submitting) {
            (DialogState::Payment { .. }, true) => "Processing...",
            (DialogState::Payment { .. }, false) => "I have paid",
            (_, true) => "Submitting...",
            _ if self.kind == DialogKind::Donate => "Proceed to Payment",
            _ => "Submit",
        }
    }

    fn wrong_step(&self, action: &'static str) -> DialogError {
        DialogError::WrongStep {
            action,
            state: self.state.name(),
        }
    }

    /// Submit the form step. Donations move on to payment; the other kinds
    /// are sent straight away.
    pub async fn submit(&mut self, fields: &Value) -> Result<&DialogState, DialogError> {
        if self.submitting {
            return Err(DialogError::Busy);
        }
        if self.state != DialogState::Form {
            return Err(self.wrong_step("submit"));
        }

        let inquiry = match parse_inquiry_as(self.kind.form_type(), fields)? {
            Inquiry::Donate(draft) => {
                self.state = DialogState::Payment { draft };
                return Ok(&self.state);
            }
            other => other,
        };

        self.submitting = true;
        let response = self.sink.submit(inquiry).await;
        self.submitting = false;

        if response.success {
            info!(kind = ?self.kind, "Inquiry submitted from dialog");
            self.toasts
                .push(Toast::success(TOAST_SUCCESS_TITLE, TOAST_SUCCESS_DESCRIPTION));
            self.state = DialogState::Closing;
        } else {
            warn!(kind = ?self.kind, message = %response.message, "Dialog submission failed");
            self.toasts
                .push(Toast::error(TOAST_ERROR_TITLE, TOAST_ERROR_DESCRIPTION));
        }
        Ok(&self.state)
    }

    /// Simulated payment: record the donation and show the confirmation.
    pub async fn confirm_payment(
        &mut self,
        method: PaymentMethod,
    ) -> Result<&DialogState, DialogError> {
        if self.submitting {
            return Err(DialogError::Busy);
        }
        let DialogState::Payment { draft } = &self.state else {
            return Err(self.wrong_step("confirm payment"));
        };
        let draft = draft.clone();

        info!(method = method.label(), amount = draft.amount, "Processing simulated payment");
        self.submitting = true;
        let response = self.sink.submit(Inquiry::Donate(draft)).await;
        self.submitting = false;

        if response.success {
            self.state = DialogState::Confirmation;
        } else {
            warn!(message = %response.message, "Donation could not be recorded");
            self.toasts
                .push(Toast::error(TOAST_ERROR_TITLE, TOAST_PAYMENT_ERROR_DESCRIPTION));
            self.state = DialogState::Form;
        }
        Ok(&self.state)
    }

    /// Dismiss the dialog from any step. A dispatched submission is not
    /// recalled.
    pub fn close(&mut self) {
        self.state = DialogState::Closing;
    }

    /// Exit action of `Closing`: back to an empty form.
    pub fn finish_closing(&mut self) {
        if self.state == DialogState::Closing {
            self.state = DialogState::Form;
            self.submitting = false;
        }
    }
}
