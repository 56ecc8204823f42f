//! Payment and invoicing methods.

use serde::Serialize;

use crate::Method;
use crate::chat::{ChatRef, Message};
use crate::markup::InlineKeyboardMarkup;
use crate::payments::{LabeledPrice, ShippingOption};
use crate::validate::{Validate, ValidationErrors};

// ─── SendInvoice ─────────────────────────────────────────────────────────────

/// Send an invoice message to a chat.
///
/// For Telegram Stars payments leave `provider_token` unset and use the
/// `XTR` currency.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendInvoice {
    pub chat_id: ChatRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    pub title: String,
    pub description: String,
    /// Bot-internal identifier echoed back in payment updates.
    /// Never shown to the user.
    pub payload: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_token: Option<String>,
    pub currency: String,
    pub prices: Vec<LabeledPrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tip_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_tip_amounts: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_parameter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_phone_number: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_shipping_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_flexible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl SendInvoice {
    pub fn new(
        chat_id: impl Into<ChatRef>,
        title: impl Into<String>,
        description: impl Into<String>,
        payload: impl Into<String>,
        currency: impl Into<String>,
        prices: Vec<LabeledPrice>,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_thread_id: None,
            title: title.into(),
            description: description.into(),
            payload: payload.into(),
            provider_token: None,
            currency: currency.into(),
            prices,
            max_tip_amount: None,
            suggested_tip_amounts: None,
            start_parameter: None,
            photo_url: None,
            photo_size: None,
            photo_width: None,
            photo_height: None,
            need_name: None,
            need_phone_number: None,
            need_email: None,
            need_shipping_address: None,
            is_flexible: None,
            disable_notification: None,
            protect_content: None,
            reply_markup: None,
        }
    }

    pub fn provider_token(mut self, token: impl Into<String>) -> Self {
        self.provider_token = Some(token.into()); self
    }

    /// Highest accepted tip, in the smallest units of the currency.
    pub fn max_tip_amount(mut self, amount: i64) -> Self {
        self.max_tip_amount = Some(amount); self
    }

    /// Tip presets shown to the payer. At most 4, strictly increasing.
    pub fn suggested_tip_amounts(mut self, amounts: Vec<i64>) -> Self {
        self.suggested_tip_amounts = Some(amounts); self
    }

    pub fn photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into()); self
    }

    pub fn reply_markup(mut self, markup: InlineKeyboardMarkup) -> Self {
        self.reply_markup = Some(markup); self
    }
}

impl Validate for SendInvoice {
    fn check(&self, errors: &mut ValidationErrors) {
        self.chat_id.check(errors);
        errors.char_bounds("title", &self.title, 1, 32);
        errors.char_bounds("description", &self.description, 1, 255);
        errors.byte_bounds("payload", &self.payload, 1, 128);
        errors.non_empty("currency", &self.currency);
        if self.prices.is_empty() {
            errors.push("prices", "must not be empty");
        }
        errors.nested_each("prices", &self.prices);
        if let Some(tips) = &self.suggested_tip_amounts {
            errors.tip_amounts("suggested_tip_amounts", tips, self.max_tip_amount);
        }
        if let Some(markup) = &self.reply_markup {
            errors.nested("reply_markup", markup);
        }
    }
}

impl Method for SendInvoice {
    type Return = Message;
    const ENDPOINT: &'static str = "sendInvoice";
}

// ─── CreateInvoiceLink ───────────────────────────────────────────────────────

/// Create a shareable link paying for the described invoice.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateInvoiceLink {
    pub title: String,
    pub description: String,
    pub payload: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_token: Option<String>,
    pub currency: String,
    pub prices: Vec<LabeledPrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tip_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_tip_amounts: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_phone_number: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_shipping_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_flexible: Option<bool>,
}

impl CreateInvoiceLink {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        payload: impl Into<String>,
        currency: impl Into<String>,
        prices: Vec<LabeledPrice>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            payload: payload.into(),
            provider_token: None,
            currency: currency.into(),
            prices,
            max_tip_amount: None,
            suggested_tip_amounts: None,
            need_name: None,
            need_phone_number: None,
            need_email: None,
            need_shipping_address: None,
            is_flexible: None,
        }
    }

    pub fn provider_token(mut self, token: impl Into<String>) -> Self {
        self.provider_token = Some(token.into()); self
    }

    pub fn max_tip_amount(mut self, amount: i64) -> Self {
        self.max_tip_amount = Some(amount); self
    }

    pub fn suggested_tip_amounts(mut self, amounts: Vec<i64>) -> Self {
        self.suggested_tip_amounts = Some(amounts); self
    }
}

impl Validate for CreateInvoiceLink {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.char_bounds("title", &self.title, 1, 32);
        errors.char_bounds("description", &self.description, 1, 255);
        errors.byte_bounds("payload", &self.payload, 1, 128);
        errors.non_empty("currency", &self.currency);
        if self.prices.is_empty() {
            errors.push("prices", "must not be empty");
        }
        errors.nested_each("prices", &self.prices);
        if let Some(tips) = &self.suggested_tip_amounts {
            errors.tip_amounts("suggested_tip_amounts", tips, self.max_tip_amount);
        }
    }
}

impl Method for CreateInvoiceLink {
    type Return = String;
    const ENDPOINT: &'static str = "createInvoiceLink";
}

// ─── AnswerShippingQuery ─────────────────────────────────────────────────────

/// Reply to a shipping query for a flexible-price invoice.
///
/// `ok == true` requires the shipping options; `ok == false` requires the
/// error message shown to the user.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnswerShippingQuery {
    pub shipping_query_id: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_options: Option<Vec<ShippingOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl AnswerShippingQuery {
    /// Accept, offering the given shipping options.
    pub fn accept(id: impl Into<String>, options: Vec<ShippingOption>) -> Self {
        Self {
            shipping_query_id: id.into(),
            ok: true,
            shipping_options: Some(options),
            error_message: None,
        }
    }

    /// Decline with a message shown to the user.
    pub fn decline(id: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            shipping_query_id: id.into(),
            ok: false,
            shipping_options: None,
            error_message: Some(error_message.into()),
        }
    }
}

impl Validate for AnswerShippingQuery {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.non_empty("shipping_query_id", &self.shipping_query_id);
        if self.ok {
            match &self.shipping_options {
                Some(options) => {
                    if options.is_empty() {
                        errors.push("shipping_options", "must not be empty");
                    }
                    errors.nested_each("shipping_options", options);
                }
                None => errors.push("shipping_options", "required when ok is true"),
            }
        } else if self.error_message.is_none() {
            errors.push("error_message", "required when ok is false");
        }
    }
}

impl Method for AnswerShippingQuery {
    type Return = bool;
    const ENDPOINT: &'static str = "answerShippingQuery";
}

// ─── AnswerPreCheckoutQuery ──────────────────────────────────────────────────

/// Final confirmation of a checkout. Must be answered within 10 seconds of
/// receiving the pre-checkout query.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnswerPreCheckoutQuery {
    pub pre_checkout_query_id: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl AnswerPreCheckoutQuery {
    pub fn accept(id: impl Into<String>) -> Self {
        Self { pre_checkout_query_id: id.into(), ok: true, error_message: None }
    }

    pub fn decline(id: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            pre_checkout_query_id: id.into(),
            ok: false,
            error_message: Some(error_message.into()),
        }
    }
}

impl Validate for AnswerPreCheckoutQuery {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.non_empty("pre_checkout_query_id", &self.pre_checkout_query_id);
        if !self.ok && self.error_message.is_none() {
            errors.push("error_message", "required when ok is false");
        }
    }
}

impl Method for AnswerPreCheckoutQuery {
    type Return = bool;
    const ENDPOINT: &'static str = "answerPreCheckoutQuery";
}

// ─── RefundStarPayment ───────────────────────────────────────────────────────

/// Refund a successful Telegram Stars payment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RefundStarPayment {
    pub user_id: i64,
    pub telegram_payment_charge_id: String,
}

impl RefundStarPayment {
    pub fn new(user_id: i64, charge_id: impl Into<String>) -> Self {
        Self { user_id, telegram_payment_charge_id: charge_id.into() }
    }
}

impl Validate for RefundStarPayment {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.at_least("user_id", self.user_id, 1);
        errors.non_empty("telegram_payment_charge_id", &self.telegram_payment_charge_id);
    }
}

impl Method for RefundStarPayment {
    type Return = bool;
    const ENDPOINT: &'static str = "refundStarPayment";
}
