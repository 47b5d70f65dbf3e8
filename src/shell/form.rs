//! Form definition and the state behind its controls

use crate::error::RequestError;
use crate::types::request::{
    CardCategory, CardType, DeviceType, EmailDomain, PredictionRequest, ProductCode, ADDR1_MAX,
    ADDR2_MAX, AMOUNT_MAX,
};

pub const TITLE: &str = "Financial Transaction Fraud Prediction ML Web App 💰";
pub const SIDEBAR_TITLE: &str = "Financial Transaction Fraud Prediction System 🕵️";
pub const SIDEBAR_SUBTITLE: &str = "Choose the Below Parameters to Predict a Transaction";
pub const PREDICT_BUTTON: &str = "Click Here To Predict";

/// Kind of control used for a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    /// Integer-stepped number box
    Number { max: f64 },
    /// Slider from 0 to `max`
    Slider { max: u16 },
    /// Inline radio buttons
    Radio,
    /// Drop-down select
    Select,
}

/// One form control: its label, widget and optional code legend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub control: Control,
}

/// Controls in the order the sidebar shows them
pub const FIELDS: [FieldSpec; 10] = [
    FieldSpec {
        name: "TransactionAmt",
        label: "Transaction Amount (USD)",
        control: Control::Number { max: AMOUNT_MAX },
    },
    FieldSpec {
        name: "card1",
        label: "Payment Card 1 Amount (USD)",
        control: Control::Number { max: AMOUNT_MAX },
    },
    FieldSpec {
        name: "card2",
        label: "Payment Card 2 Amount (USD)",
        control: Control::Number { max: AMOUNT_MAX },
    },
    FieldSpec {
        name: "card4",
        label: "Payment Card Category",
        control: Control::Radio,
    },
    FieldSpec {
        name: "card6",
        label: "Payment Card Type",
        control: Control::Radio,
    },
    FieldSpec {
        name: "addr1",
        label: "Billing Zip Code",
        control: Control::Slider { max: ADDR1_MAX },
    },
    FieldSpec {
        name: "addr2",
        label: "Billing Country Code",
        control: Control::Slider { max: ADDR2_MAX },
    },
    FieldSpec {
        name: "P_emaildomain",
        label: "Purchaser Email Domain",
        control: Control::Select,
    },
    FieldSpec {
        name: "ProductCD",
        label: "Product Code",
        control: Control::Select,
    },
    FieldSpec {
        name: "DeviceType",
        label: "Payment Device Type",
        control: Control::Radio,
    },
];

/// Look up a control by field name
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.name == name)
}

/// Code legend for a categorical field
pub fn legend(name: &str) -> Option<String> {
    match name {
        "card4" => Some(CardCategory::legend()),
        "card6" => Some(CardType::legend()),
        "P_emaildomain" => Some(EmailDomain::legend()),
        "ProductCD" => Some(ProductCode::legend()),
        "DeviceType" => Some(DeviceType::legend()),
        _ => None,
    }
}

/// Current values of every control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormState {
    pub transaction_amt: f64,
    pub card1: f64,
    pub card2: f64,
    pub card4: CardCategory,
    pub card6: CardType,
    pub addr1: u16,
    pub addr2: u16,
    pub p_emaildomain: EmailDomain,
    pub product_cd: ProductCode,
    pub device_type: DeviceType,
}

impl FormState {
    /// Snapshot the controls as a validated request.
    pub fn to_request(&self) -> Result<PredictionRequest, RequestError> {
        PredictionRequest {
            card1: self.card1,
            card2: self.card2,
            card4: self.card4,
            card6: self.card6,
            addr1: self.addr1,
            addr2: self.addr2,
            transaction_amt: self.transaction_amt,
            p_emaildomain: self.p_emaildomain,
            product_cd: self.product_cd,
            device_type: self.device_type,
        }
        .validated()
    }
}

impl Default for FormState {
    fn default() -> Self {
        let request = PredictionRequest::default();
        Self {
            transaction_amt: request.transaction_amt,
            card1: request.card1,
            card2: request.card2,
            card4: request.card4,
            card6: request.card6,
            addr1: request.addr1,
            addr2: request.addr2,
            p_emaildomain: request.p_emaildomain,
            product_cd: request.product_cd,
            device_type: request.device_type,
        }
    }
}
