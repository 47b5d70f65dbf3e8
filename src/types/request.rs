//! Prediction request data structures

use crate::error::RequestError;
use serde::{Deserialize, Serialize};

/// Upper bound shared by `card1`, `card2` and `TransactionAmt`
pub const AMOUNT_MAX: f64 = 20_000.0;
/// Upper bound of the billing zip code slider
pub const ADDR1_MAX: u16 = 500;
/// Upper bound of the billing country code slider
pub const ADDR2_MAX: u16 = 100;

/// A categorical field whose options are small integer codes
pub trait Coded: Copy + PartialEq + 'static {
    fn options() -> &'static [Self];
    fn code(self) -> u8;
    fn label(self) -> &'static str;
}

/// Declares a small categorical field encoded as an integer code.
///
/// Generates the enum, its code table, labels, and the integer conversions
/// used by serde so the wire format is the bare code.
macro_rules! coded_field {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident = $code:literal => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i64", into = "i64")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every option, in the order the form presents them
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Integer code the model was trained on
            pub fn code(self) -> u8 {
                match self {
                    $($name::$variant => $code),+
                }
            }

            /// Human readable label shown next to the code
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Legend line describing every code, e.g. `1: Credit | 2: Debit`
            pub fn legend() -> String {
                Self::ALL
                    .iter()
                    .map(|option| format!("{}: {}", option.code(), option.label()))
                    .collect::<Vec<_>>()
                    .join(" | ")
            }
        }

        impl Coded for $name {
            fn options() -> &'static [Self] {
                Self::ALL
            }

            fn code(self) -> u8 {
                $name::code(self)
            }

            fn label(self) -> &'static str {
                $name::label(self)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = RequestError;

            fn try_from(code: i64) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok($name::$variant),)+
                    _ => Err(RequestError::UnknownCode { field: $field, code }),
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> i64 {
                i64::from(value.code())
            }
        }
    };
}

coded_field! {
    /// Payment card network (`card4`)
    CardCategory, "card4" {
        Discover = 1 => "Discover",
        Mastercard = 2 => "Mastercard",
        AmericanExpress = 3 => "American Express",
        Visa = 4 => "Visa",
    }
}

coded_field! {
    /// Payment card type (`card6`)
    CardType, "card6" {
        Credit = 1 => "Credit",
        Debit = 2 => "Debit",
    }
}

coded_field! {
    /// Purchaser email domain (`P_emaildomain`)
    EmailDomain, "P_emaildomain" {
        Gmail = 0 => "Gmail (Google)",
        Outlook = 1 => "Outlook (Microsoft)",
        MailCom = 2 => "Mail.com",
        Others = 3 => "Others",
        Yahoo = 4 => "Yahoo",
    }
}

coded_field! {
    /// Product code (`ProductCD`)
    ProductCode, "ProductCD" {
        C = 0 => "C",
        H = 1 => "H",
        R = 2 => "R",
        S = 3 => "S",
        W = 4 => "W",
    }
}

coded_field! {
    /// Payment device type (`DeviceType`)
    DeviceType, "DeviceType" {
        Mobile = 1 => "Mobile",
        Desktop = 2 => "Desktop",
    }
}

/// The ten transaction attributes collected by the form.
///
/// Field names on the wire match the column names the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Payment card 1 amount (USD)
    pub card1: f64,

    /// Payment card 2 amount (USD)
    pub card2: f64,

    /// Payment card category
    pub card4: CardCategory,

    /// Payment card type
    pub card6: CardType,

    /// Billing zip code
    pub addr1: u16,

    /// Billing country code
    pub addr2: u16,

    /// Transaction amount (USD)
    #[serde(rename = "TransactionAmt")]
    pub transaction_amt: f64,

    /// Purchaser email domain
    #[serde(rename = "P_emaildomain")]
    pub p_emaildomain: EmailDomain,

    /// Product code
    #[serde(rename = "ProductCD")]
    pub product_cd: ProductCode,

    /// Payment device type
    #[serde(rename = "DeviceType")]
    pub device_type: DeviceType,
}

impl PredictionRequest {
    /// Check every field against its documented domain.
    pub fn validate(&self) -> Result<(), RequestError> {
        check_amount("card1", self.card1)?;
        check_amount("card2", self.card2)?;
        check_amount("TransactionAmt", self.transaction_amt)?;
        check_bound("addr1", self.addr1, ADDR1_MAX)?;
        check_bound("addr2", self.addr2, ADDR2_MAX)?;
        Ok(())
    }

    /// Validated copy of `self`
    pub fn validated(self) -> Result<Self, RequestError> {
        self.validate()?;
        Ok(self)
    }
}

impl Default for PredictionRequest {
    /// The form's initial state: zero amounts, sliders at minimum, first option everywhere.
    fn default() -> Self {
        Self {
            card1: 0.0,
            card2: 0.0,
            card4: CardCategory::Discover,
            card6: CardType::Credit,
            addr1: 0,
            addr2: 0,
            transaction_amt: 0.0,
            p_emaildomain: EmailDomain::Gmail,
            product_cd: ProductCode::C,
            device_type: DeviceType::Mobile,
        }
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<(), RequestError> {
    if value.is_finite() && (0.0..=AMOUNT_MAX).contains(&value) {
        Ok(())
    } else {
        Err(RequestError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: AMOUNT_MAX,
        })
    }
}

fn check_bound(field: &'static str, value: u16, max: u16) -> Result<(), RequestError> {
    if value <= max {
        Ok(())
    } else {
        Err(RequestError::OutOfRange {
            field,
            value: f64::from(value),
            min: 0.0,
            max: f64::from(max),
        })
    }
}
