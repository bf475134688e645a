//! Order status vocabulary shared with the CRM backend
//!
//! Every status carries a numeric wire code (`statusId` on the backend) and
//! an uppercase label token (`statusCode`). Both assignments are stable and
//! bijective: codes are persisted with every order and must never be reused.
//! Declaration order is the canonical enumeration order used everywhere the
//! engine returns status sequences.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an order
///
/// Serializes as the uppercase label token (the form the backend exchanges
/// in payloads); the numeric wire code is available through [`Status::code`]
/// and [`TryFrom<u16>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum Status {
    /// Quote prepared for the client
    #[serde(rename = "COTIZADO")]
    Quoted = 1,
    /// Quote accepted and transmitted to fulfillment
    #[serde(rename = "TRANSMITIDO")]
    Transmitted = 2,
    /// Order being prepared
    #[serde(rename = "EN_CURSO")]
    InProgress = 3,
    /// Order left the warehouse
    #[serde(rename = "ENVIADO")]
    Shipped = 4,
    /// Order cancelled before shipping
    #[serde(rename = "CANCELADO")]
    Cancelled = 5,
}

impl Status {
    /// All statuses, in declaration order
    pub const ALL: [Status; 5] = [
        Status::Quoted,
        Status::Transmitted,
        Status::InProgress,
        Status::Shipped,
        Status::Cancelled,
    ];

    /// Get the numeric wire code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the uppercase label token
    pub const fn label(&self) -> &'static str {
        match self {
            Status::Quoted => "COTIZADO",
            Status::Transmitted => "TRANSMITIDO",
            Status::InProgress => "EN_CURSO",
            Status::Shipped => "ENVIADO",
            Status::Cancelled => "CANCELADO",
        }
    }

    /// Get the human-readable display name
    pub const fn display_name(&self) -> &'static str {
        match self {
            Status::Quoted => "Cotizado",
            Status::Transmitted => "Transmitido",
            Status::InProgress => "En Curso",
            Status::Shipped => "Enviado",
            Status::Cancelled => "Cancelado",
        }
    }

    /// Check whether this status has no outgoing transitions
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Status::Shipped)
    }

    /// Check whether an order in this status can still be cancelled
    #[inline]
    pub const fn is_cancellable(&self) -> bool {
        matches!(
            self,
            Status::Quoted | Status::Transmitted | Status::InProgress
        )
    }
}

impl From<Status> for u16 {
    #[inline]
    fn from(status: Status) -> Self {
        status.code()
    }
}

/// Error when converting from an invalid u16 to Status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidStatusCode(pub u16);

impl fmt::Display for InvalidStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid status code: {}", self.0)
    }
}

impl std::error::Error for InvalidStatusCode {}

impl TryFrom<u16> for Status {
    type Error = InvalidStatusCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Status::Quoted),
            2 => Ok(Status::Transmitted),
            3 => Ok(Status::InProgress),
            4 => Ok(Status::Shipped),
            5 => Ok(Status::Cancelled),
            _ => Err(InvalidStatusCode(value)),
        }
    }
}

/// Error when parsing an unrecognized status label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStatusLabel(pub String);

impl fmt::Display for InvalidStatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid status label: {}", self.0)
    }
}

impl std::error::Error for InvalidStatusLabel {}

impl FromStr for Status {
    type Err = InvalidStatusLabel;

    /// Parse the exact uppercase label token. Matching is case-sensitive:
    /// callers hold the token form, not free text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COTIZADO" => Ok(Status::Quoted),
            "TRANSMITIDO" => Ok(Status::Transmitted),
            "EN_CURSO" => Ok(Status::InProgress),
            "ENVIADO" => Ok(Status::Shipped),
            "CANCELADO" => Ok(Status::Cancelled),
            _ => Err(InvalidStatusLabel(s.to_string())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A status reference as callers supply it: numeric wire code or label token
///
/// CRM callers typically hold the label form while the rule table is keyed by
/// the canonical enum; engine operations accept either and resolve once at
/// the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusRef<'a> {
    /// Numeric wire code
    Code(u16),
    /// Uppercase label token
    Label(&'a str),
}

impl StatusRef<'_> {
    /// Resolve to the canonical status, if recognized
    pub fn resolve(self) -> Option<Status> {
        match self {
            StatusRef::Code(code) => Status::try_from(code).ok(),
            StatusRef::Label(label) => label.parse().ok(),
        }
    }
}

impl fmt::Display for StatusRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusRef::Code(code) => write!(f, "{}", code),
            StatusRef::Label(label) => write!(f, "{}", label),
        }
    }
}

impl<'a> From<Status> for StatusRef<'a> {
    fn from(status: Status) -> Self {
        StatusRef::Code(status.code())
    }
}

impl<'a> From<u16> for StatusRef<'a> {
    fn from(code: u16) -> Self {
        StatusRef::Code(code)
    }
}

impl<'a> From<&'a str> for StatusRef<'a> {
    fn from(label: &'a str) -> Self {
        StatusRef::Label(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Status::Quoted.code(), 1);
        assert_eq!(Status::Transmitted.code(), 2);
        assert_eq!(Status::InProgress.code(), 3);
        assert_eq!(Status::Shipped.code(), 4);
        assert_eq!(Status::Cancelled.code(), 5);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::Quoted.label(), "COTIZADO");
        assert_eq!(Status::Transmitted.label(), "TRANSMITIDO");
        assert_eq!(Status::InProgress.label(), "EN_CURSO");
        assert_eq!(Status::Shipped.label(), "ENVIADO");
        assert_eq!(Status::Cancelled.label(), "CANCELADO");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Status::Quoted.display_name(), "Cotizado");
        assert_eq!(Status::Transmitted.display_name(), "Transmitido");
        assert_eq!(Status::InProgress.display_name(), "En Curso");
        assert_eq!(Status::Shipped.display_name(), "Enviado");
        assert_eq!(Status::Cancelled.display_name(), "Cancelado");
    }

    #[test]
    fn test_all_declaration_order() {
        let codes: Vec<u16> = Status::ALL.iter().map(|s| s.code()).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(Status::try_from(1), Ok(Status::Quoted));
        assert_eq!(Status::try_from(3), Ok(Status::InProgress));
        assert_eq!(Status::try_from(5), Ok(Status::Cancelled));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(Status::try_from(0), Err(InvalidStatusCode(0)));
        assert_eq!(Status::try_from(6), Err(InvalidStatusCode(6)));
        assert_eq!(Status::try_from(9999), Err(InvalidStatusCode(9999)));
    }

    #[test]
    fn test_from_status_to_u16() {
        let code: u16 = Status::Quoted.into();
        assert_eq!(code, 1);

        let code: u16 = Status::Shipped.into();
        assert_eq!(code, 4);
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!("COTIZADO".parse(), Ok(Status::Quoted));
        assert_eq!("EN_CURSO".parse(), Ok(Status::InProgress));
        assert_eq!("CANCELADO".parse(), Ok(Status::Cancelled));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            "PAGADO".parse::<Status>(),
            Err(InvalidStatusLabel("PAGADO".to_string()))
        );
        // case-sensitive: the wire token is uppercase
        assert_eq!(
            "cotizado".parse::<Status>(),
            Err(InvalidStatusLabel("cotizado".to_string()))
        );
        assert!("".parse::<Status>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Status::Quoted), "COTIZADO");
        assert_eq!(format!("{}", Status::InProgress), "EN_CURSO");
    }

    #[test]
    fn test_is_terminal() {
        assert!(Status::Shipped.is_terminal());
        assert!(!Status::Quoted.is_terminal());
        assert!(!Status::Cancelled.is_terminal());
    }

    #[test]
    fn test_is_cancellable() {
        assert!(Status::Quoted.is_cancellable());
        assert!(Status::Transmitted.is_cancellable());
        assert!(Status::InProgress.is_cancellable());
        assert!(!Status::Shipped.is_cancellable());
        assert!(!Status::Cancelled.is_cancellable());
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&Status::Quoted).unwrap();
        assert_eq!(json, "\"COTIZADO\"");

        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"EN_CURSO\"");
    }

    #[test]
    fn test_deserialize() {
        let status: Status = serde_json::from_str("\"ENVIADO\"").unwrap();
        assert_eq!(status, Status::Shipped);

        let status: Status = serde_json::from_str("\"CANCELADO\"").unwrap();
        assert_eq!(status, Status::Cancelled);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<Status, _> = serde_json::from_str("\"PENDIENTE\"");
        assert!(result.is_err());

        let result: Result<Status, _> = serde_json::from_str("1");
        assert!(result.is_err());
    }

    #[test]
    fn test_status_ref_resolve() {
        assert_eq!(StatusRef::Code(1).resolve(), Some(Status::Quoted));
        assert_eq!(StatusRef::Label("ENVIADO").resolve(), Some(Status::Shipped));
        assert_eq!(StatusRef::Code(9999).resolve(), None);
        assert_eq!(StatusRef::Label("PAGADO").resolve(), None);
    }

    #[test]
    fn test_status_ref_display() {
        assert_eq!(format!("{}", StatusRef::Code(9999)), "9999");
        assert_eq!(format!("{}", StatusRef::Label("PAGADO")), "PAGADO");
    }

    #[test]
    fn test_status_ref_from() {
        assert_eq!(StatusRef::from(Status::InProgress), StatusRef::Code(3));
        assert_eq!(StatusRef::from(4u16), StatusRef::Code(4));
        assert_eq!(StatusRef::from("EN_CURSO"), StatusRef::Label("EN_CURSO"));
    }

    #[test]
    fn test_invalid_status_code_display() {
        let err = InvalidStatusCode(42);
        assert_eq!(format!("{}", err), "invalid status code: 42");
    }

    #[test]
    fn test_invalid_status_label_display() {
        let err = InvalidStatusLabel("PAGADO".to_string());
        assert_eq!(format!("{}", err), "invalid status label: PAGADO");
    }
}
