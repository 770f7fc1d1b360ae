//! Order endpoint rejections.
//!
//! The store reports failures as typed values; this module maps each kind to
//! its status code and body shape at the HTTP boundary.

use salvo::{
    oapi::{Components, EndpointOutRegister, Operation},
    prelude::*,
};

use storefront_app::domain::store::StoreServiceError;

use crate::orders::validation::FieldErrors;

/// Checkout failure as rendered to the client.
#[derive(Debug)]
pub(crate) enum CheckoutRejection {
    /// Field validation failed; renders the field → message map.
    Invalid(FieldErrors),

    /// The store rejected the order (unknown item); renders the plain-text
    /// store message.
    Store(StoreServiceError),

    /// Infrastructure failure surfaced as a standard status error.
    Status(StatusError),
}

impl From<StatusError> for CheckoutRejection {
    fn from(error: StatusError) -> Self {
        Self::Status(error)
    }
}

#[async_trait]
impl Writer for CheckoutRejection {
    async fn write(self, req: &mut Request, depot: &mut Depot, res: &mut Response) {
        match self {
            Self::Invalid(violations) => {
                res.status_code(StatusCode::BAD_REQUEST);
                res.render(Json(violations));
            }
            Self::Store(error) => {
                res.status_code(StatusCode::BAD_REQUEST);
                res.render(Text::Plain(error.to_string()));
            }
            Self::Status(error) => error.write(req, depot, res).await,
        }
    }
}

impl EndpointOutRegister for CheckoutRejection {
    fn register(_components: &mut Components, operation: &mut Operation) {
        operation.responses.insert(
            StatusCode::BAD_REQUEST.as_str(),
            salvo::oapi::Response::new("Validation failed or unknown item"),
        );
    }
}

/// Order lookup failure as rendered to the client.
#[derive(Debug)]
pub(crate) enum OrderRejection {
    /// No order with the requested id; renders a 404 with an empty body.
    NotFound,

    /// Infrastructure failure surfaced as a standard status error.
    Status(StatusError),
}

impl From<StatusError> for OrderRejection {
    fn from(error: StatusError) -> Self {
        Self::Status(error)
    }
}

#[async_trait]
impl Writer for OrderRejection {
    async fn write(self, req: &mut Request, depot: &mut Depot, res: &mut Response) {
        match self {
            Self::NotFound => {
                res.status_code(StatusCode::NOT_FOUND);
                // Bare 404; absence carries no error page.
                res.render(Text::Plain(""));
            }
            Self::Status(error) => error.write(req, depot, res).await,
        }
    }
}

impl EndpointOutRegister for OrderRejection {
    fn register(_components: &mut Components, operation: &mut Operation) {
        operation.responses.insert(
            StatusCode::NOT_FOUND.as_str(),
            salvo::oapi::Response::new("No order with the given id"),
        );
    }
}
