use serde::Serialize;

use crate::passport::PassportElementError;

/// Tell a user that some of their Passport elements contain errors.
///
/// The user can't re-submit until every reported error is fixed.
#[derive(Clone, Debug, Serialize)]
pub struct SetPassportDataErrors {
    pub user_id: i64,
    pub errors:  Vec<PassportElementError>,
}

bot_method!(SetPassportDataErrors: "setPassportDataErrors" -> bool, required(errors));

impl SetPassportDataErrors {
    pub fn new(user_id: i64, errors: Vec<PassportElementError>) -> Self {
        Self { user_id, errors }
    }
}
