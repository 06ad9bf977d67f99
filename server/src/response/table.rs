use crate::controller::Exhaust;
use axum::Json;

pub struct TablePresenter;

impl Exhaust<Vec<String>> for TablePresenter {
    type To = Json<Vec<String>>;
    fn emit(&self, input: Vec<String>) -> Self::To {
        Json::from(input)
    }
}
