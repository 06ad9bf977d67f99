use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::{AppModule, BookStore};
use crate::response::TablePresenter;
use application::service::GetTableNameService;
use axum::extract::State;
use axum::routing::get;
use axum::Router;

pub trait TableRouter {
    fn route_table(self) -> Self;
}

impl<D: BookStore> TableRouter for Router<AppModule<D>> {
    fn route_table(self) -> Self {
        self.route(
            "/tables",
            get(|State(module): State<AppModule<D>>| async move {
                Controller::new((), TablePresenter)
                    .bypass(|| module.database().get_table_names())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
