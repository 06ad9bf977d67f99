use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::{AppModule, BookStore};
use crate::request::{
    BookTransformer, CreateBookRequest, DeleteBookRequest, GetBookRequest, UpdateBookRequest,
};
use crate::response::{BookPresenter, CreatedBookPresenter};
use application::service::{
    CreateBookService, DeleteBookService, GetBookService, UpdateBookService,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl<D: BookStore> BookRouter for Router<AppModule<D>> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(|State(module): State<AppModule<D>>| async move {
                Controller::new((), BookPresenter)
                    .bypass(|| module.database().get_all_books())
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule<D>>,
                 req: Result<Json<CreateBookRequest>, JsonRejection>| async move {
                    let req = match req {
                        Ok(Json(req)) => req,
                        Err(rejection) => return Err(ErrorStatus::from(rejection)),
                    };
                    Controller::new(BookTransformer, CreatedBookPresenter)
                        .intake(req)
                        .handle(|dto| module.database().create_book(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/:id",
            get(
                |State(module): State<AppModule<D>>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(GetBookRequest::new(id))
                        .handle(|dto| module.database().get_book(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(module): State<AppModule<D>>,
                 Path(id): Path<String>,
                 req: Result<Json<UpdateBookRequest>, JsonRejection>| async move {
                    let req = match req {
                        Ok(Json(req)) => req,
                        Err(rejection) => return Err(ErrorStatus::from(rejection)),
                    };
                    Controller::new(BookTransformer, BookPresenter)
                        .intake((id, req))
                        .handle(|dto| module.database().update_book(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule<D>>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(DeleteBookRequest::new(id))
                        .handle(|dto| module.database().delete_book(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
